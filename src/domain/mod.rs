//! Domain aggregates exposed by the reservation service layer.

pub mod reservation;
pub mod types;
