//! Database models shared across the reservation repository.

pub mod config;
pub mod reservation;
