use crate::domain::reservation::{NewReservation, Reservation};
use crate::domain::types::ReservationStatus;
use crate::repository::errors::RepositoryResult;

pub mod errors;
#[cfg(feature = "test-mocks")]
pub mod mock;
pub mod reservation;

pub use reservation::DieselRepository;

/// Filter criteria for listing reservations. With no filter set this is a
/// full scan; `status` and `name` are exact-match filters.
#[derive(Debug, Clone, Default)]
pub struct ReservationListQuery {
    pub status: Option<ReservationStatus>,
    pub name: Option<String>,
}

impl ReservationListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(mut self, status: ReservationStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

pub trait ReservationReader {
    /// Point lookup by identifier. `Ok(None)` when no such record exists.
    fn get_by_id(&self, id: i32) -> RepositoryResult<Option<Reservation>>;
    /// Lists records matching the query, insertion order not guaranteed.
    fn list(&self, query: ReservationListQuery) -> RepositoryResult<Vec<Reservation>>;
}

pub trait ReservationWriter {
    /// Persists a new record, allocating the next identifier inside the same
    /// transaction as the insert.
    fn create(&self, new: &NewReservation) -> RepositoryResult<Reservation>;
    /// Overwrites only the status of an existing record and returns the
    /// updated row. Fails with `NotFound` when the id does not exist.
    fn set_status(&self, id: i32, status: Option<ReservationStatus>)
    -> RepositoryResult<Reservation>;
}
