//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::reservation::{NewReservation, Reservation};
use crate::domain::types::ReservationStatus;
use crate::repository::errors::RepositoryResult;
use crate::repository::{ReservationListQuery, ReservationReader, ReservationWriter};

mock! {
    pub Repository {}

    impl ReservationReader for Repository {
        fn get_by_id(&self, id: i32) -> RepositoryResult<Option<Reservation>>;
        fn list(&self, query: ReservationListQuery) -> RepositoryResult<Vec<Reservation>>;
    }

    impl ReservationWriter for Repository {
        fn create(&self, new: &NewReservation) -> RepositoryResult<Reservation>;
        fn set_status(
            &self,
            id: i32,
            status: Option<ReservationStatus>,
        ) -> RepositoryResult<Reservation>;
    }
}
