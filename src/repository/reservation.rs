use diesel::prelude::*;

use crate::db::DbPool;
use crate::domain::reservation::{NewReservation, Reservation};
use crate::domain::types::ReservationStatus;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{ReservationListQuery, ReservationReader, ReservationWriter};

/// Diesel implementation of the reservation store.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Next identifier for a reservation: one more than the current maximum id,
/// or 1 when the table is empty. Must run inside the same transaction as the
/// insert so that two concurrent creates cannot observe the same maximum.
fn next_reservation_id(conn: &mut SqliteConnection) -> QueryResult<i32> {
    use crate::schema::reservations;

    let max_id: Option<i32> = reservations::table
        .select(diesel::dsl::max(reservations::id))
        .first(conn)?;

    Ok(max_id.unwrap_or(0) + 1)
}

impl ReservationReader for DieselRepository {
    fn get_by_id(&self, id: i32) -> RepositoryResult<Option<Reservation>> {
        use crate::models::reservation::Reservation as DbReservation;
        use crate::schema::reservations;

        let mut conn = self.pool.get()?;
        let row = reservations::table
            .find(id)
            .first::<DbReservation>(&mut conn)
            .optional()?;

        row.map(Reservation::try_from)
            .transpose()
            .map_err(RepositoryError::from)
    }

    fn list(&self, query: ReservationListQuery) -> RepositoryResult<Vec<Reservation>> {
        use crate::models::reservation::Reservation as DbReservation;
        use crate::schema::reservations;

        let mut conn = self.pool.get()?;

        let mut stmt = reservations::table.into_boxed();
        if let Some(status) = query.status {
            stmt = stmt.filter(reservations::res_status.eq(Some(status.as_str().to_string())));
        }
        if let Some(name) = query.name {
            stmt = stmt.filter(reservations::name.eq(name));
        }

        stmt.order(reservations::id.asc())
            .load::<DbReservation>(&mut conn)?
            .into_iter()
            .map(|row| Reservation::try_from(row).map_err(RepositoryError::from))
            .collect()
    }
}

impl ReservationWriter for DieselRepository {
    fn create(&self, new: &NewReservation) -> RepositoryResult<Reservation> {
        use crate::models::reservation::{
            NewReservation as DbNewReservation, Reservation as DbReservation,
        };
        use crate::schema::reservations;

        let mut conn = self.pool.get()?;

        let row = conn.immediate_transaction::<DbReservation, diesel::result::Error, _>(|conn| {
            let id = next_reservation_id(conn)?;
            let insertable = DbNewReservation::from_domain(id, new);
            diesel::insert_into(reservations::table)
                .values(&insertable)
                .get_result::<DbReservation>(conn)
        })?;

        Reservation::try_from(row).map_err(RepositoryError::from)
    }

    fn set_status(
        &self,
        id: i32,
        status: Option<ReservationStatus>,
    ) -> RepositoryResult<Reservation> {
        use crate::models::reservation::Reservation as DbReservation;
        use crate::schema::reservations;

        let mut conn = self.pool.get()?;

        let row = diesel::update(reservations::table.find(id))
            .set(reservations::res_status.eq(status.map(|s| s.as_str().to_string())))
            .get_result::<DbReservation>(&mut conn)?;

        Reservation::try_from(row).map_err(RepositoryError::from)
    }
}
