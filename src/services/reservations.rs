//! Lifecycle operations for reservation records: identifier assignment,
//! validated creation, status updates and multi-criterion lookup.

use validator::Validate;

use crate::domain::reservation::{NewReservation, Reservation};
use crate::domain::types::{ReservationId, ReservationStatus};
use crate::dto::reservations::ReservationPayload;
use crate::repository::errors::RepositoryError;
use crate::repository::{ReservationListQuery, ReservationReader, ReservationWriter};
use crate::services::{ServiceError, ServiceResult};

fn not_found_by_id(id: ReservationId) -> ServiceError {
    ServiceError::NotFound(format!("Reserva no encontrada con ID: {id}"))
}

/// Returns every persisted reservation.
pub fn list_reservations<R>(repo: &R) -> ServiceResult<Vec<Reservation>>
where
    R: ReservationReader + ?Sized,
{
    repo.list(ReservationListQuery::new())
        .map_err(ServiceError::from)
}

/// Fetches a single reservation by its identifier.
pub fn get_reservation<R>(repo: &R, id: i32) -> ServiceResult<Reservation>
where
    R: ReservationReader + ?Sized,
{
    let id = ReservationId::new(id)?;
    repo.get_by_id(id.get())
        .map_err(ServiceError::from)?
        .ok_or_else(|| not_found_by_id(id))
}

/// Lists reservations carrying the given status.
///
/// An empty match is reported as `NotFound` rather than an empty list; this
/// mirrors the contract the existing API consumers rely on.
pub fn list_by_status<R>(repo: &R, status: ReservationStatus) -> ServiceResult<Vec<Reservation>>
where
    R: ReservationReader + ?Sized,
{
    let found = repo
        .list(ReservationListQuery::new().status(status))
        .map_err(ServiceError::from)?;

    if found.is_empty() {
        return Err(ServiceError::NotFound(format!(
            "Estado de la reserva no encontrado: {status}"
        )));
    }
    Ok(found)
}

/// Lists reservations whose patient name matches exactly. Unlike the status
/// lookup, no match is an empty list.
pub fn list_by_name<R>(repo: &R, name: &str) -> ServiceResult<Vec<Reservation>>
where
    R: ReservationReader + ?Sized,
{
    let name = name.trim();
    if name.is_empty() {
        return Err(ServiceError::Validation(
            "El nombre de usuario no puede estar vacio".into(),
        ));
    }
    repo.list(ReservationListQuery::new().name(name))
        .map_err(ServiceError::from)
}

/// Runs the payload through the validation boundary, stamps the creation
/// date when the caller supplied none, and persists the record. The store
/// allocates `max(id) + 1` (or 1 on an empty store) in the same transaction
/// as the insert.
pub fn create_reservation<R>(repo: &R, payload: &ReservationPayload) -> ServiceResult<Reservation>
where
    R: ReservationWriter + ?Sized,
{
    payload.validate()?;
    let new = NewReservation::try_from(payload)?;

    repo.create(&new).map_err(|err| {
        log::error!("Failed to create reservation: {err}");
        ServiceError::Internal(err.to_string())
    })
}

/// Overwrites only the status of an existing reservation with the status
/// carried by the payload. Every other payload field is ignored; the stored
/// record keeps its original values.
pub fn update_reservation_status<R>(
    repo: &R,
    id: i32,
    payload: &ReservationPayload,
) -> ServiceResult<Reservation>
where
    R: ReservationWriter + ?Sized,
{
    let id = ReservationId::new(id)?;
    let status = payload
        .res_status
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::parse::<ReservationStatus>)
        .transpose()?;

    match repo.set_status(id.get(), status) {
        Ok(updated) => Ok(updated),
        Err(RepositoryError::NotFound) => Err(not_found_by_id(id)),
        Err(err) => {
            log::error!("Failed to update reservation {id}: {err}");
            Err(err.into())
        }
    }
}
