use actix_web::{HttpResponse, Responder, get, post, put, web};
use log::error;
use serde::Deserialize;

use crate::domain::types::ReservationStatus;
use crate::dto::reservations::{ReservationPayload, ReservationsEnvelope};
use crate::repository::DieselRepository;
use crate::routes::{mutation_error_response, query_error_response};
use crate::services::ServiceError;
use crate::services::reservations as service;

#[derive(Deserialize)]
struct ReservationQueryParams {
    q: Option<String>,
}

/// `GET /Res` — single search box over three criteria: blank for everything,
/// a number for lookup by id, a status literal for the status filter. Any
/// other criterion is rejected as invalid input.
#[get("/Res")]
pub async fn get_reservations(
    params: web::Query<ReservationQueryParams>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let q = params.q.as_deref().unwrap_or("").trim();

    let result = if q.is_empty() {
        service::list_reservations(repo.get_ref())
    } else if let Ok(id) = q.parse::<i32>() {
        service::get_reservation(repo.get_ref(), id).map(|r| vec![r])
    } else if let Ok(status) = q.parse::<ReservationStatus>() {
        service::list_by_status(repo.get_ref(), status)
    } else {
        Err(ServiceError::Validation(format!(
            "Criterio de busqueda no reconocido: {q}"
        )))
    };

    match result {
        Ok(reservations) => HttpResponse::Ok().json(ReservationsEnvelope {
            count: reservations.len(),
            reservations,
        }),
        Err(err) => {
            error!("Failed to query reservations: {err}");
            query_error_response("Error al obtener reservas", &err)
        }
    }
}

/// `POST /Res` — creates a reservation from a validated payload.
#[post("/Res")]
pub async fn create_reservation(
    repo: web::Data<DieselRepository>,
    web::Json(payload): web::Json<ReservationPayload>,
) -> impl Responder {
    match service::create_reservation(repo.get_ref(), &payload) {
        Ok(created) => HttpResponse::Created().json(created),
        Err(err) => {
            error!("Failed to create reservation: {err}");
            mutation_error_response("Error al guardar reserva", &err)
        }
    }
}

/// `PUT /Res/{id}` — updates the status of an existing reservation. Only
/// `resStatus` is honored; other payload fields are ignored.
#[put("/Res/{id}")]
pub async fn update_reservation(
    id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    web::Json(payload): web::Json<ReservationPayload>,
) -> impl Responder {
    let id = id.into_inner();
    match service::update_reservation_status(repo.get_ref(), id, &payload) {
        Ok(updated) => HttpResponse::Ok().json(updated),
        Err(err) => {
            error!("Failed to update reservation {id}: {err}");
            mutation_error_response("Error al actualizar reserva", &err)
        }
    }
}
