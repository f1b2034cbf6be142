//! Wire payloads for the reservation endpoints.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::reservation::{NewReservation, Reservation};
use crate::domain::types::{TypeConstraintError, non_blank};

/// Untrusted create/update payload. Structurally a reservation minus the
/// system-assigned id; `creationDate` is advisory, the service decides the
/// authoritative value at creation. Every field defaults so that a missing
/// one is reported by the validation boundary instead of the JSON decoder,
/// and so the update endpoint accepts a body carrying only `resStatus`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct ReservationPayload {
    #[validate(length(min = 1, message = "El nombre de usuario no puede estar vacio"))]
    pub name: String,
    #[validate(length(min = 1, message = "La cedula del usuario no puede estar vacia"))]
    pub cedula: String,
    #[validate(length(min = 1, message = "El email del usuario no puede estar vacio"))]
    pub email: String,
    pub creation_date: Option<NaiveDateTime>,
    #[validate(length(min = 1, message = "La especialidad no puede estar vacia"))]
    pub especialidad: String,
    #[validate(length(min = 1, message = "El doctor que atiende al usuario no puede estar vacio"))]
    pub name_doctor: String,
    #[validate(length(min = 1, message = "La ubicacion de la cita no puede estar vacia"))]
    pub location: String,
    pub res_status: Option<String>,
}

impl TryFrom<&ReservationPayload> for NewReservation {
    type Error = TypeConstraintError;

    /// Trims every text field, rejects whitespace-only values and parses the
    /// two enumerated fields. No side effects.
    fn try_from(payload: &ReservationPayload) -> Result<Self, Self::Error> {
        Ok(Self {
            name: non_blank(&payload.name, "El nombre de usuario no puede estar vacio")?,
            cedula: non_blank(&payload.cedula, "La cedula del usuario no puede estar vacia")?,
            email: non_blank(&payload.email, "El email del usuario no puede estar vacio")?,
            creation_date: payload
                .creation_date
                .unwrap_or_else(|| chrono::Utc::now().naive_utc()),
            especialidad: non_blank(&payload.especialidad, "La especialidad no puede estar vacia")?
                .parse()?,
            name_doctor: non_blank(
                &payload.name_doctor,
                "El doctor que atiende al usuario no puede estar vacio",
            )?,
            location: non_blank(&payload.location, "La ubicacion de la cita no puede estar vacia")?,
            res_status: payload
                .res_status
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::parse)
                .transpose()?,
        })
    }
}

/// Successful `GET /Res` response body.
#[derive(Debug, Serialize)]
pub struct ReservationsEnvelope {
    pub count: usize,
    pub reservations: Vec<Reservation>,
}

/// Error body for the query endpoint.
#[derive(Debug, Serialize)]
pub struct QueryErrorBody {
    pub error: String,
    pub details: String,
}

/// Error body for the create/update endpoints. Key spelling differs from the
/// query endpoint on purpose; both shapes are part of the observed contract.
#[derive(Debug, Serialize)]
pub struct MutationErrorBody {
    #[serde(rename = "Error")]
    pub error: String,
    #[serde(rename = "Message")]
    pub message: String,
}
