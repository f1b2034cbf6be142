use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{ReservationStatus, Specialty};

/// A persisted appointment reservation.
///
/// Serializes with the wire field names the HTTP surface exposes
/// (`creationDate`, `nameDoctor`, `resStatus`, ...).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub id: i32,
    pub name: String,
    pub cedula: String,
    pub email: String,
    pub creation_date: NaiveDateTime,
    pub especialidad: Specialty,
    pub name_doctor: String,
    pub location: String,
    pub res_status: Option<ReservationStatus>,
}

/// Data required to persist a new reservation. The identifier is assigned by
/// the store at insert time; everything else has already passed the
/// validation boundary.
#[derive(Clone, Debug, PartialEq)]
pub struct NewReservation {
    pub name: String,
    pub cedula: String,
    pub email: String,
    pub creation_date: NaiveDateTime,
    pub especialidad: Specialty,
    pub name_doctor: String,
    pub location: String,
    pub res_status: Option<ReservationStatus>,
}
