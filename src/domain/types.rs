//! Strongly-typed value objects used by domain entities.
//!
//! These wrappers enforce basic invariants (positive identifiers, non-blank
//! text, closed enum sets) so that once a value reaches the domain layer it
//! can be treated as trusted.
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided identifier is zero or negative.
    #[error("el ID debe ser mayor que cero")]
    NonPositiveId,
    /// Provided string contained no non-whitespace characters.
    #[error("{0}")]
    EmptyString(String),
    /// Provided value is outside a closed enumerated set.
    #[error("{0}")]
    InvalidValue(String),
}

/// Unique identifier for a reservation. Always greater than zero.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ReservationId(i32);

impl ReservationId {
    /// Creates a new identifier ensuring it is greater than zero.
    pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
        if value > 0 {
            Ok(Self(value))
        } else {
            Err(TypeConstraintError::NonPositiveId)
        }
    }

    /// Returns the raw `i32` backing this identifier.
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl Display for ReservationId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i32> for ReservationId {
    type Error = TypeConstraintError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ReservationId> for i32 {
    fn from(value: ReservationId) -> Self {
        value.0
    }
}

/// Medical specialty an appointment is booked for.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Specialty {
    MedicinaGeneral,
    Psicologia,
    Ortopedia,
    Odontologia,
}

impl Specialty {
    pub const fn as_str(self) -> &'static str {
        match self {
            Specialty::MedicinaGeneral => "MedicinaGeneral",
            Specialty::Psicologia => "Psicologia",
            Specialty::Ortopedia => "Ortopedia",
            Specialty::Odontologia => "Odontologia",
        }
    }
}

impl Display for Specialty {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Specialty {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MedicinaGeneral" => Ok(Specialty::MedicinaGeneral),
            "Psicologia" => Ok(Specialty::Psicologia),
            "Ortopedia" => Ok(Specialty::Ortopedia),
            "Odontologia" => Ok(Specialty::Odontologia),
            other => Err(TypeConstraintError::InvalidValue(format!(
                "La especialidad no es valida: {other}"
            ))),
        }
    }
}

/// Outcome assigned to a reservation. Transitions between the two values are
/// unconstrained in both directions.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ReservationStatus {
    Confirmed,
    Rejected,
}

impl ReservationStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            ReservationStatus::Confirmed => "Confirmed",
            ReservationStatus::Rejected => "Rejected",
        }
    }
}

impl Display for ReservationStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReservationStatus {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Confirmed" => Ok(ReservationStatus::Confirmed),
            "Rejected" => Ok(ReservationStatus::Rejected),
            other => Err(TypeConstraintError::InvalidValue(format!(
                "Estado de reserva no valido: {other}"
            ))),
        }
    }
}

/// Trims a text field and rejects whitespace-only values.
pub fn non_blank(value: &str, message: &str) -> Result<String, TypeConstraintError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(TypeConstraintError::EmptyString(message.to_string()))
    } else {
        Ok(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reservation_id_rejects_non_positive() {
        assert!(ReservationId::new(1).is_ok());
        assert_eq!(
            ReservationId::new(0),
            Err(TypeConstraintError::NonPositiveId)
        );
        assert_eq!(
            ReservationId::new(-3),
            Err(TypeConstraintError::NonPositiveId)
        );
    }

    #[test]
    fn specialty_round_trips_through_str() {
        for s in [
            Specialty::MedicinaGeneral,
            Specialty::Psicologia,
            Specialty::Ortopedia,
            Specialty::Odontologia,
        ] {
            assert_eq!(s.as_str().parse::<Specialty>().unwrap(), s);
        }
        assert!("Cardiologia".parse::<Specialty>().is_err());
    }

    #[test]
    fn status_parsing_is_exact() {
        assert_eq!(
            "Confirmed".parse::<ReservationStatus>().unwrap(),
            ReservationStatus::Confirmed
        );
        assert_eq!(
            "Rejected".parse::<ReservationStatus>().unwrap(),
            ReservationStatus::Rejected
        );
        assert!("confirmed".parse::<ReservationStatus>().is_err());
        assert!("Rechazadaa".parse::<ReservationStatus>().is_err());
    }

    #[test]
    fn non_blank_trims_and_rejects_whitespace() {
        assert_eq!(non_blank("  Juan ", "msg").unwrap(), "Juan");
        assert_eq!(
            non_blank("   ", "el campo no puede estar vacio"),
            Err(TypeConstraintError::EmptyString(
                "el campo no puede estar vacio".to_string()
            ))
        );
    }
}
