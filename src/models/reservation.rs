use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::reservation::{
    NewReservation as DomainNewReservation, Reservation as DomainReservation,
};
use crate::domain::types::TypeConstraintError;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::reservations)]
/// Diesel row for [`crate::domain::reservation::Reservation`].
pub struct Reservation {
    pub id: i32,
    pub name: String,
    pub cedula: String,
    pub email: String,
    pub creation_date: NaiveDateTime,
    pub especialidad: String,
    pub name_doctor: String,
    pub location: String,
    pub res_status: Option<String>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::reservations)]
/// Insertable form of [`Reservation`]. The id comes from the allocator, not
/// from SQLite rowid autoincrement, so it is part of the insert.
pub struct NewReservation<'a> {
    pub id: i32,
    pub name: &'a str,
    pub cedula: &'a str,
    pub email: &'a str,
    pub creation_date: NaiveDateTime,
    pub especialidad: &'a str,
    pub name_doctor: &'a str,
    pub location: &'a str,
    pub res_status: Option<&'a str>,
}

impl TryFrom<Reservation> for DomainReservation {
    type Error = TypeConstraintError;

    /// Rows only ever hold values that passed the validation boundary, so a
    /// parse failure here means the database was edited out-of-band.
    fn try_from(row: Reservation) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.id,
            name: row.name,
            cedula: row.cedula,
            email: row.email,
            creation_date: row.creation_date,
            especialidad: row.especialidad.parse()?,
            name_doctor: row.name_doctor,
            location: row.location,
            res_status: row.res_status.as_deref().map(str::parse).transpose()?,
        })
    }
}

impl<'a> NewReservation<'a> {
    pub fn from_domain(id: i32, new: &'a DomainNewReservation) -> Self {
        Self {
            id,
            name: new.name.as_str(),
            cedula: new.cedula.as_str(),
            email: new.email.as_str(),
            creation_date: new.creation_date,
            especialidad: new.especialidad.as_str(),
            name_doctor: new.name_doctor.as_str(),
            location: new.location.as_str(),
            res_status: new.res_status.map(|s| s.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    use crate::domain::types::{ReservationStatus, Specialty};

    fn sample_row() -> Reservation {
        Reservation {
            id: 1,
            name: "Juan".to_string(),
            cedula: "100200300".to_string(),
            email: "juan@example.com".to_string(),
            creation_date: Utc::now().naive_utc(),
            especialidad: "Odontologia".to_string(),
            name_doctor: "Dra. Perez".to_string(),
            location: "Consultorio 2".to_string(),
            res_status: Some("Confirmed".to_string()),
        }
    }

    #[test]
    fn row_into_domain() {
        let row = sample_row();
        let domain = DomainReservation::try_from(row.clone()).unwrap();
        assert_eq!(domain.id, 1);
        assert_eq!(domain.name, "Juan");
        assert_eq!(domain.especialidad, Specialty::Odontologia);
        assert_eq!(domain.res_status, Some(ReservationStatus::Confirmed));
        assert_eq!(domain.creation_date, row.creation_date);
    }

    #[test]
    fn row_with_null_status_into_domain() {
        let mut row = sample_row();
        row.res_status = None;
        let domain = DomainReservation::try_from(row).unwrap();
        assert_eq!(domain.res_status, None);
    }

    #[test]
    fn row_with_corrupt_enum_fails() {
        let mut row = sample_row();
        row.especialidad = "Cirugia".to_string();
        assert!(DomainReservation::try_from(row).is_err());
    }

    #[test]
    fn from_domain_new_carries_allocated_id() {
        let new = DomainNewReservation {
            name: "Ana".to_string(),
            cedula: "42".to_string(),
            email: "ana@example.com".to_string(),
            creation_date: Utc::now().naive_utc(),
            especialidad: Specialty::Psicologia,
            name_doctor: "Dr. Gomez".to_string(),
            location: "Sede Norte".to_string(),
            res_status: None,
        };
        let insertable = NewReservation::from_domain(7, &new);
        assert_eq!(insertable.id, 7);
        assert_eq!(insertable.especialidad, "Psicologia");
        assert_eq!(insertable.res_status, None);
    }
}
