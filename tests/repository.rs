use chrono::Utc;

use reservas_api::domain::reservation::NewReservation;
use reservas_api::domain::types::{ReservationStatus, Specialty};
use reservas_api::repository::errors::RepositoryError;
use reservas_api::repository::{
    DieselRepository, ReservationListQuery, ReservationReader, ReservationWriter,
};

mod common;

fn new_reservation(name: &str, status: Option<ReservationStatus>) -> NewReservation {
    NewReservation {
        name: name.to_string(),
        cedula: "100200300".to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        creation_date: Utc::now().naive_utc(),
        especialidad: Specialty::Odontologia,
        name_doctor: "Dra. Perez".to_string(),
        location: "Consultorio 2".to_string(),
        res_status: status,
    }
}

#[test]
fn test_identifier_assignment_is_monotonic() {
    let test_db = common::TestDb::new("test_identifier_assignment.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    let first = repo
        .create(&new_reservation("Juan", Some(ReservationStatus::Confirmed)))
        .unwrap();
    assert_eq!(first.id, 1);

    let second = repo
        .create(&new_reservation("Ana", Some(ReservationStatus::Rejected)))
        .unwrap();
    assert_eq!(second.id, 2);

    // Created records are retrievable by their assigned id.
    let fetched = repo.get_by_id(first.id).unwrap().unwrap();
    assert_eq!(fetched, first);
    assert!(repo.get_by_id(99).unwrap().is_none());
}

#[test]
fn test_list_filters() {
    let test_db = common::TestDb::new("test_list_filters.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    repo.create(&new_reservation("Juan", Some(ReservationStatus::Confirmed)))
        .unwrap();
    repo.create(&new_reservation("Ana", Some(ReservationStatus::Rejected)))
        .unwrap();
    repo.create(&new_reservation("Pedro", None)).unwrap();

    let all = repo.list(ReservationListQuery::new()).unwrap();
    assert_eq!(all.len(), 3);

    let confirmed = repo
        .list(ReservationListQuery::new().status(ReservationStatus::Confirmed))
        .unwrap();
    assert_eq!(confirmed.len(), 1);
    assert_eq!(confirmed[0].name, "Juan");

    let by_name = repo.list(ReservationListQuery::new().name("Ana")).unwrap();
    assert_eq!(by_name.len(), 1);
    assert_eq!(by_name[0].res_status, Some(ReservationStatus::Rejected));

    let missing = repo
        .list(ReservationListQuery::new().name("Nadie"))
        .unwrap();
    assert!(missing.is_empty());
}

#[test]
fn test_set_status_touches_only_the_status() {
    let test_db = common::TestDb::new("test_set_status.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    let created = repo
        .create(&new_reservation("Juan", Some(ReservationStatus::Confirmed)))
        .unwrap();

    let updated = repo
        .set_status(created.id, Some(ReservationStatus::Rejected))
        .unwrap();
    assert_eq!(updated.res_status, Some(ReservationStatus::Rejected));

    // Every other field must be identical to the original record.
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, created.name);
    assert_eq!(updated.cedula, created.cedula);
    assert_eq!(updated.email, created.email);
    assert_eq!(updated.creation_date, created.creation_date);
    assert_eq!(updated.especialidad, created.especialidad);
    assert_eq!(updated.name_doctor, created.name_doctor);
    assert_eq!(updated.location, created.location);

    // Transitions are unconstrained in both directions.
    let back = repo
        .set_status(created.id, Some(ReservationStatus::Confirmed))
        .unwrap();
    assert_eq!(back.res_status, Some(ReservationStatus::Confirmed));
}

#[test]
fn test_set_status_on_missing_record_fails() {
    let test_db = common::TestDb::new("test_set_status_missing.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    let err = repo
        .set_status(42, Some(ReservationStatus::Confirmed))
        .unwrap_err();
    assert!(matches!(err, RepositoryError::NotFound));
}
