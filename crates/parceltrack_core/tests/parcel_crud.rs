use parceltrack_core::db::open_db_in_memory;
use parceltrack_core::{
    Parcel, ParcelRepository, RepoError, SqliteParcelRepository, STATUS_DELIVERED, STATUS_SENT,
};
use std::collections::HashMap;

fn test_parcel() -> Parcel {
    Parcel::new(1000, "test", "2024-01-01T00:00:00Z")
}

#[test]
fn add_and_get_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteParcelRepository::new(&conn);

    let parcel = test_parcel();
    let number = repo.add(&parcel).unwrap();
    assert!(number > 0);

    let mut expected = parcel;
    expected.number = number;

    let stored = repo.get(number).unwrap();
    assert_eq!(stored, expected);
}

#[test]
fn get_missing_parcel_returns_not_found() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteParcelRepository::new(&conn);

    let err = repo.get(404).unwrap_err();
    assert!(matches!(err, RepoError::NotFound(404)));
}

#[test]
fn delete_removes_registered_parcel() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteParcelRepository::new(&conn);

    let number = repo.add(&test_parcel()).unwrap();
    repo.delete(number).unwrap();

    let err = repo.get(number).unwrap_err();
    assert!(matches!(err, RepoError::NotFound(n) if n == number));
}

#[test]
fn set_status_overwrites_any_prior_status() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteParcelRepository::new(&conn);

    let number = repo.add(&test_parcel()).unwrap();

    repo.set_status(number, STATUS_SENT).unwrap();
    assert_eq!(repo.get(number).unwrap().status, STATUS_SENT);

    repo.set_status(number, STATUS_DELIVERED).unwrap();
    assert_eq!(repo.get(number).unwrap().status, STATUS_DELIVERED);
}

#[test]
fn set_address_updates_registered_parcel() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteParcelRepository::new(&conn);

    let number = repo.add(&test_parcel()).unwrap();
    repo.set_address(number, "new test address").unwrap();

    assert_eq!(repo.get(number).unwrap().address, "new test address");
}

#[test]
fn get_by_client_returns_all_matching_parcels() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteParcelRepository::new(&conn);

    let client = 1234;
    let other_client = 5678;

    let mut expected: HashMap<i64, Parcel> = HashMap::new();
    for address in ["first", "second", "third"] {
        let mut parcel = Parcel::new(client, address, "2024-01-01T00:00:00Z");
        let number = repo.add(&parcel).unwrap();
        parcel.number = number;
        expected.insert(number, parcel);
    }

    let unrelated = Parcel::new(other_client, "elsewhere", "2024-01-01T00:00:00Z");
    repo.add(&unrelated).unwrap();

    let stored = repo.get_by_client(client).unwrap();
    assert_eq!(stored.len(), expected.len());
    for parcel in stored {
        let expected_parcel = expected
            .get(&parcel.number)
            .expect("returned parcel should be one of the added ones");
        assert_eq!(&parcel, expected_parcel);
    }
}

#[test]
fn get_by_client_with_no_parcels_is_empty_not_an_error() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteParcelRepository::new(&conn);

    let stored = repo.get_by_client(9999).unwrap();
    assert!(stored.is_empty());
}
