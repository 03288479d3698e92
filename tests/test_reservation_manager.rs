use std::collections::BTreeMap;
use std::path::PathBuf;

use hotel_records::config::StoreConfig;
use hotel_records::domain::hotel::Hotel;
use hotel_records::domain::reservation::ReservationState;
use hotel_records::store::{InMemoryStore, JsonFileStore, RecordStore};
use hotel_records::{HotelRecords, ReservationError, open_json_store};
use uuid::Uuid;

/// Removes the store file when the test ends.
struct TempStore {
    config: StoreConfig,
}

impl TempStore {
    fn new() -> Self {
        let path = std::env::temp_dir().join(format!("hotel_records_test_{}.json", Uuid::new_v4()));
        Self { config: StoreConfig::new(path) }
    }

    fn path(&self) -> &PathBuf {
        &self.config.path
    }
}

impl Drop for TempStore {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.config.path);
    }
}

fn rooms(entries: &[(&str, u32)]) -> BTreeMap<String, u32> {
    entries.iter().map(|(room_type, count)| (room_type.to_string(), *count)).collect()
}

/// "Luxury Suites" with three registered customers and no reservations.
fn luxury_suites(records: &HotelRecords<impl RecordStore>) {
    records.hotels.create_hotel("Luxury Suites", "New York City, NY", rooms(&[("single", 3), ("double", 4), ("suite", 6)])).unwrap();
    for name in ["Jane Smith", "Michael Johnson", "Emma Davis"] {
        records.customers.create_customer("Luxury Suites", name).unwrap();
    }
}

fn hotel(records: &HotelRecords<impl RecordStore>) -> Hotel {
    records.hotels.get_hotel("Luxury Suites").unwrap()
}

#[test]
fn test_create_reservation_decrements_room_count() {
    let tmp = TempStore::new();
    let records = open_json_store(&tmp.config);
    luxury_suites(&records);

    let reservation = records.reservations.create_reservation("Luxury Suites", "Jane Smith", "2024-02-20", "double").unwrap();

    let hotel = hotel(&records);
    assert_eq!(hotel.rooms.available("double"), Some(3));
    assert_eq!(hotel.reservations, vec![reservation.clone()]);
    assert_eq!(reservation.customer_name, "Jane Smith");
    assert_eq!(reservation.customer_id, hotel.find_customer("Jane Smith").unwrap().id);
    assert_eq!(reservation.date, "2024-02-20");
    assert_eq!(reservation.state, ReservationState::Active);
}

#[test]
fn test_create_reservation_unknown_room_type() {
    let tmp = TempStore::new();
    let records = open_json_store(&tmp.config);
    luxury_suites(&records);
    let before = std::fs::read_to_string(tmp.path()).unwrap();

    let err = records.reservations.create_reservation("Luxury Suites", "Michael Johnson", "2024-02-21", "pen").unwrap_err();

    assert!(matches!(err, ReservationError::RoomTypeNotFound { .. }));
    assert_eq!(err.to_string(), "pen room type not found in Luxury Suites");
    assert_eq!(std::fs::read_to_string(tmp.path()).unwrap(), before);
}

#[test]
fn test_create_reservation_hotel_not_found() {
    let tmp = TempStore::new();
    let records = open_json_store(&tmp.config);
    luxury_suites(&records);

    let err = records.reservations.create_reservation("Grand Hotel", "Emma Davis", "2024-02-22", "single").unwrap_err();

    assert!(matches!(err, ReservationError::HotelNotFound(ref name) if name == "Grand Hotel"));
    assert_eq!(err.to_string(), "Hotel Grand Hotel not found");
}

#[test]
fn test_create_reservation_sold_out_leaves_store_unchanged() {
    let tmp = TempStore::new();
    let records = open_json_store(&tmp.config);
    records.hotels.create_hotel("Tiny Inn", "Reno, NV", rooms(&[("single", 1), ("suite", 0)])).unwrap();
    records.reservations.create_reservation("Tiny Inn", "Jane Smith", "2024-02-20", "single").unwrap();
    let before = std::fs::read_to_string(tmp.path()).unwrap();

    let sold_out = records.reservations.create_reservation("Tiny Inn", "Emma Davis", "2024-02-20", "single").unwrap_err();
    let never_available = records.reservations.create_reservation("Tiny Inn", "Emma Davis", "2024-02-20", "suite").unwrap_err();

    assert!(matches!(sold_out, ReservationError::NoRoomsAvailable { .. }));
    assert!(matches!(never_available, ReservationError::NoRoomsAvailable { .. }));
    assert_eq!(std::fs::read_to_string(tmp.path()).unwrap(), before);
    assert!(records.hotels.get_hotel("Tiny Inn").unwrap().find_customer("Emma Davis").is_none());
}

#[test]
fn test_create_reservation_registers_unknown_customer() {
    let records = HotelRecords::new(InMemoryStore::new());
    luxury_suites(&records);

    let reservation = records.reservations.create_reservation("Luxury Suites", "Olivia Brown", "2024-02-23", "suite").unwrap();

    let customer = records.customers.find_customer("Luxury Suites", "Olivia Brown").unwrap();
    assert_eq!(customer.id.value, 4);
    assert_eq!(reservation.customer_id, customer.id);
}

#[test]
fn test_reservation_ids_are_unique() {
    let records = HotelRecords::new(InMemoryStore::new());
    luxury_suites(&records);
    records.hotels.create_hotel("Grand Hotel", "Paris", rooms(&[("single", 5)])).unwrap();

    let mut ids = Vec::new();
    for (hotel, customer) in [("Luxury Suites", "Jane Smith"), ("Grand Hotel", "Jane Smith"), ("Luxury Suites", "Emma Davis")] {
        ids.push(records.reservations.create_reservation(hotel, customer, "2024-02-20", "single").unwrap().id);
    }
    records.reservations.cancel_reservation("Luxury Suites", "Emma Davis").unwrap();
    ids.push(records.reservations.create_reservation("Luxury Suites", "Emma Davis", "2024-02-21", "single").unwrap().id);

    let mut unique = ids.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), ids.len());
}

#[test]
fn test_cancel_reservation_success() {
    let tmp = TempStore::new();
    let records = open_json_store(&tmp.config);
    luxury_suites(&records);
    records.reservations.create_reservation("Luxury Suites", "Jane Smith", "2024-02-19", "single").unwrap();
    assert_eq!(hotel(&records).rooms.available("single"), Some(2));

    records.reservations.cancel_reservation("Luxury Suites", "Jane Smith").unwrap();

    let hotel = hotel(&records);
    assert_eq!(hotel.rooms.available("single"), Some(3));
    assert!(hotel.reservations.is_empty());
    assert!(hotel.find_customer("Jane Smith").is_some());
}

#[test]
fn test_cancel_reservation_not_found() {
    let records = HotelRecords::new(InMemoryStore::new());
    luxury_suites(&records);

    let err = records.reservations.cancel_reservation("Luxury Suites", "Michael Johnson").unwrap_err();

    assert!(matches!(err, ReservationError::ReservationNotFound { .. }));
    assert_eq!(err.to_string(), "No reservation found for Michael Johnson in Luxury Suites");
}

#[test]
fn test_cancel_reservation_hotel_not_found() {
    let records = HotelRecords::new(InMemoryStore::new());
    luxury_suites(&records);

    let err = records.reservations.cancel_reservation("Grand Hotel", "Jane Smith").unwrap_err();

    assert_eq!(err.to_string(), "Hotel Grand Hotel not found");
}

#[test]
fn test_cancel_reservation_removes_first_match_only() {
    let records = HotelRecords::new(InMemoryStore::new());
    luxury_suites(&records);
    let first = records.reservations.create_reservation("Luxury Suites", "Jane Smith", "2024-02-19", "single").unwrap();
    let second = records.reservations.create_reservation("Luxury Suites", "Jane Smith", "2024-02-20", "suite").unwrap();

    records.reservations.cancel_reservation("Luxury Suites", "Jane Smith").unwrap();

    let hotel = hotel(&records);
    assert_eq!(hotel.reservations, vec![second]);
    assert_eq!(hotel.rooms.available("single"), Some(3));
    assert_eq!(hotel.rooms.available("suite"), Some(5));
    assert!(!hotel.reservations.iter().any(|r| r.id == first.id));
}

#[test]
fn test_cancel_reservation_by_id_targets_one_reservation() {
    let records = HotelRecords::new(InMemoryStore::new());
    luxury_suites(&records);
    let first = records.reservations.create_reservation("Luxury Suites", "Jane Smith", "2024-02-19", "single").unwrap();
    let second = records.reservations.create_reservation("Luxury Suites", "Jane Smith", "2024-02-20", "suite").unwrap();

    let cancelled = records.reservations.cancel_reservation_by_id("Luxury Suites", second.id).unwrap();

    assert_eq!(cancelled.id, second.id);
    assert_eq!(cancelled.state, ReservationState::Cancelled);
    assert_eq!(records.reservations.reservations_for("Luxury Suites", "Jane Smith").unwrap(), vec![first]);
    assert_eq!(hotel(&records).rooms.available("suite"), Some(6));

    let err = records.reservations.cancel_reservation_by_id("Luxury Suites", second.id).unwrap_err();
    assert!(matches!(err, ReservationError::ReservationIdNotFound { .. }));
}

#[test]
fn test_create_reservation_blank_customer_leaves_store_unchanged() {
    let tmp = TempStore::new();
    let records = open_json_store(&tmp.config);
    luxury_suites(&records);
    let before = std::fs::read_to_string(tmp.path()).unwrap();

    let err = records.reservations.create_reservation("Luxury Suites", "  ", "2024-02-20", "single").unwrap_err();

    assert!(matches!(err, ReservationError::InvalidInput(_)));
    assert_eq!(err.to_string(), "Invalid input: customer name must not be empty");
    assert_eq!(std::fs::read_to_string(tmp.path()).unwrap(), before);
    assert_eq!(hotel(&records).rooms.available("single"), Some(3));
}

#[test]
fn test_concurrent_reservations_lose_no_updates() {
    const THREADS: usize = 8;
    const PER_THREAD: usize = 50;

    let records = HotelRecords::new(InMemoryStore::new());
    records.hotels.create_hotel("Busy Hotel", "Chicago, IL", rooms(&[("single", 1000)])).unwrap();

    let ids: Vec<_> = std::thread::scope(|scope| {
        let workers: Vec<_> = (0..THREADS)
            .map(|worker| {
                let records = &records;
                scope.spawn(move || {
                    let guest = format!("Guest {}", worker);
                    (0..PER_THREAD)
                        .map(|_| records.reservations.create_reservation("Busy Hotel", &guest, "2024-02-20", "single").unwrap().id)
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        workers.into_iter().flat_map(|worker| worker.join().unwrap()).collect()
    });

    let hotel = records.hotels.get_hotel("Busy Hotel").unwrap();
    assert_eq!(hotel.reservations.len(), THREADS * PER_THREAD);
    assert_eq!(hotel.rooms.available("single"), Some(1000 - (THREADS * PER_THREAD) as u32));
    assert_eq!(hotel.customers.len(), THREADS);

    let mut unique = ids.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), THREADS * PER_THREAD);
}

#[test]
fn test_reservation_ids_continue_after_reopening_the_store() {
    let tmp = TempStore::new();
    let last = {
        let records = open_json_store(&tmp.config);
        luxury_suites(&records);
        records.reservations.create_reservation("Luxury Suites", "Jane Smith", "2024-02-19", "single").unwrap();
        records.reservations.create_reservation("Luxury Suites", "Emma Davis", "2024-02-19", "single").unwrap()
    };

    let reopened = open_json_store(&tmp.config);
    let next = reopened.reservations.create_reservation("Luxury Suites", "Michael Johnson", "2024-02-20", "double").unwrap();

    assert_eq!(Some(next.id), last.id.next());
}

#[test]
fn test_store_round_trip_is_lossless() {
    let tmp = TempStore::new();
    let records = open_json_store(&tmp.config);
    luxury_suites(&records);
    records.reservations.create_reservation("Luxury Suites", "Jane Smith", "2024-02-20", "double").unwrap();

    let store = JsonFileStore::new(&tmp.config);
    let loaded = store.load_all().unwrap();
    store.save_all(&loaded).unwrap();

    assert_eq!(store.load_all().unwrap(), loaded);
}
