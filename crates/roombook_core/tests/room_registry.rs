use chrono::{DateTime, Utc};
use roombook_core::time::combine_date_time;
use roombook_core::{
    BookingError, CounterIds, ErrorKind, MemoryStore, NewRoom, ReservationEngine,
    ReservationRequest, RoomId, RoomPatch, RoomRegistry, RoomValidationError,
};

fn registry(store: &MemoryStore) -> RoomRegistry<MemoryStore, CounterIds> {
    RoomRegistry::new(store.clone(), CounterIds::new())
}

fn at(date: &str, time: &str) -> DateTime<Utc> {
    combine_date_time(date, time).unwrap()
}

#[test]
fn add_trims_name_and_assigns_sequential_ids() {
    let store = MemoryStore::new();
    let registry = registry(&store);

    let zeus = registry
        .add(&NewRoom {
            name: "  Zeus  ".to_string(),
            capacity: 12,
        })
        .unwrap();
    let gaia = registry
        .add(&NewRoom {
            name: "Gaia".to_string(),
            capacity: 4,
        })
        .unwrap();

    assert_eq!(zeus.id, RoomId::from("1"));
    assert_eq!(zeus.name, "Zeus");
    assert_eq!(gaia.id, RoomId::from("2"));
}

#[test]
fn add_rejects_blank_name() {
    let store = MemoryStore::new();
    let registry = registry(&store);

    let err = registry
        .add(&NewRoom {
            name: "   ".to_string(),
            capacity: 5,
        })
        .unwrap_err();

    assert!(matches!(
        err,
        BookingError::Room(RoomValidationError::EmptyName)
    ));
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert!(registry.list().unwrap().is_empty());
}

#[test]
fn add_rejects_non_positive_capacity() {
    let store = MemoryStore::new();
    let registry = registry(&store);

    for capacity in [0, -3] {
        let err = registry
            .add(&NewRoom {
                name: "Gaia".to_string(),
                capacity,
            })
            .unwrap_err();
        assert!(matches!(
            err,
            BookingError::Room(RoomValidationError::NonPositiveCapacity(value)) if value == capacity
        ));
    }
}

#[test]
fn list_returns_defensive_snapshot() {
    let store = MemoryStore::new();
    let registry = registry(&store);
    registry
        .add(&NewRoom {
            name: "Zeus".to_string(),
            capacity: 12,
        })
        .unwrap();

    let mut snapshot = registry.list().unwrap();
    snapshot[0].name = "Hades".to_string();
    snapshot.clear();

    let fresh = registry.list().unwrap();
    assert_eq!(fresh.len(), 1);
    assert_eq!(fresh[0].name, "Zeus");
}

#[test]
fn get_returns_room_or_not_found() {
    let store = MemoryStore::new();
    let registry = registry(&store);
    let created = registry
        .add(&NewRoom {
            name: "Zeus".to_string(),
            capacity: 12,
        })
        .unwrap();

    let fetched = registry.get(&created.id).unwrap();
    assert_eq!(fetched, created);

    let err = registry.get(&RoomId::from("999")).unwrap_err();
    assert!(matches!(err, BookingError::RoomNotFound(id) if id == RoomId::from("999")));
    assert_eq!(
        registry.get(&RoomId::from("999")).unwrap_err().kind(),
        ErrorKind::NotFound
    );
}

#[test]
fn update_applies_only_supplied_fields() {
    let store = MemoryStore::new();
    let registry = registry(&store);
    let room = registry
        .add(&NewRoom {
            name: "Athena".to_string(),
            capacity: 8,
        })
        .unwrap();

    let renamed = registry
        .update(
            &room.id,
            &RoomPatch {
                name: Some("Athena+".to_string()),
                capacity: None,
            },
        )
        .unwrap();
    assert_eq!(renamed.name, "Athena+");
    assert_eq!(renamed.capacity, 8);

    let resized = registry
        .update(
            &room.id,
            &RoomPatch {
                name: None,
                capacity: Some(9),
            },
        )
        .unwrap();
    assert_eq!(resized.name, "Athena+");
    assert_eq!(resized.capacity, 9);
}

#[test]
fn update_validates_supplied_fields_and_leaves_store_untouched() {
    let store = MemoryStore::new();
    let registry = registry(&store);
    let room = registry
        .add(&NewRoom {
            name: "Athena".to_string(),
            capacity: 8,
        })
        .unwrap();

    let err = registry
        .update(
            &room.id,
            &RoomPatch {
                name: Some("  ".to_string()),
                capacity: None,
            },
        )
        .unwrap_err();
    assert!(matches!(
        err,
        BookingError::Room(RoomValidationError::EmptyName)
    ));

    let err = registry
        .update(
            &room.id,
            &RoomPatch {
                name: None,
                capacity: Some(0),
            },
        )
        .unwrap_err();
    assert!(matches!(
        err,
        BookingError::Room(RoomValidationError::NonPositiveCapacity(0))
    ));

    let stored = registry.get(&room.id).unwrap();
    assert_eq!(stored.name, "Athena");
    assert_eq!(stored.capacity, 8);
}

#[test]
fn update_unknown_room_is_not_found() {
    let store = MemoryStore::new();
    let registry = registry(&store);

    let err = registry
        .update(
            &RoomId::from("404"),
            &RoomPatch {
                name: Some("Ghost".to_string()),
                capacity: None,
            },
        )
        .unwrap_err();
    assert!(matches!(err, BookingError::RoomNotFound(_)));
}

#[test]
fn delete_room_without_reservations_succeeds() {
    let store = MemoryStore::new();
    let registry = registry(&store);
    let room = registry
        .add(&NewRoom {
            name: "Hera".to_string(),
            capacity: 5,
        })
        .unwrap();

    registry.delete(&room.id).unwrap();
    assert!(registry.list().unwrap().is_empty());
}

#[test]
fn delete_room_with_reservations_is_rejected() {
    let store = MemoryStore::new();
    let registry = registry(&store);
    let engine = ReservationEngine::new(store.clone(), CounterIds::new());

    let room = registry
        .add(&NewRoom {
            name: "Zeus".to_string(),
            capacity: 12,
        })
        .unwrap();
    engine
        .create(&ReservationRequest {
            room_id: room.id.clone(),
            start: at("2025-10-15", "09:00"),
            end: at("2025-10-15", "10:00"),
            people: 3,
        })
        .unwrap();

    let err = registry.delete(&room.id).unwrap_err();
    assert!(matches!(err, BookingError::RoomHasReservations(ref id) if id == &room.id));
    assert_eq!(err.kind(), ErrorKind::Conflict);
    assert_eq!(err.to_string(), "reservations exist for this room: 1");

    // The room survives the rejected delete.
    assert_eq!(registry.list().unwrap().len(), 1);
}

#[test]
fn delete_unknown_room_is_not_found() {
    let store = MemoryStore::new();
    let registry = registry(&store);

    let err = registry.delete(&RoomId::from("404")).unwrap_err();
    assert!(matches!(err, BookingError::RoomNotFound(_)));
}
