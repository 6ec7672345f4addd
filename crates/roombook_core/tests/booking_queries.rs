use chrono::{DateTime, Utc};
use roombook_core::time::combine_date_time;
use roombook_core::{
    BookingQueries, CounterIds, MemoryStore, NewRoom, ReservationEngine, ReservationRequest,
    Room, RoomId, RoomRegistry,
};

fn at(date: &str, time: &str) -> DateTime<Utc> {
    combine_date_time(date, time).unwrap()
}

struct Fixture {
    queries: BookingQueries<MemoryStore>,
    engine: ReservationEngine<MemoryStore, CounterIds>,
    zeus: Room,
    gaia: Room,
}

fn fixture() -> Fixture {
    let store = MemoryStore::new();
    let registry = RoomRegistry::new(store.clone(), CounterIds::new());
    let engine = ReservationEngine::new(store.clone(), CounterIds::new());
    let queries = BookingQueries::new(store);

    let zeus = registry
        .add(&NewRoom {
            name: "Zeus".to_string(),
            capacity: 12,
        })
        .unwrap();
    let gaia = registry
        .add(&NewRoom {
            name: "Gaia".to_string(),
            capacity: 4,
        })
        .unwrap();

    Fixture {
        queries,
        engine,
        zeus,
        gaia,
    }
}

fn book(fixture: &Fixture, room_id: &RoomId, date: &str, start: &str, end_date: &str, end: &str) {
    fixture
        .engine
        .create(&ReservationRequest {
            room_id: room_id.clone(),
            start: at(date, start),
            end: at(end_date, end),
            people: 2,
        })
        .unwrap();
}

#[test]
fn by_room_filters_and_preserves_insertion_order() {
    let fx = fixture();
    book(&fx, &fx.zeus.id, "2025-12-02", "09:00", "2025-12-02", "10:00");
    book(&fx, &fx.gaia.id, "2025-12-02", "09:00", "2025-12-02", "10:00");
    book(&fx, &fx.zeus.id, "2025-12-02", "14:00", "2025-12-02", "15:00");

    let zeus_slots = fx.queries.by_room(&fx.zeus.id).unwrap();
    assert_eq!(zeus_slots.len(), 2);
    assert!(zeus_slots.iter().all(|r| r.room_id == fx.zeus.id));
    assert!(zeus_slots[0].start < zeus_slots[1].start);
}

#[test]
fn by_room_for_unknown_room_is_empty() {
    let fx = fixture();
    book(&fx, &fx.zeus.id, "2025-12-02", "09:00", "2025-12-02", "10:00");

    assert!(fx.queries.by_room(&RoomId::from("404")).unwrap().is_empty());
}

#[test]
fn by_day_returns_reservations_starting_that_utc_day() {
    let fx = fixture();
    book(&fx, &fx.zeus.id, "2025-12-01", "14:00", "2025-12-01", "15:00");
    book(&fx, &fx.zeus.id, "2025-12-02", "09:00", "2025-12-02", "10:00");
    book(&fx, &fx.gaia.id, "2025-12-02", "14:00", "2025-12-02", "15:00");
    book(&fx, &fx.zeus.id, "2025-12-03", "09:00", "2025-12-03", "10:00");

    let december_second = fx.queries.by_day(at("2025-12-02", "00:00")).unwrap();
    assert_eq!(december_second.len(), 2);
    assert!(december_second
        .iter()
        .all(|r| r.start >= at("2025-12-02", "00:00") && r.start < at("2025-12-03", "00:00")));
}

#[test]
fn by_day_matches_midnight_spanning_reservations_by_start_day_only() {
    let fx = fixture();
    // Crosses into 2025-12-02 but starts on 2025-12-01.
    book(&fx, &fx.zeus.id, "2025-12-01", "23:30", "2025-12-02", "00:30");

    let first = fx.queries.by_day(at("2025-12-01", "12:00")).unwrap();
    assert_eq!(first.len(), 1);

    let second = fx.queries.by_day(at("2025-12-02", "12:00")).unwrap();
    assert!(second.is_empty());
}

#[test]
fn list_all_preserves_insertion_order_across_rooms() {
    let fx = fixture();
    book(&fx, &fx.zeus.id, "2025-12-02", "09:00", "2025-12-02", "10:00");
    book(&fx, &fx.gaia.id, "2025-12-01", "09:00", "2025-12-01", "10:00");
    book(&fx, &fx.zeus.id, "2025-12-03", "09:00", "2025-12-03", "10:00");

    let all = fx.queries.list_all().unwrap();
    assert_eq!(all.len(), 3);
    assert_eq!(all[0].room_id, fx.zeus.id);
    assert_eq!(all[1].room_id, fx.gaia.id);
    assert_eq!(all[2].room_id, fx.zeus.id);
}
