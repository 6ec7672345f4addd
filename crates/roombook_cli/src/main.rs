//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `roombook_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use roombook_core::time::combine_date_time;
use roombook_core::{
    BookingQueries, CounterIds, MemoryStore, NewRoom, ReservationEngine, ReservationRequest,
    RoomId, RoomRegistry,
};
use std::error::Error;

fn main() {
    println!("roombook_core version={}", roombook_core::core_version());

    if let Err(err) = run_demo() {
        eprintln!("demo failed: {err}");
        std::process::exit(1);
    }
}

// Books one room through the whole admission path: accept, adjacency,
// overlap rejection.
fn run_demo() -> Result<(), Box<dyn Error>> {
    let store = MemoryStore::new();
    let registry = RoomRegistry::new(store.clone(), CounterIds::new());
    let engine = ReservationEngine::new(store.clone(), CounterIds::new());
    let queries = BookingQueries::new(store);

    let room = registry.add(&NewRoom {
        name: "Zeus".to_string(),
        capacity: 6,
    })?;
    println!(
        "room added id={} name={} capacity={}",
        room.id, room.name, room.capacity
    );

    let slot = |start: &str, end: &str| -> Result<ReservationRequest, Box<dyn Error>> {
        Ok(ReservationRequest {
            room_id: RoomId::from(room.id.as_str()),
            start: combine_date_time("2025-12-02", start)?,
            end: combine_date_time("2025-12-02", end)?,
            people: 4,
        })
    };

    let first = engine.create(&slot("09:00", "10:00")?)?;
    println!(
        "reservation admitted id={} {}..{}",
        first.id, first.start, first.end
    );

    let adjacent = engine.create(&slot("10:00", "11:00")?)?;
    println!(
        "adjacent reservation admitted id={} {}..{}",
        adjacent.id, adjacent.start, adjacent.end
    );

    match engine.create(&slot("09:30", "10:30")?) {
        Err(err) => println!("overlap rejected ({:?}): {err}", err.kind()),
        Ok(unexpected) => println!("unexpected admission id={}", unexpected.id),
    }

    let booked = queries.by_room(&room.id)?;
    println!("reservations on room {}: {}", room.id, booked.len());
    Ok(())
}
