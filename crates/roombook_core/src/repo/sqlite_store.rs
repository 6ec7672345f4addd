//! SQLite-backed booking store.
//!
//! # Responsibility
//! - Persist rooms and reservations on a migrated SQLite connection.
//! - Keep SQL details inside the store boundary.
//!
//! # Invariants
//! - `try_new` rejects connections whose schema is not fully migrated.
//! - Instants are stored as UTC epoch milliseconds.
//! - Insertion order is the rowid order.

use crate::db::migrations::latest_version;
use crate::model::id::{ReservationId, RoomId};
use crate::model::reservation::Reservation;
use crate::model::room::Room;
use crate::repo::booking_store::{BookingError, BookingResult, BookingStore};
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, Row};

const ROOM_SELECT_SQL: &str = "SELECT id, name, capacity FROM rooms";
const RESERVATION_SELECT_SQL: &str =
    "SELECT id, room_id, start_utc_ms, end_utc_ms, people FROM reservations";
const REQUIRED_TABLES: &[&str] = &["rooms", "reservations"];

/// Booking store over a migrated SQLite connection.
///
/// Borrowing the connection lets a registry, an engine and a query layer
/// each hold a store over the same database, matching the shared-handle
/// model of `MemoryStore`.
#[derive(Debug, Clone, Copy)]
pub struct SqliteStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteStore<'conn> {
    /// Constructs a store after verifying the connection is migrated and
    /// carries the booking schema.
    pub fn try_new(conn: &'conn Connection) -> BookingResult<Self> {
        let expected = latest_version();
        let actual = conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))?;
        if actual != expected {
            return Err(BookingError::UninitializedConnection {
                expected_version: expected,
                actual_version: actual,
            });
        }

        for &table in REQUIRED_TABLES {
            let present: bool = conn.query_row(
                "SELECT EXISTS (
                    SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1
                );",
                [table],
                |row| row.get(0),
            )?;
            if !present {
                return Err(BookingError::MissingRequiredTable(table));
            }
        }

        Ok(Self { conn })
    }
}

impl BookingStore for SqliteStore<'_> {
    fn insert_room(&self, room: &Room) -> BookingResult<()> {
        room.validate()?;

        self.conn.execute(
            "INSERT INTO rooms (id, name, capacity) VALUES (?1, ?2, ?3);",
            params![room.id.as_str(), room.name.as_str(), room.capacity],
        )?;
        Ok(())
    }

    fn get_room(&self, id: &RoomId) -> BookingResult<Option<Room>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{ROOM_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query([id.as_str()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_room_row(row)?));
        }
        Ok(None)
    }

    fn list_rooms(&self) -> BookingResult<Vec<Room>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{ROOM_SELECT_SQL} ORDER BY rowid;"))?;

        let mut rows = stmt.query([])?;
        let mut rooms = Vec::new();
        while let Some(row) = rows.next()? {
            rooms.push(parse_room_row(row)?);
        }
        Ok(rooms)
    }

    fn update_room(&self, room: &Room) -> BookingResult<()> {
        room.validate()?;

        let changed = self.conn.execute(
            "UPDATE rooms SET name = ?2, capacity = ?3 WHERE id = ?1;",
            params![room.id.as_str(), room.name.as_str(), room.capacity],
        )?;
        if changed == 0 {
            return Err(BookingError::RoomNotFound(room.id.clone()));
        }
        Ok(())
    }

    fn delete_room(&self, id: &RoomId) -> BookingResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM rooms WHERE id = ?1;", [id.as_str()])?;
        if changed == 0 {
            return Err(BookingError::RoomNotFound(id.clone()));
        }
        Ok(())
    }

    fn append_reservation(&self, reservation: &Reservation) -> BookingResult<()> {
        reservation.validate()?;

        self.conn.execute(
            "INSERT INTO reservations (id, room_id, start_utc_ms, end_utc_ms, people)
             VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                reservation.id.as_str(),
                reservation.room_id.as_str(),
                reservation.start.timestamp_millis(),
                reservation.end.timestamp_millis(),
                reservation.people,
            ],
        )?;
        Ok(())
    }

    fn reservations_for_room(&self, room_id: &RoomId) -> BookingResult<Vec<Reservation>> {
        let mut stmt = self.conn.prepare(&format!(
            "{RESERVATION_SELECT_SQL} WHERE room_id = ?1 ORDER BY rowid;"
        ))?;

        let mut rows = stmt.query([room_id.as_str()])?;
        let mut reservations = Vec::new();
        while let Some(row) = rows.next()? {
            reservations.push(parse_reservation_row(row)?);
        }
        Ok(reservations)
    }

    fn list_reservations(&self) -> BookingResult<Vec<Reservation>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{RESERVATION_SELECT_SQL} ORDER BY rowid;"))?;

        let mut rows = stmt.query([])?;
        let mut reservations = Vec::new();
        while let Some(row) = rows.next()? {
            reservations.push(parse_reservation_row(row)?);
        }
        Ok(reservations)
    }
}

fn parse_room_row(row: &Row<'_>) -> BookingResult<Room> {
    let room = Room {
        id: RoomId::new(row.get::<_, String>("id")?),
        name: row.get("name")?,
        capacity: row.get("capacity")?,
    };
    room.validate()?;
    Ok(room)
}

fn parse_reservation_row(row: &Row<'_>) -> BookingResult<Reservation> {
    let reservation = Reservation {
        id: ReservationId::new(row.get::<_, String>("id")?),
        room_id: RoomId::new(row.get::<_, String>("room_id")?),
        start: instant_from_millis(row.get("start_utc_ms")?, "reservations.start_utc_ms")?,
        end: instant_from_millis(row.get("end_utc_ms")?, "reservations.end_utc_ms")?,
        people: row.get("people")?,
    };
    reservation.validate()?;
    Ok(reservation)
}

fn instant_from_millis(millis: i64, column: &str) -> BookingResult<DateTime<Utc>> {
    DateTime::from_timestamp_millis(millis).ok_or_else(|| {
        BookingError::InvalidData(format!("out-of-range timestamp `{millis}` in {column}"))
    })
}
