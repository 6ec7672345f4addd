//! Booking store contract, domain errors and in-memory implementation.
//!
//! # Responsibility
//! - Provide the persistence seam the services are built against: room
//!   lookup/list/insert/update/delete plus reservation append/list.
//! - Define the error vocabulary every booking operation speaks.
//!
//! # Invariants
//! - Reservation listing preserves insertion order.
//! - `list_rooms`/`list_reservations` return defensive snapshots; mutating
//!   the result never touches store state.

use crate::db::DbError;
use crate::model::id::{ReservationId, RoomId};
use crate::model::reservation::{Reservation, ReservationValidationError};
use crate::model::room::{Room, RoomValidationError};
use std::cell::RefCell;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::rc::Rc;

pub type BookingResult<T> = Result<T, BookingError>;

/// Discriminant a collaborator layer maps to its own status convention
/// (HTTP 400/404/409, exit codes, …).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed or out-of-range input.
    Validation,
    /// A referenced id does not exist.
    NotFound,
    /// The request collides with existing state.
    Conflict,
    /// Backend failure; not an invalid request.
    Internal,
}

/// Unified error for registry, engine, query and store operations.
#[derive(Debug)]
pub enum BookingError {
    Room(RoomValidationError),
    Reservation(ReservationValidationError),
    CapacityExceeded { requested: i64, capacity: i64 },
    RoomNotFound(RoomId),
    RoomHasReservations(RoomId),
    SlotConflict { room_id: RoomId },
    Db(DbError),
    UninitializedConnection { expected_version: u32, actual_version: u32 },
    MissingRequiredTable(&'static str),
    InvalidData(String),
}

impl BookingError {
    /// Returns the discriminant used for collaborator status mapping.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Room(_) | Self::Reservation(_) | Self::CapacityExceeded { .. } => {
                ErrorKind::Validation
            }
            Self::RoomNotFound(_) => ErrorKind::NotFound,
            Self::RoomHasReservations(_) | Self::SlotConflict { .. } => ErrorKind::Conflict,
            Self::Db(_)
            | Self::UninitializedConnection { .. }
            | Self::MissingRequiredTable(_)
            | Self::InvalidData(_) => ErrorKind::Internal,
        }
    }
}

impl Display for BookingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Room(err) => write!(f, "{err}"),
            Self::Reservation(err) => write!(f, "{err}"),
            Self::CapacityExceeded {
                requested,
                capacity,
            } => write!(
                f,
                "capacity exceeded: {requested} people for a room of {capacity}"
            ),
            Self::RoomNotFound(id) => write!(f, "room not found: {id}"),
            Self::RoomHasReservations(id) => {
                write!(f, "reservations exist for this room: {id}")
            }
            Self::SlotConflict { room_id } => {
                write!(f, "room already booked for this range: {room_id}")
            }
            Self::Db(err) => write!(f, "{err}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection not migrated: schema version {actual_version}, expected {expected_version}"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "connection is missing required table `{table}`")
            }
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
        }
    }
}

impl Error for BookingError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Room(err) => Some(err),
            Self::Reservation(err) => Some(err),
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RoomValidationError> for BookingError {
    fn from(value: RoomValidationError) -> Self {
        Self::Room(value)
    }
}

impl From<ReservationValidationError> for BookingError {
    fn from(value: ReservationValidationError) -> Self {
        Self::Reservation(value)
    }
}

impl From<DbError> for BookingError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for BookingError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Injectable persistence contract for rooms and reservations.
///
/// Implementations only move records; every booking rule (capacity,
/// conflict, referential integrity) lives in the services on top.
pub trait BookingStore {
    fn insert_room(&self, room: &Room) -> BookingResult<()>;
    fn get_room(&self, id: &RoomId) -> BookingResult<Option<Room>>;
    fn list_rooms(&self) -> BookingResult<Vec<Room>>;
    /// Replaces the stored room with the same id; `RoomNotFound` if absent.
    fn update_room(&self, room: &Room) -> BookingResult<()>;
    /// Removes the room; `RoomNotFound` if absent. Reference checks are the
    /// registry's job.
    fn delete_room(&self, id: &RoomId) -> BookingResult<()>;
    fn append_reservation(&self, reservation: &Reservation) -> BookingResult<()>;
    /// Reservations referencing `room_id`, in insertion order.
    fn reservations_for_room(&self, room_id: &RoomId) -> BookingResult<Vec<Reservation>>;
    /// Every reservation, in insertion order.
    fn list_reservations(&self) -> BookingResult<Vec<Reservation>>;
}

#[derive(Debug, Default)]
struct MemoryState {
    rooms: Vec<Room>,
    reservations: Vec<Reservation>,
}

/// In-memory store, the default backend.
///
/// Clones share one underlying state, so a registry, an engine and a query
/// layer can be handed the same store handle. `RefCell` keeps this a
/// single-actor structure, matching the synchronous core contract.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    state: Rc<RefCell<MemoryState>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BookingStore for MemoryStore {
    fn insert_room(&self, room: &Room) -> BookingResult<()> {
        room.validate()?;

        let mut state = self.state.borrow_mut();
        if state.rooms.iter().any(|existing| existing.id == room.id) {
            return Err(BookingError::InvalidData(format!(
                "duplicate room id `{}`",
                room.id
            )));
        }
        state.rooms.push(room.clone());
        Ok(())
    }

    fn get_room(&self, id: &RoomId) -> BookingResult<Option<Room>> {
        let state = self.state.borrow();
        Ok(state.rooms.iter().find(|room| &room.id == id).cloned())
    }

    fn list_rooms(&self) -> BookingResult<Vec<Room>> {
        Ok(self.state.borrow().rooms.clone())
    }

    fn update_room(&self, room: &Room) -> BookingResult<()> {
        room.validate()?;

        let mut state = self.state.borrow_mut();
        match state.rooms.iter_mut().find(|existing| existing.id == room.id) {
            Some(slot) => {
                *slot = room.clone();
                Ok(())
            }
            None => Err(BookingError::RoomNotFound(room.id.clone())),
        }
    }

    fn delete_room(&self, id: &RoomId) -> BookingResult<()> {
        let mut state = self.state.borrow_mut();
        match state.rooms.iter().position(|room| &room.id == id) {
            Some(index) => {
                state.rooms.remove(index);
                Ok(())
            }
            None => Err(BookingError::RoomNotFound(id.clone())),
        }
    }

    fn append_reservation(&self, reservation: &Reservation) -> BookingResult<()> {
        reservation.validate()?;

        let mut state = self.state.borrow_mut();
        if has_reservation_id(&state.reservations, &reservation.id) {
            return Err(BookingError::InvalidData(format!(
                "duplicate reservation id `{}`",
                reservation.id
            )));
        }
        state.reservations.push(reservation.clone());
        Ok(())
    }

    fn reservations_for_room(&self, room_id: &RoomId) -> BookingResult<Vec<Reservation>> {
        let state = self.state.borrow();
        Ok(state
            .reservations
            .iter()
            .filter(|reservation| &reservation.room_id == room_id)
            .cloned()
            .collect())
    }

    fn list_reservations(&self) -> BookingResult<Vec<Reservation>> {
        Ok(self.state.borrow().reservations.clone())
    }
}

fn has_reservation_id(reservations: &[Reservation], id: &ReservationId) -> bool {
    reservations.iter().any(|reservation| &reservation.id == id)
}
