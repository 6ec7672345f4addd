//! Room administration service.
//!
//! # Responsibility
//! - Validate and apply room create/update/delete requests.
//! - Enforce referential integrity: a room referenced by reservations
//!   cannot be deleted.
//!
//! # Invariants
//! - Stored names are trimmed and non-empty; capacities are positive.
//! - Ids come from the injected provider and are never reused.
//! - Validation completes before any store mutation.

use crate::model::id::{IdProvider, RoomId};
use crate::model::room::Room;
use crate::repo::booking_store::{BookingError, BookingResult, BookingStore};
use log::{debug, info};

/// Input for [`RoomRegistry::add`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRoom {
    pub name: String,
    pub capacity: i64,
}

/// Partial update for [`RoomRegistry::update`]; absent fields are left
/// untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoomPatch {
    pub name: Option<String>,
    pub capacity: Option<i64>,
}

/// Use-case service owning room administration over an injected store.
pub struct RoomRegistry<S: BookingStore, I: IdProvider> {
    store: S,
    ids: I,
}

impl<S: BookingStore, I: IdProvider> RoomRegistry<S, I> {
    /// Creates a registry over the provided store handle and id strategy.
    pub fn new(store: S, ids: I) -> Self {
        Self { store, ids }
    }

    /// Returns a defensive snapshot of all rooms.
    pub fn list(&self) -> BookingResult<Vec<Room>> {
        self.store.list_rooms()
    }

    /// Returns one room by id.
    pub fn get(&self, id: &RoomId) -> BookingResult<Room> {
        self.store
            .get_room(id)?
            .ok_or_else(|| BookingError::RoomNotFound(id.clone()))
    }

    /// Validates and stores a new room, assigning a fresh id.
    pub fn add(&self, request: &NewRoom) -> BookingResult<Room> {
        let room = Room::new(
            RoomId::new(self.ids.next_id()),
            request.name.as_str(),
            request.capacity,
        )?;
        self.store.insert_room(&room)?;
        info!(
            "event=room_add module=registry status=ok room_id={} capacity={}",
            room.id, room.capacity
        );
        Ok(room)
    }

    /// Applies the supplied fields of `patch` to an existing room.
    ///
    /// Each supplied field is validated with the same rules as [`add`];
    /// the stored record changes only when every supplied field passes.
    ///
    /// [`add`]: RoomRegistry::add
    pub fn update(&self, id: &RoomId, patch: &RoomPatch) -> BookingResult<Room> {
        let mut room = self.get(id)?;
        if let Some(name) = &patch.name {
            room.set_name(name)?;
        }
        if let Some(capacity) = patch.capacity {
            room.set_capacity(capacity)?;
        }
        self.store.update_room(&room)?;
        info!(
            "event=room_update module=registry status=ok room_id={} capacity={}",
            room.id, room.capacity
        );
        Ok(room)
    }

    /// Deletes a room that no reservation references.
    pub fn delete(&self, id: &RoomId) -> BookingResult<()> {
        // Existence check first so an unknown id reports NotFound, not Conflict.
        let room = self.get(id)?;
        let referencing = self.store.reservations_for_room(&room.id)?;
        if !referencing.is_empty() {
            debug!(
                "event=room_delete module=registry status=rejected reason=conflict room_id={} reservations={}",
                room.id,
                referencing.len()
            );
            return Err(BookingError::RoomHasReservations(room.id));
        }
        self.store.delete_room(&room.id)?;
        info!(
            "event=room_delete module=registry status=ok room_id={}",
            room.id
        );
        Ok(())
    }
}
