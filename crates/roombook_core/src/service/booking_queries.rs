//! Read-only reservation queries.
//!
//! # Responsibility
//! - Filter reservations by room and by UTC calendar day.
//!
//! # Invariants
//! - Results preserve insertion order.
//! - `by_day` matches on the reservation's start day only; a slot spanning
//!   midnight is reported under the day it begins.

use crate::model::id::RoomId;
use crate::model::reservation::Reservation;
use crate::repo::booking_store::{BookingResult, BookingStore};
use crate::time::same_calendar_day;
use chrono::{DateTime, Utc};

/// Read-only query surface over an injected store.
pub struct BookingQueries<S: BookingStore> {
    store: S,
}

impl<S: BookingStore> BookingQueries<S> {
    /// Creates a query layer over the provided store handle.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// All reservations referencing `room_id`, insertion order.
    ///
    /// An unknown room yields an empty list, not an error.
    pub fn by_room(&self, room_id: &RoomId) -> BookingResult<Vec<Reservation>> {
        self.store.reservations_for_room(room_id)
    }

    /// All reservations starting on the same UTC calendar day as `day`.
    pub fn by_day(&self, day: DateTime<Utc>) -> BookingResult<Vec<Reservation>> {
        let reservations = self.store.list_reservations()?;
        Ok(reservations
            .into_iter()
            .filter(|reservation| same_calendar_day(reservation.start, day))
            .collect())
    }

    /// Every reservation, insertion order.
    pub fn list_all(&self) -> BookingResult<Vec<Reservation>> {
        self.store.list_reservations()
    }
}
