//! Reservation admission and creation.
//!
//! # Responsibility
//! - Decide whether a candidate slot is admissible against the room's
//!   capacity and its existing reservations.
//! - Create reservations as the single atomic unit exposed to callers.
//!
//! # Invariants
//! - Check order is a contract: room lookup, time range, headcount,
//!   capacity, then the overlap scan. Error precedence follows it.
//! - Admitted reservations on one room never overlap as half-open ranges;
//!   touching boundaries are allowed.
//! - No store mutation happens before every check has passed.

use crate::model::id::{IdProvider, ReservationId, RoomId};
use crate::model::reservation::{Reservation, ReservationValidationError};
use crate::repo::booking_store::{BookingError, BookingResult, BookingStore};
use crate::time::{is_valid_range, overlaps};
use chrono::{DateTime, Utc};
use log::{debug, info};

/// Candidate reservation handed to [`ReservationEngine::create`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationRequest {
    pub room_id: RoomId,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub people: i64,
}

/// Use-case service owning reservation admission over an injected store.
///
/// `create` is the public atomic unit. Pairing `check_availability` with a
/// separate insert re-opens the check-then-act window; embedders that share
/// a store across actors must serialize `create` calls instead.
pub struct ReservationEngine<S: BookingStore, I: IdProvider> {
    store: S,
    ids: I,
}

impl<S: BookingStore, I: IdProvider> ReservationEngine<S, I> {
    /// Creates an engine over the provided store handle and id strategy.
    pub fn new(store: S, ids: I) -> Self {
        Self { store, ids }
    }

    /// Runs the admission check without mutating anything.
    ///
    /// Checks in contract order:
    /// 1. the room exists,
    /// 2. `start < end` strictly,
    /// 3. `people > 0`,
    /// 4. `people` fits the room capacity,
    /// 5. no existing reservation on the room overlaps `[start, end)`.
    pub fn check_availability(
        &self,
        room_id: &RoomId,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        people: i64,
    ) -> BookingResult<()> {
        let room = self
            .store
            .get_room(room_id)?
            .ok_or_else(|| BookingError::RoomNotFound(room_id.clone()))?;

        if !is_valid_range(start, end) {
            return Err(ReservationValidationError::InvalidTimeRange { start, end }.into());
        }
        if people <= 0 {
            return Err(ReservationValidationError::NonPositivePeople(people).into());
        }
        if people > room.capacity {
            return Err(BookingError::CapacityExceeded {
                requested: people,
                capacity: room.capacity,
            });
        }

        // First overlap wins; scan order does not change the outcome.
        let existing = self.store.reservations_for_room(room_id)?;
        if existing
            .iter()
            .any(|reservation| overlaps(start, end, reservation.start, reservation.end))
        {
            return Err(BookingError::SlotConflict {
                room_id: room_id.clone(),
            });
        }

        Ok(())
    }

    /// Admits and stores a candidate reservation, returning the stored record.
    pub fn create(&self, request: &ReservationRequest) -> BookingResult<Reservation> {
        if let Err(err) = self.check_availability(
            &request.room_id,
            request.start,
            request.end,
            request.people,
        ) {
            debug!(
                "event=reservation_create module=engine status=rejected room_id={} reason={:?}",
                request.room_id,
                err.kind()
            );
            return Err(err);
        }

        let reservation = Reservation::new(
            ReservationId::new(self.ids.next_id()),
            request.room_id.clone(),
            request.start,
            request.end,
            request.people,
        )?;
        self.store.append_reservation(&reservation)?;
        info!(
            "event=reservation_create module=engine status=ok reservation_id={} room_id={} people={}",
            reservation.id, reservation.room_id, reservation.people
        );
        Ok(reservation)
    }
}
