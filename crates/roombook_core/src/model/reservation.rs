//! Reservation domain model.
//!
//! # Responsibility
//! - Define the booked-slot record exchanged with collaborator layers.
//! - Keep range/headcount invariants next to the data.
//!
//! # Invariants
//! - `start < end`, strictly; the slot is the half-open range `[start, end)`.
//! - `people` is a positive integer.
//! - Records never mutate after creation; there is no update or cancel path.

use crate::model::id::{ReservationId, RoomId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Validation failure for reservation fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReservationValidationError {
    /// `start` was not strictly before `end`.
    InvalidTimeRange {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
    /// Headcount was zero or negative.
    NonPositivePeople(i64),
}

impl Display for ReservationValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTimeRange { start, end } => {
                write!(f, "invalid time range: start {start} must be before end {end}")
            }
            Self::NonPositivePeople(value) => {
                write!(f, "people must be > 0, got {value}")
            }
        }
    }
}

impl Error for ReservationValidationError {}

/// A booked time slot on one room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    /// Stable opaque id assigned by the engine at creation.
    pub id: ReservationId,
    /// Weak reference to the booked room; lookup only, no lifecycle coupling.
    /// Serialized as `roomId` to match the collaborator wire shape.
    #[serde(rename = "roomId")]
    pub room_id: RoomId,
    /// Slot start, inclusive. Serialized as ISO-8601 UTC.
    pub start: DateTime<Utc>,
    /// Slot end, exclusive. Serialized as ISO-8601 UTC.
    pub end: DateTime<Utc>,
    /// Headcount the slot was admitted for.
    pub people: i64,
}

impl Reservation {
    /// Builds a reservation, enforcing record-local invariants.
    ///
    /// Capacity and conflict rules need the room and its existing bookings;
    /// those live in the reservation engine, not here.
    pub fn new(
        id: ReservationId,
        room_id: RoomId,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        people: i64,
    ) -> Result<Self, ReservationValidationError> {
        let reservation = Self {
            id,
            room_id,
            start,
            end,
            people,
        };
        reservation.validate()?;
        Ok(reservation)
    }

    /// Re-checks field invariants; write paths call this before persisting.
    pub fn validate(&self) -> Result<(), ReservationValidationError> {
        if !crate::time::is_valid_range(self.start, self.end) {
            return Err(ReservationValidationError::InvalidTimeRange {
                start: self.start,
                end: self.end,
            });
        }
        if self.people <= 0 {
            return Err(ReservationValidationError::NonPositivePeople(self.people));
        }
        Ok(())
    }
}
