//! Room domain model.
//!
//! # Responsibility
//! - Define the bookable-resource record and its local invariants.
//! - Keep name/capacity mutation behind validated setters.
//!
//! # Invariants
//! - `name` is non-empty after trimming.
//! - `capacity` is a positive integer.

use crate::model::id::RoomId;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Validation failure for room fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomValidationError {
    /// Name was empty or whitespace-only.
    EmptyName,
    /// Capacity was zero or negative.
    NonPositiveCapacity(i64),
}

impl Display for RoomValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "room name is required"),
            Self::NonPositiveCapacity(value) => {
                write!(f, "room capacity must be > 0, got {value}")
            }
        }
    }
}

impl Error for RoomValidationError {}

/// A bookable meeting room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Stable opaque id assigned by the registry at insertion.
    pub id: RoomId,
    /// Display name, trimmed, never empty.
    pub name: String,
    /// Maximum headcount admitted by the reservation engine.
    pub capacity: i64,
}

impl Room {
    /// Builds a room, trimming the name and enforcing field invariants.
    pub fn new(
        id: RoomId,
        name: impl Into<String>,
        capacity: i64,
    ) -> Result<Self, RoomValidationError> {
        let room = Self {
            id,
            name: name.into().trim().to_string(),
            capacity,
        };
        room.validate()?;
        Ok(room)
    }

    /// Re-checks field invariants; write paths call this before persisting.
    pub fn validate(&self) -> Result<(), RoomValidationError> {
        if self.name.trim().is_empty() {
            return Err(RoomValidationError::EmptyName);
        }
        if self.capacity <= 0 {
            return Err(RoomValidationError::NonPositiveCapacity(self.capacity));
        }
        Ok(())
    }

    /// Replaces the name after trimming; rejects blank input.
    pub fn set_name(&mut self, name: &str) -> Result<(), RoomValidationError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(RoomValidationError::EmptyName);
        }
        self.name = trimmed.to_string();
        Ok(())
    }

    /// Replaces the capacity; rejects non-positive values.
    pub fn set_capacity(&mut self, capacity: i64) -> Result<(), RoomValidationError> {
        if capacity <= 0 {
            return Err(RoomValidationError::NonPositiveCapacity(capacity));
        }
        self.capacity = capacity;
        Ok(())
    }
}
