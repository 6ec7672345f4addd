//! Opaque identifiers and injectable id-generation strategies.
//!
//! # Responsibility
//! - Give rooms and reservations distinct id newtypes so they cannot be
//!   swapped in signatures.
//! - Keep id generation behind a single-method trait so embedders can pick
//!   counters, UUIDs or storage-assigned keys.
//!
//! # Invariants
//! - Ids are opaque strings; the core never parses structure out of them.
//! - A provider never hands out the same id twice within one instance.

use serde::{Deserialize, Serialize};
use std::cell::Cell;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier of a room.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomId(String);

/// Stable identifier of a reservation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReservationId(String);

macro_rules! opaque_id {
    ($name:ident) => {
        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }
    };
}

opaque_id!(RoomId);
opaque_id!(ReservationId);

/// Id-generation strategy injected into registry and engine constructors.
///
/// Interior mutability keeps the call site at `&self` so services can hold a
/// provider without threading `&mut` through every operation.
pub trait IdProvider {
    /// Returns a fresh id, unique within this provider instance.
    fn next_id(&self) -> String;
}

/// Monotonic `1, 2, 3, …` ids, matching storage-assigned integer keys.
#[derive(Debug)]
pub struct CounterIds {
    next: Cell<u64>,
}

impl CounterIds {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// Starts the sequence at `first`, for embedders resuming a known key.
    pub fn starting_at(first: u64) -> Self {
        Self {
            next: Cell::new(first),
        }
    }
}

impl Default for CounterIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdProvider for CounterIds {
    fn next_id(&self) -> String {
        let id = self.next.get();
        self.next.set(id + 1);
        id.to_string()
    }
}

/// Random UUIDv4 ids for embedders that need global uniqueness.
#[derive(Debug, Default)]
pub struct UuidIds;

impl IdProvider for UuidIds {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}
