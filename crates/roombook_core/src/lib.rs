//! Core booking domain for RoomBook: rooms, reservations, and the
//! admission rules that keep them consistent.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod time;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::id::{CounterIds, IdProvider, ReservationId, RoomId, UuidIds};
pub use model::reservation::{Reservation, ReservationValidationError};
pub use model::room::{Room, RoomValidationError};
pub use repo::booking_store::{
    BookingError, BookingResult, BookingStore, ErrorKind, MemoryStore,
};
pub use repo::sqlite_store::SqliteStore;
pub use service::booking_queries::BookingQueries;
pub use service::reservation_engine::{ReservationEngine, ReservationRequest};
pub use service::room_registry::{NewRoom, RoomPatch, RoomRegistry};
pub use time::TimeFormatError;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
