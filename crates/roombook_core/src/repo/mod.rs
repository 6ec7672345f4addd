//! Store layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the injectable persistence contract consumed by the registry,
//!   engine and query services.
//! - Isolate SQLite query details from business orchestration.
//!
//! # Invariants
//! - Write paths must call model `validate()` before mutating state.
//! - Store APIs return semantic errors (`RoomNotFound`) in addition to
//!   backend transport errors.

pub mod booking_store;
pub mod sqlite_store;
