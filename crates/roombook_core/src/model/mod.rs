//! Domain model for rooms and reservations.
//!
//! # Responsibility
//! - Define the canonical records moved between services, stores and
//!   collaborator layers.
//! - Keep record-local invariants (name/capacity/range/people validity)
//!   next to the data they protect.
//!
//! # Invariants
//! - Every record is identified by an opaque, stable string id.
//! - Reservations are immutable once created; rooms mutate only through
//!   validated setters.

pub mod id;
pub mod reservation;
pub mod room;
