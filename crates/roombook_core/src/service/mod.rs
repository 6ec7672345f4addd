//! Core booking services.
//!
//! # Responsibility
//! - Orchestrate store calls into use-case level APIs: room administration,
//!   reservation admission, read-only queries.
//! - Keep collaborator layers decoupled from storage details.

pub mod booking_queries;
pub mod reservation_engine;
pub mod room_registry;
