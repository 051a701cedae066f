//! Shared data model layer (structs only).
//!
//! Domain types are data-only: no filesystem or network side effects.
//! `models.rs` holds the wire DTOs for the infringement report and
//! access-key creation.

pub mod models;
