//! Gearbook equipment reservation - pure domain logic.
//!
//! Calendar arithmetic, recurrence expansion, and the domain types shared by
//! the persistence and service crates. This crate has no database
//! dependencies.

pub mod config;
pub mod constants;
pub mod recurrence;
pub mod time;
pub mod types;
