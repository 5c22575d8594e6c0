//! Gearbook equipment reservation - scheduling and validation services.
//!
//! The transport layer hands creation requests to this crate; it expands
//! recurrences, validates each occurrence against existing reservations, and
//! commits occurrences one at a time with fail-fast semantics.

pub mod error;
pub mod reservation;
