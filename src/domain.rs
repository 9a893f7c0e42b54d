//! Domain models for the student register.
//!
//! This module contains the core domain types: the [`Student`] record and
//! the [`Roster`] snapshot of records it lives in.

/// Student record type.
pub mod student;
pub use student::Student;

/// Roster snapshots and the record operations over them.
pub mod roster;
pub use roster::{QueryField, Roster};
