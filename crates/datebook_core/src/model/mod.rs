//! Domain model for calendar entries.
//!
//! # Responsibility
//! - Define the canonical event record shared by store, export and CLI.
//!
//! # Invariants
//! - An `Event` admitted by the store always carries a calendar-valid,
//!   fixed-width `YYYY-MM-DD` date and a non-empty trimmed title.

pub mod event;
