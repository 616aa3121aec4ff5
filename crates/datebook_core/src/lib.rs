//! Core domain logic for Datebook, an in-memory calendar event tracker.
//! This crate is the single source of truth for business invariants; the
//! CLI crate only renders menus and messages around it.

pub mod date;
pub mod export;
pub mod logging;
pub mod menu;
pub mod model;
pub mod store;

pub use date::{days_in_month, is_leap_year, is_valid_date, next_day, DATE_FORMAT};
pub use export::{export_all_events, ExportError};
pub use logging::{default_log_level, init_logging, logging_status};
pub use menu::{read_menu_choice, MenuChoiceError};
pub use model::event::Event;
pub use store::{DayBucket, EventDraft, EventPatch, EventStore, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
