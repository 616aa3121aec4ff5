//! Event store and its operation errors.
//!
//! # Responsibility
//! - Maintain the in-memory event collection behind validated operations.
//! - Return discriminated failure kinds; message rendering stays with the
//!   caller.
//!
//! # Invariants
//! - Every stored event holds a calendar-valid date and a non-empty title.
//! - Listings are sorted ascending by date; same-day events keep their
//!   relative insertion order.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod event_store;

pub use event_store::{DayBucket, EventDraft, EventPatch, EventStore};

pub type StoreResult<T> = Result<T, StoreError>;

/// Expected, recoverable failure kinds for store operations.
///
/// Never process-fatal; each variant carries the offending value where one
/// exists so callers can render it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Input is not a calendar-valid `YYYY-MM-DD` date.
    InvalidDate(String),
    /// Event title is empty after trimming.
    EmptyTitle,
    /// Search keyword is empty after trimming.
    EmptyKeyword,
    /// The store holds no events to operate on.
    EmptyStore,
    /// Index token does not parse as an integer.
    NotANumber(String),
    /// Numeric index falls outside the 1-based displayed listing.
    OutOfRange { index: i64, count: usize },
    /// Range query bounds are reversed.
    InvertedRange { start: String, end: String },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate(text) => {
                write!(f, "invalid calendar date `{text}`; expected YYYY-MM-DD")
            }
            Self::EmptyTitle => write!(f, "event title cannot be empty"),
            Self::EmptyKeyword => write!(f, "search keyword cannot be empty"),
            Self::EmptyStore => write!(f, "no events in the store"),
            Self::NotANumber(token) => write!(f, "event index `{token}` is not a number"),
            Self::OutOfRange { index, count } => {
                write!(f, "event index {index} is out of range 1..={count}")
            }
            Self::InvertedRange { start, end } => {
                write!(f, "start date `{start}` is after end date `{end}`")
            }
        }
    }
}

impl Error for StoreError {}
