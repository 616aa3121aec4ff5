//! Event domain record.

use serde::{Deserialize, Serialize};

/// A single calendar entry.
///
/// `date` is canonical `YYYY-MM-DD`, validated at store admission, so plain
/// string comparison on it is chronological ordering. Events carry no unique
/// id; identity is positional within the displayed listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Calendar day in canonical `YYYY-MM-DD` form.
    pub date: String,
    /// Non-empty display title.
    pub title: String,
    /// Free-text venue; empty when not set.
    #[serde(default)]
    pub location: String,
    /// Free-text remark; empty when not set.
    #[serde(default)]
    pub note: String,
}

impl Event {
    /// Creates an event with empty location and note.
    pub fn new(date: impl Into<String>, title: impl Into<String>) -> Self {
        Self::with_details(date, title, "", "")
    }

    /// Creates an event with all fields set.
    pub fn with_details(
        date: impl Into<String>,
        title: impl Into<String>,
        location: impl Into<String>,
        note: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            title: title.into(),
            location: location.into(),
            note: note.into(),
        }
    }

    /// Returns true when `needle_lower` occurs in the title or the note,
    /// ignoring case. Expects an already-lowercased needle; the location
    /// field is not searched.
    pub fn matches_keyword(&self, needle_lower: &str) -> bool {
        self.title.to_lowercase().contains(needle_lower)
            || self.note.to_lowercase().contains(needle_lower)
    }
}
