//! In-memory event store.
//!
//! # Responsibility
//! - Admit events through date and title validation.
//! - Serve sorted listings, date/range/week filters and keyword search.
//! - Resolve positional delete/edit against the displayed listing.
//!
//! # Invariants
//! - Internal order is insertion order; storage is never reordered in place.
//! - Displayed indices are 1-based positions in the date-sorted view.
//! - The stable sort keeps same-day events in insertion order everywhere.

use crate::date;
use crate::model::event::Event;
use crate::store::{StoreError, StoreResult};

/// Input model for adding one event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventDraft {
    /// Candidate `YYYY-MM-DD` date, validated on add.
    pub date: String,
    /// Candidate title, trimmed on add; must be non-empty after trimming.
    pub title: String,
    /// Optional venue text.
    pub location: String,
    /// Optional remark text.
    pub note: String,
}

/// Field updates for one displayed event.
///
/// `None` keeps the current value, `Some` replaces it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventPatch {
    pub title: Option<String>,
    pub location: Option<String>,
    pub note: Option<String>,
}

/// One day of a weekly view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayBucket<'a> {
    /// Canonical `YYYY-MM-DD` day.
    pub date: String,
    /// That day's events, sorted by case-insensitive title.
    pub events: Vec<&'a Event>,
}

/// Explicitly-owned in-memory event collection.
///
/// Created empty, mutated by add/delete/edit, discarded at process exit.
/// Callers own the instance; any number of independent stores can coexist.
#[derive(Debug, Default)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns true when the store holds no events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Adds one event from a date and a title, with empty location/note.
    pub fn add_event(&mut self, date: &str, title: &str) -> StoreResult<()> {
        self.add_event_detailed(EventDraft {
            date: date.to_string(),
            title: title.to_string(),
            ..EventDraft::default()
        })
    }

    /// Adds one event with optional location and note.
    ///
    /// The title is trimmed before the emptiness check and before storage;
    /// location and note are stored trimmed as well.
    pub fn add_event_detailed(&mut self, draft: EventDraft) -> StoreResult<()> {
        if !date::is_valid_date(&draft.date) {
            return Err(StoreError::InvalidDate(draft.date));
        }
        let title = draft.title.trim();
        if title.is_empty() {
            return Err(StoreError::EmptyTitle);
        }

        self.events.push(Event::with_details(
            draft.date,
            title,
            draft.location.trim(),
            draft.note.trim(),
        ));
        Ok(())
    }

    /// All events sorted ascending by date.
    ///
    /// This order is the displayed listing: 1-based positions in it are the
    /// index space for [`EventStore::delete_event`] and
    /// [`EventStore::edit_event`].
    pub fn list_all_events(&self) -> Vec<&Event> {
        self.sorted_indices()
            .into_iter()
            .map(|idx| &self.events[idx])
            .collect()
    }

    /// Events on exactly `date`, sorted. An empty result is not an error.
    pub fn list_events_on_date(&self, date: &str) -> StoreResult<Vec<&Event>> {
        if !date::is_valid_date(date) {
            return Err(StoreError::InvalidDate(date.to_string()));
        }

        Ok(self
            .list_all_events()
            .into_iter()
            .filter(|event| event.date == date)
            .collect())
    }

    /// Events with `start <= date <= end`, inclusive both ends, sorted.
    pub fn list_events_in_range(&self, start: &str, end: &str) -> StoreResult<Vec<&Event>> {
        if !date::is_valid_date(start) {
            return Err(StoreError::InvalidDate(start.to_string()));
        }
        if !date::is_valid_date(end) {
            return Err(StoreError::InvalidDate(end.to_string()));
        }
        if start > end {
            return Err(StoreError::InvertedRange {
                start: start.to_string(),
                end: end.to_string(),
            });
        }

        Ok(self
            .list_all_events()
            .into_iter()
            .filter(|event| event.date.as_str() >= start && event.date.as_str() <= end)
            .collect())
    }

    /// Seven consecutive day buckets starting at `start`.
    ///
    /// Each bucket holds that day's events sorted by case-insensitive
    /// title. Days past `9999-12-31` are omitted from the tail.
    pub fn list_events_in_week(&self, start: &str) -> StoreResult<Vec<DayBucket<'_>>> {
        if !date::is_valid_date(start) {
            return Err(StoreError::InvalidDate(start.to_string()));
        }

        let mut buckets = Vec::with_capacity(7);
        let mut day = start.to_string();
        for offset in 0..7 {
            let mut events: Vec<&Event> = self
                .events
                .iter()
                .filter(|event| event.date == day)
                .collect();
            events.sort_by_key(|event| event.title.to_lowercase());
            buckets.push(DayBucket {
                date: day.clone(),
                events,
            });

            if offset < 6 {
                match date::next_day(&day) {
                    Some(next) => day = next,
                    None => break,
                }
            }
        }

        Ok(buckets)
    }

    /// Case-insensitive keyword search over title and note, sorted by date.
    pub fn search_events(&self, keyword: &str) -> StoreResult<Vec<&Event>> {
        let needle = keyword.trim().to_lowercase();
        if needle.is_empty() {
            return Err(StoreError::EmptyKeyword);
        }

        Ok(self
            .list_all_events()
            .into_iter()
            .filter(|event| event.matches_keyword(&needle))
            .collect())
    }

    /// Removes the event at 1-based position `raw_index` of the displayed
    /// listing and returns it.
    pub fn delete_event(&mut self, raw_index: &str) -> StoreResult<Event> {
        let position = self.resolve_displayed_index(raw_index)?;
        Ok(self.events.remove(position))
    }

    /// Applies `patch` to the event at 1-based position `raw_index` of the
    /// displayed listing.
    ///
    /// `None` fields keep their current value. A provided title is trimmed
    /// and must be non-empty; the event is untouched when it is not.
    pub fn edit_event(&mut self, raw_index: &str, patch: &EventPatch) -> StoreResult<()> {
        let position = self.resolve_displayed_index(raw_index)?;

        if let Some(title) = &patch.title {
            let title = title.trim();
            if title.is_empty() {
                return Err(StoreError::EmptyTitle);
            }
            self.events[position].title = title.to_string();
        }
        if let Some(location) = &patch.location {
            self.events[position].location = location.trim().to_string();
        }
        if let Some(note) = &patch.note {
            self.events[position].note = note.trim().to_string();
        }

        Ok(())
    }

    /// Maps a raw 1-based listing index to the underlying storage position.
    ///
    /// Failure order: `EmptyStore`, then `NotANumber`, then `OutOfRange`.
    /// A parseable negative token is numeric and reported as out of range.
    fn resolve_displayed_index(&self, raw_index: &str) -> StoreResult<usize> {
        if self.events.is_empty() {
            return Err(StoreError::EmptyStore);
        }

        let token = raw_index.trim();
        let index: i64 = token
            .parse()
            .map_err(|_| StoreError::NotANumber(token.to_string()))?;

        if index < 1 || index as usize > self.events.len() {
            return Err(StoreError::OutOfRange {
                index,
                count: self.events.len(),
            });
        }

        Ok(self.sorted_indices()[index as usize - 1])
    }

    /// Storage positions ordered as the displayed listing.
    fn sorted_indices(&self) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..self.events.len()).collect();
        // Stable sort: same-day events keep insertion order, and string
        // order on the fixed-width format is chronological order.
        indices.sort_by(|&a, &b| self.events[a].date.cmp(&self.events[b].date));
        indices
    }
}
