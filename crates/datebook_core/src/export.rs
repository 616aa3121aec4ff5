//! CSV export for spreadsheet use.
//!
//! # Responsibility
//! - Write the full event listing as `Date,Title,Location,Note` rows to
//!   any `io::Write` sink.
//!
//! # Invariants
//! - Rows are sorted ascending by date, matching the displayed listing.
//! - Quoting and escaping are delegated to the `csv` writer.

use crate::store::event_store::EventStore;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::Write;

/// Failure kinds for CSV export.
#[derive(Debug)]
pub enum ExportError {
    /// The store holds no events to export.
    NothingToExport,
    /// CSV encoding failure.
    Csv(csv::Error),
    /// Sink write failure.
    Io(std::io::Error),
}

impl Display for ExportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NothingToExport => write!(f, "no events to export"),
            Self::Csv(err) => write!(f, "{err}"),
            Self::Io(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ExportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NothingToExport => None,
            Self::Csv(err) => Some(err),
            Self::Io(err) => Some(err),
        }
    }
}

impl From<csv::Error> for ExportError {
    fn from(value: csv::Error) -> Self {
        Self::Csv(value)
    }
}

/// Writes all events, date-sorted, as CSV with a header row.
///
/// Refuses to export an empty store. Returns the number of event rows
/// written (excluding the header).
pub fn export_all_events<W: Write>(store: &EventStore, writer: W) -> Result<usize, ExportError> {
    if store.is_empty() {
        return Err(ExportError::NothingToExport);
    }

    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(["Date", "Title", "Location", "Note"])?;

    let events = store.list_all_events();
    for event in &events {
        csv_writer.write_record([
            event.date.as_str(),
            event.title.as_str(),
            event.location.as_str(),
            event.note.as_str(),
        ])?;
    }
    csv_writer.flush().map_err(ExportError::Io)?;

    Ok(events.len())
}
