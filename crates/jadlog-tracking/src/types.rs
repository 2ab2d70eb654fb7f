//! Core data types for tracking events and the errors the library can raise.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Number of cells read from each row of the tracking table.
pub const ROW_CELLS: usize = 5;

/// One status update from the carrier's tracking history table.
///
/// Field names on the wire follow the host's output shape (`dateStr`,
/// `date`), not the Rust names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackingEvent {
    /// Date cell text exactly as it appeared in the page.
    #[serde(rename = "dateStr")]
    pub date_str: String,
    pub origin: String,
    pub status: String,
    pub destination: String,
    pub document: String,
    /// Naive local date-time rebuilt from `date_str`; `None` when the cell
    /// did not hold a usable `DD/MM/YYYY HH:MM` value.
    #[serde(rename = "date")]
    pub timestamp: Option<NaiveDateTime>,
}

/// The five cell texts of one table row, before any mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    pub cells: [String; ROW_CELLS],
}

impl RawRow {
    pub fn date_text(&self) -> &str {
        &self.cells[0]
    }
}

/// Why a date cell could not be turned into a date-time.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DateParseError {
    #[error("expected 5 date components, found {found}")]
    TokenCount { found: usize },

    #[error("date component is not a number: {token:?}")]
    NotNumeric { token: String },

    #[error("date components out of range: {text:?}")]
    OutOfRange { text: String },
}

/// Errors that can occur while fetching or parsing a tracking page.
#[derive(thiserror::Error, Debug)]
pub enum TrackingError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    #[error("Invalid selector: {0}")]
    Selector(String),

    #[error("Date error: {0}")]
    Date(#[from] DateParseError),
}

/// Convenience result type.
pub type TrackingResult<T> = Result<T, TrackingError>;
