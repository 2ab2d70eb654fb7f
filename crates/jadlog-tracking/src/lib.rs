//! Jadlog tracking — fetch a shipment's tracking page and parse its history
//! table into typed events.

pub mod date;
pub mod fetcher;
pub mod parser;
pub mod types;

pub use date::parse_date_text;
pub use fetcher::{
    track, FetcherConfig, TrackingFetcher, TrackingSource, DEFAULT_TIMEOUT_MS,
    DEFAULT_TRACKING_URL,
};
pub use parser::{map_row, parse_events, parse_rows};
pub use types::*;
