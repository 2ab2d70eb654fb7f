//! Reconstruction of the `DD/MM/YYYY HH:MM` date cell.

use chrono::{NaiveDate, NaiveDateTime};

use crate::types::DateParseError;

/// Components expected in a date cell: day, month, year, hour, minute.
const DATE_TOKENS: usize = 5;

fn is_separator(c: char) -> bool {
    c == '/' || c == ':' || c.is_whitespace()
}

/// Parse a date cell into a naive (zone-less) date-time.
///
/// Separators are `/`, `:` and any whitespace. Repeated or surrounding
/// separators are collapsed, so `" 15/03/2023  14:30 "` is accepted.
/// The month in the text is 1-based, which is what chrono expects.
pub fn parse_date_text(text: &str) -> Result<NaiveDateTime, DateParseError> {
    let tokens: Vec<&str> = text.split(is_separator).filter(|t| !t.is_empty()).collect();

    if tokens.len() != DATE_TOKENS {
        return Err(DateParseError::TokenCount {
            found: tokens.len(),
        });
    }

    let mut parts = [0u32; DATE_TOKENS];
    for (slot, token) in parts.iter_mut().zip(&tokens) {
        *slot = token.parse().map_err(|_| DateParseError::NotNumeric {
            token: token.to_string(),
        })?;
    }
    let [day, month, year, hour, minute] = parts;

    let out_of_range = || DateParseError::OutOfRange {
        text: text.to_string(),
    };
    let year = i32::try_from(year).map_err(|_| out_of_range())?;

    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(hour, minute, 0))
        .ok_or_else(out_of_range)
}
