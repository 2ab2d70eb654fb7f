//! Extract tracking rows from the carrier's HTML page.
//!
//! The page carries a single history table. Each `tbody` row has (at least)
//! five `td` cells, and the useful text of each cell sits inside a `span`
//! rather than directly in the cell. Row extraction (`parse_rows`) is kept
//! apart from record mapping (`map_row`) so the HTML side can change
//! without touching the mapping.

use scraper::{ElementRef, Html, Selector};

use crate::date::parse_date_text;
use crate::types::{RawRow, TrackingError, TrackingEvent, TrackingResult, ROW_CELLS};

const ROW_SELECTOR: &str = "table > tbody > tr";
const TEXT_SELECTOR: &str = "span";

fn selector(css: &str) -> TrackingResult<Selector> {
    Selector::parse(css).map_err(|e| TrackingError::Selector(format!("{css}: {e}")))
}

/// Text of the first `span` inside a cell, or empty when there is none.
fn cell_text(cell: ElementRef<'_>, text_sel: &Selector) -> String {
    cell.select(text_sel)
        .next()
        .map(|span| span.text().collect())
        .unwrap_or_default()
}

/// Walk every `table > tbody > tr` in document order and pull the text of
/// cells 1 through 5. Missing cells or spans give empty strings.
pub fn parse_rows(markup: &str) -> TrackingResult<Vec<RawRow>> {
    let row_sel = selector(ROW_SELECTOR)?;
    let text_sel = selector(TEXT_SELECTOR)?;
    let document = Html::parse_document(markup);

    let rows = document
        .select(&row_sel)
        .map(|row| {
            let mut raw = RawRow::default();
            let cells = row
                .children()
                .filter_map(ElementRef::wrap)
                .filter(|el| el.value().name() == "td");
            for (slot, cell) in raw.cells.iter_mut().zip(cells.take(ROW_CELLS)) {
                *slot = cell_text(cell, &text_sel);
            }
            raw
        })
        .collect();

    Ok(rows)
}

/// Turn one raw row into an event.
///
/// An unreadable date does not drop the row: the event keeps its raw
/// `date_str` and gets no timestamp.
pub fn map_row(index: usize, row: RawRow) -> TrackingEvent {
    let timestamp = match parse_date_text(row.date_text()) {
        Ok(dt) => Some(dt),
        Err(e) => {
            tracing::warn!(row = index, date_text = %row.date_text(), "Unreadable date cell: {e}");
            None
        }
    };

    let [date_str, origin, status, destination, document] = row.cells;
    TrackingEvent {
        date_str,
        origin,
        status,
        destination,
        document,
        timestamp,
    }
}

/// Parse a whole tracking page into events, in page order.
pub fn parse_events(markup: &str) -> TrackingResult<Vec<TrackingEvent>> {
    let rows = parse_rows(markup)?;
    tracing::debug!("Found {} tracking rows", rows.len());

    Ok(rows
        .into_iter()
        .enumerate()
        .map(|(i, row)| map_row(i, row))
        .collect())
}
