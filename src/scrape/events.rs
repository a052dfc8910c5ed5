// src/scrape/events.rs

use scraper::{ElementRef, Html, Selector};

use crate::config::consts::{PLACE_SELECTOR, UPCOMING_SELECTOR};
use crate::core::sanitize::normalize_ws;
use crate::error::ScrapeError;

/// One tournament entry lifted out of the page: an upcoming-events list
/// item or a results-table row. Owns a snapshot of what later stages need
/// so the page document can be dropped. Extraction never mutates the page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EventFragment {
    text: String,
    place: Option<String>,
}

impl EventFragment {
    fn from_element(el: ElementRef<'_>) -> Self {
        let place_sel = Selector::parse(PLACE_SELECTOR).unwrap();
        Self {
            text: normalize_ws(&el.text().collect::<String>()),
            place: el
                .select(&place_sel)
                .next()
                .map(|cell| normalize_ws(&cell.text().collect::<String>())),
        }
    }

    /// Flattened visible text of the entry.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Substring test against the visible text. This is the tour filter and
    /// the target-event match; see `filter_by_marker` for why substrings.
    pub fn mentions(&self, marker: &str) -> bool {
        self.text.contains(marker)
    }

    /// The integer content of the entry's place field. Leading digits only,
    /// so a tied "5T" cell still reads as 5; a missing or non-numeric cell
    /// is a `MissingField`.
    pub fn place(&self) -> Result<u32, ScrapeError> {
        self.place
            .as_deref()
            .and_then(parse_leading_int)
            .ok_or_else(|| ScrapeError::MissingField {
                field: PLACE_SELECTOR.to_string(),
            })
    }
}

fn parse_leading_int(s: &str) -> Option<u32> {
    let digits: String = s.chars().take_while(char::is_ascii_digit).collect();
    digits.parse().ok()
}

/// Tour events the player is registered for, in page order. A page without
/// the upcoming container simply has none — that is not an error.
pub fn upcoming_events(doc: &Html, marker: &str) -> Vec<EventFragment> {
    let region = Selector::parse(UPCOMING_SELECTOR).unwrap();
    let item = Selector::parse("li").unwrap();
    let Some(container) = doc.select(&region).next() else {
        return Vec::new();
    };
    filter_by_marker(container.select(&item).map(EventFragment::from_element), marker)
}

/// Tour rows of the division-scoped results table, in page order. Missing
/// container means an empty season, not an error. Header rows fall out
/// naturally: they never carry the tour marker.
pub fn prior_events(
    doc: &Html,
    results_selector: &str,
    marker: &str,
) -> Result<Vec<EventFragment>, ScrapeError> {
    let region = Selector::parse(results_selector)
        .map_err(|_| ScrapeError::Selector(results_selector.to_string()))?;
    let row = Selector::parse("tr").unwrap();
    let Some(container) = doc.select(&region).next() else {
        return Ok(Vec::new());
    };
    Ok(filter_by_marker(
        container.select(&row).map(EventFragment::from_element),
        marker,
    ))
}

/// Keep only entries whose text mentions the tour marker. Substring
/// matching on the human-readable label is deliberate: the markup exposes
/// no structured tour field, so the label is the most robust signal there
/// is. A marker appearing inside an unrelated string counts as a match; no
/// disambiguation is attempted.
pub fn filter_by_marker<I>(events: I, marker: &str) -> Vec<EventFragment>
where
    I: IntoIterator<Item = EventFragment>,
{
    events.into_iter().filter(|e| e.mentions(marker)).collect()
}
