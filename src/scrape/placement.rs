// src/scrape/placement.rs

use super::events::EventFragment;
use crate::error::ScrapeError;

/// Mean finishing place across the given prior events, rounded to the
/// nearest whole place with halves rounding up. No prior events yields
/// `None` — an empty cell downstream, deliberately distinguishable from a
/// real place of 0 and never a division by zero.
pub fn average_placement(prior: &[EventFragment]) -> Result<Option<u32>, ScrapeError> {
    if prior.is_empty() {
        return Ok(None);
    }
    let mut sum: u64 = 0;
    for event in prior {
        sum += u64::from(event.place()?);
    }
    // f64::round is half-away-from-zero; places are positive, so ties go up.
    Ok(Some((sum as f64 / prior.len() as f64).round() as u32))
}
