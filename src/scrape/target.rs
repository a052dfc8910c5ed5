// src/scrape/target.rs

use super::events::EventFragment;
use crate::error::ScrapeError;

/// Outcome of the focused target-event lookup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TargetPlace {
    /// No target event configured for this run; the cell reads "n/a".
    Disabled,
    /// Player is not registered for the target event. This is the one
    /// signal that drops a player from the output entirely — a business
    /// rule, not an error.
    NotAttending,
    /// Registered, but nothing under the prior-season label; the cell
    /// reads "-".
    NoPriorResult,
    /// Their place at the prior occurrence of the event.
    Place(u32),
}

impl TargetPlace {
    /// Cell text for rows that stay in the output; `None` for the excluded
    /// case.
    pub fn cell(&self) -> Option<String> {
        match self {
            TargetPlace::Disabled => Some("n/a".to_string()),
            TargetPlace::NotAttending => None,
            TargetPlace::NoPriorResult => Some("-".to_string()),
            TargetPlace::Place(p) => Some(p.to_string()),
        }
    }
}

/// How did this player do at *this* event last time? A narrower question
/// than the season average: it seeds predictions for one specific upcoming
/// tournament. The event may have run under a different name last season,
/// hence the separate prior label (falling back to the current name).
pub fn resolve_target(
    upcoming: &[EventFragment],
    prior: &[EventFragment],
    target_event: Option<&str>,
    prior_label: Option<&str>,
) -> Result<TargetPlace, ScrapeError> {
    let Some(name) = target_event else {
        return Ok(TargetPlace::Disabled);
    };
    if !upcoming.iter().any(|e| e.mentions(name)) {
        return Ok(TargetPlace::NotAttending);
    }
    let label = prior_label.unwrap_or(name);
    match prior.iter().find(|e| e.mentions(label)) {
        Some(event) => Ok(TargetPlace::Place(event.place()?)),
        None => Ok(TargetPlace::NoPriorResult),
    }
}
