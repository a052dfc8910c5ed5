// src/scrape/mod.rs

mod events;
mod placement;
mod row;
mod status;
mod target;

pub use events::{EventFragment, filter_by_marker, prior_events, upcoming_events};
pub use placement::average_placement;
pub use row::build_row;
pub use status::{MemberStatus, member_status};
pub use target::{TargetPlace, resolve_target};

use scraper::Html;

use crate::config::options::{RunOptions, SeasonVariant};
use crate::config::roster::Player;
use crate::error::ScrapeError;

/// Everything we pull out of one parsed stats page, assembled into the
/// player's output row. `Ok(None)` means the target-event rule excluded the
/// player from output entirely.
pub fn extract_row(
    doc: &Html,
    player: &Player,
    options: &RunOptions,
) -> Result<Option<Vec<String>>, ScrapeError> {
    let status = member_status(doc)?;
    if !status.is_current() {
        // Lapsed membership: no stats to gather, the row shows the status.
        return Ok(build_row(
            player,
            &status,
            0,
            0,
            None,
            &TargetPlace::Disabled,
            options.variant,
        ));
    }

    let upcoming = upcoming_events(doc, &options.tour_marker);
    let prior = prior_events(doc, &options.results_selector(), &options.tour_marker)?;
    let average = average_placement(&prior)?;

    let target = match options.variant {
        SeasonVariant::WithTargetEvent => resolve_target(
            &upcoming,
            &prior,
            options.target_event.as_deref(),
            options.prior_label.as_deref(),
        )?,
        SeasonVariant::Basic => TargetPlace::Disabled,
    };

    Ok(build_row(
        player,
        &status,
        upcoming.len(),
        prior.len(),
        average,
        &target,
        options.variant,
    ))
}
