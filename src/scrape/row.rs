// src/scrape/row.rs

use super::status::MemberStatus;
use super::target::TargetPlace;
use crate::config::options::SeasonVariant;
use crate::config::roster::Player;

/// Assemble the output row for one player. Always name and rating first,
/// PDGA number last. `None` means the player is excluded from the output
/// entirely (target-event rule).
pub fn build_row(
    player: &Player,
    status: &MemberStatus,
    upcoming_count: usize,
    prior_count: usize,
    average: Option<u32>,
    target: &TargetPlace,
    variant: SeasonVariant,
) -> Option<Vec<String>> {
    let with_target = variant == SeasonVariant::WithTargetEvent;

    if !status.is_current() {
        // Lapsed membership: the status string stands in for every
        // statistic, so the table shows *why* the numbers are missing.
        let stat_cells = if with_target { 4 } else { 3 };
        let mut row = vec![player.name.clone(), player.rating.to_string()];
        row.extend((0..stat_cells).map(|_| status.as_str().to_string()));
        row.push(player.pdga_number.to_string());
        return Some(row);
    }

    let target_cell = if with_target {
        Some(target.cell()?)
    } else {
        None
    };

    let mut row = vec![
        player.name.clone(),
        player.rating.to_string(),
        upcoming_count.to_string(),
        prior_count.to_string(),
        average.map(|a| a.to_string()).unwrap_or_default(),
    ];
    row.extend(target_cell);
    row.push(player.pdga_number.to_string());
    Some(row)
}
