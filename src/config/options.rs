// src/config/options.rs

use std::path::PathBuf;

use super::consts::*;
use crate::csv::Delim;

/// Which columns a season's table carries. Earlier seasons shipped the plain
/// count/average table; later ones added the focused target-event column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeasonVariant {
    Basic,
    WithTargetEvent,
}

/// What to do with the rest of the roster when one player's fetch or
/// extraction fails.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailurePolicy {
    SkipAndContinue,
    Abort,
}

/// Everything tunable for one run, assembled once at startup and passed
/// down. Nothing below the CLI reads the environment.
#[derive(Clone, Debug)]
pub struct RunOptions {
    pub roster: PathBuf,             // players TOML
    pub year: u16,                   // prior season (the stats page year)
    pub tour_marker: String,         // literal substring naming the tour
    pub division: String,            // results table is per-division
    pub variant: SeasonVariant,
    pub target_event: Option<String>,
    pub prior_label: Option<String>, // the target event's name last season
    pub out: PathBuf,
    pub format: Delim,
    pub on_failure: FailurePolicy,
}

impl RunOptions {
    pub fn new(roster: PathBuf, year: u16) -> Self {
        Self {
            roster,
            year,
            tour_marker: DEFAULT_TOUR_MARKER.into(),
            division: DEFAULT_DIVISION.into(),
            variant: SeasonVariant::Basic,
            target_event: None,
            prior_label: None,
            out: PathBuf::from(format!("{}.{}", DEFAULT_OUT_STEM, Delim::Csv.ext())),
            format: Delim::Csv,
            on_failure: FailurePolicy::SkipAndContinue,
        }
    }

    /// Header row for the output table. Registrations listed on a {year}
    /// stats page are for {year + 1} events, hence the offset label.
    pub fn headers(&self) -> Vec<String> {
        let mut h = vec![
            "PLAYER".to_string(),
            "RATING".to_string(),
            format!("{} EVENTS", self.year + 1),
            format!("{} EVENTS", self.year),
            format!("{} AVG PLACE", self.year),
        ];
        if self.variant == SeasonVariant::WithTargetEvent {
            h.push(match &self.target_event {
                Some(name) => format!("{} PLACE", name.to_uppercase()),
                None => "TARGET PLACE".to_string(),
            });
        }
        h.push("PDGA #".to_string());
        h
    }

    /// CSS selector for the division-scoped results container.
    pub fn results_selector(&self) -> String {
        format!("#player-results-{}", self.division)
    }

    /// Site path of one player's season stats page.
    pub fn stats_path(&self, pdga_number: u32) -> String {
        format!("/player/{}/stats/{}", pdga_number, self.year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts() -> RunOptions {
        RunOptions::new(PathBuf::from("players.toml"), 2021)
    }

    #[test]
    fn basic_headers() {
        assert_eq!(
            opts().headers(),
            vec![
                "PLAYER",
                "RATING",
                "2022 EVENTS",
                "2021 EVENTS",
                "2021 AVG PLACE",
                "PDGA #"
            ]
        );
    }

    #[test]
    fn target_column_sits_before_pdga_number() {
        let mut o = opts();
        o.variant = SeasonVariant::WithTargetEvent;
        o.target_event = Some("Waco".into());
        let h = o.headers();
        assert_eq!(h[5], "WACO PLACE");
        assert_eq!(h.last().map(String::as_str), Some("PDGA #"));
    }

    #[test]
    fn target_column_without_event_name() {
        let mut o = opts();
        o.variant = SeasonVariant::WithTargetEvent;
        assert_eq!(o.headers()[5], "TARGET PLACE");
    }

    #[test]
    fn paths_and_selectors() {
        let o = opts();
        assert_eq!(o.stats_path(27523), "/player/27523/stats/2021");
        assert_eq!(o.results_selector(), "#player-results-mpo");
    }
}
