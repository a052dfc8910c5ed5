// tests/runner_e2e.rs
//
// The sequential player loop end to end, against a canned document source
// and an in-memory sink: header layout, row order, the target exclusion
// rule and both failure policies.

use std::collections::HashMap;
use std::path::PathBuf;

use pdga_scrape::config::options::{FailurePolicy, RunOptions, SeasonVariant};
use pdga_scrape::config::roster::Player;
use pdga_scrape::core::net::DocumentSource;
use pdga_scrape::csv::{Delim, RowSink};
use pdga_scrape::error::ScrapeError;
use pdga_scrape::runner::{RunSummary, run_with};

/// Canned pages keyed by request path; anything else is a 404.
struct CannedSource {
    pages: HashMap<String, String>,
}

impl CannedSource {
    fn new(pages: &[(u32, String)]) -> Self {
        Self {
            pages: pages
                .iter()
                .map(|(pdga, html)| (format!("/player/{pdga}/stats/2021"), html.clone()))
                .collect(),
        }
    }
}

impl DocumentSource for CannedSource {
    fn fetch(&self, path: &str) -> Result<String, ScrapeError> {
        self.pages.get(path).cloned().ok_or(ScrapeError::Http {
            status: 404,
            url: path.to_string(),
        })
    }
}

fn options() -> RunOptions {
    RunOptions::new(PathBuf::from("players.toml"), 2021)
}

fn player(name: &str, rating: u32, pdga: u32) -> Player {
    Player {
        name: name.into(),
        rating,
        pdga_number: pdga,
    }
}

fn stats_page(status: &str, upcoming: &[&str], prior: &[(&str, &str)]) -> String {
    let upcoming_items: String = upcoming
        .iter()
        .map(|name| format!("<li><a>{name}</a></li>"))
        .collect();
    let prior_rows: String = prior
        .iter()
        .map(|(name, place)| {
            format!(r#"<tr><td class="place">{place}</td><td><a>{name}</a></td></tr>"#)
        })
        .collect();
    format!(
        r#"<html><body>
        <li class="membership-status"><a>{status}</a></li>
        <div class="upcoming-events"><ul>{upcoming_items}</ul></div>
        <div id="player-results-mpo"><table>
          <tr><th>Place</th><th>Tournament</th></tr>
          {prior_rows}
        </table></div>
        </body></html>"#
    )
}

fn run_to_string(
    options: &RunOptions,
    players: &[Player],
    source: &CannedSource,
) -> (RunSummary, String) {
    let mut buf = Vec::new();
    let summary = {
        let mut sink = RowSink::from_writer(&mut buf, options.format);
        let summary = run_with(options, players, source, &mut sink).unwrap();
        sink.finish().unwrap();
        summary
    };
    (summary, String::from_utf8(buf).unwrap())
}

#[test]
fn three_player_roster_one_current() {
    let source = CannedSource::new(&[
        (
            27523,
            stats_page(
                "Current",
                &["DGPT - Jonesboro Open", "Local B-Tier"],
                &[("DGPT - Jonesboro Open", "5"), ("DGPT - Waco", "7")],
            ),
        ),
        (1001, stats_page("Expired", &[], &[])),
        (1002, stats_page("Current", &[], &[])),
    ]);
    let players = vec![
        player("Paul McBeth", 1048, 27523),
        player("Lapsed Larry", 900, 1001),
        player("Rookie Rita", 930, 1002),
    ];

    let (summary, text) = run_to_string(&options(), &players, &source);
    assert_eq!(
        summary,
        RunSummary {
            rows_written: 3,
            skipped_on_error: 0,
            excluded_by_target: 0
        }
    );
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines,
        vec![
            "PLAYER,RATING,2022 EVENTS,2021 EVENTS,2021 AVG PLACE,PDGA #",
            "Paul McBeth,1048,1,2,6,27523",
            "Lapsed Larry,900,Expired,Expired,Expired,1001",
            "Rookie Rita,930,0,0,,1002",
        ]
    );
}

#[test]
fn target_rule_drops_non_attendees_silently() {
    let source = CannedSource::new(&[
        (
            1,
            stats_page("Current", &["DGPT - Waco"], &[("DGPT - Waco", "3")]),
        ),
        (2, stats_page("Current", &["DGPT - Jonesboro Open"], &[])),
    ]);
    let players = vec![player("Going", 1000, 1), player("Staying Home", 990, 2)];

    let mut opts = options();
    opts.variant = SeasonVariant::WithTargetEvent;
    opts.target_event = Some("Waco".into());
    opts.prior_label = Some("Waco".into());

    let (summary, text) = run_to_string(&opts, &players, &source);
    assert_eq!(summary.rows_written, 1);
    assert_eq!(summary.excluded_by_target, 1);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines,
        vec![
            "PLAYER,RATING,2022 EVENTS,2021 EVENTS,2021 AVG PLACE,WACO PLACE,PDGA #",
            "Going,1000,1,1,3,3,1",
        ]
    );
}

#[test]
fn skip_policy_keeps_going_past_a_failed_fetch() {
    let source = CannedSource::new(&[(2, stats_page("Current", &[], &[]))]);
    let players = vec![player("Missing Page", 1000, 1), player("Fine", 990, 2)];

    let (summary, text) = run_to_string(&options(), &players, &source);
    assert_eq!(summary.rows_written, 1);
    assert_eq!(summary.skipped_on_error, 1);
    assert!(text.contains("Fine,990"));
    assert!(!text.contains("Missing Page"));
}

#[test]
fn abort_policy_stops_on_first_failure() {
    let source = CannedSource::new(&[(2, stats_page("Current", &[], &[]))]);
    let players = vec![player("Missing Page", 1000, 1), player("Fine", 990, 2)];

    let mut opts = options();
    opts.on_failure = FailurePolicy::Abort;

    let mut buf = Vec::new();
    let mut sink = RowSink::from_writer(&mut buf, opts.format);
    let err = run_with(&opts, &players, &source, &mut sink).unwrap_err();
    assert!(matches!(err, ScrapeError::Http { status: 404, .. }));
}

#[test]
fn tsv_output_uses_tabs() {
    let source = CannedSource::new(&[(1, stats_page("Current", &[], &[]))]);
    let players = vec![player("Solo", 1000, 1)];

    let mut opts = options();
    opts.format = Delim::Tsv;

    let (_, text) = run_to_string(&opts, &players, &source);
    assert!(text.starts_with("PLAYER\tRATING\t"));
    assert!(text.contains("Solo\t1000\t"));
}
