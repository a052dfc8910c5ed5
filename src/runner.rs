// src/runner.rs

use std::io::Write;

use scraper::Html;
use tracing::{info, warn};

use crate::config::options::{FailurePolicy, RunOptions};
use crate::config::roster::{self, Player};
use crate::core::net::{DocumentSource, HttpSource};
use crate::csv::RowSink;
use crate::error::ScrapeError;
use crate::scrape;

/// What a run produced.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub rows_written: usize,
    pub skipped_on_error: usize,
    pub excluded_by_target: usize,
}

/// Top-level entry for the binary: load the roster, open the sink once,
/// scrape over plain HTTPS.
pub fn run(options: &RunOptions) -> Result<RunSummary, ScrapeError> {
    let players = roster::load(&options.roster)?;
    let source = HttpSource::new()?;
    let mut sink = RowSink::create(&options.out, options.format)?;
    let summary = run_with(options, &players, &source, &mut sink)?;
    sink.finish()?;
    Ok(summary)
}

/// Core loop, generic over document source and sink writer so tests can
/// stub both. Players are handled strictly one at a time: the next fetch is
/// not issued until the current player's row has been written.
pub fn run_with<S, W>(
    options: &RunOptions,
    players: &[Player],
    source: &S,
    sink: &mut RowSink<W>,
) -> Result<RunSummary, ScrapeError>
where
    S: DocumentSource,
    W: Write,
{
    sink.write_row(&options.headers())?;

    let mut summary = RunSummary::default();
    for player in players {
        match scrape_one(options, source, player) {
            Ok(Some(row)) => {
                sink.write_row(&row)?;
                summary.rows_written += 1;
                info!(player = %player.name, "row written");
            }
            Ok(None) => {
                // Business rule, not an error: not registered for the
                // target event.
                summary.excluded_by_target += 1;
                info!(player = %player.name, "not registered for target event, excluded");
            }
            Err(e) => match options.on_failure {
                FailurePolicy::Abort => return Err(e),
                FailurePolicy::SkipAndContinue => {
                    summary.skipped_on_error += 1;
                    warn!(player = %player.name, error = %e, "skipping player");
                }
            },
        }
    }

    Ok(summary)
}

fn scrape_one<S: DocumentSource>(
    options: &RunOptions,
    source: &S,
    player: &Player,
) -> Result<Option<Vec<String>>, ScrapeError> {
    let markup = source.fetch(&options.stats_path(player.pdga_number))?;
    let doc = Html::parse_document(&markup);
    scrape::extract_row(&doc, player, options)
}
