// src/cli.rs

use std::{env, path::PathBuf};

use color_eyre::eyre::{Result, bail, eyre};

use crate::config::consts::DEFAULT_OUT_STEM;
use crate::config::options::{FailurePolicy, RunOptions, SeasonVariant};
use crate::csv::Delim;
use crate::runner;

pub fn run() -> Result<()> {
    let options = parse_args(env::args().skip(1))?;
    let summary = runner::run(&options)?;
    println!(
        "DONE! {} rows -> {} ({} skipped on error, {} excluded by target rule)",
        summary.rows_written,
        options.out.display(),
        summary.skipped_on_error,
        summary.excluded_by_target,
    );
    Ok(())
}

pub fn parse_args<I>(args: I) -> Result<RunOptions>
where
    I: IntoIterator<Item = String>,
{
    let mut roster: Option<PathBuf> = None;
    let mut year: Option<u16> = None;
    let mut tour: Option<String> = None;
    let mut division: Option<String> = None;
    let mut with_target = false;
    let mut target_event: Option<String> = None;
    let mut prior_label: Option<String> = None;
    let mut out: Option<PathBuf> = None;
    let mut format = Delim::Csv;
    let mut on_failure = FailurePolicy::SkipAndContinue;

    let mut args = args.into_iter();
    while let Some(a) = args.next() {
        match a.as_str() {
            "-r" | "--roster" => {
                roster = Some(PathBuf::from(
                    args.next().ok_or_else(|| eyre!("Missing roster path"))?,
                ));
            }
            "-y" | "--year" => {
                let v = args.next().ok_or_else(|| eyre!("Missing value for --year"))?;
                year = Some(v.parse().map_err(|_| eyre!("Invalid year: {}", v))?);
            }
            "--tour" => tour = Some(args.next().ok_or_else(|| eyre!("Missing value for --tour"))?),
            "--division" => {
                division = Some(
                    args.next()
                        .ok_or_else(|| eyre!("Missing value for --division"))?,
                );
            }
            "--target-event" => {
                target_event = Some(
                    args.next()
                        .ok_or_else(|| eyre!("Missing value for --target-event"))?,
                );
            }
            "--prior-label" => {
                prior_label = Some(
                    args.next()
                        .ok_or_else(|| eyre!("Missing value for --prior-label"))?,
                );
            }
            "--with-target" => with_target = true,
            "-o" | "--out" => {
                out = Some(PathBuf::from(
                    args.next().ok_or_else(|| eyre!("Missing output path"))?,
                ));
            }
            "--format" => {
                let v = args.next().ok_or_else(|| eyre!("Missing value for --format"))?;
                format = match v.to_ascii_lowercase().as_str() {
                    "csv" => Delim::Csv,
                    "tsv" => Delim::Tsv,
                    other => bail!("Unknown format: {}", other),
                };
            }
            "--abort-on-error" => on_failure = FailurePolicy::Abort,
            "-h" | "--help" => {
                eprintln!("{}", include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => bail!("Unknown arg: {}", a),
        }
    }

    let roster = roster.ok_or_else(|| eyre!("Missing required --roster"))?;
    let year = year.ok_or_else(|| eyre!("Missing required --year"))?;

    let mut options = RunOptions::new(roster, year);
    if let Some(t) = tour {
        options.tour_marker = t;
    }
    if let Some(d) = division {
        options.division = d;
    }
    if with_target || target_event.is_some() {
        options.variant = SeasonVariant::WithTargetEvent;
    }
    options.target_event = target_event;
    options.prior_label = prior_label;
    options.format = format;
    options.on_failure = on_failure;
    options.out = match out {
        Some(p) => p,
        // Default filename follows the chosen format.
        None => PathBuf::from(format!("{}.{}", DEFAULT_OUT_STEM, format.ext())),
    };
    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> impl Iterator<Item = String> + use<> {
        list.iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .into_iter()
    }

    #[test]
    fn minimal_args() {
        let o = parse_args(args(&["--roster", "players.toml", "--year", "2021"])).unwrap();
        assert_eq!(o.year, 2021);
        assert_eq!(o.variant, SeasonVariant::Basic);
        assert_eq!(o.on_failure, FailurePolicy::SkipAndContinue);
        assert_eq!(o.out, PathBuf::from("player-stats.csv"));
    }

    #[test]
    fn target_event_implies_variant() {
        let o = parse_args(args(&[
            "-r", "p.toml", "-y", "2021", "--target-event", "Waco", "--prior-label", "WACO",
        ]))
        .unwrap();
        assert_eq!(o.variant, SeasonVariant::WithTargetEvent);
        assert_eq!(o.target_event.as_deref(), Some("Waco"));
        assert_eq!(o.prior_label.as_deref(), Some("WACO"));
    }

    #[test]
    fn tsv_format_drives_default_extension() {
        let o = parse_args(args(&["-r", "p.toml", "-y", "2021", "--format", "tsv"])).unwrap();
        assert_eq!(o.out, PathBuf::from("player-stats.tsv"));
        assert_eq!(o.format, Delim::Tsv);
    }

    #[test]
    fn unknown_arg_is_rejected() {
        assert!(parse_args(args(&["--bogus"])).is_err());
    }

    #[test]
    fn missing_roster_is_rejected() {
        assert!(parse_args(args(&["--year", "2021"])).is_err());
    }
}
