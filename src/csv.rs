// src/csv.rs

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use crate::error::ScrapeError;

/// Output field separator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Delim {
    Csv,
    Tsv,
}

impl Delim {
    pub fn ext(self) -> &'static str {
        match self {
            Delim::Csv => "csv",
            Delim::Tsv => "tsv",
        }
    }

    pub fn byte(self) -> u8 {
        match self {
            Delim::Csv => b',',
            Delim::Tsv => b'\t',
        }
    }
}

/// Append-only row sink: opened once per run, header first, then one row
/// per retained player. No other writer holds the stream.
pub struct RowSink<W: Write> {
    writer: ::csv::Writer<W>,
}

impl RowSink<File> {
    pub fn create(path: &Path, delim: Delim) -> Result<Self, ScrapeError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        Ok(Self::from_writer(File::create(path)?, delim))
    }
}

impl<W: Write> RowSink<W> {
    pub fn from_writer(w: W, delim: Delim) -> Self {
        Self {
            writer: ::csv::WriterBuilder::new()
                .delimiter(delim.byte())
                .from_writer(w),
        }
    }

    pub fn write_row(&mut self, row: &[String]) -> Result<(), ScrapeError> {
        self.writer.write_record(row)?;
        Ok(())
    }

    pub fn finish(mut self) -> Result<(), ScrapeError> {
        self.writer.flush()?;
        Ok(())
    }
}
