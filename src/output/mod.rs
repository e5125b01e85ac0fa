//! Output formatting for audit results.
//!
//! This module handles turning violations into a report and writing it:
//! - [`report`] - Tabular report rows or the clean sentinel
//! - [`terminal`] - Text table output
//! - [`csv`] - CSV output

mod csv;
mod report;
mod terminal;

pub use csv::{escape_csv_field, write_csv};
pub use report::{Report, ReportRow};
pub use terminal::{render_table, write_report};

use std::error::Error;
use std::str::FromStr;

/// Report output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(format!("unknown output format '{other}' (expected table or csv)")),
        }
    }
}

/// Print the report to stdout in the chosen format.
pub fn print_report(report: &Report, format: OutputFormat) -> Result<(), Box<dyn Error>> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Table => write_report(&mut out, report),
        OutputFormat::Csv => write_csv(&mut out, report),
    }
}
