//! Output formatting for subnet results.
//!
//! This module is the presentation side the calculator never touches:
//! - [`csv`] - CSV rows
//! - [`terminal`] - colored console report
//! - JSON through `serde_json`

mod csv;
mod terminal;

pub use csv::{csv_row, subnet_print, CSV_HEADER};
pub use terminal::{
    bit_string, color_octets, format_field, group_thousands, octets_to_dot_notation, render,
};

use crate::models::SubnetResult;
use std::error::Error;
use std::str::FromStr;

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "table" | "" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(format!("Unknown output format '{other}' (table|json|csv)")),
        }
    }
}

/// Write all results in the chosen format.
pub fn print_results(results: &[SubnetResult], format: OutputFormat) -> Result<(), Box<dyn Error>> {
    match format {
        OutputFormat::Table => {
            for (i, r) in results.iter().enumerate() {
                if i > 0 {
                    println!();
                }
                println!("{}", render(r));
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(results)
                .map_err(|e| format!("Error serializing JSON: {e}"))?;
            println!("{json}");
        }
        OutputFormat::Csv => subnet_print(results),
    }
    Ok(())
}
