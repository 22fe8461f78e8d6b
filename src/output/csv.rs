//! CSV output formatting for subnet results.

use crate::models::SubnetResult;

use super::terminal::format_field;

/// Header line matching [`csv_row`].
pub const CSV_HEADER: &str = r#""cidr","mask","network","broadcast","prefix","total","usable""#;

/// One quoted CSV line for a result.
pub fn csv_row(r: &SubnetResult) -> String {
    let counts = r.counts();
    format!(
        "{cidr},{mask},{network},{broadcast},{prefix},{total},{usable}",
        cidr = format_field(r.cidr(), 20),
        mask = format_field(r.mask, 17),
        network = format_field(r.network, 17),
        broadcast = format_field(r.broadcast, 17),
        prefix = format_field(r.prefix, 4),
        total = format_field(counts.total, 12),
        usable = format_field(counts.usable, 12),
    )
}

/// Print the header and one row per result to stdout.
pub fn subnet_print(results: &[SubnetResult]) {
    log::info!("#Start subnet_print() rows={}", results.len());
    println!("{CSV_HEADER}");
    for r in results {
        println!("{}", csv_row(r));
    }
}
