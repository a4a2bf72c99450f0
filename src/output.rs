//! Output formatting for monthly averages and chart descriptions.
//!
//! Supports a terminal table, JSON and CSV, written to stdout or a file.

use anyhow::{Context, Result};
use csv::WriterBuilder;
use serde::Serialize;
use std::fmt::Write as _;
use std::io::Write;
use tracing::{debug, info};

use crate::chart::Currency;
use crate::types::{Fuel, MonthlyAverage};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

/// Renders one line per month with the currency-prefixed average.
pub fn render_table(averages: &[MonthlyAverage], fuel: Fuel, currency: &Currency) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<6} {:>12}", "Month", fuel.name());
    for m in averages {
        let _ = writeln!(out, "{:<6} {:>12}", m.month, currency.format_price(m.avg_price));
    }
    out
}

/// Serializes any value as pretty-printed JSON.
pub fn to_json(value: &impl Serialize) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Writes `records` as CSV with a header row.
pub fn write_csv<W: Write, T: Serialize>(writer: W, records: &[T]) -> Result<()> {
    let mut writer = WriterBuilder::new().has_headers(true).from_writer(writer);

    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    Ok(())
}

/// Renders `averages` in `format`.
pub fn render(
    averages: &[MonthlyAverage],
    fuel: Fuel,
    currency: &Currency,
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(render_table(averages, fuel, currency)),
        OutputFormat::Json => to_json(&averages),
        OutputFormat::Csv => {
            let mut buf = Vec::new();
            write_csv(&mut buf, averages)?;
            Ok(String::from_utf8(buf)?)
        }
    }
}

/// Writes `contents` to `path`, replacing any existing file, or to stdout
/// when no path is given.
pub fn emit(path: Option<&str>, contents: &str) -> Result<()> {
    match path {
        Some(path) => {
            debug!(path, bytes = contents.len(), "Writing output file");
            std::fs::write(path, contents).with_context(|| format!("failed to write {path}"))?;
            info!(path, "Output written");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(contents.as_bytes())?;
            if !contents.ends_with('\n') {
                stdout.write_all(b"\n")?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::monthly_averages;
    use crate::types::Observation;
    use chrono::NaiveDate;
    use std::env;
    use std::fs;

    fn temp_path(name: &str) -> String {
        format!("{}/{}", env::temp_dir().display(), name)
    }

    fn averages() -> Vec<MonthlyAverage> {
        let data = vec![
            Observation {
                city: "Delhi".to_string(),
                date: NaiveDate::from_ymd_opt(2017, 1, 1).unwrap(),
                petrol: 70.0,
                diesel: 58.0,
            },
            Observation {
                city: "Delhi".to_string(),
                date: NaiveDate::from_ymd_opt(2017, 1, 16).unwrap(),
                petrol: 72.0,
                diesel: 60.0,
            },
        ];
        monthly_averages(&data, "Delhi", 2017, Fuel::Petrol)
    }

    #[test]
    fn test_render_table() {
        let table = render_table(&averages(), Fuel::Petrol, &Currency::default());
        let lines: Vec<_> = table.lines().collect();

        // 1 header + 12 months
        assert_eq!(lines.len(), 13);
        assert!(lines[0].starts_with("Month"));
        assert!(lines[0].ends_with("Petrol"));
        assert!(lines[1].starts_with("Jan"));
        assert!(lines[1].ends_with("₹71.00"));
        assert!(lines[12].ends_with("₹0.00"));
    }

    #[test]
    fn test_render_csv() {
        let csv = render(&averages(), Fuel::Petrol, &Currency::default(), OutputFormat::Csv).unwrap();
        let lines: Vec<_> = csv.lines().collect();

        assert_eq!(lines[0], "month,year,avgPrice");
        assert_eq!(lines[1], "Jan,2017,71.0");
        assert_eq!(lines.len(), 13);
    }

    #[test]
    fn test_render_json() {
        let json = render(&averages(), Fuel::Petrol, &Currency::default(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value.as_array().unwrap().len(), 12);
        assert_eq!(value[0]["avgPrice"], 71.0);
    }

    #[test]
    fn test_emit_to_file_overwrites() {
        let path = temp_path("fuel_prices_test_emit.csv");
        let _ = fs::remove_file(&path);

        emit(Some(&path), "first").unwrap();
        emit(Some(&path), "second").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second");

        fs::remove_file(&path).unwrap();
    }
}
