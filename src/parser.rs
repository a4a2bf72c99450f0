//! Best-effort parser for the comma-separated fuel price table.
//!
//! Rows that cannot be understood are dropped rather than reported: every line
//! is turned into an `Option<Observation>` and only the `Some` values are kept.

use chrono::{Days, NaiveDate};
use tracing::debug;

use crate::types::{MONTHS, Observation};

const FIELD_DELIMITER: char = ',';
const MIN_FIELDS: usize = 4;

/// Parses raw CSV text into observations.
///
/// The first line is a header and is always discarded, whatever it contains.
/// Blank lines, rows with fewer than four fields and rows whose date does not
/// parse are skipped. Fields are split on `,` without any quoting support.
pub fn parse(raw: &str) -> Vec<Observation> {
    let mut dropped = 0usize;

    let observations: Vec<Observation> = raw
        .lines()
        .skip(1)
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| {
            let row = parse_row(line);
            if row.is_none() {
                dropped += 1;
            }
            row
        })
        .collect();

    debug!(kept = observations.len(), dropped, "Parsed fuel price rows");
    observations
}

/// Parses one trimmed data line. Returns `None` for short rows and rows with
/// an unparsable date; bad prices become `0`.
pub fn parse_row(line: &str) -> Option<Observation> {
    let fields: Vec<&str> = line.split(FIELD_DELIMITER).collect();
    if fields.len() < MIN_FIELDS {
        return None;
    }

    let date = parse_date(fields[1].trim())?;

    Some(Observation {
        city: fields[0].trim().to_string(),
        date,
        petrol: parse_price(fields[2]),
        diesel: parse_price(fields[3]),
    })
}

/// Parses a `D-MMM-YY` or `D-MMM-YYYY` date such as `16-Jun-17`.
///
/// The month abbreviation is matched case-insensitively. Years below 100 are
/// taken as `2000 + year`.
///
/// The day is not range checked. The date is built as the first of the month
/// plus `day - 1` days, so out-of-range days roll over into neighbouring
/// months: `31-Jun-17` is 2017-07-01 and `0-Mar-17` is 2017-02-28.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let parts: Vec<&str> = value.split('-').collect();
    let [day, month, year] = parts.as_slice() else {
        return None;
    };

    let month0 = MONTHS
        .iter()
        .position(|m| m.eq_ignore_ascii_case(month.trim()))?;

    let year: i32 = year.trim().parse().ok()?;
    let year = if year < 100 { 2000 + year } else { year };

    let day: i64 = day.trim().parse().ok()?;

    let first = NaiveDate::from_ymd_opt(year, month0 as u32 + 1, 1)?;
    let offset = day.checked_sub(1)?;
    if offset >= 0 {
        first.checked_add_days(Days::new(offset as u64))
    } else {
        first.checked_sub_days(Days::new(offset.unsigned_abs()))
    }
}

/// Parses a price field. Unparsable, non-finite and negative values become `0`.
///
/// The whole trimmed field must be a number: a trailing suffix is not
/// ignored, so `70.38x` is `0`, not `70.38`. Day and year components in
/// [`parse_date`] are just as strict (`16th-Jun-17` drops the row).
pub fn parse_price(value: &str) -> f64 {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|price| price.is_finite() && *price >= 0.0)
        .unwrap_or(0.0)
}
