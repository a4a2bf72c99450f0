//! Monthly average aggregation for the price chart.

use crate::types::{Fuel, MONTHS, MonthlyAverage, Observation};

/// Computes the arithmetic mean of a slice of values. Returns 0.0 for empty input.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Averages the `fuel` price of every observation for `city` in `year`, one
/// bucket per calendar month.
///
/// Always returns twelve entries ordered January to December. A month with no
/// observations averages to `0.0`, so the chart axis is never ragged.
pub fn monthly_averages(
    observations: &[Observation],
    city: &str,
    year: i32,
    fuel: Fuel,
) -> Vec<MonthlyAverage> {
    let mut buckets: [Vec<f64>; 12] = Default::default();

    for o in observations
        .iter()
        .filter(|o| o.city == city && o.year() == year)
    {
        buckets[o.month_index()].push(o.price(fuel));
    }

    MONTHS
        .iter()
        .zip(buckets.iter())
        .map(|(&month, bucket)| MonthlyAverage {
            month,
            year,
            avg_price: mean(bucket),
        })
        .collect()
}
