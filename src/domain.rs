//! Selectable filter values derived from the loaded observations.

use std::collections::BTreeSet;

use crate::types::Observation;

/// Distinct city names, sorted ascending. Matching is case-sensitive.
pub fn unique_cities(observations: &[Observation]) -> Vec<String> {
    observations
        .iter()
        .map(|o| o.city.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Distinct calendar years, sorted ascending.
pub fn unique_years(observations: &[Observation]) -> Vec<i32> {
    observations
        .iter()
        .map(Observation::year)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
