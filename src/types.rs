//! Data types shared by the parsing, aggregation and presentation layers.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Calendar month labels, January first. Used both to parse dates and to
/// label the aggregate buckets.
pub const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// A single parsed city/date/petrol/diesel row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub city: String,
    pub date: NaiveDate,
    pub petrol: f64,
    pub diesel: f64,
}

impl Observation {
    pub fn year(&self) -> i32 {
        self.date.year()
    }

    /// Zero-based month index into [`MONTHS`].
    pub fn month_index(&self) -> usize {
        self.date.month0() as usize
    }

    /// Price of the given fuel for this observation.
    pub fn price(&self, fuel: Fuel) -> f64 {
        match fuel {
            Fuel::Petrol => self.petrol,
            Fuel::Diesel => self.diesel,
        }
    }
}

/// Fuel type selectable in the chart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
pub enum Fuel {
    #[default]
    Petrol,
    Diesel,
}

impl Fuel {
    pub const ALL: [Fuel; 2] = [Fuel::Petrol, Fuel::Diesel];

    pub fn name(&self) -> &'static str {
        match self {
            Fuel::Petrol => "Petrol",
            Fuel::Diesel => "Diesel",
        }
    }

    /// Bar color used by the chart renderer.
    pub fn color(&self) -> &'static str {
        match self {
            Fuel::Petrol => "#ff7c7c",
            Fuel::Diesel => "#5470c6",
        }
    }
}

impl fmt::Display for Fuel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Fuel {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Fuel::ALL
            .into_iter()
            .find(|fuel| fuel.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| anyhow::anyhow!("unknown fuel type '{s}', expected Petrol or Diesel"))
    }
}

/// Average price of one fuel for one calendar month of a city/year query.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyAverage {
    pub month: &'static str,
    pub year: i32,
    pub avg_price: f64,
}
