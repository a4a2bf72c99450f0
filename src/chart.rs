//! Renderer-neutral description of the monthly price bar chart.
//!
//! Nothing here draws anything. [`ChartSpec`] carries the title, axes, bar
//! values, colors and pre-formatted labels a chart widget needs, and
//! serializes to JSON for whichever renderer consumes it.

use serde::Serialize;

use crate::types::{Fuel, MonthlyAverage};

pub const DEFAULT_CURRENCY: &str = "₹";

/// Currency prefix used for every price shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Currency {
    symbol: String,
}

impl Default for Currency {
    fn default() -> Self {
        Self::new(DEFAULT_CURRENCY)
    }
}

impl Currency {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Tooltip form: two decimals, e.g. `₹70.38`.
    pub fn format_price(&self, value: f64) -> String {
        format!("{}{:.2}", self.symbol, value)
    }

    /// Axis tick template for the renderer, e.g. `₹{value}`.
    pub fn axis_label_format(&self) -> String {
        format!("{}{{value}}", self.symbol)
    }

    /// Y axis title, e.g. `Price (₹)`.
    pub fn axis_name(&self) -> String {
        format!("Price ({})", self.symbol)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryAxis {
    pub name: String,
    pub categories: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueAxis {
    pub name: String,
    pub currency: String,
    /// Tick label template; the renderer substitutes `{value}`.
    pub label_format: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct BarSeries {
    pub name: String,
    pub color: String,
    pub values: Vec<f64>,
    /// One-decimal label drawn on top of each bar.
    pub labels: Vec<String>,
    pub tooltips: Vec<Tooltip>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tooltip {
    pub heading: String,
    pub line: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSpec {
    pub title: String,
    pub x_axis: CategoryAxis,
    pub y_axis: ValueAxis,
    pub series: BarSeries,
}

impl ChartSpec {
    pub fn build(
        averages: &[MonthlyAverage],
        fuel: Fuel,
        city: &str,
        year: i32,
        currency: &Currency,
    ) -> Self {
        let tooltips = averages
            .iter()
            .map(|m| Tooltip {
                heading: format!("{} {}", m.month, year),
                line: format!("{}: {}", fuel, currency.format_price(m.avg_price)),
            })
            .collect();

        ChartSpec {
            title: format!("Monthly Average {fuel} Prices in {city} ({year})"),
            x_axis: CategoryAxis {
                name: "Month".to_string(),
                categories: averages.iter().map(|m| m.month.to_string()).collect(),
            },
            y_axis: ValueAxis {
                name: currency.axis_name(),
                currency: currency.symbol().to_string(),
                label_format: currency.axis_label_format(),
            },
            series: BarSeries {
                name: fuel.to_string(),
                color: fuel.color().to_string(),
                values: averages.iter().map(|m| m.avg_price).collect(),
                labels: averages
                    .iter()
                    .map(|m| format!("{:.1}", m.avg_price))
                    .collect(),
                tooltips,
            },
        }
    }
}
