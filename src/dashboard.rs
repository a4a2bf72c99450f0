//! Application state for the price chart: the loaded dataset plus the
//! current city/year/fuel selection.
//!
//! The core functions in [`crate::domain`] and [`crate::aggregate`] are pure;
//! this type owns the data and passes it to them explicitly.

use tracing::{error, info};

use crate::aggregate::monthly_averages;
use crate::domain::{unique_cities, unique_years};
use crate::loader::load_data;
use crate::types::{Fuel, MonthlyAverage, Observation};

/// Shown in place of the chart when there is nothing to plot.
pub const NO_DATA_MESSAGE: &str = "Select filters to view data";

/// Current filter values. `None` means nothing is selected yet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    pub city: Option<String>,
    pub year: Option<i32>,
    pub fuel: Fuel,
}

#[derive(Debug, Default)]
pub struct Dashboard {
    data: Vec<Observation>,
    cities: Vec<String>,
    years: Vec<i32>,
    selection: Selection,
}

impl Dashboard {
    /// Loads `source` once. A failure is logged and leaves the dashboard
    /// empty instead of being returned. The future resolves to a finished
    /// dashboard, so there is no in-between "loading" state to observe.
    pub async fn load(source: &str) -> Self {
        let mut dashboard = Dashboard::default();

        match load_data(source).await {
            Ok(data) => dashboard.set_data(data),
            Err(e) => error!(source, error = %format!("{e:#}"), "Failed to load data"),
        }

        dashboard
    }

    /// Builds a dashboard over already parsed observations.
    pub fn from_observations(data: Vec<Observation>) -> Self {
        let mut dashboard = Dashboard::default();
        dashboard.set_data(data);
        dashboard
    }

    /// Replaces the dataset and resets the selection to the first city and
    /// the latest year. The fuel choice is kept.
    fn set_data(&mut self, data: Vec<Observation>) {
        self.cities = unique_cities(&data);
        self.years = unique_years(&data);
        self.data = data;

        self.selection.city = self.cities.first().cloned();
        self.selection.year = self.years.last().copied();

        info!(
            observations = self.data.len(),
            cities = self.cities.len(),
            years = self.years.len(),
            "Dashboard data ready"
        );
    }

    pub fn data(&self) -> &[Observation] {
        &self.data
    }

    pub fn cities(&self) -> &[String] {
        &self.cities
    }

    pub fn years(&self) -> &[i32] {
        &self.years
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn select_city(&mut self, city: Option<String>) {
        self.selection.city = city;
    }

    pub fn select_year(&mut self, year: Option<i32>) {
        self.selection.year = year;
    }

    pub fn select_fuel(&mut self, fuel: Fuel) {
        self.selection.fuel = fuel;
    }

    /// Monthly averages for the current selection, or `None` while a city or
    /// year is still unselected.
    pub fn chart_data(&self) -> Option<Vec<MonthlyAverage>> {
        let city = self.selection.city.as_deref()?;
        let year = self.selection.year?;
        Some(monthly_averages(&self.data, city, year, self.selection.fuel))
    }
}
