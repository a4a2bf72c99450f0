pub mod aggregate;
pub mod chart;
pub mod config;
pub mod dashboard;
pub mod domain;
pub mod fetch;
pub mod loader;
pub mod output;
pub mod parser;
pub mod types;

pub use aggregate::monthly_averages;
pub use domain::{unique_cities, unique_years};
pub use loader::{DEFAULT_SOURCE, load_data};
pub use parser::parse;
pub use types::{Fuel, MONTHS, MonthlyAverage, Observation};
