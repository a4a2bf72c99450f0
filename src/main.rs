//! CLI entry point for the fuel price chart tool.
//!
//! Loads the price table once, then lists the selectable cities and years or
//! produces the monthly averages for one city, year and fuel, either as a
//! table/JSON/CSV or as a chart description for a renderer.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use fuel_prices::{
    chart::{ChartSpec, Currency},
    config::Config,
    dashboard::{Dashboard, NO_DATA_MESSAGE},
    output::{OutputFormat, emit, render, to_json},
    types::{Fuel, MonthlyAverage},
};
use std::ffi::OsStr;
use std::path::Path;
use tracing::{debug, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "fuel_prices")]
#[command(about = "Monthly average petrol and diesel prices per city", long_about = None)]
struct Cli {
    /// Path to file or URL to fetch (defaults to $FUEL_PRICES_SOURCE)
    #[arg(short, long, global = true, value_name = "FILE_OR_URL")]
    source: Option<String>,

    /// Currency symbol prefixed to prices (defaults to $FUEL_PRICES_CURRENCY)
    #[arg(long, global = true)]
    currency: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// City/year/fuel selection. Omitted values fall back to the first city and
/// the latest year in the data.
#[derive(Args)]
struct Filters {
    #[arg(short, long)]
    city: Option<String>,

    #[arg(short, long)]
    year: Option<i32>,

    #[arg(short, long, value_enum, default_value_t = Fuel::Petrol)]
    fuel: Fuel,
}

#[derive(Subcommand)]
enum Commands {
    /// List the cities present in the data
    Cities,
    /// List the years present in the data
    Years,
    /// Print monthly average prices for one city, year and fuel
    Averages {
        #[command(flatten)]
        filters: Filters,

        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,

        /// File to write to instead of stdout
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Emit the bar chart description as JSON
    Chart {
        #[command(flatten)]
        filters: Filters,

        /// File to write to instead of stdout
        #[arg(short, long)]
        output: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    let config = Config::from_env();
    let _file_guard = init_tracing(&config.log_file_path)?;

    let cli = Cli::parse();

    let source = cli.source.unwrap_or(config.source);
    let currency = Currency::new(cli.currency.unwrap_or(config.currency));

    let mut dashboard = Dashboard::load(&source).await;
    debug!(observations = dashboard.data().len(), "Load finished");

    match cli.command {
        Commands::Cities => {
            if dashboard.cities().is_empty() {
                return no_data();
            }
            emit(None, &dashboard.cities().join("\n"))?;
        }
        Commands::Years => {
            if dashboard.years().is_empty() {
                return no_data();
            }
            let years: Vec<String> = dashboard.years().iter().map(i32::to_string).collect();
            emit(None, &years.join("\n"))?;
        }
        Commands::Averages {
            filters,
            format,
            output,
        } => {
            apply_filters(&mut dashboard, filters);
            let Some((_, _, fuel, averages)) = selected(&dashboard) else {
                return no_data();
            };

            let rendered = render(&averages, fuel, &currency, format)?;
            emit(output.as_deref(), &rendered)?;
        }
        Commands::Chart { filters, output } => {
            apply_filters(&mut dashboard, filters);
            let Some((city, year, fuel, averages)) = selected(&dashboard) else {
                return no_data();
            };

            let spec = ChartSpec::build(&averages, fuel, city, year, &currency);
            info!(title = %spec.title, "Chart description built");
            emit(output.as_deref(), &to_json(&spec)?)?;
        }
    }

    Ok(())
}

/// Logging setup: colored stderr + JSON rolling log file.
fn init_tracing(log_file_path: &str) -> Result<WorkerGuard> {
    let log_dir = Path::new(log_file_path)
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("fuel_prices.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    Ok(file_guard)
}

/// Overrides the dashboard defaults with whatever the user passed.
fn apply_filters(dashboard: &mut Dashboard, filters: Filters) {
    if let Some(city) = filters.city {
        if !dashboard.cities().contains(&city) {
            warn!(city = %city, "City not present in data; averages will be zero");
        }
        dashboard.select_city(Some(city));
    }
    if let Some(year) = filters.year {
        if !dashboard.years().contains(&year) {
            warn!(year, "Year not present in data; averages will be zero");
        }
        dashboard.select_year(Some(year));
    }
    dashboard.select_fuel(filters.fuel);
}

/// Current city, year, fuel and their monthly averages, if a city and year
/// are selected.
fn selected(dashboard: &Dashboard) -> Option<(&str, i32, Fuel, Vec<MonthlyAverage>)> {
    let selection = dashboard.selection();
    let city = selection.city.as_deref()?;
    let year = selection.year?;
    let averages = dashboard.chart_data()?;

    info!(city, year, fuel = %selection.fuel, "Monthly averages computed");
    Some((city, year, selection.fuel, averages))
}

fn no_data() -> Result<()> {
    warn!("No data to show");
    emit(None, NO_DATA_MESSAGE)
}
