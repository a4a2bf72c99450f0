use fuel_prices::chart::{ChartSpec, Currency};
use fuel_prices::dashboard::Dashboard;
use fuel_prices::{Fuel, load_data, monthly_averages, parse, unique_cities, unique_years};

const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/sample_prices.csv");

#[test]
fn test_full_pipeline() {
    let text = include_str!("fixtures/sample_prices.csv");
    let observations = parse(text);

    // Two Chennai rows are malformed; the non-numeric price row is kept
    assert_eq!(observations.len(), 9);
    assert_eq!(
        unique_cities(&observations),
        vec!["Chennai", "Delhi", "Kolkata", "Mumbai"]
    );
    assert_eq!(unique_years(&observations), vec![2017, 2018]);

    let chennai = observations.iter().find(|o| o.city == "Chennai").unwrap();
    assert_eq!(chennai.petrol, 0.0);
    assert_eq!(chennai.diesel, 57.52);

    let delhi = monthly_averages(&observations, "Delhi", 2017, Fuel::Diesel);
    assert_eq!(delhi.len(), 12);
    assert_eq!(delhi[5].avg_price, 54.49);
    assert!((delhi[6].avg_price - 53.86).abs() < 1e-9);
    assert_eq!(delhi[0].avg_price, 0.0);
}

#[tokio::test]
async fn test_dashboard_from_fixture_file() {
    let data = load_data(FIXTURE).await.expect("Failed to load fixture");
    assert_eq!(data.len(), 9);

    let mut dashboard = Dashboard::load(FIXTURE).await;
    assert_eq!(dashboard.selection().city.as_deref(), Some("Chennai"));
    assert_eq!(dashboard.selection().year, Some(2018));

    dashboard.select_city(Some("Delhi".to_string()));
    let averages = dashboard.chart_data().unwrap();
    assert!((averages[0].avg_price - 70.21).abs() < 1e-9);

    let spec = ChartSpec::build(&averages, Fuel::Petrol, "Delhi", 2018, &Currency::default());
    assert_eq!(spec.title, "Monthly Average Petrol Prices in Delhi (2018)");
    assert_eq!(spec.series.tooltips[0].line, "Petrol: ₹70.21");
}
