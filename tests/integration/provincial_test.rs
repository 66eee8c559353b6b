use std::sync::Arc;
use std::time::Duration;

use energy_atlas::provincial::ProvincialLayout;
use energy_atlas::store::SheetLayout;
use energy_atlas::{
    Carrier, DataConfig, MemoryWorkbookSource, MetricType, NotAvailable, ProvincialDataLoader,
    QueryParams, Scenario,
};

use crate::utils::{h2_volume, provincial_source, with_each_field_cleared};

async fn loaded() -> ProvincialDataLoader {
    let config = DataConfig::default();
    let loader = ProvincialDataLoader::new(provincial_source(&config), config);
    loader.load_all_data().await.unwrap();
    loader
}

#[tokio::test]
async fn provinces_are_keyed_by_normalized_name() {
    let loader = loaded().await;
    let params = h2_volume(Scenario::GezamenlijkeBalans, 2035, "Demand", "Chemicals");

    assert_eq!(loader.query(&params.for_region("groningen")), Ok(2035.0));
    assert_eq!(loader.query(&params.for_region("zuidholland")), Ok(0.0));
    assert_eq!(loader.query(&params.for_region("Noord-Holland")), Err(NotAvailable));
    assert_eq!(
        loader.provinces(),
        vec!["groningen", "limburg", "noordholland", "zuidholland"]
    );
}

#[tokio::test]
async fn the_first_row_for_a_province_wins() {
    let loader = loaded().await;
    let chemicals = h2_volume(Scenario::EigenVermogen, 2040, "Demand", "Chemicals").region("noordholland");
    let steel = h2_volume(Scenario::EigenVermogen, 2040, "Demand", "Steel").region("noordholland");
    let electrolysis =
        h2_volume(Scenario::EigenVermogen, 2040, "Supply", "Electrolysis").region("noordholland");

    assert_eq!(loader.query(&chemicals), Ok(-100.0));
    // An empty first cell is filled by the duplicate row
    assert_eq!(loader.query(&steel), Ok(50.0));
    // Unparsable text is kept, and reads as the sentinel
    assert_eq!(loader.query(&electrolysis), Err(NotAvailable));
}

#[tokio::test]
async fn clearing_any_one_parameter_returns_the_sentinel() {
    let loader = loaded().await;
    let complete = h2_volume(Scenario::GezamenlijkeBalans, 2035, "Demand", "Chemicals").region("groningen");
    assert_eq!(loader.query(&complete), Ok(2035.0));

    let cases = with_each_field_cleared(&complete);
    assert_eq!(cases.len(), 11);
    for (field, params) in cases {
        assert_eq!(loader.query(&params), Err(NotAvailable), "{field}");
    }
}

#[tokio::test]
async fn text_numbers_lose_their_thousands_separators() {
    let loader = loaded().await;
    let steel = h2_volume(Scenario::HorizonAanvoer, 2050, "Demand", "Steel").region("groningen");
    assert_eq!(loader.query(&steel), Ok(1234.5));
}

#[tokio::test]
async fn discovery_lists_are_sorted_and_empty_before_loading() {
    let config = DataConfig::default();
    let unloaded = ProvincialDataLoader::new(provincial_source(&config), config);
    assert!(unloaded.get_sectors_for_carrier_and_type(Carrier::H2, "Demand").is_empty());
    assert!(unloaded.get_types_for_carrier(Carrier::H2).is_empty());

    let loader = loaded().await;
    assert_eq!(
        loader.get_sectors_for_carrier_and_type(Carrier::H2, "Demand"),
        vec!["Chemicals", "Refineries", "Steel"]
    );
    assert_eq!(loader.get_types_for_carrier(Carrier::H2), vec!["Demand", "Supply"]);
    // Paper only appears in the 2025 workbook
    assert_eq!(loader.industrial_demand_sectors(Carrier::Elec), vec!["Food", "Paper"]);
    assert!(loader.get_types_for_carrier(Carrier::Meth).is_empty());
}

#[tokio::test]
async fn totals_sum_magnitudes_over_provinces_with_data() {
    let loader = loaded().await;

    let chemicals = h2_volume(Scenario::EigenVermogen, 2030, "Demand", "Chemicals");
    assert_eq!(loader.calculate_total(&chemicals), Some(2130.0));
    // The region of the parameters plays no part
    assert_eq!(loader.calculate_total(&chemicals.for_region("limburg")), Some(2130.0));

    let steel = h2_volume(Scenario::EigenVermogen, 2030, "Demand", "Steel");
    assert_eq!(loader.calculate_total(&steel), Some(1284.5));

    let refineries = h2_volume(Scenario::EigenVermogen, 2030, "Demand", "Refineries");
    assert_eq!(loader.calculate_total(&refineries), None);
}

#[tokio::test]
async fn sectors_without_any_value_are_filtered_out() {
    let loader = loaded().await;
    let params = QueryParams::new()
        .scenario(Scenario::KoersvasteMiddenweg)
        .year(2040)
        .carrier(Carrier::H2)
        .metric_type(MetricType::Volume)
        .flow_type("Demand");
    let sectors = loader.get_sectors_for_carrier_and_type(Carrier::H2, "Demand");

    assert_eq!(loader.sectors_with_data(&params, &sectors), vec!["Chemicals", "Steel"]);
}

#[tokio::test]
async fn koersvaste_middenweg_2025_is_loaded() {
    let loader = loaded().await;
    let paper = QueryParams::selection(
        Scenario::KoersvasteMiddenweg,
        2025,
        Carrier::Elec,
        MetricType::Capacity,
        "Demand",
        "Paper",
    )
    .region("limburg");

    assert_eq!(loader.query(&paper), Ok(4.0));
    assert_eq!(loader.query(&paper.clone().scenario(Scenario::EigenVermogen)), Err(NotAvailable));
    assert_eq!(loader.max_abs(MetricType::Capacity), Some(4.0));
}

#[tokio::test]
async fn concurrent_loads_fetch_each_file_once() {
    let config = DataConfig::default().with_max_concurrent_loads(2);
    let source = Arc::new(provincial_source(&config).with_delay(Duration::from_millis(10)));
    let loader = ProvincialDataLoader::new(Arc::clone(&source), config);

    let (first, second) = tokio::join!(loader.load_all_data(), loader.load_all_data());
    assert!(first.is_ok() && second.is_ok());
    assert_eq!(source.fetch_count(), 17);
}

#[tokio::test]
async fn a_broken_file_leaves_the_store_unloaded() {
    let config = DataConfig::default();
    let broken = ProvincialLayout::source_path(&config, Scenario::KoersvasteMiddenweg, 2025);
    let loader = ProvincialDataLoader::new(provincial_source(&config).with_broken(broken), config);

    let err = loader.load_all_data().await.unwrap_err();
    assert!(!err.is_missing_file());
    assert!(!loader.is_loaded());
    let params = h2_volume(Scenario::EigenVermogen, 2030, "Demand", "Chemicals");
    assert_eq!(loader.calculate_total(&params), None);
}

#[tokio::test]
async fn callers_joining_a_broken_load_all_get_its_error() {
    let config = DataConfig::default().with_max_concurrent_loads(17);
    let broken = ProvincialLayout::source_path(&config, Scenario::EigenVermogen, 2030);
    let source = Arc::new(
        provincial_source(&config)
            .with_broken(broken)
            .with_delay(Duration::from_millis(20)),
    );
    let loader = ProvincialDataLoader::new(Arc::clone(&source), config);

    let (first, second) = tokio::join!(loader.load_all_data(), loader.load_all_data());
    assert!(!first.unwrap_err().is_missing_file());
    assert!(!second.unwrap_err().is_missing_file());
    assert_eq!(source.fetch_count(), 17);
    assert!(!loader.is_loaded());

    // Only a call made after the failure starts another pass
    assert!(loader.load_all_data().await.is_err());
    assert_eq!(source.fetch_count(), 34);
}

#[tokio::test]
async fn an_empty_source_fails_to_load() {
    let loader = ProvincialDataLoader::new(MemoryWorkbookSource::new(), DataConfig::default());
    assert!(loader.load_all_data().await.unwrap_err().is_missing_file());
}
