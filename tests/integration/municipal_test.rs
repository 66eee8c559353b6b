use std::sync::Arc;
use std::time::Duration;

use energy_atlas::municipal::MunicipalLayout;
use energy_atlas::store::SheetLayout;
use energy_atlas::{
    Carrier, DataConfig, DataValue, MetricType, MissingFilePolicy, MunicipalDataLoader,
    NotAvailable, QueryParams, Scenario,
};

use crate::utils::{elec_volume, municipal_source, municipal_value, with_each_field_cleared};

fn loader() -> (MunicipalDataLoader, Arc<energy_atlas::MemoryWorkbookSource>) {
    let config = DataConfig::default().with_max_concurrent_loads(4);
    let source = Arc::new(municipal_source(&config));
    (MunicipalDataLoader::new(Arc::clone(&source), config), source)
}

#[tokio::test]
async fn loaded_values_are_returned_unconverted() {
    let (loader, _) = loader();
    loader.load_all_data().await.unwrap();

    let params = elec_volume(Scenario::HorizonAanvoer, 2040, "Demand", "Households").region("GM0014");
    let expected = municipal_value(Scenario::HorizonAanvoer, 2040);
    assert_eq!(loader.query(&params), Ok(DataValue::Number(expected)));

    let supply = elec_volume(Scenario::HorizonAanvoer, 2040, "Supply", "Solar PV").region("GM0014");
    assert_eq!(loader.query(&supply), Ok(DataValue::Number(-expected)));

    // Text cells come back as stored
    let text = elec_volume(Scenario::HorizonAanvoer, 2040, "Demand", "Buildings").region("GM0363");
    assert_eq!(loader.query(&text), Ok(DataValue::Text("12".into())));
}

#[tokio::test]
async fn queries_before_loading_return_the_sentinel() {
    let (loader, source) = loader();
    let params = elec_volume(Scenario::EigenVermogen, 2030, "Demand", "Households").region("GM0014");

    assert!(!loader.is_loaded());
    assert_eq!(loader.query(&params), Err(NotAvailable));
    assert_eq!(source.fetch_count(), 0);
}

#[tokio::test]
async fn concurrent_callers_share_one_load_pass() {
    let config = DataConfig::default().with_max_concurrent_loads(4);
    let source = Arc::new(municipal_source(&config).with_delay(Duration::from_millis(20)));
    let loader = MunicipalDataLoader::new(Arc::clone(&source), config);

    let (first, second, third) = tokio::join!(
        loader.load_all_data(),
        loader.load_all_data(),
        loader.load_all_data()
    );
    assert!(first.is_ok() && second.is_ok() && third.is_ok());
    assert_eq!(source.fetch_count(), 17);

    // Later calls are no-ops
    loader.load_all_data().await.unwrap();
    assert_eq!(source.fetch_count(), 17);
    assert!(loader.is_loaded());
}

#[tokio::test]
async fn missing_or_empty_parameters_return_the_sentinel() {
    let (loader, _) = loader();
    loader.load_all_data().await.unwrap();
    let complete = elec_volume(Scenario::EigenVermogen, 2030, "Demand", "Households").region("GM0014");
    assert!(loader.query(&complete).is_ok());

    let without_region = elec_volume(Scenario::EigenVermogen, 2030, "Demand", "Households");
    assert_eq!(loader.query(&without_region), Err(NotAvailable));
    assert_eq!(loader.query(&complete.clone().sector("")), Err(NotAvailable));
    assert_eq!(loader.query(&complete.clone().year(0)), Err(NotAvailable));
    assert_eq!(loader.query(&QueryParams::new()), Err(NotAvailable));
}

#[tokio::test]
async fn clearing_any_one_parameter_returns_the_sentinel() {
    let (loader, _) = loader();
    loader.load_all_data().await.unwrap();
    let complete = elec_volume(Scenario::EigenVermogen, 2030, "Demand", "Households").region("GM0014");
    assert!(loader.query(&complete).is_ok());

    let cases = with_each_field_cleared(&complete);
    assert_eq!(cases.len(), 11);
    for (field, params) in cases {
        assert_eq!(loader.query(&params), Err(NotAvailable), "{field}");
    }
}

#[tokio::test]
async fn callers_joining_a_broken_load_all_get_its_error() {
    let config = DataConfig::default().with_max_concurrent_loads(17);
    let broken = MunicipalLayout::source_path(&config, Scenario::HorizonAanvoer, 2050);
    let source = Arc::new(
        municipal_source(&config)
            .with_broken(broken)
            .with_delay(Duration::from_millis(20)),
    );
    let loader = MunicipalDataLoader::new(Arc::clone(&source), config);

    let (first, second) = tokio::join!(loader.load_all_data(), loader.load_all_data());
    assert!(first.is_err() && second.is_err());
    assert_eq!(source.fetch_count(), 17);
    assert!(!loader.is_loaded());
}

#[tokio::test]
async fn unknown_keys_and_empty_cells_return_the_sentinel() {
    let (loader, _) = loader();
    loader.load_all_data().await.unwrap();
    let base = elec_volume(Scenario::EigenVermogen, 2035, "Demand", "Households");

    assert_eq!(loader.query(&base.for_region("GM9999")), Err(NotAvailable));
    assert_eq!(
        loader.query(&base.clone().sector("Buildings").region("GM0014")),
        Err(NotAvailable)
    );
    // A sheet absent from the workbook
    let meth = base.clone().carrier(Carrier::Meth).region("GM0014");
    assert_eq!(loader.query(&meth), Err(NotAvailable));
    // Zero is a value, not a gap
    assert_eq!(loader.query(&base.for_region("GM0363")), Ok(DataValue::Number(0.0)));
}

#[tokio::test]
async fn later_rows_for_the_same_municipality_win() {
    let (loader, _) = loader();
    loader.load_all_data().await.unwrap();
    let households = elec_volume(Scenario::EigenVermogen, 2050, "Demand", "Households").region("GM0034");
    let solar = elec_volume(Scenario::EigenVermogen, 2050, "Supply", "Solar PV").region("GM0034");

    assert_eq!(loader.query(&households), Ok(DataValue::Number(2.0)));
    assert_eq!(loader.query(&solar), Err(NotAvailable));
}

#[tokio::test]
async fn only_koersvaste_middenweg_has_2025_data() {
    let (loader, _) = loader();
    loader.load_all_data().await.unwrap();

    let koersvast = elec_volume(Scenario::KoersvasteMiddenweg, 2025, "Demand", "Households").region("GM0014");
    assert_eq!(
        loader.query(&koersvast),
        Ok(DataValue::Number(municipal_value(Scenario::KoersvasteMiddenweg, 2025)))
    );
    for scenario in [Scenario::EigenVermogen, Scenario::GezamenlijkeBalans, Scenario::HorizonAanvoer] {
        let params = koersvast.clone().scenario(scenario);
        assert_eq!(loader.query(&params), Err(NotAvailable), "{scenario}");
    }
}

#[tokio::test]
async fn a_broken_file_fails_the_whole_load() {
    let config = DataConfig::default();
    let broken = MunicipalLayout::source_path(&config, Scenario::GezamenlijkeBalans, 2035);
    let source = Arc::new(municipal_source(&config).with_broken(broken));
    let loader = MunicipalDataLoader::new(Arc::clone(&source), config);

    assert!(loader.load_all_data().await.is_err());
    assert!(!loader.is_loaded());
    let params = elec_volume(Scenario::EigenVermogen, 2030, "Demand", "Households").region("GM0014");
    assert_eq!(loader.query(&params), Err(NotAvailable));

    // The next call starts a fresh pass
    let fetched = source.fetch_count();
    assert!(loader.load_all_data().await.is_err());
    assert!(source.fetch_count() > fetched);
}

#[tokio::test]
async fn missing_files_fail_unless_skipped() {
    let config = DataConfig::default();
    let source = energy_atlas::MemoryWorkbookSource::new().with_workbook(
        MunicipalLayout::source_path(&config, Scenario::HorizonAanvoer, 2030),
        crate::utils::municipal_workbook(Scenario::HorizonAanvoer, 2030),
    );
    let strict = MunicipalDataLoader::new(source, config.clone());
    let err = strict.load_all_data().await.unwrap_err();
    assert!(err.is_missing_file());

    let lenient_config = config.with_missing_files(MissingFilePolicy::Skip);
    let lenient_source = energy_atlas::MemoryWorkbookSource::new().with_workbook(
        MunicipalLayout::source_path(&lenient_config, Scenario::HorizonAanvoer, 2030),
        crate::utils::municipal_workbook(Scenario::HorizonAanvoer, 2030),
    );
    let lenient = MunicipalDataLoader::new(lenient_source, lenient_config);
    lenient.load_all_data().await.unwrap();
    let params = elec_volume(Scenario::HorizonAanvoer, 2030, "Demand", "Households").region("GM0014");
    assert!(lenient.query(&params).is_ok());
    assert_eq!(lenient.query(&params.clone().year(2050)), Err(NotAvailable));
}

#[tokio::test]
async fn series_and_scaling_cover_every_file() {
    let (loader, _) = loader();
    loader.load_all_data().await.unwrap();

    let params = QueryParams::new()
        .carrier(Carrier::Elec)
        .metric_type(MetricType::Volume)
        .flow_type("Supply")
        .sector("Solar PV")
        .region("GM0014");
    let series = loader.series(&params);
    assert_eq!(series.len(), 4);
    assert_eq!(series[&Scenario::KoersvasteMiddenweg].len(), 5);
    assert_eq!(series[&Scenario::EigenVermogen].len(), 4);
    assert!(series.values().flatten().all(|point| point.value > 0.0));

    let largest = municipal_value(Scenario::KoersvasteMiddenweg, 2050);
    assert_eq!(loader.max_abs(MetricType::Volume), Some(largest));
    assert_eq!(loader.max_abs(MetricType::Capacity), Some(5.0));
    assert_eq!(loader.municipalities(), vec!["GM0014", "GM0034", "GM0363"]);
}
