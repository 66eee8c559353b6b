//! Shared fixtures: in-memory workbooks laid out like the dashboard's files

use energy_atlas::municipal::MunicipalLayout;
use energy_atlas::provincial::ProvincialLayout;
use energy_atlas::store::SheetLayout;
use energy_atlas::{
    Carrier, CellValue, DataConfig, MemoryWorkbookSource, MetricType, QueryParams, Scenario,
    SheetBuilder, Workbook,
};

/// Number stored for GM0014 / Demand / Households in each file
#[must_use]
pub fn municipal_value(scenario: Scenario, year: u16) -> f64 {
    let index = Scenario::ALL
        .iter()
        .position(|s| *s == scenario)
        .unwrap_or_default();
    f64::from(year) * 10.0 + index as f64
}

/// ELEC volume and H2 capacity sheets; the other four sheets are absent
#[must_use]
pub fn municipal_workbook(scenario: Scenario, year: u16) -> Workbook {
    let value = municipal_value(scenario, year);
    let elec_volume = SheetBuilder::new()
        .column("Demand", "Households")
        .column("Supply", "Solar PV")
        .column("Demand", "Buildings")
        .row("GM0014", "Groningen", vec![value.into(), (-value).into(), CellValue::Empty])
        .row("GM0363", "Amsterdam", vec![0.0.into(), "n/a".into(), "12".into()])
        .row("GM0034", "Almere", vec![1.0.into(), 1.0.into(), 1.0.into()])
        .row("GM0034", "Almere", vec![2.0.into(), CellValue::Empty, 2.0.into()])
        .build();
    let h2_capacity = SheetBuilder::new()
        .column("Exchange", "Import")
        .row("GM0014", "Groningen", vec![5.0.into()])
        .build();

    Workbook::new()
        .with_sheet("Municipality (ELEC, volume)", elec_volume)
        .with_sheet("Municipality (H2, capacity)", h2_capacity)
}

/// A source holding all seventeen municipal workbooks
#[must_use]
pub fn municipal_source(config: &DataConfig) -> MemoryWorkbookSource {
    Scenario::pairs().fold(MemoryWorkbookSource::new(), |source, (scenario, year)| {
        source.with_workbook(
            MunicipalLayout::source_path(config, scenario, year),
            municipal_workbook(scenario, year),
        )
    })
}

/// H2 volume and ELEC capacity sheets.
///
/// Noord-Holland appears twice; Koersvaste Middenweg 2025 carries one
/// extra ELEC sector.
#[must_use]
pub fn provincial_workbook(scenario: Scenario, year: u16) -> Workbook {
    let h2_volume = SheetBuilder::new()
        .column("Demand", "Chemicals")
        .column("Demand", "Steel")
        .column("Supply", "Electrolysis")
        .column("Demand", "Refineries")
        .row(
            "PV20",
            "Groningen",
            vec![f64::from(year).into(), "1,234.5".into(), CellValue::Empty, CellValue::Empty],
        )
        .row(
            "PV27",
            "Noord-Holland",
            vec![(-100.0).into(), CellValue::Empty, "abc".into(), CellValue::Empty],
        )
        .row(
            "PV27",
            "Noord-Holland",
            vec![999.0.into(), 50.0.into(), 7.0.into(), CellValue::Empty],
        )
        .row(
            "PV28",
            "Zuid-Holland",
            vec![0.0.into(), CellValue::Empty, CellValue::Empty, CellValue::Empty],
        )
        .build();

    let mut elec_capacity = SheetBuilder::new().column("Demand", "Food");
    let mut limburg = vec![CellValue::from(3.0)];
    if scenario == Scenario::KoersvasteMiddenweg && year == 2025 {
        elec_capacity = elec_capacity.column("Demand", "Paper");
        limburg.push(CellValue::from(4.0));
    }
    let elec_capacity = elec_capacity.row("PV31", "Limburg", limburg).build();

    Workbook::new()
        .with_sheet("Industry (H2, volume)", h2_volume)
        .with_sheet("Industry (ELEC, capacity)", elec_capacity)
}

/// A source holding all seventeen provincial workbooks
#[must_use]
pub fn provincial_source(config: &DataConfig) -> MemoryWorkbookSource {
    Scenario::pairs().fold(MemoryWorkbookSource::new(), |source, (scenario, year)| {
        source.with_workbook(
            ProvincialLayout::source_path(config, scenario, year),
            provincial_workbook(scenario, year),
        )
    })
}

/// Municipal ELEC volume selection without a region
#[must_use]
pub fn elec_volume(scenario: Scenario, year: u16, flow_type: &str, sector: &str) -> QueryParams {
    QueryParams::selection(
        scenario,
        year,
        Carrier::Elec,
        MetricType::Volume,
        flow_type,
        sector,
    )
}

/// Provincial H2 volume selection without a region
#[must_use]
pub fn h2_volume(scenario: Scenario, year: u16, flow_type: &str, sector: &str) -> QueryParams {
    QueryParams::selection(scenario, year, Carrier::H2, MetricType::Volume, flow_type, sector)
}

/// Copies of `complete` with one field cleared: unset, and where it has one,
/// its empty form (year 0, empty label)
#[must_use]
pub fn with_each_field_cleared(complete: &QueryParams) -> Vec<(&'static str, QueryParams)> {
    let edit = |change: fn(&mut QueryParams)| {
        let mut params = complete.clone();
        change(&mut params);
        params
    };
    vec![
        ("scenario", edit(|p| p.scenario = None)),
        ("year", edit(|p| p.year = None)),
        ("year 0", edit(|p| p.year = Some(0))),
        ("carrier", edit(|p| p.carrier = None)),
        ("metric_type", edit(|p| p.metric_type = None)),
        ("region", edit(|p| p.region = None)),
        ("empty region", edit(|p| p.region = Some(String::new()))),
        ("flow_type", edit(|p| p.flow_type = None)),
        ("empty flow_type", edit(|p| p.flow_type = Some(String::new()))),
        ("sector", edit(|p| p.sector = None)),
        ("empty sector", edit(|p| p.sector = Some(String::new()))),
    ]
}
