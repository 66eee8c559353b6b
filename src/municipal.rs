//! Municipal data store
//!
//! One workbook per (scenario, year) with a sheet per carrier and metric type,
//! named `Municipality (<CARRIER>, <metric>)`. Rows are municipalities keyed
//! by their code (`GM0014`), columns are (flow type, sector) pairs.

use std::path::PathBuf;

use crate::analysis::{self, Series};
use crate::catalog::sectors;
use crate::common::ValueLookup;
use crate::config::DataConfig;
use crate::error::{NotAvailable, QueryResult, Result};
use crate::models::{Carrier, DataValue, MetricType, QueryParams, Scenario, SliceKey, Years};
use crate::store::{DataStore, SheetLayout, ValueTable};
use crate::utils::io::{municipal_file_name, municipal_sheet_name};
use crate::workbook::{FileWorkbookSource, Sheet, SheetBuilder, WorkbookSource};

/// Layout of the `Gemeentendata` workbooks
#[derive(Debug, Clone, Copy)]
pub struct MunicipalLayout;

impl SheetLayout for MunicipalLayout {
    const DOMAIN: &'static str = "municipal";

    fn source_path(config: &DataConfig, scenario: Scenario, year: u16) -> PathBuf {
        config.municipal_path(&municipal_file_name(scenario, year, &config.extension))
    }

    fn sheet_name(carrier: Carrier, metric_type: MetricType) -> String {
        municipal_sheet_name(carrier, metric_type)
    }

    /// Every labelled column of every coded row is recorded; a later row with
    /// the same municipality code replaces earlier values.
    fn parse_sheet(sheet: &Sheet, slice: SliceKey, table: &mut ValueTable) {
        let columns: Vec<(usize, String, String)> = (SheetBuilder::FIRST_DATA_COL..sheet.width())
            .filter_map(|col| {
                let flow_type = sheet.cell(SheetBuilder::TYPE_ROW, col).label()?;
                let sector = sheet.cell(SheetBuilder::SECTOR_ROW, col).label()?;
                Some((col, flow_type, sector))
            })
            .collect();

        for row in SheetBuilder::FIRST_DATA_ROW..sheet.height() {
            let Some(code) = sheet.cell(row, 0).label() else {
                continue;
            };
            for (col, flow_type, sector) in &columns {
                table.insert(
                    slice.cell(&code, flow_type, sector),
                    sheet.cell(row, *col).to_data_value(),
                );
            }
        }
    }
}

/// Municipality-keyed store
pub struct MunicipalDataLoader {
    store: DataStore<MunicipalLayout>,
}

impl MunicipalDataLoader {
    /// Create an unloaded store reading from `source`
    pub fn new(source: impl WorkbookSource + 'static, config: DataConfig) -> Self {
        Self {
            store: DataStore::new(source, config),
        }
    }

    /// Create an unloaded store reading workbooks below `config.data_dir`
    #[must_use]
    pub fn from_config(config: DataConfig) -> Self {
        let source = FileWorkbookSource::new(config.data_dir.clone());
        Self::new(source, config)
    }

    /// Create an already loaded store
    #[must_use]
    pub fn from_table(table: ValueTable) -> Self {
        Self {
            store: DataStore::from_table(table),
        }
    }

    /// Load all municipal workbooks; see [`DataStore::load_all`]
    pub async fn load_all_data(&self) -> Result<()> {
        self.store.load_all().await
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.store.is_loaded()
    }

    /// Raw stored value for a municipality.
    ///
    /// `params.region` is the municipality code. No unit conversion or
    /// coercion is applied.
    pub fn query(&self, params: &QueryParams) -> QueryResult<DataValue> {
        self.store.lookup(params).cloned()
    }

    #[must_use]
    pub const fn get_scenarios(&self) -> &'static [Scenario] {
        &Scenario::ALL
    }

    #[must_use]
    pub fn get_years(&self, scenario: Scenario) -> Years {
        scenario.years()
    }

    #[must_use]
    pub const fn get_carriers(&self) -> &'static [Carrier] {
        &Carrier::ALL
    }

    #[must_use]
    pub const fn get_metric_types(&self) -> &'static [MetricType] {
        &MetricType::ALL
    }

    /// Flow types the municipal sheets carry for a carrier
    #[must_use]
    pub const fn get_types(&self, carrier: Carrier) -> &'static [&'static str] {
        sectors::flow_types(carrier)
    }

    /// Configured sectors for a carrier and flow type
    #[must_use]
    pub fn get_sectors(&self, carrier: Carrier, flow_type: &str) -> &'static [&'static str] {
        sectors::sectors(carrier, flow_type)
    }

    /// Municipality codes present in the loaded data
    #[must_use]
    pub fn municipalities(&self) -> Vec<String> {
        self.store.table().map(ValueTable::regions).unwrap_or_default()
    }

    /// Values of one municipality across every scenario and year
    #[must_use]
    pub fn series(&self, params: &QueryParams) -> Series {
        analysis::series_over_years(self, params)
    }

    /// Largest absolute value for a metric type, for consistent scaling
    #[must_use]
    pub fn max_abs(&self, metric_type: MetricType) -> Option<f64> {
        self.store
            .table()
            .and_then(|table| table.max_abs(metric_type, DataValue::as_number))
    }
}

impl ValueLookup for MunicipalDataLoader {
    fn numeric(&self, params: &QueryParams) -> QueryResult<f64> {
        self.store
            .lookup(params)
            .and_then(|value| value.as_number().ok_or(NotAvailable))
    }
}
