//! Provincial industry data store
//!
//! One workbook per (scenario, year) with sheets named
//! `Industry (<CARRIER>, <metric>)`. Rows carry a province code in column 0
//! and the display name in column 1; values are keyed by the normalized name
//! (`noordholland`). The industrial sectors are not known up front, so this
//! store also answers discovery and aggregation questions over its content.

use std::path::PathBuf;

use crate::analysis::{self, Series};
use crate::catalog::{DEMAND, provinces};
use crate::common::ValueLookup;
use crate::config::DataConfig;
use crate::error::{NotAvailable, QueryResult, Result};
use crate::models::{
    Carrier, DataValue, MetricType, QueryParams, Scenario, SliceKey, normalize_province_name,
};
use crate::store::{DataStore, SheetLayout, ValueTable};
use crate::utils::io::{provincial_file_name, provincial_sheet_name};
use crate::workbook::{FileWorkbookSource, Sheet, SheetBuilder, WorkbookSource};

/// Layout of the `Provinciedata` workbooks
#[derive(Debug, Clone, Copy)]
pub struct ProvincialLayout;

impl ProvincialLayout {
    /// Sheets shorter than this hold no data rows
    const MIN_ROWS: usize = SheetBuilder::FIRST_DATA_ROW + 1;
}

impl SheetLayout for ProvincialLayout {
    const DOMAIN: &'static str = "provincial";

    fn source_path(config: &DataConfig, scenario: Scenario, year: u16) -> PathBuf {
        config.provincial_path(&provincial_file_name(scenario, year, &config.extension))
    }

    fn sheet_name(carrier: Carrier, metric_type: MetricType) -> String {
        provincial_sheet_name(carrier, metric_type)
    }

    /// First write wins: once a province has a value for a (flow type,
    /// sector) column, later rows for the same province leave it alone.
    fn parse_sheet(sheet: &Sheet, slice: SliceKey, table: &mut ValueTable) {
        if sheet.height() < Self::MIN_ROWS {
            return;
        }

        let columns: Vec<(usize, String, String)> =
            (SheetBuilder::FIRST_DATA_COL..sheet.row(SheetBuilder::TYPE_ROW).len())
                .filter_map(|col| {
                    let flow_type = sheet.cell(SheetBuilder::TYPE_ROW, col).label()?;
                    let sector = sheet.cell(SheetBuilder::SECTOR_ROW, col).label()?;
                    Some((col, flow_type, sector))
                })
                .collect();

        for row in SheetBuilder::FIRST_DATA_ROW..sheet.height() {
            let cells = sheet.row(row);
            if cells.len() < 2 || cells[0].is_empty() {
                continue;
            }
            let Some(name) = cells[1].label() else {
                continue;
            };
            let province = normalize_province_name(&name);

            for (col, flow_type, sector) in &columns {
                table.insert_first(
                    slice.cell(&province, flow_type, sector),
                    sheet.cell(row, *col).to_data_value(),
                );
            }
        }
    }
}

/// Province-keyed store for industrial data
pub struct ProvincialDataLoader {
    store: DataStore<ProvincialLayout>,
}

impl ProvincialDataLoader {
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

    /// Load all provincial workbooks; see [`DataStore::load_all`]
    pub async fn load_all_data(&self) -> Result<()> {
        self.store.load_all().await
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.store.is_loaded()
    }

    /// Numeric value for a province.
    ///
    /// `params.region` is the normalized province name. Text cells are read
    /// with thousands separators removed, up to the end of their leading
    /// number; text without one is the sentinel.
    pub fn query(&self, params: &QueryParams) -> QueryResult<f64> {
        self.store
            .lookup(params)
            .and_then(|value| value.coerce_numeric().ok_or(NotAvailable))
    }

    /// Every sector recorded for a carrier and flow type, sorted
    #[must_use]
    pub fn get_sectors_for_carrier_and_type(&self, carrier: Carrier, flow_type: &str) -> Vec<String> {
        self.store
            .table()
            .map(|table| table.sectors(carrier, flow_type))
            .unwrap_or_default()
    }

    /// Every flow type recorded for a carrier, sorted
    #[must_use]
    pub fn get_types_for_carrier(&self, carrier: Carrier) -> Vec<String> {
        self.store
            .table()
            .map(|table| table.flow_types(carrier))
            .unwrap_or_default()
    }

    /// Sectors offered under the dashboard's "Industrial Demand" selection
    #[must_use]
    pub fn industrial_demand_sectors(&self, carrier: Carrier) -> Vec<String> {
        self.get_sectors_for_carrier_and_type(carrier, DEMAND)
    }

    /// National total: the sum of absolute values over the twelve provinces.
    ///
    /// `params.region` is ignored. Provinces without a valid number are left
    /// out; `None` when no province has one.
    #[must_use]
    pub fn calculate_total(&self, params: &QueryParams) -> Option<f64> {
        analysis::sum_abs(self, params, provinces::keys())
    }

    /// The subset of `sectors` with a valid number in at least one province
    #[must_use]
    pub fn sectors_with_data(&self, params: &QueryParams, sectors: &[String]) -> Vec<String> {
        sectors
            .iter()
            .filter(|sector| {
                let params = params.clone().sector(sector.as_str());
                analysis::any_region_has_data(self, &params, provinces::keys())
            })
            .cloned()
            .collect()
    }

    /// Values of one province across every scenario and year
    #[must_use]
    pub fn series(&self, params: &QueryParams) -> Series {
        analysis::series_over_years(self, params)
    }

    /// Largest absolute value for a metric type, for consistent scaling
    #[must_use]
    pub fn max_abs(&self, metric_type: MetricType) -> Option<f64> {
        self.store
            .table()
            .and_then(|table| table.max_abs(metric_type, DataValue::coerce_numeric))
    }

    /// Province keys present in the loaded data
    #[must_use]
    pub fn provinces(&self) -> Vec<String> {
        self.store.table().map(ValueTable::regions).unwrap_or_default()
    }

    /// Display name for a normalized province key
    #[must_use]
    pub fn province_display_name(&self, key: &str) -> Option<&'static str> {
        provinces::display_name(key)
    }
}

impl ValueLookup for ProvincialDataLoader {
    fn numeric(&self, params: &QueryParams) -> QueryResult<f64> {
        self.query(params)
    }
}
