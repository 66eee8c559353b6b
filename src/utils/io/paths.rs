//! Naming conventions of the source files and their sheets
//!
//! File and sheet names follow fixed templates; these functions are the only
//! place the templates are spelled out.

use crate::models::{Carrier, MetricType, Scenario};

/// File name of the municipal workbook for a scenario and year
///
/// # Arguments
/// * `scenario` - Scenario the file belongs to
/// * `year` - Year the file covers
/// * `extension` - File extension without the dot
#[must_use]
pub fn municipal_file_name(scenario: Scenario, year: u16, extension: &str) -> String {
    format!("Scenario {scenario} {year} Gemeentendata.{extension}")
}

/// File name of the provincial workbook for a scenario and year
#[must_use]
pub fn provincial_file_name(scenario: Scenario, year: u16, extension: &str) -> String {
    format!("Scenario {scenario} {year} Provinciedata.{extension}")
}

/// Sheet holding municipal values for a carrier and metric type
#[must_use]
pub fn municipal_sheet_name(carrier: Carrier, metric_type: MetricType) -> String {
    format!("Municipality ({carrier}, {metric_type})")
}

/// Sheet holding provincial industry values for a carrier and metric type
#[must_use]
pub fn provincial_sheet_name(carrier: Carrier, metric_type: MetricType) -> String {
    format!("Industry ({carrier}, {metric_type})")
}
