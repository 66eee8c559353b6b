//! Log lines for workbook loading
//!
//! Reads are logged at debug level. Files and sheets that a load pass leaves
//! out are warnings, since the store then answers with the sentinel for them.

use std::path::Path;
use std::time::Duration;

/// A workbook file is about to be decoded
pub fn log_workbook_open(path: &Path) {
    log::debug!("Reading workbook {}", path.display());
}

/// A workbook file was decoded into `sheets` sheets
pub fn log_workbook_read(path: &Path, sheets: usize, elapsed: Duration) {
    log::debug!("Read {sheets} sheets from {} in {elapsed:?}", path.display());
}

/// A source file was absent and the load pass went on without it
pub fn log_skipped_file(domain: &str, path: &Path) {
    log::warn!("{}", skipped_file_message(domain, path));
}

/// A workbook lacks the sheet for one carrier and metric type
pub fn log_missing_sheet(domain: &str, sheet: &str, path: &Path) {
    log::warn!("{}", missing_sheet_message(domain, sheet, path));
}

fn skipped_file_message(domain: &str, path: &Path) -> String {
    format!("Skipping missing {domain} source file {}", path.display())
}

fn missing_sheet_message(domain: &str, sheet: &str, path: &Path) -> String {
    format!("Sheet '{sheet}' not found in {domain} workbook {}", path.display())
}
