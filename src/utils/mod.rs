//! Utility functions shared across the crate

pub mod io;
pub mod logging;

pub use logging::{log_missing_sheet, log_skipped_file, log_workbook_open, log_workbook_read};
