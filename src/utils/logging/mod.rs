//! Logging utilities for output and progress tracking
//!
//! Standardized log lines for load operations, console rendering for the
//! command line tool and indicatif progress spinners.

pub mod console;
pub mod log;
pub mod progress;

pub use log::{log_missing_sheet, log_skipped_file, log_workbook_open, log_workbook_read};
pub use progress::{create_spinner, finish_and_clear, finish_progress_bar};
