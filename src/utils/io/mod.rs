//! IO utilities for file naming

pub mod paths;

pub use paths::{
    municipal_file_name, municipal_sheet_name, provincial_file_name, provincial_sheet_name,
};
