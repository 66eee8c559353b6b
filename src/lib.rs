//! Loading and querying Dutch energy-scenario spreadsheets.
//!
//! Two stores are provided: [`MunicipalDataLoader`] keyed by municipality code
//! and [`ProvincialDataLoader`] keyed by normalized province name. Both load
//! every (scenario, year) workbook once and then answer lookups from memory;
//! a lookup that cannot produce a value returns [`NotAvailable`].

pub mod analysis;
pub mod catalog;
pub mod common;
pub mod config;
pub mod error;
pub mod models;
pub mod municipal;
pub mod provincial;
pub mod regions;
pub mod store;
pub mod units;
pub mod utils;
pub mod workbook;

// Core types
pub use config::{DataConfig, MissingFilePolicy};
pub use error::{AtlasError, NOT_AVAILABLE, NotAvailable, QueryResult, Result};
pub use models::{Carrier, DataKey, DataValue, MetricType, QueryParams, Scenario, SliceKey};

// Stores
pub use municipal::MunicipalDataLoader;
pub use provincial::ProvincialDataLoader;
pub use store::ValueTable;

// Workbook access
pub use workbook::{
    CellValue, FileWorkbookSource, MemoryWorkbookSource, Sheet, SheetBuilder, Workbook,
    WorkbookSource,
};

// Derived data
pub use analysis::{Series, YearValue};
pub use common::ValueLookup;
pub use regions::MunicipalityNames;
pub use units::{CapacityUnit, DisplayUnits, VolumeUnit, format_value};
