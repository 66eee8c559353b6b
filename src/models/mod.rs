//! Domain types shared by both data stores
//!
//! Scenarios, carriers and metric types are closed vocabularies and are typed;
//! regions, flow types and sectors come from sheet labels and stay strings.

pub mod carrier;
pub mod key;
pub mod scenario;
pub mod value;

pub use carrier::{Carrier, MetricType};
pub use key::{DataKey, QueryParams, SliceKey};
pub use scenario::{ALL_YEARS, Scenario, Years};
pub use value::{DataValue, normalize_province_name};
