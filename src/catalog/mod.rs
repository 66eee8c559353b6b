//! Static vocabulary of the dashboard: sectors per carrier and the provinces.
//!
//! Scenarios, years, carriers and metric types live on their enums in
//! [`crate::models`].

pub mod provinces;
pub mod sectors;

pub use sectors::{DEMAND, EXCHANGE, FLEXIBILITY, INDUSTRIAL_DEMAND, SUPPLY};
