//! Storage and loading shared by both data stores

pub mod loader;
pub mod table;

pub use loader::{DataStore, SheetLayout};
pub use table::ValueTable;
