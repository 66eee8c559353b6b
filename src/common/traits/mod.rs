//! Common traits used across the codebase

pub mod lookup;

pub use lookup::ValueLookup;
