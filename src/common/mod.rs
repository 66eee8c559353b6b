//! Common traits
//!
//! Seams shared by the municipal and provincial stores, kept here to avoid
//! circular dependencies between them and the analysis helpers.

pub mod traits;

pub use traits::*;
