//! Numeric lookups
//!
//! Both stores answer the same question for the dashboard: "what number belongs
//! to these seven parameters?". Aggregations such as totals and year series are
//! written once against this trait.

use crate::error::QueryResult;
use crate::models::QueryParams;

/// A store that can resolve complete query parameters to a number
pub trait ValueLookup: Send + Sync {
    /// Numeric value for `params`, or the sentinel
    fn numeric(&self, params: &QueryParams) -> QueryResult<f64>;
}
