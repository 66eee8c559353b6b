//! The value table: one entry per (scenario, year, carrier, metric type,
//! region, flow type, sector) combination present in the source sheets.

use itertools::Itertools;
use rustc_hash::FxHashMap;

use crate::error::{NotAvailable, QueryResult};
use crate::models::{Carrier, DataKey, DataValue, MetricType};

/// Flat map from the seven-dimension key to the recorded cell.
///
/// `None` marks a labelled column whose cell was empty: the key exists (so the
/// sector is discoverable) but a lookup still yields [`NotAvailable`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValueTable {
    values: FxHashMap<DataKey, Option<DataValue>>,
}

impl ValueTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Record a cell, replacing whatever was there
    pub fn insert(&mut self, key: DataKey, value: Option<DataValue>) {
        self.values.insert(key, value);
    }

    /// Record a cell unless a value is already present.
    ///
    /// An existing empty slot is filled; an existing value (including zero)
    /// is kept.
    pub fn insert_first(&mut self, key: DataKey, value: Option<DataValue>) {
        let slot = self.values.entry(key).or_insert(None);
        if slot.is_none() {
            *slot = value;
        }
    }

    /// Merge another table in; entries of `other` replace equal keys
    pub fn merge(&mut self, other: Self) {
        self.values.extend(other.values);
    }

    /// Stored value for a key
    pub fn get(&self, key: &DataKey) -> QueryResult<&DataValue> {
        self.values
            .get(key)
            .and_then(Option::as_ref)
            .ok_or(NotAvailable)
    }

    /// Whether the key exists, even with an empty cell
    #[must_use]
    pub fn contains_key(&self, key: &DataKey) -> bool {
        self.values.contains_key(key)
    }

    /// Iterate every recorded cell
    pub fn iter(&self) -> impl Iterator<Item = (&DataKey, Option<&DataValue>)> {
        self.values.iter().map(|(k, v)| (k, v.as_ref()))
    }

    /// Sorted, distinct flow types recorded for a carrier
    #[must_use]
    pub fn flow_types(&self, carrier: Carrier) -> Vec<String> {
        self.values
            .keys()
            .filter(|key| key.slice.carrier == carrier)
            .map(|key| key.flow_type.as_str())
            .sorted_unstable()
            .dedup()
            .map(str::to_string)
            .collect()
    }

    /// Sorted, distinct sectors recorded for a carrier and flow type
    #[must_use]
    pub fn sectors(&self, carrier: Carrier, flow_type: &str) -> Vec<String> {
        self.values
            .keys()
            .filter(|key| key.slice.carrier == carrier && key.flow_type == flow_type)
            .map(|key| key.sector.as_str())
            .sorted_unstable()
            .dedup()
            .map(str::to_string)
            .collect()
    }

    /// Sorted, distinct regions in the table
    #[must_use]
    pub fn regions(&self) -> Vec<String> {
        self.values
            .keys()
            .map(|key| key.region.as_str())
            .sorted_unstable()
            .dedup()
            .map(str::to_string)
            .collect()
    }

    /// Largest absolute numeric value for a metric type
    pub fn max_abs<F>(&self, metric_type: MetricType, numeric: F) -> Option<f64>
    where
        F: Fn(&DataValue) -> Option<f64>,
    {
        self.values
            .iter()
            .filter(|(key, _)| key.slice.metric_type == metric_type)
            .filter_map(|(_, value)| value.as_ref().and_then(&numeric))
            .map(f64::abs)
            .reduce(f64::max)
    }
}
