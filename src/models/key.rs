//! Typed keys into the value table and the query parameters that produce them.

use serde::{Deserialize, Serialize};

use super::carrier::{Carrier, MetricType};
use super::scenario::Scenario;

/// The four dimensions fixed by one sheet of one source file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SliceKey {
    pub scenario: Scenario,
    pub year: u16,
    pub carrier: Carrier,
    pub metric_type: MetricType,
}

impl SliceKey {
    #[must_use]
    pub const fn new(scenario: Scenario, year: u16, carrier: Carrier, metric_type: MetricType) -> Self {
        Self {
            scenario,
            year,
            carrier,
            metric_type,
        }
    }

    /// Extend the slice with the row and column labels of one cell
    #[must_use]
    pub fn cell(self, region: &str, flow_type: &str, sector: &str) -> DataKey {
        DataKey {
            slice: self,
            region: region.to_string(),
            flow_type: flow_type.to_string(),
            sector: sector.to_string(),
        }
    }
}

/// Full seven-dimension address of one stored value
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DataKey {
    pub slice: SliceKey,
    /// Municipality code or normalized province name
    pub region: String,
    /// Demand, Supply, Flexibility, Exchange, ...
    pub flow_type: String,
    pub sector: String,
}

/// Parameters of a single lookup.
///
/// Every field is optional so that callers can build selections incrementally;
/// a query only succeeds once all seven are present. Empty strings and year `0`
/// count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryParams {
    pub scenario: Option<Scenario>,
    pub year: Option<u16>,
    pub carrier: Option<Carrier>,
    pub metric_type: Option<MetricType>,
    pub region: Option<String>,
    pub flow_type: Option<String>,
    pub sector: Option<String>,
}

impl QueryParams {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parameters for everything except the region
    #[must_use]
    pub fn selection(
        scenario: Scenario,
        year: u16,
        carrier: Carrier,
        metric_type: MetricType,
        flow_type: impl Into<String>,
        sector: impl Into<String>,
    ) -> Self {
        Self {
            scenario: Some(scenario),
            year: Some(year),
            carrier: Some(carrier),
            metric_type: Some(metric_type),
            region: None,
            flow_type: Some(flow_type.into()),
            sector: Some(sector.into()),
        }
    }

    #[must_use]
    pub const fn scenario(mut self, scenario: Scenario) -> Self {
        self.scenario = Some(scenario);
        self
    }

    #[must_use]
    pub const fn year(mut self, year: u16) -> Self {
        self.year = Some(year);
        self
    }

    #[must_use]
    pub const fn carrier(mut self, carrier: Carrier) -> Self {
        self.carrier = Some(carrier);
        self
    }

    #[must_use]
    pub const fn metric_type(mut self, metric_type: MetricType) -> Self {
        self.metric_type = Some(metric_type);
        self
    }

    #[must_use]
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    #[must_use]
    pub fn flow_type(mut self, flow_type: impl Into<String>) -> Self {
        self.flow_type = Some(flow_type.into());
        self
    }

    #[must_use]
    pub fn sector(mut self, sector: impl Into<String>) -> Self {
        self.sector = Some(sector.into());
        self
    }

    /// Copy of these parameters pointed at another region
    #[must_use]
    pub fn for_region(&self, region: &str) -> Self {
        self.clone().region(region)
    }

    /// Names of the parameters that are absent or empty
    #[must_use]
    pub fn missing(&self) -> Vec<&'static str> {
        let text_missing = |v: &Option<String>| v.as_deref().is_none_or(str::is_empty);
        let mut missing = Vec::new();
        if self.scenario.is_none() {
            missing.push("scenario");
        }
        if self.year.is_none_or(|y| y == 0) {
            missing.push("year");
        }
        if self.carrier.is_none() {
            missing.push("carrier");
        }
        if self.metric_type.is_none() {
            missing.push("metric_type");
        }
        if text_missing(&self.region) {
            missing.push("region");
        }
        if text_missing(&self.flow_type) {
            missing.push("type");
        }
        if text_missing(&self.sector) {
            missing.push("sector");
        }
        missing
    }

    /// The full key, if every parameter is present
    #[must_use]
    pub fn to_key(&self) -> Option<DataKey> {
        let slice = SliceKey::new(
            self.scenario?,
            self.year.filter(|y| *y != 0)?,
            self.carrier?,
            self.metric_type?,
        );
        fn non_empty(v: &Option<String>) -> Option<&str> {
            v.as_deref().filter(|s| !s.is_empty())
        }
        Some(slice.cell(
            non_empty(&self.region)?,
            non_empty(&self.flow_type)?,
            non_empty(&self.sector)?,
        ))
    }
}
