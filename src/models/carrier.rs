//! Energy carriers and metric types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AtlasError;

/// An energy vector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Carrier {
    /// Electricity
    Elec,
    /// Hydrogen
    H2,
    /// Methane
    Meth,
}

impl Carrier {
    /// All carriers in display order
    pub const ALL: [Self; 3] = [Self::Elec, Self::H2, Self::Meth];

    /// Label used in sheet names
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Elec => "ELEC",
            Self::H2 => "H2",
            Self::Meth => "METH",
        }
    }
}

impl fmt::Display for Carrier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Carrier {
    type Err = AtlasError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|carrier| carrier.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| AtlasError::InvalidArgument(format!("unknown carrier '{s}'")))
    }
}

/// Whether a value measures power or energy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MetricType {
    /// Power in MW
    Capacity,
    /// Energy in MWh
    Volume,
}

impl MetricType {
    /// Both metric types
    pub const ALL: [Self; 2] = [Self::Capacity, Self::Volume];

    /// Label used in sheet names
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Capacity => "capacity",
            Self::Volume => "volume",
        }
    }

    /// Unit the stored values are expressed in
    #[must_use]
    pub const fn base_unit(self) -> &'static str {
        match self {
            Self::Capacity => "MW",
            Self::Volume => "MWh",
        }
    }
}

impl fmt::Display for MetricType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for MetricType {
    type Err = AtlasError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|metric| metric.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| AtlasError::InvalidArgument(format!("unknown metric type '{s}'")))
    }
}
