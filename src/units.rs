//! Display units for stored values
//!
//! Volumes are stored in MWh and capacities in MW. The dashboard shows volumes
//! in TWh or PJ and capacities in MW or GW, dropping to a smaller unit for small
//! magnitudes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AtlasError;
use crate::models::MetricType;

const MWH_PER_TWH: f64 = 1_000_000.0;
const PJ_PER_TWH: f64 = 3.6;
const MW_PER_GW: f64 = 1_000.0;

/// Unit in which volumes are displayed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum VolumeUnit {
    #[default]
    TWh,
    PJ,
}

/// Unit in which capacities are displayed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CapacityUnit {
    /// MW, switching to GW from 1000 MW
    #[default]
    Auto,
    GW,
}

/// The user's unit preferences
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayUnits {
    pub volume: VolumeUnit,
    pub capacity: CapacityUnit,
}

impl DisplayUnits {
    #[must_use]
    pub const fn new(volume: VolumeUnit, capacity: CapacityUnit) -> Self {
        Self { volume, capacity }
    }
}

#[must_use]
pub fn mwh_to_twh(mwh: f64) -> f64 {
    mwh / MWH_PER_TWH
}

#[must_use]
pub fn twh_to_pj(twh: f64) -> f64 {
    twh * PJ_PER_TWH
}

#[must_use]
pub fn mw_to_gw(mw: f64) -> f64 {
    mw / MW_PER_GW
}

/// Convert a stored value to the number shown for `metric_type` in `units`
///
/// Unlike [`format_value`] this keeps the sign and never steps down to
/// GWh, TJ or MW.
#[must_use]
pub fn convert(value: f64, metric_type: MetricType, units: DisplayUnits) -> f64 {
    match (metric_type, units.volume, units.capacity) {
        (MetricType::Volume, VolumeUnit::TWh, _) => mwh_to_twh(value),
        (MetricType::Volume, VolumeUnit::PJ, _) => twh_to_pj(mwh_to_twh(value)),
        (MetricType::Capacity, _, CapacityUnit::Auto) => value,
        (MetricType::Capacity, _, CapacityUnit::GW) => mw_to_gw(value),
    }
}

/// Label for a stored value, e.g. `12.34 TWh`, `450 GWh` or `2.50 GW`.
///
/// The magnitude is shown; the sign only encodes direction in the source data.
#[must_use]
pub fn format_value(value: f64, metric_type: MetricType, units: DisplayUnits) -> String {
    let magnitude = value.abs();
    match metric_type {
        MetricType::Volume => {
            let twh = mwh_to_twh(magnitude);
            match units.volume {
                VolumeUnit::TWh => stepped(twh, "TWh", "GWh"),
                VolumeUnit::PJ => stepped(twh_to_pj(twh), "PJ", "TJ"),
            }
        }
        MetricType::Capacity => match units.capacity {
            CapacityUnit::GW => format!("{:.2} GW", mw_to_gw(magnitude)),
            CapacityUnit::Auto if magnitude >= MW_PER_GW => {
                format!("{:.2} GW", mw_to_gw(magnitude))
            }
            CapacityUnit::Auto => format!("{magnitude:.0} MW"),
        },
    }
}

/// Thousands get a `k` suffix, values below one step down to the
/// unit a thousand times smaller.
fn stepped(value: f64, unit: &str, smaller: &str) -> String {
    if value >= 1000.0 {
        format!("{:.1}k {unit}", value / 1000.0)
    } else if value >= 1.0 {
        format!("{value:.2} {unit}")
    } else {
        format!("{:.0} {smaller}", value * 1000.0)
    }
}

impl fmt::Display for VolumeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::TWh => "TWh",
            Self::PJ => "PJ",
        })
    }
}

impl FromStr for VolumeUnit {
    type Err = AtlasError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "twh" => Ok(Self::TWh),
            "pj" => Ok(Self::PJ),
            other => Err(AtlasError::InvalidArgument(format!(
                "unknown volume unit '{other}'"
            ))),
        }
    }
}

impl fmt::Display for CapacityUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Auto => "MW",
            Self::GW => "GW",
        })
    }
}

impl FromStr for CapacityUnit {
    type Err = AtlasError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mw" | "auto" => Ok(Self::Auto),
            "gw" => Ok(Self::GW),
            other => Err(AtlasError::InvalidArgument(format!(
                "unknown capacity unit '{other}'"
            ))),
        }
    }
}
