//! Scenarios and their valid years.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::AtlasError;

/// Every year any scenario publishes data for, in ascending order
pub const ALL_YEARS: [u16; 5] = [2025, 2030, 2035, 2040, 2050];

const STANDARD_YEARS: [u16; 4] = [2030, 2035, 2040, 2050];

/// Year list for a single scenario
pub type Years = SmallVec<[u16; 5]>;

/// A named policy pathway of the national energy outlook
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Scenario {
    /// Eigen Vermogen
    EigenVermogen,
    /// Gezamenlijke Balans
    GezamenlijkeBalans,
    /// Horizon Aanvoer
    HorizonAanvoer,
    /// Koersvaste Middenweg, the only scenario that also covers 2025
    KoersvasteMiddenweg,
}

impl Scenario {
    /// All scenarios in display order
    pub const ALL: [Self; 4] = [
        Self::EigenVermogen,
        Self::GezamenlijkeBalans,
        Self::HorizonAanvoer,
        Self::KoersvasteMiddenweg,
    ];

    /// The name used in file names and in the dashboard
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::EigenVermogen => "Eigen Vermogen",
            Self::GezamenlijkeBalans => "Gezamenlijke Balans",
            Self::HorizonAanvoer => "Horizon Aanvoer",
            Self::KoersvasteMiddenweg => "Koersvaste Middenweg",
        }
    }

    /// Years this scenario has a source file for
    #[must_use]
    pub fn years(self) -> Years {
        let mut years = Years::new();
        if self == Self::KoersvasteMiddenweg {
            years.push(2025);
        }
        years.extend_from_slice(&STANDARD_YEARS);
        years
    }

    /// Whether the scenario publishes data for `year`
    #[must_use]
    pub fn has_year(self, year: u16) -> bool {
        self.years().contains(&year)
    }

    /// Every (scenario, year) pair that has a source file
    pub fn pairs() -> impl Iterator<Item = (Self, u16)> {
        Self::ALL
            .into_iter()
            .flat_map(|scenario| scenario.years().into_iter().map(move |year| (scenario, year)))
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scenario {
    type Err = AtlasError;

    /// Accepts the display name in any case, with or without spaces
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        Self::ALL
            .into_iter()
            .find(|scenario| scenario.name().replace(' ', "").eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| AtlasError::InvalidArgument(format!("unknown scenario '{s}'")))
    }
}
