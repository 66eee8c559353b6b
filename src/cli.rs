use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use energy_atlas::config::{DATA_DIR_ENV, MAX_CONCURRENT_LOADS_ENV};
use energy_atlas::{
    CapacityUnit, Carrier, DataConfig, DisplayUnits, MetricType, MissingFilePolicy, QueryParams,
    Scenario, VolumeUnit,
};

#[derive(Parser, Debug)]
#[command(
    name = "energy-atlas",
    version,
    about = "Query Dutch energy-scenario data per municipality and province"
)]
pub struct Cli {
    /// Directory holding the `municipal` and `provincial` workbook folders
    #[arg(short, long, env = DATA_DIR_ENV, default_value = "data", global = true)]
    pub data_dir: PathBuf,

    /// Number of workbooks read at the same time
    #[arg(long, env = MAX_CONCURRENT_LOADS_ENV, global = true)]
    pub max_concurrent_loads: Option<usize>,

    /// Continue when a (scenario, year) workbook is missing
    #[arg(long, global = true)]
    pub skip_missing: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn data_config(&self) -> DataConfig {
        let mut config = DataConfig::default().with_data_dir(&self.data_dir);
        if let Some(limit) = self.max_concurrent_loads {
            config = config.with_max_concurrent_loads(limit);
        }
        if self.skip_missing {
            config = config.with_missing_files(MissingFilePolicy::Skip);
        }
        config
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Look up one municipality value
    Municipal {
        #[command(flatten)]
        selection: SelectionArgs,

        /// Municipality code, e.g. GM0363
        #[arg(short, long)]
        region: String,

        /// CSV with gm_code and gm_naam columns for display names
        #[arg(long)]
        names: Option<PathBuf>,

        #[command(flatten)]
        units: UnitArgs,
    },

    /// Look up one province value
    Province {
        #[command(flatten)]
        selection: SelectionArgs,

        /// Province name, e.g. Noord-Holland
        #[arg(short, long)]
        region: String,

        #[command(flatten)]
        units: UnitArgs,
    },

    /// Sum of absolute values over the twelve provinces
    Total {
        #[command(flatten)]
        selection: SelectionArgs,

        #[command(flatten)]
        units: UnitArgs,
    },

    /// Values of one region for every scenario and year
    Series {
        #[arg(value_enum)]
        domain: Domain,

        /// Municipality code or province name
        #[arg(short, long)]
        region: String,

        #[arg(long)]
        carrier: Carrier,

        #[arg(long)]
        metric: MetricType,

        #[arg(long = "type")]
        flow_type: String,

        #[arg(long)]
        sector: String,
    },

    /// Sectors found in the provincial data for a carrier and flow type
    Sectors {
        #[arg(long)]
        carrier: Carrier,

        #[arg(long = "type", default_value = "Demand")]
        flow_type: String,

        /// Only sectors with data for this scenario, year and metric type
        #[arg(long, requires_all = ["year", "metric"])]
        scenario: Option<Scenario>,

        #[arg(long)]
        year: Option<u16>,

        #[arg(long)]
        metric: Option<MetricType>,
    },

    /// Flow types found in the provincial data for a carrier
    Types {
        #[arg(long)]
        carrier: Carrier,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Domain {
    Municipal,
    Provincial,
}

/// Scenario, year, carrier, metric type, flow type and sector
#[derive(Args, Debug, Clone)]
pub struct SelectionArgs {
    /// Scenario name, e.g. "Koersvaste Middenweg"
    #[arg(long)]
    pub scenario: Scenario,

    #[arg(long)]
    pub year: u16,

    /// ELEC, H2 or METH
    #[arg(long)]
    pub carrier: Carrier,

    /// capacity or volume
    #[arg(long)]
    pub metric: MetricType,

    /// Flow type, e.g. Demand
    #[arg(long = "type")]
    pub flow_type: String,

    #[arg(long)]
    pub sector: String,
}

impl SelectionArgs {
    pub fn params(&self) -> QueryParams {
        QueryParams::selection(
            self.scenario,
            self.year,
            self.carrier,
            self.metric,
            self.flow_type.as_str(),
            self.sector.as_str(),
        )
    }
}

#[derive(Args, Debug, Clone, Copy)]
pub struct UnitArgs {
    /// Volume display unit: TWh or PJ
    #[arg(long, default_value = "TWh")]
    pub volume_unit: VolumeUnit,

    /// Capacity display unit: MW (switches to GW from 1000 MW) or GW
    #[arg(long, default_value = "MW")]
    pub capacity_unit: CapacityUnit,
}

impl UnitArgs {
    pub const fn display_units(self) -> DisplayUnits {
        DisplayUnits::new(self.volume_unit, self.capacity_unit)
    }
}
