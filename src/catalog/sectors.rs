//! Sector vocabulary of the municipal sheets, per carrier and flow type.
//!
//! Industrial demand sectors are not listed here; they only exist in the
//! provincial sheets and are discovered from loaded content.

use crate::models::Carrier;

pub const DEMAND: &str = "Demand";
pub const SUPPLY: &str = "Supply";
pub const FLEXIBILITY: &str = "Flexibility";
pub const EXCHANGE: &str = "Exchange";

/// Dashboard selection that reads provincial `Demand` columns
pub const INDUSTRIAL_DEMAND: &str = "Industrial Demand";

const ELEC_DEMAND: &[&str] = &[
    "Agriculture",
    "Buildings",
    "Buildings_hp_electric",
    "Buildings_hp_hybrid",
    "CO2_storage",
    "Datacenters",
    "Direct_air_capture",
    "District_heat_network",
    "Households",
    "Households_hp_electric",
    "Households_hp_hybrid",
    "Other_demand",
    "Transport_bus",
    "Transport_car",
    "Transport_other",
    "Transport_plane",
    "Transport_ship",
    "Transport_train",
    "Transport_tram",
    "Transport_truck",
    "Transport_van",
];

const ELEC_FLEXIBILITY: &[&str] = &[
    "Agriculture_CHP",
    "Agriculture_PtH",
    "Battery_households",
    "Battery_solar_PV",
    "Battery_system",
    "Battery_transport",
    "Battery_wind_onshore",
    "Curtailment",
    "Datacenters_DSR",
    "Deficit",
    "District_PtH",
    "Hydro_storage",
    "IDES_storage",
    "MDES_storage",
    "Power_plant_coal",
    "Power_plant_hydrogen",
    "Power_plant_hydrogen_backup",
    "Power_plant_methane",
    "Power_plant_methane_CHP",
    "Power_plant_methane_backup",
    "Power_plant_nuclear",
    "Power_plant_nuclear_SMR",
    "Power_plant_other",
    "Power_plant_waste",
    "Power_to_gas_offshore",
    "Power_to_gas_onshore",
];

const ELEC_SUPPLY: &[&str] = &[
    "Hydro_RoR",
    "Power_plant_biomass",
    "Solar_PV_buildings",
    "Solar_PV_field",
    "Solar_PV_households",
    "Wind_offshore",
    "Wind_offshore_hybrid",
    "Wind_onshore",
];

const H2_DEMAND: &[&str] = &[
    "Agriculture",
    "Buildings_combi_boiler",
    "Buildings_hp_hybrid",
    "District_heat_network",
    "Households_combi_boiler",
    "Households_hp_hybrid",
    "Other_demand",
    "Transport",
    "Transport_plane",
    "Transport_ship",
];

const H2_FLEXIBILITY: &[&str] = &[
    "Power_plant_hydrogen",
    "Power_plant_hydrogen_backup",
    "Power_to_gas_onshore",
    "Storage",
];

const H2_SUPPLY: &[&str] = &[
    "Ammonia_reformer",
    "Biomass_hydrogen_production",
    "Blue_hydrogen_production",
    "Grey_hydrogen_production",
    "LOHC",
    "Liquid_hydrogen",
    "Power_to_gas_solar_PV",
    "Power_to_gas_wind_offshore_dedicated",
    "Power_to_gas_wind_offshore_hybrid",
];

const METH_DEMAND: &[&str] = &[
    "Agriculture",
    "Agriculture_CHP",
    "Biomass_hydrogen_production",
    "Blue_hydrogen_production",
    "Buildings",
    "Buildings_combi_boiler",
    "Buildings_hp_hybrid",
    "District_heat_network",
    "Grey_hydrogen_production",
    "Households",
    "Households_combi_boiler",
    "Households_hp_hybrid",
    "Other_demand",
    "Transport_other",
];

const METH_FLEXIBILITY: &[&str] = &[
    "Power_plant_methane",
    "Power_plant_methane_CHP",
    "Power_plant_methane_backup",
    "Storage",
];

const METH_SUPPLY: &[&str] = &[
    "Green_gas_dry_gasification",
    "Green_gas_fermentation",
    "Green_gas_wet_gasification",
    "Natural_gas_production",
];

const EXCHANGE_SECTORS: &[&str] = &["Export", "Import"];

/// Flow types the municipal sheets carry for a carrier.
///
/// `Exchange` only exists for the gas carriers.
#[must_use]
pub const fn flow_types(carrier: Carrier) -> &'static [&'static str] {
    match carrier {
        Carrier::Elec => &[DEMAND, FLEXIBILITY, SUPPLY],
        Carrier::H2 | Carrier::Meth => &[DEMAND, EXCHANGE, FLEXIBILITY, SUPPLY],
    }
}

/// Configured sectors for a carrier and flow type; empty when the pair is unknown
#[must_use]
pub fn sectors(carrier: Carrier, flow_type: &str) -> &'static [&'static str] {
    match (carrier, flow_type) {
        (Carrier::Elec, DEMAND) => ELEC_DEMAND,
        (Carrier::Elec, FLEXIBILITY) => ELEC_FLEXIBILITY,
        (Carrier::Elec, SUPPLY) => ELEC_SUPPLY,
        (Carrier::H2, DEMAND) => H2_DEMAND,
        (Carrier::H2, FLEXIBILITY) => H2_FLEXIBILITY,
        (Carrier::H2, SUPPLY) => H2_SUPPLY,
        (Carrier::Meth, DEMAND) => METH_DEMAND,
        (Carrier::Meth, FLEXIBILITY) => METH_FLEXIBILITY,
        (Carrier::Meth, SUPPLY) => METH_SUPPLY,
        (Carrier::H2 | Carrier::Meth, EXCHANGE) => EXCHANGE_SECTORS,
        _ => &[],
    }
}
