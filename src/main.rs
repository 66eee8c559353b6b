mod cli;

use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use energy_atlas::models::normalize_province_name;
use energy_atlas::utils::logging::console::{print_list, print_result, print_series};
use energy_atlas::utils::logging::{create_spinner, finish_and_clear};
use energy_atlas::{
    DataConfig, DataValue, MunicipalDataLoader, MunicipalityNames, ProvincialDataLoader,
    QueryParams, Series, format_value,
};
use log::info;

use cli::{Cli, Commands, Domain};

#[tokio::main]
async fn main() -> Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = cli.data_config();
    info!("Using data directory {}", config.data_dir.display());

    match cli.command.clone() {
        Commands::Municipal {
            selection,
            region,
            names,
            units,
        } => {
            let loader = load_municipal(config).await?;
            let result = loader.query(&selection.params().region(region.as_str()));

            let label = match names {
                Some(path) => MunicipalityNames::from_csv_path(&path)
                    .with_context(|| format!("reading municipality names from {}", path.display()))?
                    .display_name(&region)
                    .to_string(),
                None => region.clone(),
            };

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&result.as_ref().ok())?);
            } else {
                print_result(&label, &result);
                if let Some(value) = result.as_ref().ok().and_then(DataValue::as_number) {
                    println!("  {}", format_value(value, selection.metric, units.display_units()));
                }
            }
        }

        Commands::Province {
            selection,
            region,
            units,
        } => {
            let loader = load_provincial(config).await?;
            let province = normalize_province_name(&region);
            let result = loader.query(&selection.params().region(province.as_str()));
            let label = loader
                .province_display_name(&province)
                .unwrap_or(region.as_str());

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&result.ok())?);
            } else {
                print_result(label, &result);
                if let Ok(value) = result {
                    println!("  {}", format_value(value, selection.metric, units.display_units()));
                }
            }
        }

        Commands::Total { selection, units } => {
            let loader = load_provincial(config).await?;
            let total = loader.calculate_total(&selection.params());

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&total)?);
            } else {
                let result = total.ok_or(energy_atlas::NotAvailable);
                print_result("Total", &result);
                if let Ok(value) = result {
                    println!("  {}", format_value(value, selection.metric, units.display_units()));
                }
            }
        }

        Commands::Series {
            domain,
            region,
            carrier,
            metric,
            flow_type,
            sector,
        } => {
            let params = QueryParams::new()
                .carrier(carrier)
                .metric_type(metric)
                .flow_type(flow_type)
                .sector(sector);

            let series: Series = match domain {
                Domain::Municipal => load_municipal(config)
                    .await?
                    .series(&params.region(region.as_str())),
                Domain::Provincial => load_provincial(config)
                    .await?
                    .series(&params.region(normalize_province_name(&region))),
            };

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&series)?);
            } else {
                print_series(&series);
            }
        }

        Commands::Sectors {
            carrier,
            flow_type,
            scenario,
            year,
            metric,
        } => {
            let loader = load_provincial(config).await?;
            let mut sectors = loader.get_sectors_for_carrier_and_type(carrier, &flow_type);

            if let (Some(scenario), Some(year), Some(metric)) = (scenario, year, metric) {
                let params = QueryParams::new()
                    .scenario(scenario)
                    .year(year)
                    .carrier(carrier)
                    .metric_type(metric)
                    .flow_type(flow_type.as_str());
                sectors = loader.sectors_with_data(&params, &sectors);
            }

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&sectors)?);
            } else {
                print_list(&format!("{carrier} {flow_type} sectors"), &sectors);
            }
        }

        Commands::Types { carrier } => {
            let loader = load_provincial(config).await?;
            let types = loader.get_types_for_carrier(carrier);

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&types)?);
            } else {
                print_list(&format!("{carrier} flow types"), &types);
            }
        }
    }

    Ok(())
}

async fn load_municipal(config: DataConfig) -> Result<MunicipalDataLoader> {
    let loader = MunicipalDataLoader::from_config(config);
    let pb = create_spinner(Some("Loading municipal workbooks"));
    let start = Instant::now();
    let result = loader.load_all_data().await;
    finish_and_clear(&pb);
    result.context("failed to load municipal data")?;
    info!("Municipal data ready in {:?}", start.elapsed());
    Ok(loader)
}

async fn load_provincial(config: DataConfig) -> Result<ProvincialDataLoader> {
    let loader = ProvincialDataLoader::from_config(config);
    let pb = create_spinner(Some("Loading provincial workbooks"));
    let start = Instant::now();
    let result = loader.load_all_data().await;
    finish_and_clear(&pb);
    result.context("failed to load provincial data")?;
    info!("Provincial data ready in {:?}", start.elapsed());
    Ok(loader)
}
