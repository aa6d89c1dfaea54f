//! Command handlers

use std::path::{Path, PathBuf};

use fueleu_app::app::{
    BankingService, ComplianceService, PoolingService, RouteService, ServiceError, ServiceResult,
};
use fueleu_app::config::Config;
use fueleu_app::repository::{open_bank_repo, open_pool_repo, open_route_repo};
use fueleu_domain::model::PoolMember;
use fueleu_infra::regulation_loader::load_regulatory_params;
use fueleu_types::OutputFormat;

use crate::cli::{BankCommands, Cli, Commands, PoolCommands, RouteCommands};
use crate::output::{self, emit};

pub fn execute(cli: Cli) -> ServiceResult<()> {
    if let Commands::Config {
        show,
        set_output,
        set_store_dir,
        set_target_intensity,
        set_mj_per_ton,
        set_ceiling,
        reset,
    } = cli.command
    {
        return cmd_config(
            show,
            set_output,
            set_store_dir,
            RegulationUpdate {
                target_intensity: set_target_intensity,
                mj_per_ton: set_mj_per_ton,
                compliance_ceiling: set_ceiling,
            },
            reset,
        );
    }

    let config = resolve_config(cli.store_dir.clone(), cli.params.as_deref())?;
    let format = cli.format.unwrap_or(config.output_format);

    match cli.command {
        Commands::Routes { action } => cmd_routes(&config, format, action),
        Commands::Cb {
            ship,
            year,
            adjusted,
        } => cmd_cb(&config, format, &ship, year, adjusted),
        Commands::Bank { action } => cmd_bank(&config, format, action),
        Commands::Pool { action } => cmd_pool(&config, format, action),
        Commands::Config { .. } => Ok(()),
    }
}

/// Saved config with command-line overrides applied
fn resolve_config(store_dir: Option<PathBuf>, params: Option<&Path>) -> ServiceResult<Config> {
    let mut config = Config::load()?;

    if let Some(dir) = store_dir {
        config.store_dir = Some(dir);
    }

    if let Some(path) = params {
        config.regulation = load_regulatory_params(path)?;
        tracing::debug!(path = %path.display(), params = %config.regulation, "loaded regulatory parameters");
    }

    Ok(config)
}

fn cmd_routes(config: &Config, format: OutputFormat, action: RouteCommands) -> ServiceResult<()> {
    let repo = open_route_repo(config)?;
    let service = RouteService::new(&repo, config.regulation);

    match action {
        RouteCommands::List => {
            let routes = service.list_routes()?;
            emit(format, routes.as_slice(), output::format_routes)?;
        }
        RouteCommands::Baseline { id } => {
            let route = service.set_baseline(id)?;
            match format {
                OutputFormat::Json => output::print_json(&route)?,
                OutputFormat::Table => println!(
                    "Baseline set: #{} {} ({:.4} gCO2e/MJ)",
                    route.id, route.route_id, route.ghg_intensity
                ),
            }
        }
        RouteCommands::Compare => {
            let report = service.comparison()?;
            emit(format, &report, output::format_comparison)?;
        }
        RouteCommands::Import { csv } => {
            let imported = service.import_routes(&csv)?;
            match format {
                OutputFormat::Json => output::print_json(imported.as_slice())?,
                OutputFormat::Table => {
                    println!("Imported {} route(s) from {}", imported.len(), csv.display())
                }
            }
        }
    }
    Ok(())
}

fn cmd_cb(
    config: &Config,
    format: OutputFormat,
    ship: &str,
    year: i32,
    adjusted: bool,
) -> ServiceResult<()> {
    let routes = open_route_repo(config)?;
    let bank = open_bank_repo(config)?;
    let service = ComplianceService::new(&routes, &bank, config.regulation);

    if adjusted {
        let report = service.adjusted_balance(ship, year)?;
        emit(format, &report, output::format_adjusted_cb)?;
    } else {
        let report = service.compliance_balance(ship, year)?;
        emit(format, &report, output::format_cb)?;
    }
    Ok(())
}

fn cmd_bank(config: &Config, format: OutputFormat, action: BankCommands) -> ServiceResult<()> {
    let routes = open_route_repo(config)?;
    let bank = open_bank_repo(config)?;
    let service = BankingService::new(&routes, &bank, config.regulation);

    match action {
        BankCommands::Records { ship, year } => {
            let entries = service.records(ship.as_deref(), year)?;
            emit(format, entries.as_slice(), output::format_bank_records)?;
        }
        BankCommands::Available { ship, year } => {
            let report = service.available(&ship, year)?;
            emit(format, &report, output::format_available)?;
        }
        BankCommands::Deposit { ship, year, amount } => {
            let report = service.bank(&ship, year, amount)?;
            emit(format, &report, output::format_bank_report)?;
        }
        BankCommands::Apply { ship, year } => {
            let report = service.apply(&ship, year)?;
            emit(format, &report, output::format_apply_report)?;
        }
    }
    Ok(())
}

fn cmd_pool(config: &Config, format: OutputFormat, action: PoolCommands) -> ServiceResult<()> {
    let repo = open_pool_repo(config)?;
    let service = PoolingService::new(&repo);

    match action {
        PoolCommands::Create { year, members } => {
            tracing::debug!(year, members = %describe_members(&members), "creating pool");
            let report = service.create_pool(year, &members)?;
            emit(format, &report, output::format_pool)?;
        }
        PoolCommands::List { year } => {
            let pools = service.list_pools(year)?;
            emit(format, pools.as_slice(), output::format_pools)?;
        }
    }
    Ok(())
}

/// Regulatory parameters to overwrite in the saved config
struct RegulationUpdate {
    target_intensity: Option<f64>,
    mj_per_ton: Option<f64>,
    compliance_ceiling: Option<f64>,
}

fn cmd_config(
    show: bool,
    set_output: Option<OutputFormat>,
    set_store_dir: Option<PathBuf>,
    regulation: RegulationUpdate,
    reset: bool,
) -> ServiceResult<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let mut config = Config::load()?;
    let mut modified = false;

    if let Some(output_format) = set_output {
        config.output_format = output_format;
        modified = true;
    }

    if let Some(dir) = set_store_dir {
        config.store_dir = Some(dir);
        modified = true;
    }

    if let Some(target) = regulation.target_intensity {
        config.regulation.target_intensity = positive("target intensity", target)?;
        modified = true;
    }

    if let Some(mj_per_ton) = regulation.mj_per_ton {
        config.regulation.mj_per_ton = positive("energy content", mj_per_ton)?;
        modified = true;
    }

    if let Some(ceiling) = regulation.compliance_ceiling {
        config.regulation.compliance_ceiling = positive("compliance ceiling", ceiling)?;
        modified = true;
    }

    if modified {
        config.save()?;
        println!("Configuration saved");
    }

    if show || !modified {
        println!("Config file: {}", Config::config_path()?.display());
        println!("\n{}", config);
    }

    Ok(())
}

fn positive(name: &str, value: f64) -> ServiceResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ServiceError::InvalidInput(format!(
            "{} must be a positive number, got {}",
            name, value
        )))
    }
}

fn describe_members(members: &[PoolMember]) -> String {
    members
        .iter()
        .map(|m| format!("{}={}", m.ship_id, m.cb_before))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_rejects_bad_regulation_values() {
        assert_eq!(positive("energy content", 42000.0).unwrap(), 42000.0);
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                positive("energy content", bad),
                Err(ServiceError::InvalidInput(_))
            ));
        }
    }
}
