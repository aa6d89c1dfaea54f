//! CLI definition using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use fueleu_domain::model::PoolMember;
use fueleu_types::OutputFormat;

#[derive(Parser)]
#[command(name = "fueleu-dashboard")]
#[command(author = "yuuji")]
#[command(version)]
#[command(about = "FuelEU compliance balance, banking and pooling for ship routes")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Store directory override
    #[arg(long, global = true)]
    pub store_dir: Option<PathBuf>,

    /// TOML file with regulatory parameters (target_intensity, mj_per_ton, compliance_ceiling)
    #[arg(long, global = true)]
    pub params: Option<PathBuf>,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Registered routes, baseline and comparison
    Routes {
        #[command(subcommand)]
        action: RouteCommands,
    },

    /// Compliance balance for a ship/year
    Cb {
        /// Ship (route) id, e.g. "R001"
        #[arg(long, short = 's')]
        ship: String,

        #[arg(long, short = 'y')]
        year: i32,

        /// Include banked and applied amounts
        #[arg(long)]
        adjusted: bool,
    },

    /// Bank surplus and apply it to deficits
    Bank {
        #[command(subcommand)]
        action: BankCommands,
    },

    /// Pool compliance balances for one year
    Pool {
        #[command(subcommand)]
        action: PoolCommands,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set store directory
        #[arg(long)]
        set_store_dir: Option<PathBuf>,

        /// Set target intensity (gCO2e/MJ)
        #[arg(long)]
        set_target_intensity: Option<f64>,

        /// Set energy content per tonne of fuel (MJ/t)
        #[arg(long)]
        set_mj_per_ton: Option<f64>,

        /// Set compliance ceiling (gCO2e/MJ)
        #[arg(long)]
        set_ceiling: Option<f64>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}

#[derive(Subcommand)]
pub enum RouteCommands {
    /// List all routes
    List,

    /// Set the baseline route by numeric id
    Baseline { id: u64 },

    /// Compare every route against the baseline
    Compare,

    /// Import routes from a CSV file
    Import { csv: PathBuf },
}

#[derive(Subcommand)]
pub enum BankCommands {
    /// List bank entries
    Records {
        #[arg(long, short = 's')]
        ship: Option<String>,

        #[arg(long, short = 'y')]
        year: Option<i32>,
    },

    /// Show banked balance available for a ship/year
    Available {
        #[arg(long, short = 's')]
        ship: String,

        #[arg(long, short = 'y')]
        year: i32,
    },

    /// Bank surplus (defaults to the whole positive balance)
    Deposit {
        #[arg(long, short = 's')]
        ship: String,

        #[arg(long, short = 'y')]
        year: i32,

        /// Amount in tCO2e
        #[arg(long, short = 'a')]
        amount: Option<f64>,
    },

    /// Apply banked surplus to a deficit
    Apply {
        #[arg(long, short = 's')]
        ship: String,

        #[arg(long, short = 'y')]
        year: i32,
    },
}

#[derive(Subcommand)]
pub enum PoolCommands {
    /// Create a pool; members are drawn down in the order given
    Create {
        #[arg(long, short = 'y')]
        year: i32,

        /// Member as SHIP=CB, e.g. --member R001=50 --member R002=-30
        #[arg(long = "member", short = 'm', value_parser = parse_member, required = true)]
        members: Vec<PoolMember>,
    },

    /// List pools
    List {
        #[arg(long, short = 'y')]
        year: Option<i32>,
    },
}

pub fn parse_member(s: &str) -> Result<PoolMember, String> {
    let (ship, cb) = s
        .split_once('=')
        .ok_or_else(|| format!("expected SHIP=CB, got '{}'", s))?;
    let ship = ship.trim();
    if ship.is_empty() {
        return Err(format!("missing ship id in '{}'", s));
    }
    let cb: f64 = cb
        .trim()
        .parse()
        .map_err(|_| format!("invalid compliance balance in '{}'", s))?;
    if !cb.is_finite() {
        return Err(format!("compliance balance must be finite in '{}'", s));
    }
    Ok(PoolMember::new(ship, cb))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_member() {
        assert_eq!(parse_member("R001=50").unwrap(), PoolMember::new("R001", 50.0));
        assert_eq!(parse_member(" R002 = -30.5 ").unwrap(), PoolMember::new("R002", -30.5));
        assert!(parse_member("R001").is_err());
        assert!(parse_member("=5").is_err());
        assert!(parse_member("R001=lots").is_err());
        assert!(parse_member("R001=NaN").is_err());
        assert!(parse_member("R001=inf").is_err());
        assert!(parse_member("R001=-inf").is_err());
    }

    #[test]
    fn test_pool_create_args_keep_order() {
        let cli = Cli::try_parse_from([
            "fueleu-dashboard",
            "pool",
            "create",
            "--year",
            "2025",
            "-m",
            "S1=10",
            "-m",
            "S2=20",
            "-m",
            "S3=-15",
        ])
        .unwrap();
        match cli.command {
            Commands::Pool {
                action: PoolCommands::Create { year, members },
            } => {
                assert_eq!(year, 2025);
                let ids: Vec<_> = members.iter().map(|m| m.ship_id.as_str()).collect();
                assert_eq!(ids, vec!["S1", "S2", "S3"]);
                assert_eq!(members[2].cb_before, -15.0);
            }
            _ => panic!("expected pool create"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "fueleu-dashboard",
            "cb",
            "--ship",
            "R001",
            "--year",
            "2024",
            "-f",
            "json",
            "--store-dir",
            "/tmp/store",
        ])
        .unwrap();
        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert_eq!(cli.store_dir, Some(PathBuf::from("/tmp/store")));
    }

    #[test]
    fn test_config_regulation_setters() {
        let cli = Cli::try_parse_from([
            "fueleu-dashboard",
            "config",
            "--set-target-intensity",
            "88.5",
            "--set-mj-per-ton",
            "42000",
        ])
        .unwrap();
        match cli.command {
            Commands::Config {
                set_target_intensity,
                set_mj_per_ton,
                set_ceiling,
                ..
            } => {
                assert_eq!(set_target_intensity, Some(88.5));
                assert_eq!(set_mj_per_ton, Some(42000.0));
                assert_eq!(set_ceiling, None);
            }
            _ => panic!("expected config"),
        }
    }

    #[test]
    fn test_pool_create_requires_member() {
        assert!(Cli::try_parse_from(["fueleu-dashboard", "pool", "create", "--year", "2025"]).is_err());
    }
}
