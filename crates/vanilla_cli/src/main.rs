//! Vanilla CLI - European option pricing from the command line
//!
//! # Commands
//!
//! - `vanilla price` - Price one contract with one model
//! - `vanilla compare` - Price one contract with every model
//! - `vanilla check` - Print the resolved configuration
//!
//! Settings resolve in the order CLI flags, `VANILLA_*` environment
//! variables, config file, defaults. Logs go to stderr so that stdout only
//! carries results.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vanilla_engines::PriceRequest;

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

use config::{build_config, CliArgs, CliConfig};

/// European option pricer
#[derive(Parser)]
#[command(name = "vanilla")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, default_value = "vanilla.toml")]
    config: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price a contract with a single model
    Price {
        /// Model (black-scholes, monte-carlo, binomial-tree)
        #[arg(short, long, default_value = "black-scholes")]
        model: String,

        #[command(flatten)]
        contract: ContractArgs,

        #[command(flatten)]
        engine: EngineArgs,
    },

    /// Price a contract with every model
    Compare {
        #[command(flatten)]
        contract: ContractArgs,

        #[command(flatten)]
        engine: EngineArgs,
    },

    /// Print the resolved configuration
    Check {
        #[command(flatten)]
        engine: EngineArgs,
    },
}

/// Contract inputs
#[derive(Args, Debug, Clone)]
struct ContractArgs {
    /// Spot price
    #[arg(short, long, default_value_t = 100.0)]
    #[arg(allow_negative_numbers = true)]
    spot: f64,

    /// Strike price
    #[arg(short = 'k', long, default_value_t = 100.0)]
    #[arg(allow_negative_numbers = true)]
    strike: f64,

    /// Time to maturity in years
    #[arg(short = 't', long, default_value_t = 1.0)]
    #[arg(allow_negative_numbers = true)]
    maturity: f64,

    /// Continuously compounded risk-free rate
    #[arg(short, long, default_value_t = 0.05)]
    #[arg(allow_negative_numbers = true)]
    rate: f64,

    /// Annualised volatility
    #[arg(short, long, default_value_t = 0.2)]
    #[arg(allow_negative_numbers = true)]
    volatility: f64,

    /// Option type (call, put)
    #[arg(short, long, default_value = "call")]
    option_type: String,
}

/// Engine and output settings
#[derive(Args, Debug, Clone, Default)]
struct EngineArgs {
    /// Binomial tree steps
    #[arg(long, allow_negative_numbers = true)]
    steps: Option<i64>,

    /// Monte Carlo sample count
    #[arg(long, allow_negative_numbers = true)]
    simulations: Option<i64>,

    /// Monte Carlo seed
    #[arg(long)]
    seed: Option<u64>,

    /// Use antithetic variates for Monte Carlo
    #[arg(long)]
    antithetic: bool,

    /// Output format (text, json)
    #[arg(short, long)]
    format: Option<String>,
}

impl Cli {
    fn config_args(&self) -> CliArgs {
        let engine = match &self.command {
            Commands::Price { engine, .. }
            | Commands::Compare { engine, .. }
            | Commands::Check { engine } => engine.clone(),
        };
        CliArgs {
            config_file: Some(self.config.clone()),
            log_level: self.log_level.clone(),
            format: engine.format,
            steps: engine.steps,
            num_simulations: engine.simulations,
            seed: engine.seed,
            antithetic: engine.antithetic,
        }
    }
}

fn request(model: &str, contract: &ContractArgs, config: &CliConfig) -> PriceRequest {
    PriceRequest {
        model: model.to_string(),
        spot: contract.spot,
        strike: contract.strike,
        maturity: contract.maturity,
        rate: contract.rate,
        volatility: contract.volatility,
        option_type: contract.option_type.clone(),
        steps: config.pricing.steps,
        num_simulations: config.pricing.num_simulations,
        seed: config.pricing.seed,
        antithetic: config.pricing.antithetic,
    }
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = build_config(&cli.config_args())?;
    init_tracing(config.general.log_level.as_filter_str());

    match &cli.command {
        Commands::Price {
            model, contract, ..
        } => commands::price::run(&request(model, contract, &config), config.general.format),
        Commands::Compare { contract, .. } => commands::compare::run(
            &request("black-scholes", contract, &config),
            config.general.format,
        ),
        Commands::Check { .. } => commands::check::run(&config),
    }
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
