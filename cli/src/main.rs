mod config;
mod quote;

use clap::{Parser, Subcommand};
use config::{expand_path, load_config, NodeConfig, ADMIN_TOKEN_ENV, DEFAULT_CONFIG_PATH};
use owo_colors::OwoColorize;
use std::net::SocketAddr;
use std::path::PathBuf;
use tok_api::ApiState;
use tok_economics::{CurrencyCode, PricingConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tokd")]
#[command(about = "TokRecharge pricing node", version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the pricing API
    Serve {
        /// Listen address, overrides the config file
        #[arg(short, long)]
        bind: Option<String>,
    },

    /// Print what a number of coins is worth and pays out
    Quote {
        /// Number of coins
        coins: u64,

        /// Currency code
        #[arg(short = 'C', long, default_value = "USD")]
        currency: String,

        /// Withdrawal fee as a fraction (e.g. 0.05); all tiers when omitted
        #[arg(short, long)]
        fee: Option<f64>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config_path = cli
        .config
        .unwrap_or_else(|| PathBuf::from(expand_path(DEFAULT_CONFIG_PATH)));

    let config = match load_config(&config_path) {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::warn!("could not load config {}: {}", config_path.display(), e);
            NodeConfig::default()
        }
    };

    let pricing_path = config.pricing_path();
    let pricing = match &pricing_path {
        Some(path) => {
            tracing::info!("loading pricing tables from {}", path.display());
            PricingConfig::from_toml_file(path)?
        }
        None => {
            tracing::info!("using built-in pricing tables");
            PricingConfig::default()
        }
    };

    match cli.command {
        Commands::Serve { bind } => {
            let bind = bind.unwrap_or_else(|| config.server.bind.clone());
            let addr: SocketAddr = bind.parse()?;
            let admin_token = config.admin_token(std::env::var(ADMIN_TOKEN_ENV).ok());

            println!("{}", "TokRecharge pricing node".cyan().bold());
            println!("Config file: {:?}", config_path);

            if admin_token.is_none() {
                tracing::warn!("no admin token configured, pricing reload is disabled");
            }

            let mut state = ApiState::new(pricing).with_admin_token(admin_token);
            if let Some(path) = pricing_path {
                state = state.with_pricing_path(path);
            }

            tok_api::start_server(addr, state).await?;
        }
        Commands::Quote {
            coins,
            currency,
            fee,
        } => {
            let currency: CurrencyCode = currency.parse()?;
            let quote = quote::build_quote(&pricing, coins, currency, fee)?;
            quote::print_quote(&quote);
        }
    }

    Ok(())
}
