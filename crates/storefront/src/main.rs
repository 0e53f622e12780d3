//! Cafe World - order drinks from shops near you.
//!
//! # Usage
//!
//! ```bash
//! # Browse the catalog API at http://localhost:5000
//! cafe-world
//!
//! # Use local JSON files instead
//! cafe-world --catalog-dir ./fixtures
//!
//! # Replay a list of commands
//! cafe-world --catalog-dir ./fixtures < order.txt
//! ```
//!
//! Logs go to stderr; set `RUST_LOG` to change the level.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use cafe_world_storefront::catalog::ConfiguredCatalog;
use cafe_world_storefront::checkout::NoopCheckout;
use cafe_world_storefront::config::StorefrontConfig;
use cafe_world_storefront::console::{self, Command, HELP};
use cafe_world_storefront::error::AppError;
use cafe_world_storefront::state::AppState;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "cafe-world")]
#[command(author, version, about = "Order drinks from shops near you")]
struct Cli {
    /// Read shops.json and drinks.json from this directory
    #[arg(long, conflicts_with = "api_url")]
    catalog_dir: Option<PathBuf>,

    /// Catalog API base URL
    #[arg(long)]
    api_url: Option<String>,

    /// Log as JSON lines
    #[arg(long)]
    json_logs: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.json_logs);

    let mut state = match start_session(&cli).await {
        Ok(state) => state,
        Err(e) => {
            tracing::error!("Failed to start session: {e}");
            return ExitCode::FAILURE;
        }
    };

    match run_console(&mut state) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Console I/O failed: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Initialize tracing with `EnvFilter`, writing to stderr.
///
/// Defaults to info level for our crates if `RUST_LOG` is not set.
fn init_tracing(json: bool) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "cafe_world_storefront=info,cafe_world_core=info".into());

    let registry = tracing_subscriber::registry().with(env_filter);
    if json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .init();
    }
}

async fn start_session(cli: &Cli) -> Result<AppState, AppError> {
    let mut config = StorefrontConfig::from_env()?;
    if let Some(dir) = &cli.catalog_dir {
        config = config.with_catalog_dir(dir.clone());
    } else if let Some(url) = &cli.api_url {
        config = config.with_api_url(url)?;
    }
    tracing::info!(catalog = ?config.catalog, "Starting session");

    let source = ConfiguredCatalog::from_config(&config)?;
    AppState::load(&source).await
}

#[allow(clippy::print_stdout)]
fn run_console(state: &mut AppState) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("Welcome to Cafe World\n");
    println!("{}\n", console::render_shops(state));
    println!("Type 'help' for commands.");

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        let revision = state.cart_revision();
        let result = line
            .parse::<Command>()
            .and_then(|command| console::execute(state, command, &NoopCheckout));

        match result {
            Ok(reply) => {
                println!("{}", reply.text);
                if reply.quit {
                    break;
                }
                if state.cart_revision() != revision {
                    println!("({} in cart)", state.cart().total_quantity());
                }
            }
            Err(AppError::BadRequest(msg)) => println!("{msg}\n{HELP}"),
            Err(e) => {
                tracing::debug!(error = %e, "Command rejected");
                println!("{e}");
            }
        }
    }
    Ok(())
}
