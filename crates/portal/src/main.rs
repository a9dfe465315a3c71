//! School supplemental insurance portal - terminal entry point.
//!
//! CLI-based entry point that dispatches to the command modules.

mod cli;
mod commands;
mod output;
mod prompt;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use client::Portal;
use common::{AppError, PortalConfig};

use crate::cli::{Cli, Commands};

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize tracing (verbose mode sets debug level)
    init_tracing(cli.verbose);

    // Load configuration
    let mut config = PortalConfig::from_env();
    if let Some(api_url) = cli.api_url.clone() {
        config.api.base_url = api_url;
    }
    tracing::debug!("Configuration loaded");

    let portal = match Portal::new(&config) {
        Ok(portal) => portal,
        Err(e) => {
            tracing::error!("Failed to initialize: {}", e);
            std::process::exit(1);
        }
    };

    if portal.session.is_authenticated() && portal.session.is_expired() {
        tracing::warn!("Stored access token is expired; run `portal auth refresh`");
    }

    // Execute command
    let result = match cli.command {
        Commands::Auth(args) => commands::auth::execute(args.action, &portal).await,
        Commands::Plans(args) => commands::plans::execute(args.action, &portal).await,
        Commands::Register(args) => commands::register::execute(args, &portal).await,
        Commands::Registrations(args) => {
            commands::registrations::execute(args.action, &portal).await
        }
        Commands::Persons(args) => commands::persons::execute(args.action, &portal).await,
        Commands::Documents(args) => commands::documents::execute(args.action, &portal).await,
        Commands::Locations(args) => commands::locations::execute(args.action, &portal).await,
        Commands::Admin(args) => commands::admin::execute(args.action, &portal).await,
    };

    // Handle errors
    if let Err(e) = result {
        match &e {
            AppError::Unauthorized => {
                eprintln!("Login required: run `portal auth login` and try again.");
            }
            AppError::Forbidden => {
                eprintln!("Access denied: this action requires an administrator account.");
            }
            _ => eprintln!("Error: {}", e.user_message()),
        }
        tracing::debug!("Command failed: {} ({})", e, e.code());
        std::process::exit(1);
    }
}

/// Initialize tracing subscriber
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        "debug".to_string()
    } else {
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string())
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();
}
