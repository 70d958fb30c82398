//! Operator entry point for the AVN club site content.
//!
//! `avn-site` drives the content store and renderer from the command line:
//! it seeds the default events and articles, appends records from JSON
//! files, prints rendered fragments for the site's containers, and reads or
//! saves the color theme.
//!
//! ```text
//! avn-site.yaml --> SiteConfig --> ContentStore (file | memory) --> Renderer --> stdout
//! ```
//!
//! Logs go to stderr so rendered markup on stdout can be redirected as is.

mod cli;
mod config;
mod error;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::config::{LoggingConfig, SiteConfig};

/// Application entry point.
///
/// Parses arguments, loads configuration, initializes logging, then runs
/// the requested command.
///
/// # Errors
///
/// Returns an error if configuration cannot be loaded or the command fails.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = SiteConfig::load(cli.config.as_deref())?;
    init_logging(&config.logging);

    info!(
        config = ?cli.config,
        backend = ?config.storage.backend,
        store_path = %config.storage.path.display(),
        "configuration loaded"
    );

    let mut stdout = std::io::stdout().lock();
    cli::run(cli.command, &config, &mut stdout)?;
    Ok(())
}

/// Initialize structured logging.
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_logging(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);
    if logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
}
