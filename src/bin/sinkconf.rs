//! Sinkconf CLI Binary
//!
//! Command-line interface for building, validating and submitting sink connector configs.

use clap::Parser;
use sinkconf::cli::{Cli, RunContext};
use sinkconf::logging::{init_logging, LoggingConfig};
use sinkconf::settings::SettingsLoader;
use std::process;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();

    let logging_config = build_logging_config(&cli);

    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("Sinkconf CLI starting");

    let context = match RunContext::new(cli.settings.clone(), cli.admin_url.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            error!("Error loading settings: {}", e);
            eprintln!("{}", sinkconf::cli::map_error(&e));
            process::exit(1);
        }
    };

    match context.execute(&cli.command) {
        Ok(output) => {
            info!("Command completed successfully");
            println!("{}", output);
        }
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("{}", sinkconf::cli::map_error(&e));
            process::exit(1);
        }
    }
}

/// Build logging configuration from CLI args and the settings file.
/// Precedence: CLI flags override settings override defaults.
fn build_logging_config(cli: &Cli) -> LoggingConfig {
    let mut config = SettingsLoader::load(cli.settings.as_deref())
        .ok()
        .map(|s| s.logging)
        .unwrap_or_default();

    if cli.verbose {
        config.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        config.output = output.clone();
    }
    if let Some(ref file) = cli.log_file {
        config.file = Some(file.clone());
    }

    config
}
