//! SurfaceGate - implicit default viewership decisions for PDF surfaces
//!
//! Main entry point for the SurfaceGate CLI.

mod cli;
mod commands;
mod wiring;

use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::{info, warn};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use surfacegate_config::{Config, ConfigError, ConfigLoader, LoggingConfig};

use crate::cli::{Cli, Commands};
use crate::wiring::App;

/// Get the .surfacegate directory path.
fn surfacegate_dir() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(".surfacegate"))
        .unwrap_or_else(|| PathBuf::from(".surfacegate"))
}

/// Initialize tracing with console and optional file output.
///
/// Console output goes to stderr so command output on stdout stays parseable.
fn init_tracing(logging: &LoggingConfig) -> Result<(), Box<dyn std::error::Error>> {
    let file_layer = if logging.file_logging {
        let log_dir = logging
            .directory
            .as_deref()
            .map(|dir| PathBuf::from(ConfigLoader::expand_path(dir)))
            .unwrap_or_else(|| surfacegate_dir().join("logs"));
        std::fs::create_dir_all(&log_dir)?;

        let file_appender = RollingFileAppender::builder()
            .rotation(Rotation::DAILY)
            .filename_prefix("surfacegate")
            .filename_suffix("log")
            .max_log_files(14)
            .build(&log_dir)?;
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        // Keep the writer alive for the whole process.
        static GUARD: std::sync::OnceLock<tracing_appender::non_blocking::WorkerGuard> =
            std::sync::OnceLock::new();
        let _ = GUARD.set(guard);

        Some(fmt::layer().with_writer(non_blocking).with_ansi(false))
    } else {
        None
    };

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true),
        )
        .with(file_layer)
        .init();

    Ok(())
}

/// Load the config file, falling back to defaults when it does not exist.
fn load_config(path: &Path) -> Result<(Config, bool), ConfigError> {
    match ConfigLoader::load(path) {
        Ok(config) => Ok((config, true)),
        Err(ConfigError::NotFound(_)) => Ok((Config::default(), false)),
        Err(e) => Err(e),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let (config, found) = load_config(&cli.config)?;
    init_tracing(&config.logging)?;
    if !found {
        warn!("Config file {} not found, using defaults", cli.config.display());
    }

    if let Commands::CheckConfig = cli.command {
        return commands::check_config(&config);
    }

    let app = App::build(&config, cli.state_file)?;
    info!("SurfaceGate v{} ready", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Evaluate { surface, page_load } => {
            commands::evaluate(&app, surface, page_load).await
        }
        Commands::State { surface } => commands::state(&app, surface),
        Commands::Clear { surface } => commands::clear(&app, surface),
        Commands::Touchpoint { surface_name_key } => {
            commands::touchpoint(&app, surface_name_key.as_deref()).await
        }
        Commands::Visit { surface, url, framed } => {
            commands::visit(&app, surface, &url, framed)
        }
        Commands::CheckConfig => commands::check_config(&config),
    }
}
