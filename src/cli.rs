//! CLI definitions for SurfaceGate.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use surfacegate_protocols::Surface;

/// SurfaceGate CLI.
#[derive(Parser)]
#[command(name = "surfacegate")]
#[command(about = "Implicit default viewership decisions for PDF surfaces")]
#[command(version)]
pub(crate) struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.toml", global = true)]
    pub config: PathBuf,

    /// State file path (overrides storage.path)
    #[arg(long, env = "SURFACEGATE_STATE", global = true)]
    pub state_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Evaluate implicit default viewership for a surface
    Evaluate {
        /// Surface key (gmail, google-docs, gdrive, onenote)
        #[arg(short, long)]
        surface: Surface,

        /// Run the full page-load flow (take viewership, toast) instead of a bare evaluation
        #[arg(long)]
        page_load: bool,
    },

    /// Show persisted viewership state for a surface
    State {
        #[arg(short, long)]
        surface: Surface,
    },

    /// Remove persisted viewership state for a surface
    Clear {
        #[arg(short, long)]
        surface: Surface,
    },

    /// Resolve the Google Docs convert-to-PDF touch point
    Touchpoint {
        /// Translation key of the surface display name, enables FTE strings
        #[arg(long)]
        surface_name_key: Option<String>,
    },

    /// Report a surface visit for analytics
    Visit {
        #[arg(short, long)]
        surface: Surface,

        /// Page URL
        #[arg(long)]
        url: String,

        /// The page is embedded in a frame
        #[arg(long)]
        framed: bool,
    },

    /// Validate the configuration file
    CheckConfig,
}
