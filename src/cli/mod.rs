pub mod commands;
pub mod console;
pub mod interval;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "instafeed")]
#[command(about = "Fetch and normalize a photo-sharing media feed", long_about = None)]
pub struct Cli {
    /// Path to the config file (default: ~/.config/instafeed/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the feed endpoint
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// Access token, takes precedence over the environment and config file
    #[arg(long, global = true)]
    pub token: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load the feed once and print it
    Feed {
        /// Print normalized records as JSON
        #[arg(long)]
        json: bool,
    },
    /// Normalize a saved feed response
    Normalize {
        /// Path to a JSON response body
        path: PathBuf,

        /// Print normalized records as JSON
        #[arg(long)]
        json: bool,
    },
    /// Reload the feed periodically
    Watch {
        /// Reload interval (e.g., "30s", "5m", "1h")
        #[arg(short, long, default_value = "5m")]
        interval: String,

        /// Print normalized records as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the config file path and effective settings
    Config,
}
