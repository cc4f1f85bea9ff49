use std::path::Path;
use std::time::Duration;

use chrono::Utc;
use tokio::time::{interval, MissedTickBehavior};

use crate::app::{AppContext, FeedError, Result};
use crate::cli::console;
use crate::cli::interval::{format_interval, parse_interval};
use crate::config::Config;
use crate::domain::FeedEnvelope;
use crate::loader::LoadOutcome;

/// Load the feed once. Returns `false` when the load failed; the error has
/// already been printed by the console error sink.
pub async fn show_feed(ctx: &AppContext, json: bool) -> Result<bool> {
    let loader = ctx.loader(console::sinks(json));

    match loader.load().await {
        LoadOutcome::Succeeded { .. } => Ok(true),
        LoadOutcome::Failed { .. } => Ok(false),
        LoadOutcome::Unresolved { .. } => {
            eprintln!("Feed request finished without data");
            Ok(true)
        }
        LoadOutcome::Superseded { .. } => Ok(true),
    }
}

/// Normalize a response body saved on disk.
pub fn normalize_file(ctx: &AppContext, path: &Path, json: bool) -> Result<()> {
    let content = std::fs::read_to_string(path)?;
    let envelope: FeedEnvelope = serde_json::from_str(&content)?;

    if let Some(error) = envelope.error() {
        return Err(FeedError::Api(error));
    }

    let items = ctx.normalizer.normalize_page(&envelope, Utc::now());
    console::print_items(&items, json);
    Ok(())
}

/// Reload on a fixed interval until Ctrl-C. Each tick starts a new load; a
/// load still in flight from an earlier tick is superseded.
pub async fn watch(ctx: &AppContext, interval_str: &str, json: bool) -> Result<()> {
    let secs = parse_interval(interval_str).map_err(FeedError::Config)?;
    let loader = ctx.loader(console::sinks(json));

    eprintln!("Reloading every {} (Ctrl-C to stop)", format_interval(secs));

    let mut ticker = interval(Duration::from_secs(secs));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                drop(loader.load_feed());
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Stopping watch after generation {}", loader.generation());
                break;
            }
        }
    }

    Ok(())
}

pub fn show_config(config: &Config, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => println!("Config file: {}", path.display()),
        None => match Config::default_config_path() {
            Ok(path) => println!("Config file: {}", path.display()),
            Err(e) => println!("Config file: unavailable ({})", e),
        },
    }

    println!("Endpoint:    {}", config.api.endpoint);
    println!("Timeout:     {}s", config.api.timeout_secs);
    println!("User agent:  {}", config.api.user_agent);
    println!(
        "Time zone:   {}",
        if config.display.utc { "UTC" } else { "local" }
    );
    println!(
        "Token:       {}",
        if config.auth.access_token.is_some() {
            "set in config"
        } else {
            "not set in config"
        }
    );

    Ok(())
}
