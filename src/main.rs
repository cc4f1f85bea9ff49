use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use instafeed::app::AppContext;
use instafeed::cli::{commands, Cli, Commands};
use instafeed::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so `--json` output stays clean
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(endpoint) = cli.endpoint {
        config.api.endpoint = endpoint;
    }

    if let Commands::Config = cli.command {
        commands::show_config(&config, cli.config.as_deref())?;
        return Ok(());
    }

    let mut ctx = AppContext::new(config)?;
    if let Some(token) = cli.token {
        ctx = ctx.with_token(token);
    }

    match cli.command {
        Commands::Feed { json } => {
            if !commands::show_feed(&ctx, json).await? {
                std::process::exit(1);
            }
        }
        Commands::Normalize { path, json } => {
            commands::normalize_file(&ctx, &path, json)?;
        }
        Commands::Watch { interval, json } => {
            commands::watch(&ctx, &interval, json).await?;
        }
        Commands::Config => {}
    }

    Ok(())
}
