use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use rsr::app::AppContext;
use rsr::cli::{commands, Cli, Commands};
use rsr::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?.apply_env()?,
        None => Config::load()?,
    };
    if let Some(feeds) = cli.feeds {
        config.feeds_file = feeds;
    }
    if let Some(max_entries) = cli.max_entries {
        config.max_entries = max_entries;
    }

    let ctx = AppContext::new(config)?;

    match cli.command {
        Commands::Show { json } => {
            commands::show_timeline(&ctx, json).await?;
        }
        Commands::Sources => {
            commands::list_sources(&ctx)?;
        }
    }

    Ok(())
}
