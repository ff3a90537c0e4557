use chrono::Utc;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use veille::app::AppContext;
use veille::cli::{commands, Cli, Commands};
use veille::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    // One timestamp for the whole run; the window filter measures from here.
    let now = Utc::now();

    match cli.command {
        Commands::Run { config } => {
            let config = Config::load(&config)?;
            let ctx = AppContext::new(&config);
            commands::run(&ctx, &config, now).await?;
        }
        Commands::Preview { config } => {
            let config = Config::load(&config)?;
            let ctx = AppContext::new(&config);
            commands::preview(&ctx, &config, now).await?;
        }
    }

    Ok(())
}
