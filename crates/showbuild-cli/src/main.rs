//! showbuild CLI entry point.

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use showbuild_cli::cli::Cli;
use showbuild_cli::commands;
use showbuild_core::config::parse_api_url;
use showbuild_core::Config;

#[tokio::main]
async fn main() {
    // Load .env.local if it exists (SHOWBUILD_API_URL etc.)
    let _ = dotenvy::from_filename(".env.local");

    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level().to_string()));
    fmt().with_env_filter(filter).with_target(false).init();

    let result = match config(&cli) {
        Ok(config) => commands::execute(cli.command, &config).await,
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Environment configuration with command-line overrides applied.
fn config(cli: &Cli) -> commands::Result<Config> {
    let mut config = Config::from_env()?;
    if let Some(dir) = &cli.state_dir {
        config = config.with_state_dir(dir);
    }
    if let Some(url) = &cli.api_url {
        config.api_url = parse_api_url(url)?;
    }
    Ok(config)
}
