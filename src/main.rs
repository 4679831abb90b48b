use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use remote_settings::config::Config;

#[derive(Parser)]
#[command(name = "remote-settings")]
#[command(about = "Edit a repository remote's URL or stage it for removal")]
#[command(version)]
struct Cli {
    /// Path to the config file (defaults to ~/.remote-settings/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Remote name, overrides the config
    #[arg(short, long)]
    name: Option<String>,

    /// Remote URL, overrides the config
    #[arg(short, long)]
    url: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    let config_path = cli.config.unwrap_or_else(Config::global_config_path);
    let mut config = Config::load_or_default(&config_path)?;
    config.apply_overrides(cli.name, cli.url);
    config.validate()?;

    match remote_settings::gui::run_gui(config)? {
        Some(change) => info!("{}", change.describe()),
        None => info!("No remote changes"),
    }

    Ok(())
}
