use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use log2html::{config, convert};
use simple_logger::SimpleLogger;

fn main() -> Result<()> {
    // Parse command-line arguments
    let cli = config::Cli::parse();

    SimpleLogger::new()
        .with_level(cli.log_level())
        .env()
        .init()
        .context("Failed to initialize logger")?;

    // Load configuration
    let config = config::load_config(&cli).context("Failed to load configuration")?;
    info!("Configuration loaded successfully");

    convert::run(&cli, &config).with_context(|| format!("Failed to convert log: {}", cli.file))?;

    Ok(())
}
