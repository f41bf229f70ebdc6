use crate::error::Log2HtmlError;
use clap::Parser;
use log::LevelFilter;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

pub const DEFAULT_TITLE: &str = "Log";

#[derive(Parser, Debug)]
#[clap(name = "log2html", version, about)]
pub struct Cli {
    /// Log file to convert: `-` reads stdin, `...` reads the first fenced
    /// `log` block of a markdown document on stdin
    pub file: String,

    /// Write the page here instead of stdout
    #[clap(short, long)]
    pub output: Option<PathBuf>,

    /// Path to an optional TOML configuration file
    #[clap(long)]
    pub config: Option<PathBuf>,

    /// Override the page title
    #[clap(long)]
    pub title: Option<String>,

    /// Escape HTML special characters in log text
    #[clap(long)]
    pub escape_html: bool,

    /// Only convert the first fenced `log` block of the input
    #[clap(long)]
    pub markdown: bool,

    /// Increase logging verbosity (-v info, -vv debug)
    #[clap(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub title: String,
    pub escape_html: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            escape_html: false,
        }
    }
}

pub fn load_config(cli: &Cli) -> Result<Config, Log2HtmlError> {
    let mut config = match cli.config {
        Some(ref path) => {
            let config_content =
                fs::read_to_string(path).map_err(|source| Log2HtmlError::ConfigRead {
                    path: path.clone(),
                    source,
                })?;
            toml::from_str(&config_content)?
        }
        None => Config::default(),
    };

    // Apply CLI overrides
    if let Some(ref title) = cli.title {
        config.title = title.clone();
    }

    if cli.escape_html {
        config.escape_html = true;
    }

    Ok(config)
}
