use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Log2HtmlError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to open input file {path:?}: {source}")]
    OpenInput {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to create output file {path:?}: {source}")]
    CreateOutput {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read config file {path:?}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    ConfigParse(#[from] toml::de::Error),
}
