pub mod config;
pub mod convert;
pub mod error;
pub mod line_pattern;
pub mod log_entry;
pub mod output;
pub mod parser;
pub mod render;
pub mod source;

pub use error::Log2HtmlError;
pub use log_entry::LogEntry;
pub use parser::{parse_entries, parse_str, LogEntries};
pub use render::PageRenderer;
