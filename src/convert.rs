use crate::config::{Cli, Config};
use crate::error::Log2HtmlError;
use crate::log_entry::LogEntry;
use crate::output::OutputTarget;
use crate::parser::parse_entries;
use crate::render::PageRenderer;
use crate::source::{read_lines, InputSource, MarkdownLogBlock};
use log::{info, warn};
use std::io;

/// Parses `lines`, renders the entries and writes the page to `output`.
///
/// Returns the number of entries written. When no entry is found a warning
/// is logged and nothing is written. A read error aborts before any output.
pub fn generate_log_page<I>(
    lines: I,
    renderer: &PageRenderer,
    output: &OutputTarget,
) -> Result<usize, Log2HtmlError>
where
    I: IntoIterator<Item = io::Result<String>>,
{
    let mut read_error = None;
    let lines = lines.into_iter().map_while(|line| match line {
        Ok(line) => Some(line),
        Err(e) => {
            read_error = Some(e);
            None
        }
    });
    let entries: Vec<LogEntry> = parse_entries(lines).collect();

    if let Some(e) = read_error {
        return Err(e.into());
    }

    let Some(page) = renderer.render_page(&entries) else {
        warn!("No log entries found, not generating output");
        return Ok(0);
    };

    output.write_page(&page)?;
    info!("Rendered {} log entries", entries.len());
    Ok(entries.len())
}

pub fn run(cli: &Cli, config: &Config) -> Result<usize, Log2HtmlError> {
    let source = InputSource::from_arg(&cli.file);
    let output = OutputTarget::from_option(cli.output.clone());
    let renderer = PageRenderer::from_config(config);

    let lines = read_lines(source.open()?);
    if cli.markdown || source.is_markdown() {
        generate_log_page(MarkdownLogBlock::new(lines), &renderer, &output)
    } else {
        generate_log_page(lines, &renderer, &output)
    }
}
