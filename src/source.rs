use crate::error::Log2HtmlError;
use log::info;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

/// Argument value that reads the log from standard input.
pub const STDIN_ARG: &str = "-";

/// Argument value that extracts a fenced `log` block from standard input.
pub const MARKDOWN_ARG: &str = "...";

const FENCE_LOG_OPEN: &str = "```log";
const FENCE: &str = "```";

/// Where the raw log lines come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    /// Standard input, restricted to the first fenced `log` block
    Markdown,
    File(PathBuf),
}

impl InputSource {
    pub fn from_arg(arg: &str) -> Self {
        match arg {
            STDIN_ARG => InputSource::Stdin,
            MARKDOWN_ARG => InputSource::Markdown,
            path => InputSource::File(PathBuf::from(path)),
        }
    }

    pub fn is_markdown(&self) -> bool {
        matches!(self, InputSource::Markdown)
    }

    pub fn open(&self) -> Result<Box<dyn BufRead>, Log2HtmlError> {
        match self {
            InputSource::Stdin | InputSource::Markdown => {
                info!("Reading log from standard input");
                Ok(Box::new(io::stdin().lock()))
            }
            InputSource::File(path) => {
                info!("Reading log from {:?}", path);
                let file = File::open(path).map_err(|source| Log2HtmlError::OpenInput {
                    path: path.clone(),
                    source,
                })?;
                Ok(Box::new(BufReader::new(file)))
            }
        }
    }
}

/// Physical lines of a reader, each with its line terminator intact.
pub struct ReadLines<R> {
    reader: R,
}

pub fn read_lines<R: BufRead>(reader: R) -> ReadLines<R> {
    ReadLines { reader }
}

impl<R: BufRead> Iterator for ReadLines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(Ok(line)),
            Err(e) => Some(Err(e)),
        }
    }
}

/// Yields the lines between a line starting with ```` ```log ```` and the
/// next line starting with ```` ``` ````. Only the first such block is used.
pub struct MarkdownLogBlock<I> {
    lines: I,
    inside: bool,
    closed: bool,
}

impl<I> MarkdownLogBlock<I> {
    pub fn new(lines: I) -> Self {
        Self {
            lines,
            inside: false,
            closed: false,
        }
    }
}

impl<I> Iterator for MarkdownLogBlock<I>
where
    I: Iterator<Item = io::Result<String>>,
{
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.closed {
            return None;
        }

        for line in self.lines.by_ref() {
            let line = match line {
                Ok(line) => line,
                Err(e) => return Some(Err(e)),
            };

            if line.starts_with(FENCE_LOG_OPEN) {
                self.inside = true;
            } else if line.starts_with(FENCE) {
                self.closed = true;
                return None;
            } else if self.inside {
                return Some(Ok(line));
            }
        }

        self.closed = true;
        None
    }
}
