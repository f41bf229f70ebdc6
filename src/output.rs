use crate::error::Log2HtmlError;
use log::info;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

/// Where the generated page goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

impl OutputTarget {
    pub fn from_option(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => OutputTarget::File(path),
            None => OutputTarget::Stdout,
        }
    }

    pub fn write_page(&self, page: &str) -> Result<(), Log2HtmlError> {
        match self {
            OutputTarget::Stdout => write_to(io::stdout().lock(), page, true)?,
            OutputTarget::File(path) => {
                let file = File::create(path).map_err(|source| Log2HtmlError::CreateOutput {
                    path: path.clone(),
                    source,
                })?;
                write_to(file, page, false)?;
                info!("Wrote {} bytes to {:?}", page.len(), path);
            }
        }
        Ok(())
    }
}

fn write_to<W: Write>(mut out: W, page: &str, trailing_newline: bool) -> io::Result<()> {
    out.write_all(page.as_bytes())?;
    if trailing_newline {
        out.write_all(b"\n")?;
    }
    out.flush()
}
