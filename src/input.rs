//! Input — reads recognized text from a file or stdin.
//!
//! Input is either plain text already in reading order, or (with `--lines`)
//! a JSON array of positioned [`RecognizedLine`]s that is sorted into
//! reading order first.

use hwlabel_core::{assemble_text, RecognizedLine};
use std::io::Read;
use std::path::{Path, PathBuf};

/// Errors raised while obtaining the recognized text.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to read stdin: {0}")]
    Stdin(#[source] std::io::Error),
    #[error("invalid recognized-lines JSON: {0}")]
    Lines(#[from] serde_json::Error),
}

/// Where the recognized text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    /// `None` or `-` means stdin.
    pub fn from_arg(arg: Option<&Path>) -> Self {
        match arg {
            None => InputSource::Stdin,
            Some(p) if p.as_os_str() == "-" => InputSource::Stdin,
            Some(p) => InputSource::File(p.to_path_buf()),
        }
    }

    pub fn read_to_string(&self) -> Result<String, InputError> {
        match self {
            InputSource::Stdin => {
                let mut buf = String::new();
                std::io::stdin()
                    .read_to_string(&mut buf)
                    .map_err(InputError::Stdin)?;
                Ok(buf)
            }
            InputSource::File(path) => std::fs::read_to_string(path).map_err(|source| {
                InputError::Read {
                    path: path.clone(),
                    source,
                }
            }),
        }
    }
}

/// Turn the raw input into recognized text, assembling positioned lines
/// when `lines_json` is set.
pub fn recognized_text(raw: String, lines_json: bool) -> Result<String, InputError> {
    if !lines_json {
        return Ok(raw);
    }
    let lines: Vec<RecognizedLine> = serde_json::from_str(&raw)?;
    tracing::debug!(lines = lines.len(), "assembling recognized lines");
    Ok(assemble_text(&lines))
}
