use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures while reading a catalogue from disk or writing one back.
///
/// Parsing itself never fails; these only cover I/O and container formats.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not read {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unsupported file extension: .{0}")]
    UnsupportedExtension(String),

    #[error("invalid JSON")]
    Json(#[from] serde_json::Error),

    #[error("unexpected JSON layout: {0}")]
    JsonShape(String),

    #[error("CSV write failed")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] io::Error),
}
