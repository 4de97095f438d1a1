/// Error type for the core crate.
///
/// Only failures that must stop a run live here. Per-file stat failures
/// during a scan are logged and skipped by the scanner instead.
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("could not determine the home directory to expand {0:?}")]
    HomeDirUnavailable(String),

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid histogram bins: {0}")]
    InvalidBins(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    /// Attach the path an I/O error happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
