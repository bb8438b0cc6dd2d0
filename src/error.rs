// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can stop a preview run.
/// Missing columns, short rows and nameless rows are not errors.
#[derive(Error, Debug)]
pub enum MovesError {
    #[error("cannot access '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("cannot render moves as JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("cannot write output: {0}")]
    Output(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MovesError>;

pub(crate) trait IoContext<T> {
    /// Attach the offending path to a raw I/O error.
    fn with_path(self, path: impl Into<PathBuf>) -> Result<T>;
}

impl<T> IoContext<T> for std::io::Result<T> {
    fn with_path(self, path: impl Into<PathBuf>) -> Result<T> {
        self.map_err(|source| MovesError::Io { path: path.into(), source })
    }
}
