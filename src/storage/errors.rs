use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Unable to open dataset at [{}]: {source}", path.display())]
    Io {
        path: PathBuf,
        source: io::Error
    },
    #[error("Dataset header could not be read: {0}")]
    Header(#[source] csv::Error),
    #[error("Dataset is missing required column [{column}]")]
    MissingColumn {
        column: &'static str
    },
    #[error("Dataset row at line [{line}] is invalid: {source}")]
    InvalidRow {
        line: u64,
        source: csv::Error
    }
}
