use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors that can occur while writing a report.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to open {path} for writing")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write csv")]
    Csv(#[from] csv::Error),

    #[error("failed to flush output")]
    Io(#[from] io::Error),
}
