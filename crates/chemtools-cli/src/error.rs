use chemtools::conceptual::ConceptualError;
use chemtools::core::io::npz::ArchiveError;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Archive(#[from] ArchiveError),

    #[error(transparent)]
    Conceptual(#[from] ConceptualError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse file '{path}': {source}", path = path.display())]
    FileParsing {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid argument: {0}")]
    Argument(String),

    #[error("{invalid} of {total} archive(s) failed validation")]
    Invalid { invalid: usize, total: usize },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
