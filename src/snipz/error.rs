use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SnipzError {
    #[error("Snippet '{0}' not found")]
    NotFound(String),

    #[error("Invalid snippet name: {0}")]
    InvalidName(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, SnipzError>;
