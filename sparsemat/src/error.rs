//! Error type for the I/O and shell layers

use std::path::PathBuf;

use sparsemat_core::MatrixError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Matrix(#[from] MatrixError),
    #[error("{} is not a directory or does not exist", .0.display())]
    NotADirectory(PathBuf),
    #[error("console I/O error: {0}")]
    Console(#[source] std::io::Error),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
