//! File I/O for text matrix files
//!
//! Reads and writes are whole-file: the entire file is loaded and parsed
//! before a matrix is returned, and the serialized form is written in one
//! call.

use std::{fs, path::Path};

use sparsemat_core::{parse_matrix, Matrix, MatrixElement, Serialized};
use tracing::debug;

use crate::error::{Error, Result};

/// Load a matrix from a text file
///
/// Fails with [`Error::Io`] if the file cannot be read and with
/// [`Error::Matrix`] if its contents are malformed. No partial matrix is
/// ever returned.
pub fn load_matrix<T: MatrixElement, P: AsRef<Path>>(path: P) -> Result<Matrix<T>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let matrix = parse_matrix(&text)?;

    debug!(
        path = %path.display(),
        shape = %matrix.shape(),
        nnz = matrix.nnz(),
        "loaded matrix"
    );
    Ok(matrix)
}

/// Write a matrix to a text file, replacing any existing file
pub fn save_matrix<T: MatrixElement, P: AsRef<Path>>(matrix: &Matrix<T>, path: P) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, matrix.to_text()).map_err(|e| Error::io(path, e))?;

    debug!(
        path = %path.display(),
        shape = %matrix.shape(),
        nnz = matrix.nnz(),
        "saved matrix"
    );
    Ok(())
}
