//! [`Matrix`] to text serialization

use alloc::string::String;
use core::fmt::{self, Write};

use crate::format::constants::{COLS_KEY, ROWS_KEY};
use crate::store::Matrix;
use crate::traits::MatrixElement;

/// Write the text representation of `matrix` into `out`
///
/// Entries follow in row-major order, one per line, with no trailing
/// newline after the last line.
pub fn write_matrix<T: MatrixElement, W: Write>(matrix: &Matrix<T>, out: &mut W) -> fmt::Result {
    write!(out, "{ROWS_KEY}={}\n{COLS_KEY}={}", matrix.nrows(), matrix.ncols())?;
    for entry in matrix.sorted_entries() {
        write!(out, "\n({}, {}, {})", entry.row, entry.col, entry.value)?;
    }
    Ok(())
}

/// Conversion of a matrix into its serialized form
pub trait Serialized {
    fn to_text(&self) -> String;
}

impl<T: MatrixElement> Serialized for Matrix<T> {
    fn to_text(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail
        let _ = write_matrix(self, &mut out);
        out
    }
}

impl<T: MatrixElement> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_matrix(self, f)
    }
}
