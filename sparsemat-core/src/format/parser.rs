//! Text to [`Matrix`] parsing

use core::str::FromStr;

use crate::error::{MatrixError, Result};
use crate::format::constants::{COLS_KEY, HEADER_LINES, ROWS_KEY};
use crate::store::Matrix;
use crate::traits::MatrixElement;
use crate::validation::{parse_entry_line, parse_header_line};

/// Parse a matrix from its text representation
///
/// Line 1 must be `rows=<n>`, line 2 `cols=<n>`; every later non-blank line
/// must be a `(<row>, <col>, <value>)` triple inside the declared shape.
/// Surrounding whitespace (including `\r`) is trimmed from every line.
pub fn parse_matrix<T: MatrixElement>(text: &str) -> Result<Matrix<T>> {
    let mut lines = text.lines().map(str::trim);

    let rows_line = lines.next().ok_or(MatrixError::WrongFormat { line: 1 })?;
    let rows = parse_header_line(rows_line, ROWS_KEY, 1)?;
    let cols_line = lines.next().ok_or(MatrixError::WrongFormat { line: 2 })?;
    let cols = parse_header_line(cols_line, COLS_KEY, 2)?;

    let mut matrix = Matrix::new(rows, cols);
    for (offset, line) in lines.enumerate() {
        if line.is_empty() {
            continue;
        }
        let line_no = HEADER_LINES + offset + 1;
        let (row, col, value) = parse_entry_line(line, line_no)?;
        matrix.set(row, col, value)?;
    }

    Ok(matrix)
}

impl<T: MatrixElement> FromStr for Matrix<T> {
    type Err = MatrixError;

    fn from_str(s: &str) -> Result<Self> {
        parse_matrix(s)
    }
}
