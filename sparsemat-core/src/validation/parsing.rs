//! Line-level parsing for the text matrix format
//!
//! ```text
//! rows=<integer>
//! cols=<integer>
//! (<row>, <col>, <value>)
//! ```
//!
//! Every failure maps to [`MatrixError::WrongFormat`] carrying the 1-based
//! line number. Callers trim lines before handing them in.

use core::str::FromStr;

use crate::error::{MatrixError, Result};
use crate::format::constants::{
    ENTRY_CLOSE, ENTRY_FIELD_COUNT, ENTRY_OPEN, FIELD_SEPARATOR, KEY_VALUE_SEPARATOR,
};
use crate::traits::MatrixElement;

/// Parse a `key=<integer>` header line and return the count
///
/// Stricter than a plain split on `=`: the key must match and exactly one
/// `=` may appear, so `rows=3=4` is rejected.
pub fn parse_header_line(line: &str, key: &str, line_no: usize) -> Result<usize> {
    let wrong_format = MatrixError::WrongFormat { line: line_no };

    let (name, value) = line.split_once(KEY_VALUE_SEPARATOR).ok_or(wrong_format)?;
    if name.trim() != key {
        return Err(wrong_format);
    }
    parse_field(value, line_no)
}

/// Parse a `(<row>, <col>, <value>)` entry line
pub fn parse_entry_line<T: MatrixElement>(
    line: &str,
    line_no: usize,
) -> Result<(usize, usize, T)> {
    let inner = line
        .strip_prefix(ENTRY_OPEN)
        .and_then(|rest| rest.strip_suffix(ENTRY_CLOSE))
        .ok_or(MatrixError::WrongFormat { line: line_no })?;

    let mut fields = inner.split(FIELD_SEPARATOR);
    let mut parts: [&str; ENTRY_FIELD_COUNT] = [""; ENTRY_FIELD_COUNT];
    for slot in parts.iter_mut() {
        *slot = fields.next().ok_or(MatrixError::WrongFormat { line: line_no })?;
    }
    if fields.next().is_some() {
        return Err(MatrixError::WrongFormat { line: line_no });
    }

    let row = parse_field(parts[0], line_no)?;
    let col = parse_field(parts[1], line_no)?;
    let value = parse_field(parts[2], line_no)?;
    Ok((row, col, value))
}

/// Parse one whitespace-padded numeric field
fn parse_field<N: FromStr>(field: &str, line_no: usize) -> Result<N> {
    let field = field.trim();
    if field.is_empty() {
        return Err(MatrixError::WrongFormat { line: line_no });
    }
    field
        .parse()
        .map_err(|_| MatrixError::WrongFormat { line: line_no })
}
