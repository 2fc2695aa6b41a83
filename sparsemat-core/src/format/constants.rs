//! Text format tokens

/// Header key for the row count (line 1)
pub const ROWS_KEY: &str = "rows";

/// Header key for the column count (line 2)
pub const COLS_KEY: &str = "cols";

/// Separates a header key from its value
pub const KEY_VALUE_SEPARATOR: char = '=';

/// Opening bracket of an entry line
pub const ENTRY_OPEN: char = '(';

/// Closing bracket of an entry line
pub const ENTRY_CLOSE: char = ')';

/// Separates the fields of an entry line
pub const FIELD_SEPARATOR: char = ',';

/// Fields per entry: row, column, value
pub const ENTRY_FIELD_COUNT: usize = 3;

/// Number of header lines preceding the entries
pub const HEADER_LINES: usize = 2;
