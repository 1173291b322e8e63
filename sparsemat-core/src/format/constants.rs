//! Constants for the textual matrix format

/// Key of the first header line
pub const ROWS_KEY: &str = "rows";

/// Key of the second header line
pub const COLS_KEY: &str = "cols";

/// Separator between a header key and its value
pub const HEADER_SEPARATOR: char = '=';

/// Opening delimiter of an element line
pub const ENTRY_OPEN: char = '(';

/// Closing delimiter of an element line
pub const ENTRY_CLOSE: char = ')';

/// Separator between element fields
pub const FIELD_SEPARATOR: char = ',';

/// Number of fields in an element line: row, col, value
pub const ENTRY_FIELDS: usize = 3;
