//! Tokens of the coordinate-list text format

/// Key of the first header line
pub const ROWS_KEY: &str = "rows";

/// Key of the second header line
pub const COLS_KEY: &str = "cols";

/// Separator between a header key and its value
pub const HEADER_SEPARATOR: char = '=';

/// Opening bracket of an entry line
pub const ENTRY_OPEN: char = '(';

/// Closing bracket of an entry line
pub const ENTRY_CLOSE: char = ')';

/// Separator between the fields of an entry line
pub const FIELD_SEPARATOR: char = ',';
