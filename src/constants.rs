//! Application constants for the waste record reader
//!
//! Header literals, file conventions, field positions and process exit codes
//! shared by the reader and the CLI.

// =============================================================================
// File Conventions
// =============================================================================

/// Default field delimiter for both record files
pub const DEFAULT_DELIMITER: &str = ";";

/// Delimiter the container reader splits on after sanitizing
pub const CONTAINER_SPLIT_DELIMITER: &str = ";";

/// File name suffix required for waste record files
pub const EXPECTED_EXTENSION: &str = ".csv";

/// Placeholder inserted for empty fields by the sanitizer
pub const MISSING_FIELD_PLACEHOLDER: &str = "N/A";

/// UTF-8 byte order mark, stripped from the start of a file
pub const UTF8_BOM: char = '\u{feff}';

// =============================================================================
// Waste Record Layout
// =============================================================================

/// Expected waste file header, in column order
pub const WASTE_HEADER: &[&str] = &[
    "Año",
    "Mes",
    "Lote",
    "Residuo",
    "Distrito",
    "Nombre Distrito",
    "Toneladas",
];

/// Positional field indexes within a waste record row
pub mod waste_fields {
    pub const YEAR: usize = 0;
    pub const MONTH: usize = 1;
    pub const BATCH: usize = 2;
    pub const WASTE_TYPE: usize = 3;
    pub const DISTRICT_ID: usize = 4;
    pub const DISTRICT_NAME: usize = 5;
    pub const TONNAGE: usize = 6;

    /// Minimum number of fields a waste row must provide
    pub const COUNT: usize = 7;
}

// =============================================================================
// Container Record Layout
// =============================================================================

/// Positional field indexes within a container record row
///
/// Fields 11 to 14 exist in the source files but are not carried into
/// [`ContainerRecord`](crate::models::ContainerRecord).
pub mod container_fields {
    pub const SITE_CODE: usize = 0;
    pub const CONTAINER_TYPE: usize = 1;
    pub const MODEL: usize = 2;
    pub const MODEL_DESCRIPTION: usize = 3;
    pub const QUANTITY: usize = 4;
    pub const BATCH: usize = 5;
    pub const DISTRICT: usize = 6;
    pub const NEIGHBORHOOD: usize = 7;
    pub const STREET_TYPE: usize = 8;
    pub const STREET_NAME: usize = 9;
    pub const STREET_NUMBER: usize = 10;
    pub const ADDRESS: usize = 15;

    /// Minimum number of fields a container row must provide
    pub const COUNT: usize = 16;
}

// =============================================================================
// Process Exit Codes
// =============================================================================

/// Exit codes reported by the CLI for each precondition failure
pub mod exit_codes {
    /// File name does not end in the expected extension
    pub const INVALID_EXTENSION: i32 = 1704;

    /// File exists but cannot be read
    pub const UNREADABLE: i32 = 1705;

    /// File does not exist
    pub const FILE_NOT_FOUND: i32 = 1706;

    /// File has no header line
    pub const MISSING_HEADER: i32 = 1707;

    /// Header columns do not match the expected names, order or count
    pub const HEADER_MISMATCH: i32 = 1708;

    /// File has a header but no body rows
    pub const EMPTY_BODY: i32 = 1709;

    /// Any other failure
    pub const GENERAL_FAILURE: i32 = 1;
}
