/// Error code registry for racedb
///
/// Error codes are organized by category:
/// - 1000-1999: Configuration errors
/// - 3000-3999: I/O errors
/// - 4000-4999: Document parse errors
/// - 5000-5999: Record errors
/// - 7000-7999: Validation errors
#[allow(dead_code)]
pub struct ErrorCode;

impl ErrorCode {
    // Configuration errors (1000-1999)
    pub const CONFIG_GENERIC: u16 = 1000;
    pub const CONFIG_NOT_FOUND: u16 = 1001;
    pub const CONFIG_INVALID_TOML: u16 = 1002;
    pub const CONFIG_INVALID_VALUE: u16 = 1005;

    // I/O errors (3000-3999)
    pub const IO_GENERIC: u16 = 3000;
    pub const IO_READ_FAILED: u16 = 3001;
    pub const IO_WRITE_FAILED: u16 = 3002;

    // Document parse errors (4000-4999)
    pub const PARSE_GENERIC: u16 = 4000;
    pub const PARSE_INVALID_JSON: u16 = 4001;
    pub const PARSE_MISSING_KEY: u16 = 4002;
    pub const PARSE_NOT_AN_ARRAY: u16 = 4003;

    // Record errors (5000-5999)
    pub const RECORD_GENERIC: u16 = 5000;
    pub const RECORD_UNDECODABLE: u16 = 5001;

    // Validation errors (7000-7999)
    pub const VALIDATION_GENERIC: u16 = 7000;
    pub const VALIDATION_INVALID_BOUNDARIES: u16 = 7001;
    pub const VALIDATION_FILE_NOT_FOUND: u16 = 7002;
    pub const VALIDATION_INVALID_INPUT: u16 = 7003;
}

/// Get a human-readable description for an error code
pub fn describe_error_code(code: u16) -> &'static str {
    match code {
        1000 => "Generic configuration error",
        1001 => "Configuration file not found",
        1002 => "Invalid TOML syntax in configuration",
        1005 => "Invalid value in configuration",

        3000 => "Generic I/O error",
        3001 => "Failed to read file",
        3002 => "Failed to write file",

        4000 => "Generic document error",
        4001 => "Invalid JSON syntax",
        4002 => "Top-level key missing from document",
        4003 => "Top-level value is not an array",

        5000 => "Generic record error",
        5001 => "Record is missing a field or has a value of the wrong type",

        7000 => "Generic validation error",
        7001 => "Range boundaries are invalid",
        7002 => "Input file not found",
        7003 => "Invalid input",

        _ => "Unknown error code",
    }
}
