/// Error codes with category prefix
///
/// Categories:
/// - VAL: Input validation errors
/// - CFG: Configuration errors
/// - INT: Unexpected internal errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // Validation errors (VAL001-VAL099)
    /// Instance has no type
    Val001,
    /// Malformed JSON input
    Val002,
    /// Counter overflow
    Val003,
    /// Some instances in a batch failed
    Val004,

    // Config errors (CFG001-CFG099)
    /// Invalid configuration value
    Cfg001,

    // Internal errors (INT001-INT099)
    /// Unexpected internal error
    Int001,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "VAL001")
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::Val001 => "VAL001",
            ErrorCode::Val002 => "VAL002",
            ErrorCode::Val003 => "VAL003",
            ErrorCode::Val004 => "VAL004",
            ErrorCode::Cfg001 => "CFG001",
            ErrorCode::Int001 => "INT001",
        }
    }

    /// Returns the general cause description
    pub fn cause(&self) -> &'static str {
        match self {
            ErrorCode::Val001 => "The instance does not carry a \"type\" property",
            ErrorCode::Val002 => "The input looks like JSON but could not be parsed",
            ErrorCode::Val003 => "The counter reached its maximum value",
            ErrorCode::Val004 => "One or more instances could not be labelled",
            ErrorCode::Cfg001 => "An environment variable has an unsupported value",
            ErrorCode::Int001 => "An unexpected internal error occurred",
        }
    }

    /// Returns remediation steps
    pub fn remediation(&self) -> &'static str {
        match self {
            ErrorCode::Val001 => "1. Pass an object such as '{\"type\":\"top\"}'\n2. Check that the key is spelled \"type\"\n3. Quote the argument so the shell keeps the braces",
            ErrorCode::Val002 => "1. Check the JSON syntax\n2. Quote object keys and string values\n3. Quote the whole argument for the shell",
            ErrorCode::Val003 => "1. Use a smaller start value\n2. Reduce the number of increments",
            ErrorCode::Val004 => "1. Check the rows marked as failed\n2. Re-run with --verbose for details",
            ErrorCode::Cfg001 => "1. Check TIERLABEL_VERBOSE and TIERLABEL_FORMAT\n2. Unset the variable to use the default",
            ErrorCode::Int001 => "1. Try the operation again\n2. Report the issue with the --verbose output",
        }
    }
}
