//! Error codes for all source diagnostics.
//!
//! Each error code is a unique identifier (e.g., `E0003`). Used for
//! `--explain` lookups and in machine-readable output.

use std::fmt;

/// Error codes for all source diagnostics.
///
/// Format: E#### where the first digit indicates the phase:
/// - E0xxx: Source validation (encoding, comment and literal balance)
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    /// Forbidden control character in source
    E0001,
    /// Byte-order mark at start of file
    E0002,
    /// Unterminated block comment
    E0003,
    /// Block comment close without a matching open
    E0004,
    /// Unterminated string literal
    E0005,
    /// Unterminated character literal
    E0006,
}

impl ErrorCode {
    /// Every error code, in numeric order.
    pub const ALL: &'static [ErrorCode] = &[
        ErrorCode::E0001,
        ErrorCode::E0002,
        ErrorCode::E0003,
        ErrorCode::E0004,
        ErrorCode::E0005,
        ErrorCode::E0006,
    ];

    /// Get the string representation of this error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E0004 => "E0004",
            ErrorCode::E0005 => "E0005",
            ErrorCode::E0006 => "E0006",
        }
    }

    /// One-line summary, as listed in the enum docs.
    pub fn summary(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "forbidden control character",
            ErrorCode::E0002 => "byte-order mark at start of file",
            ErrorCode::E0003 => "unterminated block comment",
            ErrorCode::E0004 => "unmatched block comment close",
            ErrorCode::E0005 => "unterminated string literal",
            ErrorCode::E0006 => "unterminated character literal",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse an error code string like `"E0003"`. Case-insensitive.
impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper)
            .copied()
            .ok_or(())
    }
}
