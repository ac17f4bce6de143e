//! Driver-level failures: everything that stops a command before or after
//! the source itself is examined.
//!
//! Problems *in* the source text are not errors here; they are
//! [`Diagnostic`](decomment_diagnostic::Diagnostic)s.

use std::io;

use thiserror::Error;

/// Exit status for usage and I/O failures.
pub const EXIT_USAGE: u8 = 2;

#[derive(Debug, Error)]
pub enum DriverError {
    #[error("cannot find file '{path}'")]
    NotFound { path: String },
    #[error("permission denied reading '{path}'")]
    PermissionDenied { path: String },
    #[error("'{path}' contains invalid UTF-8 data")]
    NotUtf8 { path: String },
    #[error("'{path}' is too large ({len} bytes; sources are limited to {} bytes)", u32::MAX)]
    TooLarge { path: String, len: usize },
    #[error("error reading '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("error writing '{path}': {source}")]
    Write {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("{0}")]
    Usage(String),
    #[error("unknown error code: {0}")]
    UnknownErrorCode(String),
}

impl DriverError {
    /// Classify a read failure on `path`.
    pub fn from_read(path: &str, err: io::Error) -> Self {
        let path = path.to_string();
        match err.kind() {
            io::ErrorKind::NotFound => DriverError::NotFound { path },
            io::ErrorKind::PermissionDenied => DriverError::PermissionDenied { path },
            io::ErrorKind::InvalidData => DriverError::NotUtf8 { path },
            _ => DriverError::Read { path, source: err },
        }
    }

    /// Process exit status for this failure.
    pub fn exit_code(&self) -> u8 {
        EXIT_USAGE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_read_classifies_kinds() {
        let missing = DriverError::from_read("a.c", io::Error::from(io::ErrorKind::NotFound));
        assert!(matches!(missing, DriverError::NotFound { ref path } if path == "a.c"));

        let denied =
            DriverError::from_read("a.c", io::Error::from(io::ErrorKind::PermissionDenied));
        assert!(matches!(denied, DriverError::PermissionDenied { .. }));

        let binary = DriverError::from_read("-", io::Error::from(io::ErrorKind::InvalidData));
        assert!(matches!(binary, DriverError::NotUtf8 { .. }));

        let other = DriverError::from_read("a.c", io::Error::from(io::ErrorKind::Interrupted));
        assert!(matches!(other, DriverError::Read { .. }));
    }

    #[test]
    fn test_messages() {
        let err = DriverError::NotFound {
            path: "missing.cpp".into(),
        };
        assert_eq!(err.to_string(), "cannot find file 'missing.cpp'");
        assert_eq!(
            DriverError::UnknownErrorCode("E9999".into()).to_string(),
            "unknown error code: E9999"
        );
        assert_eq!(err.exit_code(), EXIT_USAGE);
    }

    #[test]
    fn test_too_large_message() {
        let err = DriverError::TooLarge {
            path: "big.c".into(),
            len: 5_000_000_000,
        };
        assert_eq!(
            err.to_string(),
            "'big.c' is too large (5000000000 bytes; sources are limited to 4294967295 bytes)"
        );
    }
}
