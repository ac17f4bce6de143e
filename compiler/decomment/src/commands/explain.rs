//! The `explain` command: display documentation for error codes.

use std::io::Write;

use decomment_diagnostic::{ErrorCode, ErrorDocs};

use crate::error::DriverError;

/// Write the documentation for `code_str` to `out`.
pub fn explain_error(code_str: &str, out: &mut dyn Write) -> Result<(), DriverError> {
    let Ok(code) = code_str.parse::<ErrorCode>() else {
        return Err(DriverError::UnknownErrorCode(code_str.to_string()));
    };

    let written = match ErrorDocs::get(code) {
        Some(doc) => writeln!(out, "{doc}"),
        None => writeln!(out, "{code}: {}", code.summary()),
    };
    written.map_err(|source| DriverError::Write {
        path: "<stdout>".to_string(),
        source,
    })
}
