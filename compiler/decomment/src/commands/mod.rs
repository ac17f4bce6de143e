//! Command handlers for the `decomment` CLI.
//!
//! Each submodule implements one command. Shared helpers for reading input
//! and reporting diagnostics live here in the module root.
//!
//! Handlers write to the streams they are given rather than to the
//! process's stdout/stderr, and return an [`Outcome`] instead of exiting.

use std::io::{self, Read, Write};

use decomment_diagnostic::emitter::{DiagnosticEmitter, JsonEmitter, TerminalEmitter};
use decomment_diagnostic::{count_by_severity, Diagnostic};

use crate::cli::{OutputFormat, ReportOptions};
use crate::error::DriverError;

mod check;
mod explain;
mod strip;

pub use check::check_files;
pub use explain::explain_error;
pub use strip::strip_file;

/// Whether a command found problems in its input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// No error diagnostics.
    Clean,
    /// At least one error diagnostic.
    Errors,
}

impl Outcome {
    pub fn from_diagnostics(diagnostics: &[Diagnostic]) -> Self {
        if diagnostics.iter().any(Diagnostic::is_error) {
            Outcome::Errors
        } else {
            Outcome::Clean
        }
    }

    /// Process exit status: 0 when clean, 1 when errors were reported.
    pub fn exit_code(self) -> u8 {
        match self {
            Outcome::Clean => 0,
            Outcome::Errors => 1,
        }
    }
}

/// Name used for `path` in messages.
pub(crate) fn display_name(path: &str) -> &str {
    if path == "-" {
        "<stdin>"
    } else {
        path
    }
}

/// Read a source file as UTF-8, or all of stdin for `-`.
///
/// Sources must fit in `u32` offsets, which is all the scanner addresses.
pub(crate) fn read_source(path: &str) -> Result<String, DriverError> {
    let text = if path == "-" {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .map_err(|e| DriverError::from_read(display_name(path), e))?;
        text
    } else {
        let bytes = std::fs::read(path).map_err(|e| DriverError::from_read(path, e))?;
        String::from_utf8(bytes).map_err(|_| DriverError::NotUtf8 {
            path: path.to_string(),
        })?
    };
    ensure_addressable(display_name(path), text.len())?;
    Ok(text)
}

/// Reject sources longer than `u32::MAX` bytes.
pub(crate) fn ensure_addressable(name: &str, len: usize) -> Result<(), DriverError> {
    if u32::try_from(len).is_ok() {
        Ok(())
    } else {
        Err(DriverError::TooLarge {
            path: name.to_string(),
            len,
        })
    }
}

/// Render diagnostics for one file in the human-readable format.
pub(crate) fn emit_terminal(
    err: &mut dyn Write,
    report: ReportOptions,
    name: &str,
    text: &str,
    diagnostics: &[Diagnostic],
) {
    if diagnostics.is_empty() {
        return;
    }
    // Color detection is resolved by the caller; `Auto` here means off.
    let mut emitter =
        TerminalEmitter::with_color_mode(err, report.color, false).with_source(name, text);
    emitter.emit_all(diagnostics);
    emitter.flush();
}

/// Render diagnostics for a batch of files in the requested format.
pub(crate) fn report_files(
    err: &mut dyn Write,
    report: ReportOptions,
    files: &[(&str, &str, &[Diagnostic])],
) {
    match report.format {
        OutputFormat::Terminal => {
            let (mut errors, mut warnings) = (0, 0);
            for &(name, text, diagnostics) in files {
                emit_terminal(&mut *err, report, name, text, diagnostics);
                let (e, w) = count_by_severity(diagnostics);
                errors += e;
                warnings += w;
            }
            let mut emitter = TerminalEmitter::with_color_mode(err, report.color, false);
            emitter.emit_summary(errors, warnings);
            emitter.flush();
        }
        OutputFormat::Json => {
            let mut emitter = JsonEmitter::new(err);
            emitter.begin();
            for &(name, text, diagnostics) in files {
                emitter.set_source(name, text);
                emitter.emit_all(diagnostics);
            }
            emitter.end();
            emitter.flush();
        }
    }
}
