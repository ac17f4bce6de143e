//! The `check` command: validate files without writing anything.
//!
//! Files are read and checked in parallel; diagnostics are reported in the
//! order the files were given.

use std::io::Write;

use decomment_core::SourceBuffer;
use decomment_diagnostic::Diagnostic;
use rayon::prelude::*;

use crate::checks::check_source;
use crate::cli::{CheckOptions, OutputFormat};
use crate::error::DriverError;
use crate::normalize::normalize_newlines;

use super::{display_name, read_source, report_files, Outcome};

struct Checked<'p> {
    name: &'p str,
    text: String,
    diagnostics: Vec<Diagnostic>,
}

/// Check every input.
///
/// If any file cannot be read, the error for the earliest such file in
/// argument order is returned and nothing is reported.
///
/// In terminal mode, each file without errors gets an `OK:` line on `out`.
pub fn check_files(
    options: &CheckOptions,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<Outcome, DriverError> {
    let results: Vec<Result<Checked<'_>, DriverError>> = options
        .inputs
        .par_iter()
        .map(|path| {
            let text = normalize_newlines(&read_source(path)?).into_owned();
            let diagnostics = check_source(&SourceBuffer::new(&text));
            Ok(Checked {
                name: display_name(path),
                text,
                diagnostics,
            })
        })
        .collect();
    let checked = results.into_iter().collect::<Result<Vec<_>, _>>()?;
    tracing::debug!(files = checked.len(), "checked");

    let files: Vec<(&str, &str, &[Diagnostic])> = checked
        .iter()
        .map(|c| (c.name, c.text.as_str(), c.diagnostics.as_slice()))
        .collect();
    report_files(&mut *err, options.report, &files);

    let mut outcome = Outcome::Clean;
    for file in &checked {
        if Outcome::from_diagnostics(&file.diagnostics) == Outcome::Errors {
            outcome = Outcome::Errors;
        } else if options.report.format == OutputFormat::Terminal {
            let _ = writeln!(out, "OK: {}", file.name);
        }
    }
    Ok(outcome)
}
