//! The `strip` command: clean one file and write the result.

use std::io::Write;

use crate::cli::{OutputFormat, StripOptions};
use crate::error::DriverError;
use crate::preprocess::preprocess;

use super::{display_name, read_source, report_files, Outcome};

/// Preprocess `options.input` and write the cleaned text.
///
/// Diagnostics go to `err`. In terminal format they are followed by a
/// status line (statistics, or why nothing was written); in JSON format
/// `err` carries only the JSON array. The cleaned text goes to
/// `options.output` if set, otherwise to `out`. Nothing is written when the
/// input has errors.
pub fn strip_file(
    options: &StripOptions,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<Outcome, DriverError> {
    let name = display_name(&options.input);
    let text = read_source(&options.input)?;
    tracing::debug!(file = name, bytes = text.len(), "stripping");

    let result = preprocess(&text, &options.config);
    report_files(
        &mut *err,
        options.report,
        &[(name, &*result.text, result.diagnostics.as_slice())],
    );
    let status_lines = options.report.format == OutputFormat::Terminal;

    let Some(cleaned) = result.output else {
        if status_lines {
            let _ = writeln!(err, "{name}: errors found, no output written");
        }
        return Ok(Outcome::Errors);
    };

    match &options.output {
        Some(path) => std::fs::write(path, &cleaned).map_err(|source| DriverError::Write {
            path: path.display().to_string(),
            source,
        })?,
        None => out
            .write_all(cleaned.as_bytes())
            .and_then(|()| out.flush())
            .map_err(|source| DriverError::Write {
                path: "<stdout>".to_string(),
                source,
            })?,
    }

    if status_lines && !options.quiet {
        let _ = writeln!(err, "{name}: {}", result.stats);
        if let Some(path) = &options.output {
            let _ = writeln!(err, "{name}: cleaned output written to {}", path.display());
        }
    }
    Ok(Outcome::Clean)
}
