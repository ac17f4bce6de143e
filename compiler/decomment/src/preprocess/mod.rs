//! The full pipeline: normalize, validate, strip, tidy.
//!
//! Validation gates output. When any error-severity diagnostic is found
//! the cleaned text is withheld, so a half-understood file is never
//! written out. Warnings do not block output.

use std::borrow::Cow;
use std::fmt;

use decomment_core::{Segment, SegmentKind, SourceBuffer, Stripper};
use decomment_diagnostic::Diagnostic;

use crate::checks::check_segments;
use crate::config::PreprocessConfig;
use crate::normalize::normalize_newlines;
use crate::slices::segment_slices;
use crate::tidy::tidy_segments;

/// What the pipeline removed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StripStats {
    /// Bytes of block comments removed, delimiters included.
    pub block_comment_bytes: usize,
    /// Bytes of line comments removed, `//` included, newline excluded.
    pub line_comment_bytes: usize,
    /// Lines dropped by the tidy pass.
    pub blank_lines_removed: usize,
    /// String and character literals passed through.
    pub literals: usize,
}

impl StripStats {
    fn from_segments(segments: &[Segment]) -> Self {
        segments
            .iter()
            .fold(StripStats::default(), |mut stats, segment| {
                let len = segment.len as usize;
                match segment.kind {
                    SegmentKind::BlockComment | SegmentKind::UnterminatedBlockComment => {
                        stats.block_comment_bytes += len;
                    }
                    SegmentKind::LineComment => stats.line_comment_bytes += len,
                    kind if kind.is_literal() => stats.literals += 1,
                    _ => {}
                }
                stats
            })
    }
}

/// Returns "s" for plural counts, "" for singular.
fn plural_s(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

impl fmt::Display for StripStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (block, line) = (self.block_comment_bytes, self.line_comment_bytes);
        let (blank, literals) = (self.blank_lines_removed, self.literals);
        write!(
            f,
            "removed {block} byte{} of block comments, {line} byte{} of line comments, \
             {blank} blank line{}; kept {literals} literal{}",
            plural_s(block),
            plural_s(line),
            plural_s(blank),
            plural_s(literals)
        )
    }
}

/// Result of [`preprocess`].
#[derive(Clone, Debug)]
pub struct Preprocessed<'src> {
    /// The text the checks ran on: the input after newline normalization,
    /// when enabled. Diagnostic spans point into it.
    pub text: Cow<'src, str>,
    /// Cleaned text; `None` when an error diagnostic blocked output.
    pub output: Option<String>,
    /// Everything the checks found, in source order.
    pub diagnostics: Vec<Diagnostic>,
    pub stats: StripStats,
}

impl Preprocessed<'_> {
    /// Whether any diagnostic is an error.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }
}

/// Run the pipeline on one source text.
///
/// Diagnostic spans refer to [`Preprocessed::text`], the input after newline
/// normalization when it is enabled.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn preprocess<'src>(source: &'src str, config: &PreprocessConfig) -> Preprocessed<'src> {
    let text = if config.normalize_newlines {
        normalize_newlines(source)
    } else {
        Cow::Borrowed(source)
    };

    let buffer = SourceBuffer::new(&text);
    let segments: Vec<Segment> = Stripper::new(buffer.cursor()).collect();
    tracing::debug!(segments = segments.len(), "scanned");

    let diagnostics = check_segments(&buffer, &segments);
    let mut stats = StripStats::from_segments(&segments);

    if diagnostics.iter().any(Diagnostic::is_error) {
        tracing::debug!("errors found, output withheld");
        return Preprocessed {
            text,
            output: None,
            diagnostics,
            stats,
        };
    }

    let output = if config.tidy {
        let tidied = tidy_segments(&text, &segments, config.keep_blank_lines);
        stats.blank_lines_removed = tidied.blank_lines_removed;
        tidied.text
    } else {
        strip_segments(&text, &segments)
    };

    Preprocessed {
        text,
        output: Some(output),
        diagnostics,
        stats,
    }
}

/// Concatenate the non-comment segments of `source`.
fn strip_segments(source: &str, segments: &[Segment]) -> String {
    let mut out = String::with_capacity(source.len());
    for (_, segment, text) in segment_slices(source, segments) {
        if !segment.kind.is_comment() {
            out.push_str(text);
        }
    }
    out
}

#[cfg(test)]
mod tests;
