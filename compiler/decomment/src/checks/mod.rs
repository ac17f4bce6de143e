//! Source validation.
//!
//! Turns [`SourceIssue`]s recorded by the buffer and malformed segments
//! found by the stripper into [`Diagnostic`]s:
//!
//! | Code  | Severity | Trigger |
//! |-------|----------|---------|
//! | E0001 | error    | forbidden control character |
//! | E0002 | error    | byte-order mark |
//! | E0003 | error    | `/*` never closed |
//! | E0004 | error    | `*/` in code |
//! | E0005 | warning  | string literal never closed |
//! | E0006 | warning  | character literal never closed |
//!
//! Literal and comment segments shield their contents, so `"*/"` and
//! `// */` are not stray closes.

use decomment_core::{Segment, SegmentKind, SourceBuffer, SourceIssue, SourceIssueKind, Stripper};
use decomment_diagnostic::{
    unmatched_block_close, unterminated_block_comment, Diagnostic, ErrorCode, Span,
};

/// Validate a source buffer, returning diagnostics in source order.
#[tracing::instrument(level = "debug", skip_all, fields(len = buffer.len()))]
pub fn check_source(buffer: &SourceBuffer) -> Vec<Diagnostic> {
    let segments: Vec<Segment> = Stripper::new(buffer.cursor()).collect();
    check_segments(buffer, &segments)
}

/// Validate a buffer whose segments have already been scanned.
pub(crate) fn check_segments(buffer: &SourceBuffer, segments: &[Segment]) -> Vec<Diagnostic> {
    let mut diagnostics: Vec<Diagnostic> = buffer.issues().iter().map(issue_diagnostic).collect();

    let bytes = buffer.as_bytes();
    let mut pos = 0usize;
    // Closing `*/` of a block comment directly before the current segment.
    let mut previous_close: Option<u32> = None;
    for segment in segments {
        let start = pos;
        pos += segment.len as usize;
        let at = offset(start);
        if !segment.kind.is_terminated() {
            tracing::debug!(kind = segment.kind.name(), offset = start, "runs to end of input");
        }
        match segment.kind {
            SegmentKind::Code => {
                let code = bytes.get(start..pos).unwrap_or_default();
                for close in memchr::memmem::find_iter(code, b"*/") {
                    let mut diagnostic = unmatched_block_close(Span::at(offset(start + close), 2));
                    if let Some(closed_at) = previous_close {
                        diagnostic = diagnostic.with_secondary_label(
                            Span::at(closed_at, 2),
                            "comment already closed here",
                        );
                    }
                    diagnostics.push(diagnostic);
                }
            }
            SegmentKind::UnterminatedBlockComment => {
                diagnostics.push(unterminated_block_comment(Span::at(at, 2)));
            }
            SegmentKind::UnterminatedString => {
                diagnostics.push(unterminated_literal(ErrorCode::E0005, "string", at));
            }
            SegmentKind::UnterminatedChar => {
                diagnostics.push(unterminated_literal(ErrorCode::E0006, "character", at));
            }
            _ => {}
        }
        previous_close = (segment.kind == SegmentKind::BlockComment).then(|| offset(pos - 2));
    }

    // Issues and segment findings are each in order; merge them.
    diagnostics.sort_by_key(|d| d.primary_span().map_or(0, |span| span.start));
    tracing::debug!(count = diagnostics.len(), "source checked");
    diagnostics
}

fn offset(pos: usize) -> u32 {
    u32::try_from(pos).unwrap_or(u32::MAX)
}

fn issue_diagnostic(issue: &SourceIssue) -> Diagnostic {
    let span = Span::at(issue.pos, issue.len);
    match issue.kind {
        SourceIssueKind::Utf8Bom => Diagnostic::error(ErrorCode::E0002)
            .with_message("byte-order mark at start of file")
            .with_label(span, "UTF-8 BOM")
            .with_suggestion("save the file as UTF-8 without a BOM"),
        SourceIssueKind::ControlChar(byte) => Diagnostic::error(ErrorCode::E0001)
            .with_message(format!("forbidden control character U+{byte:04X}"))
            .with_label(span, "control character")
            .with_suggestion("remove it, or write it as an escape inside a literal"),
    }
}

fn unterminated_literal(code: ErrorCode, what: &str, start: u32) -> Diagnostic {
    Diagnostic::warning(code)
        .with_message(format!("unterminated {what} literal"))
        .with_label(Span::at(start, 1), format!("{what} literal opened here is never closed"))
        .with_note("the literal runs to end of file; comments after it are kept")
}

#[cfg(test)]
mod tests;
