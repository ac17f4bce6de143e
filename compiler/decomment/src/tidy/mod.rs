//! Whitespace and blank-line cleanup of stripped source.
//!
//! Outside literals, each line loses its leading and trailing spaces and
//! tabs, and every run of two or more spaces/tabs collapses to one space.
//! A lone space or tab between tokens is kept as written. Lines left with
//! no content (nothing but whitespace, including non-ASCII whitespace such
//! as U+00A0) are dropped unless blank lines are kept. Literal text is
//! copied verbatim and counts as content, even where it spans lines.
//!
//! The result is the kept lines joined with `\n`, plus one final `\n`.
//! Input is expected to use `\n` line terminators; see
//! [`normalize_newlines`](crate::normalize_newlines).

use decomment_core::{segments, Segment};

use crate::slices::segment_slices;

/// Output of the tidy pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tidied {
    /// Cleaned text, always ending in exactly one `\n`.
    pub text: String,
    /// Lines dropped for having no content.
    pub blank_lines_removed: usize,
}

/// Strip comments from `source`, then tidy whitespace and drop blank lines.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn tidy(source: &str) -> Tidied {
    tidy_segments(source, &segments(source), false)
}

/// Tidy a source whose segments have already been scanned.
pub(crate) fn tidy_segments(source: &str, segments: &[Segment], keep_blank_lines: bool) -> Tidied {
    let mut lines = LineBuilder::new(source.len(), keep_blank_lines);
    for (_, segment, text) in segment_slices(source, segments) {
        if segment.kind.is_comment() {
            continue;
        }
        if segment.kind.is_literal() {
            lines.push_literal(text);
        } else {
            lines.push_code(text);
        }
    }
    lines.finish()
}

/// Accumulates output one line at a time.
struct LineBuilder {
    out: String,
    line: String,
    /// First whitespace char of the pending run and the run length.
    pending_ws: Option<(char, usize)>,
    total_lines: usize,
    kept_lines: usize,
    keep_blank_lines: bool,
}

impl LineBuilder {
    fn new(capacity: usize, keep_blank_lines: bool) -> Self {
        LineBuilder {
            out: String::with_capacity(capacity),
            line: String::new(),
            pending_ws: None,
            total_lines: 0,
            kept_lines: 0,
            keep_blank_lines,
        }
    }

    fn push_code(&mut self, text: &str) {
        for c in text.chars() {
            match c {
                ' ' | '\t' => {
                    self.pending_ws = match self.pending_ws {
                        None => Some((c, 1)),
                        Some((first, run)) => Some((first, run + 1)),
                    };
                }
                '\n' => self.end_line(),
                _ => {
                    self.flush_ws();
                    self.line.push(c);
                }
            }
        }
    }

    fn push_literal(&mut self, text: &str) {
        self.flush_ws();
        self.line.push_str(text);
    }

    /// Emit pending whitespace, unless it is leading.
    fn flush_ws(&mut self) {
        if let Some((first, run)) = self.pending_ws.take() {
            if !self.line.is_empty() {
                self.line.push(if run == 1 { first } else { ' ' });
            }
        }
    }

    fn end_line(&mut self) {
        // Trailing whitespace is dropped.
        self.pending_ws = None;
        self.total_lines += 1;
        if self.has_content() || self.keep_blank_lines {
            self.emit_line();
        }
        self.line.clear();
    }

    /// A line of nothing but whitespace, of any kind, is blank.
    fn has_content(&self) -> bool {
        !self.line.chars().all(char::is_whitespace)
    }

    fn emit_line(&mut self) {
        if self.kept_lines > 0 {
            self.out.push('\n');
        }
        self.out.push_str(&self.line);
        self.kept_lines += 1;
    }

    fn finish(mut self) -> Tidied {
        // The text after the last newline is a line of its own; when blank
        // lines are kept, an empty one is just the final terminator.
        self.pending_ws = None;
        self.total_lines += 1;
        if self.has_content() {
            self.emit_line();
        }
        self.out.push('\n');
        let blank_lines_removed = if self.keep_blank_lines {
            0
        } else {
            self.total_lines - self.kept_lines
        };
        Tidied {
            text: self.out,
            blank_lines_removed,
        }
    }
}
