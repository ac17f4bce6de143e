//! Single-pass, literal-aware comment classifier.
//!
//! The [`Stripper`] walks a sentinel-terminated [`Cursor`] and yields one
//! [`Segment`] per run of code, comment, or literal text. It never fails:
//! an unterminated comment or literal extends to end of input and is
//! reported through its [`SegmentKind`] instead of a `Result::Err`.
//!
//! # Mode selection
//!
//! At each segment boundary the scanner is in [`LexicalMode::Normal`] and
//! looks at the current byte plus one byte of lookahead. The checks run in a
//! fixed order: `"`, `'`, `//`, `/*`. Anything else, including a lone `/`,
//! is code.
//!
//! Block comments do not nest. The first `*/` after `/*` closes the comment.

use crate::cursor::Cursor;
use crate::segment::{LexicalMode, Segment, SegmentKind};
use crate::SourceBuffer;

/// Allocation-free segment scanner.
pub struct Stripper<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Stripper<'a> {
    /// Create a new stripper from a cursor.
    pub fn new(cursor: Cursor<'a>) -> Self {
        Self { cursor }
    }

    /// Byte offset of the next segment.
    pub fn pos(&self) -> u32 {
        self.cursor.pos()
    }

    /// Produce the next segment.
    ///
    /// Returns `SegmentKind::Eof` with `len == 0` when the source is
    /// exhausted. Subsequent calls keep returning `Eof`.
    pub fn next_segment(&mut self) -> Segment {
        let start = self.cursor.pos();
        if self.cursor.is_eof() {
            return Segment {
                kind: SegmentKind::Eof,
                len: 0,
            };
        }
        let kind = match self.entered_mode() {
            LexicalMode::Normal => self.code(),
            LexicalMode::InLineComment => self.line_comment(),
            LexicalMode::InBlockComment => self.block_comment(),
            LexicalMode::InStringLiteral => {
                self.literal(b'"', SegmentKind::String, SegmentKind::UnterminatedString)
            }
            LexicalMode::InCharLiteral => {
                self.literal(b'\'', SegmentKind::Char, SegmentKind::UnterminatedChar)
            }
        };
        Segment {
            kind,
            len: self.cursor.pos() - start,
        }
    }

    /// The mode the byte(s) at the cursor would switch to from `Normal`.
    #[inline]
    fn entered_mode(&self) -> LexicalMode {
        match (self.cursor.current(), self.cursor.peek()) {
            (b'"', _) => LexicalMode::InStringLiteral,
            (b'\'', _) => LexicalMode::InCharLiteral,
            (b'/', b'/') => LexicalMode::InLineComment,
            (b'/', b'*') => LexicalMode::InBlockComment,
            _ => LexicalMode::Normal,
        }
    }

    // ─── Code ──────────────────────────────────────────────────────

    fn code(&mut self) -> SegmentKind {
        loop {
            self.cursor.eat_code();
            if self.cursor.is_eof() || self.entered_mode() != LexicalMode::Normal {
                return SegmentKind::Code;
            }
            // Lone '/' (division): stays in the code run.
            self.cursor.advance();
        }
    }

    // ─── Comments ──────────────────────────────────────────────────

    fn line_comment(&mut self) -> SegmentKind {
        self.cursor.advance_n(2); // consume '//'
        // The newline is not part of the comment; it is copied as code.
        self.cursor.eat_until_newline_or_eof();
        SegmentKind::LineComment
    }

    fn block_comment(&mut self) -> SegmentKind {
        self.cursor.advance_n(2); // consume '/*'
        if self.cursor.eat_past_block_close() {
            SegmentKind::BlockComment
        } else {
            SegmentKind::UnterminatedBlockComment
        }
    }

    // ─── Literals ──────────────────────────────────────────────────

    fn literal(&mut self, quote: u8, closed: SegmentKind, open: SegmentKind) -> SegmentKind {
        self.cursor.advance(); // consume opening quote
        loop {
            match self.cursor.skip_to_literal_delim(quote) {
                b'\\' => {
                    self.cursor.advance(); // consume '\'
                    if !self.cursor.is_eof() {
                        self.cursor.advance(); // escaped byte, including quotes
                    }
                }
                0 => return open,
                _ => {
                    self.cursor.advance(); // consume closing quote
                    return closed;
                }
            }
        }
    }
}

impl Iterator for Stripper<'_> {
    type Item = Segment;

    fn next(&mut self) -> Option<Segment> {
        let segment = self.next_segment();
        if segment.kind == SegmentKind::Eof {
            None
        } else {
            Some(segment)
        }
    }
}

/// Classify `source` into segments (excluding the final `Eof`).
pub fn segments(source: &str) -> Vec<Segment> {
    let buffer = SourceBuffer::new(source);
    Stripper::new(buffer.cursor()).collect()
}

/// Remove every line and block comment from `source`.
///
/// String and character literals are copied verbatim, even where their
/// contents look like comment syntax. Line comments keep their terminating
/// newline; block comments are removed whole, interior newlines included.
/// Total over all inputs: unterminated constructs run to end of input.
pub fn strip_comments(source: &str) -> String {
    let buffer = SourceBuffer::new(source);
    let mut out = String::with_capacity(source.len());
    let mut pos = 0usize;
    for segment in Stripper::new(buffer.cursor()) {
        let end = pos + segment.len as usize;
        // Every delimiter is ASCII, so segment boundaries are char boundaries.
        if !segment.kind.is_comment() {
            out.push_str(&source[pos..end]);
        }
        pos = end;
    }
    out
}
