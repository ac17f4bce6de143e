//! Segment kinds produced by the [`Stripper`](crate::Stripper).
//!
//! A segment is a `(kind, len)` pair covering a contiguous byte range of the
//! source. Segments carry no offsets; callers accumulate lengths to recover
//! positions, exactly as they would with raw tokens.

/// Scanner state while traversing the buffer.
///
/// Exists only for the duration of one scan. Between segments the scanner is
/// always back in [`LexicalMode::Normal`]; each non-code segment kind maps to
/// the mode it was scanned in via [`SegmentKind::mode()`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum LexicalMode {
    /// Ordinary code: characters are copied to the output.
    #[default]
    Normal,
    /// After `//`, up to (not including) the next newline.
    InLineComment,
    /// After `/*`, up to and including the first `*/`.
    InBlockComment,
    /// Between `"` delimiters.
    InStringLiteral,
    /// Between `'` delimiters.
    InCharLiteral,
}

/// Classification of one segment of source text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum SegmentKind {
    /// Ordinary code outside comments and literals.
    Code = 0,

    /// `// ...` up to, not including, the line terminator.
    LineComment = 16,
    /// `/* ... */` including both delimiters.
    BlockComment = 17,
    /// `/* ...` running to end of input.
    UnterminatedBlockComment = 18,

    /// `"..."` including both quotes.
    String = 32,
    /// `"...` running to end of input.
    UnterminatedString = 33,
    /// `'...'` including both quotes.
    Char = 34,
    /// `'...` running to end of input.
    UnterminatedChar = 35,

    /// End of input. Always has length zero.
    Eof = 255,
}

impl SegmentKind {
    /// Returns `true` for segments the stripper elides.
    #[inline]
    pub fn is_comment(self) -> bool {
        matches!(
            self,
            SegmentKind::LineComment
                | SegmentKind::BlockComment
                | SegmentKind::UnterminatedBlockComment
        )
    }

    /// Returns `true` for string and character literals, terminated or not.
    #[inline]
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            SegmentKind::String
                | SegmentKind::UnterminatedString
                | SegmentKind::Char
                | SegmentKind::UnterminatedChar
        )
    }

    /// Returns `false` if the segment hit end of input before its closing
    /// delimiter.
    #[inline]
    pub fn is_terminated(self) -> bool {
        !matches!(
            self,
            SegmentKind::UnterminatedBlockComment
                | SegmentKind::UnterminatedString
                | SegmentKind::UnterminatedChar
        )
    }

    /// The lexical mode this segment was scanned in.
    pub fn mode(self) -> LexicalMode {
        match self {
            SegmentKind::Code | SegmentKind::Eof => LexicalMode::Normal,
            SegmentKind::LineComment => LexicalMode::InLineComment,
            SegmentKind::BlockComment | SegmentKind::UnterminatedBlockComment => {
                LexicalMode::InBlockComment
            }
            SegmentKind::String | SegmentKind::UnterminatedString => LexicalMode::InStringLiteral,
            SegmentKind::Char | SegmentKind::UnterminatedChar => LexicalMode::InCharLiteral,
        }
    }

    /// Human-readable name for debug output.
    pub fn name(self) -> &'static str {
        match self {
            SegmentKind::Code => "code",
            SegmentKind::LineComment => "line comment",
            SegmentKind::BlockComment => "block comment",
            SegmentKind::UnterminatedBlockComment => "unterminated block comment",
            SegmentKind::String => "string literal",
            SegmentKind::UnterminatedString => "unterminated string literal",
            SegmentKind::Char => "character literal",
            SegmentKind::UnterminatedChar => "unterminated character literal",
            SegmentKind::Eof => "end of file",
        }
    }
}

/// A classified run of source bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Segment {
    pub kind: SegmentKind,
    pub len: u32,
}

const _: () = assert!(std::mem::size_of::<Segment>() <= 8);
