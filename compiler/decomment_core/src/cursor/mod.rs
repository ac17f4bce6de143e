//! Cursor over a sentinel-terminated buffer.
//!
//! The cursor advances through the buffer byte-by-byte. EOF is detected
//! when the current byte equals the sentinel (`0x00`) and the position
//! has reached the source length. Interior null bytes (`pos < source_len`)
//! are ordinary bytes to the cursor.
//!
//! The bulk skip methods use `memchr` to jump over comment bodies, literal
//! contents, and plain code, since those runs are long compared to the
//! delimiters that end them.

/// Cursor over a sentinel-terminated byte buffer.
///
/// Created via [`SourceBuffer::cursor()`](crate::SourceBuffer::cursor).
/// The cursor is [`Copy`], so callers can snapshot and restore it freely.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Sentinel-terminated buffer (source + sentinel + padding).
    buf: &'a [u8],
    /// Current read position (byte index into `buf`).
    pos: u32,
    /// Length of actual source content (excludes sentinel and padding).
    source_len: u32,
}

const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 24);

impl<'a> Cursor<'a> {
    /// Create a new cursor at position 0.
    ///
    /// `buf[source_len]` and everything after it must be `0x00`; this is
    /// guaranteed by `SourceBuffer::new()`.
    pub(crate) fn new(buf: &'a [u8], source_len: u32) -> Self {
        debug_assert!(
            (source_len as usize) < buf.len(),
            "sentinel must be within buffer bounds"
        );
        debug_assert!(buf[source_len as usize] == 0, "sentinel byte must be 0x00");
        Self {
            buf,
            pos: 0,
            source_len,
        }
    }

    /// Returns the byte at the current position, or `0x00` at EOF.
    #[inline]
    pub fn current(&self) -> u8 {
        self.buf[self.pos as usize]
    }

    /// Returns the byte one position ahead of current.
    ///
    /// Safe at any position up to EOF: the padding guarantees a valid read.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.buf[self.pos as usize + 1]
    }

    /// Advance the cursor by one byte.
    #[inline]
    pub fn advance(&mut self) {
        self.pos += 1;
    }

    /// Advance the cursor by `n` bytes.
    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        self.pos += n;
    }

    /// Returns `true` once the cursor has reached the end of the source.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source_len
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Unscanned source bytes from the current position to EOF.
    #[inline]
    fn remaining(&self) -> &'a [u8] {
        let start = (self.pos as usize).min(self.source_len as usize);
        &self.buf[start..self.source_len as usize]
    }

    /// Move to `offset` bytes past the current position, or to EOF if the
    /// search came up empty.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offset < remaining().len() <= source_len which fits in u32"
    )]
    #[inline]
    fn jump(&mut self, offset: Option<usize>) -> bool {
        match offset {
            Some(off) => {
                self.pos += off as u32;
                true
            }
            None => {
                self.pos = self.source_len;
                false
            }
        }
    }

    /// Advance to the next line terminator (`\n` or `\r`) or EOF.
    ///
    /// The terminator itself is not consumed: it belongs to the code that
    /// follows a line comment, so `\r\n` line endings survive intact.
    pub fn eat_until_newline_or_eof(&mut self) {
        let found = memchr::memchr2(b'\n', b'\r', self.remaining());
        self.jump(found);
    }

    /// Advance past the next `*/`, or to EOF if there is none.
    ///
    /// Returns `true` if a closing `*/` was consumed.
    pub fn eat_past_block_close(&mut self) -> bool {
        let found = memchr::memmem::find(self.remaining(), b"*/");
        if self.jump(found) {
            self.advance_n(2);
            true
        } else {
            false
        }
    }

    /// Advance to the next `quote` or `\` byte inside a literal.
    ///
    /// Returns the byte found, or `0` at EOF.
    pub fn skip_to_literal_delim(&mut self, quote: u8) -> u8 {
        let found = memchr::memchr2(quote, b'\\', self.remaining());
        if self.jump(found) {
            self.current()
        } else {
            0
        }
    }

    /// Advance past plain code to the next byte that could open a literal
    /// or a comment (`"`, `'`, or `/`), or to EOF.
    pub fn eat_code(&mut self) {
        let found = memchr::memchr3(b'"', b'\'', b'/', self.remaining());
        self.jump(found);
    }
}
