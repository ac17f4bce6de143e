//! Sentinel-terminated source buffer for zero-bounds-check scanning.
//!
//! The buffer guarantees a `0x00` sentinel byte after the source content,
//! allowing the stripper to detect EOF without explicit bounds checking.
//! The total buffer size is rounded up to the next 64-byte boundary, which
//! also provides safe padding for `peek()` at the end of the source.
//!
//! # Issue Detection
//!
//! During construction, the buffer scans for bytes a C-family source file
//! should not contain:
//! - UTF-8 BOM at the start of the file
//! - Control characters other than `\t`, `\n`, and `\r` (including NUL)
//!
//! Issues are recorded as [`SourceIssue`] values. Stripping ignores them;
//! the driver turns them into diagnostics.

use crate::Cursor;

/// Cache line size in bytes, used for buffer alignment padding.
const CACHE_LINE: usize = 64;

/// Sentinel-terminated source buffer.
///
/// # Layout
///
/// ```text
/// [source_bytes..., 0x00, padding_zeros...]
///  ^                ^     ^
///  0                |     rounded up to 64-byte boundary
///              source_len (sentinel)
/// ```
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    /// Owned buffer: `[source_bytes..., 0x00 sentinel, 0x00 padding...]`.
    buf: Vec<u8>,
    /// Length of the actual source content (excludes sentinel and padding).
    source_len: u32,
    /// Issues detected during construction, in source order.
    issues: Vec<SourceIssue>,
}

/// Problematic byte sequence detected during buffer construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SourceIssue {
    /// What kind of issue was detected.
    pub kind: SourceIssueKind,
    /// Byte position in the source where the issue was found.
    pub pos: u32,
    /// Byte length of the problematic sequence.
    pub len: u32,
}

/// Kind of issue detected in a source buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceIssueKind {
    /// UTF-8 BOM (`0xEF 0xBB 0xBF`) at start.
    Utf8Bom,
    /// A control character other than tab, line feed, or carriage return.
    /// Carries the offending byte.
    ControlChar(u8),
}

impl SourceBuffer {
    /// Create a new sentinel-terminated buffer from source text.
    ///
    /// # File Size
    ///
    /// Offsets are `u32`, so only the first `u32::MAX` bytes of a larger
    /// source are addressable: `source_len` saturates and scanning stops
    /// there, dropping the tail. Callers must reject oversized input first
    /// (the `decomment` driver does so when reading files).
    pub fn new(source: &str) -> Self {
        let source_bytes = source.as_bytes();
        let source_len = source_bytes.len();

        // Round up to next 64-byte boundary (minimum: source + sentinel + one
        // byte so `peek()` at EOF stays in bounds).
        let padded_len = (source_len + 2 + CACHE_LINE - 1) & !(CACHE_LINE - 1);

        // Sentinel and padding are already 0x00.
        let mut buf = vec![0u8; padded_len];
        buf[..source_len].copy_from_slice(source_bytes);

        let mut issues = Vec::new();
        detect_bom(source_bytes, &mut issues);
        detect_control_chars(source_bytes, &mut issues);

        Self {
            buf,
            source_len: u32::try_from(source_len).unwrap_or(u32::MAX),
            issues,
        }
    }

    /// Returns the source bytes (without sentinel or padding).
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.source_len as usize]
    }

    /// Returns the full buffer including sentinel and padding.
    pub(crate) fn as_sentinel_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Create a [`Cursor`] positioned at byte 0.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(self.as_sentinel_bytes(), self.source_len)
    }

    /// Length of the source content in bytes.
    pub fn len(&self) -> u32 {
        self.source_len
    }

    /// Returns `true` if the source content is empty.
    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }

    /// Issues detected during construction, in source order.
    pub fn issues(&self) -> &[SourceIssue] {
        &self.issues
    }
}

/// Returns `true` for control bytes a source file must not contain.
///
/// Tab (`0x09`), line feed (`0x0A`), and carriage return (`0x0D`) are allowed.
#[inline]
pub(crate) fn is_forbidden_control(b: u8) -> bool {
    matches!(b, 0x00..=0x08 | 0x0B | 0x0C | 0x0E..=0x1F | 0x7F)
}

fn detect_bom(source: &[u8], issues: &mut Vec<SourceIssue>) {
    if source.starts_with(&[0xEF, 0xBB, 0xBF]) {
        issues.push(SourceIssue {
            kind: SourceIssueKind::Utf8Bom,
            pos: 0,
            len: 3,
        });
    }
}

fn detect_control_chars(source: &[u8], issues: &mut Vec<SourceIssue>) {
    for (i, &b) in source.iter().enumerate() {
        if !is_forbidden_control(b) {
            continue;
        }
        let Ok(pos) = u32::try_from(i) else {
            break;
        };
        issues.push(SourceIssue {
            kind: SourceIssueKind::ControlChar(b),
            pos,
            len: 1,
        });
    }
}
