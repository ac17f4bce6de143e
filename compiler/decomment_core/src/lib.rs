//! Literal-aware comment stripping for C-family source text.
//!
//! The crate is split the same way a lexer core is:
//!
//! - [`SourceBuffer`] owns a sentinel-terminated copy of the input and records
//!   [`SourceIssue`]s (byte-order marks, forbidden control characters).
//! - [`Cursor`] walks that buffer byte-by-byte with cheap lookahead.
//! - [`Stripper`] classifies the input into [`Segment`]s (code, comments,
//!   literals) in a single left-to-right pass.
//! - [`strip_comments`] glues it together: every non-comment segment is
//!   copied to the output, every comment segment is elided.
//!
//! Nothing here allocates per segment, performs I/O, or fails. Malformed
//! input (unterminated comments or literals) extends the open construct to
//! end of input and is flagged on the segment kind for callers that care.
//!
//! ```
//! let out = decomment_core::strip_comments("int x = 1; // one\n");
//! assert_eq!(out, "int x = 1; \n");
//! ```

mod cursor;
mod segment;
mod source_buffer;
mod stripper;

pub use cursor::Cursor;
pub use segment::{LexicalMode, Segment, SegmentKind};
pub use source_buffer::{SourceBuffer, SourceIssue, SourceIssueKind};
pub use stripper::{segments, strip_comments, Stripper};
