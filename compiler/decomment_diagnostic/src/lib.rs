//! Diagnostic system for source checks.
//!
//! Every diagnostic carries:
//! - an error code for searchability (`decomment --explain E0003`)
//! - a clear message saying what went wrong
//! - a primary span saying where it went wrong
//! - optional notes and suggestions saying how to fix it
//!
//! Rendering lives in [`emitter`]: a terminal emitter with source snippets
//! and a JSON emitter for tooling.

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod errors;
mod span;
pub mod span_utils;

pub use diagnostic::{
    count_by_severity, unmatched_block_close, unterminated_block_comment, Diagnostic, Label,
    Severity,
};
pub use error_code::ErrorCode;
pub use errors::ErrorDocs;
pub use span::Span;
