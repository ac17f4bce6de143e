//! The `decomment` driver: C/C++ comment stripping with validation.
//!
//! Wraps the pure scanner in `decomment_core` with the pieces a command-line
//! tool needs:
//!
//! - [`normalize_newlines`]: CRLF and CR to LF
//! - [`check_source`]: control characters, BOMs, unbalanced block comments,
//!   and unterminated literals, as coded diagnostics
//! - [`tidy`]: whitespace cleanup and blank-line removal outside literals
//! - [`preprocess`]: all of the above, with output withheld on errors
//! - [`cli`] and [`commands`]: argument parsing and the `strip`, `check`,
//!   and `explain` commands
//!
//! ```
//! use decomment::{preprocess, PreprocessConfig};
//!
//! let result = preprocess("int x;   // counter\n\n", &PreprocessConfig::default());
//! assert_eq!(result.output.as_deref(), Some("int x;\n"));
//! ```

mod checks;
pub mod cli;
pub mod commands;
mod config;
mod error;
mod normalize;
mod preprocess;
mod slices;
mod tidy;
mod tracing_setup;

pub use checks::check_source;
pub use config::PreprocessConfig;
pub use error::{DriverError, EXIT_USAGE};
pub use normalize::normalize_newlines;
pub use preprocess::{preprocess, Preprocessed, StripStats};
pub use tidy::{tidy, Tidied};
pub use tracing_setup::init_tracing;
