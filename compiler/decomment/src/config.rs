//! Pipeline configuration.

/// Which stages [`preprocess`](crate::preprocess) runs.
///
/// The default matches a full cleanup: normalize newlines, strip comments,
/// tidy whitespace, and drop blank lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PreprocessConfig {
    /// Convert `\r\n` and `\r` to `\n` before scanning.
    pub normalize_newlines: bool,
    /// Trim and collapse whitespace outside literals after stripping.
    pub tidy: bool,
    /// With `tidy`, keep lines that end up empty.
    pub keep_blank_lines: bool,
}

impl Default for PreprocessConfig {
    fn default() -> Self {
        PreprocessConfig {
            normalize_newlines: true,
            tidy: true,
            keep_blank_lines: false,
        }
    }
}

impl PreprocessConfig {
    /// Only remove comments; the rest of the text is untouched.
    pub fn raw() -> Self {
        PreprocessConfig {
            normalize_newlines: false,
            tidy: false,
            keep_blank_lines: false,
        }
    }
}
