use decomment_diagnostic::ErrorCode;
use pretty_assertions::assert_eq;

use super::{preprocess, StripStats};
use crate::config::PreprocessConfig;

#[test]
fn test_default_pipeline() {
    let result = preprocess(
        "int a;   // one\r\n\r\n/* two */  int b;\r\n",
        &PreprocessConfig::default(),
    );
    assert!(!result.has_errors());
    assert_eq!(result.output.as_deref(), Some("int a;\nint b;\n"));
    assert_eq!(
        result.stats,
        StripStats {
            block_comment_bytes: 9,
            line_comment_bytes: 6,
            blank_lines_removed: 2,
            literals: 0,
        }
    );
}

#[test]
fn test_raw_only_strips() {
    let source = "int a;   // one\r\n/* two */  int b;\r\n";
    let result = preprocess(source, &PreprocessConfig::raw());
    assert_eq!(result.output.as_deref(), Some("int a;   \r\n  int b;\r\n"));
    assert_eq!(result.stats.blank_lines_removed, 0);
}

#[test]
fn test_matches_strip_comments_when_raw() {
    let source = "a /* b */ \"c // d\" 'e' // f\ng";
    let result = preprocess(source, &PreprocessConfig::raw());
    assert_eq!(
        result.output,
        Some(decomment_core::strip_comments(source))
    );
    assert_eq!(result.stats.literals, 2);
}

#[test]
fn test_errors_withhold_output() {
    let result = preprocess("int a; /* never closed\n", &PreprocessConfig::default());
    assert!(result.has_errors());
    assert_eq!(result.output, None);
    assert_eq!(result.diagnostics.len(), 1);
    assert_eq!(result.diagnostics[0].code, ErrorCode::E0003);
    assert_eq!(result.stats.block_comment_bytes, 16);
}

#[test]
fn test_stray_close_withholds_output() {
    let result = preprocess("x = 1; */\n", &PreprocessConfig::raw());
    assert!(result.has_errors());
    assert_eq!(result.output, None);
}

#[test]
fn test_warnings_do_not_block_output() {
    let result = preprocess("s = \"open // not a comment\n", &PreprocessConfig::default());
    assert!(!result.has_errors());
    assert_eq!(result.diagnostics[0].code, ErrorCode::E0005);
    assert_eq!(result.output.as_deref(), Some("s = \"open // not a comment\n\n"));
}

#[test]
fn test_spans_refer_to_normalized_text() {
    let result = preprocess("a;\r\n\x01", &PreprocessConfig::default());
    assert_eq!(result.diagnostics[0].code, ErrorCode::E0001);
    assert_eq!(result.diagnostics[0].primary_span().map(|s| s.start), Some(3));
    assert_eq!(result.text, "a;\n\x01");
}

#[test]
fn test_text_is_borrowed_without_normalization() {
    let source = "a;\r\n";
    let result = preprocess(source, &PreprocessConfig::raw());
    assert!(matches!(result.text, std::borrow::Cow::Borrowed(s) if s == source));
}

#[test]
fn test_keep_blank_lines() {
    let config = PreprocessConfig {
        keep_blank_lines: true,
        ..PreprocessConfig::default()
    };
    let result = preprocess("a; // x\n\nb;\n", &config);
    assert_eq!(result.output.as_deref(), Some("a;\n\nb;\n"));
}

#[test]
fn test_stats_display() {
    let stats = StripStats {
        block_comment_bytes: 10,
        line_comment_bytes: 4,
        blank_lines_removed: 1,
        literals: 3,
    };
    assert_eq!(
        stats.to_string(),
        "removed 10 bytes of block comments, 4 bytes of line comments, 1 blank line; kept 3 literals"
    );
}

#[test]
fn test_stats_display_singular_and_plural() {
    let stats = StripStats {
        block_comment_bytes: 1,
        line_comment_bytes: 0,
        blank_lines_removed: 2,
        literals: 1,
    };
    assert_eq!(
        stats.to_string(),
        "removed 1 byte of block comments, 0 bytes of line comments, 2 blank lines; kept 1 literal"
    );
}
