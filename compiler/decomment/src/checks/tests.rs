use decomment_core::SourceBuffer;
use decomment_diagnostic::{ErrorCode, Severity, Span};
use pretty_assertions::assert_eq;

use super::check_source;

fn check(source: &str) -> Vec<(ErrorCode, Severity, Option<Span>)> {
    check_source(&SourceBuffer::new(source))
        .into_iter()
        .map(|d| (d.code, d.severity, d.primary_span()))
        .collect()
}

#[test]
fn test_clean_source() {
    assert_eq!(check("int main() { return 0; } // done\n/* ok */\n"), vec![]);
    assert_eq!(check(""), vec![]);
}

#[test]
fn test_control_character() {
    assert_eq!(
        check("int a;\x01\n"),
        vec![(ErrorCode::E0001, Severity::Error, Some(Span::new(6, 7)))]
    );
}

#[test]
fn test_control_character_message_names_codepoint() {
    let diags = check_source(&SourceBuffer::new("\x7f"));
    assert_eq!(diags[0].message, "forbidden control character U+007F");
}

#[test]
fn test_tabs_and_newlines_are_allowed() {
    assert_eq!(check("\tint a;\r\n"), vec![]);
}

#[test]
fn test_byte_order_mark() {
    assert_eq!(
        check("\u{feff}int a;\n"),
        vec![(ErrorCode::E0002, Severity::Error, Some(Span::new(0, 3)))]
    );
}

#[test]
fn test_unterminated_block_comment() {
    assert_eq!(
        check("int a;\n/* open\n"),
        vec![(ErrorCode::E0003, Severity::Error, Some(Span::new(7, 9)))]
    );
}

#[test]
fn test_stray_block_close() {
    assert_eq!(
        check("a = b; */\n"),
        vec![(ErrorCode::E0004, Severity::Error, Some(Span::new(7, 9)))]
    );
}

#[test]
fn test_second_close_after_comment_is_stray() {
    // Block comments do not nest: the first `*/` closes.
    assert_eq!(
        check("/* a /* b */ c */"),
        vec![(ErrorCode::E0004, Severity::Error, Some(Span::new(15, 17)))]
    );
}

#[test]
fn test_stray_close_points_back_at_comment_close() {
    let diags = check_source(&SourceBuffer::new("/* a /* b */ c */"));
    let labels: Vec<_> = diags[0]
        .labels
        .iter()
        .map(|l| (l.span, l.is_primary))
        .collect();
    assert_eq!(labels, vec![(Span::new(15, 17), true), (Span::new(10, 12), false)]);
}

#[test]
fn test_stray_close_away_from_comment_has_one_label() {
    let diags = check_source(&SourceBuffer::new("/* a */ x; \"\" */"));
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].labels.len(), 1);
}

#[test]
fn test_literals_and_comments_shield_closes() {
    assert_eq!(check("s = \"*/\"; c = '*'; // */\n"), vec![]);
}

#[test]
fn test_division_then_multiplication_is_not_a_close() {
    assert_eq!(check("x = a * / b;"), vec![]);
}

#[test]
fn test_unterminated_literals_are_warnings() {
    assert_eq!(
        check("s = \"open"),
        vec![(ErrorCode::E0005, Severity::Warning, Some(Span::new(4, 5)))]
    );
    assert_eq!(
        check("c = 'x"),
        vec![(ErrorCode::E0006, Severity::Warning, Some(Span::new(4, 5)))]
    );
}

#[test]
fn test_diagnostics_are_in_source_order() {
    let codes: Vec<ErrorCode> = check("*/ \x02 \"x\n/* y")
        .into_iter()
        .map(|(code, _, _)| code)
        .collect();
    // The string runs to end of file and swallows the `/*`.
    assert_eq!(codes, vec![ErrorCode::E0004, ErrorCode::E0001, ErrorCode::E0005]);
}

#[test]
fn test_several_issues() {
    let codes: Vec<ErrorCode> = check("a */ b\x03 /* c")
        .into_iter()
        .map(|(code, _, _)| code)
        .collect();
    assert_eq!(codes, vec![ErrorCode::E0004, ErrorCode::E0001, ErrorCode::E0003]);
}
