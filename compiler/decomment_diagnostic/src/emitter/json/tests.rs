use super::*;
use crate::{ErrorCode, Span};

fn sample_diagnostic() -> Diagnostic {
    Diagnostic::error(ErrorCode::E0003)
        .with_message("unterminated block comment")
        .with_label(Span::new(7, 9), "comment opened here is never closed")
        .with_note("block comments run to the first `*/`")
        .with_suggestion("add `*/` where the comment should end")
}

#[test]
fn test_json_emitter() {
    let mut output = Vec::new();
    let mut emitter = JsonEmitter::new(&mut output);

    emitter.begin();
    emitter.emit(&sample_diagnostic());
    emitter.end();
    emitter.flush();

    drop(emitter);
    let text = String::from_utf8(output).unwrap();
    assert!(text.starts_with("[\n  {\n"));
    assert!(text.ends_with("  }\n]\n"));
    assert!(text.contains("\"code\": \"E0003\""));
    assert!(text.contains("\"severity\": \"error\""));
    assert!(text.contains("\"message\": \"unterminated block comment\""));
    assert!(text.contains("\"start\": 7,"));
    assert!(text.contains("\"end\": 9,"));
    assert!(text.contains("\"primary\": true"));
    assert!(text.contains("\"add `*/` where the comment should end\""));
    assert!(!text.contains("\"file\""));
    assert!(!text.contains("\"line\""));
}

#[test]
fn test_json_emitter_multiple() {
    let mut output = Vec::new();
    let mut emitter = JsonEmitter::new(&mut output);

    let diag1 = Diagnostic::error(ErrorCode::E0004).with_message("error 1");
    let diag2 = Diagnostic::warning(ErrorCode::E0005).with_message("warning 1");

    emitter.begin();
    emitter.emit(&diag1);
    emitter.emit(&diag2);
    emitter.end();
    emitter.flush();

    drop(emitter);
    let text = String::from_utf8(output).unwrap();
    assert!(text.contains("E0004"));
    assert!(text.contains("E0005"));
    assert!(text.contains("\"severity\": \"warning\""));
    assert!(text.contains("  },\n  {\n"));
}

#[test]
fn test_json_emitter_with_source() {
    let mut output = Vec::new();
    let mut emitter = JsonEmitter::new(&mut output);
    emitter.set_source("dir\\main.c", "int x;\n/* open\n");

    emitter.begin();
    emitter.emit(&sample_diagnostic());
    emitter.end();

    drop(emitter);
    let text = String::from_utf8(output).unwrap();
    assert!(text.contains("\"file\": \"dir\\\\main.c\","));
    assert!(text.contains("\"line\": 2,"));
    assert!(text.contains("\"column\": 1,"));
}

#[test]
fn test_json_escapes_messages() {
    let mut output = Vec::new();
    let mut emitter = JsonEmitter::new(&mut output);
    emitter.emit(&Diagnostic::error(ErrorCode::E0001).with_message("byte \"\\x01\"\n"));
    drop(emitter);
    let text = String::from_utf8(output).unwrap();
    assert!(text.contains("\"message\": \"byte \\\"\\\\x01\\\"\\n\","));
}

#[test]
fn test_empty_array() {
    let mut output = Vec::new();
    let mut emitter = JsonEmitter::new(&mut output);
    emitter.begin();
    emitter.end();
    emitter.emit_summary(0, 0);
    drop(emitter);
    let text = String::from_utf8(output).unwrap();
    assert_eq!(text, "[\n\n]\n");
}
