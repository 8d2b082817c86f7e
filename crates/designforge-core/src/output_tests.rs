use super::*;
use designforge_protocols::ErrorKind;

#[test]
fn test_bare_object() {
    let raw = r#"{"html": "<h1>Hi</h1>", "css": "h1 { color: red; }", "description": "Red title"}"#;
    let output = parse_design_output(raw).unwrap();
    assert_eq!(output.html, "<h1>Hi</h1>");
    assert_eq!(output.css, "h1 { color: red; }");
    assert_eq!(output.description, "Red title");
}

#[test]
fn test_object_inside_prose() {
    let raw = "Here is your design:\n\n{\"html\": \"<main/>\", \"css\": \"\", \"description\": \"Minimal\"}\n\nLet me know!";
    let output = parse_design_output(raw).unwrap();
    assert_eq!(output.html, "<main/>");
    assert_eq!(output.description, "Minimal");
}

#[test]
fn test_object_inside_code_fence() {
    let raw = "```json\n{\"html\": \"<p>x</p>\", \"css\": \"p { margin: 0 }\", \"description\": \"d\"}\n```";
    let output = parse_design_output(raw).unwrap();
    assert_eq!(output.css, "p { margin: 0 }");
}

#[test]
fn test_nested_braces_in_css() {
    let raw = r#"{"html": "<div></div>", "css": "@media (max-width: 600px) { div { display: none; } }", "description": "Responsive"}"#;
    let output = parse_design_output(raw).unwrap();
    assert!(output.css.starts_with("@media"));
}

#[test]
fn test_no_brace_is_parse_failure() {
    let err = parse_design_output("I could not produce a design.").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Parse);
    assert_eq!(err.raw_output(), Some("I could not produce a design."));
}

#[test]
fn test_closing_before_opening_is_parse_failure() {
    let err = parse_design_output("} nothing {").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Parse);
}

#[test]
fn test_invalid_json_is_parse_failure() {
    let raw = "{html: <div>}";
    let err = parse_design_output(raw).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Parse);
    assert_eq!(err.raw_output(), Some(raw));
}

#[test]
fn test_two_objects_span_is_invalid() {
    // First-to-last brace match swallows the prose between two objects.
    let raw = r#"{"html": "a", "css": "b", "description": "c"} and also {"x": 1}"#;
    assert!(parse_design_output(raw).is_err());
}

#[test]
fn test_missing_field_is_parse_failure() {
    let raw = r#"{"html": "<div></div>", "css": "div {}"}"#;
    let err = parse_design_output(raw).unwrap_err();
    assert!(err.to_string().contains("description"));
}

#[test]
fn test_non_string_field_is_parse_failure() {
    let raw = r#"{"html": "<div></div>", "css": null, "description": "x"}"#;
    let err = parse_design_output(raw).unwrap_err();
    assert!(err.to_string().contains("css"));
}

#[test]
fn test_extra_fields_ignored() {
    let raw = r#"{"html": "h", "css": "c", "description": "d", "notes": ["x"]}"#;
    assert!(parse_design_output(raw).is_ok());
}
