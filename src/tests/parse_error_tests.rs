//! Tests for error formatting and filename attachment.

use crate::ParseError;

fn sample_error(source: &str) -> ParseError {
    crate::parse(source).expect_err("expected a parse error")
}

#[test]
fn oneline_format_without_filename() {
    let err = sample_error("{ f(} }");
    assert_eq!(
        err.format_oneline(),
        "<input>:1:5: error: unexpected `}`, expecting Name or `)`",
    );
}

#[test]
fn oneline_format_with_filename() {
    let err = crate::parse_with_options("{ f(} }", Some("query.graphql"), &Default::default())
        .expect_err("expected a parse error");
    assert_eq!(err.filename(), Some("query.graphql"));
    assert_eq!(
        err.format_oneline(),
        "query.graphql:1:5: error: unexpected `}`, expecting Name or `)`",
    );
}

/// The `Display` impl matches the one-line format, so `?` propagation
/// into `anyhow`-style callers prints the location.
#[test]
fn display_matches_oneline_format() {
    let err = sample_error("}");
    assert_eq!(err.to_string(), err.format_oneline());
}

#[test]
fn with_filename_builder() {
    let err = sample_error("}").with_filename("schema.graphql");
    assert_eq!(err.filename(), Some("schema.graphql"));
    assert!(err.format_oneline().starts_with("schema.graphql:1:1: error:"));
}

#[test]
fn detailed_format_without_source() {
    let source = "query Q {\n  userName }\n}";
    let err = sample_error(source);
    let detailed = err.format_detailed(None);
    assert!(detailed.starts_with("error: "));
    assert!(detailed.contains("  --> <input>:"));
    // No snippet without source text.
    assert!(!detailed.contains(" | "));
}

#[test]
fn detailed_format_with_source() {
    // The stray `}` on line 3 is the error.
    let source = "{\n  name\n}}";
    let err = sample_error(source);
    assert_eq!((err.position().line(), err.position().col()), (3, 2));

    let detailed = err.format_detailed(Some(source));
    let lines: Vec<&str> = detailed.lines().collect();
    assert_eq!(lines[0], "error: unexpected `}`, expecting `{` or `query` or `mutation` or `subscription` or `fragment` or `schema` or `scalar` or `type` or `interface` or `union` or `enum` or `input` or `directive` or `extend` or String");
    assert_eq!(lines[1], "  --> <input>:3:2");
    assert_eq!(lines[2], "   |");
    assert_eq!(lines[3], " 3 | }}");
    assert_eq!(lines[4], "   |  ^");
}

#[test]
fn detailed_format_pads_wide_line_numbers() {
    let mut source = String::new();
    for _ in 0..120 {
        source.push_str("{ f }\n");
    }
    source.push('}');
    let err = sample_error(&source);
    assert_eq!(err.position().line(), 121);

    let detailed = err.format_detailed(Some(&source));
    assert!(detailed.contains("121 | }"));
    assert!(detailed.contains("    |\n"));
}

/// Lexical errors carry positions and filenames the same way syntax
/// errors do.
#[test]
fn lex_error_formats_like_a_syntax_error() {
    let err = crate::parse_with_options(
        "{ f(a: \"oops) }",
        Some("bad.graphql"),
        &Default::default(),
    )
    .expect_err("expected a parse error");
    assert!(err.format_oneline().starts_with("bad.graphql:1:8: error:"));
}
