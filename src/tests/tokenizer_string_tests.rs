//! Tests for string and block-string lexing: escape cooking, error
//! deferral for bad escapes, and block-string indentation stripping.

use crate::ParseErrorKind;
use crate::ParseOptions;
use crate::tests::utils::tokenize_ok;
use crate::token::TokenKind;

fn single_string(source: &str) -> String {
    let tokens = tokenize_ok(source);
    assert_eq!(tokens.len(), 1, "expected exactly one token");
    match &tokens[0].kind {
        TokenKind::Str(value) => value.clone(),
        other => panic!("expected a string token, got: {other:?}"),
    }
}

#[test]
fn simple_string() {
    assert_eq!(single_string(r#""hello world""#), "hello world");
}

#[test]
fn empty_string() {
    assert_eq!(single_string(r#""""#), "");
}

#[test]
fn simple_escapes() {
    assert_eq!(
        single_string(r#""a\" b\\ c\/ d\b e\f f\n g\r h\t""#),
        "a\" b\\ c/ d\u{0008} e\u{000C} f\n g\r h\t",
    );
}

#[test]
fn unicode_escapes() {
    assert_eq!(single_string(r#""\u0041\u00e9""#), "Aé");
    // Hex digits are case-insensitive.
    assert_eq!(single_string(r#""\u00E9""#), "é");
}

/// Surrogate pairs combine into a single code point.
///
/// <https://spec.graphql.org/September2025/#sec-String-Value>
#[test]
fn unicode_escape_surrogate_pair() {
    assert_eq!(single_string(r#""\uD83D\uDE00""#), "😀");
}

#[test]
fn braced_unicode_escape() {
    assert_eq!(single_string(r#""\u{1F600}""#), "😀");
}

/// A string with a bad escape still produces a token; the error is
/// raised only when the parser consumes it.
#[test]
fn invalid_escape_is_deferred() {
    let tokens = tokenize_ok(r#""a\qb""#);
    assert!(matches!(
        &tokens[0].kind,
        TokenKind::BadUnicodeEscape(raw) if raw == r"a\qb",
    ));

    let err = crate::parse(r#"{ f(a: "a\qb") }"#).unwrap_err();
    assert!(matches!(err.kind(), ParseErrorKind::BadUnicodeEscape { .. }));
    assert_eq!(err.position().col(), 8);
}

#[test]
fn lone_surrogate_is_a_bad_escape() {
    let tokens = tokenize_ok(r#""\ud83d oops""#);
    assert!(matches!(tokens[0].kind, TokenKind::BadUnicodeEscape(_)));
}

#[test]
fn truncated_unicode_escape_is_a_bad_escape() {
    let tokens = tokenize_ok(r#""\u00""#);
    assert!(matches!(tokens[0].kind, TokenKind::BadUnicodeEscape(_)));
}

#[test]
fn raw_control_character_is_a_bad_escape() {
    let tokens = tokenize_ok("\"a\u{0007}b\"");
    assert!(matches!(tokens[0].kind, TokenKind::BadUnicodeEscape(_)));
}

/// Tab is the one control character allowed raw inside a string.
#[test]
fn raw_tab_is_allowed() {
    assert_eq!(single_string("\"a\tb\""), "a\tb");
}

#[test]
fn unterminated_string_at_eof() {
    let err = crate::tokenize(r#""abc"#, &ParseOptions::default()).unwrap_err();
    assert!(matches!(err.kind(), ParseErrorKind::UnterminatedString));
    assert_eq!(err.position().col(), 1);
}

#[test]
fn unterminated_string_at_newline() {
    let err = crate::tokenize("\"ab\ncd\"", &ParseOptions::default()).unwrap_err();
    assert!(matches!(err.kind(), ParseErrorKind::UnterminatedString));
}

#[test]
fn block_string_single_line() {
    assert_eq!(single_string(r#""""hello""""#), "hello");
}

#[test]
fn block_string_strips_common_indent() {
    let source = "\"\"\"\n    first\n      second\n    third\n\"\"\"";
    assert_eq!(single_string(source), "first\n  second\nthird");
}

#[test]
fn block_string_keeps_first_line_indentation() {
    // The opening line is exempt from common-indent computation.
    let source = "\"\"\"abc\n    def\"\"\"";
    assert_eq!(single_string(source), "abc\ndef");
}

#[test]
fn block_string_strips_blank_edge_lines() {
    let source = "\"\"\"\n\n  content\n\n  \n\"\"\"";
    assert_eq!(single_string(source), "content");
}

#[test]
fn block_string_escaped_triple_quote() {
    let source = r#""""esc: \""" done""""#;
    assert_eq!(single_string(source), "esc: \"\"\" done");
}

/// Block strings take line terminators literally, and the tokens after
/// them land on the right line.
#[test]
fn block_string_tracks_lines() {
    let tokens = tokenize_ok("\"\"\"\nmulti\nline\n\"\"\" after");
    assert!(matches!(&tokens[0].kind, TokenKind::Str(s) if s == "multi\nline"));
    assert_eq!(tokens[1].position.line(), 4);
    assert_eq!(tokens[1].position.col(), 5);
}

#[test]
fn unterminated_block_string() {
    let err = crate::tokenize("\"\"\"abc\ndef", &ParseOptions::default()).unwrap_err();
    assert!(matches!(err.kind(), ParseErrorKind::UnterminatedString));
}

/// Quotes inside a block string that are not a terminator are content.
#[test]
fn block_string_single_quotes_are_content() {
    assert_eq!(single_string(r#""""a "b" c""""#), "a \"b\" c");
}
