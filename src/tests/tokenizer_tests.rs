//! Tests for the basic lexical grammar: punctuators, names, keywords,
//! numbers, comments, and position tracking.

use crate::ParseOptions;
use crate::ParseErrorKind;
use crate::tests::utils::tokenize_ok;
use crate::token::TokenKind;

#[test]
fn punctuators() {
    let tokens = tokenize_ok("! $ & ( ) : = @ [ ] { } | ...");
    let kinds: Vec<&TokenKind<'_>> = tokens.iter().map(|t| &t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            &TokenKind::Bang,
            &TokenKind::Dollar,
            &TokenKind::Amp,
            &TokenKind::LParen,
            &TokenKind::RParen,
            &TokenKind::Colon,
            &TokenKind::Equals,
            &TokenKind::At,
            &TokenKind::LBracket,
            &TokenKind::RBracket,
            &TokenKind::LCurly,
            &TokenKind::RCurly,
            &TokenKind::Pipe,
            &TokenKind::Ellipsis,
        ],
    );
}

#[test]
fn names_and_keywords() {
    let tokens = tokenize_ok("hero type frag1 on _private");
    assert!(matches!(&tokens[0].kind, TokenKind::Identifier(t) if t == "hero"));
    assert!(matches!(tokens[1].kind, TokenKind::Type));
    assert!(matches!(&tokens[2].kind, TokenKind::Identifier(t) if t == "frag1"));
    assert!(matches!(tokens[3].kind, TokenKind::On));
    assert!(matches!(&tokens[4].kind, TokenKind::Identifier(t) if t == "_private"));
}

/// Every keyword spelling lexes to its dedicated kind.
#[test]
fn all_keywords() {
    let source = "on fragment query mutation subscription schema scalar type \
                  extend implements interface union enum directive input \
                  repeatable true false null";
    let tokens = tokenize_ok(source);
    let expected = [
        TokenKind::On,
        TokenKind::Fragment,
        TokenKind::Query,
        TokenKind::Mutation,
        TokenKind::Subscription,
        TokenKind::Schema,
        TokenKind::Scalar,
        TokenKind::Type,
        TokenKind::Extend,
        TokenKind::Implements,
        TokenKind::Interface,
        TokenKind::Union,
        TokenKind::Enum,
        TokenKind::Directive,
        TokenKind::Input,
        TokenKind::Repeatable,
        TokenKind::True,
        TokenKind::False,
        TokenKind::Null,
    ];
    assert_eq!(tokens.len(), expected.len());
    for (token, expected_kind) in tokens.iter().zip(expected.iter()) {
        assert_eq!(&token.kind, expected_kind);
    }
}

/// Keyword matching is exact and case-sensitive; near-misses stay
/// identifiers.
#[test]
fn keyword_near_misses_are_identifiers() {
    let tokens = tokenize_ok("Type types fragmental ON");
    for token in &tokens {
        assert!(
            matches!(token.kind, TokenKind::Identifier(_)),
            "expected identifier, got: {:?}",
            token.kind,
        );
    }
}

#[test]
fn int_and_float_literals() {
    let tokens = tokenize_ok("0 -9 123 1.5 -0.25 1e10 6.02e-23 1E+3");
    let expect = [
        ("0", false),
        ("-9", false),
        ("123", false),
        ("1.5", true),
        ("-0.25", true),
        ("1e10", true),
        ("6.02e-23", true),
        ("1E+3", true),
    ];
    assert_eq!(tokens.len(), expect.len());
    for (token, (raw, is_float)) in tokens.iter().zip(expect.iter()) {
        match &token.kind {
            TokenKind::Int(text) => {
                assert!(!is_float, "{raw} should lex as a float");
                assert_eq!(text, raw);
            }
            TokenKind::Float(text) => {
                assert!(*is_float, "{raw} should lex as an int");
                assert_eq!(text, raw);
            }
            other => panic!("expected a number token, got: {other:?}"),
        }
    }
}

#[test]
fn number_with_leading_zeros_is_rejected() {
    let err = crate::tokenize("01", &ParseOptions::default()).unwrap_err();
    assert!(matches!(
        err.kind(),
        ParseErrorKind::InvalidNumber { literal } if literal == "01",
    ));
}

#[test]
fn exponent_without_digits_is_rejected() {
    let err = crate::tokenize("1.2e", &ParseOptions::default()).unwrap_err();
    assert!(matches!(err.kind(), ParseErrorKind::InvalidNumber { .. }));
}

#[test]
fn lone_minus_is_rejected() {
    let err = crate::tokenize("-", &ParseOptions::default()).unwrap_err();
    assert!(matches!(
        err.kind(),
        ParseErrorKind::InvalidNumber { literal } if literal == "-",
    ));
}

/// `1.` is an int followed by a stray dot, not a float.
#[test]
fn trailing_dot_is_not_a_float() {
    let tokens = tokenize_ok("1.");
    assert!(matches!(&tokens[0].kind, TokenKind::Int(t) if t == "1"));
    assert!(matches!(tokens[1].kind, TokenKind::UnknownChar('.')));
}

/// Without the strict adjacency option, `123abc` lexes as two tokens.
#[test]
fn number_name_adjacency_allowed_by_default() {
    let tokens = tokenize_ok("123abc");
    assert!(matches!(&tokens[0].kind, TokenKind::Int(t) if t == "123"));
    assert!(matches!(&tokens[1].kind, TokenKind::Identifier(t) if t == "abc"));
}

/// Characters outside the lexical grammar become marker tokens rather
/// than aborting tokenization, so a highlighter can keep going.
#[test]
fn unknown_characters_become_marker_tokens() {
    let tokens = tokenize_ok("% hero ?");
    assert!(matches!(tokens[0].kind, TokenKind::UnknownChar('%')));
    assert!(matches!(&tokens[1].kind, TokenKind::Identifier(t) if t == "hero"));
    assert!(matches!(tokens[2].kind, TokenKind::UnknownChar('?')));
}

#[test]
fn commas_and_bom_are_ignored() {
    let tokens = tokenize_ok("\u{FEFF}{ a, b,, c }");
    assert_eq!(tokens.len(), 5);
    assert!(matches!(tokens[0].kind, TokenKind::LCurly));
    assert!(matches!(tokens[4].kind, TokenKind::RCurly));
}

#[test]
fn comments_are_skipped_but_counted_in_columns() {
    let tokens = tokenize_ok("# leading comment\n{ a } # trailing");
    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[0].position.line(), 2);
    assert_eq!(tokens[0].position.col(), 1);
}

#[test]
fn positions_are_one_based() {
    let tokens = tokenize_ok("{ hero }");
    assert_eq!(
        (tokens[0].position.line(), tokens[0].position.col()),
        (1, 1),
    );
    assert_eq!(
        (tokens[1].position.line(), tokens[1].position.col()),
        (1, 3),
    );
    assert_eq!(
        (tokens[2].position.line(), tokens[2].position.col()),
        (1, 8),
    );
}

#[test]
fn byte_offsets_index_into_the_source() {
    let source = "query Foo { bar }";
    let tokens = tokenize_ok(source);
    let bar = &tokens[3];
    let offset = bar.position.byte_offset();
    assert_eq!(&source[offset..offset + 3], "bar");
}

/// `\r`, `\n`, and `\r\n` each count as exactly one line terminator.
#[test]
fn line_terminator_variants() {
    let tokens = tokenize_ok("a\nb\rc\r\nd");
    let positions: Vec<(usize, usize)> = tokens
        .iter()
        .map(|t| (t.position.line(), t.position.col()))
        .collect();
    assert_eq!(positions, vec![(1, 1), (2, 1), (3, 1), (4, 1)]);
}

/// Columns count characters, not bytes.
#[test]
fn multibyte_characters_advance_columns_by_one() {
    let tokens = tokenize_ok("\"héllo\" x");
    assert!(matches!(&tokens[0].kind, TokenKind::Str(s) if s == "héllo"));
    assert_eq!(tokens[1].position.col(), 9);
    // Byte offset still counts bytes.
    assert_eq!(tokens[1].position.byte_offset(), 9);
}

mod proptests {
    use crate::ParseOptions;
    use proptest::prelude::*;

    proptest! {
        /// Tokenization never panics, whatever the input.
        #[test]
        fn tokenize_never_panics(source in ".*") {
            let _ = crate::tokenize(&source, &ParseOptions::default());
        }

        /// Parsing never panics and is deterministic.
        #[test]
        fn parse_is_deterministic(source in ".*") {
            let first = crate::parse(&source);
            let second = crate::parse(&source);
            match (first, second) {
                (Ok(a), Ok(b)) => prop_assert_eq!(a, b),
                (Err(a), Err(b)) => {
                    prop_assert_eq!(a.position(), b.position());
                    prop_assert_eq!(a.kind(), b.kind());
                }
                (a, b) => {
                    return Err(TestCaseError::fail(
                        format!("diverging outcomes: {a:?} vs {b:?}"),
                    ));
                }
            }
        }
    }
}
