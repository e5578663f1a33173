//! Tests for the buffered lookahead stream.

use crate::TokenStream;
use crate::Tokenizer;
use crate::token::TokenKind;

fn stream(source: &str) -> TokenStream<'_> {
    TokenStream::new(Tokenizer::new(source))
}

#[test]
fn peek_does_not_advance() {
    let mut stream = stream("{ }");
    assert!(matches!(stream.peek().unwrap().kind, TokenKind::LCurly));
    assert!(matches!(stream.peek().unwrap().kind, TokenKind::LCurly));
    assert!(matches!(stream.consume().unwrap().kind, TokenKind::LCurly));
    assert!(matches!(stream.peek().unwrap().kind, TokenKind::RCurly));
}

#[test]
fn peek_nth_looks_ahead() {
    let mut stream = stream("query Foo {");
    assert!(matches!(stream.peek_nth(0).unwrap().kind, TokenKind::Query));
    assert!(matches!(
        stream.peek_nth(1).unwrap().kind,
        TokenKind::Identifier(_),
    ));
    assert!(matches!(stream.peek_nth(2).unwrap().kind, TokenKind::LCurly));
    // Lookahead past the end just sees the Eof sentinel.
    assert!(matches!(stream.peek_nth(10).unwrap().kind, TokenKind::Eof));
    // Buffered lookahead does not consume anything.
    assert!(matches!(stream.consume().unwrap().kind, TokenKind::Query));
}

#[test]
fn consume_past_end_keeps_returning_eof() {
    let mut stream = stream("x");
    assert!(matches!(
        stream.consume().unwrap().kind,
        TokenKind::Identifier(_),
    ));
    assert!(matches!(stream.consume().unwrap().kind, TokenKind::Eof));
    assert!(matches!(stream.consume().unwrap().kind, TokenKind::Eof));
}

/// Lexical errors surface through the stream on the pull that reaches
/// them, not before.
#[test]
fn lex_errors_surface_on_reach() {
    let mut stream = stream("a \"unterminated");
    assert!(stream.peek().is_ok());
    assert!(matches!(
        stream.consume().unwrap().kind,
        TokenKind::Identifier(_),
    ));
    assert!(stream.peek().is_err());
}
