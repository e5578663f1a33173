/// Categorized error kinds for programmatic handling.
///
/// Tools can pattern-match on these without parsing message strings.
/// The `#[error]` strings are short category labels; the full
/// human-readable message lives on [`ParseError`](crate::ParseError).
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ParseErrorKind {
    /// A character the lexical grammar has no rule for.
    #[error("unknown character")]
    UnknownCharacter { found: char },

    /// A quoted string or block string left open at a line terminator
    /// (quoted strings only) or end of input.
    #[error("unterminated string literal")]
    UnterminatedString,

    /// A malformed number literal: leading zeros, a bare `-`, or an
    /// exponent with no digits.
    #[error("invalid number literal")]
    InvalidNumber { literal: String },

    /// A name token starting at the exact byte where a number literal
    /// ended. Only raised when
    /// [`reject_numbers_followed_by_names`](crate::ParseOptions) is set.
    #[error("number immediately followed by a name")]
    NumberFollowedByName { number: String, name: String },

    /// A quoted string whose escape sequences or encoding were
    /// invalid. Detected at tokenization time but raised when the
    /// parser reaches the literal.
    #[error("bad unicode escape sequence")]
    BadUnicodeEscape { literal: String },

    /// The parser found a token that fits none of the grammar rules
    /// valid at that point. `expected` lists the token kinds that
    /// would have been accepted.
    #[error("unexpected token")]
    UnexpectedToken {
        expected: Vec<String>,
        found: String,
    },

    /// Input ended in the middle of a grammar production.
    #[error("unexpected end of input")]
    UnexpectedEof { expected: Vec<String> },

    /// More than [`max_tokens`](crate::ParseOptions) tokens were
    /// produced.
    #[error("token limit exceeded")]
    TokenLimitExceeded { limit: usize },
}
