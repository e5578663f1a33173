use crate::token::TokenText;
use serde::Serialize;

/// The kind of a single GraphQL token.
///
/// Keywords get dedicated kinds rather than being folded into
/// `Identifier`: the grammar dispatches on them constantly, and every
/// keyword is still accepted wherever a name is expected (GraphQL
/// keywords are contextual, not reserved).
///
/// Two kinds are in-band error markers rather than real grammar tokens:
///
/// - `UnknownChar` records a character the lexical grammar has no rule
///   for. Tokenization continues past it (useful for highlighters); the
///   parser converts it into a fatal error when reached.
/// - `BadUnicodeEscape` records a quoted string whose escapes or
///   encoding were invalid. The error is deferred until the parser
///   consumes the token, matching the reference implementation.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum TokenKind<'src> {
    // Punctuators
    Amp,
    Bang,
    Colon,
    At,
    Dollar,
    Ellipsis,
    Equals,
    LParen,
    RParen,
    LBracket,
    RBracket,
    LCurly,
    RCurly,
    Pipe,

    // Keywords
    On,
    Fragment,
    Query,
    Mutation,
    Subscription,
    Schema,
    Scalar,
    Type,
    Extend,
    Implements,
    Interface,
    Union,
    Enum,
    Directive,
    Input,
    Repeatable,
    True,
    False,
    Null,

    /// A name that is not a keyword.
    Identifier(TokenText<'src>),

    /// An integer literal, carrying its raw source text.
    Int(TokenText<'src>),

    /// A float literal, carrying its raw source text.
    Float(TokenText<'src>),

    /// A string or block-string literal, cooked: escapes resolved and
    /// block-string indentation stripped.
    Str(String),

    /// A quoted string with an invalid escape sequence or invalid
    /// encoding. Carries the raw (uncooked) body of the literal.
    BadUnicodeEscape(String),

    /// A character with no lexical rule.
    UnknownChar(char),

    /// End-of-input sentinel.
    Eof,
}

impl<'src> TokenKind<'src> {
    /// True when both values are the same variant, payloads ignored.
    pub fn same_kind(&self, other: &TokenKind<'src>) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }

    /// The source spelling of a punctuator kind.
    pub fn punctuator_str(&self) -> Option<&'static str> {
        Some(match self {
            TokenKind::Amp => "&",
            TokenKind::Bang => "!",
            TokenKind::Colon => ":",
            TokenKind::At => "@",
            TokenKind::Dollar => "$",
            TokenKind::Ellipsis => "...",
            TokenKind::Equals => "=",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::LCurly => "{",
            TokenKind::RCurly => "}",
            TokenKind::Pipe => "|",
            _ => return None,
        })
    }

    /// The source spelling of a keyword kind.
    pub fn keyword_str(&self) -> Option<&'static str> {
        Some(match self {
            TokenKind::On => "on",
            TokenKind::Fragment => "fragment",
            TokenKind::Query => "query",
            TokenKind::Mutation => "mutation",
            TokenKind::Subscription => "subscription",
            TokenKind::Schema => "schema",
            TokenKind::Scalar => "scalar",
            TokenKind::Type => "type",
            TokenKind::Extend => "extend",
            TokenKind::Implements => "implements",
            TokenKind::Interface => "interface",
            TokenKind::Union => "union",
            TokenKind::Enum => "enum",
            TokenKind::Directive => "directive",
            TokenKind::Input => "input",
            TokenKind::Repeatable => "repeatable",
            TokenKind::True => "true",
            TokenKind::False => "false",
            TokenKind::Null => "null",
            _ => return None,
        })
    }

    /// True for any token the grammar accepts where a name is expected:
    /// identifiers plus every (contextual) keyword.
    pub fn is_name(&self) -> bool {
        matches!(self, TokenKind::Identifier(_)) || self.keyword_str().is_some()
    }

    /// How this token reads in an error message.
    pub fn display(&self) -> String {
        if let Some(text) = self.punctuator_str().or_else(|| self.keyword_str()) {
            return format!("`{text}`");
        }
        match self {
            TokenKind::Identifier(text) => format!("name `{text}`"),
            TokenKind::Int(raw) => format!("integer `{raw}`"),
            TokenKind::Float(raw) => format!("float `{raw}`"),
            TokenKind::Str(_) => "string literal".to_string(),
            TokenKind::BadUnicodeEscape(_) => "malformed string literal".to_string(),
            TokenKind::UnknownChar(ch) => format!("character `{ch}`"),
            TokenKind::Eof => "end of input".to_string(),
            _ => unreachable!("punctuators and keywords handled above"),
        }
    }

    /// How this kind reads in an "expecting ..." list.
    pub fn expected_label(&self) -> &'static str {
        match self {
            TokenKind::Amp => "`&`",
            TokenKind::Bang => "`!`",
            TokenKind::Colon => "`:`",
            TokenKind::At => "`@`",
            TokenKind::Dollar => "`$`",
            TokenKind::Ellipsis => "`...`",
            TokenKind::Equals => "`=`",
            TokenKind::LParen => "`(`",
            TokenKind::RParen => "`)`",
            TokenKind::LBracket => "`[`",
            TokenKind::RBracket => "`]`",
            TokenKind::LCurly => "`{`",
            TokenKind::RCurly => "`}`",
            TokenKind::Pipe => "`|`",
            TokenKind::On => "`on`",
            TokenKind::Fragment => "`fragment`",
            TokenKind::Query => "`query`",
            TokenKind::Mutation => "`mutation`",
            TokenKind::Subscription => "`subscription`",
            TokenKind::Schema => "`schema`",
            TokenKind::Scalar => "`scalar`",
            TokenKind::Type => "`type`",
            TokenKind::Extend => "`extend`",
            TokenKind::Implements => "`implements`",
            TokenKind::Interface => "`interface`",
            TokenKind::Union => "`union`",
            TokenKind::Enum => "`enum`",
            TokenKind::Directive => "`directive`",
            TokenKind::Input => "`input`",
            TokenKind::Repeatable => "`repeatable`",
            TokenKind::True => "`true`",
            TokenKind::False => "`false`",
            TokenKind::Null => "`null`",
            TokenKind::Identifier(_) => "Name",
            TokenKind::Int(_) => "Int",
            TokenKind::Float(_) => "Float",
            TokenKind::Str(_) => "String",
            TokenKind::BadUnicodeEscape(_) => "String",
            TokenKind::UnknownChar(_) => "character",
            TokenKind::Eof => "end of input",
        }
    }
}
