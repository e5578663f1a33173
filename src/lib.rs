//! A fast, position-accurate GraphQL tokenizer and recursive-descent
//! parser.
//!
//! The pipeline is `&str` → [`Tokenizer`] → [`TokenStream`] →
//! [`Parser`] → [`ast::Document`]. Each stage can also be used on its
//! own: [`tokenize`] exposes the raw token sequence (comments skipped,
//! positions attached) for tools like highlighters, while [`parse`]
//! runs the whole pipeline.
//!
//! Parsing is strict: the first error aborts with a [`ParseError`]
//! carrying a 1-based line/column [`SourcePosition`], a human-readable
//! message, and a categorized [`ParseErrorKind`]. There is no error
//! recovery and no partial AST.
//!
//! ```
//! let doc = graphql_syntax::parse("{ hero { name } }").unwrap();
//! assert_eq!(doc.definitions.len(), 1);
//! ```

pub mod ast;
mod interner;
mod parse_error;
mod parse_error_kind;
mod parse_options;
mod parser;
mod source_position;
pub mod token;
mod token_stream;
mod tokenizer;

pub use interner::NameInterner;
pub use parse_error::ParseError;
pub use parse_error_kind::ParseErrorKind;
pub use parse_options::ParseOptions;
pub use parser::Parser;
pub use source_position::SourcePosition;
pub use token_stream::TokenStream;
pub use tokenizer::Tokenizer;

use token::Token;

/// Tokenizes `source` into the full token sequence, excluding the
/// trailing `Eof` sentinel.
///
/// Comments are not part of the sequence (they ride along as leading
/// trivia on the token after them) but still count toward
/// [`ParseOptions::max_tokens`]. Characters with no lexical rule
/// appear as [`UnknownChar`](token::TokenKind::UnknownChar) marker
/// tokens rather than aborting, so the sequence stays useful for
/// editor tooling; unterminated strings and malformed numbers are
/// fatal.
pub fn tokenize<'src>(
    source: &'src str,
    options: &ParseOptions,
) -> Result<Vec<Token<'src>>, ParseError> {
    let mut tokenizer = Tokenizer::with_options(source, options);
    let mut tokens = Vec::new();
    loop {
        let token = tokenizer.next_token()?;
        if token.is_eof() {
            return Ok(tokens);
        }
        tokens.push(token);
    }
}

/// Parses a GraphQL document with default options.
pub fn parse(source: &str) -> Result<ast::Document<'_>, ParseError> {
    parse_with_options(source, None, &ParseOptions::default())
}

/// Parses a GraphQL document. The filename, when given, appears in
/// formatted error output only.
pub fn parse_with_options<'src>(
    source: &'src str,
    filename: Option<&str>,
    options: &ParseOptions,
) -> Result<ast::Document<'src>, ParseError> {
    Parser::with_options(source, options)
        .parse_document()
        .map_err(|err| match filename {
            Some(name) => err.with_filename(name),
            None => err,
        })
}

#[cfg(test)]
mod tests;
