use crate::ParseError;
use crate::Tokenizer;
use crate::token::Token;
use std::collections::VecDeque;

/// A buffered token stream with unbounded lookahead.
///
/// Tokens are pulled from the [`Tokenizer`] lazily, so a token cap can
/// fire before an adversarially large document is ever materialized in
/// full. The tokenizer keeps yielding `Eof` sentinels at end of input,
/// which means `peek`/`peek_nth` always have a token to show.
pub struct TokenStream<'src> {
    tokenizer: Tokenizer<'src>,
    buffer: VecDeque<Token<'src>>,
}

impl<'src> TokenStream<'src> {
    pub fn new(tokenizer: Tokenizer<'src>) -> Self {
        Self {
            tokenizer,
            buffer: VecDeque::new(),
        }
    }

    /// The next unconsumed token.
    pub fn peek(&mut self) -> Result<&Token<'src>, ParseError> {
        self.peek_nth(0)
    }

    /// The token `n` positions ahead (`peek_nth(0) == peek()`).
    pub fn peek_nth(&mut self, n: usize) -> Result<&Token<'src>, ParseError> {
        self.fill(n + 1)?;
        Ok(&self.buffer[n])
    }

    /// Consumes and returns the next token.
    pub fn consume(&mut self) -> Result<Token<'src>, ParseError> {
        self.fill(1)?;
        Ok(self
            .buffer
            .pop_front()
            .expect("buffer holds at least one token after fill"))
    }

    fn fill(&mut self, count: usize) -> Result<(), ParseError> {
        while self.buffer.len() < count {
            let token = self.tokenizer.next_token()?;
            self.buffer.push_back(token);
        }
        Ok(())
    }
}
