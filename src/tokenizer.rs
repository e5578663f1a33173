use crate::NameInterner;
use crate::ParseError;
use crate::ParseErrorKind;
use crate::ParseOptions;
use crate::SourcePosition;
use crate::token::Comment;
use crate::token::CommentVec;
use crate::token::Token;
use crate::token::TokenKind;
use crate::token::TokenText;
use std::sync::Arc;

/// A hand-written lexical state machine over a GraphQL source string.
///
/// Produces one [`Token`] per call to [`next_token`](Self::next_token),
/// ending with an endless stream of `Eof` sentinels. Whitespace, commas
/// and line terminators are skipped; comments are counted against the
/// token cap, attached as leading trivia to the next token when they
/// own their line, and otherwise dropped.
///
/// Identifier and number tokens borrow from the source string, so
/// tokenization allocates only for string literals (which must be
/// cooked) and comments.
pub struct Tokenizer<'src> {
    source: &'src str,
    offset: usize,
    line: usize,
    col: usize,
    last_char_was_cr: bool,
    pending_comments: CommentVec,
    interner: Option<Arc<NameInterner>>,
    reject_numbers_followed_by_names: bool,
    max_tokens: Option<usize>,
    tokens_emitted: usize,
    /// Byte range of the most recently emitted number literal, cleared
    /// by any other token. Used for the number/name adjacency check.
    last_number_span: Option<(usize, usize)>,
    /// Line of the most recently emitted token; a comment on the same
    /// line trails that token and is never description material.
    last_token_line: usize,
    reached_eof: bool,
}

impl<'src> Tokenizer<'src> {
    pub fn new(source: &'src str) -> Self {
        Self::with_options(source, &ParseOptions::default())
    }

    pub fn with_options(source: &'src str, options: &ParseOptions) -> Self {
        let interner = options
            .intern_identifiers
            .then(|| Arc::new(NameInterner::new()));
        Self::build(source, options, interner)
    }

    /// Like [`with_options`](Self::with_options), but interning into a
    /// caller-provided table so spellings are shared across documents.
    pub fn with_shared_interner(
        source: &'src str,
        options: &ParseOptions,
        interner: Arc<NameInterner>,
    ) -> Self {
        Self::build(source, options, Some(interner))
    }

    fn build(
        source: &'src str,
        options: &ParseOptions,
        interner: Option<Arc<NameInterner>>,
    ) -> Self {
        Self {
            source,
            offset: 0,
            line: 1,
            col: 1,
            last_char_was_cr: false,
            pending_comments: CommentVec::new(),
            interner,
            reject_numbers_followed_by_names: options.reject_numbers_followed_by_names,
            max_tokens: options.max_tokens,
            tokens_emitted: 0,
            last_number_span: None,
            last_token_line: 0,
            reached_eof: false,
        }
    }

    /// The interner in use, if identifier interning is enabled.
    pub fn interner(&self) -> Option<&Arc<NameInterner>> {
        self.interner.as_ref()
    }

    /// Produces the next token. After the end of input this keeps
    /// returning `Eof` tokens, which simplifies buffered lookahead.
    pub fn next_token(&mut self) -> Result<Token<'src>, ParseError> {
        loop {
            self.skip_ignored();
            let start = self.current_position();
            let Some(ch) = self.peek_char() else {
                self.reached_eof = true;
                return self.emit(TokenKind::Eof, start);
            };
            return match ch {
                '#' => {
                    self.lex_comment(start)?;
                    continue;
                }
                '&' => self.lex_single(TokenKind::Amp, start),
                '!' => self.lex_single(TokenKind::Bang, start),
                ':' => self.lex_single(TokenKind::Colon, start),
                '@' => self.lex_single(TokenKind::At, start),
                '$' => self.lex_single(TokenKind::Dollar, start),
                '=' => self.lex_single(TokenKind::Equals, start),
                '(' => self.lex_single(TokenKind::LParen, start),
                ')' => self.lex_single(TokenKind::RParen, start),
                '[' => self.lex_single(TokenKind::LBracket, start),
                ']' => self.lex_single(TokenKind::RBracket, start),
                '{' => self.lex_single(TokenKind::LCurly, start),
                '}' => self.lex_single(TokenKind::RCurly, start),
                '|' => self.lex_single(TokenKind::Pipe, start),
                '.' => self.lex_dot_or_ellipsis(start),
                '"' => self.lex_string(start),
                c if is_name_start(c) => self.lex_name(start),
                c if c == '-' || c.is_ascii_digit() => self.lex_number(start),
                other => {
                    self.consume_char();
                    self.emit(TokenKind::UnknownChar(other), start)
                }
            };
        }
    }

    // ------------------------------------------------------------------
    // Character-level plumbing

    fn remaining(&self) -> &'src str {
        &self.source[self.offset..]
    }

    fn peek_char(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    fn peek_char_nth(&self, n: usize) -> Option<char> {
        self.remaining().chars().nth(n)
    }

    fn current_position(&self) -> SourcePosition {
        SourcePosition::new(self.line, self.col, self.offset)
    }

    /// Consumes one character, updating line/col bookkeeping. `\r\n`
    /// counts as a single line terminator.
    fn consume_char(&mut self) -> Option<char> {
        let ch = self.peek_char()?;
        self.offset += ch.len_utf8();
        match ch {
            '\r' => {
                self.line += 1;
                self.col = 1;
                self.last_char_was_cr = true;
            }
            '\n' => {
                if !self.last_char_was_cr {
                    self.line += 1;
                    self.col = 1;
                }
                self.last_char_was_cr = false;
            }
            _ => {
                self.col += 1;
                self.last_char_was_cr = false;
            }
        }
        Some(ch)
    }

    /// Skips whitespace, commas, line terminators, and the BOM.
    fn skip_ignored(&mut self) {
        while let Some(ch) = self.peek_char() {
            match ch {
                ' ' | '\t' | ',' | '\n' | '\r' | '\u{FEFF}' => {
                    self.consume_char();
                }
                _ => break,
            }
        }
    }

    // ------------------------------------------------------------------
    // Emission and limits

    /// Counts a produced token (or comment) against the cap.
    fn bump_token_count(&mut self, position: SourcePosition) -> Result<(), ParseError> {
        self.tokens_emitted += 1;
        if let Some(max) = self.max_tokens
            && self.tokens_emitted > max
        {
            return Err(ParseError::new(
                "This query is too large to execute.",
                position,
                ParseErrorKind::TokenLimitExceeded { limit: max },
            ));
        }
        Ok(())
    }

    fn emit(
        &mut self,
        kind: TokenKind<'src>,
        position: SourcePosition,
    ) -> Result<Token<'src>, ParseError> {
        if !matches!(kind, TokenKind::Eof) {
            self.bump_token_count(position)?;
        }
        self.last_token_line = position.line();
        self.last_number_span = match kind {
            TokenKind::Int(_) | TokenKind::Float(_) => {
                Some((position.byte_offset(), self.offset))
            }
            _ => None,
        };
        Ok(Token {
            kind,
            position,
            leading_comments: std::mem::take(&mut self.pending_comments),
        })
    }

    fn lex_single(
        &mut self,
        kind: TokenKind<'src>,
        start: SourcePosition,
    ) -> Result<Token<'src>, ParseError> {
        self.consume_char();
        self.emit(kind, start)
    }

    // ------------------------------------------------------------------
    // Comments

    fn lex_comment(&mut self, start: SourcePosition) -> Result<(), ParseError> {
        self.bump_token_count(start)?;
        self.consume_char(); // '#'
        let rest = self.remaining();
        let len = memchr::memchr2(b'\n', b'\r', rest.as_bytes()).unwrap_or(rest.len());
        let text = &rest[..len];
        self.offset += len;
        self.col += text.chars().count();
        self.last_char_was_cr = false;
        // Comments trailing a token on the same line are dropped; only
        // own-line comments can become descriptions.
        if start.line() != self.last_token_line {
            self.pending_comments.push(Comment {
                text: text.to_string(),
                position: start,
            });
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Names and keywords

    fn lex_name(&mut self, start: SourcePosition) -> Result<Token<'src>, ParseError> {
        let rest = self.remaining();
        let len = rest
            .bytes()
            .position(|b| !is_name_byte(b))
            .unwrap_or(rest.len());
        let text = &rest[..len];
        // Names are ASCII, so bytes == chars.
        self.offset += len;
        self.col += len;
        self.last_char_was_cr = false;

        if self.reject_numbers_followed_by_names
            && let Some((num_start, num_end)) = self.last_number_span
            && num_end == start.byte_offset()
        {
            let number = self.source[num_start..num_end].to_string();
            return Err(ParseError::new(
                format!("number `{number}` immediately followed by name `{text}`"),
                start,
                ParseErrorKind::NumberFollowedByName {
                    number,
                    name: text.to_string(),
                },
            ));
        }

        let kind = match text {
            "on" => TokenKind::On,
            "fragment" => TokenKind::Fragment,
            "query" => TokenKind::Query,
            "mutation" => TokenKind::Mutation,
            "subscription" => TokenKind::Subscription,
            "schema" => TokenKind::Schema,
            "scalar" => TokenKind::Scalar,
            "type" => TokenKind::Type,
            "extend" => TokenKind::Extend,
            "implements" => TokenKind::Implements,
            "interface" => TokenKind::Interface,
            "union" => TokenKind::Union,
            "enum" => TokenKind::Enum,
            "directive" => TokenKind::Directive,
            "input" => TokenKind::Input,
            "repeatable" => TokenKind::Repeatable,
            "true" => TokenKind::True,
            "false" => TokenKind::False,
            "null" => TokenKind::Null,
            _ => TokenKind::Identifier(self.name_text(text)),
        };
        self.emit(kind, start)
    }

    fn name_text(&self, text: &'src str) -> TokenText<'src> {
        match &self.interner {
            Some(interner) => TokenText::Shared(interner.intern(text)),
            None => TokenText::Borrowed(text),
        }
    }

    // ------------------------------------------------------------------
    // Punctuator oddball

    fn lex_dot_or_ellipsis(
        &mut self,
        start: SourcePosition,
    ) -> Result<Token<'src>, ParseError> {
        if self.remaining().starts_with("...") {
            self.consume_char();
            self.consume_char();
            self.consume_char();
            return self.emit(TokenKind::Ellipsis, start);
        }
        // A lone `.` (or `..`) has no lexical rule.
        self.consume_char();
        self.emit(TokenKind::UnknownChar('.'), start)
    }

    // ------------------------------------------------------------------
    // Numbers

    fn lex_number(&mut self, start: SourcePosition) -> Result<Token<'src>, ParseError> {
        let num_start = self.offset;
        let mut is_float = false;

        if self.peek_char() == Some('-') {
            self.consume_char();
        }

        match self.peek_char() {
            Some('0') => {
                self.consume_char();
                if let Some(ch) = self.peek_char()
                    && ch.is_ascii_digit()
                {
                    return Err(self.number_error(start, num_start, "leading zeros are not allowed"));
                }
            }
            Some(ch) if ch.is_ascii_digit() => {
                self.consume_digits();
            }
            _ => {
                return Err(ParseError::new(
                    "unexpected `-`: a negative number needs at least one digit",
                    start,
                    ParseErrorKind::InvalidNumber {
                        literal: "-".to_string(),
                    },
                ));
            }
        }

        if self.peek_char() == Some('.')
            && let Some(next) = self.peek_char_nth(1)
            && next.is_ascii_digit()
        {
            is_float = true;
            self.consume_char();
            self.consume_digits();
        }

        if let Some(ch) = self.peek_char()
            && (ch == 'e' || ch == 'E')
        {
            is_float = true;
            self.consume_char();
            if let Some(sign) = self.peek_char()
                && (sign == '+' || sign == '-')
            {
                self.consume_char();
            }
            match self.peek_char() {
                Some(ch) if ch.is_ascii_digit() => self.consume_digits(),
                _ => {
                    return Err(self.number_error(
                        start,
                        num_start,
                        "exponent must have at least one digit",
                    ));
                }
            }
        }

        let raw = &self.source[num_start..self.offset];
        let kind = if is_float {
            TokenKind::Float(TokenText::Borrowed(raw))
        } else {
            TokenKind::Int(TokenText::Borrowed(raw))
        };
        self.emit(kind, start)
    }

    fn consume_digits(&mut self) {
        while let Some(ch) = self.peek_char()
            && ch.is_ascii_digit()
        {
            self.consume_char();
        }
    }

    /// Builds an `InvalidNumber` error, swallowing the rest of the
    /// number-ish text so the literal in the error reads naturally.
    fn number_error(
        &mut self,
        start: SourcePosition,
        num_start: usize,
        detail: &str,
    ) -> ParseError {
        while let Some(ch) = self.peek_char()
            && (ch.is_ascii_alphanumeric() || ch == '.' || ch == '+' || ch == '-')
        {
            self.consume_char();
        }
        let literal = self.source[num_start..self.offset].to_string();
        ParseError::new(
            format!("invalid number `{literal}`: {detail}"),
            start,
            ParseErrorKind::InvalidNumber { literal },
        )
    }

    // ------------------------------------------------------------------
    // Strings

    fn lex_string(&mut self, start: SourcePosition) -> Result<Token<'src>, ParseError> {
        if self.remaining().starts_with("\"\"\"") {
            self.lex_block_string(start)
        } else {
            self.lex_quoted_string(start)
        }
    }

    /// Lexes a `"..."` literal, cooking escapes as it goes. Invalid
    /// escapes and raw control characters do not abort tokenization:
    /// they downgrade the token to `BadUnicodeEscape`, which the parser
    /// turns into an error when it reaches the literal. Unterminated
    /// literals are fatal immediately.
    fn lex_quoted_string(
        &mut self,
        start: SourcePosition,
    ) -> Result<Token<'src>, ParseError> {
        self.consume_char(); // opening '"'
        let body_start = self.offset;
        let mut cooked = String::new();
        let mut bad_escape = false;

        loop {
            match self.peek_char() {
                None | Some('\n') | Some('\r') => {
                    return Err(ParseError::new(
                        "unterminated string literal",
                        start,
                        ParseErrorKind::UnterminatedString,
                    ));
                }
                Some('"') => {
                    let body_end = self.offset;
                    self.consume_char();
                    let kind = if bad_escape {
                        TokenKind::BadUnicodeEscape(
                            self.source[body_start..body_end].to_string(),
                        )
                    } else {
                        TokenKind::Str(cooked)
                    };
                    return self.emit(kind, start);
                }
                Some('\\') => {
                    self.consume_char();
                    match self.peek_char() {
                        Some('"') => {
                            self.consume_char();
                            cooked.push('"');
                        }
                        Some('\\') => {
                            self.consume_char();
                            cooked.push('\\');
                        }
                        Some('/') => {
                            self.consume_char();
                            cooked.push('/');
                        }
                        Some('b') => {
                            self.consume_char();
                            cooked.push('\u{0008}');
                        }
                        Some('f') => {
                            self.consume_char();
                            cooked.push('\u{000C}');
                        }
                        Some('n') => {
                            self.consume_char();
                            cooked.push('\n');
                        }
                        Some('r') => {
                            self.consume_char();
                            cooked.push('\r');
                        }
                        Some('t') => {
                            self.consume_char();
                            cooked.push('\t');
                        }
                        Some('u') => {
                            self.consume_char();
                            if !self.lex_unicode_escape(&mut cooked) {
                                bad_escape = true;
                            }
                        }
                        // Unknown escape: mark bad, leave the char to
                        // be scanned as ordinary content.
                        Some(_) | None => bad_escape = true,
                    }
                }
                Some(c) if c < ' ' && c != '\t' => {
                    self.consume_char();
                    bad_escape = true;
                }
                Some(c) => {
                    self.consume_char();
                    cooked.push(c);
                }
            }
        }
    }

    /// Resolves the tail of a `\u` escape (the `\u` itself already
    /// consumed): either exactly four hex digits, with surrogate pairs
    /// combined, or a braced `\u{...}` form. Returns false when the
    /// escape is malformed; consumed characters stay consumed and the
    /// remainder is rescanned as string content.
    fn lex_unicode_escape(&mut self, cooked: &mut String) -> bool {
        if self.peek_char() == Some('{') {
            self.consume_char();
            let mut value: u32 = 0;
            let mut digits = 0usize;
            while let Some(digit) = self.peek_char().and_then(|c| c.to_digit(16)) {
                self.consume_char();
                value = value.saturating_mul(16).saturating_add(digit);
                digits += 1;
            }
            if digits == 0 || self.peek_char() != Some('}') {
                return false;
            }
            self.consume_char();
            return match char::from_u32(value) {
                Some(c) => {
                    cooked.push(c);
                    true
                }
                None => false,
            };
        }

        let Some(first) = self.lex_four_hex() else {
            return false;
        };
        if (0xD800..=0xDBFF).contains(&first) {
            // High surrogate: a low surrogate escape must follow.
            if self.peek_char() != Some('\\') || self.peek_char_nth(1) != Some('u') {
                return false;
            }
            self.consume_char();
            self.consume_char();
            let Some(second) = self.lex_four_hex() else {
                return false;
            };
            if !(0xDC00..=0xDFFF).contains(&second) {
                return false;
            }
            let code_point = 0x10000 + ((first - 0xD800) << 10) + (second - 0xDC00);
            match char::from_u32(code_point) {
                Some(c) => {
                    cooked.push(c);
                    true
                }
                None => false,
            }
        } else if (0xDC00..=0xDFFF).contains(&first) {
            // Lone low surrogate.
            false
        } else {
            match char::from_u32(first) {
                Some(c) => {
                    cooked.push(c);
                    true
                }
                None => false,
            }
        }
    }

    fn lex_four_hex(&mut self) -> Option<u32> {
        let mut value = 0u32;
        for _ in 0..4 {
            let digit = self.peek_char().and_then(|c| c.to_digit(16))?;
            self.consume_char();
            value = value * 16 + digit;
        }
        Some(value)
    }

    /// Lexes a `"""..."""` block string. The only escape is `\"""`;
    /// everything else, line terminators included, is content. The
    /// cooked value has common indentation and blank first/last lines
    /// stripped.
    fn lex_block_string(
        &mut self,
        start: SourcePosition,
    ) -> Result<Token<'src>, ParseError> {
        self.consume_char();
        self.consume_char();
        self.consume_char();
        let mut raw = String::new();
        loop {
            if self.remaining().starts_with("\\\"\"\"") {
                for _ in 0..4 {
                    self.consume_char();
                }
                raw.push_str("\"\"\"");
                continue;
            }
            if self.remaining().starts_with("\"\"\"") {
                self.consume_char();
                self.consume_char();
                self.consume_char();
                break;
            }
            match self.consume_char() {
                Some(c) => raw.push(c),
                None => {
                    return Err(ParseError::new(
                        "unterminated block string",
                        start,
                        ParseErrorKind::UnterminatedString,
                    ));
                }
            }
        }
        let kind = TokenKind::Str(trim_block_string_indent(&raw));
        self.emit(kind, start)
    }
}

impl<'src> Iterator for Tokenizer<'src> {
    type Item = Result<Token<'src>, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.reached_eof {
            return None;
        }
        Some(self.next_token())
    }
}

/// Strips the common indentation of all lines after the first, plus
/// leading and trailing blank lines, per the block-string value rules.
fn trim_block_string_indent(raw: &str) -> String {
    let lines: Vec<&str> = raw.lines().collect();

    fn indent_of(line: &str) -> usize {
        line.bytes()
            .take_while(|b| *b == b' ' || *b == b'\t')
            .count()
    }

    let common_indent = lines
        .iter()
        .skip(1)
        .filter(|line| indent_of(line) < line.len())
        .map(|line| indent_of(line))
        .min()
        .unwrap_or(0);

    let mut out: Vec<&str> = lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            if i == 0 || line.len() < common_indent {
                *line
            } else {
                &line[common_indent..]
            }
        })
        .collect();

    while out.first().is_some_and(|line| line.trim().is_empty()) {
        out.remove(0);
    }
    while out.last().is_some_and(|line| line.trim().is_empty()) {
        out.pop();
    }

    out.join("\n")
}

fn is_name_start(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

fn is_name_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}
