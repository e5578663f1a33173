/// Options controlling tokenization and parsing.
///
/// The defaults match the permissive behavior of the reference
/// grammar: no interning, no adjacency rejection, no token cap.
#[derive(Clone, Debug, Default)]
pub struct ParseOptions {
    /// Dedup identifier spellings through a
    /// [`NameInterner`](crate::NameInterner). Off by default; lexing
    /// is zero-copy without it.
    pub intern_identifiers: bool,

    /// Reject a name token that starts at the exact byte where a
    /// number literal ended (`123abc`). The lexical grammar would
    /// otherwise happily produce two adjacent tokens, which is almost
    /// always a typo.
    pub reject_numbers_followed_by_names: bool,

    /// Abort with [`TokenLimitExceeded`](crate::ParseErrorKind) as
    /// soon as more than this many tokens (comments included) have
    /// been produced. `None` means unbounded.
    pub max_tokens: Option<usize>,
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn intern_identifiers(mut self, enabled: bool) -> Self {
        self.intern_identifiers = enabled;
        self
    }

    pub fn reject_numbers_followed_by_names(mut self, enabled: bool) -> Self {
        self.reject_numbers_followed_by_names = enabled;
        self
    }

    pub fn max_tokens(mut self, limit: Option<usize>) -> Self {
        self.max_tokens = limit;
        self
    }
}
