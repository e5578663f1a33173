use serde::Serialize;
use serde::Serializer;
use std::sync::Arc;

/// The text of an identifier or number token.
///
/// Tokenization is zero-copy by default: token text borrows directly
/// from the source string. When identifier interning is enabled, each
/// distinct identifier spelling is stored once in a
/// [`NameInterner`](crate::NameInterner) and shared via `Arc`, which
/// lets repeated names in large documents (and across documents, when
/// the interner is shared) alias a single allocation.
///
/// Equality, ordering-by-content and hashing ignore which arm the text
/// lives in, so interned and borrowed parses of the same document
/// produce equal values.
#[derive(Clone, Debug)]
pub enum TokenText<'src> {
    /// Borrowed directly from the source string.
    Borrowed(&'src str),
    /// Interned and shared across tokens (and possibly across parses).
    Shared(Arc<str>),
}

impl TokenText<'_> {
    pub fn as_str(&self) -> &str {
        match self {
            TokenText::Borrowed(text) => text,
            TokenText::Shared(text) => text,
        }
    }

    /// True if this text is backed by an interner entry.
    pub fn is_shared(&self) -> bool {
        matches!(self, TokenText::Shared(_))
    }
}

impl std::ops::Deref for TokenText<'_> {
    type Target = str;

    fn deref(&self) -> &str {
        self.as_str()
    }
}

impl AsRef<str> for TokenText<'_> {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl PartialEq for TokenText<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for TokenText<'_> {}

impl PartialEq<str> for TokenText<'_> {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for TokenText<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl std::hash::Hash for TokenText<'_> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl std::fmt::Display for TokenText<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'src> From<&'src str> for TokenText<'src> {
    fn from(text: &'src str) -> Self {
        TokenText::Borrowed(text)
    }
}

impl Serialize for TokenText<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
