mod comment;
mod token_kind;
mod token_text;

pub use comment::Comment;
pub use token_kind::TokenKind;
pub use token_text::TokenText;

use crate::SourcePosition;
use smallvec::SmallVec;

/// Comment trivia carried on a token. Most tokens have none; two
/// inline slots cover the typical described definition.
pub type CommentVec = SmallVec<[Comment; 2]>;

/// A single token, annotated with the position of its first character
/// and any own-line comments that appeared since the previous token.
#[derive(Clone, Debug, PartialEq)]
pub struct Token<'src> {
    pub kind: TokenKind<'src>,
    pub position: SourcePosition,
    pub leading_comments: CommentVec,
}

impl<'src> Token<'src> {
    pub fn new(kind: TokenKind<'src>, position: SourcePosition) -> Self {
        Self {
            kind,
            position,
            leading_comments: CommentVec::new(),
        }
    }

    pub fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }
}
