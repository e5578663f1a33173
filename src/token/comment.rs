use crate::SourcePosition;
use serde::Serialize;

/// A `#` comment skipped by the tokenizer and carried as trivia on the
/// token that follows it.
///
/// Only comments that start their own line are retained; a comment
/// trailing other content on the same line can never serve as a
/// definition description, which is the one thing comment trivia is
/// consulted for.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Comment {
    /// Comment text after the `#`, up to (not including) the line
    /// terminator. Leading whitespace is preserved here; description
    /// extraction strips a single leading space.
    pub text: String,

    /// Position of the `#` character.
    pub position: SourcePosition,
}
