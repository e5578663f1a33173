use serde::Serialize;

/// A location within a GraphQL source string.
///
/// Lines and columns are 1-based, matching what editors and the
/// reference GraphQL implementations report to humans. The byte offset
/// is 0-based and indexes directly into the source `&str`.
///
/// Columns count Unicode scalar values, not bytes, so a multi-byte
/// character advances the column by exactly one.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
pub struct SourcePosition {
    line: usize,
    col: usize,
    byte_offset: usize,
}

impl SourcePosition {
    /// The position of the very first character of a document.
    pub const DOCUMENT_START: SourcePosition = SourcePosition {
        line: 1,
        col: 1,
        byte_offset: 0,
    };

    pub fn new(line: usize, col: usize, byte_offset: usize) -> Self {
        Self {
            line,
            col,
            byte_offset,
        }
    }

    /// 1-based line number.
    pub fn line(&self) -> usize {
        self.line
    }

    /// 1-based column number, in Unicode scalar values.
    pub fn col(&self) -> usize {
        self.col
    }

    /// 0-based byte offset into the source string.
    pub fn byte_offset(&self) -> usize {
        self.byte_offset
    }
}

impl std::fmt::Display for SourcePosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}
