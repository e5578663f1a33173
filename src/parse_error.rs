use crate::ParseErrorKind;
use crate::SourcePosition;

/// A tokenization or parse error with location information.
///
/// Carries a human-readable message, the position where the error was
/// detected, a categorized [`ParseErrorKind`] for programmatic
/// handling, and (optionally) the name of the file being parsed.
#[derive(Clone, Debug, thiserror::Error)]
#[error("{}", self.format_oneline())]
pub struct ParseError {
    message: String,
    position: SourcePosition,
    filename: Option<String>,
    kind: ParseErrorKind,
}

impl ParseError {
    pub fn new(
        message: impl Into<String>,
        position: SourcePosition,
        kind: ParseErrorKind,
    ) -> Self {
        Self {
            message: message.into(),
            position,
            filename: None,
            kind,
        }
    }

    /// Attaches a file name, used in formatted output.
    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    /// The human-readable error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Where the error was detected.
    pub fn position(&self) -> SourcePosition {
        self.position
    }

    /// The categorized error kind.
    pub fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }

    pub fn filename(&self) -> Option<&str> {
        self.filename.as_deref()
    }

    /// Formats this error as a single-line summary:
    ///
    /// ```text
    /// schema.graphql:5:12: error: unexpected `}`, expecting Name
    /// ```
    pub fn format_oneline(&self) -> String {
        let file_name = self.filename.as_deref().unwrap_or("<input>");
        format!(
            "{file_name}:{}:{}: error: {}",
            self.position.line(),
            self.position.col(),
            self.message,
        )
    }

    /// Formats this error as a multi-line diagnostic:
    ///
    /// ```text
    /// error: unexpected `}`, expecting Name
    ///   --> schema.graphql:5:12
    ///    |
    ///  5 |     userName }
    ///    |              ^
    /// ```
    ///
    /// Pass the source text to include the snippet; with `None` only
    /// the header and location lines are produced.
    pub fn format_detailed(&self, source: Option<&str>) -> String {
        let mut output = String::new();

        output.push_str("error: ");
        output.push_str(&self.message);
        output.push('\n');

        let file_name = self.filename.as_deref().unwrap_or("<input>");
        output.push_str(&format!(
            "  --> {file_name}:{}:{}\n",
            self.position.line(),
            self.position.col(),
        ));

        if let Some(src) = source
            && let Some(snippet) = self.format_source_snippet(src)
        {
            output.push_str(&snippet);
        }

        output
    }

    fn format_source_snippet(&self, source: &str) -> Option<String> {
        let line_idx = self.position.line().checked_sub(1)?;
        let line_content = source.lines().nth(line_idx)?;

        let display_line_num = self.position.line();
        let line_num_width = display_line_num.to_string().len().max(2);

        let mut output = String::new();
        output.push_str(&format!("{:>width$} |\n", "", width = line_num_width));
        output.push_str(&format!(
            "{display_line_num:>line_num_width$} | {line_content}\n"
        ));
        output.push_str(&format!(
            "{:>width$} | {:>padding$}^\n",
            "",
            "",
            width = line_num_width,
            padding = self.position.col().saturating_sub(1),
        ));

        Some(output)
    }
}
