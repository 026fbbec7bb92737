//! Textual view of a file: numbered raw lines.

/// One raw line of a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    /// Line number (1-indexed).
    pub number: usize,
    /// Line text without its terminator.
    pub text: &'a str,
}

/// A file's raw content as a sequence of numbered lines.
///
/// Always available, whether or not the file parses.
#[derive(Debug, Clone)]
pub struct TextView<'a> {
    lines: Vec<&'a str>,
}

impl<'a> TextView<'a> {
    /// Splits `content` into lines. Handles both `\n` and `\r\n` endings.
    #[must_use]
    pub fn new(content: &'a str) -> Self {
        Self {
            lines: content.lines().collect(),
        }
    }

    /// Iterates over the numbered lines.
    pub fn lines(&self) -> impl Iterator<Item = Line<'a>> + '_ {
        self.lines.iter().copied().enumerate().map(|(i, text)| Line {
            number: i + 1,
            text,
        })
    }

    /// Returns the 1-indexed line, if present.
    #[must_use]
    pub fn line(&self, number: usize) -> Option<Line<'a>> {
        let text = *self.lines.get(number.checked_sub(1)?)?;
        Some(Line { number, text })
    }

    /// Number of lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns true if the file has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
