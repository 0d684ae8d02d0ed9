//! Comment and blank-line removal.

/// Strips authoring aids from a feature body.
///
/// Comments run from the comment marker to the end of the line. Lines left
/// empty or whitespace-only are dropped. Everything else, indentation
/// included, is passed through in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Normalizer {
    comment_marker: char,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new('#')
    }
}

impl Normalizer {
    /// Creates a normalizer that treats `comment_marker` as the start of a
    /// comment.
    #[must_use]
    pub const fn new(comment_marker: char) -> Self {
        Self { comment_marker }
    }

    /// Normalizes `body`.
    ///
    /// The surviving lines are joined with `\n`, without a trailing newline.
    #[must_use]
    pub fn normalize(&self, body: &str) -> String {
        body.lines()
            .map(|line| self.strip_comment(line))
            .filter(|line| !line.trim().is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn strip_comment<'a>(&self, line: &'a str) -> &'a str {
        line.find(self.comment_marker)
            .map_or(line, |index| &line[..index])
    }
}
