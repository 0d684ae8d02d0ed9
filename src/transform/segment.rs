//! Splitting a feature body into scenarios.

use std::iter;

use nonempty::NonEmpty;

use crate::{domain::ScenarioBlock, transform::Error};

/// Cuts normalized feature text into [`ScenarioBlock`]s.
///
/// Every occurrence of the marker (keyword followed by a colon) opens a new
/// block, wherever it appears. There is no notion of quoting, so marker text
/// inside a step also starts a block. Text before the first marker, such as
/// the `Feature:` line, is discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segmenter {
    keyword: String,
    marker: String,
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::new("Scenario")
    }
}

impl Segmenter {
    /// Creates a segmenter for blocks opened by `<keyword>:`.
    #[must_use]
    pub fn new(keyword: &str) -> Self {
        Self {
            keyword: keyword.to_string(),
            marker: format!("{keyword}:"),
        }
    }

    /// Splits `text` into blocks, in document order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoScenariosFound`] if the marker never occurs.
    pub fn segment(&self, text: &str) -> Result<NonEmpty<ScenarioBlock>, Error> {
        let starts: Vec<usize> = text
            .match_indices(self.marker.as_str())
            .map(|(index, _)| index)
            .collect();

        let ends = starts.iter().skip(1).copied().chain(iter::once(text.len()));

        let blocks = starts
            .iter()
            .zip(ends)
            .map(|(&start, end)| split_block(&text[start + self.marker.len()..end]))
            .collect();

        NonEmpty::from_vec(blocks).ok_or_else(|| Error::NoScenariosFound {
            keyword: self.keyword.clone(),
        })
    }
}

/// Splits the text following a marker into the rest of its line (the title)
/// and everything after it (the body).
fn split_block(text: &str) -> ScenarioBlock {
    let (title, body) = text.split_once('\n').unwrap_or((text, ""));
    ScenarioBlock::new(title.trim(), body)
}
