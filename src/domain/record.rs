use nonempty::NonEmpty;
use serde::Serialize;

use crate::domain::Identifier;

/// A single scenario cut out of a feature document.
///
/// Blocks are produced in document order by the scenario segmenter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioBlock {
    /// The text following the scenario marker on its line, trimmed.
    pub title: String,

    /// Everything after the marker line up to the next marker or the end of
    /// the document, verbatim.
    pub body: String,
}

impl ScenarioBlock {
    /// Creates a block from a title and body.
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

/// An exported test case: one row of the import file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    /// `<identifier> - TC<n> - <title>`
    pub name: String,

    /// The scenario body with its common left margin removed.
    pub script: String,
}

/// The records exported from one feature document, with the identifier they
/// were named after.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suite {
    /// The identifier resolved from the document's front matter.
    pub identifier: Identifier,

    /// One record per scenario, in document order.
    pub records: NonEmpty<Record>,
}
