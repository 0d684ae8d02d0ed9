//! The feature-to-records pipeline.
//!
//! ```text
//! raw text ─ header::split ─▶ (header, body)
//!          ─ Normalizer    ─▶ body without comments or blank lines
//!          ─ Segmenter     ─▶ scenario blocks
//!          ─ record        ─▶ numbered records
//! ```
//!
//! Every stage is a pure function of its input. The pipeline stops at the
//! first failure and never returns partial output.

pub mod header;
pub mod normalize;
pub mod record;
pub mod segment;

use nonempty::NonEmpty;
use tracing::instrument;

pub use self::{
    header::{Header, HeaderError},
    normalize::Normalizer,
    segment::Segmenter,
};
use crate::domain::{Config, Identifier, Record, Suite};

/// Transforms a feature document using the default configuration.
///
/// # Errors
///
/// See [`Transformer::transform`].
pub fn transform(raw: &str) -> Result<NonEmpty<Record>, Error> {
    Transformer::default().transform(raw)
}

/// A configured feature-to-records pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transformer {
    identifier_key: String,
    normalizer: Normalizer,
    segmenter: Segmenter,
}

impl Default for Transformer {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl Transformer {
    /// Creates a pipeline from the document-reading half of `config`.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            identifier_key: config.identifier_key.clone(),
            normalizer: Normalizer::new(config.comment_marker),
            segmenter: Segmenter::new(&config.scenario_keyword),
        }
    }

    /// Transforms a feature document into one record per scenario.
    ///
    /// # Errors
    ///
    /// See [`Transformer::suite`].
    pub fn transform(&self, raw: &str) -> Result<NonEmpty<Record>, Error> {
        self.suite(raw).map(|suite| suite.records)
    }

    /// Transforms a feature document, keeping the resolved identifier
    /// alongside the records.
    ///
    /// # Errors
    ///
    /// - [`Error::Header`] if the front matter is malformed
    /// - [`Error::MissingIdentifier`] if it has no usable identifier
    /// - [`Error::NoScenariosFound`] if the body has no scenario marker
    #[instrument(level = "debug", skip_all)]
    pub fn suite(&self, raw: &str) -> Result<Suite, Error> {
        let (header, body) = header::split(raw)?;
        let identifier = self.resolve_identifier(&header)?;
        tracing::debug!("Resolved identifier {identifier}");

        let body = self.normalizer.normalize(body);
        let blocks = self.segmenter.segment(&body)?;
        tracing::debug!("Found {} scenarios", blocks.len());

        let records = record::build_all(&identifier, blocks);
        Ok(Suite {
            identifier,
            records,
        })
    }

    fn resolve_identifier(&self, header: &Header) -> Result<Identifier, Error> {
        header
            .identifier(&self.identifier_key)
            .ok_or_else(|| Error::MissingIdentifier {
                key: self.identifier_key.clone(),
            })
    }
}

/// Errors that stop the pipeline.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The front matter has no usable identifier.
    #[error("Could not find {key} in front matter")]
    MissingIdentifier {
        /// The front-matter key that was looked up.
        key: String,
    },

    /// The body contains no scenario marker.
    #[error("Could not find any '{keyword}:' scenarios in text")]
    NoScenariosFound {
        /// The scenario keyword that was searched for.
        keyword: String,
    },

    /// The front matter itself could not be read.
    #[error(transparent)]
    Header(#[from] HeaderError),
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOGIN: &str = "---
jira-id: JIRA-9
---
Scenario: Login succeeds
  Given a user
  # note: seed data
  When they submit credentials
Scenario: Login fails
    When they submit bad credentials
";

    #[test]
    fn login_feature() {
        let records = transform(LOGIN).unwrap();

        assert_eq!(
            records,
            NonEmpty::from((
                Record {
                    name: "JIRA-9 - TC1 - Login succeeds".to_string(),
                    script: "Given a user\nWhen they submit credentials".to_string(),
                },
                vec![Record {
                    name: "JIRA-9 - TC2 - Login fails".to_string(),
                    script: "When they submit bad credentials".to_string(),
                }]
            ))
        );
    }

    #[test]
    fn missing_identifier_wins_over_missing_scenarios() {
        let result = transform("---\ntitle: nothing\n---\nno scenarios here");

        assert!(matches!(result, Err(Error::MissingIdentifier { key }) if key == "jira-id"));
    }

    #[test]
    fn no_front_matter_is_missing_identifier() {
        let result = transform("Scenario: a\n  Given b");

        assert!(matches!(result, Err(Error::MissingIdentifier { .. })));
    }

    #[test]
    fn no_scenarios() {
        let result = transform("---\njira-id: X\n---\nFeature: empty\n  # Scenario: commented out");

        assert!(matches!(result, Err(Error::NoScenariosFound { .. })));
    }

    #[test]
    fn header_errors_pass_through() {
        let result = transform("---\njira-id: X\n");

        assert!(matches!(result, Err(Error::Header(HeaderError::Unterminated))));
    }

    #[test]
    fn comment_only_scenario_has_empty_script() {
        let input = "---\njira-id: X\n---\nScenario: a\n  # todo\n\nScenario: b\n  Given c";

        let records = transform(input).unwrap();

        assert_eq!(records.head.script, "");
        assert_eq!(records.last().script, "Given c");
    }

    #[test]
    fn configured_pipeline() {
        let config = Config {
            identifier_key: "suite".to_string(),
            scenario_keyword: "Szenario".to_string(),
            comment_marker: ';',
            ..Config::default()
        };
        let transformer = Transformer::new(&config);
        let input = "---\nsuite: 77\n---\nSzenario: eins\n  Angenommen #1 ; Kommentar\n";

        let records = transformer.transform(input).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records.head.name, "77 - TC1 - eins");
        assert_eq!(records.head.script, "Angenommen #1 ");
    }

    #[test]
    fn suite_keeps_identifier() {
        let suite = Transformer::default().suite(LOGIN).unwrap();

        assert_eq!(suite.identifier.as_str(), "JIRA-9");
        assert_eq!(suite.records.len(), 2);
    }
}
