//! Front-matter extraction.
//!
//! A feature document may open with a YAML block fenced by `---` lines:
//!
//! ```text
//! ---
//! jira-id: JIRA-9
//! ---
//! Feature: Login
//! ```
//!
//! [`split`] separates that block from the rest of the document without
//! touching a single byte of the body.

use serde_yaml::{Mapping, Value};

use crate::domain::Identifier;

const FENCE: &str = "---";
const BOM: char = '\u{feff}';

/// The key-value metadata found in a document's front matter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Header(Mapping);

impl Header {
    /// Parses the text between the fences.
    ///
    /// Blank or `null` front matter is an empty header.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not YAML or is YAML but not a mapping.
    pub fn parse(yaml: &str) -> Result<Self, HeaderError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        match serde_yaml::from_str::<Value>(yaml)? {
            Value::Null => Ok(Self::default()),
            Value::Mapping(mapping) => Ok(Self(mapping)),
            _ => Err(HeaderError::NotAMapping),
        }
    }

    /// Looks up the raw value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns `true` if the header has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Resolves the identifier stored under `key`.
    ///
    /// Strings are taken as written, numbers and booleans are rendered as
    /// text. Whole floats drop their fractional part, so `1.0` resolves to
    /// `1`. Missing keys, nulls, collections and blank strings resolve to
    /// `None`.
    #[must_use]
    pub fn identifier(&self, key: &str) -> Option<Identifier> {
        let text = match self.get(key)? {
            Value::String(s) => s.clone(),
            Value::Number(n) if n.is_f64() => n.as_f64()?.to_string(),
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            _ => return None,
        };

        Identifier::new(text).ok()
    }
}

/// Splits a document into its front matter and body.
///
/// The front matter must start on the first line (after an optional byte
/// order mark) with a line that is exactly `---`, and ends at the next such
/// line. The body is everything after the closing fence's line terminator.
/// A document that doesn't open with a fence has an empty header and its
/// body is the whole input.
///
/// # Errors
///
/// Returns an error if the opening fence is never closed or the front matter
/// cannot be parsed.
pub fn split(raw: &str) -> Result<(Header, &str), HeaderError> {
    let text = raw.strip_prefix(BOM).unwrap_or(raw);
    let mut lines = text.split_inclusive('\n');

    let Some(first) = lines.next().filter(|line| is_fence(line)) else {
        return Ok((Header::default(), raw));
    };

    let mut offset = first.len();
    for line in lines {
        let end = offset + line.len();
        if is_fence(line) {
            let header = Header::parse(&text[first.len()..offset])?;
            return Ok((header, &text[end..]));
        }
        offset = end;
    }

    Err(HeaderError::Unterminated)
}

fn is_fence(line: &str) -> bool {
    line.trim_end() == FENCE
}

/// Errors that can occur when reading a document's front matter.
#[derive(Debug, thiserror::Error)]
pub enum HeaderError {
    /// The document opened a front-matter block that was never closed.
    #[error("front matter opened with '---' is never closed")]
    Unterminated,

    /// The front matter is valid YAML but not a mapping of keys to values.
    #[error("front matter must be a mapping of keys to values")]
    NotAMapping,

    /// The front matter could not be parsed as YAML.
    #[error("failed to parse front matter: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test]
    fn splits_front_matter_from_body() {
        let input = "---\njira-id: JIRA-9\n---\nFeature: Login\n\nScenario: a\n";

        let (header, body) = split(input).unwrap();

        assert_eq!(header.identifier("jira-id").unwrap().as_str(), "JIRA-9");
        assert_eq!(body, "Feature: Login\n\nScenario: a\n");
    }

    #[test]
    fn no_front_matter_keeps_whole_input() {
        let input = "Feature: Login\nScenario: a\n";

        let (header, body) = split(input).unwrap();

        assert!(header.is_empty());
        assert_eq!(body, input);
    }

    #[test]
    fn empty_input_is_empty_body() {
        let (header, body) = split("").unwrap();

        assert!(header.is_empty());
        assert_eq!(body, "");
    }

    #[test]
    fn body_after_fence_is_byte_exact() {
        let input = "---\r\njira-id: X\r\n---\r\n  indented\r\n\r\n# kept\r\n";

        let (_, body) = split(input).unwrap();

        assert_eq!(body, "  indented\r\n\r\n# kept\r\n");
    }

    #[test]
    fn dashes_in_body_are_not_fences() {
        let input = "---\njira-id: X\n---\nScenario: a\n---\nmore\n";

        let (_, body) = split(input).unwrap();

        assert_eq!(body, "Scenario: a\n---\nmore\n");
    }

    #[test]
    fn closing_fence_at_end_of_input() {
        let (header, body) = split("---\njira-id: X\n---").unwrap();

        assert!(!header.is_empty());
        assert_eq!(body, "");
    }

    #[test]
    fn byte_order_mark_is_skipped() {
        let (header, body) = split("\u{feff}---\njira-id: X\n---\nbody").unwrap();

        assert_eq!(header.identifier("jira-id").unwrap().as_str(), "X");
        assert_eq!(body, "body");
    }

    #[test]
    fn unterminated_front_matter() {
        let result = split("---\njira-id: X\nScenario: a\n");

        assert!(matches!(result, Err(HeaderError::Unterminated)));
    }

    #[test]
    fn invalid_yaml() {
        let result = split("---\ninvalid: yaml: structure:\n---\nbody");

        assert!(matches!(result, Err(HeaderError::Yaml(_))));
    }

    #[test]
    fn sequence_is_not_a_mapping() {
        let result = split("---\n- a\n- b\n---\nbody");

        assert!(matches!(result, Err(HeaderError::NotAMapping)));
    }

    #[test_case("---\n---\nbody"; "no lines")]
    #[test_case("---\n\n  \n---\nbody"; "blank lines")]
    #[test_case("---\n~\n---\nbody"; "yaml null")]
    fn empty_front_matter(input: &str) {
        let (header, body) = split(input).unwrap();

        assert!(header.is_empty());
        assert_eq!(body, "body");
    }

    #[test_case("jira-id: JIRA-9", Some("JIRA-9"); "plain string")]
    #[test_case("jira-id: \"QA 1\"", Some("QA 1"); "quoted string")]
    #[test_case("jira-id: 1234", Some("1234"); "integer")]
    #[test_case("jira-id: -7", Some("-7"); "negative integer")]
    #[test_case("jira-id: 1.0", Some("1"); "whole float")]
    #[test_case("jira-id: 2.5", Some("2.5"); "fractional float")]
    #[test_case("jira-id: true", Some("true"); "boolean")]
    #[test_case("jira-id: \"\"", None; "empty string")]
    #[test_case("jira-id: \"   \"", None; "blank string")]
    #[test_case("jira-id:", None; "null")]
    #[test_case("jira-id: [A, B]", None; "sequence")]
    #[test_case("other: JIRA-9", None; "absent")]
    fn identifier_resolution(yaml: &str, expected: Option<&str>) {
        let header = Header::parse(yaml).unwrap();

        let identifier = header.identifier("jira-id");

        assert_eq!(identifier.as_deref(), expected);
    }
}
