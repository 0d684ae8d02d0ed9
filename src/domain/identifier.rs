use std::{fmt, ops::Deref, str::FromStr};

use non_empty_string::NonEmptyString;

/// The test-suite identifier carried in a feature document's front matter.
///
/// Prefixes every generated test-case name and seeds the export filename.
/// An identifier is never empty and never consists only of whitespace; the
/// text is otherwise kept exactly as written.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Identifier(NonEmptyString);

impl Identifier {
    /// Creates a new `Identifier` from a string.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidIdentifier`] if the string is empty or contains only
    /// whitespace.
    pub fn new(s: String) -> Result<Self, InvalidIdentifier> {
        if s.trim().is_empty() {
            return Err(InvalidIdentifier(s));
        }

        NonEmptyString::new(s).map(Self).map_err(InvalidIdentifier)
    }

    /// Returns the string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns the identifier with every non-alphanumeric character removed.
    ///
    /// `JIRA-9` becomes `JIRA9`. Used as the stem of export filenames.
    #[must_use]
    pub fn file_stem(&self) -> String {
        self.as_str()
            .chars()
            .filter(|c| c.is_alphanumeric())
            .collect()
    }
}

impl TryFrom<String> for Identifier {
    type Error = InvalidIdentifier;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Identifier {
    type Error = InvalidIdentifier;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value.to_string())
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl Deref for Identifier {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.0.as_str()
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Identifier {
    type Err = InvalidIdentifier;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.to_string())
    }
}

/// Error returned when an identifier is empty or whitespace-only.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("Invalid identifier '{0}': must contain at least one non-whitespace character")]
pub struct InvalidIdentifier(String);
