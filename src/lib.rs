//! Gherkin feature export
//!
//! Turns a feature document with YAML front matter into numbered test-case
//! records ready for bulk import into a test-management tool.
//!
//! ```
//! let feature = "---\njira-id: JIRA-9\n---\nScenario: Login\n  Given a user\n";
//!
//! let records = feature_csv::transform(feature)?;
//!
//! assert_eq!(records.head.name, "JIRA-9 - TC1 - Login");
//! assert_eq!(records.head.script, "Given a user");
//! # Ok::<(), feature_csv::Error>(())
//! ```

pub mod domain;
pub use domain::{Config, Identifier, Record, ScenarioBlock, Suite};

pub mod transform;
pub use transform::{Error, Transformer, transform};

pub mod export;
pub use export::{Columns, ExportError};
