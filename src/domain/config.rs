use std::path::Path;

use serde::{Deserialize, Serialize};

/// Configuration for feature export.
///
/// Controls how feature documents are read (which front-matter key carries
/// the identifier, which keyword opens a scenario, which character starts a
/// comment) and how the resulting CSV is laid out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Versions", into = "Versions")]
pub struct Config {
    /// The front-matter key holding the test-suite identifier.
    ///
    /// For example, `jira-id: JIRA-9`.
    pub identifier_key: String,

    /// The keyword that, followed by a colon, opens a scenario.
    pub scenario_keyword: String,

    /// The character that starts a comment running to the end of the line.
    pub comment_marker: char,

    /// Heading of the CSV column holding the test-case name.
    pub name_column: String,

    /// Heading of the CSV column holding the test script.
    pub script_column: String,

    /// Tag appended to the identifier stem when naming export files.
    ///
    /// With the default `tdd`, identifier `JIRA-9` exports to `JIRA9tdd.csv`.
    pub filename_suffix: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            identifier_key: default_identifier_key(),
            scenario_keyword: default_scenario_keyword(),
            comment_marker: default_comment_marker(),
            name_column: default_name_column(),
            script_column: default_script_column(),
            filename_suffix: default_filename_suffix(),
        }
    }
}

impl Config {
    /// Loads the configuration from a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if the TOML content is
    /// invalid.
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file: {e}"))?;
        toml::from_str(&content).map_err(|e| format!("Failed to parse config file: {e}"))
    }

    /// Saves the configuration to a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be serialized to TOML or if
    /// the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), String> {
        let content =
            toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize config: {e}"))?;
        std::fs::write(path, content).map_err(|e| format!("Failed to write config file: {e}"))
    }
}

fn default_identifier_key() -> String {
    "jira-id".to_string()
}

fn default_scenario_keyword() -> String {
    "Scenario".to_string()
}

const fn default_comment_marker() -> char {
    '#'
}

fn default_name_column() -> String {
    "Name".to_string()
}

fn default_script_column() -> String {
    "Test Script (BDD)".to_string()
}

fn default_filename_suffix() -> String {
    "tdd".to_string()
}

/// The serialized versions of the configuration.
/// This allows for future changes to the configuration format and to the domain
/// type without breaking compatibility.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "_version")]
enum Versions {
    #[serde(rename = "1")]
    V1 {
        #[serde(default = "default_identifier_key")]
        identifier_key: String,

        #[serde(default = "default_scenario_keyword")]
        scenario_keyword: String,

        #[serde(default = "default_comment_marker")]
        comment_marker: char,

        /// CSV column headings.
        #[serde(default = "default_name_column")]
        name_column: String,

        #[serde(default = "default_script_column")]
        script_column: String,

        #[serde(default = "default_filename_suffix")]
        filename_suffix: String,
    },
}

impl From<Versions> for Config {
    fn from(versions: Versions) -> Self {
        match versions {
            Versions::V1 {
                identifier_key,
                scenario_keyword,
                comment_marker,
                name_column,
                script_column,
                filename_suffix,
            } => Self {
                identifier_key,
                scenario_keyword,
                comment_marker,
                name_column,
                script_column,
                filename_suffix,
            },
        }
    }
}

impl From<Config> for Versions {
    fn from(config: Config) -> Self {
        let Config {
            identifier_key,
            scenario_keyword,
            comment_marker,
            name_column,
            script_column,
            filename_suffix,
        } = config;
        Self::V1 {
            identifier_key,
            scenario_keyword,
            comment_marker,
            name_column,
            script_column,
            filename_suffix,
        }
    }
}
