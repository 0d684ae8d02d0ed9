//! CSV export of transformed records.
//!
//! The layout targets test-management bulk import: a header row with two
//! named columns, then one row per record. Scripts keep their embedded
//! newlines and are quoted as needed.

use std::io::Write;

use crate::domain::{Config, Identifier, Record};

/// The headings of the two exported columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Columns {
    /// Heading of the test-case name column.
    pub name: String,
    /// Heading of the test-script column.
    pub script: String,
}

impl Default for Columns {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for Columns {
    fn from(config: &Config) -> Self {
        Self {
            name: config.name_column.clone(),
            script: config.script_column.clone(),
        }
    }
}

/// Writes `records` as CSV, header row first.
///
/// # Errors
///
/// Returns an error if writing to `writer` fails.
pub fn write_csv<'a, W, I>(records: I, columns: &Columns, writer: W) -> Result<(), ExportError>
where
    W: Write,
    I: IntoIterator<Item = &'a Record>,
{
    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record([&columns.name, &columns.script])?;

    let mut count = 0_usize;
    for record in records {
        writer.write_record([&record.name, &record.script])?;
        count += 1;
    }

    writer.flush()?;
    tracing::debug!("Wrote {count} CSV rows");
    Ok(())
}

/// Renders `records` as a CSV string.
///
/// # Errors
///
/// Returns an error if the CSV writer fails.
pub fn to_csv_string<'a, I>(records: I, columns: &Columns) -> Result<String, ExportError>
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut buffer = Vec::new();
    write_csv(records, columns, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

/// Derives the export filename for a suite.
///
/// The identifier's alphanumeric characters are followed by `suffix` and the
/// `.csv` extension: `JIRA-9` with suffix `tdd` gives `JIRA9tdd.csv`.
#[must_use]
pub fn output_filename(identifier: &Identifier, suffix: &str) -> String {
    format!("{}{suffix}.csv", identifier.file_stem())
}

/// Errors that can occur when exporting records.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// The CSV writer failed.
    #[error("failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    /// Flushing the underlying writer failed.
    #[error("failed to write CSV: {0}")]
    Io(#[from] std::io::Error),

    /// The rendered CSV was not valid UTF-8.
    #[error("CSV output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
