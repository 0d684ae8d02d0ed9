use std::{io, path::PathBuf};

use anyhow::Context;
use clap::Parser;
use feature_csv::{Columns, Config, Record, Suite, Transformer, export};
use regex::Regex;
use tracing::instrument;

use super::terminal::{self, Colorize};

#[derive(Debug, Parser)]
#[command(about = "Display the test cases a feature file would export")]
pub struct Command {
    /// The feature file to preview (`-` reads stdin)
    input: PathBuf,

    /// Output format
    #[arg(long, value_name = "FORMAT", default_value = "pretty")]
    output: OutputFormat,

    /// Only show test cases whose name matches this regular expression
    #[arg(long, value_name = "REGEX")]
    filter: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Pretty,
    Csv,
    Json,
}

impl Command {
    #[instrument(level = "debug", skip(config))]
    pub fn run(self, config: &Config) -> anyhow::Result<()> {
        let raw = super::read_input(&self.input)?;
        let suite = Transformer::new(config)
            .suite(&raw)
            .with_context(|| format!("failed to preview {}", super::input_name(&self.input)))?;

        let filter = self
            .filter
            .as_deref()
            .map(|pattern| {
                Regex::new(pattern).with_context(|| format!("invalid regex: {pattern}"))
            })
            .transpose()?;

        let records: Vec<&Record> = suite
            .records
            .iter()
            .filter(|record| filter.as_ref().is_none_or(|regex| regex.is_match(&record.name)))
            .collect();
        tracing::debug!("{} of {} records selected", records.len(), suite.records.len());

        let filename = export::output_filename(&suite.identifier, &config.filename_suffix);

        match self.output {
            OutputFormat::Pretty => Self::output_pretty(&suite, &records, &filename),
            OutputFormat::Csv => {
                export::write_csv(records, &Columns::from(config), io::stdout().lock())?;
            }
            OutputFormat::Json => Self::output_json(&suite, &records, &filename)?,
        }

        Ok(())
    }

    fn output_pretty(suite: &Suite, records: &[&Record], filename: &str) {
        println!("# {}", suite.identifier);
        println!(
            "{}\n",
            format!("{} test cases -> {filename}", suite.records.len()).dim()
        );

        if records.is_empty() {
            println!("{}", "No test cases match the filter".warning());
            return;
        }

        let rule = "─".repeat(rule_width());
        for record in records {
            println!("{}", record.name.info());
            println!("{}", rule.dim());
            for line in record.script.lines() {
                println!("  {line}");
            }
            println!();
        }
    }

    fn output_json(suite: &Suite, records: &[&Record], filename: &str) -> anyhow::Result<()> {
        use serde_json::json;

        let output = json!({
            "identifier": suite.identifier.as_str(),
            "filename": filename,
            "records": records,
        });

        println!("{}", serde_json::to_string_pretty(&output)?);
        Ok(())
    }
}

fn rule_width() -> usize {
    terminal::terminal_width().map_or(60, |width| usize::from(width).min(80))
}
