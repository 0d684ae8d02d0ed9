use std::{
    io::{self, Read},
    path::{Path, PathBuf},
};

mod complete;
mod export;
mod init;
mod preview;
mod terminal;

use anyhow::Context;
use clap::ArgAction;
use feature_csv::Config;

#[derive(Debug, clap::Parser)]
#[command(name = "feature-csv", version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// The path to the configuration file
    ///
    /// Defaults apply if the file doesn't exist.
    #[arg(short, long, default_value = ".feature-csv.toml", global = true)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        self.command.run(&self.config)
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        // stdout carries CSV, so logs go to stderr
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(io::stderr)
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

#[derive(Debug, clap::Parser)]
pub enum Command {
    /// Export a feature file as test-management CSV
    Export(export::Command),

    /// Show the test cases a feature file would export
    Preview(preview::Command),

    /// Write a configuration file with the default settings
    Init(init::Command),

    /// Generate shell completions
    Completions(complete::Command),
}

impl Command {
    fn run(self, config_path: &Path) -> anyhow::Result<()> {
        match self {
            Self::Export(command) => command.run(&load_config(config_path)?)?,
            Self::Preview(command) => command.run(&load_config(config_path)?)?,
            Self::Init(command) => command.run(config_path)?,
            Self::Completions(command) => command.run(),
        }
        Ok(())
    }
}

/// Loads the configuration file, falling back to defaults if it is absent.
fn load_config(path: &Path) -> anyhow::Result<Config> {
    if !path.exists() {
        tracing::debug!("No config at {}, using defaults", path.display());
        return Ok(Config::default());
    }

    let config = Config::load(path).map_err(|e| anyhow::anyhow!("{e}"))?;
    tracing::info!("Loaded config from {}", path.display());
    Ok(config)
}

/// Reads a feature document from a file, or from stdin if the path is `-`.
fn read_input(path: &Path) -> anyhow::Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("failed to read feature from stdin")?;
        return Ok(text);
    }

    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

/// A human-readable name for the input, for messages.
fn input_name(path: &Path) -> String {
    if path == Path::new("-") {
        "stdin".to_string()
    } else {
        path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn output_conflicts_with_stdout() {
        let result =
            Cli::try_parse_from(["feature-csv", "export", "a.feature", "-o", "a.csv", "--stdout"]);

        assert!(result.is_err());
    }

    #[test]
    fn config_flag_is_global() {
        let cli = Cli::try_parse_from(["feature-csv", "preview", "-", "-c", "c.toml"]).unwrap();

        assert_eq!(cli.config, Path::new("c.toml"));
    }

    #[test]
    fn missing_config_uses_defaults() {
        let tmp = tempdir().unwrap();

        let config = load_config(&tmp.path().join(".feature-csv.toml")).unwrap();

        assert_eq!(config, Config::default());
    }

    #[test]
    fn existing_config_is_loaded() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join(".feature-csv.toml");
        std::fs::write(&path, "_version = \"1\"\nscenario_keyword = \"Szenario\"\n").unwrap();

        let config = load_config(&path).unwrap();

        assert_eq!(config.scenario_keyword, "Szenario");
    }

    #[test]
    fn invalid_config_is_an_error() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join(".feature-csv.toml");
        std::fs::write(&path, "_version = \"1\"\ncomment_marker = 3\n").unwrap();

        let error = load_config(&path).unwrap_err();

        assert!(error.to_string().starts_with("Failed to parse config file:"));
    }

    #[test]
    fn reads_input_file() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("login.feature");
        std::fs::write(&path, "Scenario: a\n").unwrap();

        assert_eq!(read_input(&path).unwrap(), "Scenario: a\n");
    }

    #[test]
    fn missing_input_names_the_path() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("absent.feature");

        let error = read_input(&path).unwrap_err();

        assert_eq!(error.to_string(), format!("failed to read {}", path.display()));
    }

    #[test]
    fn dash_is_stdin() {
        assert_eq!(input_name(Path::new("-")), "stdin");
        assert_eq!(input_name(Path::new("a.feature")), "a.feature");
    }
}
