use std::path::Path;

use feature_csv::Config;
use tracing::instrument;

use super::terminal::Colorize;

#[derive(Debug, clap::Parser)]
pub struct Command {
    /// Overwrite an existing configuration file
    #[arg(long)]
    force: bool,
}

impl Command {
    #[instrument]
    pub fn run(self, config_path: &Path) -> anyhow::Result<()> {
        if config_path.exists() && !self.force {
            anyhow::bail!(
                "Configuration already exists at {} (use --force to overwrite)",
                config_path.display()
            );
        }

        Config::default()
            .save(config_path)
            .map_err(|e| anyhow::anyhow!("Failed to create {}: {e}", config_path.display()))?;

        println!("{} {}", "Created:".success(), config_path.display());
        println!();
        println!("Next steps:");
        println!("  feature-csv preview login.feature");
        println!("  feature-csv export login.feature");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn writes_default_config() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join(".feature-csv.toml");

        Command { force: false }.run(&path).unwrap();

        assert_eq!(Config::load(&path).unwrap(), Config::default());
    }

    #[test]
    fn refuses_to_overwrite_without_force() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join(".feature-csv.toml");
        std::fs::write(&path, "_version = \"1\"\nfilename_suffix = \"-mine\"\n").unwrap();

        let error = Command { force: false }.run(&path).unwrap_err();

        assert!(error.to_string().contains("use --force to overwrite"));
        assert_eq!(Config::load(&path).unwrap().filename_suffix, "-mine");
    }

    #[test]
    fn force_replaces_existing_config() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join(".feature-csv.toml");
        std::fs::write(&path, "not toml at all [").unwrap();

        Command { force: true }.run(&path).unwrap();

        assert_eq!(Config::load(&path).unwrap(), Config::default());
    }
}
