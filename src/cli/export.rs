use std::{
    fs::File,
    io::{self, BufWriter},
    path::{Path, PathBuf},
};

use anyhow::Context;
use feature_csv::{Columns, Config, Transformer, export};
use tracing::instrument;

use super::terminal::Colorize;

#[derive(Debug, clap::Parser)]
pub struct Command {
    /// The feature file to export (`-` reads stdin)
    input: PathBuf,

    /// Write the CSV to this path instead of deriving a filename
    #[arg(short, long, conflicts_with_all = ["out_dir", "stdout"])]
    output: Option<PathBuf>,

    /// Directory to write the derived `<ID><suffix>.csv` file into
    #[arg(long, default_value = ".", conflicts_with = "stdout")]
    out_dir: PathBuf,

    /// Write the CSV to stdout
    #[arg(long)]
    stdout: bool,

    /// Overwrite an existing file without asking
    #[arg(long, short)]
    yes: bool,
}

impl Command {
    #[instrument(skip(config))]
    pub fn run(self, config: &Config) -> anyhow::Result<()> {
        let raw = super::read_input(&self.input)?;
        let suite = Transformer::new(config)
            .suite(&raw)
            .with_context(|| format!("failed to export {}", super::input_name(&self.input)))?;
        let columns = Columns::from(config);

        if self.stdout {
            export::write_csv(suite.records.iter(), &columns, io::stdout().lock())?;
            return Ok(());
        }

        let path = self.output.clone().unwrap_or_else(|| {
            self.out_dir
                .join(export::output_filename(&suite.identifier, &config.filename_suffix))
        });

        if path.exists() && !self.yes && !confirm_overwrite(&path)? {
            println!("Cancelled");
            return Ok(());
        }

        let file =
            File::create(&path).with_context(|| format!("failed to create {}", path.display()))?;
        export::write_csv(suite.records.iter(), &columns, BufWriter::new(file))
            .with_context(|| format!("failed to write {}", path.display()))?;

        tracing::info!("Exported {} to {}", suite.identifier, path.display());
        println!(
            "{} {} test cases to {}",
            "Exported".success(),
            suite.records.len(),
            path.display()
        );

        Ok(())
    }
}

fn confirm_overwrite(path: &Path) -> anyhow::Result<bool> {
    dialoguer::Confirm::new()
        .with_prompt(format!("{} already exists. Overwrite?", path.display()))
        .default(false)
        .interact()
        .context("cannot ask for confirmation; pass --yes to overwrite")
}
