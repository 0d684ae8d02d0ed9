//! Export Gherkin feature scenarios as test-management CSV.

use clap::Parser;

mod cli;

fn main() -> anyhow::Result<()> {
    cli::Cli::parse().run()
}
