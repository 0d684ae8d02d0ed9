//! Shell completion scripts for bash, zsh, fish, elvish and `PowerShell`.

use std::io;

use clap::CommandFactory;
use clap_complete::Shell;

#[derive(Debug, clap::Parser)]
pub struct Command {
    /// Shell to generate completions for
    #[arg(value_enum)]
    shell: Shell,
}

impl Command {
    /// Writes the completion script to stdout.
    pub fn run(self) {
        let mut cmd = crate::cli::Cli::command();
        let name = cmd.get_name().to_string();
        clap_complete::generate(self.shell, &mut cmd, name, &mut io::stdout());
    }
}
