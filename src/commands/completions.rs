//! # Completions Command Implementation
//!
//! `rbxts-scaffold completions <shell>` prints a completion script covering
//! the template subcommands and every init flag, including the camelCase
//! ones (`--packageManager`, `--gitProtocol`).
//!
//! ```bash
//! rbxts-scaffold completions bash > ~/.local/share/bash-completion/completions/rbxts-scaffold
//! rbxts-scaffold completions zsh > ~/.zfunc/_rbxts-scaffold
//! ```

use std::io::{self, Write};

use anyhow::Result;
use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};

use crate::cli::Cli;

/// Generate shell completion scripts
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate the script for
    #[arg(value_enum)]
    pub shell: Shell,
}

fn write_completions(shell: Shell, out: &mut dyn Write) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, out);
}

pub fn execute(args: CompletionsArgs) -> Result<()> {
    write_completions(args.shell, &mut io::stdout());
    Ok(())
}
