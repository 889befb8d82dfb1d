//! Shell completion script generation.

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use std::io;

use crate::Cli;

/// Write the completion script for `shell` to stdout.
///
/// ```bash
/// studytimer-cli completions bash > ~/.bash_completion.d/studytimer-cli
/// studytimer-cli completions zsh > ~/.zsh/completions/_studytimer-cli
/// ```
pub fn generate_completions(shell: Shell) {
    generate_to(shell, &mut io::stdout());
}

fn generate_to(shell: Shell, out: &mut dyn io::Write) {
    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    generate(shell, &mut cmd, bin_name, out);
}
