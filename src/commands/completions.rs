//! Shell completions handler

use std::io;

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::Shell;

use starplay::cli::Cli;

/// Write completions for `shell` to stdout.
pub fn handle(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut io::stdout());
    Ok(())
}
