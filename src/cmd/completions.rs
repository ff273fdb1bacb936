use clap::CommandFactory;
use clap_complete::{generate, Shell};
use std::io::{self, Write};

use crate::cli::Cli;
use crate::error::Result;

pub struct CompletionsCommand {
    pub shell: Shell,
}

impl CompletionsCommand {
    pub fn run(self) -> Result<()> {
        self.write_to(&mut io::stdout())
    }

    pub fn write_to(self, out: &mut dyn Write) -> Result<()> {
        let mut cmd = Cli::command();
        let bin_name = cmd.get_name().to_string();
        generate(self.shell, &mut cmd, bin_name, out);
        Ok(())
    }
}
