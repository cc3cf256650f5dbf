pub mod decide;
pub mod list;

use decide::Decide;
use list::List;

use clap::Subcommand;
use color_eyre::eyre::Result;

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Ask a ghost for its next action in a maze
    Decide(Decide),
    /// List every ghost and evaluation function
    List(List),
}

impl Command {
    pub fn run(self) -> Result<()> {
        match self {
            Command::Decide(d) => d.run()?,
            Command::List(l) => l.run()?,
        }

        Ok(())
    }
}
