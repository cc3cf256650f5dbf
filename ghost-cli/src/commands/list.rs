use color_eyre::eyre::Result;
use ghost_agents::{all_factories, config::TieBreakConfig, maze::Maze};
use ghost_minimax::evaluation::{DEFAULT_EVALUATION, EVALUATION_NAMES};

#[derive(clap::Args, Debug)]
pub(crate) struct List {
    /// Print the listing as JSON
    #[clap(long, value_parser)]
    json: bool,
}

impl List {
    pub(crate) fn run(self) -> Result<()> {
        let ghosts: Vec<_> = all_factories::<Maze>()
            .iter()
            .map(|f| f.about())
            .collect();

        if self.json {
            let listing = serde_json::json!({
                "ghosts": ghosts,
                "evaluations": EVALUATION_NAMES,
                "tie_breaks": TieBreakConfig::NAMES,
            });
            println!("{}", serde_json::to_string_pretty(&listing)?);
            return Ok(());
        }

        println!("Ghosts:");
        for about in ghosts {
            println!("  {:<12} {}", about.name, about.description);
        }

        println!("Evaluation functions:");
        for name in EVALUATION_NAMES {
            let default = if name == DEFAULT_EVALUATION {
                " (default)"
            } else {
                ""
            };
            println!("  {name}{default}");
        }

        println!("Tie breaks: {}", TieBreakConfig::NAMES.join(", "));

        Ok(())
    }
}
