use std::{collections::BTreeMap, fs, path::PathBuf};

use color_eyre::eyre::{eyre, Result, WrapErr};
use ghost_agents::{
    config::{GhostConfig, TieBreakConfig},
    create_ghost,
    maze::Maze,
    minimax_ghost::MinimaxGhostAgent,
    AdversarialGame,
};
use ghost_minimax::{paranoid::MinMaxReturn, Action, ActionValue};
use itertools::Itertools;
use tracing::info;

#[derive(clap::Args, Debug)]
pub(crate) struct Decide {
    /// Maze layout file to load
    #[clap(short, long, value_parser)]
    layout: PathBuf,

    /// The agent to pick an action for. Ghosts start at 1
    #[clap(short, long, value_parser)]
    agent: Option<usize>,

    /// Which ghost to ask
    #[clap(short, long, value_parser)]
    ghost: Option<String>,

    /// JSON config to start from. Any other flag overrides it
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Plies to search
    #[clap(short, long, value_parser)]
    depth: Option<usize>,

    /// Evaluation function used at the leaves
    #[clap(short, long, value_parser)]
    evaluation: Option<String>,

    /// How to pick between equally good actions
    #[clap(short, long, value_parser)]
    tie_break: Option<TieBreakConfig>,

    /// Seed for random choices
    #[clap(short, long, value_parser)]
    seed: Option<u64>,

    /// Print the whole search tree instead of just the chosen route
    #[clap(long, value_parser)]
    tree: bool,
}

impl Decide {
    fn config(&self) -> Result<GhostConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let json = fs::read_to_string(path)
                    .wrap_err_with(|| format!("Could not read config {}", path.display()))?;
                GhostConfig::from_json(&json)?
            }
            None => GhostConfig::default(),
        };

        if let Some(agent) = self.agent {
            config.agent_index = agent;
        }
        if let Some(ghost) = &self.ghost {
            config.ghost = ghost.clone();
        }
        if let Some(depth) = self.depth {
            config.depth = depth;
        }
        if let Some(evaluation) = &self.evaluation {
            config.evaluation = evaluation.clone();
        }
        if let Some(tie_break) = self.tie_break {
            config.tie_break = tie_break;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        config.record_tree |= self.tree;

        Ok(config)
    }

    pub(crate) fn run(self) -> Result<()> {
        let layout = fs::read_to_string(&self.layout)
            .wrap_err_with(|| format!("Could not read layout {}", self.layout.display()))?;
        let maze = Maze::from_layout(&layout)?;
        let config = self.config()?;

        if config.agent_index == 0 || config.agent_index >= maze.agent_count() {
            return Err(eyre!(
                "Agent {} is not a ghost, this maze has ghosts 1 to {}",
                config.agent_index,
                maze.agent_count() - 1
            ));
        }

        println!("{maze}");
        println!();

        let ghost = create_ghost::<Maze>(&config)?;
        let action = ghost.get_action(&maze)?;
        ghost.end();

        info!(ghost = %config.ghost, agent_index = config.agent_index, %action, "Decided");
        println!("Ghost {} ({}) moves {action}", config.agent_index, config.ghost);

        if config.ghost == "minimax" {
            let explainer = MinimaxGhostAgent::<Maze>::from_config(&config)?;
            let result = explainer.explain(&maze)?;

            println!();
            let values = explainer.root_values(&maze)?;
            if !values.is_empty() {
                println!("Root values: {}", format_root_values(&values));
            }
            print_route(&result);

            if self.tree {
                if let Some(tree) = result.to_text_tree() {
                    println!("{tree}");
                }
            }
        }

        Ok(())
    }
}

fn format_root_values(values: &[ActionValue<i64>]) -> String {
    values
        .iter()
        .map(|v| format!("{} {}", v.action, v.score))
        .join(", ")
}

fn print_route(result: &MinMaxReturn<i64>) {
    let route = result.chosen_route();
    if route.is_empty() {
        return;
    }

    let mut per_agent: BTreeMap<usize, Vec<Action>> = BTreeMap::new();
    for (agent, action) in &route {
        per_agent.entry(*agent).or_default().push(*action);
    }

    println!(
        "The chosen line looks {} moves ahead with a value of {}:",
        route.len(),
        result.score()
    );
    for (agent, path) in per_agent {
        println!("  agent {agent}: {}", path.iter().join(", "));
    }
    println!();
}
