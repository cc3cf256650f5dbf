use ghost_minimax::{
    evaluation::EvaluationFn,
    paranoid::{MinMaxReturn, MinimaxGhost},
    ActionValue,
};
use tracing::info;

use super::*;

/// A ghost that searches the game tree with paranoid minimax
pub struct MinimaxGhostAgent<G> {
    engine: MinimaxGhost<G, i64, EvaluationFn<G>>,
}

impl<G: AdversarialGame> MinimaxGhostAgent<G> {
    pub fn new(engine: MinimaxGhost<G, i64, EvaluationFn<G>>) -> Self {
        Self { engine }
    }

    pub fn from_config(config: &GhostConfig) -> Result<Self> {
        let engine = MinimaxGhost::from_evaluation_name(
            config.agent_index,
            &config.evaluation,
            format!("minimax-{}", config.agent_index),
            config.search_options(),
        )?;

        Ok(Self::new(engine))
    }

    /// The full search result behind the last decision, for debugging
    pub fn explain(&self, state: &G) -> Result<MinMaxReturn<i64>> {
        self.engine.single_minimax(state)
    }

    /// The exact value of every root action, unaffected by pruning
    pub fn root_values(&self, state: &G) -> Result<Vec<ActionValue<i64>>> {
        self.engine.root_values(state)
    }

    pub fn engine(&self) -> &MinimaxGhost<G, i64, EvaluationFn<G>> {
        &self.engine
    }
}

impl<G: AdversarialGame> GhostAI<G> for MinimaxGhostAgent<G> {
    fn get_action(&self, state: &G) -> Result<Action> {
        self.engine.decide(state)
    }

    fn end(&self) {
        info!(ghost_name = %self.engine.name, "MinimaxGhost has ended");
    }
}

#[derive(Debug, Clone, Copy)]
pub struct MinimaxGhostFactory;

impl<G: AdversarialGame + 'static> GhostFactory<G> for MinimaxGhostFactory {
    fn name(&self) -> String {
        "minimax".to_owned()
    }

    fn create(&self, config: &GhostConfig) -> Result<BoxedGhost<G>> {
        Ok(Box::new(MinimaxGhostAgent::<G>::from_config(config)?))
    }

    fn about(&self) -> AboutGhost {
        AboutGhost {
            name: "minimax".to_owned(),
            description: "Assumes Pacman plays perfectly and picks the move that hurts Pacman most"
                .to_owned(),
        }
    }
}
