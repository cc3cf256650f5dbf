use parking_lot::Mutex;
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use tracing::debug;

use super::*;

/// A ghost that wanders, picking uniformly from its legal actions
#[derive(Debug)]
pub struct RandomGhost {
    agent_index: usize,
    rng: Mutex<StdRng>,
}

impl RandomGhost {
    pub fn new(agent_index: usize, seed: u64) -> Self {
        Self {
            agent_index,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl<G: AdversarialGame> GhostAI<G> for RandomGhost {
    fn get_action(&self, state: &G) -> Result<Action> {
        let legal = state.legal_actions(self.agent_index);
        let chosen = legal
            .choose(&mut *self.rng.lock())
            .copied()
            .unwrap_or(Action::Stop);

        debug!(agent_index = self.agent_index, %chosen, "RandomGhost moved");

        Ok(chosen)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RandomGhostFactory;

impl<G: AdversarialGame + 'static> GhostFactory<G> for RandomGhostFactory {
    fn name(&self) -> String {
        "random".to_owned()
    }

    fn create(&self, config: &GhostConfig) -> Result<BoxedGhost<G>> {
        Ok(Box::new(RandomGhost::new(config.agent_index, config.seed)))
    }

    fn about(&self) -> AboutGhost {
        AboutGhost {
            name: "random".to_owned(),
            description: "Wanders around, picking any legal move".to_owned(),
        }
    }
}
