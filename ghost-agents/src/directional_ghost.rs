use ghost_minimax::evaluation::PACMAN_INDEX;
use parking_lot::Mutex;
use rand::{
    distributions::{Distribution, WeightedIndex},
    rngs::StdRng,
    SeedableRng,
};
use tracing::debug;

use super::*;

/// A reflex ghost that prefers moves toward Pacman, or away from Pacman while scared
///
/// It doesn't look ahead at all. The best moves share `prob_attack` (or `prob_scared_flee`) and
/// the rest of the probability is spread evenly over every legal move.
#[derive(Debug)]
pub struct DirectionalGhost {
    agent_index: usize,
    prob_attack: f64,
    prob_scared_flee: f64,
    rng: Mutex<StdRng>,
}

impl DirectionalGhost {
    /// Both probabilities must be within `0.0..=1.0`
    pub fn new(
        agent_index: usize,
        prob_attack: f64,
        prob_scared_flee: f64,
        seed: u64,
    ) -> Result<Self> {
        for (field, value) in [
            ("prob_attack", prob_attack),
            ("prob_scared_flee", prob_scared_flee),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(GhostError::InvalidProbability { field, value });
            }
        }

        Ok(Self {
            agent_index,
            prob_attack,
            prob_scared_flee,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        })
    }

    /// The probability of each legal action, in legal-action order
    pub fn action_distribution<G: AdversarialGame>(&self, state: &G) -> Vec<(Action, f64)> {
        let legal = state.legal_actions(self.agent_index);
        if legal.is_empty() {
            return vec![];
        }

        let uniform = 1.0 / legal.len() as f64;

        let (ghost, pacman) = match (
            state.agent_position(self.agent_index),
            state.agent_position(PACMAN_INDEX),
        ) {
            (Some(ghost), Some(pacman)) => (ghost, pacman),
            _ => return legal.into_iter().map(|a| (a, uniform)).collect(),
        };

        let distances: Vec<i64> = legal
            .iter()
            .map(|a| ghost.moved(*a).manhattan_distance(&pacman))
            .collect();

        let scared = state.is_scared(self.agent_index);
        let (best_distance, best_prob) = if scared {
            (distances.iter().max(), self.prob_scared_flee)
        } else {
            (distances.iter().min(), self.prob_attack)
        };
        let best_distance = best_distance.copied().unwrap_or_default();
        let best_count = distances.iter().filter(|d| **d == best_distance).count() as f64;

        legal
            .into_iter()
            .zip(distances)
            .map(|(action, distance)| {
                let mut p = (1.0 - best_prob) * uniform;
                if distance == best_distance {
                    p += best_prob / best_count;
                }
                (action, p)
            })
            .collect()
    }
}

impl<G: AdversarialGame> GhostAI<G> for DirectionalGhost {
    fn get_action(&self, state: &G) -> Result<Action> {
        let distribution = self.action_distribution(state);
        if distribution.is_empty() {
            return Ok(Action::Stop);
        }

        let weights = WeightedIndex::new(distribution.iter().map(|(_, p)| *p)).map_err(|e| {
            GhostError::InvalidConfig {
                message: format!("bad action distribution {distribution:?}: {e}"),
            }
        })?;
        let chosen = distribution[weights.sample(&mut *self.rng.lock())].0;

        debug!(agent_index = self.agent_index, %chosen, "DirectionalGhost moved");

        Ok(chosen)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct DirectionalGhostFactory;

impl<G: AdversarialGame + 'static> GhostFactory<G> for DirectionalGhostFactory {
    fn name(&self) -> String {
        "directional".to_owned()
    }

    fn create(&self, config: &GhostConfig) -> Result<BoxedGhost<G>> {
        Ok(Box::new(DirectionalGhost::new(
            config.agent_index,
            config.prob_attack,
            config.prob_scared_flee,
            config.seed,
        )?))
    }

    fn about(&self) -> AboutGhost {
        AboutGhost {
            name: "directional".to_owned(),
            description: "Usually steps toward Pacman, and away from Pacman while scared".to_owned(),
        }
    }
}
