//! Named evaluation functions
//!
//! Ghosts are configured with the *name* of an evaluation function. The name is resolved once,
//! when the ghost is built, so a typo fails right away instead of on the first search.
//!
//! All of these score a state from Pacman's (agent 0) point of view: higher is better for
//! Pacman, and the ghosts try to drive it down.

use itertools::Itertools;

use crate::{AdversarialGame, GhostError, Result};

/// An evaluation function resolved from the registry
pub type EvaluationFn<G> = fn(&G) -> i64;

/// Index of Pacman in every state
pub const PACMAN_INDEX: usize = 0;

/// The evaluation used when a configuration doesn't name one
pub const DEFAULT_EVALUATION: &str = "score-plus-ghost-distance";

/// Every name the registry knows about
pub const EVALUATION_NAMES: [&str; 3] = [
    "score",
    "score-plus-ghost-distance",
    "score-plus-nearest-ghost",
];

/// Look up an evaluation function by name
///
/// ```rust
/// use ghost_minimax::{evaluation::evaluation_function, GhostError};
/// # use ghost_minimax::{Action, AdversarialGame, Position};
/// # #[derive(Clone)]
/// # struct Empty;
/// # impl AdversarialGame for Empty {
/// #     fn agent_count(&self) -> usize { 1 }
/// #     fn legal_actions(&self, _: usize) -> Vec<Action> { vec![] }
/// #     fn successor(&self, _: usize, _: Action) -> Self { Empty }
/// #     fn is_terminal(&self) -> bool { false }
/// #     fn score(&self) -> i64 { 7 }
/// #     fn agent_position(&self, _: usize) -> Option<Position> { None }
/// # }
///
/// let score = evaluation_function::<Empty>("score").unwrap();
/// assert_eq!(score(&Empty), 7);
///
/// assert!(matches!(
///     evaluation_function::<Empty>("nope"),
///     Err(GhostError::UnknownEvaluationFunction { .. })
/// ));
/// ```
pub fn evaluation_function<G: AdversarialGame>(name: &str) -> Result<EvaluationFn<G>> {
    let function: EvaluationFn<G> = match name {
        "score" => score::<G>,
        "score-plus-ghost-distance" => score_plus_ghost_distance::<G>,
        "score-plus-nearest-ghost" => score_plus_nearest_ghost::<G>,
        _ => {
            return Err(GhostError::UnknownEvaluationFunction {
                name: name.to_owned(),
                known: EVALUATION_NAMES.iter().join(", "),
            })
        }
    };

    Ok(function)
}

/// Just the game score
pub fn score<G: AdversarialGame>(game: &G) -> i64 {
    game.score()
}

fn ghost_distances<G: AdversarialGame>(game: &G) -> impl Iterator<Item = i64> + '_ {
    let pacman = game.agent_position(PACMAN_INDEX);

    (0..game.agent_count())
        .filter(|&i| i != PACMAN_INDEX)
        .filter_map(move |i| {
            let pacman = pacman?;
            game.agent_position(i).map(|g| pacman.manhattan_distance(&g))
        })
}

/// The game score plus the summed Manhattan distance from Pacman to every ghost
///
/// Ghosts minimizing this both hold the score down and close in on Pacman
pub fn score_plus_ghost_distance<G: AdversarialGame>(game: &G) -> i64 {
    game.score() + ghost_distances(game).sum::<i64>()
}

/// The game score plus the distance from Pacman to the closest ghost
pub fn score_plus_nearest_ghost<G: AdversarialGame>(game: &G) -> i64 {
    game.score() + ghost_distances(game).min().unwrap_or(0)
}
