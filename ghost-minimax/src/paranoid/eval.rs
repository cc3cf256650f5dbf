use std::{cmp::Reverse, fmt::Debug, marker::PhantomData};

use derivative::Derivative;
use itertools::Itertools;
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};
use tracing::{debug, info_span};

use crate::{
    evaluation::{evaluation_function, EvaluationFn},
    Action, ActionValue, AdversarialGame, GhostError, Result,
};

use super::{MinMaxReturn, Scorable};

#[derive(Derivative, Clone)]
#[derivative(Debug)]
/// This is the struct that wraps an agent index, search options and a scoring function and can be
/// used to run minimax for that agent
///
/// A single `MinimaxGhost` is built once and then asked for decisions on many different states.
/// It holds no mutable state, so it can be shared between threads whenever the scoring function
/// can.
///
/// It also outputs traces using the [tracing] crate.
pub struct MinimaxGhost<GameType, ScoreType, ScorableType>
where
    ScorableType: Scorable<GameType, ScoreType>,
{
    /// The agent whose action [MinimaxGhost::decide] returns
    pub agent_index: usize,
    /// Used to label traces
    pub name: String,
    #[derivative(Debug = "ignore")]
    score_function: ScorableType,
    options: SearchOptions,
    #[derivative(Debug = "ignore")]
    _phantom: PhantomData<fn(&GameType) -> ScoreType>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Optional properties that can be defined for a [MinimaxGhost]
///
/// The defaults (as implemented by [Default]) are as follows:
/// ```
/// use ghost_minimax::paranoid::{SearchOptions, TieBreak};
///
/// let defaults: SearchOptions = Default::default();
///
/// assert_eq!(defaults.depth, 2);
/// assert_eq!(defaults.maximizing_agent, 0);
/// assert_eq!(defaults.tie_break, TieBreak::First);
/// assert!(defaults.alpha_beta);
/// assert!(!defaults.exclude_stop);
/// assert!(!defaults.record_tree);
/// ```
pub struct SearchOptions {
    /// How many plies to search. A ply is one full round where every agent moves once
    ///
    /// With a depth of 0 the successors of the root are evaluated directly
    pub depth: usize,
    /// The agent that maximizes the evaluation. Every other agent minimizes it
    ///
    /// Defaults to 0, which is Pacman
    pub maximizing_agent: usize,
    /// How to pick between root actions that share the best value
    pub tie_break: TieBreak,
    /// Prune with alpha-beta. This never changes the chosen action, it only skips subtrees that
    /// can't matter
    pub alpha_beta: bool,
    /// Never pick `Stop` at the root, unless it is the only legal action
    pub exclude_stop: bool,
    /// Keep every explored option in the returned [MinMaxReturn]. Without this, only the root
    /// keeps all of its options and every other node keeps just its chosen one
    pub record_tree: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            depth: 2,
            maximizing_agent: 0,
            tie_break: TieBreak::First,
            alpha_beta: true,
            exclude_stop: false,
            record_tree: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Rule used to choose among root actions that are all tied for the best value
pub enum TieBreak {
    /// The first tied action, in the order the game listed the legal actions
    #[default]
    First,
    /// Uniformly random among the tied actions
    ///
    /// [MinimaxGhost::decide] seeds a fresh rng from `seed` on every call, so the same state always
    /// gets the same answer. Use [MinimaxGhost::decide_with_rng] to bring your own randomness
    Random {
        /// Seed for the rng used by [MinimaxGhost::decide]
        seed: u64,
    },
    /// The tied action that leaves the deciding agent closest to the maximizing agent. Remaining
    /// ties fall back to [TieBreak::First]
    ClosestToMaximizer,
}

impl<GameType, ScoreType, ScorableType> MinimaxGhost<GameType, ScoreType, ScorableType>
where
    GameType: AdversarialGame,
    ScoreType: Clone + Debug + PartialOrd + Ord + Copy,
    ScorableType: Scorable<GameType, ScoreType>,
{
    /// Construct a new `MinimaxGhost`
    ///
    /// ```rust
    /// use ghost_minimax::paranoid::{MinimaxGhost, SearchOptions};
    /// # use ghost_minimax::{Action, AdversarialGame, Position};
    /// # #[derive(Clone)]
    /// # struct Board;
    /// # impl AdversarialGame for Board {
    /// #     fn agent_count(&self) -> usize { 2 }
    /// #     fn legal_actions(&self, _: usize) -> Vec<Action> { vec![Action::Stop] }
    /// #     fn successor(&self, _: usize, _: Action) -> Self { Board }
    /// #     fn is_terminal(&self) -> bool { false }
    /// #     fn score(&self) -> i64 { 0 }
    /// #     fn agent_position(&self, _: usize) -> Option<Position> { None }
    /// # }
    ///
    /// // This is the scoring function that we will use to evaluate the game states
    /// // Here it just returns the game score, but it could contain any logic to decide which
    /// // states are better for Pacman than others
    /// fn score_function(board: &Board) -> i64 {
    ///     board.score()
    /// }
    ///
    /// let ghost: MinimaxGhost<Board, i64, _> = MinimaxGhost::new(
    ///     1,
    ///     score_function,
    ///     "minimax-ghost",
    ///     SearchOptions {
    ///         depth: 3,
    ///         ..Default::default()
    ///     },
    /// );
    ///
    /// assert_eq!(ghost.decide(&Board).unwrap(), Action::Stop);
    /// ```
    pub fn new(
        agent_index: usize,
        score_function: ScorableType,
        name: impl Into<String>,
        options: SearchOptions,
    ) -> Self {
        Self {
            agent_index,
            name: name.into(),
            score_function,
            options,
            _phantom: PhantomData,
        }
    }

    /// The options this ghost searches with
    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// Pick the next action for this ghost
    ///
    /// This runs [MinimaxGhost::single_minimax] and then applies the configured [TieBreak] among
    /// the best root actions.
    ///
    /// Returns [Action::Stop] when this ghost has no legal actions, and
    /// [GhostError::TerminalState] when the game is already over.
    pub fn decide(&self, state: &GameType) -> Result<Action> {
        // Only the random policy ever draws from this
        let seed = match self.options.tie_break {
            TieBreak::Random { seed } => seed,
            TieBreak::First | TieBreak::ClosestToMaximizer => 0,
        };

        self.decide_with_rng(state, &mut StdRng::seed_from_u64(seed))
    }

    /// Same as [MinimaxGhost::decide] but [TieBreak::Random] draws from the given rng instead of
    /// the configured seed
    pub fn decide_with_rng<R: Rng + ?Sized>(&self, state: &GameType, rng: &mut R) -> Result<Action> {
        let span = info_span!(
            "minimax_decide",
            ghost_name = %self.name,
            agent_index = self.agent_index,
            depth = self.options.depth,
            chosen_action = tracing::field::Empty,
            chosen_score = tracing::field::Empty,
        );
        let _entered = span.enter();

        let root = self.single_minimax(state)?;

        let action = match &root {
            MinMaxReturn::Leaf { .. } => {
                debug!("No legal actions, stopping");
                Action::Stop
            }
            MinMaxReturn::Node { .. } => self.break_ties(state, &root, rng),
        };

        span.record("chosen_action", tracing::field::display(action));
        span.record("chosen_score", tracing::field::debug(root.score()));

        Ok(action)
    }

    /// The exact minimax value of every root action, in the order the game listed them
    ///
    /// Alpha-beta only bounds the values of the options it did not choose, so this always runs a
    /// full search. This is empty when the deciding agent has no legal actions
    pub fn root_values(&self, state: &GameType) -> Result<Vec<ActionValue<ScoreType>>> {
        let root = self.search(state, false)?;
        let legal = state.legal_actions(self.agent_index);

        let values = match root {
            MinMaxReturn::Leaf { .. } => vec![],
            MinMaxReturn::Node { options, .. } => options
                .into_iter()
                .map(|(action, r)| ActionValue {
                    action,
                    score: *r.score(),
                })
                .sorted_by_key(|v| legal.iter().position(|a| *a == v.action))
                .collect(),
        };

        Ok(values)
    }

    /// This runs the minimax algorithm to the configured depth, returning a struct that contains
    /// the information about the 'tree' we searched.
    ///
    /// The return value is a recursive struct that tells you the score of the current node, and
    /// the score of its children. The root always lists every option it looked at.
    pub fn single_minimax(&self, state: &GameType) -> Result<MinMaxReturn<ScoreType>> {
        self.search(state, self.options.alpha_beta)
    }

    fn search(&self, state: &GameType, prune: bool) -> Result<MinMaxReturn<ScoreType>> {
        let players = self.turn_order(state)?;

        if state.is_terminal() {
            return Err(GhostError::TerminalState {
                agent_index: self.agent_index,
            });
        }

        let max_depth = self.options.depth.saturating_mul(players.len());
        let result = self.minimax(state, &players, 0, None, None, max_depth, prune);

        debug!(
            score = ?result.score(),
            route = ?result.chosen_route(),
            "finished minimax"
        );

        Ok(result)
    }

    /// Agents in the order they move, starting with us and wrapping around the agent indexes
    fn turn_order(&self, state: &GameType) -> Result<Vec<usize>> {
        let agent_count = state.agent_count();

        for agent_index in [self.agent_index, self.options.maximizing_agent] {
            if agent_index >= agent_count {
                return Err(GhostError::AgentOutOfRange {
                    agent_index,
                    agent_count,
                });
            }
        }

        Ok((0..agent_count)
            .map(|i| (self.agent_index + i) % agent_count)
            .collect())
    }

    /// `depth` counts single moves, so one ply is `players.len()` of them. `alpha` and `beta` are
    /// `None` while unbounded
    #[allow(clippy::too_many_arguments)]
    fn minimax(
        &self,
        node: &GameType,
        players: &[usize],
        depth: usize,
        alpha: Option<ScoreType>,
        beta: Option<ScoreType>,
        max_depth: usize,
        prune: bool,
    ) -> MinMaxReturn<ScoreType> {
        let mut alpha = alpha;
        let mut beta = beta;

        if node.is_terminal() || (depth > 0 && depth >= max_depth) {
            return MinMaxReturn::Leaf {
                score: self.score_function.score(node),
            };
        }

        let agent = players[depth % players.len()];
        let is_maximizing = agent == self.options.maximizing_agent;

        let mut possible_actions = node.legal_actions(agent);
        if depth == 0
            && self.options.exclude_stop
            && possible_actions.iter().any(|a| *a != Action::Stop)
        {
            possible_actions.retain(|a| *a != Action::Stop);
        }

        if possible_actions.is_empty() {
            return MinMaxReturn::Leaf {
                score: self.score_function.score(node),
            };
        }

        let mut options: Vec<(Action, MinMaxReturn<ScoreType>)> =
            Vec::with_capacity(possible_actions.len());

        for action in possible_actions {
            let next_node = node.successor(agent, action);
            let next_return = self.minimax(
                &next_node,
                players,
                depth + 1,
                alpha,
                beta,
                max_depth,
                prune,
            );
            let value = *next_return.score();
            options.push((action, next_return));

            if !prune {
                continue;
            }

            // Cut only on strict inequalities so that values tied with the best one are exact
            if is_maximizing {
                if beta.map_or(false, |b| value > b) {
                    break;
                }

                alpha = Some(alpha.map_or(value, |a| std::cmp::max(a, value)));
            } else {
                if alpha.map_or(false, |a| value < a) {
                    break;
                }

                beta = Some(beta.map_or(value, |b| std::cmp::min(b, value)));
            }
        }

        // Stable sorts, so ties stay in the order the game listed them
        if is_maximizing {
            options.sort_by_cached_key(|(_, value)| Reverse(*value.score()));
        } else {
            options.sort_by_cached_key(|(_, value)| *value.score());
        }
        let chosen_score = *options[0].1.score();

        if depth > 0 && !self.options.record_tree {
            options.truncate(1);
        }

        MinMaxReturn::Node {
            options,
            is_maximizing,
            moving_agent: agent,
            score: chosen_score,
        }
    }

    fn break_ties<R: Rng + ?Sized>(
        &self,
        state: &GameType,
        root: &MinMaxReturn<ScoreType>,
        rng: &mut R,
    ) -> Action {
        let options = match root {
            MinMaxReturn::Node { options, .. } => options,
            MinMaxReturn::Leaf { .. } => return Action::Stop,
        };
        let best = *root.score();
        let tied = options
            .iter()
            .take_while(|(_, r)| *r.score() == best)
            .map(|(a, _)| *a)
            .collect_vec();

        if tied.len() > 1 {
            debug!(tied = ?tied, "breaking a tie between root actions");
        }

        let chosen = match self.options.tie_break {
            TieBreak::First => tied.first().copied(),
            TieBreak::Random { .. } => tied.choose(rng).copied(),
            TieBreak::ClosestToMaximizer => tied.iter().copied().min_by_key(|a| {
                let next = state.successor(self.agent_index, *a);

                next.agent_position(self.agent_index)
                    .zip(next.agent_position(self.options.maximizing_agent))
                    .map_or(i64::MAX, |(me, target)| me.manhattan_distance(&target))
            }),
        };

        chosen.unwrap_or(Action::Stop)
    }
}

impl<GameType> MinimaxGhost<GameType, i64, EvaluationFn<GameType>>
where
    GameType: AdversarialGame,
{
    /// Construct a new `MinimaxGhost` whose evaluation function is looked up by name in
    /// [crate::evaluation]
    ///
    /// Unknown names fail here, not on the first search
    pub fn from_evaluation_name(
        agent_index: usize,
        evaluation: &str,
        name: impl Into<String>,
        options: SearchOptions,
    ) -> Result<Self> {
        let score_function = evaluation_function::<GameType>(evaluation)?;

        Ok(Self::new(agent_index, score_function, name, options))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::{
        evaluation::score_plus_ghost_distance,
        test_games::{textbook_minimax, Corridor, Tree, TreeGame},
    };

    fn negative_distance(c: &Corridor) -> i64 {
        -(i64::from(c.position(0) - c.position(1)).abs())
    }

    fn constant(_: &Corridor) -> i64 {
        0
    }

    fn leaves(values: &[(Action, i64)]) -> Tree {
        Tree::Branch(
            values
                .iter()
                .map(|(a, v)| (*a, Tree::Leaf(*v)))
                .collect(),
        )
    }

    /// Max over three mins over two maxes
    fn textbook_tree() -> Tree {
        use Action::*;

        Tree::Branch(vec![
            (
                North,
                Tree::Branch(vec![
                    (North, leaves(&[(North, 3), (South, 12)])),
                    (South, leaves(&[(North, 8), (South, 2)])),
                ]),
            ),
            (
                South,
                Tree::Branch(vec![
                    (North, leaves(&[(North, 4), (South, 6)])),
                    (South, leaves(&[(North, 14), (South, 5)])),
                ]),
            ),
            (
                East,
                Tree::Branch(vec![
                    (North, leaves(&[(North, 2), (South, 1)])),
                    (South, leaves(&[(North, 9), (South, 10)])),
                ]),
            ),
        ])
    }

    fn tree_ghost(agent_index: usize, options: SearchOptions) -> MinimaxGhost<TreeGame, i64, fn(&TreeGame) -> i64> {
        MinimaxGhost::new(
            agent_index,
            crate::evaluation::score::<TreeGame>,
            "tree",
            options,
        )
    }

    #[test]
    fn test_corridor_two_ply() {
        // 1x3 corridor, the maximizer at 0 and the minimizer at 2. Worked out by hand:
        //
        // east -> ghost west (caught, 0)
        //      -> ghost stop -> max(pacman west: -2, pacman east: caught 0, pacman stop: -1) = 0
        //      = 0
        // stop -> ghost west -> pacman east (caught, 0)                                    = 0
        //      -> ghost stop -> max(pacman east: min(0, -1), pacman stop: min(-1, -2))     = -1
        //      = -1
        let corridor = Corridor::new(3, vec![0, 2]);

        for alpha_beta in [true, false] {
            let ghost: MinimaxGhost<Corridor, i64, _> = MinimaxGhost::new(
                0,
                negative_distance,
                "corridor",
                SearchOptions {
                    depth: 2,
                    alpha_beta,
                    ..Default::default()
                },
            );

            assert_eq!(ghost.decide(&corridor).unwrap(), Action::East);
            assert_eq!(
                ghost.root_values(&corridor).unwrap(),
                vec![
                    ActionValue {
                        action: Action::East,
                        score: 0
                    },
                    ActionValue {
                        action: Action::Stop,
                        score: -1
                    },
                ]
            );
        }
    }

    #[test]
    fn test_single_ghost_matches_textbook_minimax() {
        let game = TreeGame::new(textbook_tree());
        let expected = textbook_minimax(&textbook_tree(), true);
        assert_eq!(expected, 8);

        for alpha_beta in [true, false] {
            let pacman = tree_ghost(
                0,
                SearchOptions {
                    alpha_beta,
                    ..Default::default()
                },
            );

            let result = pacman.single_minimax(&game).unwrap();
            assert_eq!(*result.score(), expected);
            assert_eq!(pacman.decide(&game).unwrap(), Action::North);
        }
    }

    #[test]
    fn test_ghost_rooted_search_minimizes() {
        // Same tree, but now agent 1 moves first and minimizes
        let game = TreeGame::new(textbook_tree());
        let expected = textbook_minimax(&textbook_tree(), false);
        assert_eq!(expected, 3);

        let ghost = tree_ghost(1, Default::default());

        let result = ghost.single_minimax(&game).unwrap();
        assert_eq!(*result.score(), expected);
        assert!(matches!(
            result,
            MinMaxReturn::Node {
                is_maximizing: false,
                moving_agent: 1,
                ..
            }
        ));
        assert_eq!(ghost.decide(&game).unwrap(), Action::North);
    }

    #[test]
    fn test_depth_zero_evaluates_root_successors_only() {
        let calls = AtomicUsize::new(0);
        let counting = |c: &Corridor| {
            calls.fetch_add(1, Ordering::Relaxed);
            negative_distance(c)
        };

        let ghost: MinimaxGhost<Corridor, i64, _> = MinimaxGhost::new(
            0,
            counting,
            "depth-zero",
            SearchOptions {
                depth: 0,
                alpha_beta: false,
                ..Default::default()
            },
        );
        let corridor = Corridor::new(5, vec![2, 4]);

        assert_eq!(ghost.decide(&corridor).unwrap(), Action::East);
        assert_eq!(calls.load(Ordering::Relaxed), 3);

        let result = ghost.single_minimax(&corridor).unwrap();
        if let MinMaxReturn::Node { options, .. } = result {
            assert_eq!(options.len(), 3);
            assert!(options
                .iter()
                .all(|(_, r)| matches!(r, MinMaxReturn::Leaf { .. })));
        } else {
            panic!("depth zero should still expand the root");
        }
    }

    #[test]
    fn test_terminal_successors_are_not_expanded() {
        let calls = AtomicUsize::new(0);
        let counting = |g: &TreeGame| {
            calls.fetch_add(1, Ordering::Relaxed);
            g.score()
        };

        let ghost: MinimaxGhost<TreeGame, i64, _> = MinimaxGhost::new(
            0,
            counting,
            "terminal",
            SearchOptions {
                depth: 5,
                ..Default::default()
            },
        );
        let game = TreeGame::new(leaves(&[(Action::West, -3), (Action::East, 7)]));

        assert_eq!(ghost.decide(&game).unwrap(), Action::East);
        assert_eq!(calls.load(Ordering::Relaxed), 2);
    }

    #[test]
    fn test_no_legal_actions_stops() {
        let ghost: MinimaxGhost<Corridor, i64, _> =
            MinimaxGhost::new(0, negative_distance, "frozen", Default::default());
        let corridor = Corridor::new(3, vec![0, 2]).freeze(0);

        assert_eq!(ghost.decide(&corridor).unwrap(), Action::Stop);
        assert_eq!(ghost.root_values(&corridor).unwrap(), vec![]);
        assert!(matches!(
            ghost.single_minimax(&corridor).unwrap(),
            MinMaxReturn::Leaf { score: -2 }
        ));
    }

    #[test]
    fn test_inner_node_without_actions_is_evaluated() {
        // The ghost can't move, so its turn scores the state as it is
        let ghost: MinimaxGhost<Corridor, i64, _> =
            MinimaxGhost::new(0, negative_distance, "stuck-ghost", Default::default());
        let corridor = Corridor::new(3, vec![0, 2]).freeze(1);

        assert_eq!(ghost.decide(&corridor).unwrap(), Action::East);
        assert_eq!(
            ghost
                .root_values(&corridor)
                .unwrap()
                .into_iter()
                .map(|v| v.score)
                .collect_vec(),
            vec![-1, -2]
        );
    }

    #[test]
    fn test_terminal_state_is_an_error() {
        let ghost: MinimaxGhost<Corridor, i64, _> =
            MinimaxGhost::new(1, negative_distance, "late", Default::default());
        let corridor = Corridor::new(3, vec![1, 1]);

        assert_eq!(
            ghost.decide(&corridor),
            Err(GhostError::TerminalState { agent_index: 1 })
        );
    }

    #[test]
    fn test_agent_out_of_range() {
        let ghost: MinimaxGhost<Corridor, i64, _> =
            MinimaxGhost::new(3, negative_distance, "missing", Default::default());

        assert_eq!(
            ghost.decide(&Corridor::new(3, vec![0, 2])),
            Err(GhostError::AgentOutOfRange {
                agent_index: 3,
                agent_count: 2
            })
        );

        let ghost: MinimaxGhost<Corridor, i64, _> = MinimaxGhost::new(
            1,
            negative_distance,
            "bad-maximizer",
            SearchOptions {
                maximizing_agent: 2,
                ..Default::default()
            },
        );
        assert!(matches!(
            ghost.decide(&Corridor::new(3, vec![0, 2])),
            Err(GhostError::AgentOutOfRange { agent_index: 2, .. })
        ));
    }

    #[test]
    fn test_alpha_beta_never_changes_the_decision() {
        let corridors = [
            Corridor::new(7, vec![0, 3, 6]),
            Corridor::new(7, vec![3, 0, 6]),
            Corridor::new(7, vec![5, 4, 1]).with_score(10),
        ];

        for corridor in &corridors {
            for agent_index in 0..3 {
                for depth in 0..=2 {
                    let build = |alpha_beta| -> MinimaxGhost<Corridor, i64, fn(&Corridor) -> i64> {
                        MinimaxGhost::new(
                            agent_index,
                            score_plus_ghost_distance::<Corridor>,
                            "pruning",
                            SearchOptions {
                                depth,
                                alpha_beta,
                                ..Default::default()
                            },
                        )
                    };
                    let pruned = build(true);
                    let full = build(false);

                    assert_eq!(
                        pruned.decide(corridor).unwrap(),
                        full.decide(corridor).unwrap(),
                        "{corridor:?} agent {agent_index} depth {depth}"
                    );
                    assert_eq!(
                        pruned.single_minimax(corridor).unwrap().score(),
                        full.single_minimax(corridor).unwrap().score(),
                    );
                }
            }
        }
    }

    #[test]
    fn test_decisions_are_deterministic() {
        let corridor = Corridor::new(7, vec![1, 3, 6]);

        for tie_break in [
            TieBreak::First,
            TieBreak::Random { seed: 42 },
            TieBreak::ClosestToMaximizer,
        ] {
            let ghost: MinimaxGhost<Corridor, i64, _> = MinimaxGhost::new(
                2,
                constant,
                "steady",
                SearchOptions {
                    tie_break,
                    ..Default::default()
                },
            );

            let first = ghost.decide(&corridor).unwrap();
            for _ in 0..10 {
                assert_eq!(ghost.decide(&corridor).unwrap(), first);
            }
        }
    }

    #[test]
    fn test_root_values_ignore_pruning() {
        use Action::*;

        // Once north is worth 5, alpha-beta stops looking under south after seeing the 3
        let game = TreeGame::new(Tree::Branch(vec![
            (North, leaves(&[(North, 5)])),
            (South, leaves(&[(North, 3), (South, 1)])),
        ]));
        let pacman = tree_ghost(
            0,
            SearchOptions {
                depth: 1,
                alpha_beta: true,
                ..Default::default()
            },
        );

        let pruned = pacman.single_minimax(&game).unwrap();
        assert_eq!(pruned.first_options_for_agent(0).unwrap()[1].1.score(), &3);

        assert_eq!(
            pacman.root_values(&game).unwrap(),
            vec![
                ActionValue {
                    action: North,
                    score: 5
                },
                ActionValue {
                    action: South,
                    score: 1
                },
            ]
        );
    }

    #[test]
    fn test_ghosts_can_be_shared_between_threads() {
        fn assert_send_sync<T: Send + Sync>() {}

        assert_send_sync::<MinimaxGhost<Corridor, i64, EvaluationFn<Corridor>>>();
    }

    #[test]
    fn test_huge_depth_saturates() {
        // The textbook tree ends after three moves, so an unbounded depth is the same as any
        // depth deep enough to reach every leaf
        let game = TreeGame::new(textbook_tree());
        let ghost = tree_ghost(
            0,
            SearchOptions {
                depth: usize::MAX,
                ..Default::default()
            },
        );

        assert_eq!(*ghost.single_minimax(&game).unwrap().score(), 8);
        assert_eq!(ghost.decide(&game).unwrap(), Action::North);
    }

    #[test]
    fn test_tie_breaks() {
        // Every action ties, the ghost at 1 can go west, east or stop and Pacman is at 4
        let corridor = Corridor::new(5, vec![4, 1]);
        let build = |tie_break| -> MinimaxGhost<Corridor, i64, fn(&Corridor) -> i64> {
            MinimaxGhost::new(
                1,
                constant,
                "ties",
                SearchOptions {
                    tie_break,
                    ..Default::default()
                },
            )
        };

        assert_eq!(
            build(TieBreak::First).decide(&corridor).unwrap(),
            Action::West
        );
        assert_eq!(
            build(TieBreak::ClosestToMaximizer)
                .decide(&corridor)
                .unwrap(),
            Action::East
        );

        let random = build(TieBreak::Random { seed: 7 });
        let mut rng = StdRng::seed_from_u64(1234);
        let mut seen = vec![];
        for _ in 0..50 {
            let action = random.decide_with_rng(&corridor, &mut rng).unwrap();
            assert!(corridor.legal_actions(1).contains(&action));
            seen.push(action);
        }
        assert_eq!(seen.into_iter().unique().count(), 3);
    }

    #[test]
    fn test_exclude_stop() {
        use Action::*;

        let game = TreeGame::new(leaves(&[(Stop, 5), (North, 3)]));
        let options = SearchOptions {
            exclude_stop: true,
            ..Default::default()
        };

        assert_eq!(tree_ghost(0, Default::default()).decide(&game).unwrap(), Stop);
        assert_eq!(tree_ghost(0, options).decide(&game).unwrap(), North);

        let only_stop = TreeGame::new(leaves(&[(Stop, 5)]));
        assert_eq!(tree_ghost(0, options).decide(&only_stop).unwrap(), Stop);
    }

    #[test]
    fn test_record_tree_keeps_every_option() {
        let game = TreeGame::new(textbook_tree());

        let inner_option_counts = |record_tree| {
            let result = tree_ghost(
                0,
                SearchOptions {
                    record_tree,
                    alpha_beta: false,
                    ..Default::default()
                },
            )
            .single_minimax(&game)
            .unwrap();

            match result {
                MinMaxReturn::Node { options, .. } => options
                    .iter()
                    .map(|(_, r)| match r {
                        MinMaxReturn::Node { options, .. } => options.len(),
                        MinMaxReturn::Leaf { .. } => 0,
                    })
                    .collect_vec(),
                MinMaxReturn::Leaf { .. } => vec![],
            }
        };

        assert_eq!(inner_option_counts(true), vec![2, 2, 2]);
        assert_eq!(inner_option_counts(false), vec![1, 1, 1]);
    }

    #[test]
    fn test_from_evaluation_name_fails_fast() {
        let ghost = MinimaxGhost::<Corridor, i64, _>::from_evaluation_name(
            1,
            "score-plus-ghost-distance",
            "named",
            Default::default(),
        );
        assert!(ghost.is_ok());

        let ghost = MinimaxGhost::<Corridor, i64, _>::from_evaluation_name(
            1,
            "scoreEvaluationFunctionGhost",
            "named",
            Default::default(),
        );
        assert!(matches!(
            ghost,
            Err(GhostError::UnknownEvaluationFunction { .. })
        ));
    }
}
