//! There are multiple multiplayer variations to minimax, this module is for the `paranoid`
//! variant. [This is currently the only variant supported by this crate]
//!
//! This variant assumes every agent except the maximizing one (Pacman, by default) is working
//! together to minimize the evaluation. With a single ghost it is plain two player minimax.
//!
//! This variant works by always scoring nodes from the maximizing agent's point of view.
//! When propagating scores up the tree, it chooses the highest score when its the maximizer's
//! turn and the lowest score when its any other agent's turn.
//!
//! Every ghost runs its own search, rooted at its own turn. Agents then move in index order,
//! wrapping around, and one full round of moves is one ply of depth.
//!
//! ```rust
//! use ghost_minimax::{
//!     paranoid::{MinimaxGhost, SearchOptions, TieBreak},
//!     Action, AdversarialGame, Position,
//! };
//!
//! // A toy game where Pacman (agent 0) and a single ghost (agent 1) walk along a line.
//! #[derive(Clone)]
//! struct Line {
//!     pacman: i32,
//!     ghost: i32,
//! }
//!
//! impl AdversarialGame for Line {
//!     fn agent_count(&self) -> usize { 2 }
//!     fn legal_actions(&self, _: usize) -> Vec<Action> {
//!         vec![Action::West, Action::East, Action::Stop]
//!     }
//!     fn successor(&self, agent: usize, action: Action) -> Self {
//!         let mut next = self.clone();
//!         let dx = action.vector().0;
//!         if agent == 0 { next.pacman += dx } else { next.ghost += dx }
//!         next
//!     }
//!     fn is_terminal(&self) -> bool { self.pacman == self.ghost }
//!     fn score(&self) -> i64 { 0 }
//!     fn agent_position(&self, agent: usize) -> Option<Position> {
//!         Some(Position::new(if agent == 0 { self.pacman } else { self.ghost }, 0))
//!     }
//! }
//!
//! // Pacman wants to stay far away, so we score states by the distance between the two
//! fn distance(line: &Line) -> i64 {
//!     (line.pacman - line.ghost).abs() as i64
//! }
//!
//! let ghost: MinimaxGhost<Line, i64, _> = MinimaxGhost::new(
//!     1,
//!     distance,
//!     "chaser",
//!     SearchOptions {
//!         depth: 2,
//!         tie_break: TieBreak::First,
//!         ..Default::default()
//!     },
//! );
//!
//! // The ghost is to the east of Pacman, so it closes in by walking west
//! let action = ghost.decide(&Line { pacman: 0, ghost: 4 }).unwrap();
//! assert_eq!(action, Action::West);
//! ```

mod score;
pub use score::Scorable;

mod minimax_return;
pub use minimax_return::MinMaxReturn;

mod eval;
pub use eval::{MinimaxGhost, SearchOptions, TieBreak};
