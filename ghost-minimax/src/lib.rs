#![deny(
    warnings,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs
)]
//! This crate implements the minimax algorithm for ghosts in a grid pursuit game. You provide a
//! game state that implements [AdversarialGame] and an evaluation function that turns a given
//! state into anything that implements the `Ord` trait.
//!
//! The game engine itself (board, move legality, scoring) lives outside this crate. We only lean
//! on it through the [AdversarialGame] trait to list legal actions and generate successor states.

pub mod error;
pub mod evaluation;
pub mod paranoid;
pub mod types;

#[cfg(test)]
mod test_games;

pub use error::{GhostError, Result};
pub use types::{Action, ActionValue, AdversarialGame, Position};
