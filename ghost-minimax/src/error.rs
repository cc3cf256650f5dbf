//! Error types shared by the ghost crates

use thiserror::Error;

/// Everything that can go wrong while configuring or running a ghost
///
/// None of these are transient. They all point at a bad configuration or a caller breaking a
/// precondition, so there is nothing to retry.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum GhostError {
    /// The configured evaluation function name is not in the registry
    #[error("unknown evaluation function '{name}' (expected one of: {known})")]
    UnknownEvaluationFunction {
        /// The name we were asked for
        name: String,
        /// Comma separated list of the registered names
        known: String,
    },

    /// No ghost factory is registered under this name
    #[error("unknown ghost '{name}' (expected one of: {known})")]
    UnknownGhost {
        /// The name we were asked for
        name: String,
        /// Comma separated list of the registered names
        known: String,
    },

    /// `decide` was called on a state that is already won or lost
    #[error("cannot pick an action for agent {agent_index}: the game is already over")]
    TerminalState {
        /// The agent that asked for an action
        agent_index: usize,
    },

    /// An agent index does not exist in the given state
    #[error("agent {agent_index} is out of range for a game with {agent_count} agents")]
    AgentOutOfRange {
        /// The offending index
        agent_index: usize,
        /// How many agents the state has
        agent_count: usize,
    },

    /// A probability option was outside of `0.0..=1.0`
    #[error("invalid probability for {field}: {value} (must be between 0 and 1)")]
    InvalidProbability {
        /// Which option was wrong
        field: &'static str,
        /// The value we got
        value: f64,
    },

    /// The configuration could not be parsed
    #[error("invalid configuration: {message}")]
    InvalidConfig {
        /// What the parser complained about
        message: String,
    },

    /// A maze layout could not be parsed
    #[error("invalid layout at line {line}: {message}")]
    InvalidLayout {
        /// 1-based line number in the layout text
        line: usize,
        /// What was wrong with it
        message: String,
    },
}

/// Result alias used across the ghost crates
pub type Result<T, E = GhostError> = std::result::Result<T, E>;
