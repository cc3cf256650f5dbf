//! Ghost configuration
//!
//! Every field has a default, so a config only needs to mention what it changes:
//!
//! ```rust
//! use ghost_agents::config::{GhostConfig, TieBreakConfig};
//!
//! let config = GhostConfig::from_json(r#"{ "agent_index": 2, "tie_break": "random" }"#).unwrap();
//!
//! assert_eq!(config.agent_index, 2);
//! assert_eq!(config.depth, 2);
//! assert_eq!(config.tie_break, TieBreakConfig::Random);
//! ```

use std::{fmt, str::FromStr};

use ghost_minimax::{
    evaluation::DEFAULT_EVALUATION,
    paranoid::{SearchOptions, TieBreak},
    GhostError, Result,
};

/// How a minimax ghost picks between equally good actions
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TieBreakConfig {
    /// The first tied action in legal-action order
    #[default]
    First,
    /// A random tied action, seeded from [GhostConfig::seed]
    Random,
    /// The tied action that ends up closest to the maximizing agent
    ClosestToMaximizer,
}

impl TieBreakConfig {
    /// Every accepted spelling
    pub const NAMES: [&'static str; 3] = ["first", "random", "closest-to-maximizer"];
}

impl FromStr for TieBreakConfig {
    type Err = GhostError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "first" => Ok(Self::First),
            "random" => Ok(Self::Random),
            "closest-to-maximizer" => Ok(Self::ClosestToMaximizer),
            other => Err(GhostError::InvalidConfig {
                message: format!(
                    "unknown tie break '{}' (expected one of: {})",
                    other,
                    Self::NAMES.join(", ")
                ),
            }),
        }
    }
}

impl fmt::Display for TieBreakConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::First => Self::NAMES[0],
            Self::Random => Self::NAMES[1],
            Self::ClosestToMaximizer => Self::NAMES[2],
        };
        write!(f, "{name}")
    }
}

/// Everything needed to build a ghost
///
/// Not every ghost reads every field. The search settings only matter to the minimax ghost, and
/// the probabilities only matter to the directional ghost.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GhostConfig {
    /// Which factory builds this ghost
    pub ghost: String,
    /// The agent this ghost controls
    pub agent_index: usize,
    /// The agent the ghosts are working against
    pub maximizing_agent: usize,
    /// How many full rounds of moves to search
    pub depth: usize,
    /// Name of the evaluation function used at the leaves
    pub evaluation: String,
    /// How ties between root actions are broken
    pub tie_break: TieBreakConfig,
    /// Seed for every random choice the ghost makes
    pub seed: u64,
    /// Whether to prune the search with alpha-beta
    pub alpha_beta: bool,
    /// Whether to drop Stop from the root actions when anything else is legal
    pub exclude_stop: bool,
    /// Whether to keep every explored option in the returned tree
    pub record_tree: bool,
    /// Probability mass a directional ghost puts on its best attacking moves
    pub prob_attack: f64,
    /// Probability mass a scared directional ghost puts on its best fleeing moves
    pub prob_scared_flee: f64,
}

impl Default for GhostConfig {
    fn default() -> Self {
        Self {
            ghost: "minimax".to_owned(),
            agent_index: 1,
            maximizing_agent: 0,
            depth: 2,
            evaluation: DEFAULT_EVALUATION.to_owned(),
            tie_break: TieBreakConfig::First,
            seed: 0,
            alpha_beta: true,
            exclude_stop: false,
            record_tree: false,
            prob_attack: 0.8,
            prob_scared_flee: 0.8,
        }
    }
}

impl GhostConfig {
    /// Parse a config from JSON, filling in anything missing with the defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).map_err(|e| GhostError::InvalidConfig {
            message: e.to_string(),
        })?;
        config.validate()?;

        Ok(config)
    }

    /// Check the fields that serde can't
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("prob_attack", self.prob_attack),
            ("prob_scared_flee", self.prob_scared_flee),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(GhostError::InvalidProbability { field, value });
            }
        }

        Ok(())
    }

    /// The search settings for a minimax ghost built from this config
    pub fn search_options(&self) -> SearchOptions {
        let tie_break = match self.tie_break {
            TieBreakConfig::First => TieBreak::First,
            TieBreakConfig::Random => TieBreak::Random { seed: self.seed },
            TieBreakConfig::ClosestToMaximizer => TieBreak::ClosestToMaximizer,
        };

        SearchOptions {
            depth: self.depth,
            maximizing_agent: self.maximizing_agent,
            tie_break,
            alpha_beta: self.alpha_beta,
            exclude_stop: self.exclude_stop,
            record_tree: self.record_tree,
        }
    }
}
