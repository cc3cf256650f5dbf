use std::fmt::Debug;
use text_trees::StringTreeNode;

use crate::Action;

#[derive(Debug, Clone)]
/// This is returned from a run of the minimax algorithm
/// It contains the information we generated about the game tree
pub enum MinMaxReturn<ScoreType: Clone + Debug + PartialOrd + Ord + Copy> {
    /// This is a non-leaf node in the game tree
    /// We have information about the options we looked at as well as the chosen score
    Node {
        /// Whether this node was a maximizing node or not
        is_maximizing: bool,
        /// A 'recursive' look at the moves under us
        /// This array is sorted by the score of the move, and whether we were in a maximizing or
        /// minimizing node. Moves with equal scores keep the order the game listed them in.
        /// The first element is always the chosen move at this node. It's [MinMaxReturn::score()]
        /// should always equal the score attribute of this node
        ///
        /// Unless the tree is being recorded, nodes below the root only keep their chosen option
        options: Vec<(Action, Self)>,
        /// Which agent was moving at this node
        moving_agent: usize,
        /// The chosen score
        /// This should always match the score of the first element in [MinMaxReturn::Node::options]
        score: ScoreType,
    },
    /// Represents a leaf node in the game tree
    /// This happens when we reach a terminal state, when we reach the maximum depth or when the
    /// moving agent has no legal actions
    Leaf {
        #[allow(missing_docs)]
        score: ScoreType,
    },
}

impl<ScoreType> MinMaxReturn<ScoreType>
where
    ScoreType: Clone + Debug + PartialOrd + Ord + Copy,
{
    /// Returns the score for this node
    pub fn score(&self) -> &ScoreType {
        match self {
            MinMaxReturn::Node { score, .. } => score,
            MinMaxReturn::Leaf { score } => score,
        }
    }

    /// Returns the action the given agent should take
    /// If the agent never moves along the chosen route, this will return None
    ///
    /// We take advantage of the fact that the moves are sorted by score, so we can just return the
    /// first option where the agent is moving. This ignores any tie-break policy, see
    /// [crate::paranoid::MinimaxGhost::decide] for that
    pub fn best_action(&self, agent_index: usize) -> Option<Action> {
        self.first_options_for_agent(agent_index)
            .and_then(|options| options.first().map(|x| x.0))
    }

    /// Return the first set of move options for the given agent along the chosen route
    pub fn first_options_for_agent(&self, agent_index: usize) -> Option<&Vec<(Action, Self)>> {
        match self {
            MinMaxReturn::Leaf { .. } => None,
            MinMaxReturn::Node {
                moving_agent,
                options,
                ..
            } => {
                if *moving_agent == agent_index {
                    Some(options)
                } else {
                    let chosen = options.first()?;
                    chosen.1.first_options_for_agent(agent_index)
                }
            }
        }
    }

    /// Returns all the moves in the 'route' through the game tree that minimax took
    /// This is useful for debugging as it shows each of the moves every agent made during
    /// the search
    pub fn chosen_route(&self) -> Vec<(usize, Action)> {
        match self {
            MinMaxReturn::Leaf { .. } => vec![],
            MinMaxReturn::Node {
                moving_agent,
                options,
                ..
            } => {
                if let Some(chosen) = options.first() {
                    let mut tail = chosen.1.chosen_route();
                    tail.insert(0, (*moving_agent, chosen.0));
                    tail
                } else {
                    vec![]
                }
            }
        }
    }

    /// This returns a visual representation of the game tree that minimax generated
    /// It shows the chosen score, the moving agent and the chosen move at each level
    pub fn to_text_tree(&self) -> Option<String> {
        let tree_node = self.to_text_tree_node("".to_owned())?;
        Some(format!("{}", tree_node))
    }

    fn to_text_tree_node(&self, label: String) -> Option<StringTreeNode> {
        match self {
            MinMaxReturn::Leaf { score } => {
                Some(StringTreeNode::new(format!("{} {:?}", label, score)))
            }
            MinMaxReturn::Node {
                moving_agent,
                options,
                score,
                ..
            } => {
                let mut node = StringTreeNode::new(format!("{} {:?}", label, score));
                for (m, result) in options {
                    if let Some(next_node) =
                        result.to_text_tree_node(format!("{} (agent {})", m, moving_agent))
                    {
                        node.push_node(next_node);
                    }
                }

                Some(node)
            }
        }
    }
}
