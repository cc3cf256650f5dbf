//! Tiny hand-checkable games used by the unit tests

use std::sync::Arc;

use crate::{Action, AdversarialGame, Position};

/// A 1xN corridor. Every agent can step west, east or stop while staying inside the corridor.
/// The game ends as soon as any ghost shares a cell with agent 0.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct Corridor {
    width: i32,
    positions: Vec<i32>,
    frozen: Vec<bool>,
    score: i64,
}

impl Corridor {
    pub(crate) fn new(width: i32, positions: Vec<i32>) -> Self {
        let frozen = vec![false; positions.len()];

        Self {
            width,
            positions,
            frozen,
            score: 0,
        }
    }

    pub(crate) fn with_score(mut self, score: i64) -> Self {
        self.score = score;
        self
    }

    /// The given agent will have no legal actions at all
    pub(crate) fn freeze(mut self, agent_index: usize) -> Self {
        self.frozen[agent_index] = true;
        self
    }

    pub(crate) fn position(&self, agent_index: usize) -> i32 {
        self.positions[agent_index]
    }
}

impl AdversarialGame for Corridor {
    fn agent_count(&self) -> usize {
        self.positions.len()
    }

    fn legal_actions(&self, agent_index: usize) -> Vec<Action> {
        if self.is_terminal() || self.frozen[agent_index] {
            return vec![];
        }

        let x = self.positions[agent_index];

        [Action::West, Action::East, Action::Stop]
            .into_iter()
            .filter(|a| {
                let (dx, _) = a.vector();
                (0..self.width).contains(&(x + dx))
            })
            .collect()
    }

    fn successor(&self, agent_index: usize, action: Action) -> Self {
        let mut next = self.clone();
        next.positions[agent_index] += action.vector().0;
        next
    }

    fn is_terminal(&self) -> bool {
        self.positions[1..].contains(&self.positions[0])
    }

    fn score(&self) -> i64 {
        self.score
    }

    fn agent_position(&self, agent_index: usize) -> Option<Position> {
        self.positions
            .get(agent_index)
            .map(|&x| Position::new(x, 0))
    }
}

/// An explicit game tree where two agents alternate, starting with agent 0
#[derive(Debug)]
pub(crate) enum Tree {
    Leaf(i64),
    Branch(Vec<(Action, Tree)>),
}

#[derive(Debug, Clone)]
pub(crate) struct TreeGame {
    root: Arc<Tree>,
    path: Vec<Action>,
}

impl TreeGame {
    pub(crate) fn new(tree: Tree) -> Self {
        Self {
            root: Arc::new(tree),
            path: vec![],
        }
    }

    fn node(&self) -> &Tree {
        let mut node = self.root.as_ref();

        for a in &self.path {
            node = match node {
                Tree::Branch(children) => {
                    &children
                        .iter()
                        .find(|(action, _)| action == a)
                        .expect("path only follows legal actions")
                        .1
                }
                Tree::Leaf(_) => panic!("walked past a leaf"),
            };
        }

        node
    }
}

impl AdversarialGame for TreeGame {
    fn agent_count(&self) -> usize {
        2
    }

    fn legal_actions(&self, _agent_index: usize) -> Vec<Action> {
        match self.node() {
            Tree::Leaf(_) => vec![],
            Tree::Branch(children) => children.iter().map(|(a, _)| *a).collect(),
        }
    }

    fn successor(&self, _agent_index: usize, action: Action) -> Self {
        let mut next = self.clone();
        next.path.push(action);
        next
    }

    fn is_terminal(&self) -> bool {
        matches!(self.node(), Tree::Leaf(_))
    }

    fn score(&self) -> i64 {
        match self.node() {
            Tree::Leaf(v) => *v,
            Tree::Branch(_) => 0,
        }
    }

    fn agent_position(&self, _agent_index: usize) -> Option<Position> {
        None
    }
}

/// Plain two player minimax over a [Tree], the way it is written in textbooks
pub(crate) fn textbook_minimax(tree: &Tree, maximizing: bool) -> i64 {
    match tree {
        Tree::Leaf(v) => *v,
        Tree::Branch(children) => {
            let values = children
                .iter()
                .map(|(_, child)| textbook_minimax(child, !maximizing));

            if maximizing {
                values.max().unwrap()
            } else {
                values.min().unwrap()
            }
        }
    }
}
