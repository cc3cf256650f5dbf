//! The types and traits that a game engine needs to provide to be searched by this crate
use std::fmt::{self, Display};

/// A single action an agent can take on its turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Action {
    /// Move one cell up (y + 1)
    North,
    /// Move one cell down (y - 1)
    South,
    /// Move one cell right (x + 1)
    East,
    /// Move one cell left (x - 1)
    West,
    /// Stay where you are
    Stop,
}

impl Action {
    /// Every action, in the order engines conventionally list them
    pub const fn all() -> [Action; 5] {
        [
            Action::North,
            Action::South,
            Action::East,
            Action::West,
            Action::Stop,
        ]
    }

    /// Only the four movement directions
    pub const fn directions() -> [Action; 4] {
        [Action::North, Action::South, Action::East, Action::West]
    }

    /// The (dx, dy) offset this action applies to a position
    pub const fn vector(&self) -> (i32, i32) {
        match self {
            Action::North => (0, 1),
            Action::South => (0, -1),
            Action::East => (1, 0),
            Action::West => (-1, 0),
            Action::Stop => (0, 0),
        }
    }

    /// The action that undoes this one. `Stop` reverses to itself
    pub const fn reverse(&self) -> Action {
        match self {
            Action::North => Action::South,
            Action::South => Action::North,
            Action::East => Action::West,
            Action::West => Action::East,
            Action::Stop => Action::Stop,
        }
    }

    /// Index of this action inside [Action::all()]
    pub const fn as_index(&self) -> usize {
        match self {
            Action::North => 0,
            Action::South => 1,
            Action::East => 2,
            Action::West => 3,
            Action::Stop => 4,
        }
    }
}

impl Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Action::North => "north",
            Action::South => "south",
            Action::East => "east",
            Action::West => "west",
            Action::Stop => "stop",
        };

        write!(f, "{s}")
    }
}

/// A cell on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Position {
    /// Column, growing to the east
    pub x: i32,
    /// Row, growing to the north
    pub y: i32,
}

impl Position {
    /// Construct a new position
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The Manhattan (taxicab) distance between two cells
    pub fn manhattan_distance(&self, other: &Position) -> i64 {
        i64::from((self.x - other.x).abs()) + i64::from((self.y - other.y).abs())
    }

    /// The cell you end up in after taking `action` from here
    pub fn moved(&self, action: Action) -> Position {
        let (dx, dy) = action.vector();

        Position {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One root level option and the value minimax assigned to it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionValue<ScoreType> {
    /// The action taken at the root
    pub action: Action,
    /// The minimax value of the subtree under `action`
    pub score: ScoreType,
}

/// The contract a game state must fulfil to be searched
///
/// States are treated as immutable snapshots: the search only ever reads them and derives new
/// states through [AdversarialGame::successor].
pub trait AdversarialGame: Clone {
    /// How many agents take turns in this game. Agent 0 is conventionally Pacman
    fn agent_count(&self) -> usize;

    /// The legal actions for the given agent
    ///
    /// This must return an empty `Vec`, and never fail, when the agent has nothing it can do
    fn legal_actions(&self, agent_index: usize) -> Vec<Action>;

    /// The state after `agent_index` takes `action`
    ///
    /// `action` must be a member of [AdversarialGame::legal_actions] for that agent
    fn successor(&self, agent_index: usize, action: Action) -> Self;

    /// True when the game has been won or lost
    fn is_terminal(&self) -> bool;

    /// The current game score
    fn score(&self) -> i64;

    /// Where the given agent is, if it is on the board
    fn agent_position(&self, agent_index: usize) -> Option<Position>;

    /// Whether the given agent is currently scared. Defaults to never
    fn is_scared(&self, _agent_index: usize) -> bool {
        false
    }
}
