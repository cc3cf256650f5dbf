//! A small reference maze used by the fixtures, tests, benchmarks and the CLI
//!
//! This is not meant to be a full game engine. It implements just enough of the classic rules for
//! the ghosts to have something real to search over:
//!
//! - Every Pacman move costs a point, food is worth 10 and clearing the board is worth 500
//! - A capsule scares every ghost for [SCARED_TIME] ghost moves
//! - Touching a scared ghost is worth 200 and sends the ghost home, touching any other ghost loses
//!   the game and costs 500
//! - Ghosts can't stop, and can't turn around unless it is their only option
//!
//! Mazes are parsed from the usual text layouts: `%` is a wall, `.` food, `o` a capsule, `P`
//! Pacman and `G` a ghost.

use std::{fmt, sync::Arc};

use ghost_minimax::{Action, AdversarialGame, GhostError, Position, Result};
use rustc_hash::FxHashSet;

/// How many ghost moves a capsule keeps the ghosts scared for
pub const SCARED_TIME: u32 = 40;
/// Points lost on every Pacman move
pub const TIME_PENALTY: i64 = 1;
/// Points for a single piece of food
pub const FOOD_SCORE: i64 = 10;
/// Bonus for eating the last piece of food
pub const WIN_SCORE: i64 = 500;
/// Penalty for getting caught
pub const LOSE_PENALTY: i64 = 500;
/// Points for eating a scared ghost
pub const GHOST_SCORE: i64 = 200;

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Pacman ate all the food
    Won,
    /// A ghost caught Pacman
    Lost,
}

/// Where an agent is and what it is up to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AgentState {
    /// Where this agent spawned, ghosts return here when eaten
    pub start: Position,
    /// Where this agent is now
    pub position: Position,
    /// The last action this agent took
    pub direction: Action,
    /// Ghost moves left until this agent stops being scared
    pub scared_timer: u32,
}

impl AgentState {
    fn new(start: Position) -> Self {
        Self {
            start,
            position: start,
            direction: Action::Stop,
            scared_timer: 0,
        }
    }
}

/// A snapshot of a game in the reference maze
///
/// Agent 0 is always Pacman, the ghosts follow in the order they appear in the layout (top to
/// bottom, left to right).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    width: i32,
    height: i32,
    walls: Arc<FxHashSet<Position>>,
    food: FxHashSet<Position>,
    capsules: FxHashSet<Position>,
    agents: Vec<AgentState>,
    score: i64,
    outcome: Option<Outcome>,
}

impl Maze {
    /// Parse a maze from a text layout
    ///
    /// ```rust
    /// use ghost_agents::maze::Maze;
    /// use ghost_minimax::{AdversarialGame, Position};
    ///
    /// let maze = Maze::from_layout("%%%%%\n%P.G%\n%%%%%").unwrap();
    ///
    /// assert_eq!(maze.agent_count(), 2);
    /// assert_eq!(maze.agent_position(0), Some(Position::new(1, 1)));
    /// assert_eq!(maze.food_count(), 1);
    /// ```
    pub fn from_layout(layout: &str) -> Result<Self> {
        let rows: Vec<&str> = layout
            .lines()
            .map(str::trim_end)
            .filter(|line| !line.is_empty())
            .collect();

        let height = rows.len() as i32;
        let width = rows.first().map_or(0, |r| r.chars().count()) as i32;

        if height == 0 || width == 0 {
            return Err(GhostError::InvalidLayout {
                line: 1,
                message: "the layout is empty".to_owned(),
            });
        }

        let mut walls = FxHashSet::default();
        let mut food = FxHashSet::default();
        let mut capsules = FxHashSet::default();
        let mut pacman = None;
        let mut ghosts = vec![];

        for (row, line) in rows.iter().enumerate() {
            if line.chars().count() as i32 != width {
                return Err(GhostError::InvalidLayout {
                    line: row + 1,
                    message: format!("expected {} columns, found {}", width, line.chars().count()),
                });
            }

            // The first line of the layout is the top of the maze
            let y = height - 1 - row as i32;

            for (column, cell) in line.chars().enumerate() {
                let position = Position::new(column as i32, y);

                match cell {
                    '%' => {
                        walls.insert(position);
                    }
                    '.' => {
                        food.insert(position);
                    }
                    'o' => {
                        capsules.insert(position);
                    }
                    'P' => {
                        if pacman.replace(position).is_some() {
                            return Err(GhostError::InvalidLayout {
                                line: row + 1,
                                message: "more than one Pacman".to_owned(),
                            });
                        }
                    }
                    'G' => ghosts.push(position),
                    ' ' => {}
                    other => {
                        return Err(GhostError::InvalidLayout {
                            line: row + 1,
                            message: format!("unexpected character '{other}'"),
                        })
                    }
                }
            }
        }

        let pacman = pacman.ok_or_else(|| GhostError::InvalidLayout {
            line: rows.len(),
            message: "no Pacman in the layout".to_owned(),
        })?;

        let agents = std::iter::once(pacman)
            .chain(ghosts)
            .map(AgentState::new)
            .collect();

        Ok(Self {
            width,
            height,
            walls: Arc::new(walls),
            food,
            capsules,
            agents,
            score: 0,
            outcome: None,
        })
    }

    /// Width of the maze, walls included
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height of the maze, walls included
    pub fn height(&self) -> i32 {
        self.height
    }

    /// How much food is left
    pub fn food_count(&self) -> usize {
        self.food.len()
    }

    /// How the game ended, if it has
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// The state of one agent
    pub fn agent(&self, agent_index: usize) -> Option<&AgentState> {
        self.agents.get(agent_index)
    }

    /// Where every ghost is, in agent order
    pub fn ghost_positions(&self) -> Vec<Position> {
        self.agents[1..].iter().map(|a| a.position).collect()
    }

    fn is_wall(&self, position: &Position) -> bool {
        position.x < 0
            || position.y < 0
            || position.x >= self.width
            || position.y >= self.height
            || self.walls.contains(position)
    }

    fn open_directions(&self, position: Position) -> impl Iterator<Item = Action> + '_ {
        Action::directions()
            .into_iter()
            .filter(move |a| !self.is_wall(&position.moved(*a)))
    }

    fn apply_pacman_move(&mut self, action: Action) {
        let pacman = &mut self.agents[0];
        pacman.position = pacman.position.moved(action);
        pacman.direction = action;
        let position = pacman.position;

        self.score -= TIME_PENALTY;

        if self.food.remove(&position) {
            self.score += FOOD_SCORE;

            if self.food.is_empty() && self.outcome.is_none() {
                self.score += WIN_SCORE;
                self.outcome = Some(Outcome::Won);
            }
        }

        if self.capsules.remove(&position) {
            for ghost in &mut self.agents[1..] {
                ghost.scared_timer = SCARED_TIME;
            }
        }

        for ghost_index in 1..self.agents.len() {
            self.check_collision(ghost_index);
        }
    }

    fn apply_ghost_move(&mut self, ghost_index: usize, action: Action) {
        let ghost = &mut self.agents[ghost_index];
        ghost.position = ghost.position.moved(action);
        ghost.direction = action;
        ghost.scared_timer = ghost.scared_timer.saturating_sub(1);

        self.check_collision(ghost_index);
    }

    fn check_collision(&mut self, ghost_index: usize) {
        if self.agents[ghost_index].position != self.agents[0].position {
            return;
        }

        let ghost = &mut self.agents[ghost_index];
        if ghost.scared_timer > 0 {
            self.score += GHOST_SCORE;
            ghost.position = ghost.start;
            ghost.direction = Action::Stop;
            ghost.scared_timer = 0;
        } else if self.outcome.is_none() {
            self.score -= LOSE_PENALTY;
            self.outcome = Some(Outcome::Lost);
        }
    }
}

impl AdversarialGame for Maze {
    fn agent_count(&self) -> usize {
        self.agents.len()
    }

    fn legal_actions(&self, agent_index: usize) -> Vec<Action> {
        if self.is_terminal() {
            return vec![];
        }

        let agent = match self.agents.get(agent_index) {
            Some(agent) => agent,
            None => return vec![],
        };

        let mut actions: Vec<Action> = self.open_directions(agent.position).collect();

        if agent_index == 0 {
            actions.push(Action::Stop);
        } else {
            let reverse = agent.direction.reverse();
            if actions.len() > 1 && reverse != Action::Stop {
                actions.retain(|a| *a != reverse);
            }
        }

        actions
    }

    fn successor(&self, agent_index: usize, action: Action) -> Self {
        let mut next = self.clone();

        if agent_index == 0 {
            next.apply_pacman_move(action);
        } else {
            next.apply_ghost_move(agent_index, action);
        }

        next
    }

    fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    fn score(&self) -> i64 {
        self.score
    }

    fn agent_position(&self, agent_index: usize) -> Option<Position> {
        self.agents.get(agent_index).map(|a| a.position)
    }

    fn is_scared(&self, agent_index: usize) -> bool {
        self.agents
            .get(agent_index)
            .map_or(false, |a| a.scared_timer > 0)
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in (0..self.height).rev() {
            for x in 0..self.width {
                let position = Position::new(x, y);

                let cell = if let Some(i) = self.agents.iter().position(|a| a.position == position)
                {
                    if i == 0 {
                        'P'
                    } else {
                        'G'
                    }
                } else if self.walls.contains(&position) {
                    '%'
                } else if self.food.contains(&position) {
                    '.'
                } else if self.capsules.contains(&position) {
                    'o'
                } else {
                    ' '
                };

                write!(f, "{cell}")?;
            }
            writeln!(f)?;
        }

        write!(f, "score: {}", self.score)
    }
}
