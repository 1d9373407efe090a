//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping, persistence).
//!
//! # Board Geometry
//!
//! Positions are expressed in *board units*. Every reachable position is a multiple
//! of the grid step (`CELL_SIZE`), so a 400x400 board with a 20 unit step is a
//! 20x20 grid:
//!
//! - **Width**: 400 units (columns 0-19)
//! - **Height**: 400 units (rows 0-19)
//! - **Spawn cell**: column 9, row 10 => `(180, 200)`
//!
//! # Game Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 100 | Fixed step interval (one grid cell per tick) |
//!
//! # Examples
//!
//! ```
//! use tui_snake_types::{Cell, Direction, GameAction, CELL_SIZE};
//!
//! let head = Cell::new(180, 200);
//! assert_eq!(head.step(Direction::Right, CELL_SIZE), Cell::new(200, 200));
//!
//! assert!(Direction::Left.is_opposite(Direction::Right));
//!
//! let action = GameAction::from_str("up").unwrap();
//! assert_eq!(action, GameAction::Turn(Direction::Up));
//! ```

/// Board width in board units (20 columns of 20 units)
pub const BOARD_WIDTH: i32 = 400;

/// Board height in board units (20 rows of 20 units)
pub const BOARD_HEIGHT: i32 = 400;

/// Grid step in board units
pub const CELL_SIZE: i32 = 20;

/// Spawn column (grid index, not board units)
pub const SPAWN_COL: i32 = 9;

/// Spawn row (grid index, not board units)
pub const SPAWN_ROW: i32 = 10;

/// Points awarded per food eaten
pub const FOOD_POINTS: u32 = 3;

/// Fixed step interval in milliseconds
pub const TICK_MS: u32 = 100;

/// Maximum number of undrained engine events.
pub const EVENT_QUEUE_CAPACITY: usize = 16;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_board_is_twenty_cells_square() {
        assert_eq!(BOARD_WIDTH / CELL_SIZE, 20);
        assert_eq!(BOARD_HEIGHT / CELL_SIZE, 20);
        assert_eq!(SPAWN_COL * CELL_SIZE, 180);
        assert_eq!(SPAWN_ROW * CELL_SIZE, 200);
        assert_eq!(FOOD_POINTS, 3);
        assert_eq!(TICK_MS, 100);
    }

    #[test]
    fn opposite_is_symmetric() {
        for d in Direction::ALL {
            assert_eq!(d.opposite().opposite(), d);
            assert!(d.is_opposite(d.opposite()));
            assert!(!d.is_opposite(d));
        }
    }

    #[test]
    fn step_moves_by_exactly_one_grid_step() {
        let c = Cell::new(40, 40);
        assert_eq!(c.step(Direction::Up, 20), Cell::new(40, 20));
        assert_eq!(c.step(Direction::Down, 20), Cell::new(40, 60));
        assert_eq!(c.step(Direction::Left, 20), Cell::new(20, 40));
        assert_eq!(c.step(Direction::Right, 20), Cell::new(60, 40));
    }

    #[test]
    fn phase_round_trips_through_str() {
        for p in [Phase::Idle, Phase::Running, Phase::Paused, Phase::Over] {
            assert_eq!(Phase::from_str(p.as_str()), Some(p));
        }
    }
}

/// A position on the board, in board units.
///
/// `Cell` is the grid coordinate of a snake segment or of the food. Values are
/// multiples of the configured grid step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Cell at grid `(col, row)` for a given grid step.
    pub const fn from_grid(col: i32, row: i32, cell_size: i32) -> Self {
        Self {
            x: col * cell_size,
            y: row * cell_size,
        }
    }

    /// The neighbouring cell one grid step away in `direction`.
    pub fn step(&self, direction: Direction, cell_size: i32) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx * cell_size,
            y: self.y + dy * cell_size,
        }
    }
}

/// Direction the snake can travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    Up,
    Down,
    Left,
    #[default]
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// The 180° reverse of this direction.
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Returns true if turning from `self` to `other` would be a 180° turn.
    pub fn is_opposite(&self, other: Direction) -> bool {
        self.opposite() == other
    }

    /// Unit vector `(dx, dy)`. `y` grows downwards.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Parse direction from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_snake_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("LEFT"), Some(Direction::Left));
    /// assert_eq!(Direction::from_str("u"), Some(Direction::Up));
    /// assert_eq!(Direction::from_str("north"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" | "u" => Some(Direction::Up),
            "down" | "d" => Some(Direction::Down),
            "left" | "l" => Some(Direction::Left),
            "right" | "r" => Some(Direction::Right),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Engine macro-state.
///
/// Exactly one phase is active at a time:
///
/// - **Idle**: constructed, waiting for the first `start()`
/// - **Running**: ticks advance the snake
/// - **Paused**: state frozen, `start()` resumes
/// - **Over**: terminal, state is read-only until the next `start()`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    #[default]
    Idle,
    Running,
    Paused,
    Over,
}

impl Phase {
    pub fn is_running(&self) -> bool {
        matches!(self, Phase::Running)
    }

    /// Whether `start()` from this phase creates a fresh game.
    pub fn starts_fresh(&self) -> bool {
        matches!(self, Phase::Idle | Phase::Over)
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "idle" => Some(Phase::Idle),
            "running" => Some(Phase::Running),
            "paused" => Some(Phase::Paused),
            "over" => Some(Phase::Over),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Running => "running",
            Phase::Paused => "paused",
            Phase::Over => "over",
        }
    }
}

/// Intents accepted by the engine.
///
/// Both keyboard input and scripted drivers (tests, benches) speak this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Queue a direction for the next tick
    Turn(Direction),
    /// Start a fresh game, or toggle pause while one is in progress
    Start,
}

impl GameAction {
    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_snake_types::{Direction, GameAction};
    ///
    /// assert_eq!(GameAction::from_str("start"), Some(GameAction::Start));
    /// assert_eq!(GameAction::from_str("Down"), Some(GameAction::Turn(Direction::Down)));
    /// assert_eq!(GameAction::from_str("jump"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "start" => Some(GameAction::Start),
            other => Direction::from_str(other).map(GameAction::Turn),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Turn(d) => d.as_str(),
            GameAction::Start => "start",
        }
    }
}

/// Why a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collision {
    /// Head left the board
    Wall,
    /// Head ran into the snake's own body
    SelfCollision,
    /// Snake fills every cell, no room for food
    BoardFull,
}

impl Collision {
    pub fn as_str(&self) -> &'static str {
        match self {
            Collision::Wall => "wall",
            Collision::SelfCollision => "self",
            Collision::BoardFull => "board_full",
        }
    }
}

/// Notification emitted by the engine for collaborators (renderer, audio, persistence).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A fresh game began
    Started,
    Paused,
    Resumed,
    /// A direction change was accepted and will apply on the next tick
    Turned(Direction),
    /// The snake advanced one cell without eating
    Moved,
    /// The snake ate food; `score` is the new total
    AteFood { score: u32 },
    /// The tick finished and a new state is ready to draw
    StateChanged,
    /// The game reached `Phase::Over`
    GameOver { final_score: u32, cause: Collision },
}
