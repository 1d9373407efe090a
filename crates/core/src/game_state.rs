//! Game state module - manages the complete game state
//!
//! This module ties together the snake, food placement, scoring and the phase
//! machine. It handles direction intents, the fixed-step tick and game lifecycle.

use arrayvec::ArrayVec;

use crate::config::GameConfig;
use crate::rng::SimpleRng;
use crate::snake::Snake;
use crate::snapshot::GameSnapshot;
use crate::types::*;

/// Events produced since the last [`GameState::take_events`].
pub type EventQueue = ArrayVec<GameEvent, EVENT_QUEUE_CAPACITY>;

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    rng: SimpleRng,
    snake: Snake,
    /// `None` only when the snake covers the whole board.
    food: Option<Cell>,
    /// Direction used by the last processed tick.
    direction: Direction,
    /// Direction the next tick will use (last accepted intent).
    pending: Direction,
    score: u32,
    phase: Phase,
    /// Ticks processed in the current game, including the fatal one.
    ticks: u32,
    /// Monotonic game id (increments on every fresh start).
    game_id: u32,
    events: EventQueue,
}

impl GameState {
    /// Create a new game on the default board with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self::with_config(GameConfig::default(), seed)
    }

    /// Create a new idle game.
    ///
    /// `config` is expected to pass [`GameConfig::validate`].
    pub fn with_config(config: GameConfig, seed: u32) -> Self {
        debug_assert!(config.validate().is_ok(), "invalid config: {:?}", config);

        let mut state = Self {
            config,
            rng: SimpleRng::new(seed),
            snake: Snake::new(config.spawn, config.cell_count()),
            food: None,
            direction: Direction::Right,
            pending: Direction::Right,
            score: 0,
            phase: Phase::Idle,
            ticks: 0,
            game_id: 0,
            events: EventQueue::new(),
        };
        state.food = state.spawn_food();
        state
    }

    /// Create a running game from an explicit layout.
    ///
    /// Used to replay positions and set up scenarios. Returns `None` unless
    /// `body` (head first) is non-empty, every cell is on the board and on the
    /// grid, no cell repeats, and `food` is a free on-board grid cell.
    pub fn with_layout(
        config: GameConfig,
        seed: u32,
        body: &[Cell],
        direction: Direction,
        food: Option<Cell>,
    ) -> Option<Self> {
        let on_grid = |c: Cell| config.contains(c) && config.is_aligned(c);
        for (i, &cell) in body.iter().enumerate() {
            if !on_grid(cell) || body[..i].contains(&cell) {
                return None;
            }
        }
        let snake = Snake::from_cells(body, config.cell_count())?;
        if food.is_some_and(|f| !on_grid(f) || snake.contains(f)) {
            return None;
        }
        Some(Self {
            config,
            rng: SimpleRng::new(seed),
            snake,
            food,
            direction,
            pending: direction,
            score: 0,
            phase: Phase::Running,
            ticks: 0,
            game_id: 1,
            events: EventQueue::new(),
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Option<Cell> {
        self.food
    }

    /// Direction committed by the last processed tick.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Direction the next tick will use.
    pub fn pending_direction(&self) -> Direction {
        self.pending
    }

    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    pub fn game_id(&self) -> u32 {
        self.game_id
    }

    /// Current RNG state (for restarting with the same food sequence).
    pub fn seed(&self) -> u32 {
        self.rng.state()
    }

    /// Start a fresh game, or toggle pause while one is in progress.
    ///
    /// - `Idle`/`Over` => fresh `Running` game
    /// - `Running` => `Paused`
    /// - `Paused` => `Running` (state kept)
    pub fn start(&mut self) {
        match self.phase {
            Phase::Idle | Phase::Over => {
                self.reset();
                self.phase = Phase::Running;
                self.push_event(GameEvent::Started);
                if self.food.is_none() {
                    self.finish(Collision::BoardFull);
                }
            }
            Phase::Running => {
                self.phase = Phase::Paused;
                self.push_event(GameEvent::Paused);
            }
            Phase::Paused => {
                self.phase = Phase::Running;
                self.push_event(GameEvent::Resumed);
            }
        }
    }

    fn reset(&mut self) {
        self.snake.reset(self.config.spawn);
        self.direction = Direction::Right;
        self.pending = Direction::Right;
        self.score = 0;
        self.ticks = 0;
        self.game_id = self.game_id.wrapping_add(1);
        self.food = self.spawn_food();
    }

    /// Queue a direction for the next tick.
    ///
    /// Rejected (returns false) outside `Running` and when `direction` reverses
    /// the committed direction. Between two ticks the last accepted call wins.
    pub fn change_direction(&mut self, direction: Direction) -> bool {
        if !self.phase.is_running() {
            return false;
        }
        if direction.is_opposite(self.direction) {
            return false;
        }
        if self.pending != direction {
            self.pending = direction;
            self.push_event(GameEvent::Turned(direction));
        }
        true
    }

    /// Advance the snake by exactly one grid step.
    ///
    /// Returns false (and does nothing) unless the game is running.
    pub fn tick(&mut self) -> bool {
        if !self.phase.is_running() {
            return false;
        }

        self.direction = self.pending;
        self.ticks = self.ticks.wrapping_add(1);

        let new_head = self.snake.head().step(self.direction, self.config.cell_size);

        if !self.config.contains(new_head) {
            self.finish(Collision::Wall);
            return true;
        }

        // Food never sits on the snake, so eating and reaching the tail are exclusive.
        let eating = self.food == Some(new_head);
        if self.snake.hits_body(new_head, !eating) {
            self.finish(Collision::SelfCollision);
            return true;
        }

        self.snake.advance(new_head, eating);

        if eating {
            self.score = self.score.saturating_add(self.config.food_points);
            self.push_event(GameEvent::AteFood { score: self.score });
            self.food = self.spawn_food();
            if self.food.is_none() {
                self.finish(Collision::BoardFull);
                return true;
            }
        } else {
            self.push_event(GameEvent::Moved);
        }

        self.push_event(GameEvent::StateChanged);
        true
    }

    /// Apply an intent. Returns whether it was accepted.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Turn(direction) => self.change_direction(direction),
            GameAction::Start => {
                self.start();
                true
            }
        }
    }

    /// Take and clear the events produced since the last call.
    pub fn take_events(&mut self) -> EventQueue {
        std::mem::take(&mut self.events)
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.snake.clear();
        out.snake.extend(self.snake.cells());
        out.food = self.food;
        out.direction = self.direction;
        out.score = self.score;
        out.phase = self.phase;
        out.ticks = self.ticks;
        out.game_id = self.game_id;
        out.board_width = self.config.board_width;
        out.board_height = self.config.board_height;
        out.cell_size = self.config.cell_size;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot {
            snake: Vec::with_capacity(self.config.cell_count()),
            ..Default::default()
        };
        self.snapshot_into(&mut s);
        s
    }

    fn finish(&mut self, cause: Collision) {
        self.phase = Phase::Over;
        self.push_event(GameEvent::GameOver {
            final_score: self.score,
            cause,
        });
        self.push_event(GameEvent::StateChanged);
    }

    fn push_event(&mut self, event: GameEvent) {
        if let GameEvent::Turned(_) = event {
            if let Some(last) = self.events.last_mut() {
                if matches!(last, GameEvent::Turned(_)) {
                    *last = event;
                    return;
                }
            }
        }
        // A full queue means nobody is draining; drop rather than grow.
        let _ = self.events.try_push(event);
    }

    /// Uniformly random free cell, or `None` if the snake fills the board.
    fn spawn_food(&mut self) -> Option<Cell> {
        if self.snake.len() >= self.config.cell_count() {
            return None;
        }
        let cols = self.config.columns() as u32;
        let rows = self.config.rows() as u32;
        loop {
            let col = self.rng.next_range(cols) as i32;
            let row = self.rng.next_range(rows) as i32;
            let cell = Cell::from_grid(col, row, self.config.cell_size);
            if !self.snake.contains(cell) {
                return Some(cell);
            }
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
