//! Board geometry and scoring configuration.

use thiserror::Error;

use crate::types::{
    Cell, BOARD_HEIGHT, BOARD_WIDTH, CELL_SIZE, FOOD_POINTS, SPAWN_COL, SPAWN_ROW, TICK_MS,
};

/// Largest grid side, in cells. Keeps a drawn board (2 columns per cell plus
/// border) inside terminal coordinates.
pub const MAX_GRID_CELLS: i32 = 255;

/// Geometry, scoring and pacing for one engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Board width in board units
    pub board_width: i32,
    /// Board height in board units
    pub board_height: i32,
    /// Grid step in board units
    pub cell_size: i32,
    /// Points per food eaten
    pub food_points: u32,
    /// Where a fresh snake appears
    pub spawn: Cell,
    /// Nominal scheduler interval
    pub tick_ms: u32,
}

/// Rejected configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("cell size must be positive, got {0}")]
    NonPositiveCellSize(i32),
    #[error("board {axis} of {value} is not a positive multiple of cell size {cell_size}")]
    MisalignedBoard {
        axis: &'static str,
        value: i32,
        cell_size: i32,
    },
    #[error("spawn cell ({x}, {y}) is outside the board or off the grid")]
    BadSpawn { x: i32, y: i32 },
    #[error("board must hold at least two cells")]
    TooSmall,
    #[error("grid of {columns}x{rows} cells exceeds the {max}x{max} limit")]
    TooLarge { columns: i32, rows: i32, max: i32 },
    #[error("tick interval must be positive")]
    ZeroTick,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_width: BOARD_WIDTH,
            board_height: BOARD_HEIGHT,
            cell_size: CELL_SIZE,
            food_points: FOOD_POINTS,
            spawn: Cell::from_grid(SPAWN_COL, SPAWN_ROW, CELL_SIZE),
            tick_ms: TICK_MS,
        }
    }
}

impl GameConfig {
    /// Create a configuration with custom board geometry.
    ///
    /// The spawn point is the default spawn cell when it fits, otherwise the
    /// grid centre.
    pub fn new(board_width: i32, board_height: i32, cell_size: i32) -> Self {
        Self {
            board_width,
            board_height,
            cell_size,
            spawn: default_spawn(board_width, board_height, cell_size),
            ..Default::default()
        }
    }

    /// Small board for tests (10x10 grid)
    pub fn small() -> Self {
        Self::new(200, 200, CELL_SIZE)
    }

    pub fn with_food_points(mut self, food_points: u32) -> Self {
        self.food_points = food_points;
        self
    }

    pub fn with_spawn(mut self, spawn: Cell) -> Self {
        self.spawn = spawn;
        self
    }

    /// Create from environment variables, falling back to defaults.
    ///
    /// Unparsable values are ignored. Call [`GameConfig::validate`] on the result.
    pub fn from_env() -> Self {
        use std::env;

        fn var<T: std::str::FromStr>(key: &str) -> Option<T> {
            env::var(key).ok().and_then(|s| s.trim().parse().ok())
        }

        let board_width = var("SNAKE_BOARD_WIDTH").unwrap_or(BOARD_WIDTH);
        let board_height = var("SNAKE_BOARD_HEIGHT").unwrap_or(BOARD_HEIGHT);
        let cell_size = var("SNAKE_CELL_SIZE").unwrap_or(CELL_SIZE);

        Self {
            food_points: var("SNAKE_FOOD_POINTS").unwrap_or(FOOD_POINTS),
            tick_ms: var("SNAKE_TICK_MS").unwrap_or(TICK_MS),
            ..Self::new(board_width, board_height, cell_size)
        }
    }

    pub fn columns(&self) -> i32 {
        self.board_width / self.cell_size
    }

    pub fn rows(&self) -> i32 {
        self.board_height / self.cell_size
    }

    /// Number of grid cells on the board.
    pub fn cell_count(&self) -> usize {
        (self.columns().max(0) as usize) * (self.rows().max(0) as usize)
    }

    /// Whether `cell` lies inside `[0, board_width) x [0, board_height)`.
    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.x < self.board_width && cell.y >= 0 && cell.y < self.board_height
    }

    /// Whether `cell` lies on a grid line intersection.
    pub fn is_aligned(&self, cell: Cell) -> bool {
        cell.x % self.cell_size == 0 && cell.y % self.cell_size == 0
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cell_size <= 0 {
            return Err(ConfigError::NonPositiveCellSize(self.cell_size));
        }
        for (axis, value) in [("width", self.board_width), ("height", self.board_height)] {
            if value <= 0 || value % self.cell_size != 0 {
                return Err(ConfigError::MisalignedBoard {
                    axis,
                    value,
                    cell_size: self.cell_size,
                });
            }
        }
        if self.columns() > MAX_GRID_CELLS || self.rows() > MAX_GRID_CELLS {
            return Err(ConfigError::TooLarge {
                columns: self.columns(),
                rows: self.rows(),
                max: MAX_GRID_CELLS,
            });
        }
        if self.cell_count() < 2 {
            return Err(ConfigError::TooSmall);
        }
        if !self.contains(self.spawn) || !self.is_aligned(self.spawn) {
            return Err(ConfigError::BadSpawn {
                x: self.spawn.x,
                y: self.spawn.y,
            });
        }
        if self.tick_ms == 0 {
            return Err(ConfigError::ZeroTick);
        }
        Ok(())
    }
}

fn default_spawn(board_width: i32, board_height: i32, cell_size: i32) -> Cell {
    if cell_size <= 0 {
        return Cell::default();
    }
    let cols = board_width / cell_size;
    let rows = board_height / cell_size;
    if SPAWN_COL < cols && SPAWN_ROW < rows {
        Cell::from_grid(SPAWN_COL, SPAWN_ROW, cell_size)
    } else {
        Cell::from_grid(cols / 2, rows / 2, cell_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.board_width, 400);
        assert_eq!(config.board_height, 400);
        assert_eq!(config.cell_size, 20);
        assert_eq!(config.food_points, 3);
        assert_eq!(config.spawn, Cell::new(180, 200));
        assert_eq!(config.columns(), 20);
        assert_eq!(config.cell_count(), 400);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_small_config_centres_spawn() {
        let config = GameConfig::new(100, 100, 20);
        assert_eq!(config.spawn, Cell::new(40, 40));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_contains_is_half_open() {
        let config = GameConfig::default();
        assert!(config.contains(Cell::new(0, 0)));
        assert!(config.contains(Cell::new(380, 380)));
        assert!(!config.contains(Cell::new(400, 0)));
        assert!(!config.contains(Cell::new(0, 400)));
        assert!(!config.contains(Cell::new(-20, 0)));
    }

    #[test]
    fn test_validate_rejects_bad_geometry() {
        assert_eq!(
            GameConfig::new(400, 400, 0).validate(),
            Err(ConfigError::NonPositiveCellSize(0))
        );
        assert!(matches!(
            GameConfig::new(410, 400, 20).validate(),
            Err(ConfigError::MisalignedBoard { axis: "width", .. })
        ));
        assert_eq!(
            GameConfig::new(20, 20, 20).validate(),
            Err(ConfigError::TooSmall)
        );
        assert_eq!(
            GameConfig::default()
                .with_spawn(Cell::new(190, 200))
                .validate(),
            Err(ConfigError::BadSpawn { x: 190, y: 200 })
        );
    }

    #[test]
    fn test_validate_rejects_oversized_grid() {
        assert_eq!(
            GameConfig::new(40_000, 20, 1).validate(),
            Err(ConfigError::TooLarge {
                columns: 40_000,
                rows: 20,
                max: MAX_GRID_CELLS
            })
        );
        assert!(matches!(
            GameConfig::new(20, 256 * 20, 20).validate(),
            Err(ConfigError::TooLarge { rows: 256, .. })
        ));
        assert!(GameConfig::new(255 * 20, 255 * 20, 20).validate().is_ok());
    }
}
