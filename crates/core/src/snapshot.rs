use crate::types::{Cell, Direction, Phase};

/// Read-only copy of the engine state, taken between calls.
///
/// Renderers and observers only ever see a snapshot, so they can never observe
/// a half-applied tick.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct GameSnapshot {
    /// Snake cells, head first
    pub snake: Vec<Cell>,
    pub food: Option<Cell>,
    pub direction: Direction,
    pub score: u32,
    pub phase: Phase,
    /// Ticks processed in the current game
    pub ticks: u32,
    /// Monotonic game id (increments on every fresh start)
    pub game_id: u32,
    pub board_width: i32,
    pub board_height: i32,
    pub cell_size: i32,
}

impl GameSnapshot {
    pub fn head(&self) -> Option<Cell> {
        self.snake.first().copied()
    }

    pub fn len(&self) -> usize {
        self.snake.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snake.is_empty()
    }

    pub fn columns(&self) -> i32 {
        if self.cell_size <= 0 {
            return 0;
        }
        self.board_width / self.cell_size
    }

    pub fn rows(&self) -> i32 {
        if self.cell_size <= 0 {
            return 0;
        }
        self.board_height / self.cell_size
    }

    /// Grid `(col, row)` of a board-unit cell.
    pub fn grid_of(&self, cell: Cell) -> Option<(i32, i32)> {
        if self.cell_size <= 0 {
            return None;
        }
        let col = cell.x.div_euclid(self.cell_size);
        let row = cell.y.div_euclid(self.cell_size);
        if col < 0 || row < 0 || col >= self.columns() || row >= self.rows() {
            return None;
        }
        Some((col, row))
    }

    pub fn playable(&self) -> bool {
        self.phase.is_running()
    }

    /// Stable 64-bit FNV-1a fingerprint of everything a frame depends on.
    pub fn fingerprint(&self) -> u64 {
        let mut h = Fnv1a::new();
        for c in &self.snake {
            h.write_i32(c.x);
            h.write_i32(c.y);
        }
        match self.food {
            Some(c) => {
                h.write_u8(1);
                h.write_i32(c.x);
                h.write_i32(c.y);
            }
            None => h.write_u8(0),
        }
        h.write_u8(self.direction as u8);
        h.write_u8(self.phase as u8);
        h.write_u32(self.score);
        h.write_u32(self.game_id);
        h.finish()
    }
}

struct Fnv1a {
    state: u64,
}

impl Fnv1a {
    const OFFSET_BASIS: u64 = 0xcbf29ce484222325;
    const PRIME: u64 = 0x100000001b3;

    fn new() -> Self {
        Self {
            state: Self::OFFSET_BASIS,
        }
    }

    fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.state ^= b as u64;
            self.state = self.state.wrapping_mul(Self::PRIME);
        }
    }

    fn write_u8(&mut self, v: u8) {
        self.write(&[v]);
    }

    fn write_u32(&mut self, v: u32) {
        self.write(&v.to_le_bytes());
    }

    fn write_i32(&mut self, v: i32) {
        self.write(&v.to_le_bytes());
    }

    fn finish(&self) -> u64 {
        self.state
    }
}
