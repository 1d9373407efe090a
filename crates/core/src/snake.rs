//! The snake body: an ordered run of cells, head first.

use std::collections::VecDeque;

use crate::types::Cell;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    body: VecDeque<Cell>,
}

impl Snake {
    /// Single-cell snake at `head`.
    ///
    /// `capacity` should be the board's cell count so growth never reallocates.
    pub fn new(head: Cell, capacity: usize) -> Self {
        let mut body = VecDeque::with_capacity(capacity.max(1));
        body.push_back(head);
        Self { body }
    }

    /// Build a snake from explicit cells, head first.
    ///
    /// Returns `None` for an empty slice.
    pub fn from_cells(cells: &[Cell], capacity: usize) -> Option<Self> {
        if cells.is_empty() {
            return None;
        }
        let mut body = VecDeque::with_capacity(capacity.max(cells.len()));
        body.extend(cells.iter().copied());
        Some(Self { body })
    }

    /// Shrink back to a single cell at `head`, keeping the allocation.
    pub fn reset(&mut self, head: Cell) {
        self.body.clear();
        self.body.push_back(head);
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn tail(&self) -> Cell {
        self.body[self.body.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false; a snake has at least its head.
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Cells from head to tail.
    pub fn cells(&self) -> impl ExactSizeIterator<Item = Cell> + '_ {
        self.body.iter().copied()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Would a head moving onto `cell` hit the body?
    ///
    /// When `tail_vacates` is true the current tail is leaving this tick and does
    /// not count.
    pub fn hits_body(&self, cell: Cell, tail_vacates: bool) -> bool {
        let n = if tail_vacates {
            self.body.len() - 1
        } else {
            self.body.len()
        };
        self.body.iter().take(n).any(|&c| c == cell)
    }

    /// Push `new_head`; drop the tail unless growing.
    pub fn advance(&mut self, new_head: Cell, grow: bool) {
        self.body.push_front(new_head);
        if !grow {
            self.body.pop_back();
        }
    }
}
