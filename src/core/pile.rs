//! Pile - the mass of blocks rising from the bottom of the board.
//!
//! The pile is a set of cells: a cell is either in the pile or not, and
//! duplicates are a bug, never a valid state. Growth shifts the whole pile up
//! one row (blocks pushed above the top silently vanish, which is the rising
//! mechanic, not a leak) and then rolls an independent 50% coin per column for
//! a new block on the bottom row.

use std::collections::HashSet;

use crate::core::rng::SimpleRng;
use crate::types::{Cell, BOARD_HEIGHT, BOARD_WIDTH};

/// Unordered set of occupied board cells.
#[derive(Debug, Clone, Default)]
pub struct Pile {
    cells: HashSet<Cell>,
}

impl Pile {
    pub fn new() -> Self {
        Self {
            cells: HashSet::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }

    /// Remove every given cell; absent cells are a per-cell no-op.
    pub fn remove_all(&mut self, cells: &[Cell]) {
        for cell in cells {
            self.cells.remove(cell);
        }
    }

    /// Insert cells. The caller guarantees no duplicates are introduced and
    /// that every cell lies on the board.
    pub fn insert_all(&mut self, cells: &[Cell]) {
        for &cell in cells {
            debug_assert!(
                (0..BOARD_WIDTH).contains(&cell.x) && (0..BOARD_HEIGHT).contains(&cell.y),
                "pile cell off board: {:?}",
                cell
            );
            self.cells.insert(cell);
        }
    }

    /// One growth step: shift every block up a row, drop blocks that leave the
    /// top, then add a new bottom-row block per column on a coin flip.
    pub fn grow(&mut self, rng: &mut SimpleRng) {
        let mut shifted = HashSet::with_capacity(self.cells.len() + BOARD_WIDTH as usize);
        for cell in &self.cells {
            let y = cell.y - 1;
            if y >= 0 {
                shifted.insert(Cell::new(cell.x, y));
            }
        }
        for x in 0..BOARD_WIDTH {
            if rng.coin_flip() {
                shifted.insert(Cell::new(x, BOARD_HEIGHT - 1));
            }
        }
        self.cells = shifted;
    }

    /// True once the pile has a block on the top row.
    pub fn reached_top(&self) -> bool {
        self.cells.iter().any(|c| c.y == 0)
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }
}

impl FromIterator<Cell> for Pile {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}
