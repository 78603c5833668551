//! Falling piece - the single player-controlled tetromino.
//!
//! A piece is an anchor cell plus a cyclic index into its shape's rotation
//! states. Translation does no bounds checking; callers veto moves with the
//! wall-collision predicates before committing. Rotation is the one exception:
//! it self-corrects horizontal clipping afterwards (and deliberately leaves
//! vertical clipping alone, so a rotation near the ceiling may poke above the
//! board).

use crate::core::shapes::{rotations, RotationState};
use crate::types::{Cell, Direction, ShapeKind, BOARD_WIDTH};

/// The active falling piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FallingPiece {
    pub kind: ShapeKind,
    anchor: Cell,
    rotation: usize,
}

impl FallingPiece {
    /// Spawn a piece of the given shape at the top-center of the board.
    pub fn spawn(kind: ShapeKind) -> Self {
        Self {
            kind,
            anchor: Cell::new(BOARD_WIDTH / 2 - 1, 0),
            rotation: 0,
        }
    }

    pub fn anchor(&self) -> Cell {
        self.anchor
    }

    pub fn rotation_index(&self) -> usize {
        self.rotation
    }

    fn state(&self) -> &'static RotationState {
        let states = rotations(self.kind);
        debug_assert!(self.rotation < states.len());
        &states[self.rotation]
    }

    /// The 4 absolute cells the piece currently occupies.
    pub fn cells(&self) -> [Cell; 4] {
        let state = self.state();
        let mut out = [Cell::new(0, 0); 4];
        for (slot, &(dx, dy)) in out.iter_mut().zip(state.iter()) {
            *slot = Cell::new(self.anchor.x + dx, self.anchor.y + dy);
        }
        out
    }

    /// Shift the anchor one unit. No bounds checking; pre-check with the
    /// collision predicates before committing a move.
    pub fn translate(&mut self, dir: Direction) {
        match dir {
            Direction::Up => self.anchor.y -= 1,
            Direction::Down => self.anchor.y += 1,
            Direction::Left => self.anchor.x -= 1,
            Direction::Right => self.anchor.x += 1,
        }
    }

    /// Advance to the next rotation state, then walk the piece back inside the
    /// side walls if the new state clips them. Vertical clipping is not
    /// corrected.
    pub fn rotate(&mut self) {
        self.rotation = (self.rotation + 1) % rotations(self.kind).len();
        while self.left_wall_clip() {
            self.translate(Direction::Right);
        }
        while self.right_wall_clip() {
            self.translate(Direction::Left);
        }
    }

    /// True when the piece is flush against the left wall. Fires one cell
    /// early, at the boundary, so a vetoed move can never reach clip state.
    pub fn left_wall_collision(&self) -> bool {
        self.cells().iter().any(|c| c.x == 0)
    }

    /// True when the piece is flush against the right wall.
    pub fn right_wall_collision(&self) -> bool {
        self.cells().iter().any(|c| c.x == BOARD_WIDTH - 1)
    }

    /// True when any block is strictly outside the left edge. Only meaningful
    /// mid-rotation, before correction runs.
    pub fn left_wall_clip(&self) -> bool {
        self.cells().iter().any(|c| c.x < 0)
    }

    /// True when any block is strictly outside the right edge.
    pub fn right_wall_clip(&self) -> bool {
        self.cells().iter().any(|c| c.x >= BOARD_WIDTH)
    }
}
