//! Collision & merge engine.
//!
//! Resolves the falling piece against the pile with plain set algebra: the
//! cells the piece shares with the pile are cleared and scored, the rest of
//! the piece becomes new pile mass. Order of individual cells never matters;
//! the shared/unshared split is a pure partition.

use arrayvec::ArrayVec;

use crate::core::piece::FallingPiece;
use crate::core::pile::Pile;
use crate::types::{Cell, BOARD_HEIGHT, FLOOR_BONUS};

/// Result of a resolved meld.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeldOutcome {
    /// Points awarded: one per overlapped pile cell, or the flat floor bonus
    /// when the piece reached the bottom row clean.
    pub points: u32,
    /// Number of pile cells the piece overlapped (0 for a floor landing).
    pub cleared: usize,
    /// True once the post-meld pile has a block on the top row.
    pub pile_reached_top: bool,
}

/// Partition the piece's cells into (shared with pile, unshared).
pub fn partition(piece: &FallingPiece, pile: &Pile) -> (ArrayVec<Cell, 4>, ArrayVec<Cell, 4>) {
    let mut shared = ArrayVec::new();
    let mut unshared = ArrayVec::new();
    for cell in piece.cells() {
        if pile.contains(cell) {
            shared.push(cell);
        } else {
            unshared.push(cell);
        }
    }
    (shared, unshared)
}

/// True when the piece must meld this tick: it overlaps the pile, or it has
/// reached the bottom row.
pub fn should_meld(piece: &FallingPiece, pile: &Pile) -> bool {
    piece.cells().iter().any(|c| c.y >= BOARD_HEIGHT - 1) || !partition(piece, pile).0.is_empty()
}

/// Resolve the piece into the pile if a meld is due.
///
/// On a meld: shared cells leave the pile (scored one point each, or the flat
/// floor bonus when nothing overlapped), unshared cells join it. A block still
/// above the visible area (y < 0, possible right after a rotation near the
/// ceiling) is discarded rather than inserted, keeping every pile cell on the
/// board. Returns `None` when no meld was due and nothing changed.
pub fn resolve(piece: &FallingPiece, pile: &mut Pile) -> Option<MeldOutcome> {
    if !should_meld(piece, pile) {
        return None;
    }

    let (shared, unshared) = partition(piece, pile);
    let points = if shared.is_empty() {
        FLOOR_BONUS
    } else {
        shared.len() as u32
    };

    pile.remove_all(&shared);
    let landed: ArrayVec<Cell, 4> = unshared.into_iter().filter(|c| c.y >= 0).collect();
    pile.insert_all(&landed);

    Some(MeldOutcome {
        points,
        cleared: shared.len(),
        pile_reached_top: pile.reached_top(),
    })
}
