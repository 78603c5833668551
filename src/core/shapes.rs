//! Shape library - static catalog of tetromino rotation states.
//!
//! Every rotation state is a hardcoded table of exactly 4 anchor-relative
//! offsets. States are precomputed rather than derived from rotation matrices;
//! the wall-adjustment each shape needs is baked into the offsets themselves.
//! Shapes with rotational symmetry carry fewer states (O has one, S/Z/I two).

use crate::types::ShapeKind;

/// Offset of a single block relative to the piece anchor.
pub type BlockOffset = (i8, i8);

/// One rotation state: 4 block offsets from the anchor.
pub type RotationState = [BlockOffset; 4];

const S_ROTATIONS: [RotationState; 2] = [
    [(0, 0), (1, 0), (-1, 1), (0, 1)],
    [(0, -1), (0, 0), (1, 0), (1, 1)],
];

const O_ROTATIONS: [RotationState; 1] = [[(1, 0), (2, 0), (1, 1), (2, 1)]];

const L_ROTATIONS: [RotationState; 4] = [
    [(0, -1), (0, 0), (0, 1), (1, 1)],
    [(-1, 0), (0, 0), (1, 0), (-1, 1)],
    [(-1, -1), (0, -1), (0, 0), (0, 1)],
    [(1, -1), (-1, 0), (0, 0), (1, 0)],
];

const I_ROTATIONS: [RotationState; 2] = [
    [(-1, 0), (0, 0), (1, 0), (2, 0)],
    [(0, -1), (0, 0), (0, 1), (0, 2)],
];

const T_ROTATIONS: [RotationState; 4] = [
    [(-1, 0), (0, 0), (1, 0), (0, 1)],
    [(0, -1), (-1, 0), (0, 0), (0, 1)],
    [(0, -1), (-1, 0), (0, 0), (1, 0)],
    [(0, -1), (0, 0), (1, 0), (0, 1)],
];

const Z_ROTATIONS: [RotationState; 2] = [
    [(-1, 0), (0, 0), (0, 1), (1, 1)],
    [(1, -1), (0, 0), (1, 0), (0, 1)],
];

/// The ordered, cyclic rotation states for a shape.
pub fn rotations(kind: ShapeKind) -> &'static [RotationState] {
    match kind {
        ShapeKind::S => &S_ROTATIONS,
        ShapeKind::O => &O_ROTATIONS,
        ShapeKind::L => &L_ROTATIONS,
        ShapeKind::I => &I_ROTATIONS,
        ShapeKind::T => &T_ROTATIONS,
        ShapeKind::Z => &Z_ROTATIONS,
    }
}
