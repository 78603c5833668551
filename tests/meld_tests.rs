//! Collision & merge engine tests - end-to-end meld scenarios

use std::collections::HashSet;

use shadowpile::core::{meld, FallingPiece, Pile};
use shadowpile::types::{Cell, Direction, ShapeKind, BOARD_HEIGHT, FLOOR_BONUS};

fn drop_until_meld(piece: &mut FallingPiece, pile: &mut Pile) -> meld::MeldOutcome {
    loop {
        piece.translate(Direction::Down);
        if let Some(outcome) = meld::resolve(piece, pile) {
            return outcome;
        }
        assert!(
            piece.cells().iter().all(|c| c.y < BOARD_HEIGHT),
            "piece fell through the floor"
        );
    }
}

#[test]
fn test_scenario_b_floor_landing() {
    // Empty pile: the piece reaches the bottom row untouched and earns the
    // flat bonus; the pile afterwards is exactly the piece's 4 cells.
    let mut piece = FallingPiece::spawn(ShapeKind::O);
    let mut pile = Pile::new();

    let outcome = drop_until_meld(&mut piece, &mut pile);
    assert_eq!(outcome.points, FLOOR_BONUS);
    assert_eq!(outcome.cleared, 0);
    assert!(!outcome.pile_reached_top);

    let expected: HashSet<Cell> = piece.cells().into_iter().collect();
    let got: HashSet<Cell> = pile.iter().collect();
    assert_eq!(got, expected);
    assert_eq!(pile.len(), 4);
}

#[test]
fn test_scenario_c_two_cell_overlap() {
    // Pile pre-populated with 2 of the piece's 4 cells: meld awards 2 points,
    // swaps those cells for the other 2, and net pile size is unchanged.
    let mut piece = FallingPiece::spawn(ShapeKind::O);
    for _ in 0..5 {
        piece.translate(Direction::Down);
    }
    let cells = piece.cells();

    let mut pile: Pile = [cells[0], cells[3], Cell::new(0, 19)].into_iter().collect();
    let before = pile.len();

    let outcome = meld::resolve(&piece, &mut pile).expect("overlap must meld");
    assert_eq!(outcome.points, 2);
    assert_eq!(outcome.cleared, 2);
    assert_eq!(pile.len(), before);

    assert!(!pile.contains(cells[0]));
    assert!(!pile.contains(cells[3]));
    assert!(pile.contains(cells[1]));
    assert!(pile.contains(cells[2]));
    assert!(pile.contains(Cell::new(0, 19)));
}

#[test]
fn test_meld_is_order_independent() {
    // The partition is pure set algebra: resolving the same configuration
    // from differently-ordered pile constructions gives identical piles.
    let piece = FallingPiece::spawn(ShapeKind::T);
    let overlap = piece.cells()[1];
    let extras = [Cell::new(7, 12), Cell::new(1, 3)];

    let mut forward: Pile = [overlap, extras[0], extras[1]].into_iter().collect();
    let mut reverse: Pile = [extras[1], extras[0], overlap].into_iter().collect();

    let a = meld::resolve(&piece, &mut forward).unwrap();
    let b = meld::resolve(&piece, &mut reverse).unwrap();
    assert_eq!(a.points, b.points);

    let fa: HashSet<Cell> = forward.iter().collect();
    let fb: HashSet<Cell> = reverse.iter().collect();
    assert_eq!(fa, fb);
}

#[test]
fn test_full_overlap_erases_entire_piece() {
    let piece = FallingPiece::spawn(ShapeKind::I);
    let mut pile: Pile = piece.cells().into_iter().collect();

    let outcome = meld::resolve(&piece, &mut pile).expect("full overlap melds");
    assert_eq!(outcome.points, 4);
    assert_eq!(outcome.cleared, 4);
    assert!(pile.is_empty());
}

#[test]
fn test_no_meld_above_an_untouched_pile() {
    let piece = FallingPiece::spawn(ShapeKind::Z);
    let mut pile: Pile = [Cell::new(4, 19)].into_iter().collect();
    assert!(meld::resolve(&piece, &mut pile).is_none());
    assert_eq!(pile.len(), 1);
}

#[test]
fn test_pile_uniqueness_after_meld_sequences() {
    // Pile is a set; after arbitrary grow/meld interleavings no coordinate
    // appears twice. HashSet storage makes duplicates unrepresentable, so
    // check the stronger bound: size never exceeds the board.
    use shadowpile::core::SimpleRng;
    use shadowpile::types::BOARD_WIDTH;

    let mut rng = SimpleRng::new(2024);
    let mut pile = Pile::new();
    let mut piece = FallingPiece::spawn(ShapeKind::S);

    for step in 0..500 {
        match step % 3 {
            0 => pile.grow(&mut rng),
            1 => piece.translate(Direction::Down),
            _ => piece.rotate(),
        }
        if let Some(_outcome) = meld::resolve(&piece, &mut pile) {
            piece = FallingPiece::spawn(match step % 6 {
                0 => ShapeKind::S,
                1 => ShapeKind::O,
                2 => ShapeKind::L,
                3 => ShapeKind::I,
                4 => ShapeKind::T,
                _ => ShapeKind::Z,
            });
        }
        assert!(pile.len() <= (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize));
        assert!(pile
            .iter()
            .all(|c| (0..BOARD_WIDTH).contains(&c.x) && (0..BOARD_HEIGHT).contains(&c.y)));
    }
}
