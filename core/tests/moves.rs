use teban_core::{square, Board, GridPos, MoveAuthority, PieceKind, Side};

fn sq(name: &str) -> GridPos {
    square(name).unwrap()
}

#[test]
fn committed_move_updates_occupancy_and_turn() {
    let mut board = Board::initial();
    assert!(board.attempt_move(sq("e2"), sq("e4")));
    assert!(board.piece_at(sq("e2")).is_none());
    let pawn = board.piece_at(sq("e4")).unwrap();
    assert_eq!(pawn.kind, PieceKind::Pawn);
    assert_eq!(pawn.side, Side::White);
    assert_eq!(board.turn, Side::Black);
}

#[test]
fn rejected_move_leaves_domain_state_untouched() {
    let mut board = Board::initial();
    let before = board.clone();

    // Dropping a piece back on its own square is a no-op move.
    assert!(!board.attempt_move(sq("a7"), sq("a7")));
    // Landing on a same-side piece.
    assert!(!board.attempt_move(sq("e2"), sq("d2")));
    // Moving out of turn.
    assert!(!board.attempt_move(sq("e7"), sq("e5")));
    // Empty origin.
    assert!(!board.attempt_move(sq("e4"), sq("e5")));
    // Off-board destination.
    assert!(!board.attempt_move(sq("e2"), GridPos::new(4, 9)));
    assert!(!board.attempt_move(GridPos::OFF_BOARD, sq("e4")));

    assert_eq!(board, before);
}

#[test]
fn capture_removes_the_occupant() {
    let mut board = Board::initial();
    assert!(board.attempt_move(sq("e2"), sq("e7")));
    assert_eq!(board.pieces().len(), 31);
    let capturer = board.piece_at(sq("e7")).unwrap();
    assert_eq!(capturer.side, Side::White);
    assert_eq!(board.turn, Side::Black);
}
