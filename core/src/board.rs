use serde::{Deserialize, Serialize};

use crate::coords::GridPos;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    White,
    Black,
}

impl Side {
    pub fn letter(self) -> char {
        match self {
            Side::White => 'w',
            Side::Black => 'b',
        }
    }

    pub fn opponent(self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub fn glyph(self, side: Side) -> char {
        match (side, self) {
            (Side::White, PieceKind::King) => '\u{2654}',
            (Side::White, PieceKind::Queen) => '\u{2655}',
            (Side::White, PieceKind::Rook) => '\u{2656}',
            (Side::White, PieceKind::Bishop) => '\u{2657}',
            (Side::White, PieceKind::Knight) => '\u{2658}',
            (Side::White, PieceKind::Pawn) => '\u{2659}',
            (Side::Black, PieceKind::King) => '\u{265A}',
            (Side::Black, PieceKind::Queen) => '\u{265B}',
            (Side::Black, PieceKind::Rook) => '\u{265C}',
            (Side::Black, PieceKind::Bishop) => '\u{265D}',
            (Side::Black, PieceKind::Knight) => '\u{265E}',
            (Side::Black, PieceKind::Pawn) => '\u{265F}',
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub side: Side,
    pub pos: GridPos,
}

impl Piece {
    pub fn same_position(&self, pos: GridPos) -> bool {
        self.pos == pos
    }
}

/// A move produced by either initiation path. The board core never
/// interprets it beyond positions and side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub from: GridPos,
    pub to: GridPos,
    pub side: Side,
}

/// Validates and commits a proposed move, synchronously. `true` commits and
/// updates domain state (the surface re-renders from it); `false` leaves the
/// domain untouched and the caller reverts presentation only.
pub trait MoveAuthority {
    fn attempt_move(&mut self, from: GridPos, to: GridPos) -> bool;
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pieces: Vec<Piece>,
    pub turn: Side,
}

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

impl Board {
    /// Standard opening setup, white to move.
    pub fn initial() -> Self {
        let mut pieces = Vec::with_capacity(32);
        for (file, kind) in BACK_RANK.iter().enumerate() {
            let file = file as i32;
            pieces.push(Piece {
                kind: *kind,
                side: Side::White,
                pos: GridPos::new(file, 0),
            });
            pieces.push(Piece {
                kind: PieceKind::Pawn,
                side: Side::White,
                pos: GridPos::new(file, 1),
            });
            pieces.push(Piece {
                kind: PieceKind::Pawn,
                side: Side::Black,
                pos: GridPos::new(file, 6),
            });
            pieces.push(Piece {
                kind: *kind,
                side: Side::Black,
                pos: GridPos::new(file, 7),
            });
        }
        Self {
            pieces,
            turn: Side::White,
        }
    }

    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    pub fn piece_at(&self, pos: GridPos) -> Option<&Piece> {
        self.pieces.iter().find(|piece| piece.same_position(pos))
    }
}

impl MoveAuthority for Board {
    /// Minimal authority: enforces turn order, board bounds, and that a move
    /// actually goes somewhere it may land. Full piece legality belongs to an
    /// external rules engine and is deliberately not modelled here.
    fn attempt_move(&mut self, from: GridPos, to: GridPos) -> bool {
        if !from.on_board() || !to.on_board() || from == to {
            return false;
        }
        let Some(mover) = self.piece_at(from).copied() else {
            return false;
        };
        if mover.side != self.turn {
            return false;
        }
        if self.piece_at(to).is_some_and(|other| other.side == mover.side) {
            return false;
        }
        self.pieces
            .retain(|piece| !piece.same_position(to) && !piece.same_position(from));
        self.pieces.push(Piece { pos: to, ..mover });
        self.turn = self.turn.opponent();
        true
    }
}
