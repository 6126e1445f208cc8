pub mod board;
pub mod coords;
pub mod notation;
pub mod script;

pub use board::{Board, Move, MoveAuthority, Piece, PieceKind, Side};
pub use coords::{
    cell_at, cell_center, clamp_drag, element_origin, GridPos, SurfacePoint, SurfaceRect,
    BOARD_FILES, BOARD_RANKS, DRAG_EDGE_MARGIN,
};
pub use notation::{parse_move, square, square_name, NotationError};
pub use script::{
    HandPhase, HandScript, APPROACH_EASING, APPROACH_MS, HAND_HOVER_OFFSET, START_DELAY_MS,
    TRANSIT_EASING, TRANSIT_MS,
};
