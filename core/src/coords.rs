use serde::{Deserialize, Serialize};

pub const BOARD_FILES: i32 = 8;
pub const BOARD_RANKS: i32 = 8;

/// Keeps a dragged piece glyph fully inside the board edge, in surface pixels.
pub const DRAG_EDGE_MARGIN: f64 = 25.0;

/// One of the 64 board cells. Rank 0 is the side the white pieces start on
/// and is rendered at the bottom of the surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPos {
    pub file: i32,
    pub rank: i32,
}

impl GridPos {
    /// Sentinel for "no selection". Never a valid input to the transforms.
    pub const OFF_BOARD: GridPos = GridPos { file: -1, rank: -1 };

    pub const fn new(file: i32, rank: i32) -> Self {
        Self { file, rank }
    }

    pub fn on_board(self) -> bool {
        (0..BOARD_FILES).contains(&self.file) && (0..BOARD_RANKS).contains(&self.rank)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfacePoint {
    pub x: f64,
    pub y: f64,
}

impl SurfacePoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The board's on-screen rectangle plus its derived cell size. Read fresh
/// from the live surface at the start of every interaction or animation;
/// the surface may reflow between moves, so this is never cached.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    pub cell: f64,
}

impl SurfaceRect {
    pub fn from_bounds(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
            cell: width / BOARD_FILES as f64,
        }
    }

    /// True before the surface has been laid out. Transforms on a degenerate
    /// rect produce placeholder values; callers must check this first.
    pub fn is_degenerate(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Center of a cell on the surface, rank 0 mapped to the bottom row.
/// A degenerate rect yields the surface origin.
pub fn cell_center(pos: GridPos, rect: SurfaceRect) -> SurfacePoint {
    if rect.is_degenerate() {
        return SurfacePoint::new(0.0, 0.0);
    }
    SurfacePoint {
        x: rect.left + pos.file as f64 * rect.cell + rect.cell / 2.0,
        y: rect.top + (BOARD_RANKS - 1 - pos.rank) as f64 * rect.cell + rect.cell / 2.0,
    }
}

/// Inverse of [`cell_center`]: the cell containing a surface point. Callers
/// filter off-board pointer events upstream, so the result is not clamped.
/// A degenerate rect yields [`GridPos::OFF_BOARD`].
pub fn cell_at(point: SurfacePoint, rect: SurfaceRect) -> GridPos {
    if rect.is_degenerate() {
        return GridPos::OFF_BOARD;
    }
    let file = ((point.x - rect.left) / rect.cell).floor() as i32;
    let rank = (((point.y - rect.top - rect.height) / rect.cell).ceil()).abs() as i32;
    GridPos { file, rank }
}

/// Top-left corner for an element centered under the pointer.
pub fn element_origin(pointer: SurfacePoint, cell: f64) -> SurfacePoint {
    SurfacePoint {
        x: pointer.x - cell / 2.0,
        y: pointer.y - cell / 2.0,
    }
}

/// Clamps a dragged element's top-left corner so the glyph stays inside the
/// board edge by `margin` pixels on every side.
pub fn clamp_drag(origin: SurfacePoint, rect: SurfaceRect, margin: f64) -> SurfacePoint {
    let half = rect.cell / 2.0;
    let min_x = rect.left - half + margin;
    let max_x = rect.left + rect.width - half - margin;
    let min_y = rect.top - half + margin;
    let max_y = rect.top + rect.height - half - margin;
    SurfacePoint {
        x: origin.x.clamp(min_x, max_x),
        y: origin.y.clamp(min_y, max_y),
    }
}
