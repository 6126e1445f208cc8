use web_sys::{Element, MouseEvent};

use teban_core::{SurfacePoint, SurfaceRect};

/// Reads the board's live bounding rect. Called at the start of every
/// interaction and animation; the surface may reflow between moves, so the
/// result is never cached across them.
pub(crate) fn read_rect(board: &Element) -> SurfaceRect {
    let rect = board.get_bounding_client_rect();
    SurfaceRect::from_bounds(rect.left(), rect.top(), rect.width(), rect.height())
}

pub(crate) fn pointer_point(event: &MouseEvent) -> SurfacePoint {
    SurfacePoint::new(event.client_x() as f64, event.client_y() as f64)
}
