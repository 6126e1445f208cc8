use teban_core::{
    cell_at, cell_center, clamp_drag, element_origin, GridPos, SurfacePoint, SurfaceRect,
    DRAG_EDGE_MARGIN,
};

fn rects() -> Vec<SurfaceRect> {
    vec![
        SurfaceRect::from_bounds(0.0, 0.0, 800.0, 800.0),
        SurfaceRect::from_bounds(120.0, 64.0, 800.0, 800.0),
        SurfaceRect::from_bounds(33.5, 210.25, 512.0, 512.0),
    ]
}

#[test]
fn transforms_are_inverses_over_the_whole_board() {
    for rect in rects() {
        for file in 0..8 {
            for rank in 0..8 {
                let pos = GridPos::new(file, rank);
                let round_trip = cell_at(cell_center(pos, rect), rect);
                assert_eq!(round_trip, pos, "rect {rect:?}");
            }
        }
    }
}

#[test]
fn cell_at_uses_cell_boundaries_not_centers() {
    let rect = SurfaceRect::from_bounds(0.0, 0.0, 800.0, 800.0);
    // Just inside the bottom-left cell.
    let pos = cell_at(SurfacePoint::new(1.0, 799.0), rect);
    assert_eq!(pos, GridPos::new(0, 0));
    // Just inside the top-right cell.
    let pos = cell_at(SurfacePoint::new(799.0, 1.0), rect);
    assert_eq!(pos, GridPos::new(7, 7));
}

#[test]
fn degenerate_rect_degrades_without_panicking() {
    let rect = SurfaceRect::from_bounds(50.0, 50.0, 0.0, 0.0);
    assert!(rect.is_degenerate());
    let center = cell_center(GridPos::new(3, 3), rect);
    assert_eq!(center, SurfacePoint::new(0.0, 0.0));
    assert_eq!(cell_at(SurfacePoint::new(10.0, 10.0), rect), GridPos::OFF_BOARD);
}

#[test]
fn drag_clamp_keeps_the_element_inside_the_board() {
    let rect = SurfaceRect::from_bounds(100.0, 100.0, 800.0, 800.0);
    let half = rect.cell / 2.0;

    // Pointer far outside the top-left corner.
    let origin = element_origin(SurfacePoint::new(-500.0, -500.0), rect.cell);
    let clamped = clamp_drag(origin, rect, DRAG_EDGE_MARGIN);
    assert_eq!(clamped.x, rect.left - half + DRAG_EDGE_MARGIN);
    assert_eq!(clamped.y, rect.top - half + DRAG_EDGE_MARGIN);

    // Pointer far outside the bottom-right corner.
    let origin = element_origin(SurfacePoint::new(5000.0, 5000.0), rect.cell);
    let clamped = clamp_drag(origin, rect, DRAG_EDGE_MARGIN);
    assert_eq!(clamped.x, rect.left + rect.width - half - DRAG_EDGE_MARGIN);
    assert_eq!(clamped.y, rect.top + rect.height - half - DRAG_EDGE_MARGIN);

    // Pointer in the middle passes through unchanged.
    let pointer = SurfacePoint::new(500.0, 500.0);
    let origin = element_origin(pointer, rect.cell);
    let clamped = clamp_drag(origin, rect, DRAG_EDGE_MARGIN);
    assert_eq!(clamped, origin);
    assert_eq!(clamped.x, pointer.x - half);
}
