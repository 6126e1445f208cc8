//! Pointer-driven grab/drag/drop of a rendered piece. The session lives
//! only between a grab and its matching drop and is cleared at drop no
//! matter what the move authority decided.

use std::cell::RefCell;

use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent};

use teban_core::{
    cell_at, clamp_drag, element_origin, Board, GridPos, Move, MoveAuthority, SurfacePoint,
    DRAG_EDGE_MARGIN,
};

use crate::surface::{pointer_point, read_rect};

pub(crate) const PIECE_CLASS: &str = "piece";
const SELECTED_CLASS: &str = "selected";
const DRAG_Z_INDEX: u32 = 900;

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum DropOutcome {
    /// No session was active; the pointer-up was a no-op.
    Ignored,
    /// The authority said no; presentation was reverted, domain untouched.
    Rejected,
    /// Committed to the domain; the surface re-renders from it.
    Committed(Move),
}

struct DragSession {
    element: Element,
    tile: Option<Element>,
    origin: GridPos,
}

pub(crate) struct DragController {
    session: RefCell<Option<DragSession>>,
}

impl DragController {
    pub(crate) fn new() -> Self {
        Self {
            session: RefCell::new(None),
        }
    }

    pub(crate) fn grab(&self, event: &MouseEvent, board: &Element) {
        let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
            return;
        };
        self.grab_element(target, pointer_point(event), board);
    }

    pub(crate) fn grab_element(&self, target: Element, pointer: SurfacePoint, board: &Element) {
        if self.session.borrow().is_some() {
            return;
        }
        if !target.class_list().contains(PIECE_CLASS) {
            return;
        }
        let rect = read_rect(board);
        if rect.is_degenerate() {
            return;
        }
        let origin = cell_at(pointer, rect);
        let corner = element_origin(pointer, rect.cell);
        let _ = target.set_attribute("style", &grabbed_style(corner, rect.cell));
        let tile = target.closest(".tile").ok().flatten();
        if let Some(tile) = &tile {
            let _ = tile.class_list().add_1(SELECTED_CLASS);
        }
        *self.session.borrow_mut() = Some(DragSession {
            element: target,
            tile,
            origin,
        });
    }

    pub(crate) fn drag(&self, event: &MouseEvent, board: &Element) {
        self.drag_to(pointer_point(event), board);
    }

    pub(crate) fn drag_to(&self, pointer: SurfacePoint, board: &Element) {
        let session = self.session.borrow();
        let Some(session) = session.as_ref() else {
            return;
        };
        let rect = read_rect(board);
        if rect.is_degenerate() {
            return;
        }
        let corner = clamp_drag(element_origin(pointer, rect.cell), rect, DRAG_EDGE_MARGIN);
        let _ = session
            .element
            .set_attribute("style", &grabbed_style(corner, rect.cell));
    }

    pub(crate) fn drop(
        &self,
        event: &MouseEvent,
        board: &Element,
        model: &mut Board,
    ) -> DropOutcome {
        self.drop_at(pointer_point(event), board, model)
    }

    /// Ends the session unconditionally. The inline drag styling always
    /// comes off here: on rejection that is the visual revert, on success
    /// the re-render from updated domain state owns placement.
    pub(crate) fn drop_at(
        &self,
        pointer: SurfacePoint,
        board: &Element,
        model: &mut Board,
    ) -> DropOutcome {
        let Some(session) = self.session.borrow_mut().take() else {
            return DropOutcome::Ignored;
        };
        if let Some(tile) = &session.tile {
            let _ = tile.class_list().remove_1(SELECTED_CLASS);
        }
        let rect = read_rect(board);
        let dest = cell_at(pointer, rect);
        let side = model.piece_at(session.origin).map(|piece| piece.side);
        let committed = match side {
            Some(side) if model.attempt_move(session.origin, dest) => Some(Move {
                from: session.origin,
                to: dest,
                side,
            }),
            _ => None,
        };
        let _ = session.element.remove_attribute("style");
        match committed {
            Some(mv) => DropOutcome::Committed(mv),
            None => DropOutcome::Rejected,
        }
    }

    /// True between a grab and its matching drop. A pointer-up outside the
    /// board never reaches `drop`, so a session can outlive the gesture.
    pub(crate) fn is_dragging(&self) -> bool {
        self.session.borrow().is_some()
    }
}

fn grabbed_style(corner: SurfacePoint, cell: f64) -> String {
    format!(
        "position: fixed; left: {}px; top: {}px; width: {cell}px; height: {cell}px; \
         z-index: {DRAG_Z_INDEX}; cursor: grabbing;",
        corner.x, corner.y,
    )
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use teban_core::{square, Side};
    use wasm_bindgen_test::wasm_bindgen_test;
    use web_sys::Document;

    fn document() -> Document {
        web_sys::window().unwrap().document().unwrap()
    }

    /// Board fixed at the viewport origin so pointer and surface coordinates
    /// coincide, with one piece rendered on e2.
    fn build_board(document: &Document) -> (Element, Element) {
        let board = document.create_element("div").unwrap();
        board
            .set_attribute(
                "style",
                "position: fixed; left: 0px; top: 0px; width: 800px; height: 800px;",
            )
            .unwrap();
        let tile = document.create_element("div").unwrap();
        tile.set_class_name("tile");
        tile.set_attribute("data-square", "e2").unwrap();
        let piece = document.create_element("div").unwrap();
        piece.set_class_name("piece white");
        piece.set_text_content(Some("\u{2659}"));
        tile.append_child(&piece).unwrap();
        board.append_child(&tile).unwrap();
        document.body().unwrap().append_child(&board).unwrap();
        (board, piece)
    }

    fn center_of(square_name: &str) -> SurfacePoint {
        let rect = teban_core::SurfaceRect::from_bounds(0.0, 0.0, 800.0, 800.0);
        teban_core::cell_center(square(square_name).unwrap(), rect)
    }

    #[wasm_bindgen_test]
    fn non_piece_targets_and_idle_events_are_no_ops() {
        let document = document();
        let (board, _piece) = build_board(&document);
        let controller = DragController::new();
        let mut model = Board::initial();

        let tile = board.query_selector(".tile").unwrap().unwrap();
        controller.grab_element(tile, center_of("e2"), &board);
        assert!(!controller.is_dragging());

        // Move and drop while idle.
        controller.drag_to(center_of("e4"), &board);
        assert_eq!(
            controller.drop_at(center_of("e4"), &board, &mut model),
            DropOutcome::Ignored
        );
        assert_eq!(model, Board::initial());
        board.remove();
    }

    #[wasm_bindgen_test]
    fn rejected_drop_reverts_presentation_and_leaves_domain_alone() {
        let document = document();
        let (board, piece) = build_board(&document);
        let controller = DragController::new();
        let mut model = Board::initial();

        controller.grab_element(piece.clone(), center_of("e2"), &board);
        assert!(controller.is_dragging());
        let style = piece.get_attribute("style").unwrap();
        assert!(style.contains("position: fixed"));
        let tile = board.query_selector(".tile").unwrap().unwrap();
        assert!(tile.class_list().contains("selected"));

        // Dropping back on the grab square is a no-op move.
        let outcome = controller.drop_at(center_of("e2"), &board, &mut model);
        assert_eq!(outcome, DropOutcome::Rejected);
        assert!(piece.get_attribute("style").is_none());
        assert!(!tile.class_list().contains("selected"));
        assert!(!controller.is_dragging());
        assert_eq!(model, Board::initial());
        board.remove();
    }

    #[wasm_bindgen_test]
    fn drag_is_clamped_to_the_board_edge() {
        let document = document();
        let (board, piece) = build_board(&document);
        let controller = DragController::new();

        controller.grab_element(piece.clone(), center_of("e2"), &board);
        controller.drag_to(SurfacePoint::new(-1000.0, 650.0), &board);
        let style = piece.get_attribute("style").unwrap();
        // min x = left - cell/2 + margin = -50 + 25
        assert!(style.contains("left: -25px"), "{style}");

        let mut model = Board::initial();
        controller.drop_at(center_of("e2"), &board, &mut model);
        board.remove();
    }

    #[wasm_bindgen_test]
    fn committed_drop_moves_the_piece_in_the_domain() {
        let document = document();
        let (board, piece) = build_board(&document);
        let controller = DragController::new();
        let mut model = Board::initial();

        controller.grab_element(piece.clone(), center_of("e2"), &board);
        controller.drag_to(center_of("e3"), &board);
        let outcome = controller.drop_at(center_of("e4"), &board, &mut model);

        let expected = Move {
            from: square("e2").unwrap(),
            to: square("e4").unwrap(),
            side: Side::White,
        };
        assert_eq!(outcome, DropOutcome::Committed(expected));
        assert!(model.piece_at(square("e4").unwrap()).is_some());
        assert!(model.piece_at(square("e2").unwrap()).is_none());
        assert!(piece.get_attribute("style").is_none());
        board.remove();
    }
}
