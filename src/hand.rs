//! Scripted replay of an externally decided move: a hand enters from the
//! viewport corner, grasps the piece, and carries a ghost of it to the
//! destination cell. Phases are chained timers, never parallel ones, so the
//! order Approaching -> Grabbed -> Transiting -> Idle holds even if the
//! durations are retuned.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo::console::warn;
use gloo::timers::callback::Timeout;
use wasm_bindgen::JsValue;
use web_sys::Element;

use teban_core::{
    square_name, GridPos, HandPhase, HandScript, Side, APPROACH_MS, START_DELAY_MS, TRANSIT_MS,
};

use crate::overlay::OverlayPair;
use crate::surface::read_rect;

pub(crate) type CompletionCallback = Box<dyn FnOnce()>;

pub(crate) struct HandAnimator {
    overlay: RefCell<Option<OverlayPair>>,
    origin_piece: RefCell<Option<Element>>,
    timer: RefCell<Option<Timeout>>,
    animating: Cell<bool>,
    phase: Cell<HandPhase>,
    on_complete: RefCell<Option<CompletionCallback>>,
}

impl HandAnimator {
    pub(crate) fn new() -> Self {
        Self {
            overlay: RefCell::new(None),
            origin_piece: RefCell::new(None),
            timer: RefCell::new(None),
            animating: Cell::new(false),
            phase: Cell::new(HandPhase::Idle),
            on_complete: RefCell::new(None),
        }
    }

    pub(crate) fn is_animating(&self) -> bool {
        self.animating.get()
    }

    #[cfg(all(test, target_arch = "wasm32"))]
    pub(crate) fn phase(&self) -> HandPhase {
        self.phase.get()
    }

    /// Plays one move. The move must already be decided (and committed, or
    /// about to be committed, independently); this only performs it
    /// visually and then reports completion exactly once. An origin cell
    /// with nothing to animate completes immediately.
    pub(crate) fn play_move(
        self: &Rc<Self>,
        board: &Element,
        from: GridPos,
        to: GridPos,
        side: Side,
        on_complete: Option<CompletionCallback>,
    ) {
        if self.animating.get() {
            // The move-dispatch layer is expected to serialize replays; a
            // straggler must not corrupt the session in flight.
            warn!("hand replay already in progress, rejecting new request");
            if let Some(callback) = on_complete {
                callback();
            }
            return;
        }
        let Some(origin_piece) = find_piece(board, from) else {
            if let Some(callback) = on_complete {
                callback();
            }
            return;
        };

        *self.on_complete.borrow_mut() = on_complete;
        if let Err(err) = self.begin(board, origin_piece, from, to, side) {
            // Setup failure: force the board back to a consistent look and
            // report completion so no caller is left waiting.
            warn!("hand replay setup failed", err);
            if let Some(piece) = self.origin_piece.borrow_mut().take() {
                let _ = piece.remove_attribute("style");
            }
            if let Some(overlay) = self.overlay.borrow_mut().take() {
                overlay.release();
            }
            self.animating.set(false);
            self.phase.set(HandPhase::Idle);
            self.complete();
        }
    }

    fn begin(
        self: &Rc<Self>,
        board: &Element,
        origin_piece: Element,
        from: GridPos,
        to: GridPos,
        side: Side,
    ) -> Result<(), JsValue> {
        let rect = read_rect(board);
        if rect.is_degenerate() {
            return Err(JsValue::from_str("board surface has no layout yet"));
        }
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let viewport_height = window.inner_height()?.as_f64().unwrap_or(0.0);
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let script = HandScript::new(from, to, rect, viewport_height);
        let overlay = OverlayPair::acquire(&document, &origin_piece, &script, rect.cell, side)?;
        *self.overlay.borrow_mut() = Some(overlay);
        *self.origin_piece.borrow_mut() = Some(origin_piece);
        self.animating.set(true);

        let cell = rect.cell;
        let animator = Rc::clone(self);
        self.schedule(START_DELAY_MS, move || {
            animator.enter_approach(script, cell);
        });
        Ok(())
    }

    fn enter_approach(self: &Rc<Self>, script: HandScript, cell: f64) {
        self.phase.set(HandPhase::Approaching);
        if let Some(overlay) = self.overlay.borrow().as_ref() {
            overlay.begin_approach(&script);
        }
        let animator = Rc::clone(self);
        self.schedule(APPROACH_MS, move || {
            animator.enter_grab(script, cell);
        });
    }

    /// Grasp boundary: the original piece disappears for the shortest
    /// possible window, replaced by the ghost, and transit chains on
    /// immediately from the same tick.
    fn enter_grab(self: &Rc<Self>, script: HandScript, cell: f64) {
        self.phase.set(HandPhase::Grabbed);
        if let Some(piece) = self.origin_piece.borrow().as_ref() {
            let _ = piece.set_attribute("style", "visibility: hidden;");
        }
        if let Some(overlay) = self.overlay.borrow().as_ref() {
            overlay.begin_transit(&script, cell);
        }
        self.phase.set(HandPhase::Transiting);
        let animator = Rc::clone(self);
        self.schedule(TRANSIT_MS, move || {
            animator.finish();
        });
    }

    fn finish(&self) {
        if let Some(piece) = self.origin_piece.borrow_mut().take() {
            let _ = piece.remove_attribute("style");
        }
        if let Some(overlay) = self.overlay.borrow_mut().take() {
            overlay.release();
        }
        self.timer.borrow_mut().take();
        self.animating.set(false);
        self.phase.set(HandPhase::Idle);
        self.complete();
    }

    /// Component teardown: drops any pending timer, removes live overlay
    /// elements whatever the phase, and restores the original piece. Safe
    /// to call when nothing is in flight.
    pub(crate) fn cancel(&self) {
        self.timer.borrow_mut().take();
        if let Some(overlay) = self.overlay.borrow_mut().take() {
            overlay.release();
        }
        if let Some(piece) = self.origin_piece.borrow_mut().take() {
            let _ = piece.remove_attribute("style");
        }
        self.animating.set(false);
        self.phase.set(HandPhase::Idle);
        self.on_complete.borrow_mut().take();
    }

    fn complete(&self) {
        // The borrow must end before the callback runs: callers chain the
        // next replay (or cancel) from inside it, and both touch this slot.
        let callback = self.on_complete.borrow_mut().take();
        if let Some(callback) = callback {
            callback();
        }
    }

    fn schedule<F>(&self, ms: u32, callback: F)
    where
        F: FnOnce() + 'static,
    {
        *self.timer.borrow_mut() = Some(Timeout::new(ms, callback));
    }
}

fn find_piece(board: &Element, pos: GridPos) -> Option<Element> {
    let name = square_name(pos)?;
    board
        .query_selector(&format!(".tile[data-square='{name}'] .piece"))
        .ok()
        .flatten()
}
