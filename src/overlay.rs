//! The two ephemeral elements used only during an animated replay: a hand
//! cursor and a ghost of the moving piece. Both live directly on
//! `document.body`, above all board content, and can never intercept
//! pointer input.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use teban_core::{
    HandScript, Side, SurfacePoint, APPROACH_EASING, APPROACH_MS, TRANSIT_EASING, TRANSIT_MS,
};

pub(crate) const HAND_CLASS: &str = "move-hand";
pub(crate) const GHOST_CLASS: &str = "ghost-piece";
pub(crate) const HAND_GRABBING_CLASS: &str = "grabbing";

const GHOST_Z_INDEX: u32 = 1000;
const HAND_Z_INDEX: u32 = 1001;

pub(crate) struct OverlayPair {
    hand: Element,
    ghost: Element,
}

impl OverlayPair {
    /// Creates both elements detached from the original piece and attaches
    /// them to the body: the ghost hidden at the origin cell, the hand
    /// visible at its viewport start corner. If anything fails mid-way the
    /// partially attached elements are removed before the error surfaces.
    pub(crate) fn acquire(
        document: &Document,
        origin_piece: &Element,
        script: &HandScript,
        cell: f64,
        side: Side,
    ) -> Result<Self, JsValue> {
        let ghost = document.create_element("div")?;
        ghost.set_class_name(&format!("piece {GHOST_CLASS}"));
        if let Some(glyph) = origin_piece.text_content() {
            ghost.set_text_content(Some(&glyph));
        }
        for side_class in ["white", "black"] {
            if origin_piece.class_list().contains(side_class) {
                ghost.class_list().add_1(side_class)?;
            }
        }
        ghost.set_attribute("style", &ghost_style(script.origin, cell, false, None))?;

        let hand = document.create_element("div")?;
        hand.set_class_name(&format!(
            "{HAND_CLASS} {}",
            match side {
                Side::White => "white",
                Side::Black => "black",
            }
        ));
        hand.set_attribute("style", &hand_style(script.hand_start, None))?;

        let body = document
            .body()
            .ok_or_else(|| JsValue::from_str("document has no body"))?;
        body.append_child(&ghost)?;
        if let Err(err) = body.append_child(&hand) {
            ghost.remove();
            return Err(err);
        }
        Ok(Self { hand, ghost })
    }

    /// Eased hand travel from the start corner to the grasp point.
    pub(crate) fn begin_approach(&self, script: &HandScript) {
        let _ = self.hand.set_attribute(
            "style",
            &hand_style(script.grasp, Some((APPROACH_MS, APPROACH_EASING))),
        );
    }

    /// Grasp instant: the ghost appears, the hand closes, and both start
    /// their transit toward the destination.
    pub(crate) fn begin_transit(&self, script: &HandScript, cell: f64) {
        let _ = self.hand.class_list().add_1(HAND_GRABBING_CLASS);
        let _ = self.ghost.set_attribute(
            "style",
            &ghost_style(script.dest, cell, true, Some((TRANSIT_MS, TRANSIT_EASING))),
        );
        let _ = self.hand.set_attribute(
            "style",
            &hand_style(script.dest_grasp, Some((TRANSIT_MS, TRANSIT_EASING))),
        );
    }

    /// Removes both elements from the surface. Idempotent: removing an
    /// already detached element is a no-op, so the normal-completion path
    /// and component teardown can both reach this safely.
    pub(crate) fn release(&self) {
        self.hand.remove();
        self.ghost.remove();
    }

    #[cfg(all(test, target_arch = "wasm32"))]
    pub(crate) fn ghost(&self) -> &Element {
        &self.ghost
    }
}

fn transition_rule(transition: Option<(u32, &str)>) -> String {
    match transition {
        Some((ms, easing)) => format!(" transition: all {ms}ms {easing};"),
        None => String::new(),
    }
}

fn ghost_style(at: SurfacePoint, cell: f64, visible: bool, transition: Option<(u32, &str)>) -> String {
    format!(
        "position: fixed; left: {}px; top: {}px; transform: translate(-50%, -50%); \
         width: {cell}px; height: {cell}px; line-height: {cell}px; font-size: {}px; \
         text-align: center; z-index: {GHOST_Z_INDEX}; pointer-events: none; \
         visibility: {};{}",
        at.x,
        at.y,
        cell * 0.8,
        if visible { "visible" } else { "hidden" },
        transition_rule(transition),
    )
}

fn hand_style(at: SurfacePoint, transition: Option<(u32, &str)>) -> String {
    format!(
        "position: fixed; left: {}px; top: {}px; transform: translate(-50%, -50%); \
         z-index: {HAND_Z_INDEX}; pointer-events: none;{}",
        at.x,
        at.y,
        transition_rule(transition),
    )
}
