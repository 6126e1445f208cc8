//! Pure schedule for the hand-replay animation. The surface layer only
//! applies these waypoints and durations; all ordering logic is data here so
//! it can be checked without a browser.

use crate::coords::{cell_center, GridPos, SurfacePoint, SurfaceRect};

/// Pause before the hand starts moving at all.
pub const START_DELAY_MS: u32 = 100;
/// Hand travel from the viewport corner to the origin cell.
pub const APPROACH_MS: u32 = 1000;
/// Hand and ghost travel from origin to destination.
pub const TRANSIT_MS: u32 = 1000;

pub const APPROACH_EASING: &str = "cubic-bezier(0.25, 0.46, 0.45, 0.94)";
pub const TRANSIT_EASING: &str = "ease-in-out";

/// The hand grasps slightly above the cell center.
pub const HAND_HOVER_OFFSET: f64 = 30.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HandPhase {
    Idle,
    Approaching,
    Grabbed,
    Transiting,
}

/// Waypoints for one animated move, all in surface coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HandScript {
    /// Where the hand enters from: bottom-left corner of the viewport.
    pub hand_start: SurfacePoint,
    /// Center of the origin cell; the ghost appears here.
    pub origin: SurfacePoint,
    /// Hand position while grasping at the origin.
    pub grasp: SurfacePoint,
    /// Center of the destination cell; the ghost ends here.
    pub dest: SurfacePoint,
    /// Hand position at the destination.
    pub dest_grasp: SurfacePoint,
}

impl HandScript {
    pub fn new(from: GridPos, to: GridPos, rect: SurfaceRect, viewport_height: f64) -> Self {
        let origin = cell_center(from, rect);
        let dest = cell_center(to, rect);
        Self {
            hand_start: SurfacePoint::new(0.0, viewport_height),
            origin,
            grasp: SurfacePoint::new(origin.x, origin.y - HAND_HOVER_OFFSET),
            dest,
            dest_grasp: SurfacePoint::new(dest.x, dest.y - HAND_HOVER_OFFSET),
        }
    }

    /// Offset from `play_move` at which the approach begins.
    pub fn approach_at() -> u32 {
        START_DELAY_MS
    }

    /// Offset at which the hand grasps and transit begins in the same tick.
    pub fn grab_at() -> u32 {
        START_DELAY_MS + APPROACH_MS
    }

    /// Offset at which the session is over and the callback fires.
    pub fn total_ms() -> u32 {
        START_DELAY_MS + APPROACH_MS + TRANSIT_MS
    }

    /// Phase in effect at a given offset. `Grabbed` is the boundary instant
    /// between approach and transit; the timers chain through it without a
    /// separate delay.
    pub fn phase_at(elapsed_ms: u32) -> HandPhase {
        if elapsed_ms < Self::approach_at() || elapsed_ms >= Self::total_ms() {
            HandPhase::Idle
        } else if elapsed_ms < Self::grab_at() {
            HandPhase::Approaching
        } else if elapsed_ms == Self::grab_at() {
            HandPhase::Grabbed
        } else {
            HandPhase::Transiting
        }
    }
}
