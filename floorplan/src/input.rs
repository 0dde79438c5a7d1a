//! Pointer input for the floor plan: the drag gesture state machine, wheel
//! zoom, and tooltip placement.
//!
//! A press on the plan does not know yet whether it is a click on a booth or
//! the start of a pan. [`Gesture`] tracks the press until the pointer travels
//! past [`DRAG_THRESHOLD_PX`]; only then does it start moving the camera, and
//! the release reports which of the two it was so the host can suppress the
//! booth click after a pan.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::camera::{Camera, Point};
use crate::consts::{DRAG_THRESHOLD_PX, TOOLTIP_OFFSET_PX, WHEEL_ZOOM_STEP};

/// The gesture in progress between pointer-down and pointer-up.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Gesture {
    #[default]
    Idle,
    /// Pointer is down but has not moved far enough to count as a drag.
    Pressed { origin: Point },
    /// Pointer is dragging the camera; `last` is the previous pointer position.
    Panning { last: Point },
}

/// How a press ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Release {
    /// No press was in progress.
    None,
    /// The pointer stayed put; treat as a click.
    Click,
    /// The pointer dragged the camera.
    Pan,
}

impl Gesture {
    /// Begin a press at `point`.
    pub fn pointer_down(&mut self, point: Point) {
        *self = Self::Pressed { origin: point };
    }

    /// Advance the gesture. Returns `true` when the camera moved.
    pub fn pointer_move(&mut self, point: Point, camera: &mut Camera) -> bool {
        match *self {
            Self::Idle => false,
            Self::Pressed { origin } => {
                let dx = point.x - origin.x;
                let dy = point.y - origin.y;
                if dx.hypot(dy) < DRAG_THRESHOLD_PX {
                    return false;
                }
                camera.pan_by(dx, dy);
                *self = Self::Panning { last: point };
                true
            }
            Self::Panning { last } => {
                camera.pan_by(point.x - last.x, point.y - last.y);
                *self = Self::Panning { last: point };
                true
            }
        }
    }

    /// Finish the gesture and report what it was.
    pub fn pointer_up(&mut self) -> Release {
        let release = match *self {
            Self::Idle => Release::None,
            Self::Pressed { .. } => Release::Click,
            Self::Panning { .. } => Release::Pan,
        };
        *self = Self::Idle;
        release
    }

    /// Abandon the gesture (pointer left the plan or was cancelled).
    pub fn cancel(&mut self) {
        *self = Self::Idle;
    }

    #[must_use]
    pub fn is_panning(&self) -> bool {
        matches!(self, Self::Panning { .. })
    }
}

/// Apply one wheel event: scrolling up zooms in around the pointer.
pub fn wheel_zoom(camera: &mut Camera, pointer: Point, delta_y: f64) {
    if delta_y == 0.0 {
        return;
    }
    let factor = if delta_y < 0.0 { WHEEL_ZOOM_STEP } else { 1.0 / WHEEL_ZOOM_STEP };
    camera.zoom_at(pointer, factor);
}

/// Tooltip position for a pointer at `client` inside a container whose
/// top-left corner is at `container_origin` (both in client coordinates).
#[must_use]
pub fn tooltip_position(client: Point, container_origin: Point) -> Point {
    Point {
        x: client.x - container_origin.x + TOOLTIP_OFFSET_PX,
        y: client.y - container_origin.y + TOOLTIP_OFFSET_PX,
    }
}
