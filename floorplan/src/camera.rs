#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use crate::consts::{ZOOM_MAX, ZOOM_MIN};

/// A point in either screen (container) or plan space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Camera state for pan/zoom on the floor plan.
///
/// `pan_x` / `pan_y` are in CSS pixels relative to the container's top-left.
/// `zoom` is a scale factor (1.0 = no zoom), always within
/// [`ZOOM_MIN`]..=[`ZOOM_MAX`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub pan_x: f64,
    pub pan_y: f64,
    pub zoom: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self { pan_x: 0.0, pan_y: 0.0, zoom: 1.0 }
    }
}

impl Camera {
    /// Convert a screen-space point (CSS pixels) to plan coordinates.
    #[must_use]
    pub fn screen_to_plan(&self, screen: Point) -> Point {
        Point {
            x: (screen.x - self.pan_x) / self.zoom,
            y: (screen.y - self.pan_y) / self.zoom,
        }
    }

    /// Multiply zoom by `factor`, keeping the plan point under `anchor` fixed.
    ///
    /// The resulting zoom is clamped; when clamping leaves zoom unchanged the
    /// pan is untouched as well.
    pub fn zoom_at(&mut self, anchor: Point, factor: f64) {
        let next = (self.zoom * factor).clamp(ZOOM_MIN, ZOOM_MAX);
        if (next - self.zoom).abs() < f64::EPSILON {
            return;
        }
        let plan = self.screen_to_plan(anchor);
        self.zoom = next;
        self.pan_x = anchor.x - plan.x * next;
        self.pan_y = anchor.y - plan.y * next;
    }

    /// Translate by a screen-space delta.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.pan_x += dx;
        self.pan_y += dy;
    }

    /// Return to the identity view.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// CSS `transform` value for the plan layer (`transform-origin: 0 0`).
    #[must_use]
    pub fn css_transform(&self) -> String {
        format!("translate({:.1}px, {:.1}px) scale({:.3})", self.pan_x, self.pan_y, self.zoom)
    }
}
