//! Shared numeric constants for the floor-plan crate.

// ── Camera ──────────────────────────────────────────────────────

/// Smallest allowed zoom factor.
pub const ZOOM_MIN: f64 = 0.5;

/// Largest allowed zoom factor.
pub const ZOOM_MAX: f64 = 3.0;

/// Multiplicative zoom step for one wheel notch.
pub const WHEEL_ZOOM_STEP: f64 = 1.1;

/// Multiplicative zoom step for the zoom-in / zoom-out buttons.
pub const BUTTON_ZOOM_STEP: f64 = 1.25;

// ── Pointer ─────────────────────────────────────────────────────

/// Pointer travel in CSS pixels before a press becomes a pan instead of a click.
pub const DRAG_THRESHOLD_PX: f64 = 4.0;

/// Tooltip offset from the pointer on both axes, in CSS pixels.
pub const TOOLTIP_OFFSET_PX: f64 = 15.0;

// ── Grid ────────────────────────────────────────────────────────

/// Column span of a section break between hall blocks.
pub const SECTION_BREAK_SPAN: u8 = 12;
