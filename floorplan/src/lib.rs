//! Floor-plan engine for the expo hall explorer.
//!
//! This crate holds everything about the booth floor plan that does not need
//! a browser: the static hall layout, the package tier table, tier filtering,
//! status counts, and the pan/zoom camera with its drag gesture. The Leptos
//! site renders these values and feeds pointer events back in; nothing here
//! touches the DOM, so the whole crate is tested natively.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`booth`] | Booth record, tier and status enums |
//! | [`layout`] | The static hall layout (booth and spacer cells) |
//! | [`tier`] | Package tier lookup table |
//! | [`filter`] | Tier filter and status counts |
//! | [`camera`] | Pan/zoom camera and coordinate conversions |
//! | [`input`] | Drag gesture state machine and tooltip placement |
//! | [`consts`] | Shared numeric constants (zoom limits, offsets) |

pub mod booth;
pub mod camera;
pub mod consts;
pub mod filter;
pub mod input;
pub mod layout;
pub mod tier;
