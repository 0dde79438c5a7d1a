//! The static hall layout: booth cells interleaved with spacer cells.
//!
//! Cells are listed in reading order for a CSS grid. Spacers carry their own
//! column span so aisles line up without any positioning logic on the
//! rendering side.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use crate::booth::BoothStatus::{Available as A, Reserved as R, Sold as S};
use crate::booth::Tier::{Basic, Gold, Platinum, Silver};
use crate::booth::{Booth, BoothStatus, Tier};
use crate::consts::SECTION_BREAK_SPAN;

/// Visual role of a non-booth cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpacerKind {
    /// Single-column aisle between booth blocks.
    Aisle,
    /// Full-width gap between hall sections.
    Mid,
    /// Wide gap flanking the large gold and platinum stands.
    Big,
}

impl SpacerKind {
    /// CSS class applied alongside `booth-spacer`.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Aisle => "spacer",
            Self::Mid => "mid-spacer",
            Self::Big => "big-spacer",
        }
    }
}

/// A non-booth layout gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spacer {
    pub id: &'static str,
    pub kind: SpacerKind,
    pub span: u8,
}

/// One grid cell of the hall.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Booth(Booth),
    Spacer(Spacer),
}

impl Cell {
    /// Number of grid columns this cell occupies.
    #[must_use]
    pub fn column_span(&self) -> u8 {
        match self {
            Self::Booth(booth) => booth.column_span(),
            Self::Spacer(spacer) => spacer.span,
        }
    }

    /// Stable key for keyed rendering.
    #[must_use]
    pub fn key(&self) -> &'static str {
        match self {
            Self::Booth(booth) => booth.id,
            Self::Spacer(spacer) => spacer.id,
        }
    }
}

const fn booth(id: &'static str, size: &'static str, tier: Tier, status: BoothStatus) -> Cell {
    Cell::Booth(Booth::new(id, size, tier, status))
}

const fn aisle(id: &'static str) -> Cell {
    Cell::Spacer(Spacer { id, kind: SpacerKind::Aisle, span: 1 })
}

const fn mid(id: &'static str) -> Cell {
    Cell::Spacer(Spacer { id, kind: SpacerKind::Mid, span: SECTION_BREAK_SPAN })
}

const fn big(id: &'static str, span: u8) -> Cell {
    Cell::Spacer(Spacer { id, kind: SpacerKind::Big, span })
}

/// Every cell of the hall, in grid order.
#[rustfmt::skip]
pub static HALL: &[Cell] = &[
    // Basic and silver blocks, 3X3.
    booth("B01", "3X3", Basic, A), booth("B02", "3X3", Basic, A), booth("B03", "3X3", Basic, S), aisle("spacer1"),
    booth("B04", "3X3", Basic, A), booth("B05", "3X3", Basic, S), booth("B06", "3X3", Basic, A), aisle("spacer2"),
    booth("S01", "3X3", Silver, R), booth("S02", "3X3", Silver, A), booth("S03", "3X3", Silver, S), booth("S04", "3X3", Silver, A),
    booth("B07", "3X3", Basic, A), booth("B08", "3X3", Basic, R), booth("B09", "3X3", Basic, A), aisle("spacer3"),
    booth("B10", "3X3", Basic, A), booth("B11", "3X3", Basic, A), booth("B12", "3X3", Basic, A), aisle("spacer4"),
    booth("S05", "3X3", Silver, A), booth("S06", "3X3", Silver, A), booth("S07", "3X3", Silver, S), booth("S08", "3X3", Silver, A),
    booth("B13", "3X3", Basic, S), booth("B14", "3X3", Basic, A), booth("B15", "3X3", Basic, A), aisle("spacer5"),
    booth("B16", "3X3", Basic, S), booth("B17", "3X3", Basic, A), booth("B18", "3X3", Basic, A), aisle("spacer6"),
    booth("S09", "3X3", Silver, A), booth("S10", "3X3", Silver, R), booth("S11", "3X3", Silver, A), booth("S12", "3X3", Silver, A),
    booth("B19", "3X3", Basic, A), booth("B20", "3X3", Basic, A), booth("B21", "3X3", Basic, S), booth("B22", "3X3", Basic, A),
    aisle("spacer7"), booth("B23", "3X3", Basic, A), booth("B24", "3X3", Basic, R), booth("B25", "3X3", Basic, A),
    aisle("spacer8"), booth("S13", "3X3", Silver, S), booth("S14", "3X3", Silver, A), booth("S15", "3X3", Silver, A),
    mid("midspacer1"),
    // Silver and gold blocks, 4X3.
    booth("S20", "4X3", Silver, A), booth("S21", "4X3", Silver, A), aisle("spacer9"),
    booth("G01", "4X3", Gold, R), booth("G02", "4X3", Gold, A), booth("G03", "4X3", Gold, S), aisle("spacer10"),
    booth("S22", "4X3", Silver, A), booth("S23", "4X3", Silver, A), aisle("spacer11"), booth("G04", "4X3", Gold, R),
    booth("S24", "4X3", Silver, S), booth("S25", "4X3", Silver, A), aisle("spacer12"),
    booth("G05", "4X3", Gold, A), booth("G06", "4X3", Gold, A), booth("G07", "4X3", Gold, A), aisle("spacer13"),
    booth("S26", "4X3", Silver, A), booth("S27", "4X3", Silver, A), aisle("spacer14"), booth("G08", "4X3", Gold, A),
    mid("midspacer2"),
    // Large gold stands.
    big("bigspacer1", 2), booth("G09", "6X3", Gold, R), big("bigspacer2", 3), booth("G10", "6X3", Gold, S), big("bigspacer3", 3),
    mid("midspacer3"),
    // Platinum corner stands.
    booth("P01", "7X3", Platinum, A), big("bigspacer4", 2), booth("P02", "7X3", Platinum, A), big("bigspacer5", 3),
    booth("P03", "7X3", Platinum, S),
];

/// Iterate every booth in the hall, skipping spacers.
pub fn booths() -> impl Iterator<Item = &'static Booth> {
    HALL.iter().filter_map(|cell| match cell {
        Cell::Booth(booth) => Some(booth),
        Cell::Spacer(_) => None,
    })
}

/// Look up a booth by identifier.
#[must_use]
pub fn find_booth(id: &str) -> Option<&'static Booth> {
    booths().find(|booth| booth.id == id)
}
