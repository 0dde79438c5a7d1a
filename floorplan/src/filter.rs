//! Tier filtering and status counts.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

use crate::booth::{Booth, BoothStatus, Tier};

/// The active floor-plan filter. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TierFilter {
    #[default]
    All,
    Only(Tier),
}

impl TierFilter {
    /// Every filter button, in display order.
    pub const BUTTONS: [TierFilter; 5] = [
        TierFilter::All,
        TierFilter::Only(Tier::Basic),
        TierFilter::Only(Tier::Silver),
        TierFilter::Only(Tier::Gold),
        TierFilter::Only(Tier::Platinum),
    ];

    /// The `data-filter` value for this filter.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(tier) => tier.as_str(),
        }
    }

    /// Button caption.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Only(tier) => tier.label(),
        }
    }

    /// Whether a cell of `tier` stays visible under this filter.
    #[must_use]
    pub fn shows(self, tier: Tier) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == tier,
        }
    }

    /// How many of `booths` stay visible under this filter.
    #[must_use]
    pub fn visible_count<'a>(self, booths: impl IntoIterator<Item = &'a Booth>) -> usize {
        booths.into_iter().filter(|booth| self.shows(booth.tier)).count()
    }
}

/// Booth totals per status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusCounts {
    pub available: usize,
    pub reserved: usize,
    pub sold: usize,
}

impl StatusCounts {
    /// Count statuses across `booths`.
    #[must_use]
    pub fn tally<'a>(booths: impl IntoIterator<Item = &'a Booth>) -> Self {
        booths.into_iter().fold(Self::default(), |mut counts, booth| {
            match booth.status {
                BoothStatus::Available => counts.available += 1,
                BoothStatus::Reserved => counts.reserved += 1,
                BoothStatus::Sold => counts.sold += 1,
            }
            counts
        })
    }
}
