//! Package tier lookup table.

#[cfg(test)]
#[path = "tier_test.rs"]
mod tier_test;

use crate::booth::Tier;

/// Static description of one sponsorship package.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Package {
    pub tier: Tier,
    /// Booth footprints offered at this tier.
    pub sizes: &'static [&'static str],
    pub benefits: &'static [&'static str],
    /// Badge shown on the package card.
    pub label: &'static str,
}

/// All packages, cheapest first.
pub static PACKAGES: [Package; 4] = [
    Package {
        tier: Tier::Basic,
        sizes: &["3X3"],
        benefits: &["Standard booth", "Website listing", "2 passes"],
        label: "Entry",
    },
    Package {
        tier: Tier::Silver,
        sizes: &["3X3", "4X3"],
        benefits: &["Priority booth", "Logo on website", "3 passes"],
        label: "Popular with startups",
    },
    Package {
        tier: Tier::Gold,
        sizes: &["4X3", "6X3"],
        benefits: &["High-traffic booth", "Catalog entry", "1 speaking slot", "4 passes"],
        label: "Most Popular",
    },
    Package {
        tier: Tier::Platinum,
        sizes: &["7X3"],
        benefits: &[
            "Corner booth with max visibility",
            "Premium furniture",
            "Homepage logo",
            "3 speaking slots",
            "8 passes",
            "VIP lounge access",
        ],
        label: "Limited",
    },
];

/// Look up the package for a tier.
#[must_use]
pub fn package(tier: Tier) -> &'static Package {
    match tier {
        Tier::Basic => &PACKAGES[0],
        Tier::Silver => &PACKAGES[1],
        Tier::Gold => &PACKAGES[2],
        Tier::Platinum => &PACKAGES[3],
    }
}
