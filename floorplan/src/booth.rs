//! Booth records and the closed enums shared by data, filtering and display.

#[cfg(test)]
#[path = "booth_test.rs"]
mod booth_test;

/// Sponsorship package tier a booth belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    Basic,
    Silver,
    Gold,
    Platinum,
}

impl Tier {
    /// All tiers, cheapest first.
    pub const ALL: [Tier; 4] = [Tier::Basic, Tier::Silver, Tier::Gold, Tier::Platinum];

    /// Lowercase key, used for CSS classes and `data-package`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Silver => "silver",
            Self::Gold => "gold",
            Self::Platinum => "platinum",
        }
    }

    /// Human-readable name.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Basic => "Basic",
            Self::Silver => "Silver",
            Self::Gold => "Gold",
            Self::Platinum => "Platinum",
        }
    }
}

/// Booking status of a booth.
///
/// Holds count as reservations and bookings as sales, so the hall data only
/// ever needs these three variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoothStatus {
    Available,
    Reserved,
    Sold,
}

impl BoothStatus {
    /// Canonical lowercase key, used for CSS classes and `data-status`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Reserved => "reserved",
            Self::Sold => "sold",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::Reserved => "Reserved",
            Self::Sold => "Sold",
        }
    }

    /// Whether an enquiry can still be made for a booth in this status.
    #[must_use]
    pub fn accepts_enquiries(self) -> bool {
        !matches!(self, Self::Sold)
    }
}

/// One bookable booth on the hall floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Booth {
    pub id: &'static str,
    /// Footprint in metres, written `WxD` (e.g. `"4X3"`).
    pub size: &'static str,
    pub tier: Tier,
    pub status: BoothStatus,
}

impl Booth {
    #[must_use]
    pub const fn new(id: &'static str, size: &'static str, tier: Tier, status: BoothStatus) -> Self {
        Self { id, size, tier, status }
    }

    /// Number of grid columns the booth occupies, derived from its footprint.
    #[must_use]
    pub fn column_span(&self) -> u8 {
        match self.size {
            "4X3" => 2,
            "6X3" => 4,
            "7X3" => 5,
            _ => 1,
        }
    }
}
