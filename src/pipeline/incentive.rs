//! Tiered fine/bonus classification.
//!
//! Monthly delay and overtime totals map to rates through an ordered
//! threshold table. Tiers are scanned in ascending-threshold order with a
//! strict `>` comparison and the last matching tier wins, so the highest
//! exceeded threshold always determines the rate.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One threshold/rate pair in a tier table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tier {
    /// The exclusive lower bound in hours: the tier applies when the total
    /// is strictly greater than this.
    pub threshold: Decimal,
    /// The rate assigned when this tier is the highest one exceeded.
    pub rate: Decimal,
}

/// Default tier table applied to both monthly delay (fine) and monthly
/// overtime (bonus).
pub const DEFAULT_TIERS: [Tier; 3] = [
    Tier {
        threshold: Decimal::from_parts(3, 0, 0, false, 0),
        rate: Decimal::from_parts(2, 0, 0, false, 2),
    },
    Tier {
        threshold: Decimal::from_parts(10, 0, 0, false, 0),
        rate: Decimal::from_parts(3, 0, 0, false, 2),
    },
    Tier {
        threshold: Decimal::from_parts(20, 0, 0, false, 0),
        rate: Decimal::from_parts(5, 0, 0, false, 2),
    },
];

/// Looks up the rate for a total against an ascending tier table.
///
/// Thresholds are strict: a total exactly on a threshold does not enter that
/// tier. Returns zero when no threshold is exceeded. Tables are validated as
/// ascending at configuration-load time; the scan itself just takes the last
/// match.
///
/// # Examples
///
/// ```
/// use attendance_engine::pipeline::{rate_for, DEFAULT_TIERS};
/// use rust_decimal::Decimal;
///
/// // 4.5 hours exceeds 3 but not 10
/// assert_eq!(rate_for(Decimal::new(45, 1), &DEFAULT_TIERS), Decimal::new(2, 2));
/// // 25 hours exceeds every threshold; the highest tier wins
/// assert_eq!(rate_for(Decimal::new(25, 0), &DEFAULT_TIERS), Decimal::new(5, 2));
/// // 2 hours exceeds nothing
/// assert_eq!(rate_for(Decimal::new(2, 0), &DEFAULT_TIERS), Decimal::ZERO);
/// ```
pub fn rate_for(total: Decimal, tiers: &[Tier]) -> Decimal {
    let mut rate = Decimal::ZERO;
    for tier in tiers {
        if total > tier.threshold {
            rate = tier.rate;
        }
    }
    rate
}
