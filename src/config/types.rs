//! Policy configuration types.
//!
//! The policy carries the per-organization constants the pipeline runs
//! against: the daily baseline and the two tier tables. Defaults match the
//! upstream dataset's fixed values.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{EngineError, EngineResult};
use crate::pipeline::{DEFAULT_BASELINE_HOURS, DEFAULT_TIERS, Tier};

/// The attendance scoring policy.
///
/// # Example
///
/// ```
/// use attendance_engine::config::PolicyConfig;
/// use rust_decimal::Decimal;
///
/// let policy = PolicyConfig::default();
/// assert_eq!(policy.baseline_hours, Decimal::new(8, 0));
/// assert_eq!(policy.fine_tiers.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PolicyConfig {
    /// Expected daily work hours; the boundary between delay and overtime.
    pub baseline_hours: Decimal,
    /// Ascending tier table mapping monthly delay to a fine rate.
    pub fine_tiers: Vec<Tier>,
    /// Ascending tier table mapping monthly overtime to a bonus rate.
    pub bonus_tiers: Vec<Tier>,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            baseline_hours: DEFAULT_BASELINE_HOURS,
            fine_tiers: DEFAULT_TIERS.to_vec(),
            bonus_tiers: DEFAULT_TIERS.to_vec(),
        }
    }
}

impl PolicyConfig {
    /// Validates the structural invariants the pipeline relies on.
    ///
    /// The baseline must be positive, and each tier table must have strictly
    /// ascending thresholds with non-negative, non-decreasing rates (the
    /// last-match-wins scan in the classifier assumes ascending order).
    pub fn validate(&self) -> EngineResult<()> {
        if self.baseline_hours <= Decimal::ZERO {
            return Err(EngineError::InvalidPolicy {
                message: format!("baseline_hours must be positive, got {}", self.baseline_hours),
            });
        }

        validate_tiers("fine_tiers", &self.fine_tiers)?;
        validate_tiers("bonus_tiers", &self.bonus_tiers)?;

        Ok(())
    }
}

fn validate_tiers(name: &str, tiers: &[Tier]) -> EngineResult<()> {
    for tier in tiers {
        if tier.rate < Decimal::ZERO {
            return Err(EngineError::InvalidPolicy {
                message: format!("{name}: rate {} is negative", tier.rate),
            });
        }
    }

    for pair in tiers.windows(2) {
        if pair[1].threshold <= pair[0].threshold {
            return Err(EngineError::InvalidPolicy {
                message: format!(
                    "{name}: thresholds must be strictly ascending ({} then {})",
                    pair[0].threshold, pair[1].threshold
                ),
            });
        }
        if pair[1].rate < pair[0].rate {
            return Err(EngineError::InvalidPolicy {
                message: format!(
                    "{name}: rates must be non-decreasing ({} then {})",
                    pair[0].rate, pair[1].rate
                ),
            });
        }
    }

    Ok(())
}
