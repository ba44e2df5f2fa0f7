//! Rules shared by both calculators: free delivery, fee cap and slab lookup.

use rust_decimal::Decimal;
use thiserror::Error;

/// A bracketed range mapped to a flat fee.
pub trait Slab {
    /// Inclusive `(min, max)` bounds.
    fn bounds(&self) -> (Decimal, Decimal);

    fn fee(&self) -> Decimal;

    /// Whether `value` falls within `[min, max]`.
    fn contains(&self, value: Decimal) -> bool {
        let (min, max) = self.bounds();
        value >= min && value <= max
    }
}

/// Whether free delivery waives the fee for this subtotal.
///
/// Requires the flag to be on and a threshold to be configured.
#[must_use]
pub fn free_delivery_applies(enabled: bool, threshold: Option<Decimal>, subtotal: Decimal) -> bool {
    enabled && threshold.is_some_and(|threshold| subtotal >= threshold)
}

/// Clamps `total` to `max` when the cap is enabled and `max` is positive.
#[must_use]
pub fn apply_cap(total: Decimal, enabled: bool, max: Decimal) -> Decimal {
    if enabled && max > Decimal::ZERO && total > max {
        max
    } else {
        total
    }
}

/// Returns the first slab containing `value`.
///
/// Slabs are scanned in order, so with touching brackets such as `[0, 5]` and
/// `[5, 10]` a value of exactly 5 matches the first.
pub fn find_slab<S: Slab>(slabs: &[S], value: Decimal) -> Option<&S> {
    slabs.iter().find(|slab| slab.contains(value))
}

/// Fee of the first slab containing `value`, or zero when none does.
#[must_use]
pub fn slab_fee<S: Slab>(slabs: &[S], value: Decimal) -> Decimal {
    find_slab(slabs, value).map_or(Decimal::ZERO, Slab::fee)
}

/// A configuration problem in a slab list.
///
/// Calculation never rejects slabs; these are reported to whoever edits the
/// settings.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SlabIssue {
    /// `min` is greater than `max`, so the slab can never match.
    #[error("slab {index} has min {min} greater than max {max}")]
    InvertedRange {
        index: usize,
        min: Decimal,
        max: Decimal,
    },
    /// The slab starts below the previous slab's start.
    #[error("slab {index} starts at {min}, before the previous slab at {previous_min}")]
    Unordered {
        index: usize,
        min: Decimal,
        previous_min: Decimal,
    },
    /// The slab starts inside the previous slab. Touching bounds are allowed.
    #[error("slab {index} starts at {min}, inside the previous slab ending at {previous_max}")]
    Overlapping {
        index: usize,
        min: Decimal,
        previous_max: Decimal,
    },
    #[error("slab {index} has a negative bound or fee")]
    Negative { index: usize },
}

/// Checks that slabs are well-formed, ordered and non-overlapping.
#[must_use]
pub fn validate_slabs<S: Slab>(slabs: &[S]) -> Vec<SlabIssue> {
    let mut issues = Vec::new();
    let mut previous: Option<(Decimal, Decimal)> = None;

    for (index, slab) in slabs.iter().enumerate() {
        let (min, max) = slab.bounds();

        if min.is_sign_negative() || max.is_sign_negative() || slab.fee().is_sign_negative() {
            issues.push(SlabIssue::Negative { index });
        }
        if min > max {
            issues.push(SlabIssue::InvertedRange { index, min, max });
        }
        if let Some((previous_min, previous_max)) = previous {
            if min < previous_min {
                issues.push(SlabIssue::Unordered {
                    index,
                    min,
                    previous_min,
                });
            } else if min < previous_max {
                issues.push(SlabIssue::Overlapping {
                    index,
                    min,
                    previous_max,
                });
            }
        }

        previous = Some((min, max));
    }

    issues
}
