//! Numeric edge weights with saturating-infinity arithmetic.

use std::cmp::Ordering;
use std::fmt::Debug;

/// A numeric edge weight, fixed per graph instance.
///
/// `INFINITY` is the dedicated "unreached" sentinel used by every distance
/// table. Adding anything to `INFINITY` yields `INFINITY`; a sum of two finite
/// weights never does. Finite sums that leave the representable range either
/// clamp to `MIN_FINITE`/`MAX_FINITE` (`saturating_add`) or are reported
/// (`checked_add`).
pub trait Weight: Copy + PartialOrd + Debug + Send + Sync + 'static {
    /// Additive identity; the distance of a source to itself.
    const ZERO: Self;
    /// Weight of an unweighted edge.
    const ONE: Self;
    /// Sentinel for unreached vertices.
    const INFINITY: Self;
    /// Largest finite distance; strictly below `INFINITY`.
    const MAX_FINITE: Self;
    /// Smallest representable distance.
    const MIN_FINITE: Self;

    /// Add two weights; `INFINITY` on either side absorbs the other.
    /// `None` when the sum of two finite weights is not representable as a
    /// finite distance.
    fn checked_add(self, rhs: Self) -> Option<Self>;

    /// Add two weights, clamping out-of-range finite sums to
    /// `MIN_FINITE`/`MAX_FINITE`. Only an `INFINITY` operand yields `INFINITY`.
    fn saturating_add(self, rhs: Self) -> Self {
        match self.checked_add(rhs) {
            Some(sum) => sum,
            None if rhs.is_negative() => Self::MIN_FINITE,
            None => Self::MAX_FINITE,
        }
    }

    /// Total order, usable as a priority-queue key.
    fn total_cmp(&self, other: &Self) -> Ordering;

    /// Whether this value is usable as an edge weight (rejects NaN and infinities).
    fn is_valid(self) -> bool;

    /// True when strictly below zero.
    fn is_negative(self) -> bool {
        self < Self::ZERO
    }

    /// True when this is the unreached sentinel.
    fn is_infinite(self) -> bool {
        self.total_cmp(&Self::INFINITY) == Ordering::Equal
    }

    /// The smaller of two weights under `total_cmp`.
    fn min_weight(self, other: Self) -> Self {
        if other.total_cmp(&self) == Ordering::Less {
            other
        } else {
            self
        }
    }
}

macro_rules! float_weight {
    ($($t:ty),*) => {$(
        impl Weight for $t {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;
            const INFINITY: Self = <$t>::INFINITY;
            const MAX_FINITE: Self = <$t>::MAX;
            const MIN_FINITE: Self = <$t>::MIN;

            fn checked_add(self, rhs: Self) -> Option<Self> {
                if self == Self::INFINITY || rhs == Self::INFINITY {
                    return Some(Self::INFINITY);
                }
                let sum = self + rhs;
                sum.is_finite().then_some(sum)
            }

            fn total_cmp(&self, other: &Self) -> Ordering {
                <$t>::total_cmp(self, other)
            }

            fn is_valid(self) -> bool {
                self.is_finite()
            }
        }
    )*};
}

macro_rules! int_weight {
    ($($t:ty),*) => {$(
        impl Weight for $t {
            const ZERO: Self = 0;
            const ONE: Self = 1;
            const INFINITY: Self = <$t>::MAX;
            const MAX_FINITE: Self = <$t>::MAX - 1;
            const MIN_FINITE: Self = <$t>::MIN;

            fn checked_add(self, rhs: Self) -> Option<Self> {
                if self == Self::INFINITY || rhs == Self::INFINITY {
                    return Some(Self::INFINITY);
                }
                <$t>::checked_add(self, rhs).filter(|&sum| sum != Self::INFINITY)
            }

            fn total_cmp(&self, other: &Self) -> Ordering {
                self.cmp(other)
            }

            fn is_valid(self) -> bool {
                self != Self::INFINITY
            }
        }
    )*};
}

float_weight!(f32, f64);
int_weight!(i32, i64, u32, u64, usize);
