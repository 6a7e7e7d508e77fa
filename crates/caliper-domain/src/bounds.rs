//! Plain interval bounds

use crate::traits::IntervalEngine;
use std::fmt;

/// A validated `[lo, hi]` pair of bounds
///
/// `Bounds` carries bounds that some interval engine already computed. It does
/// no arithmetic and no rounding; it exists so hosts holding raw bounds can
/// use the predicate layer directly.
///
/// The empty sentinel is [`Bounds::EMPTY`], which has NaN bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    lo: f64,
    hi: f64,
}

impl Bounds {
    /// The empty/undefined interval
    pub const EMPTY: Bounds = Bounds {
        lo: f64::NAN,
        hi: f64::NAN,
    };

    /// The whole real line `[-inf, +inf]`
    pub const ENTIRE: Bounds = Bounds {
        lo: f64::NEG_INFINITY,
        hi: f64::INFINITY,
    };

    /// Create new bounds
    ///
    /// # Panics
    /// Panics if either bound is NaN or `lo > hi`
    pub fn new(lo: f64, hi: f64) -> Self {
        assert!(!lo.is_nan() && !hi.is_nan(), "Bounds must not be NaN");
        assert!(lo <= hi, "Lower bound must be <= upper bound");

        Self { lo, hi }
    }

    /// Create new bounds, returning `None` if they are invalid
    pub fn try_new(lo: f64, hi: f64) -> Option<Self> {
        if lo.is_nan() || hi.is_nan() || lo > hi {
            None
        } else {
            Some(Self { lo, hi })
        }
    }

    /// Degenerate bounds `[v, v]`
    ///
    /// # Panics
    /// Panics if `v` is NaN
    pub fn point(value: f64) -> Self {
        Self::new(value, value)
    }

    /// Width of the interval (NaN when empty)
    pub fn width(&self) -> f64 {
        self.hi - self.lo
    }

    /// Midpoint of the interval (NaN when empty)
    pub fn midpoint(&self) -> f64 {
        if self.lo == f64::NEG_INFINITY && self.hi == f64::INFINITY {
            return 0.0;
        }
        self.lo / 2.0 + self.hi / 2.0
    }

    /// Check whether the bounds contain a value
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lo && value <= self.hi
    }
}

impl IntervalEngine for Bounds {
    fn lo(&self) -> f64 {
        self.lo
    }

    fn hi(&self) -> f64 {
        self.hi
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            write!(f, "∅")
        } else {
            write!(f, "[{}, {}]", self.lo, self.hi)
        }
    }
}
