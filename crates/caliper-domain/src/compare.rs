//! Interval predicates
//!
//! Each predicate compares bounds exactly, with no tolerance. A definite answer
//! is only returned when it holds for every point of the interval(s); the
//! degenerate case `lo == hi` is the only one where equality can be proven.
//! Empty operands always give `Indeterminate`.
//!
//! Strict ordering between intervals that only share an endpoint, such as
//! `[0, 1] < [1, 2]`, is `Indeterminate`: it fails at the shared point and
//! holds everywhere else. The non-strict `[0, 1] <= [1, 2]` is `True`.

use crate::predicate::Sign;
use crate::traits::IntervalEngine;
use crate::tribool::TriBool;

fn decide(provably_true: bool, provably_false: bool) -> TriBool {
    if provably_true {
        TriBool::True
    } else if provably_false {
        TriBool::False
    } else {
        TriBool::Indeterminate
    }
}

/// Equality
pub fn eq<A: IntervalEngine, B: IntervalEngine>(a: &A, b: &B) -> TriBool {
    if a.is_empty() || b.is_empty() {
        return TriBool::Indeterminate;
    }
    let both_points = a.lo() == a.hi() && b.lo() == b.hi();
    decide(
        both_points && a.lo() == b.lo(),
        a.hi() < b.lo() || b.hi() < a.lo(),
    )
}

/// Inequality
pub fn ne<A: IntervalEngine, B: IntervalEngine>(a: &A, b: &B) -> TriBool {
    !eq(a, b)
}

/// Strictly less than
pub fn lt<A: IntervalEngine, B: IntervalEngine>(a: &A, b: &B) -> TriBool {
    if a.is_empty() || b.is_empty() {
        return TriBool::Indeterminate;
    }
    decide(a.hi() < b.lo(), a.lo() >= b.hi())
}

/// Less than or equal
pub fn le<A: IntervalEngine, B: IntervalEngine>(a: &A, b: &B) -> TriBool {
    if a.is_empty() || b.is_empty() {
        return TriBool::Indeterminate;
    }
    decide(a.hi() <= b.lo(), a.lo() > b.hi())
}

/// Strictly greater than
pub fn gt<A: IntervalEngine, B: IntervalEngine>(a: &A, b: &B) -> TriBool {
    lt(b, a)
}

/// Greater than or equal
pub fn ge<A: IntervalEngine, B: IntervalEngine>(a: &A, b: &B) -> TriBool {
    le(b, a)
}

/// Whether the interval is exactly `value`
///
/// `-0.0 == 0.0` under IEEE comparison, so `[-0, +0]` counts as the point zero.
pub fn contains_value<X: IntervalEngine>(x: &X, value: f64) -> TriBool {
    if x.is_empty() || value.is_nan() {
        return TriBool::Indeterminate;
    }
    decide(
        x.lo() == value && x.hi() == value,
        value < x.lo() || value > x.hi(),
    )
}

/// Zero test
pub fn is_zero<X: IntervalEngine>(x: &X) -> TriBool {
    contains_value(x, 0.0)
}

/// One test
pub fn is_one<X: IntervalEngine>(x: &X) -> TriBool {
    contains_value(x, 1.0)
}

/// Every point is strictly above zero
pub fn is_positive<X: IntervalEngine>(x: &X) -> TriBool {
    if x.is_empty() {
        return TriBool::Indeterminate;
    }
    decide(x.lo() > 0.0, x.hi() <= 0.0)
}

/// Every point is strictly below zero
pub fn is_negative<X: IntervalEngine>(x: &X) -> TriBool {
    if x.is_empty() {
        return TriBool::Indeterminate;
    }
    decide(x.hi() < 0.0, x.lo() >= 0.0)
}

/// Every point is at or above zero
pub fn is_nonnegative<X: IntervalEngine>(x: &X) -> TriBool {
    !is_negative(x)
}

/// Every point is at or below zero
pub fn is_nonpositive<X: IntervalEngine>(x: &X) -> TriBool {
    !is_positive(x)
}

/// Sign of the interval, or `None` when it is not the same for every point
pub fn sign<X: IntervalEngine>(x: &X) -> Option<Sign> {
    if x.is_empty() {
        return None;
    }
    if x.hi() < 0.0 {
        Some(Sign::Negative)
    } else if x.lo() > 0.0 {
        Some(Sign::Positive)
    } else if x.lo() == 0.0 && x.hi() == 0.0 {
        Some(Sign::Zero)
    } else {
        None
    }
}

/// Finiteness
///
/// An infinite bound means the value is unbounded in that direction, not that
/// it is infinite, so only a degenerate infinity is provably non-finite.
pub fn is_finite<X: IntervalEngine>(x: &X) -> TriBool {
    if x.is_empty() {
        return TriBool::Indeterminate;
    }
    decide(
        x.lo().is_finite() && x.hi().is_finite(),
        x.lo() == x.hi() && x.lo().is_infinite(),
    )
}

/// Integrality
pub fn is_integer<X: IntervalEngine>(x: &X) -> TriBool {
    if x.is_empty() {
        return TriBool::Indeterminate;
    }
    let (lo, hi) = (x.lo(), x.hi());
    if lo == hi {
        return TriBool::from(lo.is_finite() && lo.fract() == 0.0);
    }
    // No integer fits between the bounds.
    decide(false, lo.ceil() > hi)
}
