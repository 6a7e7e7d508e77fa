//! Interval-backed numbers (per the three-valued predicate layer)

use crate::bounds::Bounds;
use crate::compare;
use crate::predicate::Sign;
use crate::traits::IntervalEngine;
use crate::tribool::TriBool;
use std::fmt;

/// An unknown real number known to lie in one connected interval
///
/// Wraps an engine interval and answers predicates about it with [`TriBool`].
/// The `lo <= hi` invariant belongs to the engine; this type only reads the
/// bounds and never rounds or rebuilds them.
///
/// # Examples
///
/// ```
/// use caliper_domain::{NumberInterval, TriBool};
///
/// let x = NumberInterval::from_bounds(-1.0, 1.0);
/// assert_eq!(x.is_zero(), TriBool::Indeterminate);
///
/// let z = NumberInterval::from_bounds(-0.0, 0.0);
/// assert_eq!(z.is_zero(), TriBool::True);
/// ```
///
/// There is deliberately no `PartialEq`: two unknowns with the same bounds
/// may still differ, so equality goes through [`NumberInterval::eq_tri`].
/// Compare [`NumberInterval::inner`] when bound identity is what you want.
#[derive(Debug, Clone, Copy)]
pub struct NumberInterval<I = Bounds> {
    inner: I,
}

impl<I: IntervalEngine> NumberInterval<I> {
    /// Wrap an engine interval
    pub fn new(inner: I) -> Self {
        Self { inner }
    }

    /// Borrow the engine interval
    pub fn inner(&self) -> &I {
        &self.inner
    }

    /// Unwrap the engine interval
    pub fn into_inner(self) -> I {
        self.inner
    }

    /// Lower bound
    pub fn lo(&self) -> f64 {
        self.inner.lo()
    }

    /// Upper bound
    pub fn hi(&self) -> f64 {
        self.inner.hi()
    }

    /// Whether the engine reports the empty/undefined interval
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Whether the interval is a single known value
    pub fn is_degenerate(&self) -> bool {
        !self.is_empty() && self.lo() == self.hi()
    }

    /// Bounds as a pair, for diagnostics
    pub fn bounds(&self) -> (f64, f64) {
        (self.lo(), self.hi())
    }

    /// Three-valued `==`
    pub fn eq_tri<J: IntervalEngine>(&self, other: &NumberInterval<J>) -> TriBool {
        compare::eq(&self.inner, &other.inner)
    }

    /// Three-valued `!=`
    pub fn ne_tri<J: IntervalEngine>(&self, other: &NumberInterval<J>) -> TriBool {
        compare::ne(&self.inner, &other.inner)
    }

    /// Three-valued `<`
    pub fn lt_tri<J: IntervalEngine>(&self, other: &NumberInterval<J>) -> TriBool {
        compare::lt(&self.inner, &other.inner)
    }

    /// Three-valued `<=`
    pub fn le_tri<J: IntervalEngine>(&self, other: &NumberInterval<J>) -> TriBool {
        compare::le(&self.inner, &other.inner)
    }

    /// Three-valued `>`
    pub fn gt_tri<J: IntervalEngine>(&self, other: &NumberInterval<J>) -> TriBool {
        compare::gt(&self.inner, &other.inner)
    }

    /// Three-valued `>=`
    pub fn ge_tri<J: IntervalEngine>(&self, other: &NumberInterval<J>) -> TriBool {
        compare::ge(&self.inner, &other.inner)
    }

    /// Whether the value is zero
    pub fn is_zero(&self) -> TriBool {
        compare::is_zero(&self.inner)
    }

    /// Whether the value is one
    pub fn is_one(&self) -> TriBool {
        compare::is_one(&self.inner)
    }

    /// Whether the value is exactly `value`
    pub fn contains_value(&self, value: f64) -> TriBool {
        compare::contains_value(&self.inner, value)
    }

    /// Whether the value is above zero
    pub fn is_positive(&self) -> TriBool {
        compare::is_positive(&self.inner)
    }

    /// Whether the value is below zero
    pub fn is_negative(&self) -> TriBool {
        compare::is_negative(&self.inner)
    }

    /// Whether the value is at or above zero
    pub fn is_nonnegative(&self) -> TriBool {
        compare::is_nonnegative(&self.inner)
    }

    /// Whether the value is at or below zero
    pub fn is_nonpositive(&self) -> TriBool {
        compare::is_nonpositive(&self.inner)
    }

    /// Sign, when every point agrees on it
    pub fn sign(&self) -> Option<Sign> {
        compare::sign(&self.inner)
    }

    /// Whether the value is finite
    pub fn is_finite(&self) -> TriBool {
        compare::is_finite(&self.inner)
    }

    /// Whether the value is an integer
    pub fn is_integer(&self) -> TriBool {
        compare::is_integer(&self.inner)
    }
}

impl NumberInterval<Bounds> {
    /// Wrap plain bounds
    ///
    /// # Panics
    /// Panics if `lo > hi` or either bound is NaN
    pub fn from_bounds(lo: f64, hi: f64) -> Self {
        Self::new(Bounds::new(lo, hi))
    }

    /// A known value `[v, v]`
    pub fn point(value: f64) -> Self {
        Self::new(Bounds::point(value))
    }

    /// The empty/undefined value
    pub fn empty() -> Self {
        Self::new(Bounds::EMPTY)
    }
}

impl<I: IntervalEngine> IntervalEngine for NumberInterval<I> {
    fn lo(&self) -> f64 {
        self.inner.lo()
    }

    fn hi(&self) -> f64 {
        self.inner.hi()
    }

    fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl<I: IntervalEngine> From<I> for NumberInterval<I> {
    fn from(inner: I) -> Self {
        Self::new(inner)
    }
}

impl<I: IntervalEngine> fmt::Display for NumberInterval<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            write!(f, "∅")
        } else {
            write!(f, "[{}, {}]", self.lo(), self.hi())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degenerate_detection() {
        assert!(NumberInterval::point(3.0).is_degenerate());
        assert!(NumberInterval::from_bounds(-0.0, 0.0).is_degenerate());
        assert!(!NumberInterval::from_bounds(0.0, 1.0).is_degenerate());
        assert!(!NumberInterval::empty().is_degenerate());
    }

    #[test]
    fn test_comparison_methods() {
        let a = NumberInterval::from_bounds(0.0, 1.0);
        let b = NumberInterval::from_bounds(2.0, 3.0);
        assert_eq!(a.eq_tri(&b), TriBool::False);
        assert_eq!(a.ne_tri(&b), TriBool::True);
        assert_eq!(a.lt_tri(&b), TriBool::True);
        assert_eq!(a.le_tri(&b), TriBool::True);
        assert_eq!(a.gt_tri(&b), TriBool::False);
        assert_eq!(a.ge_tri(&b), TriBool::False);
    }

    #[test]
    fn test_sign_methods() {
        let x = NumberInterval::from_bounds(-2.0, -1.0);
        assert_eq!(x.is_zero(), TriBool::False);
        assert_eq!(x.is_negative(), TriBool::True);
        assert_eq!(x.is_nonnegative(), TriBool::False);
        assert_eq!(x.sign(), Some(Sign::Negative));
    }

    #[test]
    fn test_wraps_other_engines() {
        struct Fixed;

        impl IntervalEngine for Fixed {
            fn lo(&self) -> f64 {
                4.0
            }

            fn hi(&self) -> f64 {
                4.0
            }
        }

        let x = NumberInterval::new(Fixed);
        let y = NumberInterval::point(4.0);
        assert_eq!(x.eq_tri(&y), TriBool::True);
        assert_eq!(x.is_integer(), TriBool::True);
    }

    #[test]
    fn test_identical_bounds_are_not_equal_numbers() {
        let a = NumberInterval::from_bounds(0.0, 1.0);
        let b = NumberInterval::from_bounds(0.0, 1.0);

        assert_eq!(a.inner(), b.inner());
        assert_eq!(a.eq_tri(&b), TriBool::Indeterminate);

        let empty = NumberInterval::empty();
        assert_eq!(empty.eq_tri(&empty), TriBool::Indeterminate);
    }

    #[test]
    fn test_display() {
        assert_eq!(NumberInterval::from_bounds(-1.0, 1.0).to_string(), "[-1, 1]");
        assert_eq!(NumberInterval::empty().to_string(), "∅");
    }
}
