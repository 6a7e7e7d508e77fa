//! Integration tests for caliper-domain
//!
//! These tests walk the documented predicate properties end to end through the
//! public API.

use caliper_domain::{Bounds, IntervalEngine, NumberInterval, Sign, TriBool};

fn iv(lo: f64, hi: f64) -> NumberInterval {
    NumberInterval::from_bounds(lo, hi)
}

#[test]
fn test_degenerate_values_are_definite() {
    for v in [-3.5, -1.0, 0.0, 2.0, 1e300] {
        let x = NumberInterval::point(v);
        assert_eq!(x.eq_tri(&x), TriBool::True, "eq([{v},{v}]) should be true");
    }
    assert_eq!(iv(0.0, 0.0).is_zero(), TriBool::True);
    assert_eq!(iv(-0.0, 0.0).is_zero(), TriBool::True);
}

#[test]
fn test_zero_inside_is_indeterminate() {
    assert_eq!(iv(-1.0, 1.0).is_zero(), TriBool::Indeterminate);
    assert_eq!(iv(-1.0, 1.0).sign(), None);
}

#[test]
fn test_strictly_negative() {
    let x = iv(-2.0, -1.0);
    assert_eq!(x.is_zero(), TriBool::False);
    assert_eq!(x.is_negative(), TriBool::True);
    assert_eq!(x.sign(), Some(Sign::Negative));
}

#[test]
fn test_disjoint_intervals() {
    let (a, b) = (iv(0.0, 1.0), iv(2.0, 3.0));
    assert_eq!(a.eq_tri(&b), TriBool::False);
    assert_eq!(a.lt_tri(&b), TriBool::True);
}

#[test]
fn test_overlapping_intervals() {
    let (a, b) = (iv(0.0, 2.0), iv(1.0, 3.0));
    assert_eq!(a.eq_tri(&b), TriBool::Indeterminate);
    assert_eq!(a.lt_tri(&b), TriBool::Indeterminate);
}

#[test]
fn test_combining_predicates_with_kleene_logic() {
    let x = iv(-1.0, 1.0);
    let y = iv(2.0, 3.0);

    // 0 < y is provable, x == 0 is not
    let both = y.is_positive() & x.is_zero();
    let either = y.is_positive() | x.is_zero();
    let neither = y.is_negative() & x.is_zero();

    assert_eq!(both, TriBool::Indeterminate);
    assert_eq!(either, TriBool::True);
    assert_eq!(neither, TriBool::False);
}

#[test]
fn test_empty_never_panics() {
    let empty = NumberInterval::empty();
    let x = iv(0.0, 1.0);
    assert!(empty.is_empty());
    assert_eq!(empty.eq_tri(&x), TriBool::Indeterminate);
    assert_eq!(x.lt_tri(&empty), TriBool::Indeterminate);
    assert_eq!(empty.is_zero(), TriBool::Indeterminate);
    assert_eq!(empty.sign(), None);
}

#[test]
fn test_host_engine_with_own_empty_sentinel() {
    /// An engine that marks emptiness with a flag instead of NaN bounds
    struct Flagged {
        lo: f64,
        hi: f64,
        empty: bool,
    }

    impl IntervalEngine for Flagged {
        fn lo(&self) -> f64 {
            self.lo
        }

        fn hi(&self) -> f64 {
            self.hi
        }

        fn is_empty(&self) -> bool {
            self.empty
        }
    }

    let defined = NumberInterval::new(Flagged { lo: 1.0, hi: 2.0, empty: false });
    let undefined = NumberInterval::new(Flagged { lo: 1.0, hi: 2.0, empty: true });

    assert_eq!(defined.is_positive(), TriBool::True);
    assert_eq!(undefined.is_positive(), TriBool::Indeterminate);
    assert_eq!(defined.gt_tri(&NumberInterval::new(Bounds::point(0.0))), TriBool::True);
}
