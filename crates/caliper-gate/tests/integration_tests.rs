//! Integration tests for caliper-gate
//!
//! These tests drive a hypot-style host algorithm through an injected policy:
//! the preferred scaled formula needs definite comparisons, the fallback is the
//! direct `sqrt(x^2 + y^2)` formula.

use caliper_domain::{Bounds, IntervalEngine, TriBool};
use caliper_gate::{
    recover_indeterminate, AsIndeterminate, ExceptionKind, ExceptionPolicy, Gate,
    IndeterminateError,
};
use std::cell::Cell;
use thiserror::Error;

/// Errors of the host algorithm
#[derive(Error, Debug)]
enum HostError {
    #[error(transparent)]
    Indeterminate(#[from] IndeterminateError),

    #[error("magnitudes cannot be ordered")]
    Unordered,
}

impl AsIndeterminate for HostError {
    fn as_indeterminate(&self) -> Option<&IndeterminateError> {
        match self {
            HostError::Indeterminate(err) => Some(err),
            HostError::Unordered => None,
        }
    }
}

fn abs(x: &Bounds) -> Bounds {
    if x.lo() >= 0.0 {
        *x
    } else if x.hi() <= 0.0 {
        Bounds::new(-x.hi(), -x.lo())
    } else {
        Bounds::new(0.0, (-x.lo()).max(x.hi()))
    }
}

/// Scaled hypot: `big * sqrt(1 + (small / big)^2)`
///
/// Needs to know which magnitude is larger and that it is non-zero.
fn scaled_hypot(
    gate: &Gate<'_, ExceptionPolicy>,
    x: &Bounds,
    y: &Bounds,
) -> Result<Bounds, HostError> {
    let (ax, ay) = (abs(x), abs(y));
    let (big, small) = match gate.ge(&ax, &ay)? {
        TriBool::True => (ax, ay),
        TriBool::False => (ay, ax),
        TriBool::Indeterminate => return Err(HostError::Unordered),
    };
    match gate.is_zero(&big)? {
        TriBool::True => return Ok(Bounds::point(0.0)),
        TriBool::False => {}
        TriBool::Indeterminate => return Err(HostError::Unordered),
    }

    let ratio_lo = small.lo() / big.hi();
    let ratio_hi = small.hi() / big.lo();
    Ok(Bounds::new(
        big.lo() * (1.0 + ratio_lo * ratio_lo).sqrt(),
        big.hi() * (1.0 + ratio_hi * ratio_hi).sqrt(),
    ))
}

/// Direct hypot, monotone in both magnitudes
fn direct_hypot(x: &Bounds, y: &Bounds) -> Bounds {
    let (ax, ay) = (abs(x), abs(y));
    Bounds::new(
        (ax.lo() * ax.lo() + ay.lo() * ay.lo()).sqrt(),
        (ax.hi() * ax.hi() + ay.hi() * ay.hi()).sqrt(),
    )
}

fn hypot(
    gate: &Gate<'_, ExceptionPolicy>,
    x: &Bounds,
    y: &Bounds,
    fell_back: &Cell<bool>,
) -> Result<Bounds, HostError> {
    recover_indeterminate(
        || scaled_hypot(gate, x, y),
        |_| {
            fell_back.set(true);
            Ok(direct_hypot(x, y))
        },
    )
}

#[test]
fn test_definite_inputs_use_preferred_formula() {
    let policy = ExceptionPolicy::new();
    policy.intercept(ExceptionKind::Indeterminate);
    let gate = Gate::new(&policy);
    let fell_back = Cell::new(false);

    let result = hypot(&gate, &Bounds::point(3.0), &Bounds::point(-4.0), &fell_back).unwrap();

    assert!(!fell_back.get());
    assert_eq!(result, Bounds::point(5.0));
}

#[test]
fn test_intercepted_comparison_falls_back() {
    let policy = ExceptionPolicy::new();
    policy.intercept(ExceptionKind::Indeterminate);
    let gate = Gate::new(&policy);
    let fell_back = Cell::new(false);

    let result = hypot(&gate, &Bounds::new(2.0, 4.0), &Bounds::point(3.0), &fell_back).unwrap();

    assert!(fell_back.get(), "overlapping magnitudes should trigger the fallback");
    assert_eq!(result.lo(), 13.0_f64.sqrt());
    assert_eq!(result.hi(), 5.0);
}

#[test]
fn test_fallback_is_repeatable() {
    let policy = ExceptionPolicy::new();
    policy.intercept(ExceptionKind::Indeterminate);
    let gate = Gate::new(&policy);

    for _ in 0..3 {
        let fell_back = Cell::new(false);
        let result = hypot(&gate, &Bounds::new(-1.0, 1.0), &Bounds::point(0.0), &fell_back);
        assert!(fell_back.get());
        assert_eq!(result.unwrap(), Bounds::new(0.0, 1.0));
    }
}

#[test]
fn test_unrelated_errors_propagate_unchanged() {
    // Pass-through policy: the algorithm sees Indeterminate itself and reports
    // its own error, which the fallback must not swallow.
    let policy = ExceptionPolicy::new();
    let gate = Gate::new(&policy);
    let fell_back = Cell::new(false);

    let result = hypot(&gate, &Bounds::new(2.0, 4.0), &Bounds::point(3.0), &fell_back);

    assert!(!fell_back.get());
    assert!(matches!(result, Err(HostError::Unordered)));
}

#[test]
fn test_custom_kind_leaves_builtin_alone() {
    let policy = ExceptionPolicy::new();
    policy.intercept(ExceptionKind::custom("hypot"));
    let gate = Gate::new(&policy);

    // Built-in predicates raise under the built-in kind, which is still pass-through
    assert_eq!(
        gate.lt(&Bounds::new(0.0, 2.0), &Bounds::new(1.0, 3.0)),
        Ok(TriBool::Indeterminate)
    );
}
