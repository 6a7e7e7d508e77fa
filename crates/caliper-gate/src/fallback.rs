//! Fallback selection on indeterminate results
//!
//! A host that intercepts indeterminate results can try a preferred algorithm
//! and switch to an alternative when the preferred one hits an undecidable
//! branch. Only errors that carry an [`IndeterminateError`] trigger the
//! fallback; every other error comes back unchanged. [`recover_kind`] narrows
//! this further to a single [`ExceptionKind`].

use crate::error::{GateError, IndeterminateError};
use crate::kind::ExceptionKind;

/// Errors that may wrap an intercepted indeterminate result
///
/// Implement this for a host error type so [`recover_indeterminate`] can tell
/// the indeterminate case apart from everything else.
pub trait AsIndeterminate {
    /// The wrapped indeterminate error, if this is one
    fn as_indeterminate(&self) -> Option<&IndeterminateError>;
}

impl AsIndeterminate for IndeterminateError {
    fn as_indeterminate(&self) -> Option<&IndeterminateError> {
        Some(self)
    }
}

impl AsIndeterminate for GateError {
    fn as_indeterminate(&self) -> Option<&IndeterminateError> {
        match self {
            GateError::Indeterminate(err) => Some(err),
            _ => None,
        }
    }
}

/// Run `preferred`, switching to `fallback` if it fails indeterminately
///
/// Matches an [`IndeterminateError`] of any kind. Use [`recover_kind`] when
/// only one kind should be recovered and the rest must propagate.
///
/// # Examples
///
/// ```
/// use caliper_domain::{NumberInterval, TriBool};
/// use caliper_gate::{recover_indeterminate, ExceptionKind, ExceptionPolicy, Gate};
///
/// let policy = ExceptionPolicy::new();
/// policy.intercept(ExceptionKind::Indeterminate);
/// let gate = Gate::new(&policy);
/// let x = NumberInterval::from_bounds(-1.0, 1.0);
///
/// let label = recover_indeterminate(
///     || gate.is_zero(&x).map(|z| if z.is_true() { "zero" } else { "nonzero" }),
///     |_| Ok("unknown"),
/// );
/// assert_eq!(label, Ok("unknown"));
/// ```
pub fn recover_indeterminate<T, E, F, G>(preferred: F, fallback: G) -> Result<T, E>
where
    E: AsIndeterminate,
    F: FnOnce() -> Result<T, E>,
    G: FnOnce(&IndeterminateError) -> Result<T, E>,
{
    recover_matching(|_| true, preferred, fallback)
}

/// Run `preferred`, switching to `fallback` only for indeterminate errors of `kind`
///
/// Indeterminate errors raised under any other kind come back unchanged, as
/// do errors that are not indeterminate at all.
///
/// # Examples
///
/// ```
/// use caliper_domain::{Predicate, TriBool};
/// use caliper_gate::{recover_kind, ExceptionKind, IndeterminateError};
///
/// let hypot = ExceptionKind::custom("hypot");
/// let raised = IndeterminateError::new(Predicate::Ge, ExceptionKind::Indeterminate);
///
/// let result: Result<TriBool, _> =
///     recover_kind(&hypot, || Err(raised.clone()), |_| Ok(TriBool::True));
/// assert_eq!(result, Err(raised));
/// ```
pub fn recover_kind<T, E, F, G>(kind: &ExceptionKind, preferred: F, fallback: G) -> Result<T, E>
where
    E: AsIndeterminate,
    F: FnOnce() -> Result<T, E>,
    G: FnOnce(&IndeterminateError) -> Result<T, E>,
{
    recover_matching(|err| err.kind == *kind, preferred, fallback)
}

fn recover_matching<T, E, M, F, G>(matches: M, preferred: F, fallback: G) -> Result<T, E>
where
    E: AsIndeterminate,
    M: FnOnce(&IndeterminateError) -> bool,
    F: FnOnce() -> Result<T, E>,
    G: FnOnce(&IndeterminateError) -> Result<T, E>,
{
    let err = match preferred() {
        Ok(value) => return Ok(value),
        Err(err) => err,
    };
    match err.as_indeterminate() {
        Some(indeterminate) if matches(indeterminate) => {
            tracing::debug!(
                predicate = %indeterminate.predicate,
                kind = %indeterminate.kind,
                "Preferred computation indeterminate, using fallback"
            );
            fallback(indeterminate)
        }
        _ => Err(err),
    }
}
