//! Policy-gated predicate evaluation

use crate::error::IndeterminateError;
use crate::kind::ExceptionKind;
use crate::policy::{self, ExceptionPolicy, InterceptPolicy};
use caliper_domain::{compare, IntervalEngine, Predicate, Sign, TriBool};

/// Gate an already computed result against the process-wide policy
///
/// `True` and `False` always pass through untouched. `Indeterminate` becomes
/// an error only if the global switchboard intercepts `kind`.
pub fn evaluate_gated(
    result: TriBool,
    predicate: Predicate,
    kind: ExceptionKind,
    context: Vec<(f64, f64)>,
) -> Result<TriBool, IndeterminateError> {
    Gate::global().evaluate_as(result, predicate, kind, context)
}

/// Evaluates predicates and applies an intercept policy to the results
///
/// The policy is borrowed, not owned: [`Gate::global`] uses the shared
/// switchboard, [`Gate::new`] takes any [`InterceptPolicy`].
///
/// # Examples
///
/// ```
/// use caliper_domain::{NumberInterval, TriBool};
/// use caliper_gate::{ExceptionKind, ExceptionPolicy, Gate};
///
/// let policy = ExceptionPolicy::new();
/// let gate = Gate::new(&policy);
/// let x = NumberInterval::from_bounds(-1.0, 1.0);
///
/// assert_eq!(gate.is_zero(&x), Ok(TriBool::Indeterminate));
///
/// policy.intercept(ExceptionKind::Indeterminate);
/// assert!(gate.is_zero(&x).is_err());
/// ```
pub struct Gate<'p, P: ?Sized> {
    policy: &'p P,
}

impl<P: ?Sized> Clone for Gate<'_, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: ?Sized> Copy for Gate<'_, P> {}

impl Gate<'static, ExceptionPolicy> {
    /// Gate backed by the process-wide switchboard
    pub fn global() -> Self {
        Self::new(policy::global())
    }
}

impl<'p, P: InterceptPolicy + ?Sized> Gate<'p, P> {
    /// Gate backed by the given policy
    pub fn new(policy: &'p P) -> Self {
        Self { policy }
    }

    /// Gate a result under the built-in indeterminate kind
    pub fn evaluate(
        &self,
        result: TriBool,
        predicate: Predicate,
        context: Vec<(f64, f64)>,
    ) -> Result<TriBool, IndeterminateError> {
        self.evaluate_as(result, predicate, ExceptionKind::Indeterminate, context)
    }

    /// Gate a result under an explicit kind
    pub fn evaluate_as(
        &self,
        result: TriBool,
        predicate: Predicate,
        kind: ExceptionKind,
        context: Vec<(f64, f64)>,
    ) -> Result<TriBool, IndeterminateError> {
        if result.is_definite() || !self.policy.should_intercept(&kind) {
            return Ok(result);
        }

        tracing::debug!(predicate = %predicate, kind = %kind, "Intercepted indeterminate result");
        Err(IndeterminateError::new(predicate, kind).with_context(context))
    }

    /// Demand a two-valued answer
    ///
    /// Fails on `Indeterminate` whatever the policy says; for call sites that
    /// cannot consume three-valued logic at all.
    pub fn require(
        &self,
        result: TriBool,
        predicate: Predicate,
        context: Vec<(f64, f64)>,
    ) -> Result<bool, IndeterminateError> {
        result.to_option().ok_or_else(|| {
            IndeterminateError::new(predicate, ExceptionKind::Indeterminate).with_context(context)
        })
    }

    /// Gated `==`
    pub fn eq<A, B>(&self, a: &A, b: &B) -> Result<TriBool, IndeterminateError>
    where
        A: IntervalEngine,
        B: IntervalEngine,
    {
        self.evaluate(compare::eq(a, b), Predicate::Eq, pair_context(a, b))
    }

    /// Gated `!=`
    pub fn ne<A, B>(&self, a: &A, b: &B) -> Result<TriBool, IndeterminateError>
    where
        A: IntervalEngine,
        B: IntervalEngine,
    {
        self.evaluate(compare::ne(a, b), Predicate::Ne, pair_context(a, b))
    }

    /// Gated `<`
    pub fn lt<A, B>(&self, a: &A, b: &B) -> Result<TriBool, IndeterminateError>
    where
        A: IntervalEngine,
        B: IntervalEngine,
    {
        self.evaluate(compare::lt(a, b), Predicate::Lt, pair_context(a, b))
    }

    /// Gated `<=`
    pub fn le<A, B>(&self, a: &A, b: &B) -> Result<TriBool, IndeterminateError>
    where
        A: IntervalEngine,
        B: IntervalEngine,
    {
        self.evaluate(compare::le(a, b), Predicate::Le, pair_context(a, b))
    }

    /// Gated `>`
    pub fn gt<A, B>(&self, a: &A, b: &B) -> Result<TriBool, IndeterminateError>
    where
        A: IntervalEngine,
        B: IntervalEngine,
    {
        self.evaluate(compare::gt(a, b), Predicate::Gt, pair_context(a, b))
    }

    /// Gated `>=`
    pub fn ge<A, B>(&self, a: &A, b: &B) -> Result<TriBool, IndeterminateError>
    where
        A: IntervalEngine,
        B: IntervalEngine,
    {
        self.evaluate(compare::ge(a, b), Predicate::Ge, pair_context(a, b))
    }

    /// Gated zero test
    pub fn is_zero<X: IntervalEngine>(&self, x: &X) -> Result<TriBool, IndeterminateError> {
        self.evaluate(compare::is_zero(x), Predicate::IsZero, single_context(x))
    }

    /// Gated one test
    pub fn is_one<X: IntervalEngine>(&self, x: &X) -> Result<TriBool, IndeterminateError> {
        self.evaluate(compare::is_one(x), Predicate::IsOne, single_context(x))
    }

    /// Gated `x > 0`
    pub fn is_positive<X: IntervalEngine>(&self, x: &X) -> Result<TriBool, IndeterminateError> {
        self.evaluate(compare::is_positive(x), Predicate::IsPositive, single_context(x))
    }

    /// Gated `x < 0`
    pub fn is_negative<X: IntervalEngine>(&self, x: &X) -> Result<TriBool, IndeterminateError> {
        self.evaluate(compare::is_negative(x), Predicate::IsNegative, single_context(x))
    }

    /// Gated `x >= 0`
    pub fn is_nonnegative<X: IntervalEngine>(&self, x: &X) -> Result<TriBool, IndeterminateError> {
        self.evaluate(compare::is_nonnegative(x), Predicate::IsNonNegative, single_context(x))
    }

    /// Gated `x <= 0`
    pub fn is_nonpositive<X: IntervalEngine>(&self, x: &X) -> Result<TriBool, IndeterminateError> {
        self.evaluate(compare::is_nonpositive(x), Predicate::IsNonPositive, single_context(x))
    }

    /// Gated `x == value` for a scalar
    pub fn contains_value<X: IntervalEngine>(
        &self,
        x: &X,
        value: f64,
    ) -> Result<TriBool, IndeterminateError> {
        self.evaluate(compare::contains_value(x, value), Predicate::Contains, single_context(x))
    }

    /// Gated finiteness test
    pub fn is_finite<X: IntervalEngine>(&self, x: &X) -> Result<TriBool, IndeterminateError> {
        self.evaluate(compare::is_finite(x), Predicate::IsFinite, single_context(x))
    }

    /// Gated integrality test
    pub fn is_integer<X: IntervalEngine>(&self, x: &X) -> Result<TriBool, IndeterminateError> {
        self.evaluate(compare::is_integer(x), Predicate::IsInteger, single_context(x))
    }

    /// Gated sign
    ///
    /// `Ok(None)` is the pass-through form of an undecidable sign.
    pub fn sign<X: IntervalEngine>(&self, x: &X) -> Result<Option<Sign>, IndeterminateError> {
        let sign = compare::sign(x);
        let decided = TriBool::from(sign.is_some().then_some(true));
        self.evaluate(decided, Predicate::Sign, single_context(x))?;
        Ok(sign)
    }

    /// Two-valued `==`, failing on `Indeterminate`
    pub fn decide_eq<A, B>(&self, a: &A, b: &B) -> Result<bool, IndeterminateError>
    where
        A: IntervalEngine,
        B: IntervalEngine,
    {
        self.require(compare::eq(a, b), Predicate::Eq, pair_context(a, b))
    }

    /// Two-valued `<`, failing on `Indeterminate`
    pub fn decide_lt<A, B>(&self, a: &A, b: &B) -> Result<bool, IndeterminateError>
    where
        A: IntervalEngine,
        B: IntervalEngine,
    {
        self.require(compare::lt(a, b), Predicate::Lt, pair_context(a, b))
    }

    /// Two-valued `<=`, failing on `Indeterminate`
    pub fn decide_le<A, B>(&self, a: &A, b: &B) -> Result<bool, IndeterminateError>
    where
        A: IntervalEngine,
        B: IntervalEngine,
    {
        self.require(compare::le(a, b), Predicate::Le, pair_context(a, b))
    }

    /// Two-valued zero test, failing on `Indeterminate`
    pub fn decide_is_zero<X: IntervalEngine>(&self, x: &X) -> Result<bool, IndeterminateError> {
        self.require(compare::is_zero(x), Predicate::IsZero, single_context(x))
    }

    /// Sign that must be decidable
    pub fn decide_sign<X: IntervalEngine>(&self, x: &X) -> Result<Sign, IndeterminateError> {
        compare::sign(x).ok_or_else(|| {
            IndeterminateError::new(Predicate::Sign, ExceptionKind::Indeterminate)
                .with_context(single_context(x))
        })
    }
}

fn single_context<X: IntervalEngine>(x: &X) -> Vec<(f64, f64)> {
    vec![(x.lo(), x.hi())]
}

fn pair_context<A: IntervalEngine, B: IntervalEngine>(a: &A, b: &B) -> Vec<(f64, f64)> {
    vec![(a.lo(), a.hi()), (b.lo(), b.hi())]
}
