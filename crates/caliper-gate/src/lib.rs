//! Caliper Gate
//!
//! Exception policy gate for three-valued interval predicates.
//!
//! # Overview
//!
//! Predicates from `caliper-domain` answer `Indeterminate` when interval bounds
//! cannot settle them. Many numeric algorithms only understand two-valued
//! logic and would rather fail loudly than carry on with a guessed boolean.
//! The gate lets a host decide, per exception kind, whether `Indeterminate` is
//! returned as a value (the default) or as an [`IndeterminateError`].
//!
//! ```text
//! NumberInterval → predicate → TriBool → Gate (policy) → Ok(TriBool) | Err(IndeterminateError)
//! ```
//!
//! # Usage
//!
//! ## Process-wide policy
//!
//! ```no_run
//! use caliper_domain::NumberInterval;
//! use caliper_gate::{policy, ExceptionKind, Gate};
//!
//! // Configure once at startup
//! policy::global().intercept(ExceptionKind::Indeterminate);
//!
//! let x = NumberInterval::from_bounds(-1.0, 1.0);
//! let err = Gate::global().is_zero(&x).unwrap_err();
//! assert_eq!(err.to_string(), "indeterminate result from iszero over [-1, 1]");
//! ```
//!
//! ## Injected policy
//!
//! ```
//! use caliper_domain::{NumberInterval, TriBool};
//! use caliper_gate::{ExceptionKind, Gate};
//!
//! let strict = |kind: &ExceptionKind| *kind == ExceptionKind::Indeterminate;
//! let gate = Gate::new(&strict);
//!
//! let a = NumberInterval::from_bounds(0.0, 1.0);
//! let b = NumberInterval::from_bounds(2.0, 3.0);
//! assert_eq!(gate.lt(&a, &b), Ok(TriBool::True));
//! ```
//!
//! # Configuration
//!
//! The policy can be configured via TOML:
//!
//! ```toml
//! [intercept]
//! indeterminate = true
//!
//! [intercept.custom]
//! hypot = true
//! ```
//!
//! See [`PolicyConfig`].

#![warn(missing_docs)]

mod config;
mod error;
mod fallback;
mod gate;
mod kind;
pub mod policy;

pub use config::{InterceptSettings, PolicyConfig};
pub use error::{GateError, IndeterminateError, Result};
pub use fallback::{recover_indeterminate, recover_kind, AsIndeterminate};
pub use gate::{evaluate_gated, Gate};
pub use kind::{ExceptionKind, INDETERMINATE_TAG};
pub use policy::{should_intercept, ExceptionPolicy, InterceptPolicy, PolicyMode};
