//! Caliper Domain Layer
//!
//! Three-valued predicates over interval-backed numbers. An interval `[lo, hi]`
//! stands in for an unknown real; a predicate over it is only `True` or `False`
//! when that answer holds for every point, otherwise it is `Indeterminate`.
//!
//! ## Key Concepts
//!
//! - **NumberInterval**: an engine interval wrapped for predicate evaluation
//! - **TriBool**: Kleene three-valued logic (`True`, `False`, `Indeterminate`)
//! - **IntervalEngine**: the seam to the external interval arithmetic engine
//! - **Predicate**: tag naming each predicate, used for diagnostics
//!
//! ## Architecture
//!
//! This crate has no runtime dependencies. It never constructs, rounds or
//! computes intervals; it reads bounds from whatever engine implements
//! [`IntervalEngine`]. Converting `Indeterminate` into an error is the job of
//! the gate layer built on top.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bounds;
pub mod compare;
pub mod interval;
pub mod predicate;
pub mod traits;
pub mod tribool;

// Re-exports for convenience
pub use bounds::Bounds;
pub use interval::NumberInterval;
pub use predicate::{Predicate, Sign};
pub use traits::IntervalEngine;
pub use tribool::TriBool;
