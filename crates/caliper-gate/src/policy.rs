//! Exception policy switchboard
//!
//! Decides, per [`ExceptionKind`], whether an indeterminate result is handed
//! back as [`caliper_domain::TriBool::Indeterminate`] or turned into an error.
//! Every kind starts out as pass-through and only changes through an explicit
//! call; nothing resets it automatically.
//!
//! The process-wide switchboard returned by [`global`] is meant to be
//! configured once, by a single owner, before evaluation starts. It sits behind
//! a read-write lock so concurrent evaluators can read it safely, but toggling
//! it while other threads evaluate gives those threads no ordering guarantee.

use crate::kind::ExceptionKind;
use std::collections::HashMap;
use std::sync::{LazyLock, PoisonError, RwLock};

/// Decision function consulted by the gate
///
/// The gate calls this but does not own it, so hosts can supply their own
/// strategy instead of the shared switchboard.
pub trait InterceptPolicy {
    /// Whether an indeterminate result of this kind should become an error
    fn should_intercept(&self, kind: &ExceptionKind) -> bool;
}

/// Observable state of one exception kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyMode {
    /// Return the indeterminate sentinel
    PassThrough,

    /// Return an error
    Intercept,
}

impl From<bool> for PolicyMode {
    fn from(intercept: bool) -> Self {
        if intercept {
            PolicyMode::Intercept
        } else {
            PolicyMode::PassThrough
        }
    }
}

/// Mutable map from exception kind to intercept flag
#[derive(Debug, Default)]
pub struct ExceptionPolicy {
    flags: RwLock<HashMap<ExceptionKind, bool>>,
}

impl ExceptionPolicy {
    /// Create a policy where every kind passes through
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the intercept flag for a kind
    pub fn set_intercept(&self, kind: ExceptionKind, intercept: bool) {
        let previous = self
            .flags
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(kind.clone(), intercept);

        if previous != Some(intercept) {
            tracing::info!(
                kind = %kind,
                mode = ?PolicyMode::from(intercept),
                "Exception policy reconfigured"
            );
        }
    }

    /// Turn indeterminate results of this kind into errors
    pub fn intercept(&self, kind: ExceptionKind) {
        self.set_intercept(kind, true);
    }

    /// Return indeterminate results of this kind as the sentinel
    pub fn pass_through(&self, kind: ExceptionKind) {
        self.set_intercept(kind, false);
    }

    /// Current mode of a kind
    pub fn mode(&self, kind: &ExceptionKind) -> PolicyMode {
        PolicyMode::from(self.should_intercept(kind))
    }

    /// Copy of every explicitly configured kind
    pub fn snapshot(&self) -> HashMap<ExceptionKind, bool> {
        self.flags
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Drop all configuration, returning every kind to pass-through
    pub fn reset(&self) {
        self.flags
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
        tracing::info!("Exception policy reset to pass-through");
    }
}

impl InterceptPolicy for ExceptionPolicy {
    fn should_intercept(&self, kind: &ExceptionKind) -> bool {
        self.flags
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(kind)
            .copied()
            .unwrap_or(false)
    }
}

impl<F> InterceptPolicy for F
where
    F: Fn(&ExceptionKind) -> bool,
{
    fn should_intercept(&self, kind: &ExceptionKind) -> bool {
        self(kind)
    }
}

static GLOBAL: LazyLock<ExceptionPolicy> = LazyLock::new(ExceptionPolicy::new);

/// The process-wide switchboard
pub fn global() -> &'static ExceptionPolicy {
    &GLOBAL
}

/// Consult the process-wide switchboard
pub fn should_intercept(kind: &ExceptionKind) -> bool {
    global().should_intercept(kind)
}
