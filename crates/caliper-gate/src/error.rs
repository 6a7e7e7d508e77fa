//! Gate error types

use crate::kind::ExceptionKind;
use caliper_domain::Predicate;
use thiserror::Error;

/// An indeterminate predicate result converted into an error
///
/// Carries the predicate that produced it, the exception kind it was raised
/// under, and the operand bounds when the caller supplied them.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("indeterminate result from {predicate}{}", format_context(.context))]
pub struct IndeterminateError {
    /// Predicate that could not be decided
    pub predicate: Predicate,

    /// Kind the policy intercepted
    pub kind: ExceptionKind,

    /// Operand bounds, one `(lo, hi)` pair per operand
    pub context: Vec<(f64, f64)>,
}

impl IndeterminateError {
    /// Create an error without bounds context
    pub fn new(predicate: Predicate, kind: ExceptionKind) -> Self {
        Self {
            predicate,
            kind,
            context: Vec::new(),
        }
    }

    /// Attach operand bounds
    pub fn with_context(mut self, context: Vec<(f64, f64)>) -> Self {
        self.context = context;
        self
    }

    /// Tag of the kind this error was raised under
    pub fn tag(&self) -> &str {
        self.kind.tag()
    }
}

fn format_context(context: &[(f64, f64)]) -> String {
    if context.is_empty() {
        return String::new();
    }
    let operands: Vec<String> = context
        .iter()
        .map(|(lo, hi)| format!("[{}, {}]", lo, hi))
        .collect();
    format!(" over {}", operands.join(" and "))
}

/// Errors that can occur in gate operations
#[derive(Error, Debug)]
pub enum GateError {
    /// An intercepted indeterminate result
    #[error(transparent)]
    Indeterminate(#[from] IndeterminateError),

    /// Invalid policy configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Reading a configuration file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration file is not valid TOML
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

impl GateError {
    /// Whether this is an intercepted indeterminate result
    pub fn is_indeterminate(&self) -> bool {
        matches!(self, GateError::Indeterminate(_))
    }
}

/// Convenience result type for gate operations
pub type Result<T> = std::result::Result<T, GateError>;
