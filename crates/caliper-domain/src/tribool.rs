//! Three-valued logic
//!
//! [`TriBool`] follows Kleene's strong three-valued logic. There is deliberately
//! no `From<TriBool> for bool`: turning an indeterminate answer into a plain
//! boolean is a decision the caller makes with [`TriBool::unwrap_or`].

use std::fmt;
use std::ops::{BitAnd, BitOr, BitXor, Not};

/// Result of evaluating a predicate over an interval
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TriBool {
    /// Holds for every point of the interval(s)
    True,

    /// Fails for every point of the interval(s)
    False,

    /// Holds for some points and fails for others, or the input was empty
    Indeterminate,
}

impl TriBool {
    /// Kleene conjunction
    pub fn and(self, other: TriBool) -> TriBool {
        match (self, other) {
            (TriBool::False, _) | (_, TriBool::False) => TriBool::False,
            (TriBool::True, TriBool::True) => TriBool::True,
            _ => TriBool::Indeterminate,
        }
    }

    /// Kleene disjunction
    pub fn or(self, other: TriBool) -> TriBool {
        match (self, other) {
            (TriBool::True, _) | (_, TriBool::True) => TriBool::True,
            (TriBool::False, TriBool::False) => TriBool::False,
            _ => TriBool::Indeterminate,
        }
    }

    /// Kleene negation
    #[allow(clippy::should_implement_trait)]
    pub fn not(self) -> TriBool {
        match self {
            TriBool::True => TriBool::False,
            TriBool::False => TriBool::True,
            TriBool::Indeterminate => TriBool::Indeterminate,
        }
    }

    /// Exclusive or; indeterminate if either side is
    pub fn xor(self, other: TriBool) -> TriBool {
        match (self.to_option(), other.to_option()) {
            (Some(a), Some(b)) => TriBool::from(a != b),
            _ => TriBool::Indeterminate,
        }
    }

    /// Conjunction over an iterator (`True` when empty)
    pub fn all<I: IntoIterator<Item = TriBool>>(values: I) -> TriBool {
        let mut acc = TriBool::True;
        for value in values {
            acc = acc.and(value);
            if acc == TriBool::False {
                break;
            }
        }
        acc
    }

    /// Disjunction over an iterator (`False` when empty)
    pub fn any<I: IntoIterator<Item = TriBool>>(values: I) -> TriBool {
        let mut acc = TriBool::False;
        for value in values {
            acc = acc.or(value);
            if acc == TriBool::True {
                break;
            }
        }
        acc
    }

    /// Whether the value is `True`
    pub fn is_true(self) -> bool {
        self == TriBool::True
    }

    /// Whether the value is `False`
    pub fn is_false(self) -> bool {
        self == TriBool::False
    }

    /// Whether the value is `Indeterminate`
    pub fn is_indeterminate(self) -> bool {
        self == TriBool::Indeterminate
    }

    /// Whether the value is `True` or `False`
    pub fn is_definite(self) -> bool {
        !self.is_indeterminate()
    }

    /// Definite value, or `None` when indeterminate
    pub fn to_option(self) -> Option<bool> {
        match self {
            TriBool::True => Some(true),
            TriBool::False => Some(false),
            TriBool::Indeterminate => None,
        }
    }

    /// Coerce to `bool`, using `default` for `Indeterminate`
    pub fn unwrap_or(self, default: bool) -> bool {
        self.to_option().unwrap_or(default)
    }

    /// Coerce to `bool`, computing the value for `Indeterminate` lazily
    pub fn unwrap_or_else<F: FnOnce() -> bool>(self, f: F) -> bool {
        self.to_option().unwrap_or_else(f)
    }

    /// Name used in diagnostics
    pub fn as_str(&self) -> &'static str {
        match self {
            TriBool::True => "true",
            TriBool::False => "false",
            TriBool::Indeterminate => "indeterminate",
        }
    }
}

impl From<bool> for TriBool {
    fn from(value: bool) -> Self {
        if value {
            TriBool::True
        } else {
            TriBool::False
        }
    }
}

impl From<Option<bool>> for TriBool {
    fn from(value: Option<bool>) -> Self {
        value.map_or(TriBool::Indeterminate, TriBool::from)
    }
}

impl BitAnd for TriBool {
    type Output = TriBool;

    fn bitand(self, rhs: TriBool) -> TriBool {
        self.and(rhs)
    }
}

impl BitOr for TriBool {
    type Output = TriBool;

    fn bitor(self, rhs: TriBool) -> TriBool {
        self.or(rhs)
    }
}

impl BitXor for TriBool {
    type Output = TriBool;

    fn bitxor(self, rhs: TriBool) -> TriBool {
        self.xor(rhs)
    }
}

impl Not for TriBool {
    type Output = TriBool;

    fn not(self) -> TriBool {
        TriBool::not(self)
    }
}

impl fmt::Display for TriBool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
