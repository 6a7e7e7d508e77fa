//! Predicate identifiers and sign classification

use std::fmt;

/// Identifies which predicate produced a result
///
/// Used as diagnostic context when an indeterminate result is converted into
/// an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Predicate {
    /// `a == b`
    Eq,
    /// `a != b`
    Ne,
    /// `a < b`
    Lt,
    /// `a <= b`
    Le,
    /// `a > b`
    Gt,
    /// `a >= b`
    Ge,
    /// `x == 0`
    IsZero,
    /// `x == 1`
    IsOne,
    /// `x > 0`
    IsPositive,
    /// `x < 0`
    IsNegative,
    /// `x >= 0`
    IsNonNegative,
    /// `x <= 0`
    IsNonPositive,
    /// Sign classification
    Sign,
    /// `x` is finite
    IsFinite,
    /// `x` is an integer
    IsInteger,
    /// `x == v` for a scalar `v`
    Contains,
    /// Host-defined predicate
    Custom(&'static str),
}

impl Predicate {
    /// Get the predicate name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Predicate::Eq => "eq",
            Predicate::Ne => "ne",
            Predicate::Lt => "lt",
            Predicate::Le => "le",
            Predicate::Gt => "gt",
            Predicate::Ge => "ge",
            Predicate::IsZero => "iszero",
            Predicate::IsOne => "isone",
            Predicate::IsPositive => "ispositive",
            Predicate::IsNegative => "isnegative",
            Predicate::IsNonNegative => "isnonnegative",
            Predicate::IsNonPositive => "isnonpositive",
            Predicate::Sign => "sign",
            Predicate::IsFinite => "isfinite",
            Predicate::IsInteger => "isinteger",
            Predicate::Contains => "contains",
            Predicate::Custom(name) => *name,
        }
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Definite sign of an interval
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    /// Every point is below zero
    Negative,
    /// The interval is exactly zero
    Zero,
    /// Every point is above zero
    Positive,
}

impl Sign {
    /// `-1`, `0` or `1`
    pub fn as_i8(&self) -> i8 {
        match self {
            Sign::Negative => -1,
            Sign::Zero => 0,
            Sign::Positive => 1,
        }
    }
}
