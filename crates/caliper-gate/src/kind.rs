//! Exception kinds the policy is keyed by

use serde::{Deserialize, Serialize};
use std::fmt;

/// Tag of the built-in indeterminate exception kind
pub const INDETERMINATE_TAG: &str = "IndeterminateException";

/// Kind of exception an indeterminate result may be converted into
///
/// The policy holds one intercept flag per kind. Built-in predicates raise
/// under [`ExceptionKind::Indeterminate`]; hosts can route their own checks
/// through a [`ExceptionKind::Custom`] kind and toggle it independently.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum ExceptionKind {
    /// The generic indeterminate-result kind
    Indeterminate,

    /// A host-registered kind
    Custom(String),
}

impl ExceptionKind {
    /// Create a host-registered kind
    pub fn custom(tag: impl Into<String>) -> Self {
        Self::from_tag(&tag.into())
    }

    /// Get the discriminating tag
    pub fn tag(&self) -> &str {
        match self {
            ExceptionKind::Indeterminate => INDETERMINATE_TAG,
            ExceptionKind::Custom(tag) => tag,
        }
    }

    /// Parse a kind from its tag
    ///
    /// The built-in tag maps back to [`ExceptionKind::Indeterminate`], so the
    /// two spellings never end up as separate policy entries.
    pub fn from_tag(tag: &str) -> Self {
        if tag == INDETERMINATE_TAG {
            ExceptionKind::Indeterminate
        } else {
            ExceptionKind::Custom(tag.to_string())
        }
    }
}

impl fmt::Display for ExceptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl From<ExceptionKind> for String {
    fn from(kind: ExceptionKind) -> Self {
        kind.tag().to_string()
    }
}

impl From<String> for ExceptionKind {
    fn from(tag: String) -> Self {
        ExceptionKind::from_tag(&tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags() {
        assert_eq!(ExceptionKind::Indeterminate.tag(), "IndeterminateException");
        assert_eq!(ExceptionKind::custom("hypot").tag(), "hypot");
    }

    #[test]
    fn test_builtin_tag_is_canonical() {
        assert_eq!(
            ExceptionKind::custom(INDETERMINATE_TAG),
            ExceptionKind::Indeterminate
        );
        assert_eq!(
            ExceptionKind::from_tag("hypot"),
            ExceptionKind::Custom("hypot".to_string())
        );
    }

    #[test]
    fn test_serde_as_tag() {
        let json = serde_json::to_string(&ExceptionKind::Indeterminate).unwrap();
        assert_eq!(json, "\"IndeterminateException\"");
        let kind: ExceptionKind = serde_json::from_str("\"hypot\"").unwrap();
        assert_eq!(kind, ExceptionKind::custom("hypot"));
    }
}
