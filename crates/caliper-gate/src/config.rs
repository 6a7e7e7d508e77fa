//! Policy configuration
//!
//! Lets a host set its intercept flags from TOML instead of code:
//!
//! ```toml
//! [intercept]
//! indeterminate = true
//!
//! [intercept.custom]
//! hypot = true
//! ```

use crate::error::{GateError, Result};
use crate::kind::{ExceptionKind, INDETERMINATE_TAG};
use crate::policy::{self, ExceptionPolicy};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Policy configuration file contents
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PolicyConfig {
    /// Intercept flags
    #[serde(default)]
    pub intercept: InterceptSettings,
}

/// Intercept flags per exception kind
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InterceptSettings {
    /// Flag for the built-in indeterminate kind
    #[serde(default)]
    pub indeterminate: bool,

    /// Flags for host-registered kinds, keyed by tag
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub custom: BTreeMap<String, bool>,
}

impl PolicyConfig {
    /// Configuration that intercepts the built-in indeterminate kind
    pub fn strict() -> Self {
        Self {
            intercept: InterceptSettings {
                indeterminate: true,
                custom: BTreeMap::new(),
            },
        }
    }

    /// Parse configuration from a TOML string
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: PolicyConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&contents)?;
        tracing::info!(path = %path.display(), "Loaded exception policy configuration");
        Ok(config)
    }

    /// Serialize configuration to TOML
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| GateError::Config(format!("Failed to serialize config: {}", e)))
    }

    /// Check custom tags
    ///
    /// Custom tags must be non-empty and must not reuse the built-in tag, which
    /// is configured through `indeterminate`.
    pub fn validate(&self) -> Result<()> {
        for tag in self.intercept.custom.keys() {
            if tag.trim().is_empty() {
                return Err(GateError::Config("Custom exception tag must not be empty".into()));
            }
            if tag == INDETERMINATE_TAG {
                return Err(GateError::Config(format!(
                    "'{}' is built in; set intercept.indeterminate instead",
                    INDETERMINATE_TAG
                )));
            }
        }
        Ok(())
    }

    /// Every configured kind with its flag
    pub fn entries(&self) -> Vec<(ExceptionKind, bool)> {
        let mut entries = vec![(ExceptionKind::Indeterminate, self.intercept.indeterminate)];
        entries.extend(
            self.intercept
                .custom
                .iter()
                .map(|(tag, flag)| (ExceptionKind::custom(tag.as_str()), *flag)),
        );
        entries
    }

    /// Write every configured flag into a policy
    pub fn apply(&self, policy: &ExceptionPolicy) {
        for (kind, intercept) in self.entries() {
            policy.set_intercept(kind, intercept);
        }
    }

    /// Write every configured flag into the process-wide switchboard
    pub fn install(&self) {
        self.apply(policy::global());
    }
}
