//! Registry configuration
//!
//! A `CodexConfig` can be built in code (see `Codex::builder` in
//! `codex-registry`) or loaded from TOML. Every field has a default, so an
//! empty document is a valid configuration.
//!
//! ```toml
//! # Header label printed at the top of the listing
//! name = "Codex"
//! # Number of dashes in the top/bottom rule
//! rule_width = 45
//! # Notify remaining entries when the registry itself is dropped
//! notify_on_drop = true
//! ```

use crate::error::{CodexError, Result};
use serde::{Deserialize, Serialize};

/// Default header label for the diagnostic listing
pub const DEFAULT_NAME: &str = "Codex";

/// Default number of dashes in the listing's top and bottom rule
pub const DEFAULT_RULE_WIDTH: usize = 45;

/// Configuration for a registry instance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodexConfig {
    /// Header label printed in the diagnostic listing
    #[serde(default = "default_name")]
    pub name: String,
    /// Number of dashes in the listing's rule lines. Must be > 0.
    #[serde(default = "default_rule_width")]
    pub rule_width: usize,
    /// Run removal hooks for entries still present when the registry is dropped.
    #[serde(default = "default_notify_on_drop")]
    pub notify_on_drop: bool,
}

fn default_name() -> String {
    DEFAULT_NAME.to_string()
}

fn default_rule_width() -> usize {
    DEFAULT_RULE_WIDTH
}

fn default_notify_on_drop() -> bool {
    true
}

impl Default for CodexConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            rule_width: default_rule_width(),
            notify_on_drop: default_notify_on_drop(),
        }
    }
}

impl CodexConfig {
    /// Parse and validate a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns `CodexError::InvalidConfig` if the text is not valid TOML,
    /// a field has the wrong type, or a value fails validation.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: CodexConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value constraints that the type system doesn't cover.
    pub fn validate(&self) -> Result<()> {
        if self.rule_width == 0 {
            return Err(CodexError::invalid_config(
                "rule_width must be greater than 0",
            ));
        }
        Ok(())
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# Codex registry configuration
#
# Header label printed at the top of the listing
name = "Codex"

# Number of dashes in the top/bottom rule of the listing
rule_width = 45

# Run removal hooks for entries still present when the registry is dropped.
# Explicit removal is the only guaranteed notification path; this is a fallback.
notify_on_drop = true
"#
    }
}
