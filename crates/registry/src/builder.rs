//! Registry builder for fluent configuration
//!
//! ```
//! use codex_registry::Codex;
//!
//! let codex = Codex::builder()
//!     .name("Scene")
//!     .rule_width(20)
//!     .build();
//! assert_eq!(codex.config().name, "Scene");
//! ```

use crate::codex::Codex;
use codex_core::{CodexConfig, Result};

/// Builder for [`Codex`] configuration
#[derive(Debug, Clone, Default)]
pub struct CodexBuilder {
    config: CodexConfig,
}

impl CodexBuilder {
    /// Create new builder with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration
    pub fn config(mut self, config: CodexConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the header label of the listing
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.config.name = name.into();
        self
    }

    /// Set the number of dashes in the listing's rule lines
    pub fn rule_width(mut self, width: usize) -> Self {
        self.config.rule_width = width;
        self
    }

    /// Run removal hooks for leftover entries when the registry is dropped
    pub fn notify_on_drop(mut self, notify: bool) -> Self {
        self.config.notify_on_drop = notify;
        self
    }

    /// Build the registry without validation.
    ///
    /// A zero rule width just renders a bare `+`.
    pub fn build(self) -> Codex {
        Codex::with_config(self.config)
    }

    /// Validate the configuration, then build.
    ///
    /// # Errors
    ///
    /// Returns `CodexError::InvalidConfig` if validation fails.
    pub fn try_build(self) -> Result<Codex> {
        self.config.validate()?;
        Ok(self.build())
    }
}
