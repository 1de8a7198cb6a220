//! Process-wide registry
//!
//! Code that prefers ambient access over passing a `&Codex` around can use
//! [`global`]. The registry is created with default configuration on first
//! use and lives until the process exits; it is never dropped, so its
//! end-of-life fallback never runs. Remove things explicitly.

use crate::codex::Codex;
use once_cell::sync::Lazy;

static GLOBAL: Lazy<Codex> = Lazy::new(Codex::new);

/// The process-wide registry, initialized on first call.
pub fn global() -> &'static Codex {
    &GLOBAL
}
