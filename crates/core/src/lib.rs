//! Core types for the Codex object registry
//!
//! This crate defines the leaf types shared by the registry and its users:
//! - ThingId: Stable identifier handed out to every registered object
//! - CodexError: Error type for the fallible ambient surfaces (parsing, config)
//! - CodexConfig: Registry settings (listing header, rule width, drop behaviour)
//!
//! Nothing here touches registry state. Lookups, removals and the object
//! contract live in `codex-registry`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod id;

pub use config::{CodexConfig, DEFAULT_NAME, DEFAULT_RULE_WIDTH};
pub use error::{CodexError, Result};
pub use id::ThingId;
