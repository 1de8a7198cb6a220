//! Codex - a central object registry
//!
//! Objects are owned by one registry and referenced everywhere else by a
//! stable `ThingId`. Relationships between objects (parent/child, graphs,
//! many-to-many) are stored as ids and resolved through the registry, so
//! ownership never forms a cycle.
//!
//! # Quick Start
//!
//! ```
//! use codex::{Codex, Thing, ThingId};
//!
//! struct Note {
//!     id: ThingId,
//!     text: String,
//! }
//!
//! impl Thing for Note {
//!     fn id(&self) -> ThingId {
//!         self.id
//!     }
//!
//!     fn describe(&self) -> String {
//!         format!("Note({})", self.text)
//!     }
//! }
//!
//! let codex = Codex::new();
//! let note = codex.spawn(|id| Note { id, text: "hello".into() });
//!
//! assert_eq!(codex.size(), 1);
//! println!("{}", codex.render(false));
//!
//! codex.remove(note.id());
//! assert!(codex.is_empty());
//! ```
//!
//! # Architecture
//!
//! - `codex-core`: `ThingId`, `CodexError`, `CodexConfig`
//! - `codex-registry`: the `Thing` contract and the `Codex` registry
//!
//! This crate re-exports both.

pub use codex_core::{config, error, id};
pub use codex_registry::*;
