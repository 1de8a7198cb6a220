//! Codex: a central object registry
//!
//! Objects ("things") are owned by one registry and referenced everywhere
//! else by `ThingId`. A parent keeps the ids of its children, a child keeps
//! the id of its parent, and both resolve those ids through the registry on
//! demand. Ownership edges all point into the registry, so they can never
//! form a cycle.
//!
//! - [`Thing`]: the contract every registered object implements
//! - [`Codex`]: the registry (register, get, remove, contains, size, render)
//! - [`ThingRef`]: an id-or-object value accepted by `remove` and `resolve`
//! - [`global`]: an init-once process-wide registry
//!
//! ```
//! use std::sync::Arc;
//! use codex_registry::{Codex, Thing, ThingId};
//!
//! struct Lamp {
//!     id: ThingId,
//! }
//!
//! impl Thing for Lamp {
//!     fn id(&self) -> ThingId {
//!         self.id
//!     }
//! }
//!
//! let codex = Codex::new();
//! let lamp: Arc<Lamp> = codex.spawn(|id| Lamp { id });
//!
//! assert!(codex.contains(lamp.id()));
//! assert!(codex.remove(&lamp));
//! assert!(codex.get(lamp.id()).is_none());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod builder;
pub mod codex;
pub mod global;
pub mod handle;
pub mod render;
pub mod thing;

pub use builder::CodexBuilder;
pub use codex::Codex;
pub use global::global;
pub use handle::ThingRef;
pub use thing::{AsAny, Thing};

pub use codex_core::{CodexConfig, CodexError, Result, ThingId};
