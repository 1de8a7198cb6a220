//! The registry
//!
//! ## Design
//!
//! `Codex` owns an insertion-ordered map from `ThingId` to `Arc<dyn Thing>`.
//! Every other holder of a thing keeps only its id and resolves it through
//! the registry, so a removed thing becomes a dangling id that resolves to
//! `None`. Dangling ids are a normal state, not an error.
//!
//! ## Removal
//!
//! `remove` runs the target's `on_removed` hook first and erases the entry
//! second. While the hook runs the thing is still visible to lookups, and the
//! hook may call back into the registry (cascading removals, lookups of
//! relatives). An id whose removal is already in progress is treated as
//! absent by a nested `remove`, which is what makes cyclic cascades
//! terminate with every hook run exactly once.
//!
//! ## Locking
//!
//! State sits behind a single `parking_lot::ReentrantMutex`. Each operation
//! is one critical section; `remove` holds the lock across check, hook and
//! erase so it never interleaves with another thread's register or remove.
//! The mutex is re-entrant so hooks can call back in on the same thread.
//! The inner `RefCell` is never borrowed while a hook runs.

use crate::builder::CodexBuilder;
use crate::handle::ThingRef;
use crate::render::render_listing;
use crate::thing::{AsAny, Thing};
use codex_core::{CodexConfig, ThingId};
use indexmap::IndexMap;
use parking_lot::ReentrantMutex;
use std::cell::RefCell;
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace};

/// Mutable registry state, guarded by the registry lock.
#[derive(Default)]
struct Entries {
    /// Live entries in registration order
    things: IndexMap<ThingId, Arc<dyn Thing>>,
    /// Ids whose `on_removed` hook is currently running
    removing: HashSet<ThingId>,
}

/// Clears an id's in-progress mark when dropped.
///
/// Also runs when a removal hook panics, so the entry stays registered and a
/// later `remove` can retry it.
struct RemovalMark<'a> {
    entries: &'a RefCell<Entries>,
    id: ThingId,
}

impl Drop for RemovalMark<'_> {
    fn drop(&mut self) {
        // try_: never panic again while unwinding
        if let Ok(mut entries) = self.entries.try_borrow_mut() {
            entries.removing.remove(&self.id);
        }
    }
}

/// Central owning registry of things.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use codex_registry::{Codex, Thing, ThingId};
///
/// struct Node {
///     id: ThingId,
///     parent: Option<ThingId>,
/// }
///
/// impl Thing for Node {
///     fn id(&self) -> ThingId {
///         self.id
///     }
/// }
///
/// let codex = Codex::new();
/// let root = codex.spawn(|id| Node { id, parent: None });
/// let leaf = codex.spawn(|id| Node { id, parent: Some(root.id) });
///
/// // links are ids, resolved on demand
/// let parent = codex.get_as::<Node>(leaf.parent.unwrap()).unwrap();
/// assert!(Arc::ptr_eq(&parent, &root));
/// ```
pub struct Codex {
    config: CodexConfig,
    entries: ReentrantMutex<RefCell<Entries>>,
}

impl Codex {
    /// Create an empty registry with default configuration
    pub fn new() -> Self {
        Self::with_config(CodexConfig::default())
    }

    /// Create an empty registry with the given configuration
    pub fn with_config(config: CodexConfig) -> Self {
        Self {
            config,
            entries: ReentrantMutex::new(RefCell::new(Entries::default())),
        }
    }

    /// Start a fluent builder
    pub fn builder() -> CodexBuilder {
        CodexBuilder::new()
    }

    /// Configuration this registry was built with
    pub fn config(&self) -> &CodexConfig {
        &self.config
    }

    // ========== Registration ==========

    /// Mint an id, build a thing with it, and register the result.
    ///
    /// This is the construction path for things: the closure receives the
    /// freshly generated id, and the object is registered before anyone else
    /// can see it. Returns the typed handle.
    pub fn spawn<T, F>(&self, build: F) -> Arc<T>
    where
        T: Thing,
        F: FnOnce(ThingId) -> T,
    {
        let thing = Arc::new(build(ThingId::new()));
        self.register(Arc::clone(&thing) as Arc<dyn Thing>);
        thing
    }

    /// Store a thing under the id it reports.
    ///
    /// An existing entry with the same id is replaced. Ids are random v4
    /// UUIDs, so a collision is not expected and not reported. Returns the id.
    pub fn register(&self, thing: Arc<dyn Thing>) -> ThingId {
        let id = thing.id();
        let guard = self.entries.lock();
        // dropped after the borrow ends, in case the old entry's Drop calls back in
        let replaced = guard.borrow_mut().things.insert(id, thing);
        debug!(thing_id = %id, "registered thing");
        drop(replaced);
        id
    }

    // ========== Lookup ==========

    /// Look up a thing by exact id.
    ///
    /// Returns `None` for ids that were never registered or have been removed.
    pub fn get(&self, id: ThingId) -> Option<Arc<dyn Thing>> {
        let guard = self.entries.lock();
        let found = guard.borrow().things.get(&id).cloned();
        if found.is_none() {
            trace!(thing_id = %id, "lookup miss");
        }
        found
    }

    /// Look up a thing and downcast it to its concrete type.
    ///
    /// Returns `None` if the id is absent or the entry is not a `T`.
    pub fn get_as<T: Thing>(&self, id: ThingId) -> Option<Arc<T>> {
        self.get(id)?.into_any().downcast::<T>().ok()
    }

    /// Look up a thing by the canonical string form of its id.
    ///
    /// Strings that don't parse as an id resolve to `None` like any other
    /// unknown key.
    pub fn get_by_str(&self, id: &str) -> Option<Arc<dyn Thing>> {
        ThingId::from_string(id).and_then(|id| self.get(id))
    }

    /// Coerce an id-or-object to an object.
    ///
    /// Object form is returned as-is, registered or not. Id form is looked up.
    pub fn resolve(&self, target: impl Into<ThingRef>) -> Option<Arc<dyn Thing>> {
        match target.into() {
            ThingRef::Thing(thing) => Some(thing),
            ThingRef::Id(id) => self.get(id),
        }
    }

    /// Check if an id is registered
    pub fn contains(&self, id: ThingId) -> bool {
        let guard = self.entries.lock();
        let present = guard.borrow().things.contains_key(&id);
        present
    }

    /// Number of registered things
    pub fn size(&self) -> usize {
        let guard = self.entries.lock();
        let len = guard.borrow().things.len();
        len
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Snapshot of registered ids in registration order
    pub fn ids(&self) -> Vec<ThingId> {
        let guard = self.entries.lock();
        let ids = guard.borrow().things.keys().copied().collect();
        ids
    }

    // ========== Removal ==========

    /// Remove a thing, given its id or the thing itself.
    ///
    /// Returns `false` without side effects if the id isn't registered, or if
    /// its removal is already in progress further up the call stack.
    /// Otherwise runs the thing's `on_removed` hook, erases the entry, and
    /// returns `true`.
    pub fn remove(&self, target: impl Into<ThingRef>) -> bool {
        let id = target.into().id();
        let guard = self.entries.lock();

        let thing = {
            let mut entries = guard.borrow_mut();
            if entries.removing.contains(&id) {
                trace!(thing_id = %id, "removal already in progress");
                return false;
            }
            let Some(thing) = entries.things.get(&id).cloned() else {
                trace!(thing_id = %id, "remove of unknown thing");
                return false;
            };
            entries.removing.insert(id);
            thing
        };

        let mark = RemovalMark {
            entries: &guard,
            id,
        };
        thing.on_removed(self);
        drop(mark);

        let mut entries = guard.borrow_mut();
        entries.things.shift_remove(&id);
        debug!(thing_id = %id, remaining = entries.things.len(), "removed thing");
        true
    }

    /// Remove every registered thing through [`Codex::remove`].
    ///
    /// Hooks run in registration order and may cascade; entries a cascade
    /// already took are skipped. Things registered by a hook during the pass
    /// are kept. Returns the number of successful removals.
    pub fn clear(&self) -> usize {
        self.ids().into_iter().filter(|id| self.remove(*id)).count()
    }

    // ========== Diagnostics ==========

    /// Render a listing of every entry as `[id] description`.
    ///
    /// With `emit` set, the listing is also written to stdout. Registry state
    /// is not changed.
    pub fn render(&self, emit: bool) -> String {
        let snapshot: Vec<(ThingId, Arc<dyn Thing>)> = {
            let guard = self.entries.lock();
            let entries = guard.borrow();
            let snapshot = entries
                .things
                .iter()
                .map(|(id, thing)| (*id, Arc::clone(thing)))
                .collect();
            snapshot
        };
        // describe() runs unlocked so it may look up relatives

        let listing = render_listing(
            &self.config.name,
            self.config.rule_width,
            snapshot
                .into_iter()
                .map(|(id, thing)| (id, thing.describe())),
        );
        if emit {
            println!("{}", listing);
        }
        listing
    }
}

impl Default for Codex {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Codex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Codex")
            .field("name", &self.config.name)
            .field("size", &self.size())
            .finish()
    }
}

impl Drop for Codex {
    /// Best-effort end-of-life notification.
    ///
    /// Entries still registered when the registry goes away get their hooks
    /// run through the normal removal path. Only explicit `remove` is a
    /// guaranteed notification; this covers registries that are simply
    /// dropped.
    fn drop(&mut self) {
        if !self.config.notify_on_drop || self.is_empty() {
            return;
        }
        debug!(remaining = self.size(), "registry dropped with live entries");
        self.clear();
    }
}
