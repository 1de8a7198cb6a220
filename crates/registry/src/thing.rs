//! The registrable object contract
//!
//! Anything stored in a [`Codex`] implements [`Thing`]. The trait is
//! object safe; the registry keeps entries as `Arc<dyn Thing>` and
//! dispatches the removal hook dynamically.

use crate::codex::Codex;
use codex_core::ThingId;
use std::any::Any;
use std::sync::Arc;

/// Conversion to `Any` for typed lookups.
///
/// Blanket-implemented for every sized `Send + Sync + 'static` type, so
/// implementors of [`Thing`] never write this by hand.
pub trait AsAny: Any + Send + Sync {
    /// Upcast a shared handle to `Arc<dyn Any>` so it can be downcast.
    fn into_any(self: Arc<Self>) -> Arc<dyn Any + Send + Sync>;
}

impl<T: Any + Send + Sync> AsAny for T {
    fn into_any(self: Arc<Self>) -> Arc<dyn Any + Send + Sync> {
        self
    }
}

/// An object managed by a [`Codex`].
///
/// The id is assigned once, before the object is registered, and must not
/// change afterwards: the registry keys the entry by whatever `id()`
/// returns at registration time.
///
/// Create things with [`Codex::spawn`], which mints the id and registers the
/// object in one step. A thing built by hand and never registered is still a
/// usable value, but no id lookup will ever find it.
pub trait Thing: AsAny {
    /// The identifier assigned at construction.
    fn id(&self) -> ThingId;

    /// Called by [`Codex::remove`] before the entry is erased.
    ///
    /// While this runs the thing is still registered, so it can look itself
    /// and its relatives up. Use it to cascade cleanup: a child detaching
    /// from its parent, a parent removing its children. Calls back into
    /// `codex` are allowed; removing an id whose removal is already under way
    /// returns `false`, so cyclic cascades terminate.
    ///
    /// May be invoked twice (explicit removal, then the drop fallback of a
    /// registry that somehow still holds it), so implementations should
    /// tolerate relatives that are already gone.
    fn on_removed(&self, codex: &Codex) {
        let _ = codex;
    }

    /// Description shown in the registry listing. May span several lines.
    fn describe(&self) -> String {
        format!(
            "<'{}' object at [{}]>",
            std::any::type_name::<Self>(),
            self.id()
        )
    }
}
