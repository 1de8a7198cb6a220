//! Id-or-object references
//!
//! Call sites often have either an id (stored in some other object) or the
//! object itself (fresh from `spawn`). `ThingRef` lets the registry accept
//! both and normalize them.

use crate::thing::Thing;
use codex_core::ThingId;
use std::fmt;
use std::sync::Arc;

/// Either an identifier or a shared handle to a thing.
#[derive(Clone)]
pub enum ThingRef {
    /// A bare identifier, possibly dangling
    Id(ThingId),
    /// An object handle, registered or not
    Thing(Arc<dyn Thing>),
}

impl ThingRef {
    /// Coerce to an identifier.
    ///
    /// An id is returned unchanged; an object reports its own id. No registry
    /// access, so this works for unregistered objects too.
    pub fn id(&self) -> ThingId {
        match self {
            ThingRef::Id(id) => *id,
            ThingRef::Thing(thing) => thing.id(),
        }
    }

    /// Wrap an object handle.
    pub fn from_thing(thing: Arc<dyn Thing>) -> Self {
        ThingRef::Thing(thing)
    }
}

impl From<ThingId> for ThingRef {
    fn from(id: ThingId) -> Self {
        ThingRef::Id(id)
    }
}

impl From<&ThingId> for ThingRef {
    fn from(id: &ThingId) -> Self {
        ThingRef::Id(*id)
    }
}

impl<T: Thing> From<&Arc<T>> for ThingRef {
    fn from(thing: &Arc<T>) -> Self {
        ThingRef::Thing(Arc::clone(thing) as Arc<dyn Thing>)
    }
}

impl fmt::Debug for ThingRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThingRef::Id(id) => f.debug_tuple("Id").field(id).finish(),
            ThingRef::Thing(thing) => f.debug_tuple("Thing").field(&thing.id()).finish(),
        }
    }
}
