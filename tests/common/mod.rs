//! Shared test doubles: a parent/child hierarchy built on ids.
//!
//! Parents keep the ids of their children, children keep the id of their
//! parent. Removing a child detaches it from its parent; removing a parent
//! removes all of its children.

#![allow(dead_code)]

use codex::{Codex, Thing, ThingId};
use parking_lot::Mutex;
use std::sync::Arc;

/// Install a test subscriber once so `RUST_LOG=debug` shows registry logs.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Shared removal log
pub type RemovalLog = Arc<Mutex<Vec<ThingId>>>;

pub fn new_log() -> RemovalLog {
    Arc::new(Mutex::new(Vec::new()))
}

pub struct Parent {
    pub id: ThingId,
    pub name: String,
    pub children: Mutex<Vec<ThingId>>,
    pub log: RemovalLog,
}

impl Parent {
    pub fn create(codex: &Codex, name: &str, log: &RemovalLog) -> Arc<Parent> {
        codex.spawn(|id| Parent {
            id,
            name: name.to_string(),
            children: Mutex::new(Vec::new()),
            log: Arc::clone(log),
        })
    }

    pub fn children(&self, codex: &Codex) -> Vec<Arc<Child>> {
        // snapshot first: lookups take the registry lock, and child hooks
        // take the registry lock before this list
        let ids: Vec<ThingId> = self.children.lock().clone();
        ids.into_iter()
            .filter_map(|id| codex.get_as::<Child>(id))
            .collect()
    }
}

impl Thing for Parent {
    fn id(&self) -> ThingId {
        self.id
    }

    fn on_removed(&self, codex: &Codex) {
        self.log.lock().push(self.id);
        // snapshot first: each child's hook edits this list
        let children: Vec<ThingId> = self.children.lock().clone();
        for child in children {
            codex.remove(child);
        }
    }

    fn describe(&self) -> String {
        let children = self.children.lock();
        let mut out = format!("Parent({})", self.name);
        for child in children.iter() {
            out.push_str(&format!("\n  child {}", child));
        }
        out
    }
}

pub struct Child {
    pub id: ThingId,
    pub parent: ThingId,
    pub log: RemovalLog,
}

impl Child {
    pub fn create(codex: &Codex, parent: &Arc<Parent>, log: &RemovalLog) -> Arc<Child> {
        let child = codex.spawn(|id| Child {
            id,
            parent: parent.id,
            log: Arc::clone(log),
        });
        parent.children.lock().push(child.id);
        child
    }

    pub fn parent(&self, codex: &Codex) -> Option<Arc<Parent>> {
        codex.get_as::<Parent>(self.parent)
    }
}

impl Thing for Child {
    fn id(&self) -> ThingId {
        self.id
    }

    fn on_removed(&self, codex: &Codex) {
        self.log.lock().push(self.id);
        // parent may already be gone; a dangling id is fine
        if let Some(parent) = self.parent(codex) {
            parent.children.lock().retain(|id| *id != self.id);
        }
    }
}

/// Removes its partner when removed. Two of these pointing at each other form
/// a removal cycle.
pub struct Partner {
    pub id: ThingId,
    pub partner: Mutex<Option<ThingId>>,
    pub log: RemovalLog,
}

impl Partner {
    pub fn create(codex: &Codex, log: &RemovalLog) -> Arc<Partner> {
        codex.spawn(|id| Partner {
            id,
            partner: Mutex::new(None),
            log: Arc::clone(log),
        })
    }
}

impl Thing for Partner {
    fn id(&self) -> ThingId {
        self.id
    }

    fn on_removed(&self, codex: &Codex) {
        self.log.lock().push(self.id);
        let partner = *self.partner.lock();
        if let Some(partner) = partner {
            codex.remove(partner);
        }
    }
}

/// A thing with no behaviour of its own
pub struct Plain {
    pub id: ThingId,
}

impl Thing for Plain {
    fn id(&self) -> ThingId {
        self.id
    }
}

pub fn plain(codex: &Codex) -> Arc<Plain> {
    codex.spawn(|id| Plain { id })
}
