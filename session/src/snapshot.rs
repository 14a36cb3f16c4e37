//! Persisted session snapshot: one key-value slot holding the serialized
//! Identity.
//!
//! TRADE-OFFS
//! ==========
//! Last-write-wins, no schema version, no migration path. Acceptable
//! because only one logical session exists per browser context; corrupt
//! data is treated the same as an absent snapshot.

#[cfg(test)]
#[path = "snapshot_test.rs"]
mod snapshot_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::identity::Identity;

/// Storage key for the persisted Identity snapshot.
pub const SNAPSHOT_KEY: &str = "ayusmat_user";

/// Error returned by [`SnapshotStore::save`].
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    /// The snapshot could not be written to the underlying slot.
    #[error("snapshot write failed: {0}")]
    Write(String),
}

/// A single durable slot for the current Identity.
///
/// The browser implementation lives in the `client` crate (localStorage);
/// [`MemorySnapshot`] backs native tests.
pub trait SnapshotStore {
    /// Load the persisted Identity. Absent or corrupt data yields `None`.
    fn load(&self) -> Option<Identity>;

    /// Persist `identity`, replacing any previous snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Write`] when the slot rejects the write.
    fn save(&self, identity: &Identity) -> Result<(), SnapshotError>;

    /// Erase the snapshot. Erasing an empty slot is a no-op.
    fn clear(&self);
}

/// In-process snapshot slot. Clones share the same slot, so a second store
/// constructed over a clone observes earlier writes (restore-on-reload in
/// tests).
#[derive(Clone, Debug, Default)]
pub struct MemorySnapshot {
    slot: Rc<RefCell<Option<String>>>,
    fail_writes: Rc<Cell<bool>>,
}

impl MemorySnapshot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent `save` calls fail, for exercising the persistence
    /// error path.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    /// The raw serialized snapshot, if any.
    #[must_use]
    pub fn raw(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

impl SnapshotStore for MemorySnapshot {
    fn load(&self) -> Option<Identity> {
        self.slot
            .borrow()
            .as_deref()
            .and_then(|raw| serde_json::from_str(raw).ok())
    }

    fn save(&self, identity: &Identity) -> Result<(), SnapshotError> {
        if self.fail_writes.get() {
            return Err(SnapshotError::Write("simulated write failure".to_owned()));
        }
        let raw = serde_json::to_string(identity).map_err(|e| SnapshotError::Write(e.to_string()))?;
        *self.slot.borrow_mut() = Some(raw);
        Ok(())
    }

    fn clear(&self) {
        *self.slot.borrow_mut() = None;
    }
}
