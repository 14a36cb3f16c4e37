//! Browser localStorage binding for the session snapshot slot.
//!
//! SYSTEM CONTEXT
//! ==============
//! The `session` crate defines the snapshot seam; this is the hydrate-only
//! implementation over `web_sys`. During SSR every read yields `None` and
//! writes are dropped, so server-rendered HTML always starts logged out
//! and hydration restores the real session from the browser.

use session::{Identity, SNAPSHOT_KEY, SnapshotError, SnapshotStore};

/// Snapshot slot backed by `localStorage` under [`SNAPSHOT_KEY`].
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSnapshot;

#[cfg(feature = "hydrate")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl SnapshotStore for BrowserSnapshot {
    fn load(&self) -> Option<Identity> {
        #[cfg(feature = "hydrate")]
        {
            let raw = storage()?.get_item(SNAPSHOT_KEY).ok().flatten()?;
            serde_json::from_str(&raw).ok()
        }
        #[cfg(not(feature = "hydrate"))]
        None
    }

    fn save(&self, identity: &Identity) -> Result<(), SnapshotError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = storage().ok_or_else(|| SnapshotError::Write("localStorage unavailable".to_owned()))?;
            let raw = serde_json::to_string(identity).map_err(|e| SnapshotError::Write(e.to_string()))?;
            storage
                .set_item(SNAPSHOT_KEY, &raw)
                .map_err(|_| SnapshotError::Write("localStorage rejected the write".to_owned()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = identity;
            Ok(())
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = storage() {
                let _ = storage.remove_item(SNAPSHOT_KEY);
            }
        }
    }
}
