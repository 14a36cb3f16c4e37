//! Client-side session simulation and route-guard decisions for AyuSmat.
//!
//! This crate owns the identity model shared by the `client` UI and the
//! guard logic that gates protected views. There is no backend: the session
//! store fabricates identities after an injected artificial delay and
//! persists them through a single key-value snapshot slot.
//!
//! ARCHITECTURE
//! ============
//! `SessionStore` is an explicitly owned, injectable service. Both of its
//! environment seams are traits so the browser supplies localStorage and
//! real timers while native tests supply an in-memory slot and no delay.

pub mod guard;
pub mod identity;
pub mod snapshot;
pub mod store;

pub use guard::{GuardDecision, RouteRequirements, evaluate};
pub use identity::{Identity, Role, RoleProfile, SignupDetails, SignupProfile};
pub use snapshot::{MemorySnapshot, SNAPSHOT_KEY, SnapshotError, SnapshotStore};
pub use store::{LatencyProfile, NoDelay, SessionError, SessionState, SessionStore, Sleeper};
