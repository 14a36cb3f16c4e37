//! The Session Store: single source of truth for "who is signed in".
//!
//! ARCHITECTURE
//! ============
//! Every operation models a network round-trip without a network: an
//! injected sleeper suspends for a configured duration, then the store
//! fabricates or mutates the Identity and persists it through the snapshot
//! slot. The store is single-threaded and cooperative; interior state is
//! a `RefCell` that is never held across an await point. Callers are
//! expected to serialize operations by disabling submit controls while
//! `busy` is set; the store itself does not enforce mutual exclusion.
//!
//! The only reachable failures are snapshot-write errors and confirming a
//! verification code with no current session. There is no invalid-credential,
//! lockout, rate-limit, or timeout path: any email/secret pair succeeds.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::cell::RefCell;
use std::time::Duration;

use uuid::Uuid;

use crate::identity::{Identity, Role, RoleProfile, SignupDetails, SignupProfile};
use crate::snapshot::{SnapshotError, SnapshotStore};

/// Placeholder 1x1 PNG standing in for a provisioning QR code.
const PLACEHOLDER_QR: &str = "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNkYPhfDwAChwGA60e6kgAAAABJRU5ErkJggg==";

const LOGIN_FAILED: &str = "Login failed. Please try again.";
const SIGNUP_FAILED: &str = "Signup failed. Please try again.";
const VERIFY_FAILED: &str = "Verification failed. Please try again.";
const NO_SESSION: &str = "No active session. Please sign in again.";

/// Error returned by Session Store operations.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The persisted snapshot could not be written.
    #[error(transparent)]
    SnapshotWrite(#[from] SnapshotError),
    /// A verification operation ran with no current Identity.
    #[error("no active session")]
    NoSession,
}

/// Injected artificial-latency seam. Browser code sleeps on real timers;
/// tests use [`NoDelay`] to resolve immediately.
pub trait Sleeper {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()>;
}

/// Sleeper that resolves immediately, for synchronous tests.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoDelay;

impl Sleeper for NoDelay {
    fn sleep(&self, _duration: Duration) -> impl Future<Output = ()> {
        std::future::ready(())
    }
}

/// Per-operation simulated latency.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LatencyProfile {
    pub login: Duration,
    pub signup: Duration,
    pub request_code: Duration,
    pub confirm_code: Duration,
    pub enroll_second_factor: Duration,
    pub confirm_second_factor: Duration,
}

impl LatencyProfile {
    /// The original mock's fixed timers: 1.5s signup, 1s everything else.
    #[must_use]
    pub const fn simulated() -> Self {
        Self {
            login: Duration::from_millis(1000),
            signup: Duration::from_millis(1500),
            request_code: Duration::from_millis(1000),
            confirm_code: Duration::from_millis(1000),
            enroll_second_factor: Duration::from_millis(1000),
            confirm_second_factor: Duration::from_millis(1000),
        }
    }

    /// No artificial delay anywhere.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            login: Duration::ZERO,
            signup: Duration::ZERO,
            request_code: Duration::ZERO,
            confirm_code: Duration::ZERO,
            enroll_second_factor: Duration::ZERO,
            confirm_second_factor: Duration::ZERO,
        }
    }
}

impl Default for LatencyProfile {
    fn default() -> Self {
        Self::simulated()
    }
}

/// Observable store state, mirrored into UI signals by the client.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    /// The current Identity; `None` means logged out.
    pub current: Option<Identity>,
    /// True while an operation's suspension is pending.
    pub busy: bool,
    /// User-facing message from the last failed operation; cleared at the
    /// start of each new operation.
    pub last_error: Option<String>,
}

/// Owns the current Identity's lifecycle. Construction restores any
/// previously persisted Identity from the snapshot slot.
pub struct SessionStore<P, S> {
    snapshot: P,
    sleeper: S,
    latency: LatencyProfile,
    state: RefCell<SessionState>,
}

impl<P: SnapshotStore, S: Sleeper> SessionStore<P, S> {
    #[must_use]
    pub fn new(snapshot: P, sleeper: S, latency: LatencyProfile) -> Self {
        let current = snapshot.load();
        Self {
            snapshot,
            sleeper,
            latency,
            state: RefCell::new(SessionState {
                current,
                busy: false,
                last_error: None,
            }),
        }
    }

    /// A clone of the observable state.
    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state.borrow().clone()
    }

    /// The current Identity, if signed in.
    #[must_use]
    pub fn current(&self) -> Option<Identity> {
        self.state.borrow().current.clone()
    }

    /// Establish a session for `role`. The secret is never checked against
    /// anything; the Identity is fabricated from the role alone, already
    /// verified, and persisted before being returned.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::SnapshotWrite`] when persisting fails; the
    /// generic retry message is left in `last_error`.
    pub async fn login(&self, email: &str, _secret: &str, role: Role) -> Result<Identity, SessionError> {
        self.begin();
        self.sleeper.sleep(self.latency.login).await;
        self.install(fabricate_login_identity(email, role), LOGIN_FAILED)
    }

    /// Create a new, unverified session from signup input.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::SnapshotWrite`] when persisting fails.
    pub async fn signup(&self, profile: SignupProfile) -> Result<Identity, SessionError> {
        self.begin();
        self.sleeper.sleep(self.latency.signup).await;
        self.install(fabricate_signup_identity(profile), SIGNUP_FAILED)
    }

    /// Clear the current Identity and erase the persisted snapshot.
    /// Immediate and idempotent.
    pub fn logout(&self) {
        self.snapshot.clear();
        let mut state = self.state.borrow_mut();
        state.current = None;
        state.busy = false;
        state.last_error = None;
    }

    /// Simulate dispatching a one-time code to `email`. No code is
    /// generated or stored; the later confirm step does not check one.
    pub async fn request_verification_code(&self, _email: &str) {
        self.begin();
        self.sleeper.sleep(self.latency.request_code).await;
        self.finish();
    }

    /// Mark the current Identity verified and persist it. The code itself
    /// is not validated.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NoSession`] when nobody is signed in, or
    /// [`SessionError::SnapshotWrite`] when persisting fails.
    pub async fn confirm_verification_code(&self, _email: &str, _code: &str) -> Result<Identity, SessionError> {
        self.begin();
        self.sleeper.sleep(self.latency.confirm_code).await;
        let Some(mut identity) = self.current() else {
            self.fail(NO_SESSION);
            return Err(SessionError::NoSession);
        };
        identity.verified = true;
        self.install(identity, VERIFY_FAILED)
    }

    /// Return a placeholder provisioning image for authenticator setup.
    /// No secret is generated.
    pub async fn begin_second_factor_enrollment(&self) -> String {
        self.begin();
        self.sleeper.sleep(self.latency.enroll_second_factor).await;
        self.finish();
        PLACEHOLDER_QR.to_owned()
    }

    /// "Valid" iff the token is exactly six characters. No cryptographic
    /// check exists.
    pub async fn confirm_second_factor(&self, token: &str) -> bool {
        self.begin();
        self.sleeper.sleep(self.latency.confirm_second_factor).await;
        self.finish();
        token.chars().count() == 6
    }

    fn begin(&self) {
        let mut state = self.state.borrow_mut();
        state.busy = true;
        state.last_error = None;
    }

    fn finish(&self) {
        self.state.borrow_mut().busy = false;
    }

    fn fail(&self, message: &str) {
        let mut state = self.state.borrow_mut();
        state.busy = false;
        state.last_error = Some(message.to_owned());
    }

    /// Persist `identity` and make it current. On write failure the store
    /// keeps its previous Identity: either fully resolved or absent, never
    /// partial.
    fn install(&self, identity: Identity, failure_message: &str) -> Result<Identity, SessionError> {
        match self.snapshot.save(&identity) {
            Ok(()) => {
                let mut state = self.state.borrow_mut();
                state.current = Some(identity.clone());
                state.busy = false;
                Ok(identity)
            }
            Err(e) => {
                self.fail(failure_message);
                Err(SessionError::SnapshotWrite(e))
            }
        }
    }
}

fn new_id(role: Role) -> String {
    format!("{role}-{}", Uuid::new_v4())
}

fn new_health_id() -> String {
    let digits = Uuid::new_v4().as_u128() % 1_000_000_000;
    format!("UHID{digits:09}")
}

fn new_facility_id() -> String {
    let digits = Uuid::new_v4().as_u128() % 1_000;
    format!("HOSP{digits:03}")
}

/// Sample per-role identity returned by login, matching the original mock.
fn fabricate_login_identity(email: &str, role: Role) -> Identity {
    let (display_name, profile) = match role {
        Role::Patient => (
            "John Doe",
            RoleProfile::Patient {
                health_id: "UHID123456789".to_owned(),
            },
        ),
        Role::Doctor => (
            "Dr. Sarah Smith",
            RoleProfile::Doctor {
                license_number: "MED12345".to_owned(),
            },
        ),
        Role::Hospital => (
            "Hospital Admin",
            RoleProfile::Hospital {
                facility_id: "HOSP001".to_owned(),
            },
        ),
        Role::Insurance => (
            "Insurance Manager",
            RoleProfile::Insurance {
                insurer_name: "Star Health Insurance".to_owned(),
            },
        ),
    };
    Identity {
        id: new_id(role),
        email: email.to_owned(),
        display_name: display_name.to_owned(),
        phone: None,
        verified: true,
        profile_complete: true,
        profile,
    }
}

fn fabricate_signup_identity(profile: SignupProfile) -> Identity {
    let role = profile.details.role();
    let role_profile = match profile.details {
        SignupDetails::Patient => RoleProfile::Patient {
            health_id: new_health_id(),
        },
        SignupDetails::Doctor { license_number } => RoleProfile::Doctor { license_number },
        SignupDetails::Hospital { .. } => RoleProfile::Hospital {
            facility_id: new_facility_id(),
        },
        SignupDetails::Insurance { insurer_name } => RoleProfile::Insurance { insurer_name },
    };
    Identity {
        id: new_id(role),
        email: profile.email,
        display_name: profile.display_name,
        phone: profile.phone,
        verified: false,
        profile_complete: false,
        profile: role_profile,
    }
}
