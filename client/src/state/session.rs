//! Reactive bridge between the session store and the component tree.
//!
//! ARCHITECTURE
//! ============
//! The durable session lives in localStorage, so the store itself is cheap
//! to construct: each operation builds one over the browser snapshot and
//! sleeper, runs to completion, then mirrors the resulting state into the
//! `RwSignal` that components render from. Operations are ignored while a
//! previous one is still pending; submit controls disable on `busy` so
//! this is a backstop, not the primary guard.

use leptos::prelude::*;

use session::{LatencyProfile, Role, SessionState, SessionStore, SignupProfile};

use crate::util::persistence::BrowserSnapshot;
use crate::util::sleep::BrowserSleeper;

fn store() -> SessionStore<BrowserSnapshot, BrowserSleeper> {
    SessionStore::new(BrowserSnapshot, BrowserSleeper, LatencyProfile::default())
}

fn run<F>(fut: F)
where
    F: Future<Output = ()> + 'static,
{
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(fut);
    #[cfg(not(feature = "hydrate"))]
    drop(fut);
}

/// Session state provided via context at the application root.
#[derive(Clone, Copy)]
pub struct SessionContext {
    /// Mirror of the store state; the single reactive source for
    /// identity-dependent rendering.
    pub state: RwSignal<SessionState>,
}

impl SessionContext {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(store().state()),
        }
    }

    /// The context installed by the application root.
    #[must_use]
    pub fn use_context() -> Self {
        expect_context::<Self>()
    }

    fn begin(self) -> bool {
        if self.state.get_untracked().busy {
            return false;
        }
        self.state.update(|s| {
            s.busy = true;
            s.last_error = None;
        });
        true
    }

    /// Sign in as `role`. Any credentials succeed.
    pub fn login(self, email: String, secret: String, role: Role) {
        if !self.begin() {
            return;
        }
        let state = self.state;
        run(async move {
            let store = store();
            let _ = store.login(&email, &secret, role).await;
            state.set(store.state());
        });
    }

    /// Create a new unverified account and sign in as it.
    pub fn signup(self, profile: SignupProfile) {
        if !self.begin() {
            return;
        }
        let state = self.state;
        run(async move {
            let store = store();
            let _ = store.signup(profile).await;
            state.set(store.state());
        });
    }

    /// Sign out immediately and erase the persisted session.
    pub fn logout(self) {
        let store = store();
        store.logout();
        self.state.set(store.state());
    }

    /// Simulate sending a one-time code to `email`.
    pub fn request_verification_code(self, email: String) {
        if !self.begin() {
            return;
        }
        let state = self.state;
        run(async move {
            let store = store();
            store.request_verification_code(&email).await;
            state.set(store.state());
        });
    }

    /// Confirm the one-time code, marking the current identity verified.
    pub fn confirm_verification_code(self, email: String, code: String) {
        if !self.begin() {
            return;
        }
        let state = self.state;
        run(async move {
            let store = store();
            let _ = store.confirm_verification_code(&email, &code).await;
            state.set(store.state());
        });
    }

    /// Fetch the authenticator provisioning image into `image`.
    pub fn begin_second_factor_enrollment(self, image: RwSignal<Option<String>>) {
        if !self.begin() {
            return;
        }
        let state = self.state;
        run(async move {
            let store = store();
            let qr = store.begin_second_factor_enrollment().await;
            image.set(Some(qr));
            state.set(store.state());
        });
    }

    /// Check an authenticator token, writing the outcome into `outcome`.
    pub fn confirm_second_factor(self, token: String, outcome: RwSignal<Option<bool>>) {
        if !self.begin() {
            return;
        }
        let state = self.state;
        run(async move {
            let store = store();
            let accepted = store.confirm_second_factor(&token).await;
            outcome.set(Some(accepted));
            state.set(store.state());
        });
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}
