//! Route Guard: the access decision gating protected views.
//!
//! SYSTEM CONTEXT
//! ==============
//! A pure, synchronous decision over the Session Store's current snapshot.
//! The `client` crate re-evaluates it on every render and identity change
//! and turns denials into router redirects.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::identity::{Identity, Role};

/// Access criteria for one protected view.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RouteRequirements {
    /// When set, the identity's role must be in this list.
    pub allowed_roles: Option<Vec<Role>>,
    /// When set, the identity must have completed verification.
    pub require_verification: bool,
}

impl RouteRequirements {
    /// Any signed-in identity is acceptable.
    #[must_use]
    pub fn signed_in() -> Self {
        Self::default()
    }

    /// Only the given roles are acceptable.
    #[must_use]
    pub fn for_roles(roles: &[Role]) -> Self {
        Self {
            allowed_roles: Some(roles.to_vec()),
            require_verification: false,
        }
    }

    /// Additionally require a verified identity.
    #[must_use]
    pub fn require_verified(mut self) -> Self {
        self.require_verification = true;
        self
    }
}

/// Outcome of a guard evaluation for one render pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Render the protected view unchanged.
    Granted,
    /// Nobody is signed in.
    MissingSession,
    /// Signed in, but the role is not in the view's allow-list.
    RoleNotAllowed,
    /// Signed in, but verification is required and incomplete.
    Unverified,
}

impl GuardDecision {
    #[must_use]
    pub fn is_granted(self) -> bool {
        matches!(self, Self::Granted)
    }

    /// The fallback view for a denial, or `None` when granted.
    #[must_use]
    pub fn redirect_path(self) -> Option<&'static str> {
        match self {
            Self::Granted => None,
            Self::MissingSession => Some("/login"),
            Self::RoleNotAllowed => Some("/unauthorized"),
            Self::Unverified => Some("/verify-account"),
        }
    }
}

/// Evaluate the three access checks in order: session presence first
/// (short-circuits the rest), then role allow-list, then verification.
#[must_use]
pub fn evaluate(identity: Option<&Identity>, requirements: &RouteRequirements) -> GuardDecision {
    let Some(identity) = identity else {
        return GuardDecision::MissingSession;
    };
    if let Some(roles) = &requirements.allowed_roles {
        if !roles.contains(&identity.role()) {
            return GuardDecision::RoleNotAllowed;
        }
    }
    if requirements.require_verification && !identity.verified {
        return GuardDecision::Unverified;
    }
    GuardDecision::Granted
}
