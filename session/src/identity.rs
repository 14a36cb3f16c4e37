//! Identity model for the current signed-in actor.
//!
//! DESIGN
//! ======
//! Role-specific fields live in a tagged union (`RoleProfile`) rather than
//! a flat record of optionals, so exactly the field matching the role can
//! exist and nothing else.

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// The four actor roles; each selects a dashboard variant and a
/// role-specific identity field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Patient,
    Doctor,
    Hospital,
    Insurance,
}

impl Role {
    /// All roles, in dashboard display order.
    pub const ALL: [Self; 4] = [Self::Patient, Self::Doctor, Self::Hospital, Self::Insurance];

    /// Stable lowercase identifier used in serialized snapshots and ids.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Patient => "patient",
            Self::Doctor => "doctor",
            Self::Hospital => "hospital",
            Self::Insurance => "insurance",
        }
    }

    /// Human-readable label for role pickers.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Patient => "Patient",
            Self::Doctor => "Doctor",
            Self::Hospital => "Hospital Staff",
            Self::Insurance => "Insurance Provider",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Role-specific identity data. Exactly one variant is current, keyed by
/// the `role` tag in the serialized snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum RoleProfile {
    Patient { health_id: String },
    Doctor { license_number: String },
    Hospital { facility_id: String },
    Insurance { insurer_name: String },
}

impl RoleProfile {
    /// The role this profile belongs to.
    #[must_use]
    pub fn role(&self) -> Role {
        match self {
            Self::Patient { .. } => Role::Patient,
            Self::Doctor { .. } => Role::Doctor,
            Self::Hospital { .. } => Role::Hospital,
            Self::Insurance { .. } => Role::Insurance,
        }
    }
}

/// The current signed-in actor. At most one Identity exists at a time;
/// absence means logged out.
///
/// Serializes to a single flat JSON object (the persisted snapshot layout),
/// with the role profile flattened alongside the common fields.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Opaque id, unique per session-creation event.
    pub id: String,
    pub email: String,
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Whether email/OTP verification has completed.
    pub verified: bool,
    pub profile_complete: bool,
    #[serde(flatten)]
    pub profile: RoleProfile,
}

impl Identity {
    /// The identity's role, read from its profile variant.
    #[must_use]
    pub fn role(&self) -> Role {
        self.profile.role()
    }
}

/// Caller-supplied input to [`crate::SessionStore::signup`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignupProfile {
    pub email: String,
    pub display_name: String,
    pub phone: Option<String>,
    pub details: SignupDetails,
}

/// Role-specific signup input. Patients and hospitals have their ids
/// fabricated by the store; doctors and insurers supply theirs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SignupDetails {
    Patient,
    Doctor { license_number: String },
    Hospital { facility_name: String },
    Insurance { insurer_name: String },
}

impl SignupDetails {
    /// The role this signup input belongs to.
    #[must_use]
    pub fn role(&self) -> Role {
        match self {
            Self::Patient => Role::Patient,
            Self::Doctor { .. } => Role::Doctor,
            Self::Hospital { .. } => Role::Hospital,
            Self::Insurance { .. } => Role::Insurance,
        }
    }
}
