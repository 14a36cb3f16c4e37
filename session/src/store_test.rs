use futures::executor::block_on;

use super::*;
use crate::guard::{self, GuardDecision, RouteRequirements};
use crate::snapshot::MemorySnapshot;

fn test_store() -> SessionStore<MemorySnapshot, NoDelay> {
    SessionStore::new(MemorySnapshot::new(), NoDelay, LatencyProfile::none())
}

fn patient_signup() -> SignupProfile {
    SignupProfile {
        email: "asha@example.com".to_owned(),
        display_name: "Asha Verma".to_owned(),
        phone: Some("9876543210".to_owned()),
        details: SignupDetails::Patient,
    }
}

#[test]
fn login_populates_exactly_the_role_specific_field() {
    let store = test_store();
    for role in Role::ALL {
        let identity = block_on(store.login("user@example.com", "whatever", role)).expect("login");
        assert_eq!(identity.role(), role);
        assert!(identity.verified);
        assert!(identity.profile_complete);
        match (role, &identity.profile) {
            (Role::Patient, RoleProfile::Patient { health_id }) => assert_eq!(health_id, "UHID123456789"),
            (Role::Doctor, RoleProfile::Doctor { license_number }) => assert_eq!(license_number, "MED12345"),
            (Role::Hospital, RoleProfile::Hospital { facility_id }) => assert_eq!(facility_id, "HOSP001"),
            (Role::Insurance, RoleProfile::Insurance { insurer_name }) => {
                assert_eq!(insurer_name, "Star Health Insurance");
            }
            (role, profile) => panic!("role {role} got mismatched profile {profile:?}"),
        }
    }
}

#[test]
fn login_ids_are_unique_per_session_creation() {
    let store = test_store();
    let first = block_on(store.login("a@example.com", "x", Role::Patient)).expect("login");
    let second = block_on(store.login("a@example.com", "x", Role::Patient)).expect("login");
    assert_ne!(first.id, second.id);
}

#[test]
fn login_persists_and_clears_busy() {
    let store = test_store();
    let identity = block_on(store.login("a@example.com", "x", Role::Doctor)).expect("login");
    let state = store.state();
    assert!(!state.busy);
    assert!(state.last_error.is_none());
    assert_eq!(state.current, Some(identity));
}

#[test]
fn snapshot_round_trip_restores_identity_on_reload() {
    let snapshot = MemorySnapshot::new();
    let store = SessionStore::new(snapshot.clone(), NoDelay, LatencyProfile::none());
    let identity = block_on(store.login("a@example.com", "x", Role::Insurance)).expect("login");

    let reloaded = SessionStore::new(snapshot, NoDelay, LatencyProfile::none());
    assert_eq!(reloaded.current(), Some(identity));
}

#[test]
fn logout_clears_identity_and_snapshot() {
    let snapshot = MemorySnapshot::new();
    let store = SessionStore::new(snapshot.clone(), NoDelay, LatencyProfile::none());
    block_on(store.login("a@example.com", "x", Role::Patient)).expect("login");

    store.logout();
    assert!(store.current().is_none());
    assert!(snapshot.raw().is_none());
}

#[test]
fn logout_twice_is_idempotent() {
    let store = test_store();
    block_on(store.login("a@example.com", "x", Role::Patient)).expect("login");
    store.logout();
    store.logout();
    let state = store.state();
    assert!(state.current.is_none());
    assert!(!state.busy);
    assert!(state.last_error.is_none());
}

#[test]
fn signup_creates_unverified_incomplete_identity() {
    let store = test_store();
    let identity = block_on(store.signup(patient_signup())).expect("signup");
    assert!(!identity.verified);
    assert!(!identity.profile_complete);
    assert_eq!(identity.email, "asha@example.com");
    assert_eq!(identity.phone.as_deref(), Some("9876543210"));
    assert!(matches!(&identity.profile, RoleProfile::Patient { health_id } if health_id.starts_with("UHID")));
}

#[test]
fn signup_passes_through_doctor_license() {
    let store = test_store();
    let profile = SignupProfile {
        email: "doc@example.com".to_owned(),
        display_name: "Dr. Mehta".to_owned(),
        phone: None,
        details: SignupDetails::Doctor {
            license_number: "MED99001".to_owned(),
        },
    };
    let identity = block_on(store.signup(profile)).expect("signup");
    assert!(matches!(&identity.profile, RoleProfile::Doctor { license_number } if license_number == "MED99001"));
}

#[test]
fn signup_fabricates_hospital_facility_id() {
    let store = test_store();
    let profile = SignupProfile {
        email: "admin@cityhospital.example".to_owned(),
        display_name: "City Hospital".to_owned(),
        phone: None,
        details: SignupDetails::Hospital {
            facility_name: "City Hospital".to_owned(),
        },
    };
    let identity = block_on(store.signup(profile)).expect("signup");
    assert!(matches!(&identity.profile, RoleProfile::Hospital { facility_id } if facility_id.starts_with("HOSP")));
}

#[test]
fn confirm_verification_code_flips_verified_and_persists() {
    let snapshot = MemorySnapshot::new();
    let store = SessionStore::new(snapshot.clone(), NoDelay, LatencyProfile::none());
    block_on(store.signup(patient_signup())).expect("signup");

    let identity = block_on(store.confirm_verification_code("asha@example.com", "000000")).expect("confirm");
    assert!(identity.verified);
    assert_eq!(snapshot.load().map(|i| i.verified), Some(true));
}

#[test]
fn confirm_verification_code_without_session_errors() {
    let store = test_store();
    let err = block_on(store.confirm_verification_code("a@example.com", "000000")).expect_err("no session");
    assert!(matches!(err, SessionError::NoSession));
    let state = store.state();
    assert!(!state.busy);
    assert_eq!(state.last_error.as_deref(), Some("No active session. Please sign in again."));
}

#[test]
fn request_verification_code_only_toggles_busy() {
    let store = test_store();
    block_on(store.request_verification_code("a@example.com"));
    let state = store.state();
    assert!(!state.busy);
    assert!(state.last_error.is_none());
    assert!(state.current.is_none());
}

#[test]
fn second_factor_enrollment_returns_placeholder_image() {
    let store = test_store();
    let image = block_on(store.begin_second_factor_enrollment());
    assert!(image.starts_with("data:image/png;base64,"));
}

#[test]
fn second_factor_token_is_valid_iff_six_characters() {
    let store = test_store();
    assert!(block_on(store.confirm_second_factor("123456")));
    assert!(block_on(store.confirm_second_factor("abcdef")));
    assert!(!block_on(store.confirm_second_factor("12345")));
    assert!(!block_on(store.confirm_second_factor("1234567")));
    assert!(!block_on(store.confirm_second_factor("")));
}

#[test]
fn snapshot_write_failure_surfaces_generic_message() {
    let snapshot = MemorySnapshot::new();
    let store = SessionStore::new(snapshot.clone(), NoDelay, LatencyProfile::none());
    snapshot.set_fail_writes(true);

    let err = block_on(store.login("a@example.com", "x", Role::Patient)).expect_err("write should fail");
    assert!(matches!(err, SessionError::SnapshotWrite(_)));
    let state = store.state();
    assert!(!state.busy);
    assert_eq!(state.last_error.as_deref(), Some("Login failed. Please try again."));
    // No partial identity is ever exposed.
    assert!(state.current.is_none());
}

#[test]
fn new_operation_clears_previous_error() {
    let snapshot = MemorySnapshot::new();
    let store = SessionStore::new(snapshot.clone(), NoDelay, LatencyProfile::none());
    snapshot.set_fail_writes(true);
    let _ = block_on(store.login("a@example.com", "x", Role::Patient));
    assert!(store.state().last_error.is_some());

    snapshot.set_fail_writes(false);
    block_on(store.login("a@example.com", "x", Role::Patient)).expect("login");
    assert!(store.state().last_error.is_none());
}

#[test]
fn signup_then_guard_denies_until_code_confirmed() {
    let store = test_store();
    block_on(store.signup(patient_signup())).expect("signup");

    let requirements = RouteRequirements::signed_in().require_verified();
    let denied = guard::evaluate(store.current().as_ref(), &requirements);
    assert_eq!(denied, GuardDecision::Unverified);

    block_on(store.confirm_verification_code("asha@example.com", "000000")).expect("confirm");
    let granted = guard::evaluate(store.current().as_ref(), &requirements);
    assert_eq!(granted, GuardDecision::Granted);
}
