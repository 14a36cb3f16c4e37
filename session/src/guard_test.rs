use super::*;
use crate::identity::RoleProfile;

fn identity(role: Role, verified: bool) -> Identity {
    let profile = match role {
        Role::Patient => RoleProfile::Patient {
            health_id: "UHID123456789".to_owned(),
        },
        Role::Doctor => RoleProfile::Doctor {
            license_number: "MED12345".to_owned(),
        },
        Role::Hospital => RoleProfile::Hospital {
            facility_id: "HOSP001".to_owned(),
        },
        Role::Insurance => RoleProfile::Insurance {
            insurer_name: "Star Health Insurance".to_owned(),
        },
    };
    Identity {
        id: format!("{role}-1"),
        email: "user@example.com".to_owned(),
        display_name: "User".to_owned(),
        phone: None,
        verified,
        profile_complete: true,
        profile,
    }
}

#[test]
fn no_session_redirects_to_login_regardless_of_other_requirements() {
    let strict = RouteRequirements::for_roles(&[Role::Doctor]).require_verified();
    let decision = evaluate(None, &strict);
    assert_eq!(decision, GuardDecision::MissingSession);
    assert_eq!(decision.redirect_path(), Some("/login"));
}

#[test]
fn signed_in_with_no_requirements_is_granted() {
    let decision = evaluate(Some(&identity(Role::Patient, true)), &RouteRequirements::signed_in());
    assert!(decision.is_granted());
    assert_eq!(decision.redirect_path(), None);
}

#[test]
fn wrong_role_redirects_to_unauthorized() {
    let requirements = RouteRequirements::for_roles(&[Role::Patient]);
    let decision = evaluate(Some(&identity(Role::Doctor, true)), &requirements);
    assert_eq!(decision, GuardDecision::RoleNotAllowed);
    assert_eq!(decision.redirect_path(), Some("/unauthorized"));
}

#[test]
fn allowed_role_in_multi_role_list_is_granted() {
    let requirements = RouteRequirements::for_roles(&[Role::Hospital, Role::Insurance]);
    assert!(evaluate(Some(&identity(Role::Insurance, true)), &requirements).is_granted());
}

#[test]
fn unverified_identity_redirects_to_verify_account() {
    let requirements = RouteRequirements::signed_in().require_verified();
    let decision = evaluate(Some(&identity(Role::Patient, false)), &requirements);
    assert_eq!(decision, GuardDecision::Unverified);
    assert_eq!(decision.redirect_path(), Some("/verify-account"));
}

#[test]
fn role_check_runs_before_verification_check() {
    let requirements = RouteRequirements::for_roles(&[Role::Patient]).require_verified();
    let decision = evaluate(Some(&identity(Role::Doctor, false)), &requirements);
    assert_eq!(decision, GuardDecision::RoleNotAllowed);
}

#[test]
fn verified_identity_passes_verification_requirement() {
    let requirements = RouteRequirements::signed_in().require_verified();
    assert!(evaluate(Some(&identity(Role::Patient, true)), &requirements).is_granted());
}
