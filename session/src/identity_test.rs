use super::*;

fn doctor_identity() -> Identity {
    Identity {
        id: "doctor-1".to_owned(),
        email: "sarah@example.com".to_owned(),
        display_name: "Dr. Sarah Smith".to_owned(),
        phone: None,
        verified: true,
        profile_complete: true,
        profile: RoleProfile::Doctor {
            license_number: "MED12345".to_owned(),
        },
    }
}

#[test]
fn role_as_str_is_lowercase_tag() {
    assert_eq!(Role::Patient.as_str(), "patient");
    assert_eq!(Role::Doctor.as_str(), "doctor");
    assert_eq!(Role::Hospital.as_str(), "hospital");
    assert_eq!(Role::Insurance.as_str(), "insurance");
}

#[test]
fn role_all_covers_every_role_once() {
    assert_eq!(Role::ALL.len(), 4);
    for role in Role::ALL {
        assert_eq!(Role::ALL.iter().filter(|r| **r == role).count(), 1);
    }
}

#[test]
fn profile_role_matches_variant() {
    let profile = RoleProfile::Hospital {
        facility_id: "HOSP001".to_owned(),
    };
    assert_eq!(profile.role(), Role::Hospital);
}

#[test]
fn identity_serializes_to_flat_object_with_role_tag() {
    let value = serde_json::to_value(doctor_identity()).expect("serialize");
    assert_eq!(value["role"], "doctor");
    assert_eq!(value["license_number"], "MED12345");
    assert_eq!(value["email"], "sarah@example.com");
    // Only the doctor-specific field is present.
    assert!(value.get("health_id").is_none());
    assert!(value.get("facility_id").is_none());
    assert!(value.get("insurer_name").is_none());
}

#[test]
fn identity_round_trips_through_json() {
    let identity = doctor_identity();
    let raw = serde_json::to_string(&identity).expect("serialize");
    let back: Identity = serde_json::from_str(&raw).expect("deserialize");
    assert_eq!(back, identity);
}

#[test]
fn identity_without_phone_omits_the_key() {
    let value = serde_json::to_value(doctor_identity()).expect("serialize");
    assert!(value.get("phone").is_none());
}

#[test]
fn signup_details_role_matches_variant() {
    assert_eq!(SignupDetails::Patient.role(), Role::Patient);
    let details = SignupDetails::Insurance {
        insurer_name: "Star Health Insurance".to_owned(),
    };
    assert_eq!(details.role(), Role::Insurance);
}
