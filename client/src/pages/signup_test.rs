use super::*;

fn patient_form() -> SignupForm {
    SignupForm {
        full_name: "Asha Verma".to_owned(),
        email: "asha@example.com".to_owned(),
        phone: "9876543210".to_owned(),
        password: "s3cret-pass".to_owned(),
        confirm_password: "s3cret-pass".to_owned(),
        role: Some(Role::Patient),
        accepted_terms: true,
        ..SignupForm::default()
    }
}

#[test]
fn valid_patient_form_builds_profile() {
    let profile = validate_signup(&patient_form()).expect("valid form");
    assert_eq!(profile.display_name, "Asha Verma");
    assert_eq!(profile.phone.as_deref(), Some("9876543210"));
    assert!(matches!(profile.details, SignupDetails::Patient));
}

#[test]
fn rejects_short_password() {
    let mut form = patient_form();
    form.password = "short".to_owned();
    form.confirm_password = "short".to_owned();
    assert_eq!(validate_signup(&form), Err("Password must be at least 8 characters."));
}

#[test]
fn rejects_mismatched_passwords() {
    let mut form = patient_form();
    form.confirm_password = "different-pass".to_owned();
    assert_eq!(validate_signup(&form), Err("Passwords must match."));
}

#[test]
fn rejects_invalid_mobile() {
    let mut form = patient_form();
    form.phone = "1234567890".to_owned();
    assert!(validate_signup(&form).is_err());
}

#[test]
fn rejects_missing_role() {
    let mut form = patient_form();
    form.role = None;
    assert_eq!(validate_signup(&form), Err("Select your role."));
}

#[test]
fn doctor_requires_license_number() {
    let mut form = patient_form();
    form.role = Some(Role::Doctor);
    assert_eq!(validate_signup(&form), Err("Medical license number is required."));

    form.license_number = " MED99001 ".to_owned();
    let profile = validate_signup(&form).expect("valid doctor form");
    assert!(matches!(
        profile.details,
        SignupDetails::Doctor { ref license_number } if license_number == "MED99001"
    ));
}

#[test]
fn hospital_requires_facility_name() {
    let mut form = patient_form();
    form.role = Some(Role::Hospital);
    assert!(validate_signup(&form).is_err());

    form.facility_name = "City Hospital".to_owned();
    let profile = validate_signup(&form).expect("valid hospital form");
    assert!(matches!(
        profile.details,
        SignupDetails::Hospital { ref facility_name } if facility_name == "City Hospital"
    ));
}

#[test]
fn insurance_requires_company_name() {
    let mut form = patient_form();
    form.role = Some(Role::Insurance);
    assert!(validate_signup(&form).is_err());

    form.insurer_name = "Star Health Insurance".to_owned();
    let profile = validate_signup(&form).expect("valid insurer form");
    assert!(matches!(
        profile.details,
        SignupDetails::Insurance { ref insurer_name } if insurer_name == "Star Health Insurance"
    ));
}

#[test]
fn terms_must_be_accepted() {
    let mut form = patient_form();
    form.accepted_terms = false;
    assert_eq!(validate_signup(&form), Err("You must accept the terms and conditions."));
}
