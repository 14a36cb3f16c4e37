use super::*;

fn personal() -> PersonalInfo {
    PersonalInfo {
        first_name: "Asha".to_owned(),
        last_name: "Verma".to_owned(),
        date_of_birth: "1990-04-12".to_owned(),
        gender: "female".to_owned(),
    }
}

fn contact() -> ContactInfo {
    ContactInfo {
        phone: "9876543210".to_owned(),
        email: "asha@example.com".to_owned(),
        address: "12 MG Road".to_owned(),
        pincode: "560001".to_owned(),
        state: "Karnataka".to_owned(),
        district: "Bengaluru Urban".to_owned(),
        emergency_contact: "9123456780".to_owned(),
    }
}

#[test]
fn complete_personal_info_passes() {
    assert!(validate_personal(&personal()).is_ok());
}

#[test]
fn personal_info_requires_each_field() {
    let mut info = personal();
    info.first_name = String::new();
    assert!(validate_personal(&info).is_err());

    let mut info = personal();
    info.gender = "  ".to_owned();
    assert!(validate_personal(&info).is_err());
}

#[test]
fn complete_contact_info_passes() {
    assert!(validate_contact(&contact()).is_ok());
}

#[test]
fn contact_info_checks_mobile_shape() {
    let mut info = contact();
    info.phone = "12345".to_owned();
    assert_eq!(validate_contact(&info), Err("Enter a valid 10-digit mobile number."));
}

#[test]
fn contact_info_checks_pincode_shape() {
    let mut info = contact();
    info.pincode = "5600".to_owned();
    assert_eq!(validate_contact(&info), Err("Enter a valid 6-digit pincode."));
}

#[test]
fn contact_info_checks_emergency_number() {
    let mut info = contact();
    info.emergency_contact = "0123456789".to_owned();
    assert!(validate_contact(&info).is_err());
}

#[test]
fn generated_uhid_has_expected_shape() {
    let uhid = generate_uhid();
    assert!(uhid.starts_with("UHID"));
    assert_eq!(uhid.len(), "UHID".len() + 13 + 4);
    let digits = &uhid[4..17];
    assert!(digits.chars().all(|c| c.is_ascii_digit()));
    let suffix = &uhid[17..];
    assert!(suffix.chars().all(|c| c.is_ascii_alphanumeric() && !c.is_ascii_lowercase()));
}

#[test]
fn generated_uhids_are_unique() {
    assert_ne!(generate_uhid(), generate_uhid());
}
