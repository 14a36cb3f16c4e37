use super::*;

fn inquiry() -> PartnerInquiry {
    PartnerInquiry {
        organization_type: "Hospital / Healthcare Provider".to_owned(),
        organization_name: "City Hospital".to_owned(),
        contact_person: "Asha Verma".to_owned(),
        email: "asha@cityhospital.example".to_owned(),
        phone: "9876543210".to_owned(),
        designation: "Medical Director".to_owned(),
        location: "Bengaluru".to_owned(),
    }
}

#[test]
fn complete_inquiry_passes() {
    assert!(validate_inquiry(&inquiry()).is_ok());
}

#[test]
fn organization_type_must_be_selected() {
    let mut form = inquiry();
    form.organization_type = String::new();
    assert_eq!(validate_inquiry(&form), Err("Select your organization type."));
}

#[test]
fn contact_details_are_checked() {
    let mut form = inquiry();
    form.email = "not-an-email".to_owned();
    assert!(validate_inquiry(&form).is_err());

    let mut form = inquiry();
    form.phone = "12345".to_owned();
    assert!(validate_inquiry(&form).is_err());
}
