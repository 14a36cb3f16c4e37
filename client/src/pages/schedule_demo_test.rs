use super::*;

fn request() -> DemoRequest {
    DemoRequest {
        name: "Asha Verma".to_owned(),
        email: "asha@example.com".to_owned(),
        phone: "9876543210".to_owned(),
        organization: "City Hospital".to_owned(),
        role: "CTO".to_owned(),
        preferred_date: "2025-02-10".to_owned(),
        preferred_time: "10:00 AM".to_owned(),
        demo_type: "Platform Overview".to_owned(),
    }
}

#[test]
fn complete_request_passes() {
    assert!(validate_request(&request()).is_ok());
}

#[test]
fn scheduling_fields_are_required() {
    let mut form = request();
    form.preferred_date = String::new();
    assert_eq!(validate_request(&form), Err("Pick a preferred date."));

    let mut form = request();
    form.demo_type = "  ".to_owned();
    assert_eq!(validate_request(&form), Err("Select a demo type."));
}

#[test]
fn contact_details_are_checked() {
    let mut form = request();
    form.phone = "5876543210".to_owned();
    assert!(validate_request(&form).is_err());
}
