use super::*;

#[test]
fn form_requires_all_three_fields() {
    assert!(login_form_valid("a@example.com", "secret", Some(Role::Patient)));
    assert!(!login_form_valid("", "secret", Some(Role::Patient)));
    assert!(!login_form_valid("a@example.com", "", Some(Role::Patient)));
    assert!(!login_form_valid("a@example.com", "secret", None));
}

#[test]
fn form_rejects_malformed_email() {
    assert!(!login_form_valid("not-an-email", "secret", Some(Role::Doctor)));
}

#[test]
fn otp_requires_exactly_six_digits() {
    assert!(otp_ready("123456"));
    assert!(!otp_ready("12345"));
    assert!(!otp_ready("1234567"));
    assert!(!otp_ready("12345a"));
    assert!(!otp_ready(""));
}
