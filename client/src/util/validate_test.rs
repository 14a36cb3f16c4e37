use super::*;

#[test]
fn required_rejects_empty_and_whitespace() {
    assert!(required("Asha"));
    assert!(!required(""));
    assert!(!required("   "));
}

#[test]
fn email_accepts_plain_addresses() {
    assert!(is_valid_email("asha@example.com"));
    assert!(is_valid_email("  asha@example.co.in  "));
}

#[test]
fn email_rejects_malformed_addresses() {
    assert!(!is_valid_email(""));
    assert!(!is_valid_email("asha"));
    assert!(!is_valid_email("asha@"));
    assert!(!is_valid_email("@example.com"));
    assert!(!is_valid_email("asha@example"));
    assert!(!is_valid_email("asha@.com"));
    assert!(!is_valid_email("asha@example.com."));
    assert!(!is_valid_email("asha@ex@ample.com"));
}

#[test]
fn mobile_requires_ten_digits_starting_six_through_nine() {
    assert!(is_valid_mobile("9876543210"));
    assert!(is_valid_mobile("6000000000"));
    assert!(!is_valid_mobile("5876543210"));
    assert!(!is_valid_mobile("987654321"));
    assert!(!is_valid_mobile("98765432100"));
    assert!(!is_valid_mobile("98765a3210"));
    assert!(!is_valid_mobile(""));
}

#[test]
fn pincode_requires_exactly_six_digits() {
    assert!(is_valid_pincode("110011"));
    assert!(is_valid_pincode(" 560001 "));
    assert!(!is_valid_pincode("11001"));
    assert!(!is_valid_pincode("1100111"));
    assert!(!is_valid_pincode("11OO11"));
}
