//! Form field validation shared by the registration and inquiry pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Validation is purely structural and happens before any session
//! operation runs: a form with an invalid field never reaches the store.
//! Rules mirror the platform's Indian deployment (mobile numbers start
//! with 6-9, PIN codes are six digits).

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

/// A non-empty value after trimming.
#[must_use]
pub fn required(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Loose email shape check: one `@` with a dotted domain after it.
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    let value = value.trim();
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.starts_with('.') || domain.ends_with('.') {
        return false;
    }
    domain.contains('.') && !domain.contains('@')
}

/// Ten-digit Indian mobile number starting with 6-9.
#[must_use]
pub fn is_valid_mobile(value: &str) -> bool {
    let value = value.trim();
    value.len() == 10
        && value.starts_with(['6', '7', '8', '9'])
        && value.chars().all(|c| c.is_ascii_digit())
}

/// Six-digit postal PIN code.
#[must_use]
pub fn is_valid_pincode(value: &str) -> bool {
    let value = value.trim();
    value.len() == 6 && value.chars().all(|c| c.is_ascii_digit())
}
