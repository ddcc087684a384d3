//! Pure field validation for the join form. No side effects, easy to test.

use crate::models::{FieldErrors, FormValues};

pub const MIN_PASSWORD_CHARS: usize = 6;
pub const MOBILE_DIGITS: usize = 10;

/// Run all three rules over the current values. The rules are independent;
/// one failing field never short-circuits the others.
pub fn validate(values: &FormValues) -> FieldErrors {
    let mut errors = FieldErrors::default();

    if values.name.trim().is_empty() {
        errors.name = Some("Name is required".to_string());
    }

    if values.mobile_number.trim().is_empty() {
        errors.mobile_number = Some("Mobile number is required".to_string());
    } else if !is_exactly_ten_digits(&values.mobile_number) {
        errors.mobile_number = Some("Mobile number must be 10 digits".to_string());
    }

    if values.password.trim().is_empty() {
        errors.password = Some("Password is required".to_string());
    } else if values.password.chars().count() < MIN_PASSWORD_CHARS {
        errors.password = Some("Password must be at least 6 characters".to_string());
    }

    errors
}

/// Exactly ten decimal digits, nothing before or after.
fn is_exactly_ten_digits(s: &str) -> bool {
    s.len() == MOBILE_DIGITS && s.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_values() -> FormValues {
        FormValues {
            name: "Meera".to_string(),
            mobile_number: "5551234567".to_string(),
            password: "secret1".to_string(),
        }
    }

    #[test]
    fn valid_values_produce_no_errors() {
        let errors = validate(&valid_values());
        assert!(errors.is_empty(), "expected no errors, got {:?}", errors);
    }

    #[test]
    fn whitespace_only_name_is_required() {
        let mut values = valid_values();
        values.name = "   ".to_string();
        let errors = validate(&values);
        assert_eq!(errors.name.as_deref(), Some("Name is required"));
        assert!(errors.mobile_number.is_none());
        assert!(errors.password.is_none());
    }

    #[test]
    fn short_mobile_number_fails_digit_count() {
        let mut values = valid_values();
        values.mobile_number = "123".to_string();
        let errors = validate(&values);
        assert_eq!(errors.mobile_number.as_deref(), Some("Mobile number must be 10 digits"));
    }

    #[test]
    fn mobile_number_with_letter_fails_digit_count() {
        let mut values = valid_values();
        values.mobile_number = "55512345a".to_string();
        let errors = validate(&values);
        assert_eq!(errors.mobile_number.as_deref(), Some("Mobile number must be 10 digits"));
    }

    #[test]
    fn mobile_number_with_surrounding_space_is_rejected() {
        let mut values = valid_values();
        values.mobile_number = " 5551234567".to_string();
        let errors = validate(&values);
        assert_eq!(errors.mobile_number.as_deref(), Some("Mobile number must be 10 digits"));
    }

    #[test]
    fn empty_mobile_number_is_required_not_digit_error() {
        let mut values = valid_values();
        values.mobile_number = String::new();
        let errors = validate(&values);
        assert_eq!(errors.mobile_number.as_deref(), Some("Mobile number is required"));
    }

    #[test]
    fn five_char_password_fails_minimum_length() {
        let mut values = valid_values();
        values.password = "12345".to_string();
        let errors = validate(&values);
        assert_eq!(errors.password.as_deref(), Some("Password must be at least 6 characters"));
    }

    #[test]
    fn six_char_password_passes() {
        let mut values = valid_values();
        values.password = "123456".to_string();
        let errors = validate(&values);
        assert!(errors.password.is_none());
    }

    #[test]
    fn all_empty_values_yield_exactly_three_required_errors() {
        let errors = validate(&FormValues::default());
        assert_eq!(errors.name.as_deref(), Some("Name is required"));
        assert_eq!(errors.mobile_number.as_deref(), Some("Mobile number is required"));
        assert_eq!(errors.password.as_deref(), Some("Password is required"));
    }
}
