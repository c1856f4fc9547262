use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// 合法電話號碼的位數
pub const PHONE_NUMBER_LENGTH: usize = 10;

static NON_DIGIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^0-9]").expect("non-digit pattern is a valid regex"));

/// Strips every non-digit from `raw` and returns the digits when exactly
/// [`PHONE_NUMBER_LENGTH`] remain. Anything else is `None`.
pub fn validate_phone_number(raw: &str) -> Option<String> {
    let digits = NON_DIGIT.replace_all(raw, "");
    if digits.len() == PHONE_NUMBER_LENGTH {
        Some(digits.into_owned())
    } else {
        tracing::debug!(
            "Rejected phone number {:?}: {} digits after stripping",
            raw,
            digits.len()
        );
        None
    }
}

/// Result of checking one raw phone number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhoneNumber {
    raw: String,
    formatted: Option<String>,
}

impl PhoneNumber {
    pub fn parse(raw: &str) -> Self {
        Self {
            raw: raw.to_string(),
            formatted: validate_phone_number(raw),
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The 10-digit form, or `None` when the input was invalid.
    pub fn number(&self) -> Option<&str> {
        self.formatted.as_deref()
    }

    pub fn is_valid(&self) -> bool {
        self.formatted.is_some()
    }
}

/// Checks two numbers independently.
pub fn validate_phone_numbers(first: &str, second: &str) -> (PhoneNumber, PhoneNumber) {
    (PhoneNumber::parse(first), PhoneNumber::parse(second))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashed_number_is_valid() {
        assert_eq!(
            validate_phone_number("123-456-7890"),
            Some("1234567890".to_string())
        );
    }

    #[test]
    fn test_short_number_is_invalid() {
        assert_eq!(validate_phone_number("456-7890"), None);
    }

    #[test]
    fn test_punctuation_and_spaces_are_stripped() {
        assert_eq!(
            validate_phone_number("(555) 010-9999"),
            Some("5550109999".to_string())
        );
        assert_eq!(
            validate_phone_number("  5 5 5.0 1 0.9 9 9 9 "),
            Some("5550109999".to_string())
        );
    }

    #[test]
    fn test_digit_count_must_be_exactly_ten() {
        assert_eq!(validate_phone_number(""), None);
        assert_eq!(validate_phone_number("no digits here"), None);
        assert_eq!(validate_phone_number("123456789"), None);
        assert_eq!(validate_phone_number("+1 123-456-7890"), None);
        assert_eq!(validate_phone_number("12345678901"), None);
    }

    #[test]
    fn test_no_country_code_or_leading_zero_handling() {
        assert_eq!(
            validate_phone_number("000-000-0000"),
            Some("0000000000".to_string())
        );
    }

    #[test]
    fn test_non_ascii_digits_are_stripped() {
        // 全形數字不算 0-9
        assert_eq!(validate_phone_number("１２３456789"), None);
        assert_eq!(
            validate_phone_number("１1234567890"),
            Some("1234567890".to_string())
        );
    }

    #[test]
    fn test_phone_number_keeps_raw_input() {
        let (first, second) = validate_phone_numbers("123-456-7890", "456-7890");
        assert!(first.is_valid());
        assert_eq!(first.number(), Some("1234567890"));
        assert_eq!(first.raw(), "123-456-7890");
        assert!(!second.is_valid());
        assert_eq!(second.number(), None);
        assert_eq!(second.raw(), "456-7890");
    }
}
