//! Checks for the documented field constraints.
//!
//! None of these run at construction time. The request builder calls
//! [`crate::RequestParams::validate`] ahead of transport, which funnels the
//! variant's fields through the checks below.

#![deny(clippy::invalid_regex)]

use std::sync::LazyLock;

use error_stack::report;
use regex::Regex;
#[cfg(feature = "logs")]
use tracing::error;

use crate::{
    consts,
    errors::{CustomResult, ValidationError},
};

static TWO_LETTER_CODE_REGEX: LazyLock<Option<Regex>> =
    LazyLock::new(|| match Regex::new("^[A-Z]{2}$") {
        Ok(regex) => Some(regex),
        Err(_error) => {
            #[cfg(feature = "logs")]
            error!(?_error);
            None
        }
    });

static EMAIL_REGEX: LazyLock<Option<Regex>> = LazyLock::new(|| {
    match Regex::new(
        r"^(?i)[a-z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?(?:\.[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?)+$",
    ) {
        Ok(regex) => Some(regex),
        Err(_error) => {
            #[cfg(feature = "logs")]
            error!(?_error);
            None
        }
    }
});

const BIRTH_DATE_FORMAT: &[time::format_description::BorrowedFormatItem<'static>] =
    time::macros::format_description!("[year]-[month]-[day]");

fn compiled_regex(
    regex: &'static LazyLock<Option<Regex>>,
) -> CustomResult<&'static Regex, ValidationError> {
    regex.as_ref().ok_or_else(|| {
        report!(ValidationError::InvalidValue {
            message: "Invalid regex expression".into()
        })
    })
}

/// Rejects values longer than `max_length` characters.
pub fn validate_max_length(
    field_name: &'static str,
    value: &str,
    max_length: usize,
) -> CustomResult<(), ValidationError> {
    if value.chars().count() > max_length {
        return Err(report!(ValidationError::ExceedsMaxLength {
            field_name,
            max_length
        }));
    }

    Ok(())
}

/// Validates a country as a 2-letter code (ISO 3166-1 alpha-2).
pub fn validate_country_code(
    field_name: &'static str,
    value: &str,
) -> CustomResult<(), ValidationError> {
    match_two_letter_code(field_name, value)
}

/// Validates a state as a 2-letter code, [`consts::STATE_NOT_APPLICABLE`]
/// standing in for countries without state subdivisions.
pub fn validate_state(field_name: &'static str, value: &str) -> CustomResult<(), ValidationError> {
    match_two_letter_code(field_name, value)
}

fn match_two_letter_code(
    field_name: &'static str,
    value: &str,
) -> CustomResult<(), ValidationError> {
    let regex = compiled_regex(&TWO_LETTER_CODE_REGEX)?;

    if !regex.is_match(value) {
        return Err(report!(ValidationError::PatternMismatch { field_name }));
    }

    Ok(())
}

/// Performs a simple validation against a provided email address.
pub fn validate_email(field_name: &'static str, value: &str) -> CustomResult<(), ValidationError> {
    let regex = compiled_regex(&EMAIL_REGEX)?;

    if !regex.is_match(value) {
        return Err(report!(ValidationError::PatternMismatch { field_name }));
    }

    Ok(())
}

/// Validates a payer IP as a dotted-quad between [`consts::PAYER_IP_MIN`]
/// and [`consts::PAYER_IP_MAX`] inclusive.
pub fn validate_ip_address(
    field_name: &'static str,
    value: &str,
) -> CustomResult<(), ValidationError> {
    let octets = value
        .split('.')
        .map(|segment| segment.parse::<u8>())
        .collect::<Result<Vec<u8>, _>>()
        .map_err(|_| report!(ValidationError::PatternMismatch { field_name }))?;

    let [a, b, c, d] = octets[..] else {
        return Err(report!(ValidationError::PatternMismatch { field_name }));
    };

    let numeric = u32::from_be_bytes([a, b, c, d]);
    if !(consts::PAYER_IP_MIN..=consts::PAYER_IP_MAX).contains(&numeric) {
        return Err(report!(ValidationError::OutOfRange { field_name }));
    }

    Ok(())
}

/// Validates a birth date in `yyyy-MM-dd` form, e.g. `1970-02-17`.
pub fn validate_birth_date(
    field_name: &'static str,
    value: &str,
) -> CustomResult<(), ValidationError> {
    time::Date::parse(value, BIRTH_DATE_FORMAT)
        .map(|_| ())
        .map_err(|_| report!(ValidationError::PatternMismatch { field_name }))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use test_case::test_case;

    use super::*;

    #[test]
    fn test_validate_max_length() {
        assert!(validate_max_length("zip", "90001", 32).is_ok());
        assert!(validate_max_length("zip", &"9".repeat(32), 32).is_ok());

        let result = validate_max_length("zip", &"9".repeat(33), 32);
        assert!(matches!(
            result.unwrap_err().current_context(),
            ValidationError::ExceedsMaxLength {
                field_name: "zip",
                max_length: 32
            }
        ));
    }

    #[test_case("US")]
    #[test_case("GB")]
    #[test_case("UA")]
    fn test_valid_country_code(code: &str) {
        assert!(validate_country_code("country_code", code).is_ok());
    }

    #[test_case("usa" ; "three letters")]
    #[test_case("us" ; "lowercase")]
    #[test_case("U" ; "single letter")]
    #[test_case("U1" ; "digit")]
    #[test_case("" ; "empty")]
    fn test_invalid_country_code(code: &str) {
        let result = validate_country_code("country_code", code);
        assert!(matches!(
            result.unwrap_err().current_context(),
            ValidationError::PatternMismatch {
                field_name: "country_code"
            }
        ));
    }

    #[test_case("CA")]
    #[test_case("NA" ; "not applicable")]
    fn test_valid_state(state: &str) {
        assert!(validate_state("state", state).is_ok());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("email", "abc@example.com").is_ok());
        assert!(validate_email("email", "abc+123@example.com").is_ok());

        let result = validate_email("email", "");
        assert!(result.is_err());

        let result = validate_email("email", "example.user");
        assert!(matches!(
            result.unwrap_err().current_context(),
            ValidationError::PatternMismatch {
                field_name: "email"
            }
        ));
    }

    #[test_case("8.8.8.8")]
    #[test_case("1.0.0.0" ; "lower bound")]
    #[test_case("123.123.123.123" ; "upper bound")]
    fn test_valid_ip_address(ip: &str) {
        assert!(validate_ip_address("ip_address", ip).is_ok());
    }

    #[test_case("256.1.1.1" ; "octet overflow")]
    #[test_case("1.2.3" ; "three segments")]
    #[test_case("1.2.3.4.5" ; "five segments")]
    #[test_case("a.b.c.d" ; "letters")]
    #[test_case("1..2.3" ; "empty segment")]
    fn test_malformed_ip_address(ip: &str) {
        let result = validate_ip_address("ip_address", ip);
        assert!(matches!(
            result.unwrap_err().current_context(),
            ValidationError::PatternMismatch {
                field_name: "ip_address"
            }
        ));
    }

    #[test_case("0.255.255.255" ; "below minimum")]
    #[test_case("123.123.123.124" ; "above maximum")]
    #[test_case("200.1.1.1" ; "first octet too large")]
    fn test_out_of_range_ip_address(ip: &str) {
        let result = validate_ip_address("ip_address", ip);
        assert!(matches!(
            result.unwrap_err().current_context(),
            ValidationError::OutOfRange {
                field_name: "ip_address"
            }
        ));
    }

    #[test_case("1970-02-17")]
    #[test_case("2000-12-31")]
    fn test_valid_birth_date(date: &str) {
        assert!(validate_birth_date("birthday", date).is_ok());
    }

    #[test_case("1970-2-17" ; "unpadded month")]
    #[test_case("17-02-1970" ; "reversed order")]
    #[test_case("2001-02-31" ; "nonexistent day")]
    #[test_case("1970/02/17" ; "wrong separator")]
    #[test_case("" ; "empty")]
    fn test_invalid_birth_date(date: &str) {
        let result = validate_birth_date("birthday", date);
        assert!(matches!(
            result.unwrap_err().current_context(),
            ValidationError::PatternMismatch {
                field_name: "birthday"
            }
        ));
    }
}
