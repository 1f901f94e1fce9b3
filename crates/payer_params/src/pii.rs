//! Masking strategies for payer contact details.

use std::fmt;

use masking::{Strategy, WithType};
#[cfg(feature = "logs")]
use tracing::error;

/// Strategy for masking an email address.
#[derive(Debug)]
pub enum EmailStrategy {}

impl<T> Strategy<T> for EmailStrategy
where
    T: AsRef<str>,
{
    fn fmt(val: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let val_str: &str = val.as_ref();
        match val_str.split_once('@') {
            Some((a, b)) => write!(f, "{}@{}", "*".repeat(a.len()), b),
            None => WithType::fmt(val, f),
        }
    }
}

/// Strategy for masking a phone number.
#[derive(Debug)]
pub enum PhoneNumberStrategy {}

impl<T> Strategy<T> for PhoneNumberStrategy
where
    T: AsRef<str>,
{
    fn fmt(val: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let val_str: &str = val.as_ref();

        // masks everything but the last 4 digits
        match val_str
            .len()
            .checked_sub(4)
            .and_then(|at| val_str.get(at..))
        {
            Some(last_four) => write!(f, "{}{}", "*".repeat(val_str.len() - 4), last_four),
            None => {
                #[cfg(feature = "logs")]
                error!("Invalid phone number: {val_str}");
                WithType::fmt(val, f)
            }
        }
    }
}

/// Strategy for masking an IP address.
#[derive(Debug)]
pub enum IpAddressStrategy {}

impl<T> Strategy<T> for IpAddressStrategy
where
    T: AsRef<str>,
{
    fn fmt(val: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let val_str: &str = val.as_ref();
        let segments: Vec<&str> = val_str.split('.').collect();

        if segments.len() != 4 {
            return WithType::fmt(val, f);
        }

        for seg in segments.iter() {
            if seg.is_empty() || seg.len() > 3 {
                return WithType::fmt(val, f);
            }
        }

        if let Some(first) = segments.first() {
            write!(f, "{first}.**.**.**")
        } else {
            #[cfg(feature = "logs")]
            error!("Invalid IP address: {val_str}");
            WithType::fmt(val, f)
        }
    }
}

#[cfg(test)]
mod tests {
    use masking::Secret;

    use super::*;

    #[test]
    fn test_valid_email_masking() {
        let secret: Secret<String, EmailStrategy> = Secret::new("example.user@test.com".to_string());
        assert_eq!("************@test.com", format!("{secret:?}"));
    }

    #[test]
    fn test_invalid_email_masking() {
        let secret: Secret<String, EmailStrategy> = Secret::new("example.user".to_string());
        assert_eq!("*** alloc::string::String ***", format!("{secret:?}"));
    }

    #[test]
    fn test_valid_phone_number_masking() {
        let secret: Secret<String, PhoneNumberStrategy> = Secret::new("5551234567".to_string());
        assert_eq!("******4567", format!("{secret:?}"));
    }

    #[test]
    fn test_short_phone_number_masking() {
        let secret: Secret<String, PhoneNumberStrategy> = Secret::new("555".to_string());
        assert_eq!("*** alloc::string::String ***", format!("{secret:?}"));
    }

    #[test]
    fn test_valid_ip_masking() {
        let secret: Secret<String, IpAddressStrategy> = Secret::new("123.23.1.78".to_string());
        assert_eq!("123.**.**.**", format!("{secret:?}"));
    }

    #[test]
    fn test_invalid_ip_masking() {
        let secret: Secret<String, IpAddressStrategy> = Secret::new("123.4.56".to_string());
        assert_eq!("*** alloc::string::String ***", format!("{secret:?}"));

        let secret: Secret<String, IpAddressStrategy> = Secret::new("123.4567.12.4".to_string());
        assert_eq!("*** alloc::string::String ***", format!("{secret:?}"));

        let secret: Secret<String, IpAddressStrategy> = Secret::new("123..4.56".to_string());
        assert_eq!("*** alloc::string::String ***", format!("{secret:?}"));
    }
}
