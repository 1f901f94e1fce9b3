//! Field limits and formats accepted by the payment backend.

/// Longest accepted payer name (first, last or middle).
pub const PAYER_NAME_MAX_LENGTH: usize = 32;

/// Longest accepted address line.
pub const PAYER_ADDRESS_MAX_LENGTH: usize = 255;

/// Longest accepted city name.
pub const PAYER_CITY_MAX_LENGTH: usize = 32;

/// Longest accepted ZIP code.
pub const PAYER_ZIP_MAX_LENGTH: usize = 32;

/// Longest accepted email address.
pub const PAYER_EMAIL_MAX_LENGTH: usize = 256;

/// Longest accepted phone number.
pub const PAYER_PHONE_MAX_LENGTH: usize = 32;

/// Lowest accepted payer IP address, `1.0.0.0` as a big-endian integer.
pub const PAYER_IP_MIN: u32 = u32::from_be_bytes([1, 0, 0, 0]);

/// Highest accepted payer IP address, `123.123.123.123` as a big-endian
/// integer.
pub const PAYER_IP_MAX: u32 = u32::from_be_bytes([123, 123, 123, 123]);

/// State code sent for countries without state subdivisions.
pub const STATE_NOT_APPLICABLE: &str = "NA";
