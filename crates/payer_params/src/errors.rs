//! Errors reported by the request parameter layer.

/// Result alias that wraps the error variant into an
/// [`error_stack::Report`], so callers can attach context while
/// propagating.
pub type CustomResult<T, E> = error_stack::Result<T, E>;

/// Violations surfaced by the pre-transport validation pass.
///
/// Constructing a request model never fails; the request builder invokes
/// [`crate::RequestParams::validate`] before serializing anything onto the
/// wire and maps each violation back to the offending field.
#[allow(missing_docs)] // Only to prevent warnings about struct fields not being documented
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    /// The field value is longer than the backend accepts.
    #[error("Value of field {field_name} exceeds the maximum length of {max_length}")]
    ExceedsMaxLength {
        field_name: &'static str,
        max_length: usize,
    },

    /// The field value does not match the documented format.
    #[error("Value of field {field_name} does not match the expected format")]
    PatternMismatch { field_name: &'static str },

    /// The field value lies outside the documented numeric range.
    #[error("Value of field {field_name} is outside the allowed range")]
    OutOfRange { field_name: &'static str },

    /// An invalid input was provided.
    #[error("{message}")]
    InvalidValue { message: String },
}
