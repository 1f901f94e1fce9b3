#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    missing_debug_implementations,
    clippy::expect_used,
    clippy::missing_panics_doc,
    clippy::panic,
    clippy::panic_in_result_fn,
    clippy::unwrap_used
)]

//! Payer request parameter models.
//!
//! The payment backend accepts customer details as flat key-value
//! parameters. This crate holds the payer shapes used by the
//! server-to-server, hosted web-sale and Apple Pay flows and flattens each
//! of them into the [`ParameterMap`] that the request builder serializes
//! onto the wire.
//!
//! Construction is unchecked and never fails; the documented field
//! constraints are enforced separately through
//! [`RequestParams::validate`], which the request builder runs before
//! transport.

pub mod consts;
pub mod errors;
pub mod payer;
pub mod pii;
pub mod types;
pub mod validation;

pub use payer::{Payer, PayerApplePay, PayerWebSale, RequestParams};
pub use types::{ParameterKey, ParameterMap};
