#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![forbid(unsafe_code)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub mod api;
pub mod clipboard;
pub mod countdown;
pub mod error;
pub mod outcome;
pub mod pricing;
pub mod processors;
pub mod session;
pub mod templates;
pub mod utils;

pub use error::ValidationError;
pub use outcome::Sourced;
