//! SDK for the Letterdrop generation and mail-order API.
//!
//! [`objects`] holds the request and response types shared by every crate in
//! the workspace. [`client`] holds the typed HTTP clients and is gated behind
//! the `client` feature.

#[cfg(feature = "client")]
pub mod client;
pub mod objects;
