//! Best-effort splitting of a one-line postal address.
//!
//! The input is split on commas: street, city, then "STATE ZIP". Missing
//! parts are replaced by placeholders. Nothing is validated, and a
//! multi-word state keeps only its first word.

use letterdrop_sdk::objects::SenderAddress;

pub const UNKNOWN_CITY: &str = "Unknown";
pub const UNKNOWN_STATE: &str = "XX";
pub const UNKNOWN_POSTAL_CODE: &str = "00000";

/// Split `address` into the structured return address sent with an order.
pub fn parse_address(name: &str, address: &str) -> SenderAddress {
    let mut segments = address.split(',').map(str::trim);

    let street = segments.next().unwrap_or_default();
    let city = segments
        .next()
        .filter(|s| !s.is_empty())
        .unwrap_or(UNKNOWN_CITY);

    let mut region = segments
        .next()
        .map(|s| s.split_whitespace().collect::<Vec<_>>())
        .unwrap_or_default();
    let postal_code = if region.len() > 1 { region.pop() } else { None };
    let state = region.first().copied();

    SenderAddress {
        name: name.trim().to_owned(),
        address_line1: street.to_owned(),
        city: city.to_owned(),
        state: state.unwrap_or(UNKNOWN_STATE).to_owned(),
        postal_code: postal_code.unwrap_or(UNKNOWN_POSTAL_CODE).to_owned(),
    }
}
