//! User-triggered flows.
//!
//! - `LetterGenerator`: Receives a `LetterDraft`, yields a letter
//! - `MailOrderProcessor`: Receives a `MailOrderDraft`, yields an order
//!
//! Both fall back to a locally built artifact when the remote call fails.

pub mod generation;
pub mod mail_order;

pub use generation::{GeneratedLetter, LetterDraft, LetterGenerator};
pub use mail_order::{MailOrderDraft, MailOrderProcessor, Order, validate_sender};
