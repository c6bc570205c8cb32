//! Request and response types for the Letterdrop API.

pub mod generate;
pub mod kinds;
pub mod order;

pub use generate::{GenerateLetterRequest, GenerateLetterResponse};
pub use kinds::{LetterType, MailType, RecipientBureau, UnknownKey};
pub use order::{CreateOrderRequest, OrderResponse, OrderedLetter, PaymentInstructions, SenderAddress};
