use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::kinds::{MailType, RecipientBureau};

/// Return address printed on the mailed letter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SenderAddress {
    pub name: String,
    pub address_line1: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
}

/// Request body for `POST /order`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    pub letter_content: String,
    pub sender: SenderAddress,
    pub recipient_bureau: RecipientBureau,
    pub mail_type: MailType,
}

/// How to pay for a mail order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentInstructions {
    /// Amount due, in `currency` units.
    pub amount: Decimal,
    pub currency: String,
    pub network: String,
    /// Receiving wallet address.
    pub address: String,
    #[serde(default)]
    pub ens: Option<String>,
    /// Payload to encode as a QR code.
    pub qr_data: String,
    #[serde(with = "time::serde::rfc3339")]
    pub expires_at: OffsetDateTime,
}

/// Letter details echoed back by the order endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderedLetter {
    pub recipient: RecipientBureau,
    pub mail_type: MailType,
}

/// Response body of `POST /order`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderResponse {
    pub order_id: String,
    pub payment: PaymentInstructions,
    pub letter: OrderedLetter,
}
