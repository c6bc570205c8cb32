//! Mail-order creation with a local fallback.
//!
//! The processor packages the current letter and a parsed return address
//! into an order request. When the order service fails, it fabricates a demo
//! order priced from the local [`PricingEntry`] table, payable to a fixed
//! demonstration address and expiring 30 minutes from now.

use kanau::processor::Processor;
use letterdrop_sdk::objects::{
    CreateOrderRequest, MailType, OrderResponse, OrderedLetter, PaymentInstructions,
    RecipientBureau,
};
use std::fmt::Display;
use time::OffsetDateTime;
use tracing::{info, warn};

use crate::error::ValidationError;
use crate::outcome::Sourced;
use crate::pricing::PricingEntry;
use crate::utils::address::parse_address;

/// An order as held in the session.
pub type Order = OrderResponse;

/// How long a fabricated order stays payable.
pub const DEMO_ORDER_TTL: time::Duration = time::Duration::minutes(30);
pub const DEMO_PAYMENT_ADDRESS: &str = "0x71C7656EC7ab88b098defB751B7401B5f6d8976F";
pub const DEMO_PAYMENT_ENS: &str = "letterdrop.eth";
pub const DEMO_CURRENCY: &str = "USDC";
pub const DEMO_NETWORK: &str = "Base";

/// What the user entered into the mailing form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailOrderDraft {
    pub letter: String,
    pub sender_name: String,
    /// Free text, e.g. `123 Main St, Springfield, IL 62704`.
    pub sender_address: String,
    pub bureau: RecipientBureau,
    pub mail_type: MailType,
}

/// Check the return-address fields of the mailing form.
pub fn validate_sender(sender_name: &str, sender_address: &str) -> Result<(), ValidationError> {
    if sender_name.trim().is_empty() {
        return Err(ValidationError::MissingSenderName);
    }
    if sender_address.trim().is_empty() {
        return Err(ValidationError::MissingSenderAddress);
    }
    Ok(())
}

impl MailOrderDraft {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_sender(&self.sender_name, &self.sender_address)?;
        if self.letter.trim().is_empty() {
            return Err(ValidationError::NoLetter);
        }
        Ok(())
    }

    pub fn into_request(self) -> Result<CreateOrderRequest, ValidationError> {
        self.validate()?;
        Ok(CreateOrderRequest {
            sender: parse_address(&self.sender_name, &self.sender_address),
            letter_content: self.letter,
            recipient_bureau: self.bureau,
            mail_type: self.mail_type,
        })
    }
}

/// Build a demo order for a request the order service could not serve.
pub fn fabricate_order(request: &CreateOrderRequest, now: OffsetDateTime) -> Order {
    let pricing = PricingEntry::for_mail_type(request.mail_type);
    let millis = now.unix_timestamp_nanos() / 1_000_000;
    OrderResponse {
        order_id: format!("DEMO-{millis}"),
        payment: PaymentInstructions {
            amount: pricing.total_amount(),
            currency: DEMO_CURRENCY.to_owned(),
            network: DEMO_NETWORK.to_owned(),
            address: DEMO_PAYMENT_ADDRESS.to_owned(),
            ens: Some(DEMO_PAYMENT_ENS.to_owned()),
            qr_data: DEMO_PAYMENT_ADDRESS.to_owned(),
            expires_at: now + DEMO_ORDER_TTL,
        },
        letter: OrderedLetter {
            recipient: request.recipient_bureau,
            mail_type: request.mail_type,
        },
    }
}

/// Creates mail orders through `A`, falling back to a demo order.
#[derive(Debug, Clone)]
pub struct MailOrderProcessor<A> {
    api: A,
}

impl<A> MailOrderProcessor<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }
}

impl<A> Processor<MailOrderDraft> for MailOrderProcessor<A>
where
    A: Processor<CreateOrderRequest, Output = OrderResponse> + Sync,
    A::Error: Display,
{
    type Output = Sourced<Order>;
    type Error = ValidationError;

    #[tracing::instrument(skip_all, fields(bureau = %draft.bureau, mail_type = %draft.mail_type))]
    async fn process(&self, draft: MailOrderDraft) -> Result<Sourced<Order>, ValidationError> {
        let request = draft.into_request()?;

        match self.api.process(request.clone()).await {
            Ok(order) => {
                info!(order_id = %order.order_id, "Mail order created");
                Ok(Sourced::ServerSourced(order))
            }
            Err(e) => {
                warn!(error = %e, "Mail order failed, using demo order");
                Ok(Sourced::LocallyFabricated(fabricate_order(
                    &request,
                    OffsetDateTime::now_utc(),
                )))
            }
        }
    }
}
