//! Mail tier pricing, in integer cents.

use letterdrop_sdk::objects::MailType;
use rust_decimal::Decimal;

/// Cost of one mail tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingEntry {
    pub base_cents: u64,
    /// Base cost plus network fee.
    pub total_cents: u64,
}

impl PricingEntry {
    pub const fn for_mail_type(mail_type: MailType) -> Self {
        match mail_type {
            MailType::Standard => Self {
                base_cents: 250,
                total_cents: 300,
            },
            MailType::Certified => Self {
                base_cents: 850,
                total_cents: 900,
            },
            MailType::CertifiedReturnReceipt => Self {
                base_cents: 1150,
                total_cents: 1200,
            },
        }
    }

    pub fn network_fee_cents(&self) -> u64 {
        self.total_cents.saturating_sub(self.base_cents)
    }

    /// Total as a two-decimal amount, e.g. `3.00`.
    pub fn total_amount(&self) -> Decimal {
        Decimal::from_i128_with_scale(i128::from(self.total_cents), 2)
    }

    pub fn breakdown(&self) -> PriceBreakdown {
        PriceBreakdown {
            base: format_cents(self.base_cents),
            fee: format_cents(self.network_fee_cents()),
            total: format_cents(self.total_cents),
        }
    }
}

/// Display strings for one tier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceBreakdown {
    pub base: String,
    pub fee: String,
    pub total: String,
}

/// Render cents as `$D.CC`.
pub fn format_cents(cents: u64) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}
