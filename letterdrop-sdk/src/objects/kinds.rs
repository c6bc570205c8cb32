use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Error returned when a key does not name a known variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} key: {key}")]
pub struct UnknownKey {
    pub kind: &'static str,
    pub key: String,
}

/// Category of legal letter to generate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LetterType {
    #[default]
    CreditDispute,
    DebtValidation,
    CeaseDesist,
    DemandLetter,
    MedicalBilling,
}

impl LetterType {
    pub const ALL: [LetterType; 5] = [
        LetterType::CreditDispute,
        LetterType::DebtValidation,
        LetterType::CeaseDesist,
        LetterType::DemandLetter,
        LetterType::MedicalBilling,
    ];

    pub fn key(self) -> &'static str {
        match self {
            LetterType::CreditDispute => "credit_dispute",
            LetterType::DebtValidation => "debt_validation",
            LetterType::CeaseDesist => "cease_desist",
            LetterType::DemandLetter => "demand_letter",
            LetterType::MedicalBilling => "medical_billing",
        }
    }

    /// Lenient lookup: any key that is not recognised selects the default
    /// variant ([`LetterType::CreditDispute`]).
    pub fn from_key(key: &str) -> Self {
        key.parse().unwrap_or_default()
    }
}

impl fmt::Display for LetterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for LetterType {
    type Err = UnknownKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LetterType::ALL
            .into_iter()
            .find(|t| t.key() == s.trim())
            .ok_or_else(|| UnknownKey {
                kind: "letter type",
                key: s.to_owned(),
            })
    }
}

/// Physical mail delivery tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MailType {
    #[default]
    Standard,
    Certified,
    CertifiedReturnReceipt,
}

impl MailType {
    pub const ALL: [MailType; 3] = [
        MailType::Standard,
        MailType::Certified,
        MailType::CertifiedReturnReceipt,
    ];

    pub fn key(self) -> &'static str {
        match self {
            MailType::Standard => "standard",
            MailType::Certified => "certified",
            MailType::CertifiedReturnReceipt => "certified_return_receipt",
        }
    }

    /// Human-readable tier name.
    pub fn label(self) -> &'static str {
        match self {
            MailType::Standard => "Standard Mail",
            MailType::Certified => "Certified Mail",
            MailType::CertifiedReturnReceipt => "Certified Mail + Return Receipt",
        }
    }
}

impl fmt::Display for MailType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for MailType {
    type Err = UnknownKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MailType::ALL
            .into_iter()
            .find(|t| t.key() == s.trim())
            .ok_or_else(|| UnknownKey {
                kind: "mail type",
                key: s.to_owned(),
            })
    }
}

/// Credit bureau the mailed letter is addressed to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecipientBureau {
    #[serde(rename = "equifax")]
    Equifax,
    #[serde(rename = "experian")]
    Experian,
    #[default]
    #[serde(rename = "transunion")]
    TransUnion,
}

impl RecipientBureau {
    pub const ALL: [RecipientBureau; 3] = [
        RecipientBureau::Equifax,
        RecipientBureau::Experian,
        RecipientBureau::TransUnion,
    ];

    pub fn key(self) -> &'static str {
        match self {
            RecipientBureau::Equifax => "equifax",
            RecipientBureau::Experian => "experian",
            RecipientBureau::TransUnion => "transunion",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            RecipientBureau::Equifax => "Equifax",
            RecipientBureau::Experian => "Experian",
            RecipientBureau::TransUnion => "TransUnion",
        }
    }
}

impl fmt::Display for RecipientBureau {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for RecipientBureau {
    type Err = UnknownKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RecipientBureau::ALL
            .into_iter()
            .find(|b| b.key() == s.trim())
            .ok_or_else(|| UnknownKey {
                kind: "recipient bureau",
                key: s.to_owned(),
            })
    }
}
