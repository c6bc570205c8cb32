//! Letter template library and the demo letter generator.
//!
//! The demo generator is what the user sees when the generation service
//! cannot be reached: the template for the requested letter type with the
//! user's details substituted in.

mod library;

use letterdrop_sdk::objects::LetterType;
use time::Date;

use crate::utils::date::long_date;

pub const NAME_PLACEHOLDER: &str = "[Your Name]";
pub const ADDRESS_PLACEHOLDER: &str = "[Your Address]";

/// A letter body with `{date}`, `{name}`, `{address}` and `{situation}`
/// placeholders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterTemplate {
    pub body: &'static str,
    /// Used in place of `{situation}` when the user gave none.
    pub default_situation: &'static str,
}

/// Values substituted into a [`LetterTemplate`].
#[derive(Debug, Clone, Copy)]
pub struct TemplateFields<'a> {
    pub date: &'a str,
    pub name: &'a str,
    pub address: &'a str,
    pub situation: &'a str,
}

impl LetterTemplate {
    pub fn for_type(letter_type: LetterType) -> &'static LetterTemplate {
        match letter_type {
            LetterType::CreditDispute => &library::CREDIT_DISPUTE,
            LetterType::DebtValidation => &library::DEBT_VALIDATION,
            LetterType::CeaseDesist => &library::CEASE_DESIST,
            LetterType::DemandLetter => &library::DEMAND_LETTER,
            LetterType::MedicalBilling => &library::MEDICAL_BILLING,
        }
    }

    /// Substitute `fields` in a single pass.
    ///
    /// Substituted text is never rescanned, so user input containing a
    /// placeholder such as `{name}` is emitted literally.
    pub fn render(&self, fields: &TemplateFields<'_>) -> String {
        let mut out = String::with_capacity(self.body.len() + 256);
        let mut rest = self.body;
        while let Some(start) = rest.find('{') {
            out.push_str(&rest[..start]);
            let tail = &rest[start..];
            let Some(end) = tail.find('}') else {
                rest = tail;
                break;
            };
            let value = match &tail[1..end] {
                "date" => Some(fields.date),
                "name" => Some(fields.name),
                "address" => Some(fields.address),
                "situation" => Some(fields.situation),
                _ => None,
            };
            match value {
                Some(v) => {
                    out.push_str(v);
                    rest = &tail[end + 1..];
                }
                None => {
                    out.push('{');
                    rest = &tail[1..];
                }
            }
        }
        out.push_str(rest);
        out
    }
}

/// Build the locally generated stand-in for a letter.
///
/// Blank name and address become placeholders; a blank situation becomes the
/// template's default sentence.
pub fn demo_letter(
    letter_type: LetterType,
    sender_name: Option<&str>,
    sender_address: Option<&str>,
    situation: &str,
    date: Date,
) -> String {
    let template = LetterTemplate::for_type(letter_type);
    let date = long_date(date);
    let situation = if situation.trim().is_empty() {
        template.default_situation
    } else {
        situation
    };
    template.render(&TemplateFields {
        date: &date,
        name: non_blank(sender_name).unwrap_or(NAME_PLACEHOLDER),
        address: non_blank(sender_address).unwrap_or(ADDRESS_PLACEHOLDER),
        situation,
    })
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
