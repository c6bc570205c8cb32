//! Letter generation with a local fallback.
//!
//! The generator sends the user's description to the remote service. When
//! that call fails for any reason (transport error, timeout, non-2xx,
//! undecodable body) it logs the failure and builds the demo letter from the
//! same inputs instead. Only input validation can make it return an error.

use kanau::processor::Processor;
use letterdrop_sdk::objects::{GenerateLetterRequest, GenerateLetterResponse, LetterType};
use std::fmt::Display;
use time::Date;
use tracing::{info, warn};

use crate::error::ValidationError;
use crate::outcome::Sourced;
use crate::templates::demo_letter;
use crate::utils::date::today;

/// What the user typed into the generation form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterDraft {
    pub situation: String,
    pub letter_type: LetterType,
    pub sender_name: Option<String>,
    pub sender_address: Option<String>,
}

impl LetterDraft {
    /// Check the draft without consuming it.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.situation.trim().is_empty() {
            return Err(ValidationError::EmptySituation);
        }
        Ok(())
    }

    /// Validate the draft and build the wire request.
    ///
    /// Blank optional fields are dropped so they are sent as `null`.
    pub fn into_request(self) -> Result<GenerateLetterRequest, ValidationError> {
        self.validate()?;
        Ok(GenerateLetterRequest {
            prompt: self.situation,
            letter_type: self.letter_type,
            sender_name: present(self.sender_name),
            sender_address: present(self.sender_address),
        })
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Plain-text letter body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedLetter {
    pub body: String,
}

impl GeneratedLetter {
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }
}

/// Demo letter for a request that could not be served remotely.
pub fn fallback_letter(request: &GenerateLetterRequest, date: Date) -> GeneratedLetter {
    GeneratedLetter::new(demo_letter(
        request.letter_type,
        request.sender_name.as_deref(),
        request.sender_address.as_deref(),
        &request.prompt,
        date,
    ))
}

/// Generates letters through `A`, falling back to the demo templates.
#[derive(Debug, Clone)]
pub struct LetterGenerator<A> {
    api: A,
}

impl<A> LetterGenerator<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }
}

impl<A> Processor<LetterDraft> for LetterGenerator<A>
where
    A: Processor<GenerateLetterRequest, Output = GenerateLetterResponse> + Sync,
    A::Error: Display,
{
    type Output = Sourced<GeneratedLetter>;
    type Error = ValidationError;

    #[tracing::instrument(skip_all, fields(letter_type = %draft.letter_type))]
    async fn process(&self, draft: LetterDraft) -> Result<Sourced<GeneratedLetter>, ValidationError> {
        let request = draft.into_request()?;

        match self.api.process(request.clone()).await {
            Ok(response) => {
                info!(chars = response.letter.len(), "Letter generated by service");
                Ok(Sourced::ServerSourced(GeneratedLetter::new(response.letter)))
            }
            Err(e) => {
                warn!(error = %e, "Letter generation failed, using demo letter");
                Ok(Sourced::LocallyFabricated(fallback_letter(&request, today())))
            }
        }
    }
}
