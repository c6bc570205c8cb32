//! Per-session state and the controller that drives it.
//!
//! A [`Session`] holds at most one current letter, one current order and one
//! active countdown. Replacing the letter invalidates the order and stops its
//! countdown; replacing the countdown stops the previous one.

use std::time::Duration;

use kanau::processor::Processor;
use letterdrop_sdk::objects::{
    CreateOrderRequest, GenerateLetterRequest, GenerateLetterResponse, MailType, OrderResponse,
    RecipientBureau,
};
use std::fmt::Display;
use tokio::sync::watch;
use tracing::debug;

use crate::countdown::{CountdownHandle, CountdownState};
use crate::error::ValidationError;
use crate::outcome::Sourced;
use crate::processors::{
    GeneratedLetter, LetterDraft, LetterGenerator, MailOrderDraft, MailOrderProcessor, Order,
};

#[derive(Debug, Default)]
pub struct Session {
    letter: Option<Sourced<GeneratedLetter>>,
    order: Option<Sourced<Order>>,
    countdown: Option<CountdownHandle>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn letter(&self) -> Option<&Sourced<GeneratedLetter>> {
        self.letter.as_ref()
    }

    pub fn order(&self) -> Option<&Sourced<Order>> {
        self.order.as_ref()
    }

    pub fn countdown(&self) -> Option<&CountdownHandle> {
        self.countdown.as_ref()
    }

    /// Make `letter` current. Any previous order and its countdown are
    /// discarded.
    pub fn set_letter(&mut self, letter: Sourced<GeneratedLetter>) -> &Sourced<GeneratedLetter> {
        self.clear_order();
        self.letter.insert(letter)
    }

    /// Make `order` current and start counting down to its payment expiry.
    pub fn set_order(
        &mut self,
        order: Sourced<Order>,
    ) -> (&Sourced<Order>, watch::Receiver<CountdownState>) {
        let expires_at = order.value().payment.expires_at;
        let countdown = self.replace_countdown(CountdownHandle::until(expires_at));
        (&*self.order.insert(order), countdown)
    }

    pub fn clear_order(&mut self) {
        if self.order.take().is_some() {
            debug!("Discarding previous order");
        }
        if let Some(countdown) = self.countdown.take() {
            countdown.cancel();
        }
    }

    /// Start a countdown of `remaining`, cancelling the active one.
    pub fn start_countdown(&mut self, remaining: Duration) -> watch::Receiver<CountdownState> {
        self.replace_countdown(CountdownHandle::start(remaining))
    }

    fn replace_countdown(&mut self, next: CountdownHandle) -> watch::Receiver<CountdownState> {
        if let Some(previous) = self.countdown.take() {
            previous.cancel();
        }
        let rx = next.subscribe();
        self.countdown = Some(next);
        rx
    }
}

/// Runs the generation and order flows against a [`Session`].
pub struct SessionController<A> {
    generator: LetterGenerator<A>,
    orders: MailOrderProcessor<A>,
    session: Session,
}

impl<A: Clone> SessionController<A> {
    pub fn new(api: A) -> Self {
        Self {
            generator: LetterGenerator::new(api.clone()),
            orders: MailOrderProcessor::new(api),
            session: Session::new(),
        }
    }
}

impl<A> SessionController<A>
where
    A: Processor<GenerateLetterRequest, Output = GenerateLetterResponse>
        + Processor<CreateOrderRequest, Output = OrderResponse>
        + Sync,
    <A as Processor<GenerateLetterRequest>>::Error: Display,
    <A as Processor<CreateOrderRequest>>::Error: Display,
{
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Generate a letter and make it current.
    ///
    /// Rejected drafts leave the session untouched.
    pub async fn generate(
        &mut self,
        draft: LetterDraft,
    ) -> Result<&Sourced<GeneratedLetter>, ValidationError> {
        let letter = self.generator.process(draft).await?;
        Ok(self.session.set_letter(letter))
    }

    /// Order a mailing of the current letter and start its payment
    /// countdown.
    pub async fn order(
        &mut self,
        sender_name: &str,
        sender_address: &str,
        bureau: RecipientBureau,
        mail_type: MailType,
    ) -> Result<(&Sourced<Order>, watch::Receiver<CountdownState>), ValidationError> {
        let letter = self
            .session
            .letter()
            .map(|l| l.value().body.clone())
            .unwrap_or_default();
        let order = self
            .orders
            .process(MailOrderDraft {
                letter,
                sender_name: sender_name.to_owned(),
                sender_address: sender_address.to_owned(),
                bureau,
                mail_type,
            })
            .await?;
        Ok(self.session.set_order(order))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processors::mail_order::fabricate_order;
    use crate::processors::testing::FakeApi;
    use letterdrop_sdk::objects::LetterType;
    use time::OffsetDateTime;

    fn draft() -> LetterDraft {
        LetterDraft {
            situation: "Account 1234 is not mine".to_string(),
            letter_type: LetterType::CreditDispute,
            sender_name: Some("Jane Doe".to_string()),
            sender_address: Some("123 Main St, Springfield, IL 62704".to_string()),
        }
    }

    #[tokio::test]
    async fn test_unreachable_service_still_completes_the_flow() {
        let mut controller = SessionController::new(FakeApi::failing());

        let letter = controller.generate(draft()).await.unwrap();
        assert!(letter.is_fabricated());
        assert!(!letter.value().body.is_empty());

        let (order, countdown) = controller
            .order(
                "Jane Doe",
                "123 Main St, Springfield, IL 62704",
                RecipientBureau::TransUnion,
                MailType::Standard,
            )
            .await
            .unwrap();
        assert!(order.is_fabricated());
        assert!(order.value().payment.expires_at > OffsetDateTime::now_utc());
        assert!(!countdown.borrow().is_expired());
    }

    #[tokio::test]
    async fn test_order_without_letter_is_rejected() {
        let api = FakeApi::default();
        let mut controller = SessionController::new(api.clone());

        let err = controller
            .order("Jane Doe", "1 Elm Rd", RecipientBureau::Equifax, MailType::Standard)
            .await
            .unwrap_err();

        assert_eq!(err, ValidationError::NoLetter);
        assert_eq!(api.order_calls(), 0);
        assert!(controller.session().order().is_none());
    }

    #[tokio::test]
    async fn test_new_letter_invalidates_current_order() {
        let mut controller = SessionController::new(FakeApi::default());
        controller.generate(draft()).await.unwrap();
        let (_, mut countdown) = controller
            .order("Jane Doe", "1 Elm Rd", RecipientBureau::Experian, MailType::Certified)
            .await
            .unwrap();
        assert!(controller.session().order().is_some());

        controller.generate(draft()).await.unwrap();

        assert!(controller.session().order().is_none());
        assert!(controller.session().countdown().is_none());
        // The cancelled loop drops its sender.
        while countdown.changed().await.is_ok() {}
    }

    #[tokio::test]
    async fn test_rejected_draft_keeps_current_letter() {
        let mut controller = SessionController::new(FakeApi::default());
        controller.generate(draft()).await.unwrap();

        let mut blank = draft();
        blank.situation = " ".to_string();
        let err = controller.generate(blank).await.unwrap_err();

        assert_eq!(err, ValidationError::EmptySituation);
        assert!(controller.session().letter().is_some());
    }

    #[tokio::test]
    async fn test_setters_return_the_stored_values() {
        let mut session = Session::new();
        let letter = session.set_letter(Sourced::ServerSourced(GeneratedLetter::new("Dear Sir")));
        assert_eq!(letter.value().body, "Dear Sir");

        let request = MailOrderDraft {
            letter: "Dear Sir".to_string(),
            sender_name: "Jane Doe".to_string(),
            sender_address: "1 Elm Rd".to_string(),
            bureau: RecipientBureau::Equifax,
            mail_type: MailType::Standard,
        }
        .into_request()
        .unwrap();
        let fabricated = fabricate_order(&request, OffsetDateTime::now_utc());
        let (order, countdown) = session.set_order(Sourced::LocallyFabricated(fabricated.clone()));

        assert_eq!(order.value(), &fabricated);
        assert!(!countdown.borrow().is_expired());
        assert_eq!(session.order().map(Sourced::value), Some(&fabricated));
        assert!(session.letter().is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn test_starting_countdown_cancels_previous() {
        let mut session = Session::new();
        let mut first = session.start_countdown(Duration::from_secs(60));
        let second = session.start_countdown(Duration::from_secs(5));

        while first.changed().await.is_ok() {}
        assert!(!second.borrow().is_expired());
        assert!(!session.countdown().unwrap().is_finished());
    }
}
