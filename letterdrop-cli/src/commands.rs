//! Subcommand implementations.

use std::convert::Infallible;
use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use kanau::processor::Processor;
use letterdrop_core::Sourced;
use letterdrop_core::api::RemoteApi;
use letterdrop_core::clipboard::{CopyMethod, copy_to_clipboard};
use letterdrop_core::countdown::CountdownState;
use letterdrop_core::processors::{
    LetterDraft, MailOrderDraft, MailOrderProcessor, Order, validate_sender,
};
use letterdrop_core::session::{Session, SessionController};
use letterdrop_sdk::client::QrClient;
use letterdrop_sdk::objects::{LetterType, MailType, RecipientBureau};
use tokio::sync::watch;
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::render;
use crate::shutdown::shutdown_signal;

/// Shared state for one CLI invocation.
pub struct Runtime {
    pub config: AppConfig,
    pub api: RemoteApi,
}

#[derive(Args, Debug)]
pub struct LetterArgs {
    /// Letter type: credit_dispute, debt_validation, cease_desist,
    /// demand_letter or medical_billing. Unknown types use credit_dispute.
    #[arg(short = 't', long = "type", default_value = "credit_dispute", value_parser = lenient_letter_type)]
    pub letter_type: LetterType,

    /// Describe your situation
    #[arg(short, long)]
    pub situation: String,
}

#[derive(Args, Debug)]
pub struct MailingArgs {
    /// Credit bureau to mail the letter to (equifax, experian, transunion)
    #[arg(long, default_value = "transunion")]
    pub bureau: RecipientBureau,

    /// Delivery tier (standard, certified, certified_return_receipt)
    #[arg(long, default_value = "standard")]
    pub mail_type: MailType,

    /// Print the payment details and exit without the countdown
    #[arg(long)]
    pub no_wait: bool,

    /// Download the payment QR code image to this path
    #[arg(long)]
    pub save_qr: Option<PathBuf>,

    /// Copy the payment address to the clipboard
    #[arg(long)]
    pub copy_address: bool,
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub letter: LetterArgs,

    /// Your full name
    #[arg(long)]
    pub name: Option<String>,

    /// Your mailing address
    #[arg(long)]
    pub address: Option<String>,

    /// Copy the letter to the clipboard
    #[arg(long)]
    pub copy: bool,

    /// Also write the letter to this file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct OrderArgs {
    /// File holding the letter to mail
    #[arg(long)]
    pub letter_file: PathBuf,

    /// Your full name
    #[arg(long)]
    pub name: String,

    /// Your mailing address, e.g. "123 Main St, Springfield, IL 62704"
    #[arg(long)]
    pub address: String,

    #[command(flatten)]
    pub mailing: MailingArgs,
}

#[derive(Args, Debug)]
pub struct MailArgs {
    #[command(flatten)]
    pub letter: LetterArgs,

    /// Your full name
    #[arg(long)]
    pub name: String,

    /// Your mailing address, e.g. "123 Main St, Springfield, IL 62704"
    #[arg(long)]
    pub address: String,

    /// Copy the letter to the clipboard
    #[arg(long)]
    pub copy: bool,

    #[command(flatten)]
    pub mailing: MailingArgs,
}

/// `letterdrop generate`
pub async fn generate(rt: &Runtime, args: GenerateArgs) -> anyhow::Result<()> {
    let mut controller = SessionController::new(rt.api.clone());
    let draft = LetterDraft {
        situation: args.letter.situation,
        letter_type: args.letter.letter_type,
        sender_name: args.name,
        sender_address: args.address,
    };
    draft.validate()?;

    render::busy("Generating your letter...");
    let letter = controller.generate(draft).await?;
    render::letter(letter);

    if args.copy || rt.config.copy_on_generate {
        copy(&letter.value().body, "Letter").await;
    }
    if let Some(path) = args.output {
        tokio::fs::write(&path, &letter.value().body)
            .await
            .with_context(|| format!("failed to write letter to {path:?}"))?;
        info!("Letter written to {:?}", path);
    }
    Ok(())
}

/// `letterdrop order`
pub async fn order(rt: &Runtime, args: OrderArgs) -> anyhow::Result<()> {
    let letter = tokio::fs::read_to_string(&args.letter_file)
        .await
        .with_context(|| format!("failed to read letter from {:?}", args.letter_file))?;

    let draft = MailOrderDraft {
        letter,
        sender_name: args.name,
        sender_address: args.address,
        bureau: args.mailing.bureau,
        mail_type: args.mailing.mail_type,
    };
    draft.validate()?;

    let processor = MailOrderProcessor::new(rt.api.clone());
    render::busy("Creating your order...");
    let order = processor.process(draft).await?;

    let mut session = Session::new();
    let (order, countdown) = session.set_order(order);
    follow_payment(rt, order, countdown, &args.mailing).await;
    Ok(())
}

/// `letterdrop mail`: generate, then order a mailing of the result.
pub async fn mail(rt: &Runtime, args: MailArgs) -> anyhow::Result<()> {
    let mut controller = SessionController::new(rt.api.clone());
    let draft = LetterDraft {
        situation: args.letter.situation,
        letter_type: args.letter.letter_type,
        sender_name: Some(args.name.clone()),
        sender_address: Some(args.address.clone()),
    };
    draft.validate()?;
    validate_sender(&args.name, &args.address)?;

    render::busy("Generating your letter...");
    let letter = controller.generate(draft).await?;
    render::letter(letter);
    if args.copy || rt.config.copy_on_generate {
        copy(&letter.value().body, "Letter").await;
    }

    render::busy("Creating your order...");
    let (order, countdown) = controller
        .order(
            &args.name,
            &args.address,
            args.mailing.bureau,
            args.mailing.mail_type,
        )
        .await?;
    follow_payment(rt, order, countdown, &args.mailing).await;
    Ok(())
}

/// `letterdrop pricing`
pub fn pricing() {
    render::pricing_table();
}

async fn follow_payment(
    rt: &Runtime,
    order: &Sourced<Order>,
    countdown: watch::Receiver<CountdownState>,
    mailing: &MailingArgs,
) {
    render::order(order, &rt.config.qr_service);
    let payment = &order.value().payment;

    if mailing.copy_address {
        copy(&payment.address, "Payment address").await;
    }
    if let Some(path) = &mailing.save_qr {
        let client = QrClient::new(rt.config.qr_service.clone(), rt.config.timeout);
        match client.fetch(&payment.qr_data).await {
            Ok(image) => match tokio::fs::write(path, image).await {
                Ok(()) => info!("QR code saved to {:?}", path),
                Err(e) => warn!(error = %e, "Failed to save QR code"),
            },
            Err(e) => warn!(error = %e, "Failed to fetch QR code"),
        }
    }
    if !mailing.no_wait {
        watch_countdown(countdown).await;
    }
}

/// Redraw the payment window once per tick until it expires or the user
/// interrupts.
async fn watch_countdown(mut countdown: watch::Receiver<CountdownState>) {
    let shutdown = shutdown_signal();
    tokio::pin!(shutdown);
    let mut stdout = std::io::stdout();

    loop {
        tokio::select! {
            _ = &mut shutdown => {
                println!();
                break;
            }
            changed = countdown.changed() => {
                if changed.is_err() {
                    break;
                }
                let state = *countdown.borrow_and_update();
                print!("\rPayment window: {:<8}", state.label());
                let _ = stdout.flush();
                if state.is_expired() {
                    println!();
                    break;
                }
            }
        }
    }
}

async fn copy(text: &str, what: &str) {
    match copy_to_clipboard(text).await {
        Some(CopyMethod::System(program)) => eprintln!("{what} copied to clipboard ({program})."),
        Some(CopyMethod::Terminal) => eprintln!("{what} sent to the terminal clipboard."),
        None => {}
    }
}

fn lenient_letter_type(key: &str) -> Result<LetterType, Infallible> {
    let letter_type = LetterType::from_key(key);
    if letter_type.key() != key.trim() {
        warn!(key, "Unknown letter type, using {}", letter_type);
    }
    Ok(letter_type)
}

#[cfg(test)]
mod tests {
    use super::*;
    use letterdrop_core::ValidationError;
    use letterdrop_sdk::client::{ApiClient, DEFAULT_QR_SERVICE};
    use std::time::Duration;
    use url::Url;

    fn runtime(api_base: &str) -> Runtime {
        let api_base = Url::parse(api_base).unwrap();
        Runtime {
            config: AppConfig {
                api_base: api_base.clone(),
                timeout: Duration::from_secs(5),
                qr_service: Url::parse(DEFAULT_QR_SERVICE).unwrap(),
                copy_on_generate: false,
            },
            api: RemoteApi::new(ApiClient::new(api_base, Duration::from_secs(5))),
        }
    }

    fn letter_args(situation: &str) -> LetterArgs {
        LetterArgs {
            letter_type: LetterType::CreditDispute,
            situation: situation.to_string(),
        }
    }

    fn mailing_args() -> MailingArgs {
        MailingArgs {
            bureau: RecipientBureau::Equifax,
            mail_type: MailType::Standard,
            no_wait: true,
            save_qr: None,
            copy_address: false,
        }
    }

    fn validation_error(err: anyhow::Error) -> ValidationError {
        err.downcast::<ValidationError>().unwrap()
    }

    #[tokio::test]
    async fn test_blank_situation_is_rejected_without_a_request() {
        let mut server = mockito::Server::new_async().await;
        let mock = server.mock("POST", "/generate").expect(0).create_async().await;
        let rt = runtime(&server.url());

        let err = generate(
            &rt,
            GenerateArgs {
                letter: letter_args("  "),
                name: None,
                address: None,
                copy: false,
                output: None,
            },
        )
        .await
        .unwrap_err();

        assert_eq!(validation_error(err), ValidationError::EmptySituation);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_mail_checks_sender_before_generating() {
        let mut server = mockito::Server::new_async().await;
        let generate_mock = server.mock("POST", "/generate").expect(0).create_async().await;
        let order_mock = server.mock("POST", "/order").expect(0).create_async().await;
        let rt = runtime(&server.url());

        let err = mail(
            &rt,
            MailArgs {
                letter: letter_args("Account 1234 is not mine"),
                name: "Jane Doe".to_string(),
                address: " ".to_string(),
                copy: false,
                mailing: mailing_args(),
            },
        )
        .await
        .unwrap_err();

        assert_eq!(validation_error(err), ValidationError::MissingSenderAddress);
        generate_mock.assert_async().await;
        order_mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_order_rejects_empty_letter_file() {
        let mut server = mockito::Server::new_async().await;
        let mock = server.mock("POST", "/order").expect(0).create_async().await;
        let rt = runtime(&server.url());
        let file = tempfile::NamedTempFile::new().unwrap();

        let err = order(
            &rt,
            OrderArgs {
                letter_file: file.path().to_path_buf(),
                name: "Jane Doe".to_string(),
                address: "1 Elm Rd".to_string(),
                mailing: mailing_args(),
            },
        )
        .await
        .unwrap_err();

        assert_eq!(validation_error(err), ValidationError::NoLetter);
        mock.assert_async().await;
    }
}
