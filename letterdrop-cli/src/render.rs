//! Terminal rendering of letters, orders and prices.

use letterdrop_core::Sourced;
use letterdrop_core::pricing::{PriceBreakdown, PricingEntry};
use letterdrop_core::processors::{GeneratedLetter, Order};
use letterdrop_sdk::client::qr_image_url;
use letterdrop_sdk::objects::MailType;
use time::format_description::well_known::Rfc3339;
use url::Url;

const RULE: &str = "----------------------------------------";

/// Progress line for an in-flight request.
pub fn busy(message: &str) {
    eprintln!("{message}");
}

pub fn letter(letter: &Sourced<GeneratedLetter>) {
    if letter.is_fabricated() {
        eprintln!("Generation service unavailable, showing a demo letter.");
    }
    println!("{RULE}");
    println!("{}", letter.value().body);
    println!("{RULE}");
}

pub fn order(order: &Sourced<Order>, qr_service: &Url) {
    if order.is_fabricated() {
        eprintln!("Order service unavailable, showing a demo order.");
    }
    print!("{}", order_panel(order, qr_service));
}

/// Order details and payment instructions.
///
/// The local price breakdown is shown only for demo orders; a server order
/// is described by the amount the server asks for.
fn order_panel(order: &Sourced<Order>, qr_service: &Url) -> String {
    let order_ref = order.value();
    let payment = &order_ref.payment;
    let mail_type = order_ref.letter.mail_type;
    let expires_at = payment
        .expires_at
        .format(&Rfc3339)
        .unwrap_or_else(|_| payment.expires_at.to_string());

    let mut lines = vec![
        RULE.to_owned(),
        format!("Order:      {}", order_ref.order_id),
        format!("Recipient:  {}", order_ref.letter.recipient.display_name()),
        format!("Mail type:  {}", mail_type.label()),
    ];
    if order.is_fabricated() {
        lines.extend(breakdown_lines(&PricingEntry::for_mail_type(mail_type).breakdown()));
    }
    lines.push(String::new());
    lines.push(format!(
        "Send:       {} {} on {}",
        payment.amount, payment.currency, payment.network
    ));
    lines.push(format!("To:         {}", payment.address));
    if let Some(ens) = &payment.ens {
        lines.push(format!("ENS:        {ens}"));
    }
    lines.push(format!("QR code:    {}", qr_image_url(qr_service, &payment.qr_data)));
    lines.push(format!("Expires at: {expires_at}"));
    lines.push(RULE.to_owned());

    let mut panel = lines.join("\n");
    panel.push('\n');
    panel
}

pub fn pricing_table() {
    for mail_type in MailType::ALL {
        println!("{} ({})", mail_type.label(), mail_type.key());
        print_breakdown(&PricingEntry::for_mail_type(mail_type).breakdown());
        println!();
    }
}

fn print_breakdown(prices: &PriceBreakdown) {
    for line in breakdown_lines(prices) {
        println!("{line}");
    }
}

fn breakdown_lines(prices: &PriceBreakdown) -> [String; 3] {
    [
        format!("  Base:        {}", prices.base),
        format!("  Network fee: {}", prices.fee),
        format!("  Total:       {}", prices.total),
    ]
}
