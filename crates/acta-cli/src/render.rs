//! Text rendering of verification results and the demo card.

use std::fmt::Write as _;

use acta_client::request::{DEMO_HOLDER, DEMO_ISSUER};
use acta_client::{DemoCard, VerificationResult};

pub const DIALOG_TITLE: &str = "Chaincert verification";
pub const PROCESSING: &str = "Processing request…";
pub const FAILURE_BANNER: &str =
    "Something went wrong while searching the transaction. Please try again later.";

fn field(out: &mut String, label: &str, value: &str) {
    let _ = writeln!(out, "{label:<18} {value}");
}

/// Render the verification dialog for `result`.
pub fn render_result(result: &VerificationResult, network: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{DIALOG_TITLE}");

    match result {
        VerificationResult::Pending => {
            let _ = writeln!(out, "{PROCESSING}");
        }
        VerificationResult::Success {
            receipt,
            explorer_url,
        } => {
            header(&mut out, network);
            field(&mut out, "Issuance contract", &receipt.contract_id);
            field(&mut out, "Hash", &receipt.hash);
            field(&mut out, "Transaction", receipt.transaction().unwrap_or("-"));
            field(&mut out, "Ledger sequence", &receipt.ledger_sequence.to_string());
            field(&mut out, "Created at", &receipt.display_created_at());
            if let Some(url) = explorer_url {
                field(&mut out, "Explorer", url.as_str());
            }
        }
        VerificationResult::Failure(failure) => {
            header(&mut out, network);
            let _ = writeln!(out, "{FAILURE_BANNER}");
            let _ = writeln!(out, "  {}", failure.message);
            if let Some(details) = &failure.details {
                let _ = writeln!(out, "  {details}");
            }
        }
    }
    out
}

fn header(out: &mut String, network: &str) {
    field(out, "Issuer", DEMO_ISSUER);
    field(out, "Recipient", DEMO_HOLDER);
    field(out, "Blockchain", &format!("Stellar / {network}"));
}

/// Render both faces of the demo card.
pub fn render_card(card: &DemoCard) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", card.title);
    field(&mut out, "Holder", &card.front.holder);
    field(&mut out, "Issued by", &card.front.issued_by);
    field(&mut out, "Issued on", &card.front.issued_on);
    field(&mut out, "Expires on", &card.front.expires_on);
    field(&mut out, "Category", &card.front.category);
    if !card.qr_front.is_empty() {
        field(&mut out, "QR", &card.qr_front);
    }
    let _ = writeln!(out, "*{}*", card.disclaimer);
    let _ = writeln!(out);
    for f in &card.back {
        field(&mut out, &f.label, &f.value);
    }
    if !card.qr_back.is_empty() {
        field(&mut out, "QR", &card.qr_back);
    }
    out
}
