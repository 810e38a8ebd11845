//! Static demo credential card shown next to the verify trigger.
//!
//! Pure data: the front fields, the ordered back fields, and the strings
//! encoded in the front and back QR codes. The card is illustrative and is
//! not derived from any verification result.

use serde::Serialize;

/// Front face of the card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrontFields {
    pub holder: String,
    pub issued_by: String,
    pub issued_on: String,
    pub expires_on: String,
    pub category: String,
}

/// One labelled value on the back face.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardField {
    pub label: String,
    pub value: String,
}

impl CardField {
    fn new(label: &str, value: &str) -> Self {
        Self {
            label: label.to_string(),
            value: value.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DemoCard {
    pub title: String,
    pub front: FrontFields,
    pub back: Vec<CardField>,
    /// Encoded in the front QR code. Empty means no code is shown.
    pub qr_front: String,
    /// Encoded in the back QR code. Empty means no code is shown.
    pub qr_back: String,
    pub disclaimer: String,
}

impl Default for DemoCard {
    fn default() -> Self {
        Self {
            title: "ACTA Identity".to_string(),
            front: FrontFields {
                holder: "John Doe".to_string(),
                issued_by: "ACTA".to_string(),
                issued_on: "Jan 15, 2025".to_string(),
                expires_on: "12/25".to_string(),
                category: "Identity".to_string(),
            },
            back: vec![
                CardField::new("Credential ID", "cred_demo-1234-identity"),
                CardField::new("Standard", "W3C Verifiable Credential 2.0"),
                CardField::new("Signature", "Ed25519 (Stellar)"),
                CardField::new("Status", "Active"),
                CardField::new("On-chain hash", "0x8f7a…b21c"),
            ],
            qr_front: "https://acta.app/demo/credential/identity-demo".to_string(),
            qr_back: "https://acta.app/verify/cred_demo-1234-identity".to_string(),
            disclaimer: "Demo credential; no legal validity".to_string(),
        }
    }
}

impl DemoCard {
    /// Look up a back-face value by label.
    pub fn back_value(&self, label: &str) -> Option<&str> {
        self.back
            .iter()
            .find(|f| f.label == label)
            .map(|f| f.value.as_str())
    }
}
