//! # Verification Result
//!
//! The tri-state value a presentation layer renders: [`Pending`] while an
//! attempt is in flight (or none has started), then exactly one of
//! [`Success`] or [`Failure`].
//!
//! [`Pending`]: VerificationResult::Pending
//! [`Success`]: VerificationResult::Success
//! [`Failure`]: VerificationResult::Failure

use chrono::DateTime;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::ActaApiError;

/// Summary used for every transport-level failure.
pub const NETWORK_ERROR_MESSAGE: &str = "network error";
/// Summary used when the API rejected the request without saying why.
pub const REQUEST_FAILED_MESSAGE: &str = "request failed";
/// Summary used when a success response did not have the expected shape.
pub const UNEXPECTED_RESPONSE_MESSAGE: &str = "unexpected response";

/// Receipt of an issued credential, echoed verbatim from `body.data`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialReceipt {
    /// Address of the issuance contract.
    pub contract_id: String,
    /// Credential hash.
    pub hash: String,
    /// Ledger transaction. May be absent or empty.
    #[serde(default)]
    pub transaction_hash: Option<String>,
    pub ledger_sequence: u64,
    pub created_at: String,
}

impl CredentialReceipt {
    /// `created_at` reformatted for display.
    ///
    /// RFC 3339 input renders as `YYYY-MM-DD HH:MM:SS UTC`. Anything else is
    /// returned verbatim.
    pub fn display_created_at(&self) -> String {
        match DateTime::parse_from_rfc3339(&self.created_at) {
            Ok(ts) => ts
                .with_timezone(&chrono::Utc)
                .format("%Y-%m-%d %H:%M:%S UTC")
                .to_string(),
            Err(_) => self.created_at.clone(),
        }
    }

    /// The transaction hash, only when present and non-empty.
    pub fn transaction(&self) -> Option<&str> {
        self.transaction_hash
            .as_deref()
            .filter(|hash| !hash.is_empty())
    }
}

/// A failed attempt, rendered verbatim by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationFailure {
    /// Short human-readable summary.
    pub message: String,
    /// Diagnostic text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl VerificationFailure {
    pub fn new(message: impl Into<String>, details: Option<String>) -> Self {
        Self {
            message: message.into(),
            details,
        }
    }
}

impl From<ActaApiError> for VerificationFailure {
    fn from(err: ActaApiError) -> Self {
        match err {
            ActaApiError::Http { source, .. } => {
                Self::new(NETWORK_ERROR_MESSAGE, Some(source.to_string()))
            }
            ActaApiError::Rejected {
                message, details, ..
            } => Self::new(message, Some(details)),
            ActaApiError::Malformed { reason, .. } => {
                Self::new(UNEXPECTED_RESPONSE_MESSAGE, Some(reason))
            }
        }
    }
}

/// Observable state of a verification attempt.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum VerificationResult {
    /// Request in flight, or no attempt started yet.
    #[default]
    Pending,
    /// The credential was issued.
    #[serde(rename_all = "camelCase")]
    Success {
        receipt: CredentialReceipt,
        /// Block-explorer link, derived only from a non-empty transaction hash.
        #[serde(skip_serializing_if = "Option::is_none")]
        explorer_url: Option<Url>,
    },
    /// The attempt failed. Terminal; retrying starts a new attempt.
    Failure(VerificationFailure),
}

impl VerificationResult {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    pub fn is_terminal(&self) -> bool {
        !self.is_pending()
    }

    pub fn explorer_url(&self) -> Option<&Url> {
        match self {
            Self::Success { explorer_url, .. } => explorer_url.as_ref(),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&VerificationFailure> {
        match self {
            Self::Failure(failure) => Some(failure),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn receipt(created_at: &str, tx: Option<&str>) -> CredentialReceipt {
        CredentialReceipt {
            contract_id: "CCONTRACT".into(),
            hash: "h".into(),
            transaction_hash: tx.map(str::to_string),
            ledger_sequence: 42,
            created_at: created_at.into(),
        }
    }

    #[test]
    fn created_at_reformatted_when_rfc3339() {
        let r = receipt("2025-01-15T10:20:30.000Z", None);
        assert_eq!(r.display_created_at(), "2025-01-15 10:20:30 UTC");

        let offset = receipt("2025-01-15T12:20:30+02:00", None);
        assert_eq!(offset.display_created_at(), "2025-01-15 10:20:30 UTC");
    }

    #[test]
    fn created_at_verbatim_when_unparseable() {
        let r = receipt("yesterday", None);
        assert_eq!(r.display_created_at(), "yesterday");
    }

    #[test]
    fn empty_transaction_hash_counts_as_absent() {
        assert_eq!(receipt("x", Some("")).transaction(), None);
        assert_eq!(receipt("x", None).transaction(), None);
        assert_eq!(receipt("x", Some("abc")).transaction(), Some("abc"));
    }

    #[test]
    fn rejected_error_maps_to_failure_verbatim() {
        let failure = VerificationFailure::from(ActaApiError::Rejected {
            status: 500,
            message: "db down".into(),
            details: "HTTP 500".into(),
        });
        assert_eq!(failure.message, "db down");
        assert_eq!(failure.details.as_deref(), Some("HTTP 500"));
    }

    #[test]
    fn malformed_error_maps_to_generic_message() {
        let failure = VerificationFailure::from(ActaApiError::Malformed {
            status: 200,
            reason: "missing field `hash`".into(),
        });
        assert_eq!(failure.message, "unexpected response");
        assert_eq!(failure.details.as_deref(), Some("missing field `hash`"));
    }

    #[test]
    fn default_state_is_pending() {
        let state = VerificationResult::default();
        assert!(state.is_pending());
        assert!(!state.is_terminal());
        assert!(state.explorer_url().is_none());
    }

    #[test]
    fn serializes_with_state_tag() {
        let failure = VerificationResult::Failure(VerificationFailure::new("network error", None));
        let json = serde_json::to_value(&failure).unwrap();
        assert_eq!(json["state"], "failure");
        assert_eq!(json["message"], "network error");
        assert!(json.get("details").is_none());

        let pending = serde_json::to_value(VerificationResult::Pending).unwrap();
        assert_eq!(pending["state"], "pending");
    }
}
