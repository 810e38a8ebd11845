//! # Response Interpretation
//!
//! Turns one HTTP outcome of `POST /credentials` into a
//! [`VerificationResult`]. The mapping is a pure function of the status,
//! the body bytes and the configuration.
//!
//! ## Decision Table
//!
//! | Outcome | Result |
//! |---------|--------|
//! | no response | `Failure("network error", <transport error>)` |
//! | non-2xx, JSON with `message`/`error` | `Failure(<field>, <details>)` |
//! | non-2xx, no usable JSON | `Failure("request failed", <details>)` |
//! | 2xx, `{success, data}` | `Success(data)` + explorer link |
//! | 2xx, any other shape | `Failure("unexpected response", <reason>)` |
//!
//! `<details>` is the body's own `details` when given, else the
//! public-hosting hint when the base URL points at the shared deployment,
//! else `HTTP <status>`.

use serde::Deserialize;
use serde_json::Value;

use crate::client::RawResponse;
use crate::config::ActaConfig;
use crate::error::ActaApiError;
use crate::explorer::explorer_url;
use crate::result::{CredentialReceipt, VerificationResult, REQUEST_FAILED_MESSAGE};

/// Synthesized `details` for failures against the shared public deployment.
pub const PUBLIC_HOSTING_HINT: &str = "The public Acta deployment has no backend storage \
configured and cannot persist credentials. Point ACTA_API_URL at an Acta API instance \
with storage configured.";

/// Expected success body.
#[derive(Debug, Deserialize)]
struct IssuanceEnvelope {
    #[serde(default)]
    success: Option<bool>,
    #[serde(default)]
    data: Option<CredentialReceipt>,
}

/// Fold a transport outcome into the final state of an attempt.
pub fn resolve(
    outcome: Result<RawResponse, ActaApiError>,
    config: &ActaConfig,
) -> VerificationResult {
    match outcome.and_then(|resp| interpret(&resp, config)) {
        Ok(receipt) => {
            let explorer_url = receipt
                .transaction()
                .and_then(|tx| explorer_url(&config.network, tx));
            VerificationResult::Success {
                receipt,
                explorer_url,
            }
        }
        Err(err) => VerificationResult::Failure(err.into()),
    }
}

/// Interpret a received HTTP response.
pub fn interpret(
    response: &RawResponse,
    config: &ActaConfig,
) -> Result<CredentialReceipt, ActaApiError> {
    let status = response.status;
    if !(200..300).contains(&status) {
        return Err(rejection(status, &response.body, config));
    }

    let envelope: IssuanceEnvelope =
        serde_json::from_slice(&response.body).map_err(|e| ActaApiError::Malformed {
            status,
            reason: format!("response body did not match the issuance envelope: {e}"),
        })?;

    if envelope.success == Some(false) {
        return Err(rejection(status, &response.body, config));
    }

    envelope.data.ok_or_else(|| ActaApiError::Malformed {
        status,
        reason: "response body has no `data` object".to_string(),
    })
}

/// Build the rejection for a response that signaled failure.
fn rejection(status: u16, body: &[u8], config: &ActaConfig) -> ActaApiError {
    let json: Option<Value> = serde_json::from_slice(body).ok();
    let field = |name: &str| {
        json.as_ref()
            .and_then(|v| v.get(name))
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    };

    let message = field("message")
        .or_else(|| field("error"))
        .unwrap_or_else(|| REQUEST_FAILED_MESSAGE.to_string());

    let details = field("details").unwrap_or_else(|| {
        if config.uses_public_hosting() {
            PUBLIC_HOSTING_HINT.to_string()
        } else {
            format!("HTTP {status}")
        }
    });

    ActaApiError::Rejected {
        status,
        message,
        details,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::VerificationFailure;

    fn config(base: &str) -> ActaConfig {
        ActaConfig {
            api_base_url: base.parse().unwrap(),
            network: "testnet".into(),
            waitlist_endpoint: "http://127.0.0.1:9/form".parse().unwrap(),
            timeout_secs: None,
        }
    }

    fn local() -> ActaConfig {
        config("http://localhost:8000")
    }

    fn public() -> ActaConfig {
        config("https://acta-api.vercel.app")
    }

    fn raw(status: u16, body: &str) -> RawResponse {
        RawResponse {
            status,
            body: body.as_bytes().to_vec(),
        }
    }

    fn failure(result: VerificationResult) -> VerificationFailure {
        match result {
            VerificationResult::Failure(f) => f,
            other => panic!("expected failure, got {other:?}"),
        }
    }

    #[test]
    fn error_field_becomes_message() {
        let f = failure(resolve(Ok(raw(500, r#"{"error":"db down"}"#)), &local()));
        assert_eq!(f.message, "db down");
        assert_eq!(f.details.as_deref(), Some("HTTP 500"));
    }

    #[test]
    fn message_field_preferred_over_error() {
        let body = r#"{"message":"quota exceeded","error":"Forbidden"}"#;
        let f = failure(resolve(Ok(raw(403, body)), &local()));
        assert_eq!(f.message, "quota exceeded");
    }

    #[test]
    fn explicit_details_are_kept_even_on_public_hosting() {
        let body = r#"{"error":"db down","details":"connection pool exhausted"}"#;
        let f = failure(resolve(Ok(raw(500, body)), &public()));
        assert_eq!(f.details.as_deref(), Some("connection pool exhausted"));
    }

    #[test]
    fn public_hosting_hint_replaces_status_when_no_details() {
        let f = failure(resolve(Ok(raw(500, r#"{"error":"db down"}"#)), &public()));
        assert_eq!(f.message, "db down");
        assert_eq!(f.details.as_deref(), Some(PUBLIC_HOSTING_HINT));
    }

    #[test]
    fn unparseable_body_is_request_failed_with_status() {
        let f = failure(resolve(Ok(raw(502, "<html>Bad Gateway</html>")), &local()));
        assert_eq!(f.message, "request failed");
        assert_eq!(f.details.as_deref(), Some("HTTP 502"));
    }

    #[test]
    fn unparseable_body_on_public_hosting_gets_hint() {
        let f = failure(resolve(Ok(raw(500, "Internal Server Error")), &public()));
        assert_eq!(f.message, "request failed");
        assert_eq!(f.details.as_deref(), Some(PUBLIC_HOSTING_HINT));
        assert_ne!(f.details.as_deref(), Some("HTTP 500"));
    }

    #[test]
    fn json_without_message_fields_is_request_failed() {
        let f = failure(resolve(Ok(raw(400, r#"{"error":{"code":7}}"#)), &local()));
        assert_eq!(f.message, "request failed");
        assert_eq!(f.details.as_deref(), Some("HTTP 400"));
    }

    #[test]
    fn success_derives_explorer_url() {
        let body = r#"{"success":true,"data":{"contractId":"CABC","hash":"h1",
            "transactionHash":"abc123","ledgerSequence":981,"createdAt":"2025-01-15T10:00:00Z"}}"#;
        let result = resolve(Ok(raw(200, body)), &local());
        let url = result.explorer_url().expect("explorer url");
        assert!(url.as_str().contains("abc123"));
        assert!(url.as_str().contains("testnet"));
        match result {
            VerificationResult::Success { receipt, .. } => {
                assert_eq!(receipt.contract_id, "CABC");
                assert_eq!(receipt.ledger_sequence, 981);
            }
            other => panic!("expected success, got {other:?}"),
        }
    }

    #[test]
    fn success_without_transaction_hash_has_no_explorer_url() {
        let absent = r#"{"success":true,"data":{"contractId":"C","hash":"h",
            "ledgerSequence":1,"createdAt":"2025-01-15T10:00:00Z"}}"#;
        let empty = r#"{"success":true,"data":{"contractId":"C","hash":"h",
            "transactionHash":"","ledgerSequence":1,"createdAt":"2025-01-15T10:00:00Z"}}"#;
        for body in [absent, empty] {
            let result = resolve(Ok(raw(201, body)), &local());
            assert!(matches!(result, VerificationResult::Success { .. }));
            assert_eq!(result.explorer_url(), None);
        }
    }

    #[test]
    fn success_status_with_wrong_shape_is_malformed_not_panic() {
        let f = failure(resolve(Ok(raw(200, r#"{"data":{"hash":7}}"#)), &local()));
        assert_eq!(f.message, "unexpected response");

        let f = failure(resolve(Ok(raw(200, "OK")), &local()));
        assert_eq!(f.message, "unexpected response");

        let f = failure(resolve(Ok(raw(200, r#"{"success":true}"#)), &local()));
        assert_eq!(f.message, "unexpected response");
        assert!(f.details.unwrap().contains("data"));
    }

    #[test]
    fn success_status_with_false_flag_is_a_rejection() {
        let body = r#"{"success":false,"error":"duplicate credential"}"#;
        let f = failure(resolve(Ok(raw(200, body)), &local()));
        assert_eq!(f.message, "duplicate credential");
        assert_eq!(f.details.as_deref(), Some("HTTP 200"));
    }
}
