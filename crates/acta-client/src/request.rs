//! # Credential Issuance Request
//!
//! The outbound payload for `POST {base}/credentials`. The remote API wants
//! the subject claims under `data` and a duplicate issuer/subject/expiry
//! envelope under `metadata`.
//!
//! The payload is a pure function of its build timestamp: [`demo`] takes
//! `issued_at` as an argument and reads no clock of its own.
//!
//! Outbound field names (`name`, `degree`, `university`) follow the most
//! recent demo page and are provisional until the remote contract is pinned.
//!
//! [`demo`]: CredentialIssuanceRequest::demo

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

/// Validity window of an issued demo credential: 365 days in milliseconds.
/// A fixed count, not a calendar year.
pub const VALIDITY_WINDOW_MS: i64 = 31_536_000_000;

pub const DEMO_HOLDER: &str = "Demo User";
pub const DEMO_ISSUER: &str = "ACTA";
pub const DEMO_CATEGORY: &str = "Identity";
pub const DEMO_DESCRIPTION: &str = "Demo credential issued from the ACTA demo page; no legal validity.";

/// Full request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CredentialIssuanceRequest {
    pub data: SubjectClaims,
    pub metadata: IssuanceMetadata,
}

/// Claims about the credential subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectClaims {
    /// Holder name.
    pub name: String,
    /// Credential category.
    pub degree: String,
    /// Issuing organization.
    pub university: String,
    pub description: String,
    #[serde(serialize_with = "iso_millis::serialize")]
    pub expires_at: DateTime<Utc>,
}

/// Envelope duplicating issuer, subject and expiry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssuanceMetadata {
    pub issuer: String,
    pub subject: String,
    #[serde(serialize_with = "iso_millis::serialize")]
    pub expiration_date: DateTime<Utc>,
}

impl CredentialIssuanceRequest {
    /// Build the demo-page request with the fixed demo identity.
    pub fn demo(issued_at: DateTime<Utc>) -> Self {
        let expires_at = issued_at + Duration::milliseconds(VALIDITY_WINDOW_MS);
        Self {
            data: SubjectClaims {
                name: DEMO_HOLDER.to_string(),
                degree: DEMO_CATEGORY.to_string(),
                university: DEMO_ISSUER.to_string(),
                description: DEMO_DESCRIPTION.to_string(),
                expires_at,
            },
            metadata: IssuanceMetadata {
                issuer: DEMO_ISSUER.to_string(),
                subject: DEMO_HOLDER.to_string(),
                expiration_date: expires_at,
            },
        }
    }

    /// Absolute expiry of the credential being requested.
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.data.expires_at
    }
}

/// RFC 3339 UTC with millisecond precision and a `Z` suffix, the shape
/// JavaScript's `Date.prototype.toISOString` produces.
mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::Serializer;

    pub fn serialize<S: Serializer>(ts: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Millis, true))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use proptest::prelude::*;

    fn at(ms: i64) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(ms).unwrap()
    }

    #[test]
    fn demo_request_carries_fixed_identity() {
        let req = CredentialIssuanceRequest::demo(at(0));
        assert_eq!(req.data.name, "Demo User");
        assert_eq!(req.data.university, "ACTA");
        assert_eq!(req.data.degree, "Identity");
        assert_eq!(req.metadata.issuer, "ACTA");
        assert_eq!(req.metadata.subject, "Demo User");
        assert_eq!(req.metadata.expiration_date, req.data.expires_at);
    }

    #[test]
    fn expiry_is_a_fixed_window_not_a_calendar_year() {
        // 2024 is a leap year: 365 days after Jan 1 is Dec 31, not Jan 1 2025.
        let issued = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let req = CredentialIssuanceRequest::demo(issued);
        assert_eq!(
            req.expires_at(),
            Utc.with_ymd_and_hms(2024, 12, 31, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn wire_shape_uses_camel_case_and_iso_millis() {
        let issued = Utc.with_ymd_and_hms(2025, 3, 1, 12, 30, 0).unwrap();
        let json = serde_json::to_value(CredentialIssuanceRequest::demo(issued)).unwrap();

        assert_eq!(json["data"]["name"], "Demo User");
        assert_eq!(json["data"]["degree"], "Identity");
        assert_eq!(json["data"]["university"], "ACTA");
        assert_eq!(json["data"]["expiresAt"], "2026-03-01T12:30:00.000Z");
        assert_eq!(json["metadata"]["expirationDate"], "2026-03-01T12:30:00.000Z");
        assert_eq!(json["metadata"]["issuer"], "ACTA");
        assert!(json["data"].get("expires_at").is_none());
    }

    #[test]
    fn same_timestamp_builds_identical_payloads() {
        let issued = at(1_700_000_000_123);
        let a = serde_json::to_string(&CredentialIssuanceRequest::demo(issued)).unwrap();
        let b = serde_json::to_string(&CredentialIssuanceRequest::demo(issued)).unwrap();
        assert_eq!(a, b);
    }

    proptest! {
        #[test]
        fn expiry_is_exactly_issue_time_plus_window(ms in 0i64..4_102_444_800_000) {
            let req = CredentialIssuanceRequest::demo(at(ms));
            prop_assert_eq!(req.expires_at().timestamp_millis(), ms + 31_536_000_000);
        }
    }
}
