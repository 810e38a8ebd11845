//! # Waitlist Submission
//!
//! Posts waitlist sign-ups to the third-party form endpoint. The endpoint is
//! a black box: any 2xx counts as accepted.
//!
//! Two checks run before any request is made. A filled honeypot field marks
//! the submission as automated and it is dropped silently, reported to the
//! caller as [`WaitlistStatus::Ignored`]. An email address that fails
//! [`validate_email`] is rejected with [`WaitlistError::InvalidEmail`].

use serde::Serialize;
use url::Url;

use crate::error::WaitlistError;

/// Subject line attached to every sign-up.
pub const WAITLIST_SUBJECT: &str = "New waitlist signup · Acta";

/// A waitlist sign-up as entered in the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WaitlistSubmission {
    pub email: String,
    pub company: String,
    pub message: String,
    /// Hidden field humans leave empty.
    pub honeypot: String,
    /// Page the form was submitted from.
    pub page: String,
}

impl WaitlistSubmission {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            ..Self::default()
        }
    }
}

/// Outcome of a submission that did not error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitlistStatus {
    /// The form endpoint accepted the entry.
    Accepted,
    /// Honeypot was filled; nothing was sent.
    Ignored,
}

/// Form endpoint body. Field names are the ones the form service expects.
#[derive(Debug, Serialize)]
struct FormBody<'a> {
    email: &'a str,
    company: &'a str,
    message: &'a str,
    #[serde(rename = "_gotcha")]
    gotcha: &'a str,
    #[serde(rename = "_subject")]
    subject: &'a str,
    page: &'a str,
}

/// Check the shape `local@domain.tld`: no whitespace anywhere, exactly one
/// `@`, and a `.` inside the domain with characters on both sides.
pub fn validate_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    // Some dot must split the domain into two non-empty halves.
    domain
        .char_indices()
        .filter(|&(_, c)| c == '.')
        .any(|(i, _)| i > 0 && i + 1 < domain.len())
}

/// Submits waitlist entries. Borrowed from an [`ActaClient`] via
/// [`ActaClient::waitlist`].
///
/// [`ActaClient`]: crate::client::ActaClient
/// [`ActaClient::waitlist`]: crate::client::ActaClient::waitlist
#[derive(Debug, Clone, Copy)]
pub struct WaitlistClient<'a> {
    http: &'a reqwest::Client,
    endpoint: &'a Url,
}

impl<'a> WaitlistClient<'a> {
    pub fn new(http: &'a reqwest::Client, endpoint: &'a Url) -> Self {
        Self { http, endpoint }
    }

    pub async fn submit(
        &self,
        submission: &WaitlistSubmission,
    ) -> Result<WaitlistStatus, WaitlistError> {
        if !submission.honeypot.is_empty() {
            tracing::debug!("waitlist honeypot filled; dropping submission");
            return Ok(WaitlistStatus::Ignored);
        }
        let email = submission.email.trim();
        if !validate_email(email) {
            return Err(WaitlistError::InvalidEmail(submission.email.clone()));
        }

        let body = FormBody {
            email,
            company: submission.company.trim(),
            message: submission.message.trim(),
            gotcha: &submission.honeypot,
            subject: WAITLIST_SUBJECT,
            page: &submission.page,
        };

        let resp = self
            .http
            .post(self.endpoint.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|source| WaitlistError::Http {
                endpoint: self.endpoint.to_string(),
                source,
            })?;

        let status = resp.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "waitlist submission rejected");
            return Err(WaitlistError::Rejected {
                status: status.as_u16(),
            });
        }

        tracing::info!("waitlist submission accepted");
        Ok(WaitlistStatus::Accepted)
    }
}
