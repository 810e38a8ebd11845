//! Acta client error types.
//!
//! [`ActaApiError`] mirrors the three ways a verification attempt can go
//! wrong. It never reaches the presentation layer directly: the controller
//! folds it into [`VerificationFailure`](crate::result::VerificationFailure)
//! through the `From` impl in [`crate::result`].

/// Errors from calls to the Acta credential-issuance API.
#[derive(Debug, thiserror::Error)]
pub enum ActaApiError {
    /// No HTTP response was obtained (DNS, connection refused, timeout).
    #[error("HTTP error calling {endpoint}: {source}")]
    Http {
        endpoint: String,
        source: reqwest::Error,
    },
    /// The API answered with a failure status.
    #[error("Acta API returned {status}: {message}")]
    Rejected {
        status: u16,
        message: String,
        details: String,
    },
    /// The API answered with a success status but the body did not have
    /// the expected shape.
    #[error("malformed response from Acta API ({status}): {reason}")]
    Malformed { status: u16, reason: String },
}

/// Errors resolving [`ActaConfig`](crate::config::ActaConfig) from the
/// environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A URL-valued variable did not parse.
    #[error("invalid URL in {var}: {source}")]
    InvalidUrl {
        var: &'static str,
        source: url::ParseError,
    },
    /// A URL-valued variable parsed but uses a scheme other than http(s).
    #[error("unsupported URL scheme in {var}: {scheme}")]
    UnsupportedScheme { var: &'static str, scheme: String },
    /// A numeric variable did not parse.
    #[error("invalid number in {var}: {value}")]
    InvalidNumber { var: &'static str, value: String },
    /// The underlying HTTP client could not be built.
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
}

/// Errors from waitlist submission.
#[derive(Debug, thiserror::Error)]
pub enum WaitlistError {
    /// The email address failed client-side validation. No request was sent.
    #[error("invalid email address: {0:?}")]
    InvalidEmail(String),
    /// The form endpoint could not be reached.
    #[error("HTTP error calling {endpoint}: {source}")]
    Http {
        endpoint: String,
        source: reqwest::Error,
    },
    /// The form endpoint answered with a non-2xx status.
    #[error("waitlist submission rejected with HTTP {status}")]
    Rejected { status: u16 },
}
