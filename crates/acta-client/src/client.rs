//! # Acta HTTP Client
//!
//! Wraps a `reqwest::Client` configured for the Acta API: cookie store on
//! (requests carry session credentials), JSON bodies, and the optional
//! transport timeout from [`ActaConfig`].
//!
//! ## Retry
//!
//! None. A failed attempt is terminal and the caller decides whether to
//! start another one.

use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::config::ActaConfig;
use crate::error::{ActaApiError, ConfigError};
use crate::request::CredentialIssuanceRequest;
use crate::response;
use crate::result::VerificationResult;
use crate::waitlist::WaitlistClient;

/// Status and body of a received HTTP response, before interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// Client for the Acta credential-issuance API.
///
/// Cheap to clone; clones share the connection pool and cookie store.
#[derive(Debug, Clone)]
pub struct ActaClient {
    http: reqwest::Client,
    config: ActaConfig,
}

impl ActaClient {
    /// Build a client from configuration.
    pub fn new(config: ActaConfig) -> Result<Self, ConfigError> {
        let mut builder = reqwest::Client::builder()
            .cookie_store(true)
            .user_agent(concat!("acta-client/", env!("CARGO_PKG_VERSION")));
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder.build().map_err(ConfigError::HttpClient)?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ActaConfig {
        &self.config
    }

    /// Waitlist submission through the same connection pool.
    pub fn waitlist(&self) -> WaitlistClient<'_> {
        WaitlistClient::new(&self.http, &self.config.waitlist_endpoint)
    }

    /// `POST {base}/credentials` with `request` as the JSON body.
    ///
    /// Only a missing response is an error here. Failure statuses come back
    /// as a [`RawResponse`] for [`response::interpret`] to classify.
    pub async fn issue_credential(
        &self,
        request: &CredentialIssuanceRequest,
    ) -> Result<RawResponse, ActaApiError> {
        let endpoint = self.config.credentials_url();
        tracing::debug!(%endpoint, expires_at = %request.expires_at(), "issuing credential");

        let resp = self
            .http
            .post(&endpoint)
            .json(request)
            .send()
            .await
            .map_err(|source| ActaApiError::Http {
                endpoint: endpoint.clone(),
                source,
            })?;

        let status = resp.status().as_u16();
        let body = resp
            .bytes()
            .await
            .map_err(|source| ActaApiError::Http { endpoint, source })?;

        tracing::debug!(status, body_len = body.len(), "credential issuance responded");
        Ok(RawResponse {
            status,
            body: body.to_vec(),
        })
    }

    /// Issue the demo credential built at `issued_at` and interpret the
    /// outcome. Never fails: every error becomes a `Failure` state.
    pub async fn verify_demo_credential(&self, issued_at: DateTime<Utc>) -> VerificationResult {
        let request = CredentialIssuanceRequest::demo(issued_at);
        let outcome = self.issue_credential(&request).await;
        response::resolve(outcome, &self.config)
    }
}
