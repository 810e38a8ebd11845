//! # Environment Configuration
//!
//! Resolves [`ActaConfig`] from environment variables. Every setting has a
//! fixed fallback order and a default, so an empty environment yields a
//! working local-development configuration.
//!
//! | Setting | Variables (first non-empty wins) | Default |
//! |---------|----------------------------------|---------|
//! | API base URL | `ACTA_API_URL`, `NEXT_PUBLIC_ACTA_API_URL` | `http://localhost:8000` |
//! | Explorer network | `ACTA_NETWORK` | `testnet` |
//! | Waitlist endpoint | `ACTA_WAITLIST_ENDPOINT` | Formspree form |
//! | HTTP timeout (s) | `ACTA_HTTP_TIMEOUT_SECS` | none |

use url::Url;

use crate::error::ConfigError;

/// Primary variable for the API base URL.
pub const API_URL_VAR: &str = "ACTA_API_URL";
/// Legacy alias kept from the web front-end build.
pub const LEGACY_API_URL_VAR: &str = "NEXT_PUBLIC_ACTA_API_URL";
pub const NETWORK_VAR: &str = "ACTA_NETWORK";
pub const WAITLIST_ENDPOINT_VAR: &str = "ACTA_WAITLIST_ENDPOINT";
pub const TIMEOUT_VAR: &str = "ACTA_HTTP_TIMEOUT_SECS";

pub const DEFAULT_API_URL: &str = "http://localhost:8000";
pub const DEFAULT_NETWORK: &str = "testnet";
pub const DEFAULT_WAITLIST_ENDPOINT: &str = "https://formspree.io/f/mzzawvnn";

/// Host suffix of the shared public deployment. That deployment has no
/// backend storage configured, so writes against it fail.
pub const PUBLIC_HOSTING_SUFFIX: &str = ".vercel.app";

/// Resolved client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActaConfig {
    /// Base URL of the credential-issuance API. `/credentials` is appended.
    pub api_base_url: Url,
    /// Network name interpolated into explorer links (e.g. `testnet`).
    pub network: String,
    /// Third-party form endpoint receiving waitlist entries.
    pub waitlist_endpoint: Url,
    /// Transport-level timeout. `None` leaves reqwest's default behavior.
    pub timeout_secs: Option<u64>,
}

impl ActaConfig {
    /// Resolve configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Resolve configuration through an arbitrary variable lookup.
    ///
    /// Empty and whitespace-only values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| {
            lookup(var)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let (api_var, api_raw) = match (get(API_URL_VAR), get(LEGACY_API_URL_VAR)) {
            (Some(v), _) => (API_URL_VAR, v),
            (None, Some(v)) => (LEGACY_API_URL_VAR, v),
            (None, None) => (API_URL_VAR, DEFAULT_API_URL.to_string()),
        };
        let api_base_url = parse_http_url(api_var, &api_raw)?;

        let waitlist_raw =
            get(WAITLIST_ENDPOINT_VAR).unwrap_or_else(|| DEFAULT_WAITLIST_ENDPOINT.to_string());
        let waitlist_endpoint = parse_http_url(WAITLIST_ENDPOINT_VAR, &waitlist_raw)?;

        let network = get(NETWORK_VAR).unwrap_or_else(|| DEFAULT_NETWORK.to_string());

        let timeout_secs = match get(TIMEOUT_VAR) {
            Some(raw) => Some(raw.parse::<u64>().map_err(|_| ConfigError::InvalidNumber {
                var: TIMEOUT_VAR,
                value: raw.clone(),
            })?),
            None => None,
        };

        Ok(Self {
            api_base_url,
            network,
            waitlist_endpoint,
            timeout_secs,
        })
    }

    /// Full URL of the credential issuance endpoint.
    ///
    /// Appends to the base path rather than resolving against it, so a base
    /// of `https://host/api` yields `https://host/api/credentials`.
    pub fn credentials_url(&self) -> String {
        format!(
            "{}/credentials",
            self.api_base_url.as_str().trim_end_matches('/')
        )
    }

    /// Whether the API base points at the shared public deployment.
    pub fn uses_public_hosting(&self) -> bool {
        self.api_base_url
            .host_str()
            .map(|host| host.to_ascii_lowercase().ends_with(PUBLIC_HOSTING_SUFFIX))
            .unwrap_or(false)
    }
}

fn parse_http_url(var: &'static str, raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw).map_err(|source| ConfigError::InvalidUrl { var, source })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::UnsupportedScheme {
            var,
            scheme: other.to_string(),
        }),
    }
}
