//! # acta-cli: Command-line front-end for the Acta demo
//!
//! The presentation layer over [`acta_client`]. It consumes only the
//! verification trigger and the [`VerificationResult`] union, and renders
//! them as text.
//!
//! ## Subcommands
//!
//! - `acta verify`: run one demo verification and print the outcome.
//! - `acta waitlist`: submit a waitlist sign-up.
//! - `acta card`: print the demo credential card.
//!
//! ```bash
//! ACTA_API_URL=https://api.acta.build acta verify
//! acta --network mainnet verify --json
//! acta waitlist --email ada@example.com --company "Analytical Engines"
//! ```
//!
//! [`VerificationResult`]: acta_client::VerificationResult

pub mod card;
pub mod render;
pub mod verify;
pub mod waitlist;

use acta_client::ActaConfig;
use url::Url;

/// Apply command-line overrides on top of the environment configuration.
pub fn apply_overrides(
    mut config: ActaConfig,
    api_url: Option<Url>,
    network: Option<String>,
) -> ActaConfig {
    if let Some(url) = api_url {
        config.api_base_url = url;
    }
    if let Some(network) = network.filter(|n| !n.trim().is_empty()) {
        config.network = network;
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> ActaConfig {
        ActaConfig::from_lookup(|_| None).unwrap()
    }

    #[test]
    fn overrides_replace_environment_values() {
        let config = apply_overrides(
            base(),
            Some("https://api.acta.build".parse().unwrap()),
            Some("mainnet".into()),
        );
        assert_eq!(config.api_base_url.host_str(), Some("api.acta.build"));
        assert_eq!(config.network, "mainnet");
    }

    #[test]
    fn absent_or_blank_overrides_keep_environment_values() {
        let config = apply_overrides(base(), None, Some("  ".into()));
        assert_eq!(config, base());
    }
}
