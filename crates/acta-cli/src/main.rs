//! # acta CLI entry point
//!
//! Parses command-line arguments, resolves configuration from the
//! environment plus flag overrides, and dispatches to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use url::Url;

use acta_cli::card::{run_card, CardArgs};
use acta_cli::verify::{run_verify, VerifyArgs};
use acta_cli::waitlist::{run_waitlist, WaitlistArgs};
use acta_client::ActaConfig;

/// Acta demo front-end.
///
/// Verifies a demo credential against the Acta credential-issuance API,
/// submits waitlist sign-ups, and prints the demo credential card.
#[derive(Parser, Debug)]
#[command(name = "acta", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// API base URL. Overrides ACTA_API_URL and NEXT_PUBLIC_ACTA_API_URL.
    #[arg(long, global = true)]
    api_url: Option<Url>,

    /// Network name used in explorer links. Overrides ACTA_NETWORK.
    #[arg(long, global = true)]
    network: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Issue the demo credential and show the verification result.
    Verify(VerifyArgs),

    /// Join the waitlist.
    Waitlist(WaitlistArgs),

    /// Print the demo credential card.
    Card(CardArgs),
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("acta CLI v{} starting", env!("CARGO_PKG_VERSION"));

    let config = match ActaConfig::from_env() {
        Ok(config) => acta_cli::apply_overrides(config, cli.api_url, cli.network),
        Err(e) => {
            tracing::error!("{e}");
            return ExitCode::from(1);
        }
    };

    tracing::debug!(
        api = %config.api_base_url,
        network = %config.network,
        public_hosting = config.uses_public_hosting(),
        "resolved configuration"
    );

    let result = match cli.command {
        Commands::Verify(args) => run_verify(&args, config).await,
        Commands::Waitlist(args) => run_waitlist(&args, config).await,
        Commands::Card(args) => run_card(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parse_verify() {
        let cli = Cli::try_parse_from(["acta", "verify"]).unwrap();
        assert!(matches!(cli.command, Commands::Verify(ref a) if !a.json));
        assert!(cli.api_url.is_none());
    }

    #[test]
    fn cli_parse_global_overrides_after_subcommand() {
        let cli = Cli::try_parse_from([
            "acta",
            "verify",
            "--json",
            "--api-url",
            "https://api.acta.build",
            "--network",
            "mainnet",
            "-vv",
        ])
        .unwrap();
        assert!(matches!(cli.command, Commands::Verify(ref a) if a.json));
        assert_eq!(
            cli.api_url.as_ref().and_then(|u| u.host_str()),
            Some("api.acta.build")
        );
        assert_eq!(cli.network.as_deref(), Some("mainnet"));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn cli_parse_waitlist_requires_email() {
        assert!(Cli::try_parse_from(["acta", "waitlist"]).is_err());
        let cli =
            Cli::try_parse_from(["acta", "waitlist", "--email", "ada@example.com"]).unwrap();
        match cli.command {
            Commands::Waitlist(args) => {
                assert_eq!(args.email, "ada@example.com");
                assert!(args.company.is_empty());
            }
            other => panic!("expected waitlist, got {other:?}"),
        }
    }

    #[test]
    fn cli_rejects_invalid_api_url() {
        assert!(Cli::try_parse_from(["acta", "--api-url", "not a url", "card"]).is_err());
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
