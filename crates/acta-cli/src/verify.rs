//! `acta verify`: run one demo verification.

use anyhow::Context;
use clap::Args;

use acta_client::{ActaClient, ActaConfig, VerificationController, VerificationResult};

use crate::render::{render_result, PROCESSING};

#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Print the result as JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Trigger a verification, wait for its terminal state, and print it.
///
/// Returns exit code 0 on success and 1 on a failed verification.
pub async fn run_verify(args: &VerifyArgs, config: ActaConfig) -> anyhow::Result<u8> {
    let network = config.network.clone();
    let client = ActaClient::new(config).context("building Acta client")?;
    let controller = VerificationController::new(client);
    let mut updates = controller.subscribe();

    if !controller.start_verification() {
        anyhow::bail!("verification could not be started");
    }
    if !args.json {
        eprintln!("{PROCESSING}");
    }

    let result = updates
        .wait_for(VerificationResult::is_terminal)
        .await
        .context("verification state channel closed")?
        .clone();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", render_result(&result, &network));
    }

    Ok(match result {
        VerificationResult::Success { .. } => 0,
        _ => 1,
    })
}
