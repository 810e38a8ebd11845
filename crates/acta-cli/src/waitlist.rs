//! `acta waitlist`: submit a waitlist sign-up.

use anyhow::Context;
use clap::Args;

use acta_client::{ActaClient, ActaConfig, WaitlistError, WaitlistStatus, WaitlistSubmission};

#[derive(Args, Debug)]
pub struct WaitlistArgs {
    /// Contact email address.
    #[arg(long)]
    pub email: String,

    /// Company name.
    #[arg(long, default_value = "")]
    pub company: String,

    /// Free-text description of the use case.
    #[arg(long, default_value = "")]
    pub message: String,

    /// Page reported as the submission origin.
    #[arg(long, default_value = "")]
    pub page: String,
}

impl From<&WaitlistArgs> for WaitlistSubmission {
    fn from(args: &WaitlistArgs) -> Self {
        Self {
            email: args.email.clone(),
            company: args.company.clone(),
            message: args.message.clone(),
            honeypot: String::new(),
            page: args.page.clone(),
        }
    }
}

pub async fn run_waitlist(args: &WaitlistArgs, config: ActaConfig) -> anyhow::Result<u8> {
    let client = ActaClient::new(config).context("building Acta client")?;
    let submission = WaitlistSubmission::from(args);

    match client.waitlist().submit(&submission).await {
        Ok(WaitlistStatus::Accepted) => {
            println!("Thank you! We will contact you soon.");
            Ok(0)
        }
        Ok(WaitlistStatus::Ignored) => Ok(0),
        Err(WaitlistError::InvalidEmail(_)) => {
            eprintln!("Something went wrong. Please check your email and try again.");
            Ok(2)
        }
        Err(e) => Err(e).context("waitlist submission failed"),
    }
}
