//! # acta-client: Typed client for the Acta credential-issuance API
//!
//! Drives the demo verification flow: build a demo credential issuance
//! request, send it to `POST {base}/credentials`, and fold the outcome into
//! a tri-state [`VerificationResult`] that a presentation layer renders.
//!
//! ## Modules
//!
//! | Module | Concern |
//! |--------|---------|
//! | [`config`] | Environment configuration with fallback order |
//! | [`request`] | Outbound [`CredentialIssuanceRequest`] payload |
//! | [`response`] | Wire shapes and the response decision table |
//! | [`result`] | [`VerificationResult`] tagged union |
//! | [`explorer`] | Block-explorer deep links |
//! | [`client`] | reqwest-backed [`ActaClient`] |
//! | [`controller`] | [`VerificationController`] state machine |
//! | [`waitlist`] | Waitlist form submission |
//! | [`card`] | Static demo credential card |
//!
//! ## Error Model
//!
//! Nothing in the verification path propagates as an error to the caller.
//! Transport failures, remote rejections and malformed responses all end
//! up in [`VerificationResult::Failure`]. Only configuration loading and
//! waitlist submission return `Result`.

pub mod card;
pub mod client;
pub mod config;
pub mod controller;
pub mod error;
pub mod explorer;
pub mod request;
pub mod response;
pub mod result;
pub mod waitlist;

pub use card::{CardField, DemoCard, FrontFields};
pub use client::{ActaClient, RawResponse};
pub use config::ActaConfig;
pub use controller::{AttemptOutcome, VerificationController};
pub use error::{ActaApiError, ConfigError, WaitlistError};
pub use request::CredentialIssuanceRequest;
pub use result::{CredentialReceipt, VerificationFailure, VerificationResult};
pub use waitlist::{WaitlistClient, WaitlistStatus, WaitlistSubmission};
