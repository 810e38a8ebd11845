//! # Verification Controller
//!
//! State machine owning the lifecycle of demo verification attempts:
//!
//! ```text
//!   Pending (not started) ──start──▶ Pending (in flight) ──▶ Success | Failure
//!            ▲                                                    │
//!            └──────────────────── start / dismiss ◀──────────────┘
//! ```
//!
//! ## Invariants
//!
//! - At most one request in flight per controller. A trigger while one is
//!   pending issues no network call.
//! - The reset to `Pending` is published before the request is sent, so a
//!   previous attempt's result is never visible during a new attempt.
//! - Each attempt captures a generation number. Its result is applied only
//!   if the generation still matches on return; [`dismiss`] bumps the
//!   generation, so a late response cannot resurrect a closed view.
//! - Dismissal does not abort the request. The in-flight slot stays taken
//!   until the abandoned request returns.
//!
//! The flight lock is a `parking_lot::Mutex` and is never held across an
//! `.await`. State is published through a `tokio::sync::watch` channel.
//!
//! [`dismiss`]: VerificationController::dismiss

use std::sync::Arc;

use chrono::Utc;
use parking_lot::Mutex;
use tokio::sync::watch;

use crate::client::ActaClient;
use crate::result::VerificationResult;

/// What happened to one call of [`VerificationController::verify`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttemptOutcome {
    /// The attempt completed and its result is now the current state.
    Applied(VerificationResult),
    /// Another attempt was already in flight; nothing was sent.
    AlreadyInFlight,
    /// The attempt completed after a dismissal or a newer attempt; its
    /// result was dropped.
    Discarded,
}

#[derive(Debug, Default)]
struct Flight {
    generation: u64,
    in_flight: bool,
}

/// Releases the in-flight slot if an attempt future is dropped before
/// completing.
struct FlightGuard<'a> {
    flight: &'a Mutex<Flight>,
    armed: bool,
}

impl Drop for FlightGuard<'_> {
    fn drop(&mut self) {
        if self.armed {
            self.flight.lock().in_flight = false;
        }
    }
}

/// Drives verification attempts against one [`ActaClient`].
///
/// Clones share state: every clone sees the same in-flight slot,
/// generation and published result.
#[derive(Clone)]
pub struct VerificationController {
    client: ActaClient,
    flight: Arc<Mutex<Flight>>,
    state: Arc<watch::Sender<VerificationResult>>,
}

impl VerificationController {
    pub fn new(client: ActaClient) -> Self {
        let (state, _) = watch::channel(VerificationResult::Pending);
        Self {
            client,
            flight: Arc::new(Mutex::new(Flight::default())),
            state: Arc::new(state),
        }
    }

    pub fn client(&self) -> &ActaClient {
        &self.client
    }

    /// Snapshot of the current state.
    pub fn result(&self) -> VerificationResult {
        self.state.borrow().clone()
    }

    /// Receiver notified on every state change.
    pub fn subscribe(&self) -> watch::Receiver<VerificationResult> {
        self.state.subscribe()
    }

    pub fn is_in_flight(&self) -> bool {
        self.flight.lock().in_flight
    }

    /// Fire-and-forget trigger.
    ///
    /// Spawns the attempt on the current tokio runtime and returns `true`,
    /// or returns `false` without sending anything when an attempt is
    /// already in flight or no runtime is available. The state is `Pending`
    /// by the time this returns `true`.
    pub fn start_verification(&self) -> bool {
        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            tracing::warn!("no async runtime available; verification not started");
            return false;
        };
        let Some(generation) = self.begin_attempt() else {
            return false;
        };
        let this = self.clone();
        runtime.spawn(async move {
            this.run_attempt(generation).await;
        });
        true
    }

    /// Run one attempt inline and report what became of it.
    pub async fn verify(&self) -> AttemptOutcome {
        match self.begin_attempt() {
            Some(generation) => self.run_attempt(generation).await,
            None => AttemptOutcome::AlreadyInFlight,
        }
    }

    /// Close the hosting view.
    ///
    /// Resets the state to `Pending` and invalidates any in-flight attempt
    /// so its result is discarded when it returns.
    pub fn dismiss(&self) {
        let mut flight = self.flight.lock();
        flight.generation += 1;
        tracing::debug!(
            generation = flight.generation,
            in_flight = flight.in_flight,
            "verification view dismissed"
        );
        self.state.send_replace(VerificationResult::Pending);
    }

    /// Claim the in-flight slot and publish the reset.
    fn begin_attempt(&self) -> Option<u64> {
        let mut flight = self.flight.lock();
        if flight.in_flight {
            tracing::debug!(
                generation = flight.generation,
                "verification already in flight; trigger ignored"
            );
            return None;
        }
        flight.in_flight = true;
        flight.generation += 1;
        self.state.send_replace(VerificationResult::Pending);
        tracing::debug!(generation = flight.generation, "verification attempt started");
        Some(flight.generation)
    }

    async fn run_attempt(&self, generation: u64) -> AttemptOutcome {
        let mut guard = FlightGuard {
            flight: &self.flight,
            armed: true,
        };
        let result = self.client.verify_demo_credential(Utc::now()).await;
        guard.armed = false;
        self.finish_attempt(generation, result)
    }

    /// Release the slot and apply `result` if `generation` is still current.
    fn finish_attempt(&self, generation: u64, result: VerificationResult) -> AttemptOutcome {
        let mut flight = self.flight.lock();
        flight.in_flight = false;

        if flight.generation != generation {
            tracing::warn!(
                attempt = generation,
                current = flight.generation,
                "discarding verification result for a dismissed view"
            );
            return AttemptOutcome::Discarded;
        }

        match &result {
            VerificationResult::Success {
                receipt,
                explorer_url,
            } => tracing::info!(
                generation,
                contract_id = %receipt.contract_id,
                ledger_sequence = receipt.ledger_sequence,
                explorer_url = explorer_url.as_ref().map(|u| u.as_str()),
                "credential verified"
            ),
            VerificationResult::Failure(failure) => tracing::warn!(
                generation,
                reason = %failure.message,
                details = failure.details.as_deref(),
                "verification failed"
            ),
            VerificationResult::Pending => {}
        }

        self.state.send_replace(result.clone());
        AttemptOutcome::Applied(result)
    }
}
