//! The auth gate: holds the verified session the game is played behind.
//!
//! The hosting layer resolves [`AuthMode`] exactly once at startup (from
//! its own deployment knowledge) and injects it here. Business logic
//! never sniffs the environment: wherever the game needs to know whether
//! mock auth is in play, it asks the gate.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use super::verify::{IdentityVerifier, ProofBundle, VerifyOutcome, VerifyRequest};

/// Which verification path the deployment uses.
///
/// Resolved once at startup by the hosting layer; never derived ad hoc
/// from hostnames, user agents, or environment variables inside the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthMode {
    /// Real provider via the SDK adapter.
    Live,
    /// [`MockVerifier`](super::MockVerifier) for development.
    Mock,
}

/// A rejected verification attempt.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    /// The provider rejected the attempt with the given code.
    #[error("verification rejected: {0}")]
    Rejected(String),
}

/// Gate state: either logged out, or holding a verified session.
///
/// One outcome is applied per attempt. A later successful attempt
/// replaces the session; a rejected attempt leaves the gate unchanged.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AuthGate {
    mode: AuthMode,
    session: Option<ProofBundle>,
}

impl AuthGate {
    /// Create a logged-out gate for the given mode.
    #[must_use]
    pub fn new(mode: AuthMode) -> Self {
        Self {
            mode,
            session: None,
        }
    }

    /// The mode this deployment runs in.
    #[must_use]
    pub fn mode(&self) -> AuthMode {
        self.mode
    }

    /// Check whether a verified session is held.
    #[must_use]
    pub fn is_verified(&self) -> bool {
        self.session.is_some()
    }

    /// The held session, if any.
    #[must_use]
    pub fn session(&self) -> Option<&ProofBundle> {
        self.session.as_ref()
    }

    /// Apply a delivered verification outcome.
    ///
    /// On success the bundle becomes the current session. On rejection
    /// the gate is unchanged and the provider's code is surfaced.
    pub fn login(&mut self, outcome: VerifyOutcome) -> Result<(), AuthError> {
        match outcome {
            VerifyOutcome::Success { bundle } => {
                info!(level = ?bundle.level, "identity verified");
                self.session = Some(bundle);
                Ok(())
            }
            VerifyOutcome::Error { error_code } => {
                warn!(%error_code, "verification rejected");
                Err(AuthError::Rejected(error_code))
            }
        }
    }

    /// Run one attempt against a verifier and apply its outcome.
    pub fn attempt<V: IdentityVerifier>(
        &mut self,
        verifier: &mut V,
        request: &VerifyRequest,
    ) -> Result<(), AuthError> {
        let outcome = verifier.verify(request);
        self.login(outcome)
    }

    /// Drop the session.
    pub fn logout(&mut self) {
        self.session = None;
    }
}
