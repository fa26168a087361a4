//! Verification boundary types.
//!
//! The identity provider is an external SDK; this module models only its
//! contract: a one-shot request and a discriminated outcome. Proof fields
//! are opaque byte strings to this crate; nothing here inspects or
//! validates them, and nothing here talks to the network.
//!
//! Delivery is a single return value, not an event subscription: one
//! `verify` call yields exactly one outcome, so there is no unsubscribe
//! step to forget and no double-delivery window.

use serde::{Deserialize, Serialize};

/// Strength of the identity check requested from the provider.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationLevel {
    /// In-person biometric verification.
    Orb,
    /// Device-bound verification.
    Device,
}

/// A single verification attempt.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyRequest {
    /// Provider-side action identifier.
    pub action: String,

    /// Application-chosen signal bound into the proof.
    pub signal: String,

    /// Requested verification level.
    pub level: VerificationLevel,
}

impl VerifyRequest {
    /// Create a verification request.
    pub fn new(
        action: impl Into<String>,
        signal: impl Into<String>,
        level: VerificationLevel,
    ) -> Self {
        Self {
            action: action.into(),
            signal: signal.into(),
            level,
        }
    }

    /// The login request the game uses to gate play.
    #[must_use]
    pub fn login() -> Self {
        Self::new("login", "hamburger-memory-game", VerificationLevel::Orb)
    }
}

/// Opaque verification artifacts returned on success.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofBundle {
    /// Zero-knowledge proof blob. Opaque.
    pub proof: String,

    /// Merkle root of the identity set. Opaque.
    pub merkle_root: String,

    /// Nullifier hash identifying this (user, action) pair. Opaque.
    pub nullifier_hash: String,

    /// Level the provider actually verified at.
    pub level: VerificationLevel,
}

/// The one-shot discriminated result of a verification attempt.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum VerifyOutcome {
    /// The provider verified the user.
    Success {
        /// The proof artifacts.
        #[serde(flatten)]
        bundle: ProofBundle,
    },
    /// The provider rejected the attempt.
    Error {
        /// Provider error code. Opaque.
        error_code: String,
    },
}

impl VerifyOutcome {
    /// Check whether this outcome carries a proof.
    #[must_use]
    pub fn is_verified(&self) -> bool {
        matches!(self, VerifyOutcome::Success { .. })
    }
}

/// The seam a live SDK adapter implements.
///
/// One call, one outcome. Adapters wrap whatever callback or promise
/// machinery the SDK exposes and surface the final result here.
pub trait IdentityVerifier {
    /// Run one verification attempt to completion.
    fn verify(&mut self, request: &VerifyRequest) -> VerifyOutcome;
}

/// Development-mode verifier.
///
/// Yields a fixed bundle without contacting any provider. Hosts select it
/// when the auth mode is [`AuthMode::Mock`](super::AuthMode); it must
/// never be wired up in production builds.
#[derive(Clone, Copy, Debug, Default)]
pub struct MockVerifier;

impl IdentityVerifier for MockVerifier {
    fn verify(&mut self, request: &VerifyRequest) -> VerifyOutcome {
        VerifyOutcome::Success {
            bundle: ProofBundle {
                proof: "mock_proof_for_development".to_string(),
                merkle_root: "mock_merkle_root".to_string(),
                nullifier_hash: "mock_nullifier_hash".to_string(),
                level: request.level,
            },
        }
    }
}
