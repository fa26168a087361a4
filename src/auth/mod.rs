//! Identity-verification boundary.
//!
//! The game is played behind an external identity provider. This module
//! owns the boundary contract only: the request/outcome types, the
//! verifier seam a live SDK adapter implements, a mock verifier for
//! development, and the gate that holds the verified session. Proof
//! verification itself stays with the provider.

pub mod gate;
pub mod verify;

pub use gate::{AuthError, AuthGate, AuthMode};
pub use verify::{
    IdentityVerifier, MockVerifier, ProofBundle, VerificationLevel, VerifyOutcome, VerifyRequest,
};
