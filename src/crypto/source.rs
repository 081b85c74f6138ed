//! The key-generation and address-derivation primitive.

use rand::rngs::StdRng;
use rand::SeedableRng;
use secp256k1::{All, Secp256k1};

use super::candidate::derive_address;
use super::Candidate;

/// Failure of a candidate source. Fatal to the run that observes it.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("invalid secret key: {0}")]
    InvalidSecretKey(#[from] secp256k1::Error),
    #[error("candidate generation failed: {0}")]
    Generation(String),
}

/// Produces candidate key/address pairs for the engine.
///
/// Generation and derivation are one opaque step from the engine's point of
/// view. The engine assumes a source is correct for well-formed use and
/// treats any error as fatal to the current run.
pub trait CandidateSource: Send {
    fn candidate(&mut self) -> Result<Candidate, SourceError>;
}

/// secp256k1-backed source.
///
/// Keeps one context and one entropy-seeded CSPRNG per source, so per-key
/// cost is a scalar multiplication and a Keccak hash.
pub struct Secp256k1Source {
    secp: Secp256k1<All>,
    rng: StdRng,
}

impl Secp256k1Source {
    pub fn new() -> Self {
        Self {
            secp: Secp256k1::new(),
            rng: StdRng::from_entropy(),
        }
    }
}

impl Default for Secp256k1Source {
    fn default() -> Self {
        Self::new()
    }
}

impl CandidateSource for Secp256k1Source {
    #[inline]
    fn candidate(&mut self) -> Result<Candidate, SourceError> {
        let (secret_key, public_key) = self.secp.generate_keypair(&mut self.rng);
        Ok(Candidate::new(
            secret_key.secret_bytes(),
            derive_address(&public_key),
        ))
    }
}
