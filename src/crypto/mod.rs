//! Key generation and Ethereum address derivation.
//!
//! The engine consumes this module exclusively through [`CandidateSource`]:
//! one opaque "generate key, derive address" step per candidate. The concrete
//! implementation is secp256k1 key generation plus Keccak-256 derivation.

mod address;
mod candidate;
mod source;

pub use address::Address;
pub use candidate::Candidate;
pub use source::{CandidateSource, Secp256k1Source, SourceError};
