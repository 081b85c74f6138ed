//! Candidate key/address pairs.

use secp256k1::{PublicKey, Secp256k1, SecretKey};
use tiny_keccak::{Hasher, Keccak};

use super::source::SourceError;
use super::Address;

/// One generated secret key together with its derived address.
///
/// Candidates are ephemeral: the engine drops them unless they match.
#[derive(Debug, Clone)]
pub struct Candidate {
    secret: [u8; 32],
    address: Address,
}

impl Candidate {
    /// Assembles a candidate from an already-derived address.
    pub fn new(secret: [u8; 32], address: Address) -> Self {
        Self { secret, address }
    }

    /// Derives the candidate for an existing secret key.
    pub fn from_secret(secret: [u8; 32]) -> Result<Self, SourceError> {
        let secp = Secp256k1::new();
        let secret_key = SecretKey::from_slice(&secret)?;
        let public_key = PublicKey::from_secret_key(&secp, &secret_key);
        Ok(Self {
            secret,
            address: derive_address(&public_key),
        })
    }

    /// Returns the secret key as a hex string (without 0x prefix).
    pub fn private_key_hex(&self) -> String {
        hex::encode(self.secret)
    }

    /// Returns the secret key bytes.
    pub fn secret_bytes(&self) -> &[u8; 32] {
        &self.secret
    }

    /// Returns the derived address.
    #[inline]
    pub fn address(&self) -> &Address {
        &self.address
    }
}

/// Derives an Ethereum address from a secp256k1 public key: Keccak-256 over
/// the 64-byte uncompressed point (0x04 prefix dropped), last 20 bytes.
pub(super) fn derive_address(public_key: &PublicKey) -> Address {
    let uncompressed = public_key.serialize_uncompressed();

    let mut keccak = Keccak::v256();
    keccak.update(&uncompressed[1..]);
    let mut digest = [0u8; 32];
    keccak.finalize(&mut digest);

    let mut bytes = [0u8; 20];
    bytes.copy_from_slice(&digest[12..]);
    Address::from_bytes(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_derivation_vector() {
        // Address for secret key = 1 is well-known.
        let mut secret = [0u8; 32];
        secret[31] = 0x01;
        let candidate = Candidate::from_secret(secret).unwrap();
        assert_eq!(
            candidate.address().to_hex(),
            "7e5f4552091a69125d5dfcb7b8c2659029395bdf"
        );
        assert_eq!(
            candidate.private_key_hex(),
            "0000000000000000000000000000000000000000000000000000000000000001"
        );
    }

    #[test]
    fn test_zero_secret_rejected() {
        assert!(Candidate::from_secret([0u8; 32]).is_err());
    }
}
