//! Ethereum address representation.

use std::fmt;

use tiny_keccak::{Hasher, Keccak};

/// An Ethereum address (20 bytes).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address([u8; 20]);

impl Address {
    /// Creates an address from raw bytes.
    #[inline]
    pub const fn from_bytes(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    /// Returns the address as raw bytes.
    #[inline]
    pub const fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// Returns the 40-character lowercase hex body, without `0x`.
    ///
    /// This is the form the match predicate operates on.
    #[inline]
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Returns the EIP-55 checksummed form with `0x` prefix.
    ///
    /// A hex letter is uppercased when the corresponding nibble of the
    /// Keccak-256 hash of the lowercase body is >= 8.
    pub fn to_checksum(&self) -> String {
        let body = self.to_hex();

        let mut keccak = Keccak::v256();
        keccak.update(body.as_bytes());
        let mut digest = [0u8; 32];
        keccak.finalize(&mut digest);

        let mut out = String::with_capacity(42);
        out.push_str("0x");
        for (i, c) in body.chars().enumerate() {
            let nibble = if i % 2 == 0 {
                digest[i / 2] >> 4
            } else {
                digest[i / 2] & 0x0f
            };
            if c.is_ascii_alphabetic() && nibble >= 8 {
                out.push(c.to_ascii_uppercase());
            } else {
                out.push(c);
            }
        }
        out
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.to_checksum())
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_checksum())
    }
}
