//! Deterministic candidate sources for engine tests.

use crate::crypto::{Address, Candidate, CandidateSource, SourceError};

/// Builds an address starting with the given bytes, with `tail` as the last
/// byte so addresses built from the same prefix stay distinguishable.
pub fn addr_with_prefix(prefix: &[u8], tail: u8) -> [u8; 20] {
    let mut bytes = [0u8; 20];
    bytes[..prefix.len()].copy_from_slice(prefix);
    bytes[19] = tail;
    bytes
}

/// Yields candidates with scripted addresses, cycling over the list.
pub struct ScriptedSource {
    addresses: Vec<[u8; 20]>,
    cycle: bool,
    next: usize,
}

impl ScriptedSource {
    /// Cycles over `addresses` forever.
    pub fn cycling(addresses: Vec<[u8; 20]>) -> Self {
        Self {
            addresses,
            cycle: true,
            next: 0,
        }
    }

    /// Plays `addresses` once, then repeats the last entry forever.
    pub fn then_sticky(addresses: Vec<[u8; 20]>) -> Self {
        Self {
            addresses,
            cycle: false,
            next: 0,
        }
    }
}

impl CandidateSource for ScriptedSource {
    fn candidate(&mut self) -> Result<Candidate, SourceError> {
        let index = if self.cycle {
            self.next % self.addresses.len()
        } else {
            self.next.min(self.addresses.len() - 1)
        };
        self.next += 1;
        Ok(Candidate::new(
            [0x11; 32],
            Address::from_bytes(self.addresses[index]),
        ))
    }
}

/// Fails on the first candidate.
pub struct FailingSource;

impl CandidateSource for FailingSource {
    fn candidate(&mut self) -> Result<Candidate, SourceError> {
        Err(SourceError::Generation("rng exhausted".into()))
    }
}
