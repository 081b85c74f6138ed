//! Messages crossing the controller/engine boundary.

use std::time::SystemTime;

use crate::crypto::SourceError;
use crate::matcher::PatternConfig;

/// Inbound commands from the controller.
#[derive(Debug, Clone)]
pub enum Command {
    /// Begin a run. Ignored while a run is already active.
    Start(PatternConfig),
    /// End the active run at the next batch boundary.
    Stop,
}

/// One found key/address pair.
///
/// Immutable once created; ownership moves to the controller on emission and
/// the engine keeps no reference.
#[derive(Debug, Clone)]
pub struct VanityMatch {
    /// EIP-55 checksummed address, 0x-prefixed
    pub address: String,
    /// Private key, hex encoded without 0x prefix
    pub private_key: String,
    /// When the candidate matched
    pub created_at: SystemTime,
    /// Engine that found it
    pub engine_id: usize,
}

/// Outbound events to the controller.
#[derive(Debug)]
pub enum Event {
    /// A candidate matched. Emitted immediately, never buffered, so the
    /// controller can stop as soon as its target count is reached.
    Found(VanityMatch),
    /// A batch finished; `attempts` is that batch's candidate count, not a
    /// running total. The controller accumulates.
    Progress { attempts: u64 },
    /// The candidate source failed. Last event of the run; the run is over
    /// and emits nothing further.
    Failed(SourceError),
}
