//! The vanity address search engine.
//!
//! One [`SearchEngine`] instance owns one search loop. The controller talks
//! to it only through messages: [`Command::Start`] and [`Command::Stop`] in,
//! [`Event::Found`], [`Event::Progress`] and [`Event::Failed`] out. No state
//! is shared across the boundary.
//!
//! Candidates are processed in fixed batches; the engine observes its command
//! queue between batches, so a stop issued during batch N takes effect before
//! batch N+1 and no events follow it.

mod handle;
mod pool;
mod protocol;
mod search;

#[cfg(test)]
pub(crate) mod testing;

pub use handle::EngineHandle;
pub use pool::EnginePool;
pub use protocol::{Command, Event, VanityMatch};
pub use search::{SearchEngine, BATCH_SIZE};
