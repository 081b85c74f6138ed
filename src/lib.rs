//! # vanity_engine
//!
//! Pattern-driven Ethereum vanity address search.
//!
//! ## Architecture
//!
//! - `matcher`: Pattern configuration and the pure match predicate
//! - `crypto`: Key generation and address derivation (the candidate source)
//! - `engine`: Command/event driven search loops and the engine pool
//! - `config`: CLI configuration and validation
//!
//! Engines are controlled entirely through messages: [`Command::Start`] and
//! [`Command::Stop`] in, [`Event::Found`] and [`Event::Progress`] out. The
//! controller counts matches and attempts on its own side and stops the
//! engines once its target is reached.

pub mod config;
pub mod crypto;
pub mod engine;
pub mod matcher;

pub use config::{Config, ConfigError};
pub use crypto::{Address, Candidate, CandidateSource, Secp256k1Source, SourceError};
pub use engine::{Command, EngineHandle, EnginePool, Event, SearchEngine, VanityMatch, BATCH_SIZE};
pub use matcher::{CombineMode, IncludesMode, Pattern, PatternConfig};
