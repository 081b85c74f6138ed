//! Pattern matching for Ethereum addresses.
//!
//! A [`PatternConfig`] carries the user's constraints: prefix and suffix
//! combined with and/or, substring tokens combined with all/any, optional
//! case sensitivity. [`Pattern::compile`] normalizes the configuration once
//! and the resulting [`Pattern`] is a pure predicate over address strings.

mod pattern;

pub(crate) use pattern::strip_hex_prefix;
pub use pattern::{CombineMode, IncludesMode, Pattern, PatternConfig};
