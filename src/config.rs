//! Runtime configuration and validation for the search CLI.
//!
//! Validation happens here, before anything reaches the engine; the engine
//! itself assumes well-formed input and never re-validates.

use clap::Parser;

use crate::matcher::{strip_hex_prefix, CombineMode, IncludesMode, PatternConfig};

/// Full address body length in hex characters.
const ADDRESS_BODY_LEN: usize = 40;

/// Practical ceiling on matches per run, to keep a single run finite in cost.
pub const MAX_COUNT: usize = 100;

/// Ethereum Vanity Address Search
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Hex prefix the address must start with
    #[arg(short = 'p', long, default_value = "")]
    pub starts_with: String,

    /// Hex suffix the address must end with
    #[arg(short = 's', long, default_value = "")]
    pub ends_with: String,

    /// How prefix and suffix combine: and, or
    #[arg(short = 'm', long, default_value = "and")]
    pub prefix_suffix_mode: CombineMode,

    /// Comma/whitespace separated hex substrings the address must contain
    #[arg(short = 'i', long, default_value = "")]
    pub includes: String,

    /// How include tokens combine: all, any
    #[arg(long, default_value = "all")]
    pub includes_mode: IncludesMode,

    /// Case sensitive matching
    #[arg(short = 'c', long, default_value = "false")]
    pub case_sensitive: bool,

    /// Stop after collecting N matches
    #[arg(short = 'n', long, default_value = "1")]
    pub count: usize,

    /// Number of engines (default: number of CPU cores)
    #[arg(short = 'w', long)]
    pub workers: Option<usize>,

    /// Progress report interval in seconds
    #[arg(short = 'r', long, default_value = "5")]
    pub report_interval: u64,
}

impl Config {
    /// Returns the number of engines, defaulting to CPU count.
    pub fn worker_count(&self) -> usize {
        self.workers.unwrap_or_else(num_cpus::get)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_hex_field("prefix", &self.starts_with)?;
        check_hex_field("suffix", &self.ends_with)?;

        let combined = strip_hex_prefix(&self.starts_with).len()
            + strip_hex_prefix(&self.ends_with).len();
        if combined > ADDRESS_BODY_LEN {
            return Err(ConfigError::CombinedTooLong);
        }

        for token in self
            .includes
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty())
        {
            check_hex_field("includes", token)?;
        }

        if self.count == 0 || self.count > MAX_COUNT {
            return Err(ConfigError::CountOutOfRange);
        }

        Ok(())
    }

    /// Returns the pattern configuration for the engines.
    pub fn pattern_config(&self) -> PatternConfig {
        PatternConfig {
            count: self.count,
            starts_with: self.starts_with.clone(),
            ends_with: self.ends_with.clone(),
            prefix_suffix_mode: self.prefix_suffix_mode,
            includes: self.includes.clone(),
            includes_mode: self.includes_mode,
            case_sensitive: self.case_sensitive,
        }
    }
}

fn check_hex_field(field: &'static str, value: &str) -> Result<(), ConfigError> {
    let body = strip_hex_prefix(value);
    if !body.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ConfigError::NonHex { field });
    }
    if body.len() > ADDRESS_BODY_LEN {
        return Err(ConfigError::TooLong { field });
    }
    Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{field} must contain only hex characters (0-9, a-f)")]
    NonHex { field: &'static str },
    #[error("{field} cannot be longer than {} characters", ADDRESS_BODY_LEN)]
    TooLong { field: &'static str },
    #[error("combined prefix + suffix cannot be longer than {} characters", ADDRESS_BODY_LEN)]
    CombinedTooLong,
    #[error("count must be between 1 and {}", MAX_COUNT)]
    CountOutOfRange,
}
