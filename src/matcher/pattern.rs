//! Pattern configuration and the compiled match predicate.

use std::fmt;
use std::str::FromStr;

/// Combinator between the prefix and suffix constraints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CombineMode {
    /// Every configured side must match
    #[default]
    And,
    /// At least one configured side must match
    Or,
}

impl FromStr for CombineMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "and" | "both" => Ok(CombineMode::And),
            "or" | "either" => Ok(CombineMode::Or),
            _ => Err(format!("Unknown combine mode: {}", s)),
        }
    }
}

impl fmt::Display for CombineMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CombineMode::And => write!(f, "and"),
            CombineMode::Or => write!(f, "or"),
        }
    }
}

/// Combinator between include tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IncludesMode {
    /// Every token must appear as a substring
    #[default]
    All,
    /// At least one token must appear as a substring
    Any,
}

impl FromStr for IncludesMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" | "every" => Ok(IncludesMode::All),
            "any" | "one" => Ok(IncludesMode::Any),
            _ => Err(format!("Unknown includes mode: {}", s)),
        }
    }
}

impl fmt::Display for IncludesMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IncludesMode::All => write!(f, "all"),
            IncludesMode::Any => write!(f, "any"),
        }
    }
}

/// The constraints for one search run, immutable once the run starts.
///
/// The engine assumes the fields were validated upstream (hex only, combined
/// prefix + suffix length within the 40-character address body); it never
/// re-validates, but empty fields are always safe.
#[derive(Debug, Clone)]
pub struct PatternConfig {
    /// Number of matches the controller wants before it stops the run
    pub count: usize,
    /// Hex prefix the address must start with (may be empty)
    pub starts_with: String,
    /// Hex suffix the address must end with (may be empty)
    pub ends_with: String,
    /// How the prefix and suffix constraints combine
    pub prefix_suffix_mode: CombineMode,
    /// Comma/whitespace separated hex substrings (may be empty)
    pub includes: String,
    /// How the include tokens combine
    pub includes_mode: IncludesMode,
    /// Whether matching folds case before comparison
    pub case_sensitive: bool,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            count: 1,
            starts_with: String::new(),
            ends_with: String::new(),
            prefix_suffix_mode: CombineMode::And,
            includes: String::new(),
            includes_mode: IncludesMode::All,
            case_sensitive: false,
        }
    }
}

/// Removes a single leading `0x`/`0X` if present.
pub(crate) fn strip_hex_prefix(s: &str) -> &str {
    s.strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s)
}

/// A pattern compiled from a [`PatternConfig`]: fields are normalized once so
/// matching is a handful of string comparisons per candidate.
#[derive(Debug, Clone)]
pub struct Pattern {
    prefix: String,
    suffix: String,
    tokens: Vec<String>,
    prefix_suffix_mode: CombineMode,
    includes_mode: IncludesMode,
    case_sensitive: bool,
}

impl Pattern {
    /// Normalizes the configuration into a ready-to-match pattern.
    ///
    /// Case is folded unless matching is case sensitive; a leading `0x` is
    /// stripped from the prefix and suffix independently; the include list is
    /// split on commas and whitespace with empty tokens discarded.
    pub fn compile(config: &PatternConfig) -> Self {
        let fold = |s: &str| {
            if config.case_sensitive {
                s.to_owned()
            } else {
                s.to_lowercase()
            }
        };

        let prefix = strip_hex_prefix(&fold(&config.starts_with)).to_owned();
        let suffix = strip_hex_prefix(&fold(&config.ends_with)).to_owned();
        let tokens = fold(&config.includes)
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty())
            .map(str::to_owned)
            .collect();

        Self {
            prefix,
            suffix,
            tokens,
            prefix_suffix_mode: config.prefix_suffix_mode,
            includes_mode: config.includes_mode,
            case_sensitive: config.case_sensitive,
        }
    }

    /// Returns the normalized prefix.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Returns the normalized suffix.
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Returns the normalized include tokens.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Tests an address against this pattern. Pure and deterministic.
    ///
    /// Accepts the address with or without a leading `0x`. An unconfigured
    /// constraint never causes a failure: empty prefix and suffix pass in
    /// both combine modes, and an empty token list passes in both include
    /// modes. No constraint configured means no constraint to violate.
    #[inline]
    pub fn matches(&self, address: &str) -> bool {
        let folded;
        let body = if self.case_sensitive {
            strip_hex_prefix(address)
        } else {
            folded = address.to_lowercase();
            strip_hex_prefix(&folded)
        };

        self.prefix_suffix_ok(body) && self.includes_ok(body)
    }

    fn prefix_suffix_ok(&self, body: &str) -> bool {
        let start_ok = self.prefix.is_empty() || body.starts_with(&self.prefix);
        let end_ok = self.suffix.is_empty() || body.ends_with(&self.suffix);

        match self.prefix_suffix_mode {
            CombineMode::And => start_ok && end_ok,
            CombineMode::Or => {
                if !self.prefix.is_empty() && !self.suffix.is_empty() {
                    body.starts_with(&self.prefix) || body.ends_with(&self.suffix)
                } else {
                    // At most one side configured; the empty side is vacuous.
                    start_ok && end_ok
                }
            }
        }
    }

    fn includes_ok(&self, body: &str) -> bool {
        match self.includes_mode {
            IncludesMode::All => self.tokens.iter().all(|t| body.contains(t.as_str())),
            IncludesMode::Any => {
                self.tokens.is_empty() || self.tokens.iter().any(|t| body.contains(t.as_str()))
            }
        }
    }

    /// Returns the expected number of attempts per match.
    ///
    /// Each hex position has 16 possible values, so a constraint of n fixed
    /// characters costs 16^n on average. Include tokens are not modelled.
    pub fn estimated_difficulty(&self) -> u64 {
        let fixed = match self.prefix_suffix_mode {
            CombineMode::And => self.prefix.len() + self.suffix.len(),
            CombineMode::Or => match (self.prefix.len(), self.suffix.len()) {
                (0, n) | (n, 0) => n,
                (p, s) => p.min(s),
            },
        };
        16u64.saturating_pow(fixed as u32)
    }

    /// Returns a human-readable difficulty estimate.
    pub fn difficulty_description(&self) -> String {
        match self.estimated_difficulty() {
            0..=1_000 => "Very Easy (< 1 second)".into(),
            1_001..=100_000 => "Easy (seconds)".into(),
            100_001..=10_000_000 => "Medium (minutes)".into(),
            10_000_001..=1_000_000_000 => "Hard (hours)".into(),
            _ => "Very Hard (days or more)".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compile(f: impl FnOnce(&mut PatternConfig)) -> Pattern {
        let mut config = PatternConfig::default();
        f(&mut config);
        Pattern::compile(&config)
    }

    #[test]
    fn test_prefix_and_mode() {
        let pattern = compile(|c| c.starts_with = "dead".into());
        assert!(pattern.matches("0xDEAD123400000000000000000000000000005678"));
        assert!(!pattern.matches("0xBEEF123400000000000000000000000000005678"));
    }

    #[test]
    fn test_and_mode_requires_both_configured_sides() {
        let pattern = compile(|c| {
            c.starts_with = "dead".into();
            c.ends_with = "beef".into();
        });
        assert!(pattern.matches("dead00000000000000000000000000000000beef"));
        assert!(!pattern.matches("dead00000000000000000000000000000000cafe"));
        assert!(!pattern.matches("cafe00000000000000000000000000000000beef"));
    }

    #[test]
    fn test_and_mode_empty_sides_pass_vacuously() {
        let pattern = compile(|_| {});
        assert!(pattern.matches("0123456789abcdef0123456789abcdef01234567"));
    }

    #[test]
    fn test_or_mode_empty_sides_pass() {
        let pattern = compile(|c| c.prefix_suffix_mode = CombineMode::Or);
        assert!(pattern.matches("0123456789abcdef0123456789abcdef01234567"));
    }

    #[test]
    fn test_or_mode_either_side_suffices() {
        let pattern = compile(|c| {
            c.starts_with = "a".into();
            c.ends_with = "b".into();
            c.prefix_suffix_mode = CombineMode::Or;
        });
        // Ends in b, does not start with a.
        assert!(pattern.matches("c12345678901234567890123456789012345678b"));
        assert!(pattern.matches("a123456789012345678901234567890123456789"));
        assert!(!pattern.matches("c123456789012345678901234567890123456789"));
    }

    #[test]
    fn test_or_mode_single_configured_side_must_match() {
        let pattern = compile(|c| {
            c.ends_with = "ff".into();
            c.prefix_suffix_mode = CombineMode::Or;
        });
        assert!(pattern.matches("00000000000000000000000000000000000000ff"));
        assert!(!pattern.matches("ff00000000000000000000000000000000000000"));
    }

    #[test]
    fn test_includes_all_requires_every_token() {
        let pattern = compile(|c| c.includes = "cafe,babe".into());
        assert!(pattern.matches("00cafe000000000000000000000000000babe000"));
        assert!(!pattern.matches("00cafe0000000000000000000000000000000000"));
    }

    #[test]
    fn test_includes_any_requires_one_token() {
        let pattern = compile(|c| {
            c.includes = "cafe,babe".into();
            c.includes_mode = IncludesMode::Any;
        });
        // Contains babe mid-address, no cafe anywhere.
        assert!(pattern.matches("000000000000000000babe000000000000000000"));
        assert!(!pattern.matches("0000000000000000000000000000000000000000"));
    }

    #[test]
    fn test_includes_splits_on_commas_and_whitespace() {
        let pattern = compile(|c| c.includes = " cafe ,, \tbabe ".into());
        assert_eq!(pattern.tokens(), ["cafe", "babe"]);
    }

    #[test]
    fn test_includes_empty_token_list_passes() {
        let pattern = compile(|c| {
            c.includes = " , , ".into();
            c.includes_mode = IncludesMode::Any;
        });
        assert!(pattern.matches("0000000000000000000000000000000000000000"));
    }

    #[test]
    fn test_case_insensitive_matches_any_case_permutation() {
        let pattern = compile(|c| c.starts_with = "DeAd".into());
        assert!(pattern.matches("dead000000000000000000000000000000000000"));
        assert!(pattern.matches("DEAD000000000000000000000000000000000000"));
        assert!(pattern.matches("0XDEAD000000000000000000000000000000000000"));
    }

    #[test]
    fn test_case_sensitive_does_not_fold() {
        let pattern = compile(|c| {
            c.starts_with = "DEAD".into();
            c.case_sensitive = true;
        });
        assert!(pattern.matches("DEAD000000000000000000000000000000000000"));
        assert!(!pattern.matches("dead000000000000000000000000000000000000"));
    }

    #[test]
    fn test_pattern_fields_strip_leading_0x() {
        let pattern = compile(|c| {
            c.starts_with = "0xdead".into();
            c.ends_with = "0xbeef".into();
        });
        assert_eq!(pattern.prefix(), "dead");
        assert_eq!(pattern.suffix(), "beef");
        assert!(pattern.matches("0xdead000000000000000000000000000000beef"));
    }

    #[test]
    fn test_difficulty_and_mode_sums_sides() {
        let pattern = compile(|c| {
            c.starts_with = "dead".into();
            c.ends_with = "ff".into();
        });
        assert_eq!(pattern.estimated_difficulty(), 16u64.pow(6));
    }

    #[test]
    fn test_difficulty_or_mode_takes_cheaper_side() {
        let pattern = compile(|c| {
            c.starts_with = "dead".into();
            c.ends_with = "ff".into();
            c.prefix_suffix_mode = CombineMode::Or;
        });
        assert_eq!(pattern.estimated_difficulty(), 16u64.pow(2));
    }
}
