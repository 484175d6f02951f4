//! Counter value semantics
//!
//! A count is persisted as its decimal text form and read back as text.
//! Reads parse that text deliberately; text that does not parse is handled
//! under an explicit [`ParsePolicy`] instead of propagating a sentinel into
//! the display and the store.

use thiserror::Error;

/// Default slot name the counter widget persists under.
pub const COUNTER_SLOT: &str = "counter";

/// Persisted text that is not a non-negative decimal count.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("persisted value '{text}' is not a non-negative decimal count")]
pub struct CountParseError {
    /// The offending slot content.
    pub text: String,
}

/// What to do when persisted text does not parse as a count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParsePolicy {
    /// Continue from zero; the next write repairs the slot.
    #[default]
    ResetToZero,
    /// Surface the parse failure to the caller.
    Strict,
}

/// A non-negative counter value.
///
/// No upper bound is enforced; [`Count::increment`] saturates at `u64::MAX`
/// rather than wrapping below a previously observed value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Count(u64);

impl Count {
    pub const ZERO: Count = Count(0);

    pub const fn new(value: u64) -> Self {
        Count(value)
    }

    pub const fn value(self) -> u64 {
        self.0
    }

    /// Advance by exactly one.
    pub const fn increment(self) -> Self {
        Count(self.0.saturating_add(1))
    }

    /// The persisted text form: canonical decimal.
    pub fn render(self) -> String {
        self.0.to_string()
    }

    /// Parse persisted text. Surrounding whitespace is tolerated; anything
    /// the decimal parser rejects is an error.
    pub fn parse(text: &str) -> Result<Self, CountParseError> {
        text.trim().parse::<u64>().map(Count).map_err(|_| CountParseError {
            text: text.to_string(),
        })
    }

    /// Parse persisted text under a recovery policy.
    pub fn recover(text: &str, policy: ParsePolicy) -> Result<Self, CountParseError> {
        match Self::parse(text) {
            Ok(count) => Ok(count),
            Err(err) => match policy {
                ParsePolicy::ResetToZero => {
                    tracing::warn!("unparseable persisted count '{}', continuing from 0", err.text);
                    Ok(Count::ZERO)
                }
                ParsePolicy::Strict => Err(err),
            },
        }
    }
}

impl std::fmt::Display for Count {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for Count {
    fn from(value: u64) -> Self {
        Count(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_canonical_decimal() {
        assert_eq!(Count::parse("0").unwrap(), Count::ZERO);
        assert_eq!(Count::parse("41").unwrap(), Count::new(41));
        assert_eq!(Count::parse(" 7 ").unwrap(), Count::new(7));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for text in ["", "abc", "-1", "4.5", "1e3", "0x10"] {
            let err = Count::parse(text).unwrap_err();
            assert_eq!(err.text, text);
        }
    }

    #[test]
    fn test_render_round_trips() {
        for value in [0u64, 1, 41, 1_000_000] {
            let count = Count::new(value);
            assert_eq!(Count::parse(&count.render()).unwrap(), count);
        }
    }

    #[test]
    fn test_increment_advances_by_one() {
        assert_eq!(Count::ZERO.increment(), Count::new(1));
        assert_eq!(Count::new(41).increment().render(), "42");
    }

    #[test]
    fn test_increment_saturates_at_max() {
        let max = Count::new(u64::MAX);
        assert_eq!(max.increment(), max);
    }

    #[test]
    fn test_recover_resets_to_zero_by_default() {
        let count = Count::recover("abc", ParsePolicy::ResetToZero).unwrap();
        assert_eq!(count, Count::ZERO);
    }

    #[test]
    fn test_recover_strict_surfaces_error() {
        let err = Count::recover("abc", ParsePolicy::Strict).unwrap_err();
        assert_eq!(err.text, "abc");
    }

    #[test]
    fn test_recover_passes_valid_text_through() {
        for policy in [ParsePolicy::ResetToZero, ParsePolicy::Strict] {
            assert_eq!(Count::recover("41", policy).unwrap(), Count::new(41));
        }
    }
}
