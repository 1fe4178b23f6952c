//! Stop identifier type.

use std::fmt;

/// Error returned when parsing an invalid stop identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid stop id: {reason}")]
pub struct InvalidStopId {
    reason: &'static str,
}

/// A validated stop identifier.
///
/// Stop ids are 1 to 12 ASCII alphanumeric characters with letters in
/// uppercase. This type guarantees that any `StopId` value is valid by
/// construction.
///
/// # Examples
///
/// ```
/// use route_server::domain::StopId;
///
/// let stop = StopId::parse("A").unwrap();
/// assert_eq!(stop.as_str(), "A");
///
/// // Lowercase is rejected
/// assert!(StopId::parse("a").is_err());
///
/// // Empty is rejected
/// assert!(StopId::parse("").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StopId(String);

impl StopId {
    /// Maximum identifier length.
    const MAX_LEN: usize = 12;

    /// Parse a stop id from a string.
    ///
    /// The input must be 1 to 12 ASCII alphanumeric characters; letters
    /// must be uppercase.
    pub fn parse(s: &str) -> Result<Self, InvalidStopId> {
        if s.is_empty() {
            return Err(InvalidStopId {
                reason: "must not be empty",
            });
        }

        if s.len() > Self::MAX_LEN {
            return Err(InvalidStopId {
                reason: "must be at most 12 characters",
            });
        }

        for b in s.bytes() {
            if !(b.is_ascii_uppercase() || b.is_ascii_digit()) {
                return Err(InvalidStopId {
                    reason: "must be uppercase ASCII letters or digits",
                });
            }
        }

        Ok(StopId(s.to_string()))
    }

    /// Parse a stop id, uppercasing letters first.
    ///
    /// Accepts the same inputs as [`parse`](Self::parse) plus lowercase
    /// letters, which are normalized to uppercase.
    pub fn parse_normalized(s: &str) -> Result<Self, InvalidStopId> {
        Self::parse(&s.to_ascii_uppercase())
    }

    /// Returns the stop id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StopId({})", self.0)
    }
}

impl fmt::Display for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
