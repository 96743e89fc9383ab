//! Numeric record identifier.
//!
//! Identifiers are positive 64-bit integers assigned by the store on first
//! save. The textual form accepted from URLs is exactly `[1-9]\d*`; anything
//! else (leading zeros, signs, whitespace, overflow) is rejected.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Primary key of a stored record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type), sqlx(transparent))]
pub struct RecordId(i64);

/// Why a string could not be turned into a [`RecordId`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseRecordIdError {
    /// The input was empty.
    #[error("identifier is empty")]
    Empty,
    /// The input did not match `[1-9]\d*`.
    #[error("identifier '{0}' is not a positive integer")]
    Malformed(String),
    /// The input was well-formed but does not fit in an `i64`.
    #[error("identifier '{0}' is out of range")]
    Overflow(String),
}

impl RecordId {
    /// Wrap a raw value. Returns `None` for zero or negative values.
    pub fn new(value: i64) -> Option<Self> {
        (value > 0).then_some(Self(value))
    }

    /// Return the raw integer value.
    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RecordId {
    type Err = ParseRecordIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match chars.next() {
            None => return Err(ParseRecordIdError::Empty),
            Some('1'..='9') => {}
            Some(_) => return Err(ParseRecordIdError::Malformed(s.to_string())),
        }
        if !chars.all(|c| c.is_ascii_digit()) {
            return Err(ParseRecordIdError::Malformed(s.to_string()));
        }

        s.parse::<i64>()
            .map(Self)
            .map_err(|_| ParseRecordIdError::Overflow(s.to_string()))
    }
}

impl From<RecordId> for i64 {
    fn from(id: RecordId) -> i64 {
        id.0
    }
}
