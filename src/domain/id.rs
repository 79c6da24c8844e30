//! ULID-based identifiers for folders and notes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ulid::Ulid;

/// Number of characters shown when an identifier is abbreviated.
pub const PREFIX_LEN: usize = 10;

/// Error returned when parsing an invalid ULID string.
#[derive(Debug, Clone)]
pub struct ParseIdError {
    value: String,
    reason: String,
}

impl ParseIdError {
    /// Returns the invalid value that caused this error.
    pub fn invalid_value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for ParseIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid ULID '{}': {}", self.value, self.reason)
    }
}

impl std::error::Error for ParseIdError {}

fn parse_ulid(s: &str) -> Result<Ulid, ParseIdError> {
    Ulid::from_string(s).map_err(|e| ParseIdError {
        value: s.to_string(),
        reason: e.to_string(),
    })
}

macro_rules! ulid_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(Ulid);

        impl $name {
            /// Creates a new identifier stamped with the current time.
            pub fn new() -> Self {
                Self(Ulid::new())
            }

            /// Returns the abbreviated form used in listings.
            pub fn prefix(&self) -> String {
                self.0.to_string()[..PREFIX_LEN].to_string()
            }

            /// Returns when this identifier was minted.
            pub fn timestamp(&self) -> DateTime<Utc> {
                DateTime::from_timestamp_millis(self.0.timestamp_ms() as i64)
                    .unwrap_or_default()
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}(\"{}\")", stringify!($name), self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                parse_ulid(s).map(Self)
            }
        }

        impl Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(&self.0.to_string())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                s.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

ulid_id! {
    /// Unique identifier of a folder.
    FolderId
}

ulid_id! {
    /// Unique identifier of a note.
    NoteId
}
