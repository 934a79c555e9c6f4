//! Status enum for to-do items.
//!
//! Stored lowercase (`"not started"`, `"started"`, `"completed"`). Parsing is
//! case-insensitive and ignores surrounding whitespace, so `"StArTeD"` and
//! `" Completed "` are both accepted, from user input and from the data file.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::CoreError;

/// Progress state of a to-do item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    #[serde(rename = "not started")]
    NotStarted,
    Started,
    Completed,
}

impl Status {
    pub const ALL: [Self; 3] = [Self::NotStarted, Self::Started, Self::Completed];

    /// Return the string representation used in the data file.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotStarted => "not started",
            Self::Started => "started",
            Self::Completed => "completed",
        }
    }

    /// Parse a user-supplied status, ignoring case and surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` naming the offending value and the
    /// allowed set when `raw` is not one of the three statuses.
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        let normalized = raw.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == normalized)
            .ok_or_else(|| {
                CoreError::validation(format!(
                    "invalid status: {raw:?} (allowed: \"not started\", \"started\", \"completed\")"
                ))
            })
    }
}

impl FromStr for Status {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<'de> Deserialize<'de> for Status {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
