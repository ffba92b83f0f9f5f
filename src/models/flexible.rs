//! A value Sleeper sends as either a JSON string or an integer.

use std::fmt;
use std::num::ParseIntError;

use serde::{Deserialize, Deserializer, Serialize};

/// String-or-integer field, kept as its string form.
///
/// `previous_season` on the sport state and several third-party player IDs
/// arrive as `"2024"` on some days and `2024` on others. `null` decodes as
/// the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct FlexibleString(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawFlexible {
    Text(String),
    Signed(i64),
    Unsigned(u64),
    Null,
}

impl<'de> Deserialize<'de> for FlexibleString {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawFlexible::deserialize(deserializer).map_err(|_| {
            serde::de::Error::custom("expected a string or an integer")
        })?;
        Ok(match raw {
            RawFlexible::Text(text) => FlexibleString(text),
            RawFlexible::Signed(n) => FlexibleString(n.to_string()),
            RawFlexible::Unsigned(n) => FlexibleString(n.to_string()),
            RawFlexible::Null => FlexibleString::default(),
        })
    }
}

impl FlexibleString {
    pub fn new(value: impl Into<String>) -> Self {
        FlexibleString(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Parse the value as an integer.
    pub fn to_int(&self) -> Result<i64, ParseIntError> {
        self.0.trim().parse()
    }
}

impl fmt::Display for FlexibleString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FlexibleString {
    fn from(value: &str) -> Self {
        FlexibleString(value.to_string())
    }
}

impl From<i64> for FlexibleString {
    fn from(value: i64) -> Self {
        FlexibleString(value.to_string())
    }
}
