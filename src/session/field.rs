//! Attribute field names.
//!
//! Field names key the session attribute map and must match the keys the API
//! layer returns after login. They are validated once, at construction, so the
//! rest of the engine can treat them as plain map keys.

use super::error::Error;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::{borrow::Borrow, fmt, str::FromStr};

/// Field holding the user identifier compared by ownership checks.
pub const ID_FIELD: &str = "id";

/// Default admin flag field.
pub const DEFAULT_ADMIN_FIELD: &str = "admin";

/// Fields copied into the session when no explicit list is configured.
pub const DEFAULT_TRACKED_FIELDS: [&str; 5] = ["first_name", "last_name", "email", "id", "api_token"];

#[must_use]
pub fn valid_field_name(name: &str) -> bool {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_-]*$").is_ok_and(|re| re.is_match(name))
}

/// A validated attribute name.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FieldName(String);

impl FieldName {
    /// Validate and wrap a field name. Surrounding whitespace is ignored.
    ///
    /// # Errors
    /// Returns `Error::InvalidFieldName` when the trimmed name is empty or holds
    /// characters other than ASCII letters, digits, `_` and `-`.
    pub fn new(name: &str) -> Result<Self, Error> {
        let trimmed = name.trim();
        if valid_field_name(trimmed) {
            Ok(Self(trimmed.to_string()))
        } else {
            Err(Error::InvalidFieldName(name.to_string()))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse a list of names, failing on the first invalid entry.
    ///
    /// # Errors
    /// Returns `Error::InvalidFieldName` for the first name that fails validation.
    pub fn parse_list<I, S>(names: I) -> Result<Vec<Self>, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names.into_iter().map(|name| Self::new(name.as_ref())).collect()
    }

    pub(crate) fn defaults() -> Vec<Self> {
        DEFAULT_TRACKED_FIELDS
            .iter()
            .map(|name| Self((*name).to_string()))
            .collect()
    }

    pub(crate) fn default_admin() -> Self {
        Self(DEFAULT_ADMIN_FIELD.to_string())
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for FieldName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for FieldName {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<FieldName> for String {
    fn from(value: FieldName) -> Self {
        value.0
    }
}

impl AsRef<str> for FieldName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for FieldName {
    fn borrow(&self) -> &str {
        &self.0
    }
}
