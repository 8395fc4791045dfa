//! Session configuration: which fields are tracked and how admin status is encoded.

use super::{error::Error, field::FieldName};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// How the raw admin field value is interpreted.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdminEncoding {
    /// The value is coerced to a boolean.
    #[serde(alias = "bool")]
    Boolean,
    /// The value is a 1/0 flag; only `1` means admin.
    #[default]
    #[serde(rename = "numeric", alias = "numeric_flag")]
    NumericFlag,
}

impl AdminEncoding {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::NumericFlag => "numeric",
        }
    }
}

impl fmt::Display for AdminEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AdminEncoding {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "boolean" | "bool" => Ok(Self::Boolean),
            "numeric" | "numeric_flag" | "flag" => Ok(Self::NumericFlag),
            _ => Err(Error::UnknownEncoding(s.to_string())),
        }
    }
}

/// Configuration read by the session store and the admin interpreter.
///
/// Changes take effect on the next `install_attributes` call; an installed
/// session is never re-populated retroactively.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub tracked_fields: Vec<FieldName>,
    pub admin_field: Option<FieldName>,
    pub admin_encoding: AdminEncoding,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            tracked_fields: FieldName::defaults(),
            admin_field: Some(FieldName::default_admin()),
            admin_encoding: AdminEncoding::NumericFlag,
        }
    }
}
