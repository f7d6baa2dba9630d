//! Supported argument types.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::Value;

/// Supported argument types in a schema.
///
/// Spelled `boolean`, `integer` and `string` in schema sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArgType {
    Boolean,
    Integer,
    String,
}

impl ArgType {
    /// All supported types, in the order they are listed in diagnostics.
    pub const ALL: [ArgType; 3] = [ArgType::Boolean, ArgType::Integer, ArgType::String];

    /// Get the schema type name
    pub fn as_str(&self) -> &'static str {
        match self {
            ArgType::Boolean => "boolean",
            ArgType::Integer => "integer",
            ArgType::String => "string",
        }
    }

    /// The value used when a schema entry supplies no default.
    pub fn zero_value(&self) -> Value {
        match self {
            ArgType::Boolean => Value::Boolean(false),
            ArgType::Integer => Value::Integer(0),
            ArgType::String => Value::String(String::new()),
        }
    }
}

impl fmt::Display for ArgType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a type name is not one of the supported types.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported type '{0}'")]
pub struct UnsupportedType(pub String);

impl FromStr for ArgType {
    type Err = UnsupportedType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "boolean" => Ok(ArgType::Boolean),
            "integer" => Ok(ArgType::Integer),
            "string" => Ok(ArgType::String),
            other => Err(UnsupportedType(other.to_string())),
        }
    }
}
