//! Property values
#![allow(clippy::must_use_candidate)] // Accessors are clear at call sites without #[must_use].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single property value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// String value
    String(String),

    /// Integer value
    Integer(i64),

    /// Decimal value
    Decimal(f64),

    /// Boolean value
    Boolean(bool),

    /// Timestamp value
    DateTime(DateTime<Utc>),

    /// Null/empty value
    Null,
}

impl Value {
    /// Short name of the value kind, used in error messages
    pub fn kind(&self) -> &'static str {
        match self {
            Value::String(_) => "string",
            Value::Integer(_) => "integer",
            Value::Decimal(_) => "decimal",
            Value::Boolean(_) => "boolean",
            Value::DateTime(_) => "datetime",
            Value::Null => "null",
        }
    }

    /// Convert value to string
    pub fn as_string(&self) -> Option<String> {
        match self {
            Value::String(s) => Some(s.clone()),
            Value::Integer(i) => Some(i.to_string()),
            Value::Decimal(d) => Some(d.to_string()),
            Value::Boolean(b) => Some(b.to_string()),
            Value::DateTime(dt) => Some(dt.to_rfc3339()),
            Value::Null => None,
        }
    }

    /// Read the value as an integer.
    ///
    /// Strings are parsed; other kinds are rejected.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::TypeMismatch`] for non-numeric kinds and
    /// [`crate::Error::Conversion`] when a string does not parse.
    pub fn to_integer(&self) -> crate::Result<i64> {
        match self {
            Value::Integer(i) => Ok(*i),
            Value::String(s) => s
                .trim()
                .parse::<i64>()
                .map_err(|e| crate::Error::conversion("integer", format!("'{s}': {e}"))),
            other => Err(crate::Error::type_mismatch("integer", other.kind())),
        }
    }

    /// Check if value is null
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Decimal(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(value: DateTime<Utc>) -> Self {
        Value::DateTime(value)
    }
}
