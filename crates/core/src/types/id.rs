//! Identifier types for customers and check-ins.
//!
//! Customer IDs are chosen by the caller and arrive either as JSON strings or
//! JSON numbers. Both forms are normalized to a string so that `42` and `"42"`
//! address the same customer.

use core::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// Errors that can occur when parsing a [`CustomerId`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CustomerIdError {
    /// The field is absent, `null`, `false`, or numeric zero.
    #[error("customer id is missing")]
    Missing,
    /// The input string is empty.
    #[error("customer id cannot be empty")]
    Empty,
    /// The JSON value is an array or an object.
    #[error("customer id must be a scalar, got {0}")]
    InvalidType(&'static str),
}

/// A caller-supplied customer identifier.
///
/// ## Constraints
///
/// - Validated IDs (via [`CustomerId::parse`] or [`CustomerId::from_json`])
///   are never empty
/// - Lookup keys taken from a URL path are accepted as-is via `From<String>`
///
/// ## Examples
///
/// ```
/// use punchcard_core::CustomerId;
/// use serde_json::json;
///
/// assert!(CustomerId::parse("42").is_ok());
/// assert!(CustomerId::parse("").is_err());
///
/// // Numbers and strings normalize to the same key
/// let from_number = CustomerId::from_json(&json!(42)).unwrap();
/// let from_string = CustomerId::from_json(&json!("42")).unwrap();
/// assert_eq!(from_number, from_string);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(String);

impl CustomerId {
    /// Parse a `CustomerId` from a string.
    ///
    /// # Errors
    ///
    /// Returns [`CustomerIdError::Empty`] if the input is empty.
    pub fn parse(s: &str) -> Result<Self, CustomerIdError> {
        if s.is_empty() {
            return Err(CustomerIdError::Empty);
        }
        Ok(Self(s.to_owned()))
    }

    /// Parse a `CustomerId` from an optional JSON value.
    ///
    /// Accepts non-empty strings, non-zero numbers, and `true` (as `"true"`).
    /// Absent values, `null`, `false`, and `0` are treated as missing.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is missing, an empty string, an array,
    /// or an object.
    pub fn from_json_opt(value: Option<&Value>) -> Result<Self, CustomerIdError> {
        value.map_or(Err(CustomerIdError::Missing), Self::from_json)
    }

    /// Parse a `CustomerId` from a JSON value.
    ///
    /// # Errors
    ///
    /// See [`CustomerId::from_json_opt`].
    pub fn from_json(value: &Value) -> Result<Self, CustomerIdError> {
        match value {
            Value::String(s) => Self::parse(s),
            Value::Number(n) => Self::from_number(n),
            Value::Null | Value::Bool(false) => Err(CustomerIdError::Missing),
            Value::Bool(true) => Ok(Self("true".to_string())),
            Value::Array(_) => Err(CustomerIdError::InvalidType("array")),
            Value::Object(_) => Err(CustomerIdError::InvalidType("object")),
        }
    }

    fn from_number(n: &Number) -> Result<Self, CustomerIdError> {
        number_to_string(n).map(Self).ok_or(CustomerIdError::Missing)
    }

    /// Returns the customer ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `CustomerId` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for CustomerId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for CustomerId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Render a JSON number the way it reads as a key or display name.
///
/// Whole floats such as `42.0` print as `42`. Returns `None` for zero and
/// non-finite values, which count as absent.
#[must_use]
// Zero and whole-number checks are exact; the cast is guarded by the range check
#[allow(clippy::float_cmp, clippy::cast_possible_truncation)]
pub fn number_to_string(n: &Number) -> Option<String> {
    if let Some(i) = n.as_i64() {
        return (i != 0).then(|| i.to_string());
    }
    if let Some(u) = n.as_u64() {
        return Some(u.to_string());
    }

    let f = n.as_f64()?;
    if f == 0.0 || !f.is_finite() {
        return None;
    }
    if f.fract() == 0.0 && f.abs() < 9_007_199_254_740_992.0 {
        return Some((f as i64).to_string());
    }
    Some(f.to_string())
}

/// Check-in identifier: the creation time in milliseconds since the Unix epoch.
///
/// Two check-ins recorded within the same millisecond share an ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CheckinId(i64);

impl CheckinId {
    /// Derive the ID from a creation timestamp.
    #[must_use]
    pub fn from_timestamp(at: &DateTime<Utc>) -> Self {
        Self(at.timestamp_millis())
    }

    /// Get the underlying millisecond value.
    #[must_use]
    pub const fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for CheckinId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
