// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed scalar values produced by coercion.
//!
//! This module provides the `EnvValue` type, the value side of a resolved
//! configuration. Unlike the raw environment string, an `EnvValue` already has
//! the semantic type its schema key declared.

use crate::domain::primitive::PrimitiveType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A resolved configuration value of one of the three primitive types.
///
/// # Examples
///
/// ```
/// use envschema::domain::{EnvValue, PrimitiveType};
///
/// let port = EnvValue::from(5432);
/// assert_eq!(port.primitive_type(), PrimitiveType::Number);
/// assert_eq!(port.as_f64(), Some(5432.0));
/// assert_eq!(port.as_str(), None);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EnvValue {
    /// A `true`/`false` value.
    Boolean(bool),
    /// A numeric value.
    Number(f64),
    /// A string value, unchanged from the environment.
    String(String),
}

impl EnvValue {
    /// Returns the primitive type tag matching this value.
    pub fn primitive_type(&self) -> PrimitiveType {
        match self {
            EnvValue::String(_) => PrimitiveType::String,
            EnvValue::Number(_) => PrimitiveType::Number,
            EnvValue::Boolean(_) => PrimitiveType::Boolean,
        }
    }

    /// Returns the string slice if this is a string value.
    ///
    /// # Examples
    ///
    /// ```
    /// use envschema::domain::EnvValue;
    ///
    /// let value = EnvValue::from("postgres://x");
    /// assert_eq!(value.as_str(), Some("postgres://x"));
    /// ```
    pub fn as_str(&self) -> Option<&str> {
        match self {
            EnvValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the number if this is a numeric value.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            EnvValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the number as an `i64` if it is numeric, integral and in range.
    ///
    /// # Examples
    ///
    /// ```
    /// use envschema::domain::EnvValue;
    ///
    /// assert_eq!(EnvValue::from(42).as_i64(), Some(42));
    /// assert_eq!(EnvValue::from(3.14).as_i64(), None);
    /// ```
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            EnvValue::Number(n) if is_integral(*n) => Some(*n as i64),
            _ => None,
        }
    }

    /// Returns the boolean if this is a boolean value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            EnvValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }
}

/// Whether `n` is a whole number that fits in an `i64` without loss.
pub(crate) fn is_integral(n: f64) -> bool {
    n.is_finite() && n.fract() == 0.0 && n >= i64::MIN as f64 && n < i64::MAX as f64
}

impl From<String> for EnvValue {
    fn from(s: String) -> Self {
        EnvValue::String(s)
    }
}

impl From<&str> for EnvValue {
    fn from(s: &str) -> Self {
        EnvValue::String(s.to_string())
    }
}

impl From<f64> for EnvValue {
    fn from(n: f64) -> Self {
        EnvValue::Number(n)
    }
}

impl From<i32> for EnvValue {
    fn from(n: i32) -> Self {
        EnvValue::Number(f64::from(n))
    }
}

impl From<u32> for EnvValue {
    fn from(n: u32) -> Self {
        EnvValue::Number(f64::from(n))
    }
}

impl From<u16> for EnvValue {
    fn from(n: u16) -> Self {
        EnvValue::Number(f64::from(n))
    }
}

impl From<bool> for EnvValue {
    fn from(b: bool) -> Self {
        EnvValue::Boolean(b)
    }
}

impl fmt::Display for EnvValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnvValue::String(s) => write!(f, "{}", s),
            EnvValue::Number(n) => write!(f, "{}", n),
            EnvValue::Boolean(b) => write!(f, "{}", b),
        }
    }
}
