// SPDX-License-Identifier: MIT OR Apache-2.0

//! The closed set of primitive types a schema key can declare.

use crate::domain::errors::{EnvError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The type tag attached to each schema key.
///
/// Only three scalar types are supported. The tag drives coercion of the raw
/// environment string and carries no data itself.
///
/// # Examples
///
/// ```
/// use envschema::domain::PrimitiveType;
///
/// let ty: PrimitiveType = "number".parse().unwrap();
/// assert_eq!(ty, PrimitiveType::Number);
/// assert_eq!(ty.to_string(), "number");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveType {
    /// Any string; never fails coercion.
    String,
    /// A decimal numeric literal, stored as `f64`.
    Number,
    /// Exactly `true` or `false`.
    Boolean,
}

impl PrimitiveType {
    /// Returns the lowercase name used in schemas and error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            PrimitiveType::String => "string",
            PrimitiveType::Number => "number",
            PrimitiveType::Boolean => "boolean",
        }
    }
}

impl FromStr for PrimitiveType {
    type Err = EnvError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "string" => Ok(PrimitiveType::String),
            "number" => Ok(PrimitiveType::Number),
            "boolean" => Ok(PrimitiveType::Boolean),
            _ => Err(EnvError::UnknownType {
                name: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
