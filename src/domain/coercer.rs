// SPDX-License-Identifier: MIT OR Apache-2.0

//! Scalar coercion from raw environment strings to typed values.

use crate::domain::env_value::EnvValue;
use crate::domain::errors::{EnvError, Result};
use crate::domain::primitive::PrimitiveType;

/// Converts a raw environment string into a value of the expected type.
///
/// - `string` returns the raw value unchanged.
/// - `number` accepts finite decimal numerals: signs, decimals and scientific
///   notation. NaN, infinity in any spelling, literals that overflow `f64` and
///   the empty string are not numbers.
/// - `boolean` accepts exactly `"true"` or `"false"`, case-sensitive.
///
/// The key is only used to build the error.
///
/// # Examples
///
/// ```
/// use envschema::domain::{coerce, EnvValue, PrimitiveType};
///
/// assert_eq!(coerce("PORT", "5432", PrimitiveType::Number).unwrap(), EnvValue::from(5432));
/// assert_eq!(coerce("DEBUG", "true", PrimitiveType::Boolean).unwrap(), EnvValue::from(true));
/// assert!(coerce("DEBUG", "TRUE", PrimitiveType::Boolean).is_err());
/// ```
pub fn coerce(key: &str, raw: &str, expected: PrimitiveType) -> Result<EnvValue> {
    match expected {
        PrimitiveType::String => Ok(EnvValue::String(raw.to_string())),
        PrimitiveType::Number => match raw.parse::<f64>() {
            Ok(n) if n.is_finite() => Ok(EnvValue::Number(n)),
            _ => Err(EnvError::invalid_number(key, raw)),
        },
        PrimitiveType::Boolean => match raw {
            "true" => Ok(EnvValue::Boolean(true)),
            "false" => Ok(EnvValue::Boolean(false)),
            _ => Err(EnvError::invalid_boolean(key, raw)),
        },
    }
}
