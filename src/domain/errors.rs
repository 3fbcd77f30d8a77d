// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the environment loader.
//!
//! This module defines the errors that can occur while resolving a schema against
//! an environment. All errors use `thiserror` for display and source chaining.

use thiserror::Error;

/// The main error type for environment resolution.
///
/// Every variant names the offending key (or keys) so the caller can report a
/// useful diagnostic at startup. It is marked as `#[non_exhaustive]` to allow
/// for future additions without breaking backwards compatibility.
///
/// # Examples
///
/// ```
/// use envschema::domain::errors::EnvError;
///
/// let error = EnvError::MissingKeys {
///     keys: vec!["DB_URL".to_string(), "PORT".to_string()],
/// };
/// assert_eq!(error.to_string(), "Missing environment variables: DB_URL, PORT");
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EnvError {
    /// One or more required keys were absent from the environment.
    #[error("Missing environment variables: {}", .keys.join(", "))]
    MissingKeys {
        /// The absent keys, in schema order
        keys: Vec<String>,
    },

    /// A present value could not be parsed as a number.
    #[error("Environment variable {key} must be a number")]
    InvalidNumber {
        /// The offending key
        key: String,
        /// The raw value that failed to parse
        value: String,
    },

    /// A present value was neither `true` nor `false`.
    #[error("Environment variable {key} must be either true or false")]
    InvalidBoolean {
        /// The offending key
        key: String,
        /// The raw value that failed to parse
        value: String,
    },

    /// A single key needed for enum validation was absent.
    #[error("Missing environment variable {key}")]
    MissingKey {
        /// The absent key
        key: String,
    },

    /// A present value was not a member of the allow-set.
    #[error("Environment variable {key} must be one of {}", .allowed.join(", "))]
    InvalidEnumValue {
        /// The offending key
        key: String,
        /// The rejected value
        value: String,
        /// The allowed values, in allow-set order
        allowed: Vec<String>,
    },

    /// A validated enum value could not be converted into the caller's type.
    #[error("Environment variable {key} value '{value}' could not be converted: {message}")]
    EnumParseError {
        /// The offending key
        key: String,
        /// The validated value
        value: String,
        /// The conversion error message
        message: String,
    },

    /// A type name was not one of `string`, `number` or `boolean`.
    #[error("Unknown primitive type '{name}', expected one of string, number, boolean")]
    UnknownType {
        /// The unrecognized type name
        name: String,
    },

    /// A declarative schema could not be loaded.
    #[error("Failed to load schema: {message}")]
    SchemaError {
        /// The error message
        message: String,
        /// The underlying parsing error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A resolved configuration could not be converted into the requested type.
    #[error("Failed to deserialize resolved configuration: {message}")]
    DeserializeError {
        /// The error message
        message: String,
    },

    /// An I/O error occurred while reading a schema file.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl EnvError {
    /// Creates an `InvalidNumber` error for the given key and raw value.
    pub fn invalid_number(key: impl Into<String>, value: impl Into<String>) -> Self {
        EnvError::InvalidNumber {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Creates an `InvalidBoolean` error for the given key and raw value.
    pub fn invalid_boolean(key: impl Into<String>, value: impl Into<String>) -> Self {
        EnvError::InvalidBoolean {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Returns the key the error refers to, if it concerns a single key.
    pub fn key(&self) -> Option<&str> {
        match self {
            EnvError::InvalidNumber { key, .. }
            | EnvError::InvalidBoolean { key, .. }
            | EnvError::MissingKey { key }
            | EnvError::InvalidEnumValue { key, .. }
            | EnvError::EnumParseError { key, .. } => Some(key.as_str()),
            _ => None,
        }
    }
}

/// A specialized Result type for environment resolution.
pub type Result<T> = std::result::Result<T, EnvError>;
