// SPDX-License-Identifier: MIT OR Apache-2.0

//! YAML schema loading.
//!
//! Schemas can be declared in YAML instead of code. Keys keep the order they
//! appear in the document.
//!
//! A required or optional schema is a mapping from key to type name:
//!
//! ```yaml
//! DB_URL: string
//! PORT: number
//! DEBUG: boolean
//! ```
//!
//! A defaulting schema maps each key to its type and default, either as a
//! mapping or as a two-element sequence:
//!
//! ```yaml
//! PORT: { type: number, default: 3000 }
//! DEBUG: [boolean, false]
//! ```

use crate::domain::{
    DefaultingSchema, EnvError, EnvValue, FieldDefault, PrimitiveType, Result, Schema,
};
use serde::Deserialize;
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Maximum allowed size for schema files (1MB)
const MAX_SCHEMA_FILE_SIZE: u64 = 1024 * 1024;

fn schema_error(message: impl Into<String>) -> EnvError {
    EnvError::SchemaError {
        message: message.into(),
        source: None,
    }
}

fn parse_mapping(content: &str) -> Result<Mapping> {
    let value: Value = serde_yaml::from_str(content).map_err(|e| EnvError::SchemaError {
        message: format!("Failed to parse YAML: {}", e),
        source: Some(Box::new(e)),
    })?;

    match value {
        Value::Mapping(mapping) => Ok(mapping),
        Value::Null => Ok(Mapping::new()),
        _ => Err(schema_error("schema document must be a mapping")),
    }
}

fn read_schema_file(path: &Path) -> Result<String> {
    let metadata = fs::metadata(path)?;
    if metadata.len() > MAX_SCHEMA_FILE_SIZE {
        return Err(schema_error(format!(
            "Schema file too large: {} bytes (max {} bytes)",
            metadata.len(),
            MAX_SCHEMA_FILE_SIZE
        )));
    }

    let content = fs::read_to_string(path)?;
    tracing::debug!("Read schema file {} ({} bytes)", path.display(), content.len());
    Ok(content)
}

fn key_str(key: &Value) -> Result<&str> {
    key.as_str()
        .ok_or_else(|| schema_error(format!("schema keys must be strings, found {:?}", key)))
}

fn type_of(key: &str, value: &Value) -> Result<PrimitiveType> {
    value
        .as_str()
        .ok_or_else(|| schema_error(format!("type of '{}' must be a string", key)))?
        .parse()
}

fn default_of(key: &str, value: &Value) -> Result<EnvValue> {
    EnvValue::deserialize(value).map_err(|e| EnvError::SchemaError {
        message: format!("default of '{}' must be a string, number or boolean", key),
        source: Some(Box::new(e)),
    })
}

fn field_default_of(key: &str, value: &Value) -> Result<FieldDefault> {
    let (ty, default) = match value {
        Value::Mapping(spec) => {
            let ty = spec
                .get("type")
                .ok_or_else(|| schema_error(format!("'{}' is missing 'type'", key)))?;
            let default = spec
                .get("default")
                .ok_or_else(|| schema_error(format!("'{}' is missing 'default'", key)))?;
            (ty, default)
        }
        Value::Sequence(pair) if pair.len() == 2 => (&pair[0], &pair[1]),
        _ => {
            return Err(schema_error(format!(
                "'{}' must be {{ type, default }} or [type, default]",
                key
            )))
        }
    };

    FieldDefault::try_new(key, type_of(key, ty)?, default_of(key, default)?)
}

impl Schema {
    /// Parses a schema from a YAML mapping of key to type name.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use envschema::domain::{PrimitiveType, Schema};
    ///
    /// let schema = Schema::from_yaml_str("DB_URL: string\nPORT: number\n").unwrap();
    /// assert_eq!(schema.get("PORT"), Some(PrimitiveType::Number));
    /// ```
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let mut schema = Schema::new();
        for (key, value) in &parse_mapping(content)? {
            let key = key_str(key)?;
            schema.insert(key, type_of(key, value)?);
        }
        Ok(schema)
    }

    /// Reads and parses a YAML schema file. See [`Schema::from_yaml_str`].
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_yaml_str(&read_schema_file(path.as_ref())?)
    }
}

impl DefaultingSchema {
    /// Parses a defaulting schema from YAML.
    ///
    /// # Errors
    ///
    /// Returns `EnvError::SchemaError` when a default does not match its declared
    /// type, and `EnvError::UnknownType` for an unrecognized type name.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use envschema::domain::{DefaultingSchema, EnvValue};
    ///
    /// let schema = DefaultingSchema::from_yaml_str(
    ///     "PORT: { type: number, default: 3000 }\nDEBUG: [boolean, false]\n",
    /// )
    /// .unwrap();
    /// assert_eq!(schema.get("PORT").unwrap().default_value(), &EnvValue::from(3000));
    /// ```
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let mut schema = DefaultingSchema::new();
        for (key, value) in &parse_mapping(content)? {
            let key = key_str(key)?;
            schema.insert(key, field_default_of(key, value)?);
        }
        Ok(schema)
    }

    /// Reads and parses a YAML defaulting schema file. See [`DefaultingSchema::from_yaml_str`].
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_yaml_str(&read_schema_file(path.as_ref())?)
    }
}
