// SPDX-License-Identifier: MIT OR Apache-2.0

//! The result of resolving a schema.

use crate::domain::env_value::EnvValue;
use crate::domain::errors::{EnvError, Result};
use serde::de::value::MapDeserializer;
use serde::de::DeserializeOwned;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::collections::HashMap;

/// A mapping from configuration key to typed value.
///
/// Entries keep the order of the schema they were resolved from. A strict or
/// defaulting resolution contains every schema key; an optional resolution
/// contains only the keys present in the environment.
///
/// # Examples
///
/// ```
/// use envschema::adapters::MapEnv;
/// use envschema::domain::{PrimitiveType, Schema, SchemaResolver};
/// use envschema::service::EnvResolver;
///
/// # fn main() -> envschema::domain::Result<()> {
/// let env = MapEnv::from_pairs([("PORT", "5432"), ("DEBUG", "true")]);
/// let schema = Schema::new()
///     .field("PORT", PrimitiveType::Number)
///     .field("DEBUG", PrimitiveType::Boolean);
///
/// let config = EnvResolver::new(env).require(&schema)?;
/// assert_eq!(config.get_f64("PORT"), Some(5432.0));
/// assert_eq!(config.get_bool("DEBUG"), Some(true));
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResolvedConfig {
    entries: Vec<(String, EnvValue)>,
}

impl ResolvedConfig {
    /// Creates an empty configuration.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Inserts or replaces a value.
    pub fn insert(&mut self, key: impl Into<String>, value: EnvValue) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Returns the value for a key.
    pub fn get(&self, key: &str) -> Option<&EnvValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Returns the value for a key if it is a string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(EnvValue::as_str)
    }

    /// Returns the value for a key if it is a number.
    pub fn get_f64(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(EnvValue::as_f64)
    }

    /// Returns the value for a key if it is a boolean.
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(EnvValue::as_bool)
    }

    /// Returns `true` if the key has a value.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Iterates over the entries in schema order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &EnvValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterates over the keys in schema order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Converts the configuration into a `HashMap`.
    pub fn into_map(self) -> HashMap<String, EnvValue> {
        self.entries.into_iter().collect()
    }

    /// Converts the configuration into a caller-defined type.
    ///
    /// Each key becomes a field name. Whole numbers fit integer fields, absent
    /// keys fit `Option` fields, and string values fit unit-variant enums.
    ///
    /// # Errors
    ///
    /// Returns `EnvError::DeserializeError` when a field is missing or has the
    /// wrong type.
    ///
    /// # Examples
    ///
    /// ```
    /// use envschema::adapters::MapEnv;
    /// use envschema::domain::{PrimitiveType, Schema, SchemaResolver};
    /// use envschema::service::EnvResolver;
    /// use serde::Deserialize;
    ///
    /// #[derive(Deserialize)]
    /// #[allow(non_snake_case)]
    /// struct AppEnv {
    ///     DB_URL: String,
    ///     PORT: u16,
    ///     DEBUG: bool,
    /// }
    ///
    /// # fn main() -> envschema::domain::Result<()> {
    /// let env = MapEnv::from_pairs([
    ///     ("DB_URL", "postgres://x"),
    ///     ("PORT", "5432"),
    ///     ("DEBUG", "true"),
    /// ]);
    /// let schema = Schema::new()
    ///     .field("DB_URL", PrimitiveType::String)
    ///     .field("PORT", PrimitiveType::Number)
    ///     .field("DEBUG", PrimitiveType::Boolean);
    ///
    /// let app: AppEnv = EnvResolver::new(env).require(&schema)?.deserialize()?;
    /// assert_eq!(app.PORT, 5432);
    /// assert!(app.DEBUG);
    /// # Ok(())
    /// # }
    /// ```
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T> {
        let deserializer = MapDeserializer::new(self.entries.clone().into_iter());
        T::deserialize(deserializer).map_err(|e: serde::de::value::Error| {
            EnvError::DeserializeError {
                message: e.to_string(),
            }
        })
    }
}

impl Serialize for ResolvedConfig {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'a> IntoIterator for &'a ResolvedConfig {
    type Item = (&'a str, &'a EnvValue);
    type IntoIter = Box<dyn Iterator<Item = (&'a str, &'a EnvValue)> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}
