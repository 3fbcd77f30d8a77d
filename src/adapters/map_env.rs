// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory environment adapter.
//!
//! `MapEnv` holds a plain key/value map. It is what tests use, and it is the
//! natural target for an external `.env` loader or a snapshot of the process
//! environment.

use crate::ports::Environment;
use std::collections::HashMap;

/// An environment backed by an in-memory map.
///
/// # Examples
///
/// ```rust
/// use envschema::adapters::MapEnv;
/// use envschema::ports::Environment;
///
/// let env = MapEnv::new()
///     .with_value("DB_URL", "postgres://x")
///     .with_value("PORT", "5432");
///
/// assert_eq!(env.lookup("PORT").as_deref(), Some("5432"));
/// assert_eq!(env.lookup("DEBUG"), None);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MapEnv {
    values: HashMap<String, String>,
}

impl MapEnv {
    /// Creates an empty environment.
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Creates an environment from key/value pairs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use envschema::adapters::MapEnv;
    ///
    /// let env = MapEnv::from_pairs([("A", "1"), ("B", "2")]);
    /// assert_eq!(env.len(), 2);
    /// ```
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self {
            values: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Adds a value, returning the environment for chaining.
    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Adds or replaces a value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Removes a value.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.values.remove(key)
    }

    /// Returns the number of values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the environment has no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl From<HashMap<String, String>> for MapEnv {
    fn from(values: HashMap<String, String>) -> Self {
        Self { values }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MapEnv {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_pairs(iter)
    }
}

impl Environment for MapEnv {
    fn name(&self) -> &str {
        "map"
    }

    fn lookup(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}
