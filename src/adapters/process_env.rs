// SPDX-License-Identifier: MIT OR Apache-2.0

//! Process environment adapter.
//!
//! This module provides an adapter that reads values from the environment of
//! the running process.

use crate::adapters::MapEnv;
use crate::ports::Environment;
use std::env;

/// Environment adapter for the process environment.
///
/// Every lookup reads `std::env` directly; nothing is cached, so a resolver
/// performs exactly one read per key. Values that are not valid Unicode are
/// treated as absent.
///
/// An optional prefix is prepended to every key before it is read, so a schema
/// declaring `PORT` can be served from `MYAPP_PORT`. Errors name the prefixed
/// variable, since that is the one the user has to set.
///
/// # Examples
///
/// ```rust
/// use envschema::adapters::ProcessEnv;
/// use envschema::ports::Environment;
///
/// // Read variables by their schema name
/// let env = ProcessEnv::new();
///
/// // Read `MYAPP_PORT` when the schema asks for `PORT`
/// let env = ProcessEnv::with_prefix("MYAPP_");
/// assert_eq!(env.prefix(), Some("MYAPP_"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct ProcessEnv {
    /// Optional prefix prepended to every key
    prefix: Option<String>,
}

impl ProcessEnv {
    /// Creates an adapter that reads keys unchanged.
    pub fn new() -> Self {
        Self { prefix: None }
    }

    /// Creates an adapter that prepends `prefix` to every key.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: Some(prefix.into()),
        }
    }

    /// Returns the configured prefix.
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    fn full_key(&self, key: &str) -> String {
        match &self.prefix {
            Some(prefix) => format!("{}{}", prefix, key),
            None => key.to_string(),
        }
    }

    /// Copies the matching part of the process environment into a [`MapEnv`].
    ///
    /// Resolving against a snapshot reads every key from the same point in time.
    /// With a prefix, only prefixed variables are copied and the prefix is
    /// stripped. Non-Unicode variables are skipped, as [`Environment::lookup`]
    /// treats them as absent.
    pub fn snapshot(&self) -> MapEnv {
        let mut values = MapEnv::new();

        for (key, value) in env::vars_os() {
            let (Ok(key), Ok(value)) = (key.into_string(), value.into_string()) else {
                tracing::debug!("Skipping non-Unicode environment variable");
                continue;
            };

            let key = match &self.prefix {
                Some(prefix) => match key.strip_prefix(prefix.as_str()) {
                    Some(stripped) => stripped.to_string(),
                    None => continue,
                },
                None => key,
            };

            values.insert(key, value);
        }

        tracing::debug!(
            "Captured {} environment variables (prefix={:?})",
            values.len(),
            self.prefix
        );

        values
    }
}

impl Environment for ProcessEnv {
    fn name(&self) -> &str {
        "process"
    }

    fn variable_name(&self, key: &str) -> String {
        self.full_key(key)
    }

    fn lookup(&self, key: &str) -> Option<String> {
        let full_key = self.full_key(key);
        match env::var(&full_key) {
            Ok(value) => Some(value),
            Err(env::VarError::NotPresent) => None,
            Err(env::VarError::NotUnicode(_)) => {
                tracing::debug!("Ignoring non-Unicode value for '{}'", full_key);
                None
            }
        }
    }
}
