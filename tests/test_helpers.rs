// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities and mock implementations for testing.
//!
//! This module provides a mock environment that records every lookup, used to
//! check how resolvers read the environment.

use envschema::prelude::*;
use std::collections::HashMap;
use std::sync::Mutex;

/// A mock environment that records the keys it was asked for.
#[derive(Debug, Default)]
pub struct RecordingEnv {
    values: HashMap<String, String>,
    lookups: Mutex<Vec<String>>,
}

impl RecordingEnv {
    /// Creates an empty recording environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a value to the mock environment.
    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Returns the keys looked up so far, in order.
    pub fn lookups(&self) -> Vec<String> {
        self.lookups.lock().unwrap().clone()
    }
}

impl Environment for RecordingEnv {
    fn name(&self) -> &str {
        "recording"
    }

    fn lookup(&self, key: &str) -> Option<String> {
        self.lookups.lock().unwrap().push(key.to_string());
        self.values.get(key).cloned()
    }
}

/// The schema used by the end-to-end scenarios.
pub fn app_schema() -> Schema {
    Schema::new()
        .field("DB_URL", PrimitiveType::String)
        .field("PORT", PrimitiveType::Number)
        .field("DEBUG", PrimitiveType::Boolean)
}

#[test]
fn test_require_reads_each_key_once_in_schema_order() {
    let resolver = EnvResolver::new(
        RecordingEnv::new()
            .with_value("DB_URL", "postgres://x")
            .with_value("PORT", "5432")
            .with_value("DEBUG", "true"),
    );

    resolver.require(&app_schema()).unwrap();
    assert_eq!(
        resolver.environment().lookups(),
        vec!["DB_URL", "PORT", "DEBUG"]
    );
}

#[test]
fn test_require_keeps_reading_after_missing_key() {
    let resolver = EnvResolver::new(RecordingEnv::new().with_value("DEBUG", "false"));

    let err = resolver.require(&app_schema()).unwrap_err();
    assert!(matches!(err, EnvError::MissingKeys { .. }));
    assert_eq!(resolver.environment().lookups().len(), 3);
}

#[test]
fn test_require_stops_at_malformed_value() {
    let resolver = EnvResolver::new(
        RecordingEnv::new()
            .with_value("DB_URL", "postgres://x")
            .with_value("PORT", "eighty")
            .with_value("DEBUG", "true"),
    );

    assert!(resolver.require(&app_schema()).is_err());
    assert_eq!(resolver.environment().lookups(), vec!["DB_URL", "PORT"]);
}

#[test]
fn test_validate_enum_with_value_does_not_read_environment() {
    let resolver = EnvResolver::new(RecordingEnv::new());

    resolver
        .validate_enum("LOG_LEVEL", &["info", "warn"], Some("info"))
        .unwrap();
    assert!(resolver.environment().lookups().is_empty());
}

#[test]
fn test_with_defaults_reads_every_key() {
    let resolver = EnvResolver::new(RecordingEnv::new().with_value("DEBUG", "true"));
    let schema = DefaultingSchema::new()
        .field("PORT", 3000)
        .field("DEBUG", false);

    let config = resolver.with_defaults(&schema).unwrap();
    assert_eq!(config.get_bool("DEBUG"), Some(true));
    assert_eq!(resolver.environment().lookups(), vec!["PORT", "DEBUG"]);
}
