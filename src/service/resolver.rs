// SPDX-License-Identifier: MIT OR Apache-2.0

//! Default schema resolver implementation.
//!
//! This module provides `EnvResolver`, which implements the `SchemaResolver`
//! trait over any `Environment`.

use crate::domain::{
    coerce, DefaultingSchema, EnvError, EnvValue, PrimitiveType, ResolvedConfig, Result, Schema,
    SchemaResolver,
};
use crate::ports::Environment;
use std::fmt::Display;
use std::str::FromStr;

/// Resolves schemas against an [`Environment`].
///
/// The resolver holds no state besides the environment. Each operation reads
/// every schema key once, in schema order.
///
/// # Examples
///
/// ```rust
/// use envschema::adapters::MapEnv;
/// use envschema::domain::{PrimitiveType, Schema, SchemaResolver};
/// use envschema::service::EnvResolver;
///
/// # fn main() -> envschema::domain::Result<()> {
/// let resolver = EnvResolver::new(MapEnv::from_pairs([
///     ("DB_URL", "postgres://x"),
///     ("PORT", "5432"),
///     ("DEBUG", "true"),
/// ]));
///
/// let schema = Schema::new()
///     .field("DB_URL", PrimitiveType::String)
///     .field("PORT", PrimitiveType::Number)
///     .field("DEBUG", PrimitiveType::Boolean);
///
/// let config = resolver.require(&schema)?;
/// assert_eq!(config.get_str("DB_URL"), Some("postgres://x"));
/// assert_eq!(config.get_f64("PORT"), Some(5432.0));
/// assert_eq!(config.get_bool("DEBUG"), Some(true));
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default)]
pub struct EnvResolver<E> {
    env: E,
}

impl<E: Environment> EnvResolver<E> {
    /// Creates a resolver reading from `env`.
    pub fn new(env: E) -> Self {
        Self { env }
    }

    /// Returns the underlying environment.
    pub fn environment(&self) -> &E {
        &self.env
    }

    /// Validates an enum value and parses it into a caller type.
    ///
    /// This runs [`SchemaResolver::validate_enum`] and then `T::from_str` on the
    /// accepted value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use envschema::adapters::MapEnv;
    /// use envschema::service::EnvResolver;
    /// use std::str::FromStr;
    ///
    /// #[derive(Debug, PartialEq)]
    /// enum Level { Info, Warn }
    ///
    /// impl FromStr for Level {
    ///     type Err = String;
    ///     fn from_str(s: &str) -> Result<Self, String> {
    ///         match s {
    ///             "info" => Ok(Level::Info),
    ///             "warn" => Ok(Level::Warn),
    ///             other => Err(format!("unknown level {}", other)),
    ///         }
    ///     }
    /// }
    ///
    /// let resolver = EnvResolver::new(MapEnv::from_pairs([("LOG_LEVEL", "warn")]));
    /// let level: Level = resolver
    ///     .validate_enum_as("LOG_LEVEL", &["info", "warn"], None)
    ///     .unwrap();
    /// assert_eq!(level, Level::Warn);
    /// ```
    pub fn validate_enum_as<T>(
        &self,
        key: &str,
        allowed: &[&str],
        value: Option<&str>,
    ) -> Result<T>
    where
        T: FromStr,
        T::Err: Display,
    {
        let accepted = self.validate_enum(key, allowed, value)?;
        accepted.parse::<T>().map_err(|e| EnvError::EnumParseError {
            key: self.env.variable_name(key),
            value: accepted.to_string(),
            message: e.to_string(),
        })
    }

    // Coercion errors name the variable as the environment spells it.
    fn coerce(&self, key: &str, raw: &str, ty: PrimitiveType) -> Result<EnvValue> {
        coerce(&self.env.variable_name(key), raw, ty)
    }
}

#[cfg(feature = "env")]
impl EnvResolver<crate::adapters::ProcessEnv> {
    /// Creates a resolver over the process environment.
    pub fn from_process() -> Self {
        Self::new(crate::adapters::ProcessEnv::new())
    }
}

impl<E: Environment> SchemaResolver for EnvResolver<E> {
    fn require(&self, schema: &Schema) -> Result<ResolvedConfig> {
        let mut config = ResolvedConfig::new();
        let mut missing = Vec::new();

        for (key, ty) in schema.iter() {
            match self.env.lookup(key) {
                Some(raw) => config.insert(key, self.coerce(key, &raw, ty)?),
                None => missing.push(self.env.variable_name(key)),
            }
        }

        if !missing.is_empty() {
            return Err(EnvError::MissingKeys { keys: missing });
        }

        tracing::debug!(
            "Resolved {} required keys from '{}'",
            config.len(),
            self.env.name()
        );
        Ok(config)
    }

    fn optional(&self, schema: &Schema) -> Result<ResolvedConfig> {
        let mut config = ResolvedConfig::new();

        for (key, ty) in schema.iter() {
            if let Some(raw) = self.env.lookup(key) {
                config.insert(key, self.coerce(key, &raw, ty)?);
            }
        }

        tracing::debug!(
            "Resolved {} of {} optional keys from '{}'",
            config.len(),
            schema.len(),
            self.env.name()
        );
        Ok(config)
    }

    fn with_defaults(&self, schema: &DefaultingSchema) -> Result<ResolvedConfig> {
        let mut config = ResolvedConfig::new();
        let mut defaulted = 0;

        for (key, spec) in schema.iter() {
            match self.env.lookup(key) {
                Some(raw) => config.insert(key, self.coerce(key, &raw, spec.ty())?),
                None => {
                    defaulted += 1;
                    config.insert(key, spec.default_value().clone());
                }
            }
        }

        tracing::debug!(
            "Resolved {} keys from '{}' ({} defaulted)",
            config.len(),
            self.env.name(),
            defaulted
        );
        Ok(config)
    }

    fn validate_enum<'a>(
        &self,
        key: &str,
        allowed: &'a [&'a str],
        value: Option<&str>,
    ) -> Result<&'a str> {
        let value = match value {
            Some(value) => value.to_string(),
            None => self.env.lookup(key).ok_or_else(|| EnvError::MissingKey {
                key: self.env.variable_name(key),
            })?,
        };

        allowed
            .iter()
            .copied()
            .find(|candidate| *candidate == value)
            .ok_or_else(|| EnvError::InvalidEnumValue {
                key: self.env.variable_name(key),
                value,
                allowed: allowed.iter().map(|s| s.to_string()).collect(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MapEnv;

    /// Serves keys from an inner map under `APP_` names.
    struct PrefixedEnv(MapEnv);

    impl Environment for PrefixedEnv {
        fn name(&self) -> &str {
            "prefixed"
        }

        fn lookup(&self, key: &str) -> Option<String> {
            self.0.lookup(&self.variable_name(key))
        }

        fn variable_name(&self, key: &str) -> String {
            format!("APP_{}", key)
        }
    }

    fn full_schema() -> Schema {
        Schema::new()
            .field("DB_URL", PrimitiveType::String)
            .field("PORT", PrimitiveType::Number)
            .field("DEBUG", PrimitiveType::Boolean)
    }

    #[test]
    fn test_require_all_present() {
        let resolver = EnvResolver::new(MapEnv::from_pairs([
            ("DB_URL", "postgres://x"),
            ("PORT", "5432"),
            ("DEBUG", "true"),
        ]));

        let config = resolver.require(&full_schema()).unwrap();
        assert_eq!(config.len(), 3);
        assert_eq!(config.get("DB_URL"), Some(&EnvValue::from("postgres://x")));
        assert_eq!(config.get("PORT"), Some(&EnvValue::Number(5432.0)));
        assert_eq!(config.get("DEBUG"), Some(&EnvValue::Boolean(true)));
    }

    #[test]
    fn test_require_aggregates_missing_in_schema_order() {
        let resolver = EnvResolver::new(MapEnv::from_pairs([("PORT", "5432")]));

        let err = resolver.require(&full_schema()).unwrap_err();
        match err {
            EnvError::MissingKeys { keys } => assert_eq!(keys, vec!["DB_URL", "DEBUG"]),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_require_coercion_error_short_circuits() {
        // PORT is malformed and comes before the missing DEBUG key
        let resolver = EnvResolver::new(MapEnv::from_pairs([
            ("DB_URL", "postgres://x"),
            ("PORT", "not-a-port"),
        ]));

        let err = resolver.require(&full_schema()).unwrap_err();
        assert!(matches!(err, EnvError::InvalidNumber { ref key, .. } if key == "PORT"));
    }

    #[test]
    fn test_require_missing_before_malformed_still_fails_on_malformed() {
        let resolver = EnvResolver::new(MapEnv::from_pairs([("DEBUG", "yes")]));

        let err = resolver.require(&full_schema()).unwrap_err();
        assert!(matches!(err, EnvError::InvalidBoolean { ref key, .. } if key == "DEBUG"));
    }

    #[test]
    fn test_require_empty_value_is_present() {
        let resolver = EnvResolver::new(MapEnv::from_pairs([("DB_URL", "")]));
        let schema = Schema::new().field("DB_URL", PrimitiveType::String);

        let config = resolver.require(&schema).unwrap();
        assert_eq!(config.get_str("DB_URL"), Some(""));
    }

    #[test]
    fn test_optional_skips_absent() {
        let resolver = EnvResolver::new(MapEnv::from_pairs([("PORT", "6379")]));

        let config = resolver.optional(&full_schema()).unwrap();
        let keys: Vec<&str> = config.keys().collect();
        assert_eq!(keys, vec!["PORT"]);
        assert!(!config.contains_key("DB_URL"));
    }

    #[test]
    fn test_optional_empty_environment() {
        let resolver = EnvResolver::new(MapEnv::new());
        assert!(resolver.optional(&full_schema()).unwrap().is_empty());
    }

    #[test]
    fn test_optional_malformed_fails() {
        let resolver = EnvResolver::new(MapEnv::from_pairs([("DEBUG", "1")]));
        let err = resolver.optional(&full_schema()).unwrap_err();
        assert!(matches!(err, EnvError::InvalidBoolean { .. }));
    }

    #[test]
    fn test_with_defaults_uses_default_verbatim() {
        let resolver = EnvResolver::new(MapEnv::new());
        let schema = DefaultingSchema::new().field("PORT", 3000).field("DEBUG", false);

        let config = resolver.with_defaults(&schema).unwrap();
        assert_eq!(config.get("PORT"), Some(&EnvValue::Number(3000.0)));
        assert_eq!(config.get("DEBUG"), Some(&EnvValue::Boolean(false)));
    }

    #[test]
    fn test_with_defaults_prefers_environment() {
        let resolver = EnvResolver::new(MapEnv::from_pairs([("PORT", "8080")]));
        let schema = DefaultingSchema::new().field("PORT", 3000).field("DEBUG", false);

        let config = resolver.with_defaults(&schema).unwrap();
        assert_eq!(config.get_f64("PORT"), Some(8080.0));
        assert_eq!(config.get_bool("DEBUG"), Some(false));
    }

    #[test]
    fn test_with_defaults_malformed_fails() {
        let resolver = EnvResolver::new(MapEnv::from_pairs([("PORT", "")]));
        let schema = DefaultingSchema::new().field("PORT", 3000);

        let err = resolver.with_defaults(&schema).unwrap_err();
        assert!(matches!(err, EnvError::InvalidNumber { .. }));
    }

    #[test]
    fn test_validate_enum_explicit_value() {
        let resolver = EnvResolver::new(MapEnv::new());
        assert_eq!(
            resolver.validate_enum("MODE", &["a", "b"], Some("b")).unwrap(),
            "b"
        );
    }

    #[test]
    fn test_validate_enum_invalid_lists_allowed() {
        let resolver = EnvResolver::new(MapEnv::new());
        let err = resolver
            .validate_enum("MODE", &["a", "b"], Some("c"))
            .unwrap_err();
        assert_eq!(err.to_string(), "Environment variable MODE must be one of a, b");
        assert!(matches!(err, EnvError::InvalidEnumValue { ref value, .. } if value == "c"));
    }

    #[test]
    fn test_validate_enum_reads_environment() {
        let resolver = EnvResolver::new(MapEnv::from_pairs([("LOG_LEVEL", "warn")]));
        assert_eq!(
            resolver
                .validate_enum("LOG_LEVEL", &["info", "warn", "error"], None)
                .unwrap(),
            "warn"
        );
    }

    #[test]
    fn test_validate_enum_explicit_value_overrides_environment() {
        let resolver = EnvResolver::new(MapEnv::from_pairs([("LOG_LEVEL", "bogus")]));
        assert_eq!(
            resolver
                .validate_enum("LOG_LEVEL", &["info", "warn"], Some("info"))
                .unwrap(),
            "info"
        );
    }

    #[test]
    fn test_validate_enum_missing() {
        let resolver = EnvResolver::new(MapEnv::new());
        let err = resolver.validate_enum("MODE", &["a", "b"], None).unwrap_err();
        assert!(matches!(err, EnvError::MissingKey { ref key } if key == "MODE"));
    }

    #[test]
    fn test_validate_enum_is_case_sensitive() {
        let resolver = EnvResolver::new(MapEnv::new());
        assert!(resolver.validate_enum("MODE", &["a"], Some("A")).is_err());
    }

    #[test]
    fn test_validate_enum_empty_allow_set_rejects() {
        let resolver = EnvResolver::new(MapEnv::new());
        assert!(matches!(
            resolver.validate_enum("MODE", &[], Some("a")),
            Err(EnvError::InvalidEnumValue { .. })
        ));
    }

    #[test]
    fn test_validate_enum_as_parse_failure() {
        let resolver = EnvResolver::new(MapEnv::new());
        let err = resolver
            .validate_enum_as::<u8>("LEVEL", &["1", "high"], Some("high"))
            .unwrap_err();
        assert!(matches!(err, EnvError::EnumParseError { .. }));

        let level: u8 = resolver
            .validate_enum_as("LEVEL", &["1", "high"], Some("1"))
            .unwrap();
        assert_eq!(level, 1);
    }

    #[test]
    fn test_errors_name_the_variable_read() {
        let resolver = EnvResolver::new(PrefixedEnv(MapEnv::from_pairs([("APP_PORT", "eighty")])));

        let err = resolver.require(&full_schema()).unwrap_err();
        assert_eq!(err.to_string(), "Environment variable APP_PORT must be a number");

        let err = resolver
            .require(&Schema::new().field("DB_URL", PrimitiveType::String))
            .unwrap_err();
        assert_eq!(err.to_string(), "Missing environment variables: APP_DB_URL");

        let err = resolver.validate_enum("MODE", &["a"], None).unwrap_err();
        assert!(matches!(err, EnvError::MissingKey { ref key } if key == "APP_MODE"));

        let err = resolver.validate_enum("MODE", &["a"], Some("b")).unwrap_err();
        assert!(matches!(err, EnvError::InvalidEnumValue { ref key, .. } if key == "APP_MODE"));
    }

    #[test]
    fn test_resolved_keys_stay_schema_keys() {
        let resolver = EnvResolver::new(PrefixedEnv(MapEnv::from_pairs([("APP_PORT", "8080")])));
        let schema = Schema::new().field("PORT", PrimitiveType::Number);

        let config = resolver.require(&schema).unwrap();
        assert_eq!(config.get_f64("PORT"), Some(8080.0));
        assert!(!config.contains_key("APP_PORT"));
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let resolver = EnvResolver::new(MapEnv::from_pairs([("PORT", "5432")]));
        let schema = full_schema();

        assert_eq!(
            resolver.optional(&schema).unwrap(),
            resolver.optional(&schema).unwrap()
        );
    }
}
