// SPDX-License-Identifier: MIT OR Apache-2.0

//! Schema resolver trait definition.
//!
//! This module defines the `SchemaResolver` trait, the main interface of the crate.
//! It provides the four resolution operations: strict, optional, defaulting and
//! enum validation.

use crate::domain::{DefaultingSchema, ResolvedConfig, Result, Schema};

/// Resolves schemas against an environment.
///
/// Every operation is a single synchronous pass with no retry. Errors are
/// returned on the first malformed value; only absence in [`require`] is
/// collected across all keys before failing.
///
/// [`require`]: SchemaResolver::require
///
/// # Examples
///
/// ```rust
/// use envschema::adapters::MapEnv;
/// use envschema::domain::{PrimitiveType, Schema, SchemaResolver};
/// use envschema::service::EnvResolver;
///
/// fn port(resolver: &dyn SchemaResolver) -> Option<f64> {
///     let schema = Schema::new().field("PORT", PrimitiveType::Number);
///     resolver.optional(&schema).ok()?.get_f64("PORT")
/// }
///
/// let resolver = EnvResolver::new(MapEnv::from_pairs([("PORT", "8080")]));
/// assert_eq!(port(&resolver), Some(8080.0));
/// ```
pub trait SchemaResolver {
    /// Resolves a schema in which every key is required.
    ///
    /// # Returns
    ///
    /// * `Ok(ResolvedConfig)` - Every schema key with its coerced value
    /// * `Err(EnvError::MissingKeys)` - All absent keys, in schema order
    /// * `Err(EnvError::InvalidNumber | InvalidBoolean)` - The first malformed value
    fn require(&self, schema: &Schema) -> Result<ResolvedConfig>;

    /// Resolves a schema in which every key is optional.
    ///
    /// Absent keys are left out of the result. Malformed present values still fail.
    fn optional(&self, schema: &Schema) -> Result<ResolvedConfig>;

    /// Resolves a schema in which every key has a default.
    ///
    /// Absent keys take their default unchanged. Malformed present values fail.
    fn with_defaults(&self, schema: &DefaultingSchema) -> Result<ResolvedConfig>;

    /// Checks that a value belongs to an allow-set.
    ///
    /// When `value` is `None` the key is read from the environment.
    ///
    /// # Returns
    ///
    /// * `Ok(&str)` - The matching entry of `allowed`
    /// * `Err(EnvError::MissingKey)` - No value was given and the key is absent
    /// * `Err(EnvError::InvalidEnumValue)` - The value is not in `allowed`
    fn validate_enum<'a>(
        &self,
        key: &str,
        allowed: &'a [&'a str],
        value: Option<&str>,
    ) -> Result<&'a str>;
}
