// SPDX-License-Identifier: MIT OR Apache-2.0

//! Schema-driven, fail-fast environment variable loading.
//!
//! Declare which environment variables your program needs and what type each one
//! has, then resolve them all at startup. Values are coerced to strings, numbers or
//! booleans, and every problem is reported before the rest of the program runs.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: Core types and rules (`PrimitiveType`, `EnvValue`, `Schema`,
//!   `ResolvedConfig`, the scalar coercer, errors)
//! - **Ports**: The `Environment` trait every value is read through
//! - **Adapters**: `ProcessEnv`, `MapEnv` and the YAML schema loader
//! - **Service**: `EnvResolver`, which implements the four resolution operations
//!
//! # Resolution Modes
//!
//! - **Required**: every key must be present; all missing keys are reported together
//! - **Optional**: absent keys are left out of the result
//! - **Defaults**: absent keys take a typed default
//! - **Enum**: a single value must belong to an allow-set
//!
//! Malformed values (`PORT=abc`, `DEBUG=yes`) always fail on the first offending key.
//!
//! # Feature Flags
//!
//! - `env`: Enable the process environment adapter and the `*_env` functions (default)
//! - `yaml`: Enable loading schemas from YAML (default)
//! - `full`: Enable all features
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use envschema::prelude::*;
//!
//! # fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//! let env = envschema::require_env(
//!     &Schema::new()
//!         .field("DB_URL", PrimitiveType::String)
//!         .field("PORT", PrimitiveType::Number)
//!         .field("DEBUG", PrimitiveType::Boolean),
//! )?;
//!
//! let opt = envschema::optional_env(&Schema::new().field("REDIS_URL", PrimitiveType::String))?;
//!
//! let with_defaults = envschema::require_env_with_defaults(
//!     &DefaultingSchema::new().field("PORT", 3000).field("DEBUG", false),
//! )?;
//!
//! let log_level = envschema::validate_enum_env("LOG_LEVEL", &["info", "warn", "error"], None)?;
//!
//! println!("{:?} {:?} {:?} {}", env, opt, with_defaults, log_level);
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

#[cfg(feature = "env")]
use domain::{DefaultingSchema, ResolvedConfig, Result, Schema, SchemaResolver};

/// Resolves a schema of required keys against the process environment.
///
/// See [`SchemaResolver::require`](crate::domain::SchemaResolver::require).
#[cfg(feature = "env")]
pub fn require_env(schema: &Schema) -> Result<ResolvedConfig> {
    service::EnvResolver::from_process().require(schema)
}

/// Resolves a schema of optional keys against the process environment.
///
/// See [`SchemaResolver::optional`](crate::domain::SchemaResolver::optional).
#[cfg(feature = "env")]
pub fn optional_env(schema: &Schema) -> Result<ResolvedConfig> {
    service::EnvResolver::from_process().optional(schema)
}

/// Resolves a defaulting schema against the process environment.
///
/// See [`SchemaResolver::with_defaults`](crate::domain::SchemaResolver::with_defaults).
#[cfg(feature = "env")]
pub fn require_env_with_defaults(schema: &DefaultingSchema) -> Result<ResolvedConfig> {
    service::EnvResolver::from_process().with_defaults(schema)
}

/// Validates a value against an allow-set, reading `key` from the process
/// environment when `value` is `None`.
///
/// See [`SchemaResolver::validate_enum`](crate::domain::SchemaResolver::validate_enum).
#[cfg(feature = "env")]
pub fn validate_enum_env<'a>(
    key: &str,
    allowed: &'a [&'a str],
    value: Option<&str>,
) -> Result<&'a str> {
    service::EnvResolver::from_process().validate_enum(key, allowed, value)
}

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::domain::{
        DefaultingSchema, EnvError, EnvValue, FieldDefault, PrimitiveType, ResolvedConfig,
        Result, Schema, SchemaResolver,
    };
    pub use crate::ports::Environment;
    pub use crate::service::EnvResolver;

    pub use crate::adapters::MapEnv;
    // Re-export adapters based on feature flags
    #[cfg(feature = "env")]
    pub use crate::adapters::ProcessEnv;
}
