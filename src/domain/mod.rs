// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core types and the coercion rules.
//!
//! This module contains the schema, value and error types of the crate together
//! with the scalar coercer. It is independent of where the environment comes from.

pub mod coercer;
pub mod config;
pub mod de;
pub mod env_value;
pub mod errors;
pub mod primitive;
pub mod schema;
pub mod service;

// Re-export commonly used types
pub use coercer::coerce;
pub use config::ResolvedConfig;
pub use env_value::EnvValue;
pub use errors::{EnvError, Result};
pub use primitive::PrimitiveType;
pub use schema::{DefaultingSchema, FieldDefault, Schema};
pub use service::SchemaResolver;
