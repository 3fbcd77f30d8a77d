// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer containing the schema resolver implementation.
//!
//! This module contains `EnvResolver`, the implementation of the
//! `SchemaResolver` trait, which provides the main interface of the crate.

pub mod resolver;

// Re-export commonly used types
pub use resolver::EnvResolver;
