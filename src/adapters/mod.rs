// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing environment implementations.
//!
//! This module contains concrete implementations of the `Environment` port and the
//! optional YAML schema loader.

pub mod map_env;
#[cfg(feature = "env")]
pub mod process_env;
#[cfg(feature = "yaml")]
pub mod yaml_schema;

// Re-export adapters based on feature flags
pub use map_env::MapEnv;
#[cfg(feature = "env")]
pub use process_env::ProcessEnv;
