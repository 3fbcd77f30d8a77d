// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions.
//!
//! This module contains the trait that the resolvers read through. It is
//! implemented by adapters in the adapters layer.

pub mod environment;

// Re-export commonly used types
pub use environment::Environment;
