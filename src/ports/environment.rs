// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment trait definition.
//!
//! This module defines the `Environment` trait, the only boundary of the crate: a
//! read-only lookup from key to string value. The process environment, an in-memory
//! map filled by a `.env` loader, or a test fixture can all stand behind it.

/// A read-only source of environment values.
///
/// Lookups must be free of side effects and may be called any number of times.
/// Implementations are expected to be fully populated before a resolver runs.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to allow sharing a resolver across threads.
///
/// # Examples
///
/// ```rust
/// use envschema::ports::Environment;
///
/// struct Fixed;
///
/// impl Environment for Fixed {
///     fn name(&self) -> &str {
///         "fixed"
///     }
///
///     fn lookup(&self, key: &str) -> Option<String> {
///         (key == "PORT").then(|| "8080".to_string())
///     }
/// }
///
/// assert_eq!(Fixed.lookup("PORT").as_deref(), Some("8080"));
/// assert!(!Fixed.contains("HOST"));
/// ```
pub trait Environment: Send + Sync {
    /// Returns a short name for diagnostics, such as `"process"` or `"map"`.
    fn name(&self) -> &str;

    /// Returns the value for `key`, or `None` if it is absent.
    fn lookup(&self, key: &str) -> Option<String>;

    /// Returns `true` if `key` has a value.
    fn contains(&self, key: &str) -> bool {
        self.lookup(key).is_some()
    }

    /// Returns the name of the variable actually read for `key`.
    ///
    /// Errors report this name. The default is `key` itself; adapters that
    /// rewrite keys before reading, such as a prefixing adapter, override it.
    fn variable_name(&self, key: &str) -> String {
        key.to_string()
    }
}

impl<E: Environment + ?Sized> Environment for &E {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn lookup(&self, key: &str) -> Option<String> {
        (**self).lookup(key)
    }

    fn variable_name(&self, key: &str) -> String {
        (**self).variable_name(key)
    }
}

impl<E: Environment + ?Sized> Environment for Box<E> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn lookup(&self, key: &str) -> Option<String> {
        (**self).lookup(key)
    }

    fn variable_name(&self, key: &str) -> String {
        (**self).variable_name(key)
    }
}
