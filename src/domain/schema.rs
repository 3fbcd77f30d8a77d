// SPDX-License-Identifier: MIT OR Apache-2.0

//! Schema declarations.
//!
//! A `Schema` maps keys to primitive types and is used by both the strict and the
//! optional resolver. A `DefaultingSchema` additionally carries a typed fallback
//! value for every key. Both keep keys in declaration order, which is the order
//! missing keys are reported in.

use crate::domain::env_value::EnvValue;
use crate::domain::errors::{EnvError, Result};
use crate::domain::primitive::PrimitiveType;

/// An ordered mapping from configuration key to expected type.
///
/// # Examples
///
/// ```
/// use envschema::domain::{PrimitiveType, Schema};
///
/// let schema = Schema::new()
///     .field("DB_URL", PrimitiveType::String)
///     .field("PORT", PrimitiveType::Number)
///     .field("DEBUG", PrimitiveType::Boolean);
///
/// assert_eq!(schema.len(), 3);
/// assert_eq!(schema.get("PORT"), Some(PrimitiveType::Number));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Schema {
    fields: Vec<(String, PrimitiveType)>,
}

impl Schema {
    /// Creates an empty schema.
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Declares a key with its expected type.
    ///
    /// Declaring a key that already exists replaces its type and keeps its
    /// original position.
    pub fn field(mut self, key: impl Into<String>, ty: PrimitiveType) -> Self {
        self.insert(key, ty);
        self
    }

    /// Declares a key in place. See [`Schema::field`].
    pub fn insert(&mut self, key: impl Into<String>, ty: PrimitiveType) {
        let key = key.into();
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = ty,
            None => self.fields.push((key, ty)),
        }
    }

    /// Returns the declared type of a key.
    pub fn get(&self, key: &str) -> Option<PrimitiveType> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, ty)| *ty)
    }

    /// Iterates over `(key, type)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, PrimitiveType)> {
        self.fields.iter().map(|(k, ty)| (k.as_str(), *ty))
    }

    /// Iterates over the declared keys in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    /// Returns the number of declared keys.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if no keys are declared.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, PrimitiveType)> for Schema {
    fn from_iter<I: IntoIterator<Item = (K, PrimitiveType)>>(iter: I) -> Self {
        let mut schema = Schema::new();
        for (key, ty) in iter {
            schema.insert(key, ty);
        }
        schema
    }
}

/// A type tag paired with a fallback value of that type.
///
/// The tag is derived from the default, so the two can never disagree.
///
/// # Examples
///
/// ```
/// use envschema::domain::{EnvValue, FieldDefault, PrimitiveType};
///
/// let port = FieldDefault::new(3000);
/// assert_eq!(port.ty(), PrimitiveType::Number);
/// assert_eq!(port.default_value(), &EnvValue::from(3000));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct FieldDefault {
    ty: PrimitiveType,
    default: EnvValue,
}

impl FieldDefault {
    /// Creates a field default from a typed value.
    pub fn new(default: impl Into<EnvValue>) -> Self {
        let default = default.into();
        Self {
            ty: default.primitive_type(),
            default,
        }
    }

    /// Creates a field default from an explicit tag, checking that the value matches it.
    ///
    /// # Errors
    ///
    /// Returns `EnvError::SchemaError` when the default's type differs from `ty`.
    pub fn try_new(key: &str, ty: PrimitiveType, default: EnvValue) -> Result<Self> {
        if default.primitive_type() != ty {
            return Err(EnvError::SchemaError {
                message: format!(
                    "default for '{}' is a {} but the declared type is {}",
                    key,
                    default.primitive_type(),
                    ty
                ),
                source: None,
            });
        }
        Ok(Self { ty, default })
    }

    /// Returns the declared type.
    pub fn ty(&self) -> PrimitiveType {
        self.ty
    }

    /// Returns the fallback value.
    pub fn default_value(&self) -> &EnvValue {
        &self.default
    }
}

/// An ordered mapping from configuration key to a type and fallback value.
///
/// # Examples
///
/// ```
/// use envschema::domain::{DefaultingSchema, PrimitiveType};
///
/// let schema = DefaultingSchema::new()
///     .field("PORT", 3000)
///     .field("DEBUG", false);
///
/// assert_eq!(schema.get("DEBUG").unwrap().ty(), PrimitiveType::Boolean);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DefaultingSchema {
    fields: Vec<(String, FieldDefault)>,
}

impl DefaultingSchema {
    /// Creates an empty defaulting schema.
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Declares a key with a typed default value.
    ///
    /// Redeclaring a key replaces its default and keeps its original position.
    pub fn field(mut self, key: impl Into<String>, default: impl Into<EnvValue>) -> Self {
        self.insert(key, FieldDefault::new(default));
        self
    }

    /// Declares a key in place with a prepared [`FieldDefault`].
    pub fn insert(&mut self, key: impl Into<String>, spec: FieldDefault) {
        let key = key.into();
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = spec,
            None => self.fields.push((key, spec)),
        }
    }

    /// Returns the declaration for a key.
    pub fn get(&self, key: &str) -> Option<&FieldDefault> {
        self.fields.iter().find(|(k, _)| k == key).map(|(_, d)| d)
    }

    /// Iterates over `(key, declaration)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldDefault)> {
        self.fields.iter().map(|(k, d)| (k.as_str(), d))
    }

    /// Returns the number of declared keys.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if no keys are declared.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, FieldDefault)> for DefaultingSchema {
    fn from_iter<I: IntoIterator<Item = (K, FieldDefault)>>(iter: I) -> Self {
        let mut schema = DefaultingSchema::new();
        for (key, spec) in iter {
            schema.insert(key, spec);
        }
        schema
    }
}
