// SPDX-License-Identifier: MIT OR Apache-2.0

//! Serde plumbing that lets a resolved configuration populate a caller's struct.
//!
//! Integral numbers are offered to visitors as integers so fields such as `u16`
//! or `i64` accept them; fractional numbers are offered as `f64`. String values
//! can also populate unit-variant enums.

use crate::domain::env_value::{is_integral, EnvValue};
use serde::de::value::{Error, StringDeserializer};
use serde::de::{self, IntoDeserializer, Visitor};
use serde::forward_to_deserialize_any;

/// A `serde::Deserializer` over a single [`EnvValue`].
#[derive(Debug)]
pub struct EnvValueDeserializer {
    value: EnvValue,
}

impl<'de> IntoDeserializer<'de, Error> for EnvValue {
    type Deserializer = EnvValueDeserializer;

    fn into_deserializer(self) -> Self::Deserializer {
        EnvValueDeserializer { value: self }
    }
}

impl<'de> de::Deserializer<'de> for EnvValueDeserializer {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        match self.value {
            EnvValue::String(s) => visitor.visit_string(s),
            EnvValue::Boolean(b) => visitor.visit_bool(b),
            EnvValue::Number(n) if is_integral(n) && n >= 0.0 => visitor.visit_u64(n as u64),
            EnvValue::Number(n) if is_integral(n) => visitor.visit_i64(n as i64),
            EnvValue::Number(n) => visitor.visit_f64(n),
        }
    }

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        visitor.visit_some(self)
    }

    fn deserialize_newtype_struct<V>(
        self,
        _name: &'static str,
        visitor: V,
    ) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_enum<V>(
        self,
        name: &'static str,
        variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        match self.value {
            EnvValue::String(s) => {
                let inner: StringDeserializer<Error> = s.into_deserializer();
                de::Deserializer::deserialize_enum(inner, name, variants, visitor)
            }
            other => de::Deserializer::deserialize_any(other.into_deserializer(), visitor),
        }
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf unit unit_struct seq tuple tuple_struct map struct
        identifier ignored_any
    }
}
