//! Serde utilities for catalog payloads.

use serde::Deserializer;
use serde::de::{self, Visitor};
use std::fmt;

/// Module to handle labels that might arrive as strings or numbers.
pub mod string_or_number {
    use super::{Deserializer, Visitor, de, fmt};

    /// Deserializes a label from a string, integer, or float.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is neither a string nor a number.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct LabelVisitor;

        impl Visitor<'_> for LabelVisitor {
            type Value = String;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string or number label")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(value.to_string())
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(value.to_string())
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(value.to_string())
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(value.to_string())
            }
        }

        deserializer.deserialize_any(LabelVisitor)
    }
}
