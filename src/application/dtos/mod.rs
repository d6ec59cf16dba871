//! Data transfer objects for the API boundary
//!
//! Each resource has a create, an update and a response shape. Inbound shapes
//! are built from JSON with [`Validated::from_value`]; response shapes can also
//! be built straight from a persisted object through [`TagAttributes`] or
//! [`ItemAttributes`].

pub mod attributes;
pub mod item_dto;
pub mod patch;
pub mod tag_dto;
pub mod validation;

pub use attributes::{ItemAttributes, TagAttributes};
pub use item_dto::{ItemCreateDTO, ItemDTO, ItemUpdateDTO, TagInItemDTO};
pub use patch::Patch;
pub use tag_dto::{TagCreateDTO, TagDTO, TagUpdateDTO};
pub use validation::{Constraint, FieldError, ValidationErrors};

use crate::error::Result;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A DTO that can only be built from input satisfying its field constraints
pub trait Validated: Serialize + Sized {
    /// Model name used in error reports
    const MODEL: &'static str;

    /// Validate a JSON value, reporting every violated constraint
    fn from_value(value: &Value) -> std::result::Result<Self, ValidationErrors>;

    /// Parse JSON text and validate it
    fn from_json(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)?;
        Ok(Self::from_value(&value)?)
    }
}

/// Serde entry point for DTOs, so `serde_json::from_str::<TagCreateDTO>` validates too
pub(crate) fn deserialize_validated<'de, T, D>(deserializer: D) -> std::result::Result<T, D::Error>
where
    T: Validated,
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    T::from_value(&value).map_err(|e| serde::de::Error::custom(format!("{}: {}", e, e.summary())))
}
