//! Schema names accepted on the command line

use crate::application::dtos::{
    ItemCreateDTO, ItemDTO, ItemUpdateDTO, TagCreateDTO, TagDTO, TagUpdateDTO, Validated,
};
use crate::error::{ItemTagsError, Result};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// One DTO shape a payload can be validated against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Schema {
    Item,
    ItemCreate,
    ItemUpdate,
    Tag,
    TagCreate,
    TagUpdate,
}

impl Schema {
    pub const ALL: [Schema; 6] = [
        Schema::Item,
        Schema::ItemCreate,
        Schema::ItemUpdate,
        Schema::Tag,
        Schema::TagCreate,
        Schema::TagUpdate,
    ];

    /// Command-line name of the schema
    pub fn name(&self) -> &'static str {
        match self {
            Schema::Item => "item",
            Schema::ItemCreate => "item-create",
            Schema::ItemUpdate => "item-update",
            Schema::Tag => "tag",
            Schema::TagCreate => "tag-create",
            Schema::TagUpdate => "tag-update",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Schema::Item => "Item response with embedded tags",
            Schema::ItemCreate => "New item: name, optional description, tag ids",
            Schema::ItemUpdate => "Partial item update, every field optional",
            Schema::Tag => "Tag response with timestamps",
            Schema::TagCreate => "New tag: name (1-50 chars) and #RRGGBB color",
            Schema::TagUpdate => "Partial tag update, every field optional",
        }
    }

    /// Validate a JSON value and return its normalized form
    pub fn normalize(&self, value: &Value) -> Result<Value> {
        match self {
            Schema::Item => normalized::<ItemDTO>(value),
            Schema::ItemCreate => normalized::<ItemCreateDTO>(value),
            Schema::ItemUpdate => normalized::<ItemUpdateDTO>(value),
            Schema::Tag => normalized::<TagDTO>(value),
            Schema::TagCreate => normalized::<TagCreateDTO>(value),
            Schema::TagUpdate => normalized::<TagUpdateDTO>(value),
        }
    }
}

fn normalized<T: Validated>(value: &Value) -> Result<Value> {
    let dto = T::from_value(value)?;
    Ok(serde_json::to_value(&dto)?)
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Schema {
    type Err = ItemTagsError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace('_', "-");
        Schema::ALL
            .into_iter()
            .find(|schema| schema.name() == wanted)
            .ok_or_else(|| ItemTagsError::UnknownSchema(s.to_string()))
    }
}
