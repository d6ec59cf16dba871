//! Tag DTOs

use super::attributes::TagAttributes;
use super::patch::Patch;
use super::validation::{Checker, ValidationErrors};
use super::{deserialize_validated, Validated};
use crate::domain::Tag;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Tag as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagDTO {
    pub id: i64,
    pub name: String,
    pub color: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl TagDTO {
    /// Build from a persisted tag. Fails on a transient tag (no id or
    /// creation time) or on a color outside the hex pattern.
    pub fn from_attributes(source: &impl TagAttributes) -> Result<Self, ValidationErrors> {
        let mut checker = Checker::new(Self::MODEL);

        let id = checker.present("id", source.id());
        let color_ok = checker.color("color", source.color());
        let created_at = checker.present("created_at", source.created_at());

        let built = match (id, created_at) {
            (Some(id), Some(created_at)) if color_ok => Some(TagDTO {
                id,
                name: source.name().to_string(),
                color: source.color().to_string(),
                created_at,
                updated_at: source.updated_at(),
            }),
            _ => None,
        };
        checker.finish(built)
    }

    fn read(checker: &mut Checker, value: &Value) -> Option<Self> {
        let object = checker.object(value, "")?;
        let id = checker.required(object, "", "id", Checker::integer);
        let name = checker.required(object, "", "name", Checker::string);
        let color = checker.required(object, "", "color", Checker::color_string);
        let created_at = checker.required(object, "", "created_at", Checker::timestamp);
        let updated_at = checker.optional(object, "", "updated_at", Checker::timestamp);

        Some(TagDTO {
            id: id?,
            name: name?,
            color: color?,
            created_at: created_at?,
            updated_at: updated_at?,
        })
    }
}

impl Validated for TagDTO {
    const MODEL: &'static str = "TagDTO";

    fn from_value(value: &Value) -> Result<Self, ValidationErrors> {
        let mut checker = Checker::new(Self::MODEL);
        let built = Self::read(&mut checker, value);
        checker.finish(built)
    }
}

impl<'de> Deserialize<'de> for TagDTO {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_validated(deserializer)
    }
}

/// Payload for creating a tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagCreateDTO {
    pub name: String,
    pub color: String,
}

impl TagCreateDTO {
    /// A transient domain tag carrying this payload
    pub fn into_entity(self) -> Tag {
        Tag::new(self.name, self.color)
    }

    fn read(checker: &mut Checker, value: &Value) -> Option<Self> {
        let object = checker.object(value, "")?;
        let name = checker.required(object, "", "name", Checker::tag_name);
        let color = checker.required(object, "", "color", Checker::color_string);

        Some(TagCreateDTO {
            name: name?,
            color: color?,
        })
    }
}

impl From<TagCreateDTO> for Tag {
    fn from(dto: TagCreateDTO) -> Self {
        dto.into_entity()
    }
}

impl Validated for TagCreateDTO {
    const MODEL: &'static str = "TagCreateDTO";

    fn from_value(value: &Value) -> Result<Self, ValidationErrors> {
        let mut checker = Checker::new(Self::MODEL);
        let built = Self::read(&mut checker, value);
        checker.finish(built)
    }
}

impl<'de> Deserialize<'de> for TagCreateDTO {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_validated(deserializer)
    }
}

/// Partial update of a tag. Unset fields are left alone.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct TagUpdateDTO {
    #[serde(skip_serializing_if = "Patch::is_unset")]
    pub name: Patch<String>,
    #[serde(skip_serializing_if = "Patch::is_unset")]
    pub color: Patch<String>,
}

impl TagUpdateDTO {
    /// True when the payload carries no field at all
    pub fn is_empty(&self) -> bool {
        self.name.is_unset() && self.color.is_unset()
    }

    /// Apply the provided fields to `tag` and stamp `updated_at` if anything
    /// changed. `null` on name or color leaves the field as is.
    pub fn apply_to(&self, tag: &mut Tag, now: DateTime<Utc>) -> bool {
        let name_changed = self.name.clone().apply_to_required(&mut tag.name);
        let color_changed = self.color.clone().apply_to_required(&mut tag.color);

        let changed = name_changed || color_changed;
        if changed {
            tag.updated_at = Some(now);
        }
        changed
    }

    fn read(checker: &mut Checker, value: &Value) -> Option<Self> {
        let object = checker.object(value, "")?;
        let name = checker.patch(object, "", "name", Checker::tag_name);
        let color = checker.patch(object, "", "color", Checker::color_string);

        Some(TagUpdateDTO {
            name: name?,
            color: color?,
        })
    }
}

impl Validated for TagUpdateDTO {
    const MODEL: &'static str = "TagUpdateDTO";

    fn from_value(value: &Value) -> Result<Self, ValidationErrors> {
        let mut checker = Checker::new(Self::MODEL);
        let built = Self::read(&mut checker, value);
        checker.finish(built)
    }
}

impl<'de> Deserialize<'de> for TagUpdateDTO {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_validated(deserializer)
    }
}
