//! Item DTOs

use super::attributes::{ItemAttributes, TagAttributes};
use super::patch::Patch;
use super::tag_dto::TagDTO;
use super::validation::{join, Checker, ValidationErrors};
use super::{deserialize_validated, Validated};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Reduced tag embedded in item responses (no timestamps)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagInItemDTO {
    pub id: i64,
    pub name: String,
    pub color: String,
}

impl TagInItemDTO {
    pub fn from_attributes(source: &impl TagAttributes) -> Result<Self, ValidationErrors> {
        let mut checker = Checker::new(Self::MODEL);
        let built = Self::read_attributes(&mut checker, source, "");
        checker.finish(built)
    }

    fn read_attributes(
        checker: &mut Checker,
        source: &impl TagAttributes,
        prefix: &str,
    ) -> Option<Self> {
        let id = checker.present(&join(prefix, "id"), source.id());
        let color_ok = checker.color(&join(prefix, "color"), source.color());

        let id = id?;
        color_ok.then(|| TagInItemDTO {
            id,
            name: source.name().to_string(),
            color: source.color().to_string(),
        })
    }

    fn read(checker: &mut Checker, value: &Value, prefix: &str) -> Option<Self> {
        let object = checker.object(value, prefix)?;
        let id = checker.required(object, prefix, "id", Checker::integer);
        let name = checker.required(object, prefix, "name", Checker::string);
        let color = checker.required(object, prefix, "color", Checker::color_string);

        Some(TagInItemDTO {
            id: id?,
            name: name?,
            color: color?,
        })
    }
}

impl From<&TagDTO> for TagInItemDTO {
    fn from(tag: &TagDTO) -> Self {
        TagInItemDTO {
            id: tag.id,
            name: tag.name.clone(),
            color: tag.color.clone(),
        }
    }
}

impl Validated for TagInItemDTO {
    const MODEL: &'static str = "TagInItemDTO";

    fn from_value(value: &Value) -> Result<Self, ValidationErrors> {
        let mut checker = Checker::new(Self::MODEL);
        let built = Self::read(&mut checker, value, "");
        checker.finish(built)
    }
}

impl<'de> Deserialize<'de> for TagInItemDTO {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_validated(deserializer)
    }
}

/// Item as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemDTO {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub due_date: Option<DateTime<Utc>>,
    pub tags: Vec<TagInItemDTO>,
}

impl ItemDTO {
    /// Build from a persisted item, projecting each of its tags.
    /// Errors on embedded tags are reported as `tags[i].<field>`.
    pub fn from_attributes(source: &impl ItemAttributes) -> Result<Self, ValidationErrors> {
        let mut checker = Checker::new(Self::MODEL);

        let id = checker.present("id", source.id());
        let created_at = checker.present("created_at", source.created_at());

        let mut tags = Vec::with_capacity(source.tags().len());
        let mut tags_ok = true;
        for (index, tag) in source.tags().iter().enumerate() {
            match TagInItemDTO::read_attributes(&mut checker, tag, &format!("tags[{}]", index)) {
                Some(projected) => tags.push(projected),
                None => tags_ok = false,
            }
        }

        let built = match (id, created_at) {
            (Some(id), Some(created_at)) if tags_ok => Some(ItemDTO {
                id,
                name: source.name().to_string(),
                description: source.description().map(str::to_string),
                created_at,
                updated_at: source.updated_at(),
                due_date: source.due_date(),
                tags,
            }),
            _ => None,
        };
        checker.finish(built)
    }

    /// Ids of the embedded tags, in order
    pub fn tag_ids(&self) -> Vec<i64> {
        self.tags.iter().map(|t| t.id).collect()
    }

    fn read(checker: &mut Checker, value: &Value) -> Option<Self> {
        let object = checker.object(value, "")?;
        let id = checker.required(object, "", "id", Checker::integer);
        let name = checker.required(object, "", "name", Checker::string);
        let description = checker.optional(object, "", "description", Checker::string);
        let created_at = checker.required(object, "", "created_at", Checker::timestamp);
        let updated_at = checker.optional(object, "", "updated_at", Checker::timestamp);
        let due_date = checker.optional(object, "", "due_date", Checker::timestamp);
        let tags = checker.defaulted(object, "", "tags", Vec::new, |c, v, path| {
            c.list(v, path, |c, v, path| TagInItemDTO::read(c, v, path))
        });

        Some(ItemDTO {
            id: id?,
            name: name?,
            description: description?,
            created_at: created_at?,
            updated_at: updated_at?,
            due_date: due_date?,
            tags: tags?,
        })
    }
}

impl Validated for ItemDTO {
    const MODEL: &'static str = "ItemDTO";

    fn from_value(value: &Value) -> Result<Self, ValidationErrors> {
        let mut checker = Checker::new(Self::MODEL);
        let built = Self::read(&mut checker, value);
        checker.finish(built)
    }
}

impl<'de> Deserialize<'de> for ItemDTO {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_validated(deserializer)
    }
}

/// Payload for creating an item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemCreateDTO {
    pub name: String,
    pub description: Option<String>,
    pub tag_ids: Vec<i64>,
    pub due_date: Option<DateTime<Utc>>,
}

impl ItemCreateDTO {
    fn read(checker: &mut Checker, value: &Value) -> Option<Self> {
        let object = checker.object(value, "")?;
        let name = checker.required(object, "", "name", Checker::string);
        let description = checker.optional(object, "", "description", Checker::string);
        let tag_ids = checker.defaulted(object, "", "tag_ids", Vec::new, Checker::integer_list);
        let due_date = checker.optional(object, "", "due_date", Checker::timestamp);

        Some(ItemCreateDTO {
            name: name?,
            description: description?,
            tag_ids: tag_ids?,
            due_date: due_date?,
        })
    }
}

impl Validated for ItemCreateDTO {
    const MODEL: &'static str = "ItemCreateDTO";

    fn from_value(value: &Value) -> Result<Self, ValidationErrors> {
        let mut checker = Checker::new(Self::MODEL);
        let built = Self::read(&mut checker, value);
        checker.finish(built)
    }
}

impl<'de> Deserialize<'de> for ItemCreateDTO {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_validated(deserializer)
    }
}

/// Partial update of an item.
///
/// `tag_ids` keeps "not sent" (`Unset`) apart from "clear all tags"
/// (`Value(vec![])`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ItemUpdateDTO {
    #[serde(skip_serializing_if = "Patch::is_unset")]
    pub name: Patch<String>,
    #[serde(skip_serializing_if = "Patch::is_unset")]
    pub description: Patch<String>,
    #[serde(skip_serializing_if = "Patch::is_unset")]
    pub tag_ids: Patch<Vec<i64>>,
    #[serde(skip_serializing_if = "Patch::is_unset")]
    pub due_date: Patch<DateTime<Utc>>,
}

impl ItemUpdateDTO {
    /// True when the payload carries no field at all
    pub fn is_empty(&self) -> bool {
        self.name.is_unset()
            && self.description.is_unset()
            && self.tag_ids.is_unset()
            && self.due_date.is_unset()
    }

    fn read(checker: &mut Checker, value: &Value) -> Option<Self> {
        let object = checker.object(value, "")?;
        let name = checker.patch(object, "", "name", Checker::string);
        let description = checker.patch(object, "", "description", Checker::string);
        let tag_ids = checker.patch(object, "", "tag_ids", Checker::integer_list);
        let due_date = checker.patch(object, "", "due_date", Checker::timestamp);

        Some(ItemUpdateDTO {
            name: name?,
            description: description?,
            tag_ids: tag_ids?,
            due_date: due_date?,
        })
    }
}

impl Validated for ItemUpdateDTO {
    const MODEL: &'static str = "ItemUpdateDTO";

    fn from_value(value: &Value) -> Result<Self, ValidationErrors> {
        let mut checker = Checker::new(Self::MODEL);
        let built = Self::read(&mut checker, value);
        checker.finish(built)
    }
}

impl<'de> Deserialize<'de> for ItemUpdateDTO {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_validated(deserializer)
    }
}
