//! Read access to persisted objects for building response DTOs

use crate::domain::Tag;
use chrono::{DateTime, Utc};

/// Anything exposing the attributes of a tag
pub trait TagAttributes {
    fn id(&self) -> Option<i64>;
    fn name(&self) -> &str;
    fn color(&self) -> &str;
    fn created_at(&self) -> Option<DateTime<Utc>>;
    fn updated_at(&self) -> Option<DateTime<Utc>>;
}

/// Anything exposing the attributes of an item and its tags
pub trait ItemAttributes {
    type Tag: TagAttributes;

    fn id(&self) -> Option<i64>;
    fn name(&self) -> &str;
    fn description(&self) -> Option<&str>;
    fn created_at(&self) -> Option<DateTime<Utc>>;
    fn updated_at(&self) -> Option<DateTime<Utc>>;

    fn due_date(&self) -> Option<DateTime<Utc>> {
        None
    }

    /// Associated tags in display order
    fn tags(&self) -> &[Self::Tag];
}

impl TagAttributes for Tag {
    fn id(&self) -> Option<i64> {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn color(&self) -> &str {
        &self.color
    }

    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }
}
