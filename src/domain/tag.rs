//! Tag domain entity

use chrono::{DateTime, Utc};

/// A tag as seen by business logic.
///
/// Construction performs no validation; callers hand in values that were
/// already checked at the API boundary or loaded from storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub id: Option<i64>,
    pub name: String,
    pub color: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Tag {
    /// Create a transient tag (no id, no timestamps)
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Tag {
            id: None,
            name: name.into(),
            color: color.into(),
            created_at: None,
            updated_at: None,
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    pub fn with_updated_at(mut self, updated_at: DateTime<Utc>) -> Self {
        self.updated_at = Some(updated_at);
        self
    }

    /// A tag is persisted once it has an id and a creation timestamp
    pub fn is_persisted(&self) -> bool {
        self.id.is_some() && self.created_at.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_new_tag_is_transient() {
        let tag = Tag::new("urgent", "#FF0000");
        assert_eq!(tag.name, "urgent");
        assert_eq!(tag.color, "#FF0000");
        assert_eq!(tag.id, None);
        assert_eq!(tag.created_at, None);
        assert_eq!(tag.updated_at, None);
        assert!(!tag.is_persisted());
    }

    #[test]
    fn test_builder_sets_persisted_fields() {
        let created = Utc.with_ymd_and_hms(2025, 1, 17, 9, 0, 0).unwrap();
        let tag = Tag::new("urgent", "#FF0000")
            .with_id(1)
            .with_created_at(created);

        assert!(tag.is_persisted());
        assert_eq!(tag.id, Some(1));
        assert_eq!(tag.created_at, Some(created));
        assert_eq!(tag.updated_at, None);
    }

    #[test]
    fn test_id_alone_is_not_persisted() {
        let tag = Tag::new("urgent", "#FF0000").with_id(1);
        assert!(!tag.is_persisted());
    }

    #[test]
    fn test_no_validation_on_construction() {
        // Validation belongs to the DTO layer
        let mut tag = Tag::new("", "not-a-color");
        assert_eq!(tag.color, "not-a-color");

        tag.name = "x".repeat(80);
        assert_eq!(tag.name.len(), 80);
    }
}
