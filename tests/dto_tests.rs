//! Integration tests for the DTO layer through the public API

use chrono::{DateTime, TimeZone, Utc};
use itemtags::application::dtos::{Constraint, ItemAttributes};
use itemtags::{
    ItemCreateDTO, ItemDTO, ItemUpdateDTO, Patch, Tag, TagCreateDTO, TagDTO, TagUpdateDTO,
    Validated,
};
use serde_json::json;

const VALID_COLORS: [&str; 6] = ["#FF0000", "#000000", "#ffffff", "#aBcDeF", "#6366F1", "#0a0B0c"];
const INVALID_COLORS: [&str; 8] = [
    "FF0000", "#FF000", "#FF00000", "#GGGGGG", "#ZZZZZZ", "red", "", "#FF 000",
];

fn t1() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 17, 9, 0, 0).unwrap()
}

fn persisted(name: &str, color: &str, id: i64) -> Tag {
    Tag::new(name, color).with_id(id).with_created_at(t1())
}

#[test]
fn test_valid_colors_accepted_everywhere() {
    for color in VALID_COLORS {
        assert!(
            TagCreateDTO::from_value(&json!({"name": "n", "color": color})).is_ok(),
            "create rejected {}",
            color
        );
        assert!(
            TagUpdateDTO::from_value(&json!({"color": color})).is_ok(),
            "update rejected {}",
            color
        );
        assert!(
            TagDTO::from_attributes(&persisted("n", color, 1)).is_ok(),
            "response rejected {}",
            color
        );
    }
}

#[test]
fn test_invalid_colors_rejected_on_color_field() {
    for color in INVALID_COLORS {
        let create = TagCreateDTO::from_value(&json!({"name": "n", "color": color})).unwrap_err();
        assert_eq!(create.fields(), vec!["color"], "create with {}", color);

        let update = TagUpdateDTO::from_value(&json!({"color": color})).unwrap_err();
        assert_eq!(update.fields(), vec!["color"], "update with {}", color);

        let response = TagDTO::from_attributes(&persisted("n", color, 1)).unwrap_err();
        assert_eq!(response.fields(), vec!["color"], "response with {}", color);
        assert!(matches!(
            response.errors[0].constraint,
            Constraint::Pattern { .. }
        ));
    }
}

#[test]
fn test_tag_name_length_property() {
    for len in 1..=50 {
        let payload = json!({"name": "x".repeat(len), "color": "#123456"});
        assert!(TagCreateDTO::from_value(&payload).is_ok(), "length {}", len);
    }
    for len in [0, 51, 100] {
        let payload = json!({"name": "x".repeat(len), "color": "#123456"});
        let err = TagCreateDTO::from_value(&payload).unwrap_err();
        assert_eq!(err.fields(), vec!["name"], "length {}", len);
    }
}

#[test]
fn test_tag_response_round_trip() {
    let dto = TagDTO::from_attributes(&persisted("urgent", "#FF0000", 1)).unwrap();
    assert_eq!(dto.id, 1);
    assert_eq!(dto.name, "urgent");
    assert_eq!(dto.color, "#FF0000");
    assert_eq!(dto.created_at, t1());
    assert_eq!(dto.updated_at, None);

    let json = serde_json::to_value(&dto).unwrap();
    let back = TagDTO::from_value(&json).unwrap();
    assert_eq!(back, dto);
}

#[test]
fn test_tag_update_partial_semantics() {
    let empty = TagUpdateDTO::from_value(&json!({})).unwrap();
    let color_only = TagUpdateDTO::from_value(&json!({"color": "#000000"})).unwrap();

    assert_eq!(empty.name, Patch::Unset);
    assert_eq!(empty.color, Patch::Unset);
    assert_eq!(color_only.name, Patch::Unset);
    assert_eq!(color_only.color, Patch::Value("#000000".to_string()));
}

#[test]
fn test_tag_lifecycle_through_dtos() {
    let create = TagCreateDTO::from_json(r##"{"name": "urgent", "color": "#FF0000"}"##).unwrap();
    let mut tag = create.into_entity();
    assert!(!tag.is_persisted());
    assert!(TagDTO::from_attributes(&tag).is_err());

    // What the storage layer would do on insert
    tag.id = Some(9);
    tag.created_at = Some(t1());
    assert!(tag.is_persisted());

    let later = Utc.with_ymd_and_hms(2025, 2, 1, 0, 0, 0).unwrap();
    let update = TagUpdateDTO::from_json(r#"{"name": "critical"}"#).unwrap();
    assert!(update.apply_to(&mut tag, later));

    let dto = TagDTO::from_attributes(&tag).unwrap();
    assert_eq!(dto.name, "critical");
    assert_eq!(dto.color, "#FF0000");
    assert_eq!(dto.updated_at, Some(later));
}

#[test]
fn test_from_json_malformed_is_not_a_validation_error() {
    let err = TagCreateDTO::from_json("not json").unwrap_err();
    assert!(matches!(err, itemtags::ItemTagsError::Json(_)));
}

#[test]
fn test_item_create_example_scenario() {
    let dto = ItemCreateDTO::from_value(&json!({"name": "Task A", "tag_ids": [1, 2]})).unwrap();
    assert_eq!(dto.description, None);
    assert_eq!(dto.tag_ids, vec![1, 2]);
}

#[test]
fn test_item_due_date_needs_full_datetime() {
    let ok = ItemCreateDTO::from_value(&json!({"name": "Task A", "due_date": "2025-01-17T09:00:00"}))
        .unwrap();
    assert_eq!(ok.due_date, Some(t1()));

    for due_date in [json!("2025-01-17"), json!(1737104400)] {
        let err = ItemCreateDTO::from_value(&json!({"name": "Task A", "due_date": due_date}))
            .unwrap_err();
        assert_eq!(err.fields(), vec!["due_date"]);
        assert_eq!(
            err.errors[0].constraint,
            Constraint::WrongType { expected: "datetime" }
        );
    }
}

#[test]
fn test_tag_create_example_scenario() {
    let err = TagCreateDTO::from_value(&json!({"name": "", "color": "#ZZZZZZ"})).unwrap_err();
    assert_eq!(err.len(), 2);
    assert_eq!(err.for_field("name").count(), 1);
    assert_eq!(err.for_field("color").count(), 1);
    assert_eq!(
        err.for_field("name").next().unwrap().constraint,
        Constraint::MinLength { min: 1 }
    );
}

#[test]
fn test_item_update_tag_ids_absent_vs_empty() {
    let absent = ItemUpdateDTO::from_value(&json!({})).unwrap();
    let empty = ItemUpdateDTO::from_value(&json!({"tag_ids": []})).unwrap();

    assert!(absent.tag_ids.is_unset());
    assert_eq!(empty.tag_ids, Patch::Value(Vec::new()));
    assert_ne!(absent, empty);
}

struct StoredItem {
    id: i64,
    name: String,
    description: Option<String>,
    due_date: Option<DateTime<Utc>>,
    tags: Vec<Tag>,
}

impl ItemAttributes for StoredItem {
    type Tag = Tag;

    fn id(&self) -> Option<i64> {
        Some(self.id)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    fn created_at(&self) -> Option<DateTime<Utc>> {
        Some(t1())
    }

    fn updated_at(&self) -> Option<DateTime<Utc>> {
        None
    }

    fn due_date(&self) -> Option<DateTime<Utc>> {
        self.due_date
    }

    fn tags(&self) -> &[Tag] {
        &self.tags
    }
}

#[test]
fn test_item_response_with_empty_tags() {
    let item = StoredItem {
        id: 1,
        name: "Simple Task".to_string(),
        description: Some("A simple task".to_string()),
        due_date: None,
        tags: vec![],
    };

    let dto = ItemDTO::from_attributes(&item).unwrap();
    assert_eq!(dto.tags, vec![]);

    let json = serde_json::to_value(&dto).unwrap();
    assert_eq!(json["tags"], json!([]));
}

#[test]
fn test_item_response_embeds_tags() {
    let due = Utc.with_ymd_and_hms(2025, 1, 20, 12, 0, 0).unwrap();
    let item = StoredItem {
        id: 3,
        name: "Task with Tags".to_string(),
        description: None,
        due_date: Some(due),
        tags: vec![
            persisted("Bug", "#EF4444", 1),
            persisted("Feature", "#22C55E", 2),
        ],
    };

    let dto = ItemDTO::from_attributes(&item).unwrap();
    assert_eq!(dto.tag_ids(), vec![1, 2]);
    assert_eq!(dto.due_date, Some(due));

    let json = serde_json::to_value(&dto).unwrap();
    assert_eq!(
        json["tags"],
        json!([
            {"id": 1, "name": "Bug", "color": "#EF4444"},
            {"id": 2, "name": "Feature", "color": "#22C55E"}
        ])
    );
    assert_eq!(json["due_date"], json!("2025-01-20T12:00:00Z"));
}
