//! Field-level validation errors and the JSON checker shared by all DTOs
//!
//! Every DTO constructor walks its input with a [`Checker`], which records one
//! [`FieldError`] per violated constraint instead of stopping at the first one.

use super::patch::Patch;
use chrono::{DateTime, NaiveDateTime, Utc};
use regex::Regex;
use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;
use std::sync::OnceLock;
use thiserror::Error;

/// Pattern every tag color must match
pub const COLOR_PATTERN: &str = "^#[0-9A-Fa-f]{6}$";

/// Tag names are bounded to this many characters
pub const TAG_NAME_MAX_LENGTH: usize = 50;

fn color_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(COLOR_PATTERN).unwrap())
}

/// Check whether a string is a `#RRGGBB` hex color (case-insensitive)
pub fn is_hex_color(color: &str) -> bool {
    color_regex().is_match(color)
}

/// Parse an RFC 3339 timestamp. A datetime without offset is read as UTC.
pub fn parse_timestamp(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
        return Some(parsed.with_timezone(&Utc));
    }

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        .map(|naive| naive.and_utc())
}

/// The constraint a field violated
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Constraint {
    /// Required field is absent
    Missing,
    /// Value has the wrong JSON type (or an unparseable timestamp)
    WrongType { expected: &'static str },
    /// Integer outside the signed 64-bit range
    OutOfRange,
    MinLength { min: usize },
    MaxLength { max: usize },
    Pattern { pattern: &'static str },
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constraint::Missing => write!(f, "field required"),
            Constraint::WrongType { expected } => write!(f, "expected {}", expected),
            Constraint::OutOfRange => write!(f, "integer out of range for i64"),
            Constraint::MinLength { min } => {
                write!(f, "should have at least {} character(s)", min)
            }
            Constraint::MaxLength { max } => {
                write!(f, "should have at most {} character(s)", max)
            }
            Constraint::Pattern { pattern } => write!(f, "should match pattern '{}'", pattern),
        }
    }
}

/// One violated constraint on one field
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    /// Path to the field, e.g. `color` or `tags[1].color`. Empty for the root.
    pub field: String,
    pub constraint: Constraint,
    /// The offending value, when there is one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

impl FieldError {
    pub fn new(field: impl Into<String>, constraint: Constraint, value: Option<Value>) -> Self {
        FieldError {
            field: field.into(),
            constraint,
            value,
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let field = if self.field.is_empty() {
            "<root>"
        } else {
            &self.field
        };
        write!(f, "{}: {}", field, self.constraint)?;
        if let Some(value) = &self.value {
            write!(f, " (got {})", value)?;
        }
        Ok(())
    }
}

/// Every field error found while constructing one DTO
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{} validation error(s) for {}", .errors.len(), .model)]
pub struct ValidationErrors {
    pub model: &'static str,
    pub errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Errors reported against the given field path
    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a FieldError> + 'a {
        self.errors.iter().filter(move |e| e.field == field)
    }

    /// One line per field error, joined with `; `
    pub fn summary(&self) -> String {
        self.errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ")
    }

    /// Field paths in report order
    pub fn fields(&self) -> Vec<&str> {
        self.errors.iter().map(|e| e.field.as_str()).collect()
    }
}

/// Join a field name onto a parent path
pub(crate) fn join(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", prefix, name)
    }
}

/// Accumulates field errors while a DTO is being read
#[derive(Debug)]
pub(crate) struct Checker {
    model: &'static str,
    errors: Vec<FieldError>,
}

impl Checker {
    pub fn new(model: &'static str) -> Self {
        Checker {
            model,
            errors: Vec::new(),
        }
    }

    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    /// Hand back the built value, or every error recorded along the way
    pub fn finish<T>(self, built: Option<T>) -> Result<T, ValidationErrors> {
        match built {
            Some(value) if self.is_clean() => Ok(value),
            _ => Err(self.into_errors()),
        }
    }

    pub fn into_errors(self) -> ValidationErrors {
        ValidationErrors {
            model: self.model,
            errors: self.errors,
        }
    }

    pub fn push(&mut self, field: impl Into<String>, constraint: Constraint, value: Option<Value>) {
        self.errors.push(FieldError::new(field, constraint, value));
    }

    fn wrong_type(&mut self, path: &str, expected: &'static str, value: &Value) {
        self.push(
            path,
            Constraint::WrongType { expected },
            Some(value.clone()),
        );
    }

    /// Require the value at `path` to be a JSON object
    pub fn object<'v>(&mut self, value: &'v Value, path: &str) -> Option<&'v Map<String, Value>> {
        match value.as_object() {
            Some(object) => Some(object),
            None => {
                self.wrong_type(path, "object", value);
                None
            }
        }
    }

    /// Read a field that must be present
    pub fn required<T>(
        &mut self,
        object: &Map<String, Value>,
        prefix: &str,
        name: &str,
        parse: impl FnOnce(&mut Self, &Value, &str) -> Option<T>,
    ) -> Option<T> {
        let path = join(prefix, name);
        match object.get(name) {
            Some(value) => parse(self, value, &path),
            None => {
                self.push(path, Constraint::Missing, None);
                None
            }
        }
    }

    /// Read a field where absent and `null` both mean "no value".
    /// Returns `None` only when the field was present and invalid.
    pub fn optional<T>(
        &mut self,
        object: &Map<String, Value>,
        prefix: &str,
        name: &str,
        parse: impl FnOnce(&mut Self, &Value, &str) -> Option<T>,
    ) -> Option<Option<T>> {
        match object.get(name) {
            None | Some(Value::Null) => Some(None),
            Some(value) => parse(self, value, &join(prefix, name)).map(Some),
        }
    }

    /// Read a non-nullable field that falls back to `default` when absent
    pub fn defaulted<T>(
        &mut self,
        object: &Map<String, Value>,
        prefix: &str,
        name: &str,
        default: impl FnOnce() -> T,
        parse: impl FnOnce(&mut Self, &Value, &str) -> Option<T>,
    ) -> Option<T> {
        match object.get(name) {
            None => Some(default()),
            Some(value) => parse(self, value, &join(prefix, name)),
        }
    }

    /// Read a field keeping absent, `null` and a value apart
    pub fn patch<T>(
        &mut self,
        object: &Map<String, Value>,
        prefix: &str,
        name: &str,
        parse: impl FnOnce(&mut Self, &Value, &str) -> Option<T>,
    ) -> Option<Patch<T>> {
        match object.get(name) {
            None => Some(Patch::Unset),
            Some(Value::Null) => Some(Patch::Null),
            Some(value) => parse(self, value, &join(prefix, name)).map(Patch::Value),
        }
    }

    /// Record a missing attribute when `value` is absent
    pub fn present<T>(&mut self, path: &str, value: Option<T>) -> Option<T> {
        if value.is_none() {
            self.push(path, Constraint::Missing, None);
        }
        value
    }

    pub fn string(&mut self, value: &Value, path: &str) -> Option<String> {
        match value {
            Value::String(s) => Some(s.clone()),
            other => {
                self.wrong_type(path, "string", other);
                None
            }
        }
    }

    pub fn integer(&mut self, value: &Value, path: &str) -> Option<i64> {
        match value.as_i64() {
            Some(n) => Some(n),
            None if value.is_u64() => {
                self.push(path, Constraint::OutOfRange, Some(value.clone()));
                None
            }
            None => {
                self.wrong_type(path, "integer", value);
                None
            }
        }
    }

    pub fn timestamp(&mut self, value: &Value, path: &str) -> Option<DateTime<Utc>> {
        match value.as_str().and_then(parse_timestamp) {
            Some(ts) => Some(ts),
            None => {
                self.wrong_type(path, "datetime", value);
                None
            }
        }
    }

    /// Read an array, checking every element with `item`.
    /// Errors on several elements are all reported.
    pub fn list<T>(
        &mut self,
        value: &Value,
        path: &str,
        mut item: impl FnMut(&mut Self, &Value, &str) -> Option<T>,
    ) -> Option<Vec<T>> {
        let Some(values) = value.as_array() else {
            self.wrong_type(path, "array", value);
            return None;
        };

        let before = self.errors.len();
        let mut out = Vec::with_capacity(values.len());
        for (index, element) in values.iter().enumerate() {
            if let Some(parsed) = item(self, element, &format!("{}[{}]", path, index)) {
                out.push(parsed);
            }
        }

        if self.errors.len() > before {
            None
        } else {
            Some(out)
        }
    }

    pub fn integer_list(&mut self, value: &Value, path: &str) -> Option<Vec<i64>> {
        self.list(value, path, Self::integer)
    }

    /// Check a string's character count lies in `min..=max`
    pub fn length(&mut self, path: &str, text: &str, min: usize, max: usize) -> bool {
        let count = text.chars().count();
        let constraint = if count < min {
            Constraint::MinLength { min }
        } else if count > max {
            Constraint::MaxLength { max }
        } else {
            return true;
        };
        self.push(path, constraint, Some(Value::String(text.to_string())));
        false
    }

    /// Check a string is a hex color
    pub fn color(&mut self, path: &str, color: &str) -> bool {
        if is_hex_color(color) {
            return true;
        }
        self.push(
            path,
            Constraint::Pattern {
                pattern: COLOR_PATTERN,
            },
            Some(Value::String(color.to_string())),
        );
        false
    }

    /// A string field that must be a tag name
    pub fn tag_name(&mut self, value: &Value, path: &str) -> Option<String> {
        let name = self.string(value, path)?;
        self.length(path, &name, 1, TAG_NAME_MAX_LENGTH)
            .then_some(name)
    }

    /// A string field that must be a hex color
    pub fn color_string(&mut self, value: &Value, path: &str) -> Option<String> {
        let color = self.string(value, path)?;
        self.color(path, &color).then_some(color)
    }
}
