//! Output formatting utilities

use crate::application::Schema;
use crate::error::Result;
use crate::infrastructure::{Config, OutputStyle};
use serde_json::Value;

/// Render a validated payload
pub fn render_json(value: &Value, style: OutputStyle) -> Result<String> {
    let rendered = match style {
        OutputStyle::Pretty => serde_json::to_string_pretty(value)?,
        OutputStyle::Compact => serde_json::to_string(value)?,
    };
    Ok(rendered)
}

/// Format the schema list for display
pub fn format_schema_list(schemas: &[Schema]) -> String {
    let width = schemas
        .iter()
        .map(|s| s.name().len())
        .max()
        .unwrap_or(0);

    let mut output = String::new();
    for schema in schemas {
        output.push_str(&format!(
            "{:<width$}  {}\n",
            schema.name(),
            schema.description(),
            width = width
        ));
    }
    output
}

/// Format every config key as `key = value`
pub fn format_config(config: &Config) -> String {
    format!(
        "output = {}\nlog_level = {}\n",
        config.output, config.log_level
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_compact() {
        let value = json!({"name": "urgent", "color": "#FF0000"});
        let output = render_json(&value, OutputStyle::Compact).unwrap();
        assert!(!output.contains('\n'));
        assert!(output.contains("\"color\":\"#FF0000\""));
    }

    #[test]
    fn test_render_pretty() {
        let value = json!({"name": "urgent"});
        let output = render_json(&value, OutputStyle::Pretty).unwrap();
        assert_eq!(output, "{\n  \"name\": \"urgent\"\n}");
    }

    #[test]
    fn test_format_schema_list_aligned() {
        let output = format_schema_list(&[Schema::Tag, Schema::TagCreate]);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("tag         Tag response"));
        assert!(lines[1].starts_with("tag-create  New tag"));
    }

    #[test]
    fn test_format_empty_schema_list() {
        assert_eq!(format_schema_list(&[]), "");
    }

    #[test]
    fn test_format_config() {
        let output = format_config(&Config::default());
        assert_eq!(output, "output = pretty\nlog_level = warn\n");
    }
}
