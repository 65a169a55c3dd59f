//! Record-to-content dispatch for table cells and detail fields.
//!
//! Everything here produces plain data ([`CellContent`], [`DetailValue`]);
//! the view layer turns that into markup.

use contracts::bot_analytics::Record;
use serde_json::Value;
use std::collections::HashMap;

use super::descriptors::{
    CellSource, ColumnDescriptor, ColumnType, CustomCellRenderer, DetailField, DetailFieldType,
};
use crate::shared::components::ui::BadgeTone;
use crate::shared::date_utils::format_datetime;

/// Shown for null, absent or empty values.
pub const PLACEHOLDER: &str = "—";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeSpec {
    pub label: String,
    pub tone: BadgeTone,
}

impl BadgeSpec {
    pub fn new(label: impl Into<String>, tone: BadgeTone) -> Self {
        Self {
            label: label.into(),
            tone,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellContent {
    Text(String),
    Placeholder,
    Badges(Vec<BadgeSpec>),
    /// Full-page navigation; clicking it must not trigger the row click.
    Link { text: String, href: String },
}

/// JS-like stringification without quotes around plain strings.
pub fn stringify(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}

fn join_values(items: &[Value]) -> String {
    items.iter().map(stringify).collect::<Vec<_>>().join(", ")
}

/// Default formatting applied to raw and accessor-extracted values.
pub fn format_value(value: &Value, column_type: ColumnType) -> CellContent {
    match value {
        Value::Null => CellContent::Placeholder,
        Value::String(s) if s.is_empty() => CellContent::Placeholder,
        Value::Array(items) if items.is_empty() => CellContent::Placeholder,
        Value::Array(items) => CellContent::Text(join_values(items)),
        Value::String(s) if column_type == ColumnType::Date => {
            CellContent::Text(format_datetime(s))
        }
        other => CellContent::Text(stringify(other)),
    }
}

/// Resolves one cell: column `Render`, then the page-level renderer for the
/// key, then column `Accessor`, then the raw field.
pub fn render_cell(
    row: &Record,
    column: &ColumnDescriptor,
    custom_renderers: &HashMap<String, CustomCellRenderer>,
) -> CellContent {
    if let CellSource::Render(render) = &column.source {
        return render(row);
    }
    if let Some(render) = custom_renderers.get(&column.key) {
        return render(row, column);
    }
    if let CellSource::Accessor(accessor) = &column.source {
        return format_value(&accessor(row), column.column_type);
    }
    match row.value(&column.key) {
        Some(value) => format_value(value, column.column_type),
        None => CellContent::Placeholder,
    }
}

/// Rows worth flagging in the table: attack attempted or any attack counted.
pub fn row_has_attack(row: &Record) -> bool {
    row.flag("attack_attempted") == Some(true) || row.count("attack_count").unwrap_or(0) > 0
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailValue {
    Placeholder,
    Text(String),
    /// Pretty-printed JSON.
    Json(String),
    Badges(Vec<String>),
    Flag(bool),
}

fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

pub fn render_detail_field(record: &Record, field: &DetailField) -> DetailValue {
    let Some(value) = record.value(&field.value) else {
        return DetailValue::Placeholder;
    };

    match field.field_type {
        DetailFieldType::Date => match value.as_str() {
            Some(raw) => DetailValue::Text(format_datetime(raw)),
            None => DetailValue::Text(stringify(value)),
        },
        DetailFieldType::Json => DetailValue::Json(
            serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string()),
        ),
        DetailFieldType::Array => match value.as_array() {
            Some(items) if items.is_empty() => DetailValue::Placeholder,
            Some(items) => DetailValue::Badges(items.iter().map(stringify).collect()),
            None => DetailValue::Text(stringify(value)),
        },
        DetailFieldType::Boolean => DetailValue::Flag(truthy(value)),
        DetailFieldType::Text => match value.as_array() {
            Some(items) => DetailValue::Text(join_values(items)),
            None => DetailValue::Text(stringify(value)),
        },
    }
}

/// Attack fields appended below the declared detail fields when present.
pub fn detail_extras(record: &Record) -> Vec<(&'static str, DetailValue)> {
    let mut extras = Vec::new();
    let categories = record.string_list("attack_categories");
    if !categories.is_empty() {
        extras.push(("Attack Categories", DetailValue::Badges(categories)));
    }
    if let Some(count) = record.value("attack_count") {
        extras.push(("Attack Count", DetailValue::Text(stringify(count))));
    }
    extras
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::Arc;

    fn record(value: Value) -> Record {
        serde_json::from_value(value).unwrap()
    }

    fn no_custom() -> HashMap<String, CustomCellRenderer> {
        HashMap::new()
    }

    #[test]
    fn missing_email_renders_placeholder() {
        let row = record(json!({ "id": 1, "ip_address": "198.51.100.4" }));
        let column = ColumnDescriptor::new("email", "Email");
        assert_eq!(render_cell(&row, &column, &no_custom()), CellContent::Placeholder);

        let field = DetailField::new("email", "Email");
        assert_eq!(render_detail_field(&row, &field), DetailValue::Placeholder);
    }

    #[test]
    fn default_cell_formats_arrays_and_scalars() {
        let row = record(json!({
            "target_fields": ["email", "message"],
            "attack_count": 0,
            "blocked": false,
            "empty": "",
            "nothing": []
        }));
        let cell = |key: &str| render_cell(&row, &ColumnDescriptor::new(key, key), &no_custom());
        assert_eq!(cell("target_fields"), CellContent::Text("email, message".into()));
        assert_eq!(cell("attack_count"), CellContent::Text("0".into()));
        assert_eq!(cell("blocked"), CellContent::Text("false".into()));
        assert_eq!(cell("empty"), CellContent::Placeholder);
        assert_eq!(cell("nothing"), CellContent::Placeholder);
    }

    #[test]
    fn date_column_formats_timestamps() {
        let row = record(json!({ "created_at": "2024-03-15T14:02:26Z", "broken": "soon" }));
        let CellContent::Text(text) =
            render_cell(&row, &ColumnDescriptor::date("created_at", "Timestamp"), &no_custom())
        else {
            panic!("expected text");
        };
        assert!(text.contains(".2024, "), "{text}");
        assert_eq!(
            render_cell(&row, &ColumnDescriptor::date("broken", "Broken"), &no_custom()),
            CellContent::Text("soon".into())
        );
    }

    #[test]
    fn column_render_beats_custom_renderer_beats_accessor() {
        let row = record(json!({ "email": ["a@x.test", "b@x.test"] }));
        let mut custom = no_custom();
        custom.insert(
            "email".to_string(),
            Arc::new(|_: &Record, _: &ColumnDescriptor| CellContent::Text("custom".into())) as CustomCellRenderer,
        );

        let rendered = ColumnDescriptor::new("email", "Email")
            .render(|_| CellContent::Text("render".into()))
            .accessor(|_| json!("accessor"));
        // `accessor` replaced the render source, so the page renderer wins.
        assert_eq!(render_cell(&row, &rendered, &custom), CellContent::Text("custom".into()));

        let rendered = ColumnDescriptor::new("email", "Email").render(|_| CellContent::Text("render".into()));
        assert_eq!(render_cell(&row, &rendered, &custom), CellContent::Text("render".into()));

        let accessed = ColumnDescriptor::new("email", "Email").accessor(|r| json!(r.string_list("email").join(" | ")));
        assert_eq!(render_cell(&row, &accessed, &custom), CellContent::Text("custom".into()));
        assert_eq!(
            render_cell(&row, &accessed, &no_custom()),
            CellContent::Text("a@x.test | b@x.test".into())
        );
    }

    #[test]
    fn accessor_output_is_formatted_by_default_rules() {
        let row = record(json!({}));
        let column = ColumnDescriptor::new("email", "Email").accessor(|_| Value::Null);
        assert_eq!(render_cell(&row, &column, &no_custom()), CellContent::Placeholder);
    }

    #[test]
    fn detail_fields_dispatch_on_type() {
        let row = record(json!({
            "data_details": { "email": true },
            "attack_categories": ["XSS", "SQLI"],
            "empty_list": [],
            "attack_attempted": true,
            "is_clean": false,
            "target_fields": ["name", "email"],
            "method": "POST",
            "referer": null
        }));

        let field = |key: &str, t: DetailFieldType| render_detail_field(&row, &DetailField::typed(key, key, t));

        assert_eq!(
            field("data_details", DetailFieldType::Json),
            DetailValue::Json("{\n  \"email\": true\n}".into())
        );
        assert_eq!(
            field("attack_categories", DetailFieldType::Array),
            DetailValue::Badges(vec!["XSS".into(), "SQLI".into()])
        );
        assert_eq!(field("empty_list", DetailFieldType::Array), DetailValue::Placeholder);
        assert_eq!(field("method", DetailFieldType::Array), DetailValue::Text("POST".into()));
        assert_eq!(field("attack_attempted", DetailFieldType::Boolean), DetailValue::Flag(true));
        assert_eq!(field("is_clean", DetailFieldType::Boolean), DetailValue::Flag(false));
        assert_eq!(field("target_fields", DetailFieldType::Text), DetailValue::Text("name, email".into()));
        assert_eq!(field("referer", DetailFieldType::Json), DetailValue::Placeholder);
        assert_eq!(field("missing", DetailFieldType::Boolean), DetailValue::Placeholder);
    }

    #[test]
    fn extras_only_when_present() {
        let row = record(json!({ "attack_categories": [], "attack_count": 0 }));
        assert_eq!(detail_extras(&row), vec![("Attack Count", DetailValue::Text("0".into()))]);

        let row = record(json!({ "attack_categories": ["LFI"] }));
        assert_eq!(
            detail_extras(&row),
            vec![("Attack Categories", DetailValue::Badges(vec!["LFI".into()]))]
        );
    }

    #[test]
    fn attack_rows_are_flagged() {
        assert!(row_has_attack(&record(json!({ "attack_attempted": true }))));
        assert!(row_has_attack(&record(json!({ "attack_count": 3 }))));
        assert!(!row_has_attack(&record(json!({ "attack_count": 0, "attack_attempted": false }))));
        assert!(!row_has_attack(&record(json!({}))));
    }
}
