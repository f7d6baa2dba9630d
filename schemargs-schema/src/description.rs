//! Unvalidated schema descriptions.
//!
//! These types mirror the on-disk shape of a schema:
//!
//! ```json
//! {
//!     "p": { "type": "integer", "defaultValue": 0, "required": false }
//! }
//! ```
//!
//! Nothing here is checked beyond its shape; [`crate::validate`] turns a
//! description into a [`crate::Schema`].

use indexmap::IndexMap;
use schemargs_core::Value;
use serde::{Deserialize, Serialize};

/// A schema as written by the user, keyed by argument name in source order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SchemaDescription {
    pub entries: IndexMap<String, EntryDescription>,
}

impl SchemaDescription {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry, replacing any entry with the same name.
    pub fn entry(mut self, name: impl Into<String>, entry: EntryDescription) -> Self {
        self.entries.insert(name.into(), entry);
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One argument entry as written by the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryDescription {
    /// Type name; kept as a string so unsupported types can be reported
    /// with the argument they belong to.
    #[serde(rename = "type")]
    pub type_name: String,

    /// Default value, if any. A JSON `null` counts as absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<DefaultValue>,

    #[serde(default)]
    pub required: bool,
}

impl EntryDescription {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            default_value: None,
            required: false,
        }
    }

    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default_value = Some(DefaultValue::Typed(value.into()));
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }
}

/// A default value as written in the source.
///
/// Anything that is not a boolean, an integer or a string lands in `Other`
/// and is rejected during validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DefaultValue {
    Typed(Value),
    Other(serde_json::Value),
}

/// Field name the `toml` deserializer wraps datetimes in.
const TOML_DATETIME_FIELD: &str = "$__toml_private_datetime";

impl DefaultValue {
    /// Short description of the value's kind for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            DefaultValue::Typed(v) => v.arg_type().as_str(),
            DefaultValue::Other(serde_json::Value::Null) => "null",
            DefaultValue::Other(serde_json::Value::Bool(_)) => "boolean",
            DefaultValue::Other(serde_json::Value::Number(n)) if n.is_f64() => "float",
            DefaultValue::Other(serde_json::Value::Number(_)) => "out-of-range integer",
            DefaultValue::Other(serde_json::Value::String(_)) => "string",
            DefaultValue::Other(serde_json::Value::Array(_)) => "array",
            DefaultValue::Other(serde_json::Value::Object(map))
                if map.len() == 1 && map.contains_key(TOML_DATETIME_FIELD) =>
            {
                "datetime"
            }
            DefaultValue::Other(serde_json::Value::Object(_)) => "object",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_entry() {
        let desc: SchemaDescription = serde_json::from_str(
            r#"{ "l": { "type": "boolean", "defaultValue": true, "required": true } }"#,
        )
        .unwrap();

        let entry = &desc.entries["l"];
        assert_eq!(entry.type_name, "boolean");
        assert_eq!(
            entry.default_value,
            Some(DefaultValue::Typed(Value::Boolean(true)))
        );
        assert!(entry.required);
    }

    #[test]
    fn test_optional_fields_default() {
        let desc: SchemaDescription =
            serde_json::from_str(r#"{ "d": { "type": "string" } }"#).unwrap();

        let entry = &desc.entries["d"];
        assert_eq!(entry.default_value, None);
        assert!(!entry.required);
    }

    #[test]
    fn test_null_default_is_absent() {
        let desc: SchemaDescription =
            serde_json::from_str(r#"{ "d": { "type": "string", "defaultValue": null } }"#)
                .unwrap();
        assert_eq!(desc.entries["d"].default_value, None);
    }

    #[test]
    fn test_unsupported_defaults_land_in_other() {
        let desc: SchemaDescription = serde_json::from_str(
            r#"{
                "x": { "type": "list", "defaultValue": [] },
                "f": { "type": "integer", "defaultValue": 1.5 }
            }"#,
        )
        .unwrap();

        assert_eq!(desc.entries["x"].default_value.as_ref().unwrap().kind(), "array");
        assert_eq!(desc.entries["f"].default_value.as_ref().unwrap().kind(), "float");
    }

    #[test]
    fn test_preserves_source_order() {
        let desc: SchemaDescription = serde_json::from_str(
            r#"{ "z": { "type": "boolean" }, "a": { "type": "boolean" }, "m": { "type": "boolean" } }"#,
        )
        .unwrap();

        let names: Vec<&str> = desc.entries.keys().map(String::as_str).collect();
        assert_eq!(names, ["z", "a", "m"]);
    }

    #[test]
    fn test_builder() {
        let desc = SchemaDescription::new()
            .entry("p", EntryDescription::new("integer").default_value(8080i64))
            .entry("v", EntryDescription::new("boolean").required(true));

        assert_eq!(desc.len(), 2);
        assert!(desc.entries["v"].required);
        assert_eq!(
            desc.entries["p"].default_value,
            Some(DefaultValue::Typed(Value::Integer(8080)))
        );
    }

    #[test]
    fn test_serialize_uses_source_field_names() {
        let desc = SchemaDescription::new().entry(
            "p",
            EntryDescription::new("integer")
                .default_value(0i64)
                .required(true),
        );

        let json = serde_json::to_string(&desc).unwrap();
        assert_eq!(
            json,
            r#"{"p":{"type":"integer","defaultValue":0,"required":true}}"#
        );
    }
}
