//! Schema validation from descriptions, strings and files.

use std::{path::Path, str::FromStr};

use indexmap::IndexMap;
use schemargs_core::ArgType;
use tracing::debug;

use crate::{
    ArgumentSpec, DefaultValue, EntryDescription, Error, Result, Schema, SchemaDescription,
    validate::ParseContext,
};

/// Filename used in diagnostics for schemas that were not read from a file.
const STRUCTURED_SOURCE: &str = "<schema>";

/// Validate a structured schema description.
///
/// Diagnostics point into the description rendered as JSON.
pub fn validate(description: &SchemaDescription) -> Result<Schema> {
    let src = serde_json::to_string_pretty(description).unwrap_or_default();
    validate_description(description, &ParseContext::new(&src, STRUCTURED_SOURCE))
}

impl FromStr for Schema {
    type Err = Box<Error>;

    /// Parse a JSON schema.
    fn from_str(s: &str) -> Result<Self> {
        Schema::from_json_str(s)
    }
}

impl Schema {
    /// Parse and validate a JSON schema.
    pub fn from_json_str(content: &str) -> Result<Self> {
        Self::from_json_str_with_filename(content, "schema.json")
    }

    /// Parse and validate a JSON schema with a custom filename for error reporting.
    pub fn from_json_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let ctx = ParseContext::new(content, filename);
        let description: SchemaDescription =
            serde_json::from_str(content).map_err(|e| ctx.json_error(e))?;
        validate_description(&description, &ctx)
    }

    /// Parse and validate a TOML schema.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Self::from_toml_str_with_filename(content, "schema.toml")
    }

    /// Parse and validate a TOML schema with a custom filename for error reporting.
    pub fn from_toml_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let ctx = ParseContext::new(content, filename);
        let description: SchemaDescription =
            toml::from_str(content).map_err(|e| ctx.toml_error(e))?;
        validate_description(&description, &ctx)
    }

    /// Read a schema file, choosing the format from its extension.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let parse = match extension.as_deref() {
            Some("json") => Schema::from_json_str_with_filename,
            Some("toml") => Schema::from_toml_str_with_filename,
            _ => {
                return Err(Box::new(Error::UnknownFormat {
                    path: path.to_path_buf(),
                }));
            }
        };

        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        debug!(path = %path.display(), "read schema file");
        parse(&content, &path.display().to_string())
    }
}

/// Validate every entry, stopping at the first error.
fn validate_description(description: &SchemaDescription, ctx: &ParseContext) -> Result<Schema> {
    let mut entries = IndexMap::with_capacity(description.len());

    for (name, entry) in &description.entries {
        let c = ctx.validate_name(name)?;
        let spec = validate_entry(name, entry, ctx)?;
        debug!(
            name = %c,
            ty = %spec.arg_type,
            required = spec.required,
            "validated schema entry"
        );
        entries.insert(c, spec);
    }

    Ok(Schema::from_entries(entries))
}

fn validate_entry(
    name: &str,
    entry: &EntryDescription,
    ctx: &ParseContext,
) -> Result<ArgumentSpec> {
    let arg_type: ArgType = entry
        .type_name
        .parse()
        .map_err(|_| ctx.unsupported_type_error(name, &entry.type_name))?;

    let default_value = match &entry.default_value {
        None => arg_type.zero_value(),
        Some(DefaultValue::Typed(value)) if value.arg_type() == arg_type => value.clone(),
        Some(other) => return Err(ctx.default_mismatch_error(name, arg_type, other)),
    };

    Ok(ArgumentSpec {
        arg_type,
        default_value,
        required: entry.required,
    })
}

impl From<&Schema> for SchemaDescription {
    fn from(schema: &Schema) -> Self {
        schema.to_description()
    }
}

impl TryFrom<&SchemaDescription> for Schema {
    type Error = Box<Error>;

    fn try_from(description: &SchemaDescription) -> Result<Self> {
        validate(description)
    }
}

#[cfg(test)]
mod tests {
    use schemargs_core::Value;

    use super::*;

    const DEFAULT_SCHEMA: &str = r#"{
        "l": { "type": "boolean", "defaultValue": false, "required": false },
        "p": { "type": "integer", "defaultValue": 0, "required": false },
        "d": { "type": "string", "defaultValue": "", "required": false }
    }"#;

    #[test]
    fn test_parse_default_schema() {
        let schema: Schema = DEFAULT_SCHEMA.parse().unwrap();

        assert_eq!(schema.len(), 3);
        assert_eq!(schema.get('l').unwrap().default_value, Value::Boolean(false));
        assert_eq!(schema.get('p').unwrap().default_value, Value::Integer(0));
        assert_eq!(
            schema.get('d').unwrap().default_value,
            Value::String(String::new())
        );
    }

    #[test]
    fn test_empty_schema() {
        let schema: Schema = "{}".parse().unwrap();
        assert!(schema.is_empty());
    }

    #[test]
    fn test_missing_default_uses_zero_value() {
        let schema: Schema = r#"{
            "l": { "type": "boolean" },
            "p": { "type": "integer" },
            "d": { "type": "string" }
        }"#
        .parse()
        .unwrap();

        for (_, spec) in schema.iter() {
            assert_eq!(spec.default_value, spec.arg_type.zero_value());
            assert!(!spec.required);
        }
    }

    #[test]
    fn test_unsupported_type() {
        let err = Schema::from_json_str(
            r#"{ "x": { "type": "list", "defaultValue": [], "required": false } }"#,
        )
        .unwrap_err();

        match *err {
            Error::UnsupportedType { ref name, ref ty, .. } => {
                assert_eq!(name, "x");
                assert_eq!(ty, "list");
            }
            other => panic!("expected UnsupportedType, got {other:?}"),
        }
    }

    #[test]
    fn test_unsupported_type_reported_before_default() {
        // The default would also be rejected, but the type is checked first.
        let err = Schema::from_json_str(r#"{ "x": { "type": "list", "defaultValue": 1.5 } }"#)
            .unwrap_err();
        assert!(matches!(*err, Error::UnsupportedType { .. }));
    }

    #[test]
    fn test_default_type_mismatch() {
        let err = Schema::from_json_str(r#"{ "p": { "type": "integer", "defaultValue": "x" } }"#)
            .unwrap_err();

        match *err {
            Error::DefaultTypeMismatch {
                ref name,
                expected,
                ref found,
                ..
            } => {
                assert_eq!(name, "p");
                assert_eq!(expected, ArgType::Integer);
                assert_eq!(found, "string");
            }
            other => panic!("expected DefaultTypeMismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_name() {
        let err = Schema::from_json_str(r#"{ "port": { "type": "integer" } }"#).unwrap_err();
        assert!(matches!(*err, Error::InvalidArgumentName { ref name, .. } if name == "port"));
    }

    #[test]
    fn test_malformed_json() {
        let err = Schema::from_json_str(r#"{ "p": { "type": "integer" "#).unwrap_err();
        assert!(matches!(*err, Error::ParseJson { span: Some(_), .. }));
    }

    #[test]
    fn test_missing_type_is_parse_error() {
        let err = Schema::from_json_str(r#"{ "p": { "required": true } }"#).unwrap_err();
        assert!(matches!(*err, Error::ParseJson { .. }));
    }

    #[test]
    fn test_toml_schema() {
        let schema = Schema::from_toml_str(
            r#"
            [l]
            type = "boolean"

            [p]
            type = "integer"
            defaultValue = 8080
            required = true
            "#,
        )
        .unwrap();

        let names: Vec<char> = schema.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ['l', 'p']);
        let p = schema.get('p').unwrap();
        assert_eq!(p.default_value, Value::Integer(8080));
        assert!(p.required);
    }

    #[test]
    fn test_toml_unsupported_type() {
        let err = Schema::from_toml_str("x = { type = \"list\", defaultValue = [] }").unwrap_err();
        assert!(matches!(*err, Error::UnsupportedType { ref ty, .. } if ty == "list"));
    }

    #[test]
    fn test_malformed_toml() {
        let err = Schema::from_toml_str("[p\ntype = 1").unwrap_err();
        assert!(matches!(*err, Error::ParseToml { .. }));
    }

    #[test]
    fn test_structured_validation() {
        let description = SchemaDescription::new()
            .entry("p", EntryDescription::new("integer").default_value(8080i64))
            .entry("v", EntryDescription::new("boolean").required(true));

        let schema = validate(&description).unwrap();
        assert_eq!(schema.get('p').unwrap().default_value, Value::Integer(8080));
        assert!(schema.get('v').unwrap().required);
    }

    #[test]
    fn test_structured_validation_error_has_source() {
        let description = SchemaDescription::new().entry("x", EntryDescription::new("list"));
        let err = validate(&description).unwrap_err();

        match *err {
            Error::UnsupportedType { span, .. } => assert!(span.is_some()),
            other => panic!("expected UnsupportedType, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_is_idempotent() {
        let schema: Schema = DEFAULT_SCHEMA.parse().unwrap();
        let again = validate(&schema.to_description()).unwrap();
        assert_eq!(again, schema);
    }

    #[test]
    fn test_toml_datetime_default_mismatch() {
        let err = Schema::from_toml_str("p = { type = \"integer\", defaultValue = 1979-05-27 }")
            .unwrap_err();

        match *err {
            Error::DefaultTypeMismatch { ref found, .. } => assert_eq!(found, "datetime"),
            other => panic!("expected DefaultTypeMismatch, got {other:?}"),
        }
    }
}
