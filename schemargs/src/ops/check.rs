//! Check operation - schema validation summary.

use std::path::Path;

use schemargs_schema::Schema;

use crate::reports::{CheckReport, EntryInfo};

/// Execute the check operation.
///
/// The schema is already validated; this collects what the report shows.
pub fn check(schema: &Schema, schema_path: &Path) -> CheckReport {
    let entries = schema
        .iter()
        .map(|(name, spec)| EntryInfo {
            name,
            arg_type: spec.arg_type,
            default_value: spec.default_value.to_string(),
            required: spec.required,
        })
        .collect();

    CheckReport {
        schema_path: schema_path.to_path_buf(),
        entries,
    }
}

#[cfg(test)]
mod tests {
    use schemargs_core::ArgType;

    use super::*;

    #[test]
    fn test_check_lists_entries_in_order() {
        let schema: Schema = r#"{
            "p": { "type": "integer", "defaultValue": 8080, "required": true },
            "l": { "type": "boolean" }
        }"#
        .parse()
        .unwrap();

        let report = check(&schema, Path::new("schema.json"));

        assert_eq!(report.schema_path, Path::new("schema.json"));
        assert_eq!(report.entries.len(), 2);
        assert_eq!(report.entries[0].name, 'p');
        assert_eq!(report.entries[0].arg_type, ArgType::Integer);
        assert_eq!(report.entries[0].default_value, "8080");
        assert!(report.entries[0].required);
        assert_eq!(report.entries[1].name, 'l');
        assert_eq!(report.entries[1].default_value, "false");
        assert_eq!(report.required_count(), 1);
    }
}
