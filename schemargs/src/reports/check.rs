//! Check command report data structures.

use std::path::PathBuf;

use schemargs_core::ArgType;

use super::output::{Output, Report};

/// Report data from schema validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the schema file.
    pub schema_path: PathBuf,
    /// Entries in schema order.
    pub entries: Vec<EntryInfo>,
}

/// One schema entry.
#[derive(Debug)]
pub struct EntryInfo {
    pub name: char,
    pub arg_type: ArgType,
    /// Default value, already formatted.
    pub default_value: String,
    pub required: bool,
}

impl CheckReport {
    pub fn required_count(&self) -> usize {
        self.entries.iter().filter(|e| e.required).count()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        out.preformatted(&format!("✓ {} is valid", self.schema_path.display()));

        if self.entries.is_empty() {
            out.warning("schema declares no arguments");
            return;
        }

        out.newline();
        out.section(&format!(
            "{} argument{} ({} required)",
            self.entries.len(),
            if self.entries.len() == 1 { "" } else { "s" },
            self.required_count()
        ));
        for entry in &self.entries {
            let mut line = format!(
                "-{} {:<7} default {}",
                entry.name,
                entry.arg_type.as_str(),
                render_default(entry)
            );
            if entry.required {
                line.push_str(", required");
            }
            out.list_item(&line);
        }
    }
}

fn render_default(entry: &EntryInfo) -> String {
    match entry.arg_type {
        ArgType::String => format!("{:?}", entry.default_value),
        ArgType::Boolean | ArgType::Integer => entry.default_value.clone(),
    }
}
