//! Validation helpers that carry source information for diagnostics.

use miette::{NamedSource, SourceSpan};
use schemargs_core::{ArgType, FLAG_MARKER};

use crate::{DefaultValue, Error};

/// Parsing and validation context that carries source information.
///
/// Errors built through the context point back into the schema text, so the
/// caller can render them with miette.
///
/// # Example
///
/// ```ignore
/// let ctx = ParseContext::new(src, "schema.json");
/// let name = ctx.validate_name("p")?;
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ParseContext<'a> {
    /// The raw schema source
    src: &'a str,
    /// The filename for error reporting
    filename: &'a str,
}

impl<'a> ParseContext<'a> {
    pub fn new(src: &'a str, filename: &'a str) -> Self {
        Self { src, filename }
    }

    pub fn src(&self) -> &'a str {
        self.src
    }

    pub fn filename(&self) -> &'a str {
        self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(self.filename, self.src.to_string())
    }

    /// Create a JSON parse error, locating it from the error's line and column.
    pub fn json_error(&self, source: serde_json::Error) -> Box<Error> {
        let span = offset_of(self.src, source.line(), source.column())
            .map(|offset| SourceSpan::from((offset, 0)));
        Box::new(Error::ParseJson {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a TOML parse error.
    pub fn toml_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::ParseToml {
            src: self.named_source(),
            span,
            source,
        })
    }

    pub fn unsupported_type_error(&self, name: &str, ty: &str) -> Box<Error> {
        Box::new(Error::UnsupportedType {
            src: self.named_source(),
            span: self.find_value_span(name, ty),
            name: name.to_string(),
            ty: ty.to_string(),
        })
    }

    pub fn invalid_name_error(&self, name: &str, reason: &str) -> Box<Error> {
        Box::new(Error::InvalidArgumentName {
            src: self.named_source(),
            span: find_name_span(self.src, name),
            name: name.to_string(),
            reason: reason.to_string(),
        })
    }

    pub fn default_mismatch_error(
        &self,
        name: &str,
        expected: ArgType,
        found: &DefaultValue,
    ) -> Box<Error> {
        Box::new(Error::DefaultTypeMismatch {
            src: self.named_source(),
            span: find_name_span(self.src, name),
            name: name.to_string(),
            expected,
            found: found.kind().to_string(),
        })
    }

    /// Validate an argument name and return its character.
    pub fn validate_name(&self, name: &str) -> Result<char, Box<Error>> {
        validate_argument_name(name).map_err(|reason| self.invalid_name_error(name, reason))
    }

    /// Find the span of a quoted value that follows the entry `name`.
    fn find_value_span(&self, name: &str, value: &str) -> Option<SourceSpan> {
        let start = find_name_span(self.src, name).map_or(0, |s| s.offset());
        let quoted = format!("\"{}\"", value);
        self.src[start..]
            .find(&quoted)
            // +1 to skip the opening quote
            .map(|pos| SourceSpan::from((start + pos + 1, value.len())))
            .or_else(|| find_name_span(self.src, name))
    }
}

/// Find the span of an entry name in JSON or TOML source.
/// Searches for patterns like `"name"`, `[name]` or `name =`.
pub(crate) fn find_name_span(src: &str, name: &str) -> Option<SourceSpan> {
    if name.is_empty() {
        return None;
    }

    let quoted = format!("\"{}\"", name);
    if let Some(pos) = src.find(&quoted) {
        // +1 to skip the opening quote
        return Some(SourceSpan::from((pos + 1, name.len())));
    }

    let table = format!("[{}]", name);
    if let Some(pos) = src.find(&table) {
        return Some(SourceSpan::from((pos + 1, name.len())));
    }

    // Bare keys at the start of a line: `p = { type = "integer" }` or `p.type = ...`
    let mut offset = 0;
    for line in src.split_inclusive('\n') {
        let trimmed = line.trim_start();
        let indent = line.len() - trimmed.len();
        if let Some(rest) = trimmed.strip_prefix(name) {
            let rest = rest.trim_start();
            if rest.starts_with('=') || rest.starts_with('.') {
                return Some(SourceSpan::from((offset + indent, name.len())));
            }
        }
        offset += line.len();
    }

    None
}

/// Convert a 1-based line and column into a byte offset.
/// A line of 0 means the error has no position.
pub(crate) fn offset_of(src: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }

    let line_start: usize = src
        .split_inclusive('\n')
        .take(line - 1)
        .map(str::len)
        .sum();
    Some((line_start + column.saturating_sub(1)).min(src.len()))
}

/// Check that `name` is usable as a flag name.
/// Returns the name's character, or the reason it was rejected.
pub(crate) fn validate_argument_name(name: &str) -> Result<char, &'static str> {
    let mut chars = name.chars();
    let c = match (chars.next(), chars.next()) {
        (None, _) => return Err("name cannot be empty"),
        (Some(_), Some(_)) => return Err("name must be a single character"),
        (Some(c), None) => c,
    };

    if c == FLAG_MARKER {
        return Err("name cannot be the flag marker");
    }

    if c.is_whitespace() || c.is_control() {
        return Err("name must be a visible character");
    }

    Ok(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        assert_eq!(validate_argument_name("l"), Ok('l'));
        assert_eq!(validate_argument_name("P"), Ok('P'));
        assert_eq!(validate_argument_name("9"), Ok('9'));
        assert_eq!(validate_argument_name("é"), Ok('é'));
    }

    #[test]
    fn test_invalid_names() {
        assert_eq!(validate_argument_name(""), Err("name cannot be empty"));
        assert_eq!(
            validate_argument_name("port"),
            Err("name must be a single character")
        );
        assert_eq!(
            validate_argument_name("-"),
            Err("name cannot be the flag marker")
        );
        assert_eq!(
            validate_argument_name(" "),
            Err("name must be a visible character")
        );
        assert_eq!(
            validate_argument_name("\t"),
            Err("name must be a visible character")
        );
    }

    #[test]
    fn test_find_name_span_json() {
        let src = r#"{ "p": { "type": "integer" } }"#;
        let span = find_name_span(src, "p").unwrap();
        assert_eq!(span.offset(), 3);
        assert_eq!(span.len(), 1);
    }

    #[test]
    fn test_find_name_span_toml_table() {
        let src = "[l]\ntype = \"boolean\"\n\n[p]\ntype = \"integer\"\n";
        let span = find_name_span(src, "p").unwrap();
        assert_eq!(&src[span.offset()..span.offset() + span.len()], "p");
        assert_eq!(span.offset(), 23);
    }

    #[test]
    fn test_find_name_span_toml_inline() {
        let src = "l = { type = \"boolean\" }\n  p = { type = \"integer\" }\n";
        let span = find_name_span(src, "p").unwrap();
        assert_eq!(span.offset(), 27);
    }

    #[test]
    fn test_find_name_span_missing() {
        assert!(find_name_span("{}", "p").is_none());
        assert!(find_name_span("{}", "").is_none());
    }

    #[test]
    fn test_value_span_points_at_type() {
        let src = r#"{ "x": { "type": "list" } }"#;
        let ctx = ParseContext::new(src, "schema.json");
        let span = ctx.find_value_span("x", "list").unwrap();
        assert_eq!(&src[span.offset()..span.offset() + span.len()], "list");
    }

    #[test]
    fn test_offset_of() {
        let src = "{\n  \"p\": 1,\n}";
        assert_eq!(offset_of(src, 0, 0), None);
        assert_eq!(offset_of(src, 1, 1), Some(0));
        assert_eq!(offset_of(src, 2, 3), Some(4));
        assert_eq!(offset_of(src, 3, 1), Some(12));
        assert_eq!(offset_of(src, 9, 9), Some(src.len()));
    }
}
