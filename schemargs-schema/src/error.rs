use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use schemargs_core::ArgType;
use thiserror::Error;

/// Result type for schema operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(code(schemargs::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unrecognized schema format for '{path}'")]
    #[diagnostic(
        code(schemargs::unknown_format),
        help("schema files must end in .json or .toml")
    )]
    UnknownFormat { path: PathBuf },

    #[error("failed to parse JSON schema")]
    #[diagnostic(code(schemargs::parse_error))]
    ParseJson {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to parse TOML schema")]
    #[diagnostic(code(schemargs::parse_error))]
    ParseToml {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("Unsupported type '{ty}' for argument '{name}'")]
    #[diagnostic(
        code(schemargs::unsupported_type),
        help("supported types are: boolean, integer, string")
    )]
    UnsupportedType {
        #[source_code]
        src: NamedSource<String>,
        #[label("unsupported type")]
        span: Option<SourceSpan>,
        name: String,
        ty: String,
    },

    #[error("invalid argument name '{name}'")]
    #[diagnostic(
        code(schemargs::invalid_name),
        help("{reason}. Argument names are a single visible character other than '-'.")
    )]
    InvalidArgumentName {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid name")]
        span: Option<SourceSpan>,
        name: String,
        reason: String,
    },

    #[error("default value for argument '{name}' must be {expected}, found {found}")]
    #[diagnostic(
        code(schemargs::default_type_mismatch),
        help("remove the default to use the {expected} zero value")
    )]
    DefaultTypeMismatch {
        #[source_code]
        src: NamedSource<String>,
        #[label("declared here")]
        span: Option<SourceSpan>,
        name: String,
        expected: ArgType,
        found: String,
    },
}

impl Error {
    /// Name of the argument the error refers to, if any.
    pub fn argument(&self) -> Option<&str> {
        match self {
            Error::UnsupportedType { name, .. }
            | Error::InvalidArgumentName { name, .. }
            | Error::DefaultTypeMismatch { name, .. } => Some(name),
            Error::Io { .. }
            | Error::UnknownFormat { .. }
            | Error::ParseJson { .. }
            | Error::ParseToml { .. } => None,
        }
    }
}
