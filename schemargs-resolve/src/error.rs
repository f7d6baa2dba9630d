use std::num::ParseIntError;

use miette::Diagnostic;
use schemargs_core::ArgType;
use thiserror::Error;

/// Result type for resolver operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum Error {
    #[error("Undefined argument {token}")]
    #[diagnostic(
        code(schemargs::undefined_argument),
        help("flags are a single '-' followed by a name declared in the schema")
    )]
    UndefinedArgument { token: String },

    #[error("Argument -{name} has no value")]
    #[diagnostic(
        code(schemargs::missing_value),
        help("pass a {expected} value after -{name}")
    )]
    MissingValue { name: char, expected: ArgType },

    #[error("Argument -{name} expected an integer but got '{value}'")]
    #[diagnostic(code(schemargs::invalid_integer))]
    InvalidInteger {
        name: char,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("Missing required argument '{name}'")]
    #[diagnostic(code(schemargs::missing_required))]
    MissingRequiredArgument { name: char },

    #[error("Argument -{name} given more than once")]
    #[diagnostic(code(schemargs::duplicate_argument))]
    DuplicateArgument { name: char },

    #[error("Argument '{name}' not found")]
    #[diagnostic(code(schemargs::argument_not_found))]
    ArgumentNotFound { name: char },

    #[error("Argument '{name}' is {actual}, not {requested}")]
    #[diagnostic(code(schemargs::wrong_type))]
    WrongType {
        name: char,
        requested: ArgType,
        actual: ArgType,
    },
}

impl Error {
    /// Name of the argument the error refers to, if it has one.
    pub fn argument(&self) -> Option<char> {
        match self {
            Error::UndefinedArgument { token } => {
                let mut chars = token.chars().skip(1);
                match (chars.next(), chars.next()) {
                    (Some(name), None) => Some(name),
                    _ => None,
                }
            }
            Error::MissingValue { name, .. }
            | Error::InvalidInteger { name, .. }
            | Error::MissingRequiredArgument { name }
            | Error::DuplicateArgument { name }
            | Error::ArgumentNotFound { name }
            | Error::WrongType { name, .. } => Some(*name),
        }
    }
}
