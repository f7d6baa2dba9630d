//! Schema parsing and validation for schemargs.
//!
//! A schema maps single-character argument names to an [`ArgumentSpec`]
//! describing the argument's type, default value and whether it is required.
//! Schemas can be validated from a structured [`SchemaDescription`], from JSON
//! or TOML text, or from a file.
//!
//! ```
//! use schemargs_schema::Schema;
//!
//! let schema: Schema = r#"{ "p": { "type": "integer", "defaultValue": 8080 } }"#
//!     .parse()
//!     .unwrap();
//! assert!(schema.contains('p'));
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod description;
mod error;
mod parse;
mod schema;
mod validate;

pub use description::{DefaultValue, EntryDescription, SchemaDescription};
pub use error::{Error, Result};
pub use parse::validate;
pub use schema::{ArgumentSpec, Schema};
pub use schemargs_core::{ArgType, Value};
pub use validate::ParseContext;
