//! Core types for schemargs.
//!
//! This crate provides the closed set of argument types and typed values
//! shared by the schema validator and the argument resolver.

mod arg_type;
mod value;

pub use arg_type::{ArgType, UnsupportedType};
pub use value::Value;

/// Character that starts every flag token (`-l`, `-p`).
pub const FLAG_MARKER: char = '-';
