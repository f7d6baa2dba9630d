//! Resolve command-line tokens against a validated schema.
//!
//! ```
//! use schemargs_resolve::resolve;
//! use schemargs_schema::Schema;
//!
//! let schema: Schema = r#"{
//!     "l": { "type": "boolean" },
//!     "p": { "type": "integer", "defaultValue": 8080 }
//! }"#
//! .parse()
//! .unwrap();
//!
//! let args = resolve(&schema, ["-l"]).unwrap();
//! assert_eq!(args.bool_of('l'), Ok(true));
//! assert_eq!(args.int_of('p'), Ok(8080));
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod resolved;
mod resolver;

pub use error::{Error, Result};
pub use resolved::{Origin, ResolvedArgument, ResolvedArgumentSet};
pub use resolver::{Resolver, resolve};
