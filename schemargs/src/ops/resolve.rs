//! Resolve operation - tokens to typed values.

use schemargs_core::Value;
use schemargs_resolve::{Resolver, Result};
use schemargs_schema::Schema;
use tracing::info;

use crate::reports::ResolveReport;

/// Execute the resolve operation.
pub fn resolve(schema: &Schema, tokens: &[String]) -> Result<ResolveReport> {
    let args = Resolver::new(schema).resolve(tokens)?;
    info!(
        tokens = tokens.len(),
        resolved = args.len(),
        "resolved command line"
    );
    Ok(ResolveReport { args })
}

/// Resolve `tokens` and return the value of a single argument.
pub fn value_of(schema: &Schema, tokens: &[String], name: char) -> Result<Value> {
    let report = resolve(schema, tokens)?;
    report.args.value_of(name).cloned()
}
