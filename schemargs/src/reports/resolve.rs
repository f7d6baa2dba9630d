//! Resolve command report data structures.

use schemargs_core::Value;
use schemargs_resolve::ResolvedArgumentSet;

use super::output::{Output, Report};

/// Report data from resolving a command line.
#[derive(Debug)]
pub struct ResolveReport {
    pub args: ResolvedArgumentSet,
}

impl Report for ResolveReport {
    fn render(&self, out: &mut dyn Output) {
        if self.args.is_empty() {
            out.warning("no arguments resolved");
            return;
        }

        for arg in &self.args {
            out.preformatted(&format!(
                "-{} = {} ({})",
                arg.name,
                render_value(&arg.value),
                arg.origin
            ));
        }
    }
}

fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => format!("{:?}", s),
        Value::Boolean(_) | Value::Integer(_) => value.to_string(),
    }
}
