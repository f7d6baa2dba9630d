use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use schemargs_core::Value;
use schemargs_schema::Schema;

use super::UnwrapOrExit;
use crate::ops;

#[derive(Args)]
pub struct GetCommand {
    /// Path to the schema file (.json or .toml)
    #[arg(short, long, default_value = "schema.json")]
    pub schema: PathBuf,

    /// Argument name to print
    pub name: char,

    /// Tokens to resolve, given after `--`
    #[arg(last = true, allow_hyphen_values = true)]
    pub tokens: Vec<String>,
}

impl GetCommand {
    pub fn run(&self) -> Result<()> {
        let schema = Schema::from_file(&self.schema).unwrap_or_exit();
        let value = self.value(&schema).unwrap_or_exit();

        println!("{}", value);
        Ok(())
    }

    /// Resolve the tokens and look up the requested argument.
    pub fn value(&self, schema: &Schema) -> schemargs_resolve::Result<Value> {
        ops::value_of(schema, &self.tokens, self.name)
    }
}
