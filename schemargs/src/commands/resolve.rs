use std::path::PathBuf;

use clap::{Args, ValueEnum};
use eyre::{Context, Result};
use schemargs_schema::Schema;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

/// How resolved arguments are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// One argument per line with its origin
    #[default]
    Text,
    /// A JSON object mapping names to values
    Json,
}

#[derive(Args)]
pub struct ResolveCommand {
    /// Path to the schema file (.json or .toml)
    #[arg(short, long, default_value = "schema.json")]
    pub schema: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Tokens to resolve, given after `--`
    #[arg(last = true, allow_hyphen_values = true)]
    pub tokens: Vec<String>,
}

impl ResolveCommand {
    pub fn run(&self) -> Result<()> {
        let schema = Schema::from_file(&self.schema).unwrap_or_exit();
        let report = ops::resolve(&schema, &self.tokens).unwrap_or_exit();

        match self.format {
            Format::Text => report.render(&mut TerminalOutput::new()),
            Format::Json => {
                let json = serde_json::to_string_pretty(&report.args)
                    .wrap_err("Failed to serialize resolved arguments")?;
                println!("{}", json);
            }
        }

        Ok(())
    }
}
