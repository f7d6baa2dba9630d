use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use schemargs_schema::Schema;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to the schema file (.json or .toml)
    #[arg(short, long, default_value = "schema.json")]
    pub schema: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let schema = Schema::from_file(&self.schema).unwrap_or_exit();

        let report = ops::check(&schema, &self.schema);
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
