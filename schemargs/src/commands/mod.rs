mod check;
mod get;
mod resolve;

use check::CheckCommand;
use clap::{ArgAction, Parser, Subcommand};
use eyre::Result;
use get::GetCommand;
use resolve::ResolveCommand;
use tracing_subscriber::EnvFilter;

/// Extension trait for exiting on library errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for schemargs_schema::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

impl<T> UnwrapOrExit<T> for schemargs_resolve::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "schemargs")]
#[command(version)]
#[command(about = "Validate argument schemas and resolve command lines against them")]
pub(crate) struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        self.init_logging();

        match &self.command {
            Commands::Check(cmd) => cmd.run(),
            Commands::Resolve(cmd) => cmd.run(),
            Commands::Get(cmd) => cmd.run(),
        }
    }

    fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    fn init_logging(&self) {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(self.log_level()))
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a schema and list its arguments
    Check(CheckCommand),

    /// Resolve command-line tokens against a schema
    Resolve(ResolveCommand),

    /// Print the resolved value of a single argument
    Get(GetCommand),
}
