//! Report data structures for commands.
//!
//! This module provides data structures that separate data collection from rendering.
//! Commands build reports, then render them to an Output target.

mod check;
mod output;
mod resolve;

pub use check::{CheckReport, EntryInfo};
pub use output::{Report, TerminalOutput};
pub use resolve::ResolveReport;

#[cfg(test)]
pub(crate) use output::tests::BufferOutput;
