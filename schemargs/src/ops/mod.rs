//! Core operations.
//!
//! This module contains the work behind each schemargs command,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod resolve;

pub use check::check;
pub use resolve::{resolve, value_of};
