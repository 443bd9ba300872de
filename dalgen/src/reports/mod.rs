//! Report data structures for commands.
//!
//! This module provides data structures that separate data collection from rendering.
//! Commands build reports, then render them to an Output target.

mod check;
mod generate;
mod init;
mod output;
mod tables;

pub use check::CheckReport;
pub use generate::{GenerationReport, GenerationResult, PreviewResult, WrittenResult};
pub use init::{InitFile, InitReport};
pub use output::{Report, TerminalOutput};
pub use tables::{ColumnSummary, TableSummary, TablesReport};
