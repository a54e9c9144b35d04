//! Report model and output formatting

pub mod formatter;
pub mod report;

pub use formatter::{ReportGenerator, OutputFormatter};
pub use report::{Report, ReportBody, ReportMetadata};
