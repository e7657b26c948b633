//! Segment export: planning, EDF writing, and the interval report.

mod plan;
mod report;
mod writer;

pub use plan::{ExportEntry, plan_exports};
pub use report::write_report;
pub use writer::write_segment;
