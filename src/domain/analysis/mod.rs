//! Analysis module - report entity and context assembly for generation.

mod context;
mod report;

pub use context::{analyst_system_prompt, build_context_document};
pub use report::AnalysisReport;
