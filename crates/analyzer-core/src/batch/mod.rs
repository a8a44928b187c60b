//! Batch processing: orchestration and its collaborator seams

pub mod observer;
pub mod orchestrator;
pub mod traits;

pub use observer::LogObserver;
pub use orchestrator::{BatchOrchestrator, BatchReport, RowAnalysis};
pub use traits::{BatchObserver, ContentModel};
