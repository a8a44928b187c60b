//! Service Analyzer Core Library
//! 
//! Turns scraped car-service listings into structured rows: the model's
//! free-text answer is split into service tiers, contacts are pulled from the
//! raw description, and every row survives individual model failures.

pub mod batch;
pub mod clients;
pub mod config;
pub mod constants;
pub mod error;
pub mod pipeline;
pub mod services;

// Re-export main types for easy access
pub use config::AnalyzerConfig;
pub use error::{AnalyzerError, Result};

// Re-export client types
pub use clients::GeminiClient;

// Re-export service types
pub use services::{
    ContactExtractor,
    RecordAssembler,
    ResponseParser,
};

// Re-export batch types
pub use batch::{
    BatchObserver,
    BatchOrchestrator,
    BatchReport,
    ContentModel,
    LogObserver,
    RowAnalysis,
};

pub use pipeline::analyze_file;
