//! Service modules for response analysis

pub mod contact_extractor;
pub mod prompts;
pub mod record_assembler;
pub mod response_parser;

// Re-export service types
pub use contact_extractor::ContactExtractor;
pub use prompts::build_analysis_prompt;
pub use record_assembler::RecordAssembler;
pub use response_parser::ResponseParser;
