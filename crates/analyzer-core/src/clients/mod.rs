//! Client modules for external collaborators

pub mod gemini;
pub mod spreadsheet;

// Re-export client types
pub use gemini::GeminiClient;
