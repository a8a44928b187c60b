//! Error types for the service analyzer

use thiserror::Error;

/// Main error type for all analyzer operations
#[derive(Error, Debug)]
pub enum AnalyzerError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    
    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),
    
    #[error("Configuration error: {0}")]
    Config(String),
    
    #[error("File system error: {0}")]
    Io(#[from] std::io::Error),
    
    #[error("Spreadsheet error: {0}")]
    Csv(#[from] csv::Error),
    
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),
    
    #[error("Processing error: {0}")]
    Processing(String),
}

impl AnalyzerError {
    /// Errors that abort the whole batch instead of a single row
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            AnalyzerError::Config(_) | AnalyzerError::Io(_) | AnalyzerError::Csv(_)
        )
    }
}

/// Result type for analyzer operations
pub type Result<T> = std::result::Result<T, AnalyzerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fatal_classification() {
        assert!(AnalyzerError::Config("missing key".to_string()).is_fatal());
        assert!(AnalyzerError::Io(std::io::Error::new(std::io::ErrorKind::NotFound, "gone")).is_fatal());
        assert!(!AnalyzerError::ServiceUnavailable("503".to_string()).is_fatal());
        assert!(!AnalyzerError::Processing("no text".to_string()).is_fatal());
    }
}
