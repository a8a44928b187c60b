/// Analyzer configuration constants

/// Output file written next to the working directory when no path is configured
pub const DEFAULT_OUTPUT_FILE: &str = "advanced_analyzed_services.csv";

/// Model used by the original pipeline
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-pro";

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Environment variable holding the model credential
pub const API_KEY_ENV: &str = "GOOGLE_API_KEY";

/// Prefix for layered environment overrides, e.g. `ANALYZER__GEMINI__MODEL`
pub const ENV_PREFIX: &str = "ANALYZER";

/// Separator used when joining extracted contacts into one cell
pub const CONTACT_SEPARATOR: &str = ", ";
