//! Error types for Email Triage.

/// Top-level error type for the service.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("Extraction error: {0}")]
    Extract(#[from] ExtractError),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Primary classifier/responder port errors.
///
/// The orchestrator never inspects the variant — any `Err` from a port
/// call routes to the deterministic fallback path. The variants exist for
/// logging and for the port adapters themselves.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("Provider {provider} request failed: {reason}")]
    RequestFailed { provider: String, reason: String },

    #[error("Invalid response from {provider}: {reason}")]
    InvalidResponse { provider: String, reason: String },
}

/// File text-extraction errors (upload endpoint).
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("Unsupported file format '{extension}'; accepted: .txt, .pdf")]
    UnsupportedFormat { extension: String },

    #[error("File too large: {size} bytes (max {max})")]
    TooLarge { size: usize, max: usize },

    #[error("File contains no extractable text")]
    Empty,

    #[error("Failed to read PDF: {0}")]
    Pdf(String),
}

/// Result type alias for the service.
pub type Result<T> = std::result::Result<T, Error>;
