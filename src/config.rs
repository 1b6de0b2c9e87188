//! Configuration types.
//!
//! Everything is read from the environment once at startup. A missing API
//! key is a fatal startup error — there is no lazy per-request fallback to
//! an unconfigured provider.

use secrecy::SecretString;

use crate::error::ConfigError;
use crate::llm::LlmBackend;

/// Service configuration, assembled from environment variables.
#[derive(Debug, Clone)]
pub struct TriageConfig {
    /// Which LLM backend serves the primary ports.
    pub backend: LlmBackend,
    /// API key for the selected backend.
    pub api_key: SecretString,
    /// Model name passed to the backend.
    pub model: String,
    /// Temperature for reply generation.
    pub temperature: f64,
    /// Temperature for classification (kept low — two-way categorical answer).
    pub classification_temperature: f64,
    /// Token cap for reply generation.
    pub max_output_tokens: u64,
    /// How many keywords to extract per message.
    pub top_keywords: usize,
    /// HTTP bind address.
    pub bind_addr: String,
}

impl TriageConfig {
    /// Read configuration from the environment.
    ///
    /// `EMAIL_TRIAGE_BACKEND` selects `anthropic` (default) or `openai`;
    /// the matching `ANTHROPIC_API_KEY` / `OPENAI_API_KEY` must be set.
    pub fn from_env() -> Result<Self, ConfigError> {
        let backend = match std::env::var("EMAIL_TRIAGE_BACKEND")
            .unwrap_or_else(|_| "anthropic".to_string())
            .to_lowercase()
            .as_str()
        {
            "anthropic" => LlmBackend::Anthropic,
            "openai" => LlmBackend::OpenAi,
            other => {
                return Err(ConfigError::InvalidValue {
                    key: "EMAIL_TRIAGE_BACKEND".to_string(),
                    message: format!("unknown backend '{other}' (expected anthropic or openai)"),
                });
            }
        };

        let key_var = match backend {
            LlmBackend::Anthropic => "ANTHROPIC_API_KEY",
            LlmBackend::OpenAi => "OPENAI_API_KEY",
        };
        let api_key = std::env::var(key_var)
            .map_err(|_| ConfigError::MissingEnvVar(key_var.to_string()))?;

        let model = std::env::var("EMAIL_TRIAGE_MODEL").unwrap_or_else(|_| {
            match backend {
                LlmBackend::Anthropic => "claude-sonnet-4-20250514",
                LlmBackend::OpenAi => "gpt-4o-mini",
            }
            .to_string()
        });

        Ok(Self {
            backend,
            api_key: SecretString::from(api_key),
            model,
            temperature: env_parsed("EMAIL_TRIAGE_TEMPERATURE", 0.7)?,
            classification_temperature: env_parsed("EMAIL_TRIAGE_CLASSIFY_TEMPERATURE", 0.1)?,
            max_output_tokens: env_parsed("EMAIL_TRIAGE_MAX_OUTPUT_TOKENS", 200)?,
            top_keywords: env_parsed("EMAIL_TRIAGE_TOP_KEYWORDS", 5)?,
            bind_addr: std::env::var("EMAIL_TRIAGE_BIND")
                .unwrap_or_else(|_| "0.0.0.0:8000".to_string()),
        })
    }
}

fn env_parsed<T: std::str::FromStr>(key: &str, default: T) -> Result<T, ConfigError> {
    match std::env::var(key) {
        Ok(raw) => raw.parse().map_err(|_| ConfigError::InvalidValue {
            key: key.to_string(),
            message: format!("could not parse '{raw}'"),
        }),
        Err(_) => Ok(default),
    }
}
