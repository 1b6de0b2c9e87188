//! LLM integration for the primary classifier/responder ports.
//!
//! Supports:
//! - **Anthropic**: direct API access via rig-core
//! - **OpenAI**: direct API access via rig-core
//!
//! Uses the rig-core crate for HTTP transport and `RigPort` to bridge
//! rig's `CompletionModel` to the `PrimaryClassifier`/`PrimaryResponder`
//! port traits.

pub mod adapter;
pub mod ports;
pub mod prompts;

pub use adapter::RigPort;
pub use ports::{PrimaryClassifier, PrimaryResponder};

use std::sync::Arc;

use rig::client::CompletionClient;
use secrecy::ExposeSecret;

use crate::config::TriageConfig;
use crate::error::LlmError;

/// Supported LLM backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LlmBackend {
    Anthropic,
    OpenAi,
}

/// Create the primary classifier and responder ports from configuration.
///
/// Both ports share one adapter: same model, different per-call
/// instructions and generation parameters.
pub fn create_ports(
    config: &TriageConfig,
) -> Result<(Arc<dyn PrimaryClassifier>, Arc<dyn PrimaryResponder>), LlmError> {
    match config.backend {
        LlmBackend::Anthropic => create_anthropic_ports(config),
        LlmBackend::OpenAi => create_openai_ports(config),
    }
}

fn create_anthropic_ports(
    config: &TriageConfig,
) -> Result<(Arc<dyn PrimaryClassifier>, Arc<dyn PrimaryResponder>), LlmError> {
    use rig::providers::anthropic;

    let client: rig::client::Client<anthropic::client::AnthropicExt> =
        anthropic::Client::new(config.api_key.expose_secret()).map_err(|e| {
            LlmError::RequestFailed {
                provider: "anthropic".to_string(),
                reason: format!("Failed to create Anthropic client: {}", e),
            }
        })?;

    let model = client.completion_model(&config.model);
    tracing::info!("Primary ports using Anthropic (model: {})", config.model);
    let port = Arc::new(RigPort::new(
        model,
        &config.model,
        config.temperature,
        config.classification_temperature,
        config.max_output_tokens,
    ));
    Ok((port.clone(), port))
}

fn create_openai_ports(
    config: &TriageConfig,
) -> Result<(Arc<dyn PrimaryClassifier>, Arc<dyn PrimaryResponder>), LlmError> {
    use rig::providers::openai;

    let client: rig::client::Client<openai::client::OpenAIResponsesExt> =
        openai::Client::new(config.api_key.expose_secret()).map_err(|e| {
            LlmError::RequestFailed {
                provider: "openai".to_string(),
                reason: format!("Failed to create OpenAI client: {}", e),
            }
        })?;

    let model = client.completion_model(&config.model);
    tracing::info!("Primary ports using OpenAI (model: {})", config.model);
    let port = Arc::new(RigPort::new(
        model,
        &config.model,
        config.temperature,
        config.classification_temperature,
        config.max_output_tokens,
    ));
    Ok((port.clone(), port))
}
