//! rig-core adapter implementing both primary ports.
//!
//! One adapter instance serves classification and reply generation; the
//! two calls differ in system instruction, temperature and token cap.
//! Classification runs tight (temperature ~0.1, 10 tokens) because the
//! answer is a single categorical label.

use async_trait::async_trait;

use rig::agent::AgentBuilder;
use rig::completion::{CompletionModel, Prompt};

use crate::error::LlmError;
use crate::pipeline::types::Category;

use super::ports::{PrimaryClassifier, PrimaryResponder, parse_category};
use super::prompts;

/// Token cap for the classification call — one label, nothing more.
const CLASSIFY_MAX_TOKENS: u64 = 10;

/// Port adapter over a rig completion model.
pub struct RigPort<M: CompletionModel> {
    model: M,
    model_name: String,
    temperature: f64,
    classification_temperature: f64,
    max_output_tokens: u64,
}

impl<M: CompletionModel + Clone> RigPort<M> {
    pub fn new(
        model: M,
        model_name: &str,
        temperature: f64,
        classification_temperature: f64,
        max_output_tokens: u64,
    ) -> Self {
        Self {
            model,
            model_name: model_name.to_string(),
            temperature,
            classification_temperature,
            max_output_tokens,
        }
    }

    fn request_failed(&self, err: impl std::fmt::Display) -> LlmError {
        LlmError::RequestFailed {
            provider: self.model_name.clone(),
            reason: err.to_string(),
        }
    }
}

#[async_trait]
impl<M: CompletionModel + Clone> PrimaryClassifier for RigPort<M> {
    async fn classify(&self, subject: &str, body: &str) -> Result<(Category, f32), LlmError> {
        let agent = AgentBuilder::new(self.model.clone())
            .preamble(prompts::CLASSIFICATION_INSTRUCTION)
            .temperature(self.classification_temperature)
            .max_tokens(CLASSIFY_MAX_TOKENS)
            .build();

        let raw = agent
            .prompt(prompts::classification_prompt(subject, body))
            .await
            .map_err(|e| self.request_failed(e))?;

        tracing::debug!(raw = %raw, "Primary classifier raw answer");
        Ok(parse_category(&raw))
    }
}

#[async_trait]
impl<M: CompletionModel + Clone> PrimaryResponder for RigPort<M> {
    async fn generate(
        &self,
        category: Category,
        sender_name: &str,
        subject: &str,
        body: &str,
        keywords: &[String],
    ) -> Result<String, LlmError> {
        let agent = AgentBuilder::new(self.model.clone())
            .preamble(prompts::response_instruction(category))
            .temperature(self.temperature)
            .max_tokens(self.max_output_tokens)
            .build();

        let reply = agent
            .prompt(prompts::response_prompt(
                category,
                sender_name,
                subject,
                body,
                keywords,
            ))
            .await
            .map_err(|e| self.request_failed(e))?;

        Ok(reply.trim().to_string())
    }
}
