//! Primary classifier/responder port contracts.
//!
//! The orchestrator only sees these two traits and their `Result`s — it
//! pattern-matches `Ok`/`Err` to choose the primary or fallback path and
//! never inspects failure subtypes.

use async_trait::async_trait;

use crate::error::LlmError;
use crate::pipeline::types::Category;

/// Confidence reported when the primary model answers with one of the
/// two expected labels.
pub const PRIMARY_CONFIDENCE: f32 = 0.90;

/// Confidence reported when the raw answer matches neither label and the
/// adapter defaults to Productive.
pub const AMBIGUOUS_CONFIDENCE: f32 = 0.50;

/// External generative classifier.
#[async_trait]
pub trait PrimaryClassifier: Send + Sync {
    /// Classify an email as Productive/Unproductive with a confidence.
    async fn classify(&self, subject: &str, body: &str) -> Result<(Category, f32), LlmError>;
}

/// External generative reply writer.
#[async_trait]
pub trait PrimaryResponder: Send + Sync {
    /// Draft a reply conditioned on the category, with tone-specific
    /// instructions (professional for Productive, warm for Unproductive).
    async fn generate(
        &self,
        category: Category,
        sender_name: &str,
        subject: &str,
        body: &str,
        keywords: &[String],
    ) -> Result<String, LlmError>;
}

/// Normalize the raw model answer into a category.
///
/// "improdutivo" is checked first since it contains "produtivo" as a
/// substring. Anything that matches neither label defaults to Productive
/// at low confidence — label normalization is the adapter's job, never
/// the orchestrator's.
pub fn parse_category(raw: &str) -> (Category, f32) {
    let answer = raw.trim().to_lowercase();
    if answer.contains(&Category::Unproductive.pt_label().to_lowercase()) {
        (Category::Unproductive, PRIMARY_CONFIDENCE)
    } else if answer.contains(&Category::Productive.pt_label().to_lowercase()) {
        (Category::Productive, PRIMARY_CONFIDENCE)
    } else {
        (Category::Productive, AMBIGUOUS_CONFIDENCE)
    }
}
