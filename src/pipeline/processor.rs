//! Pipeline orchestrator.
//!
//! Composes the gate, the NLP bundle, the primary LLM ports and the
//! rule-based fallback. `process` is infallible by design: only the two
//! primary-port calls can fail, and each failure routes to a
//! deterministic local path.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::llm::{PrimaryClassifier, PrimaryResponder};
use crate::nlp::NlpBundle;

use super::fallback::{RuleBasedClassifier, fallback_reply};
use super::gate::{AUTOMATED_REPLY, SenderGate};
use super::types::{ClassificationResult, InboundMessage, PipelineResult, Source};

/// Maximum length of the normalized-text preview, in characters.
const PREVIEW_CHARS: usize = 200;

/// Signature markers; a reply is truncated strictly before the earliest
/// one. Matching is case-sensitive — these open a closing line, not prose.
static SIGNATURE_MARKERS: &[&str] = &[
    "Atenciosamente",
    "Abraços",
    "Cordialmente",
    "Sincerely",
    "Regards",
    "Cordially",
];

/// The classification-and-reply pipeline.
///
/// Holds only read-only resources and port handles; safe to share across
/// concurrent requests.
pub struct ClassificationPipeline {
    nlp: NlpBundle,
    gate: SenderGate,
    fallback: RuleBasedClassifier,
    classifier: Arc<dyn PrimaryClassifier>,
    responder: Arc<dyn PrimaryResponder>,
    top_keywords: usize,
}

impl ClassificationPipeline {
    pub fn new(
        nlp: NlpBundle,
        classifier: Arc<dyn PrimaryClassifier>,
        responder: Arc<dyn PrimaryResponder>,
        top_keywords: usize,
    ) -> Self {
        Self {
            nlp,
            gate: SenderGate::new(),
            fallback: RuleBasedClassifier::new(),
            classifier,
            responder,
            top_keywords,
        }
    }

    /// Classify one message and draft a suggested reply.
    ///
    /// Always returns a complete result; primary-service failures are
    /// absorbed by the fallback paths and recorded in `source`.
    pub async fn process(&self, message: &InboundMessage) -> PipelineResult {
        info!(sender = %message.sender, subject = %message.subject, "Processing inbound email");

        // Step 1: automated-sender gate — hard short-circuit.
        if let Some(classification) = self.gate.check(&message.sender) {
            info!(sender = %message.sender, "Gate fired — skipping classification and generation");
            return PipelineResult {
                classification,
                suggested_reply: AUTOMATED_REPLY.to_string(),
                keywords: Vec::new(),
                processed_text_preview: String::new(),
                processed_at: Utc::now(),
            };
        }

        // Step 2: normalize and extract keywords from subject+body.
        let full_text = message.full_text();
        let normalized = self.nlp.normalizer.normalize(&full_text);
        let keywords =
            self.nlp
                .keywords
                .extract(&self.nlp.normalizer, &full_text, self.top_keywords);
        debug!(
            preview_len = normalized.chars().count().min(PREVIEW_CHARS),
            keywords = ?keywords,
            "Text normalized"
        );

        // Step 3: primary classification, rule-based on failure.
        let classification = match self
            .classifier
            .classify(&message.subject, &message.body)
            .await
        {
            Ok((category, confidence)) => {
                debug!(category = category.label(), confidence, "Primary classifier answered");
                ClassificationResult {
                    category,
                    confidence,
                    source: Source::Primary,
                }
            }
            Err(e) => {
                warn!(error = %e, "Primary classifier failed — using rule-based fallback");
                self.fallback.classify(&full_text, &self.nlp.sentiment)
            }
        };

        // Step 4: primary reply generation, canned template on failure.
        let sender_name = sender_display_name(&message.sender);
        let raw_reply = match self
            .responder
            .generate(
                classification.category,
                &sender_name,
                &message.subject,
                &message.body,
                &keywords,
            )
            .await
        {
            Ok(text) => text,
            Err(e) => {
                warn!(error = %e, "Primary responder failed — using canned reply");
                fallback_reply(classification.category, &message.subject)
            }
        };

        // Step 5: cleanup and assembly.
        let suggested_reply = clean_reply(&raw_reply);
        debug!(reply_len = suggested_reply.chars().count(), "Response cleaned");

        PipelineResult {
            classification,
            suggested_reply,
            keywords,
            processed_text_preview: normalized.chars().take(PREVIEW_CHARS).collect(),
            processed_at: Utc::now(),
        }
    }
}

/// Display name derived from the sender address: local part, dots to
/// spaces, title-cased. Falls back to "Colega" when nothing usable
/// remains.
pub fn sender_display_name(sender: &str) -> String {
    let local = sender.split('@').next().unwrap_or("");
    let name = local
        .replace('.', " ")
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ");

    if name.is_empty() {
        "Colega".to_string()
    } else {
        name
    }
}

/// Truncate at the earliest signature marker, trim, and close with
/// terminal punctuation. Empty input stays empty.
pub fn clean_reply(reply: &str) -> String {
    let cut = SIGNATURE_MARKERS
        .iter()
        .filter_map(|marker| reply.find(marker))
        .min()
        .unwrap_or(reply.len());

    let cleaned = reply[..cut].trim();
    if cleaned.is_empty() {
        return String::new();
    }
    if cleaned.ends_with(['.', '!', '?']) {
        cleaned.to_string()
    } else {
        format!("{cleaned}.")
    }
}
