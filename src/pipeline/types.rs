//! Shared types for the classification pipeline.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ── Inbound message ─────────────────────────────────────────────────

/// An inbound email, already validated by the caller (`sender` contains
/// `@`). Immutable input to the pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InboundMessage {
    /// Sender address.
    pub sender: String,
    /// Subject line.
    pub subject: String,
    /// Body content.
    pub body: String,
}

impl InboundMessage {
    pub fn new(
        sender: impl Into<String>,
        subject: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            sender: sender.into(),
            subject: subject.into(),
            body: body.into(),
        }
    }

    /// Subject and body joined the way the classifiers consume them.
    pub fn full_text(&self) -> String {
        format!("{}. {}", self.subject, self.body)
    }
}

// ── Category ────────────────────────────────────────────────────────

/// The two fixed output categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    /// Work-relevant, action-requiring content.
    Productive,
    /// Social, courtesy, or automated content.
    Unproductive,
}

impl Category {
    /// Wire label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Productive => "Productive",
            Self::Unproductive => "Unproductive",
        }
    }

    /// Portuguese label, as the primary model answers it; the port
    /// adapter matches raw answers against these.
    pub fn pt_label(&self) -> &'static str {
        match self {
            Self::Productive => "Produtivo",
            Self::Unproductive => "Improdutivo",
        }
    }
}

// ── Classification result ───────────────────────────────────────────

/// Which path produced a classification. Confidence bands double as a
/// provenance signal (0.95 shortcut, 0.90 primary, 0.55–0.85 fallback),
/// but the explicit tag is what tests and logs rely on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    /// Sender-gate short-circuit.
    Shortcut,
    /// External generative classifier.
    Primary,
    /// Deterministic rule-based classifier.
    Fallback,
}

/// A category with its confidence and provenance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub category: Category,
    /// In [0, 1].
    pub confidence: f32,
    pub source: Source,
}

// ── Pipeline result ─────────────────────────────────────────────────

/// Final per-message output: classification, suggested reply, extracted
/// keywords and a short preview of the normalized text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineResult {
    #[serde(flatten)]
    pub classification: ClassificationResult,
    /// Cleaned suggested reply; non-empty replies end in `.`, `!` or `?`.
    pub suggested_reply: String,
    /// Up to top-N keywords, most frequent first.
    pub keywords: Vec<String>,
    /// First 200 characters of the normalized text.
    pub processed_text_preview: String,
    /// When processing completed.
    pub processed_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_text_joins_subject_and_body() {
        let msg = InboundMessage::new("a@b.com", "Assunto", "Corpo");
        assert_eq!(msg.full_text(), "Assunto. Corpo");
    }

    #[test]
    fn category_labels() {
        assert_eq!(Category::Productive.label(), "Productive");
        assert_eq!(Category::Unproductive.pt_label(), "Improdutivo");
    }

    #[test]
    fn pipeline_result_serialization_is_flat() {
        let result = PipelineResult {
            classification: ClassificationResult {
                category: Category::Unproductive,
                confidence: 0.95,
                source: Source::Shortcut,
            },
            suggested_reply: "Este é um email automático; não é necessário responder.".into(),
            keywords: vec![],
            processed_text_preview: String::new(),
            processed_at: Utc::now(),
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["category"], "Unproductive");
        assert_eq!(json["source"], "shortcut");
        assert!(json["confidence"].is_f64());
        assert!(json["keywords"].as_array().unwrap().is_empty());
    }
}
