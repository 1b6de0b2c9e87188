//! Automated-sender gate.
//!
//! Runs before everything else. When it fires, the pipeline skips
//! normalization, keyword extraction and both classification paths — a
//! hard short-circuit, not a hint.

use tracing::debug;

use super::types::{Category, ClassificationResult, Source};

/// Substrings that mark an automated sender address.
static AUTOMATED_SENDER_MARKERS: &[&str] = &[
    "noreply",
    "no-reply",
    "donotreply",
    "do-not-reply",
    "automat",
    "auto-mail",
];

/// Canned reply for gated messages.
pub const AUTOMATED_REPLY: &str = "Este é um email automático; não é necessário responder.";

/// Short-circuit rule for automated/no-reply senders.
pub struct SenderGate {
    markers: &'static [&'static str],
}

impl SenderGate {
    pub fn new() -> Self {
        Self {
            markers: AUTOMATED_SENDER_MARKERS,
        }
    }

    /// Returns the fixed shortcut classification when the sender address
    /// matches an automated-sender marker (case-insensitive substring).
    pub fn check(&self, sender: &str) -> Option<ClassificationResult> {
        let sender_lower = sender.to_lowercase();
        let marker = self.markers.iter().find(|m| sender_lower.contains(*m))?;
        debug!(sender = %sender, marker = %marker, "Automated sender gated");
        Some(ClassificationResult {
            category: Category::Unproductive,
            confidence: 0.95,
            source: Source::Shortcut,
        })
    }
}

impl Default for SenderGate {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gates_noreply_variants() {
        let gate = SenderGate::new();
        for sender in [
            "noreply@service.com",
            "no-reply@service.com",
            "donotreply@bank.com",
            "do-not-reply@shop.com",
            "automated@system.io",
            "auto-mailer@corp.com",
            "billing@noreply-service.com",
        ] {
            let result = gate.check(sender).expect(sender);
            assert_eq!(result.category, Category::Unproductive);
            assert_eq!(result.confidence, 0.95);
            assert_eq!(result.source, Source::Shortcut);
        }
    }

    #[test]
    fn gate_is_case_insensitive() {
        let gate = SenderGate::new();
        assert!(gate.check("NoReply@Service.COM").is_some());
        assert!(gate.check("DONOTREPLY@bank.com").is_some());
    }

    #[test]
    fn passes_human_senders() {
        let gate = SenderGate::new();
        assert!(gate.check("joao.silva@empresa.com").is_none());
        assert!(gate.check("maria@empresa.com").is_none());
    }
}
