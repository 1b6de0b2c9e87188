//! Deterministic rule-based classification — the no-network fallback.
//!
//! Matching runs against the lowercased raw subject+body concatenation,
//! not the normalized text: the signal lists carry inflected forms and
//! multi-word entries ("bom dia", "email automático") that stemming would
//! destroy.

use tracing::debug;

use crate::nlp::SentimentScorer;

use super::types::{Category, ClassificationResult, Source};

/// Terms signalling work-relevant, action-requiring content.
static PRODUCTIVE_TERMS: &[&str] = &[
    "reunião",
    "projeto",
    "prazo",
    "entrega",
    "urgente",
    "aprovação",
    "orçamento",
    "contrato",
    "proposta",
    "documento",
    "relatório",
    "vaga",
    "entrevista",
    "solicitação",
    "pendência",
    "ação",
    "tarefa",
    "cliente",
    "processo",
    "suporte",
    "solicito",
    "confirmação",
    "agendar",
    "discussão",
    "imediato",
    "urgência",
];

/// Terms signalling social, courtesy or automated content.
static UNPRODUCTIVE_TERMS: &[&str] = &[
    "parabéns",
    "feliz",
    "aniversário",
    "natal",
    "ano novo",
    "obrigado",
    "bom dia",
    "nada",
    "férias",
    "feriado",
    "festa",
    "casamento",
    "abraço",
    "não responder",
    "email automático",
    "noreply",
    "no-reply",
    "teste",
];

/// Confidence floor/ceiling of the fallback path. Values above 0.85 are
/// reserved for the primary classifier (0.90) and the sender gate (0.95).
const BASE_CONFIDENCE: f32 = 0.6;
const PER_MATCH_BONUS: f32 = 0.05;
const MAX_CONFIDENCE: f32 = 0.85;
const TIE_CONFIDENCE: f32 = 0.55;

/// Compound sentiment below this breaks a tie toward Unproductive.
const TIE_BREAK_THRESHOLD: f64 = -0.2;

/// Keyword-list classifier with a sentiment tie-break.
pub struct RuleBasedClassifier {
    productive: &'static [&'static str],
    unproductive: &'static [&'static str],
}

impl RuleBasedClassifier {
    pub fn new() -> Self {
        Self {
            productive: PRODUCTIVE_TERMS,
            unproductive: UNPRODUCTIVE_TERMS,
        }
    }

    /// Classify raw subject+body text. Always yields `source = Fallback`
    /// and a confidence inside [0.55, 0.85].
    pub fn classify(&self, text: &str, sentiment: &SentimentScorer) -> ClassificationResult {
        let lower = text.to_lowercase();

        // Each list entry counts once, present or not — substring
        // containment, not tokenized matching.
        let p = self.productive.iter().filter(|t| lower.contains(**t)).count();
        let i = self
            .unproductive
            .iter()
            .filter(|t| lower.contains(**t))
            .count();

        if p != i {
            let (category, hits) = if p > i {
                (Category::Productive, p)
            } else {
                (Category::Unproductive, i)
            };
            let confidence =
                (BASE_CONFIDENCE + PER_MATCH_BONUS * hits as f32).min(MAX_CONFIDENCE);
            debug!(productive = p, unproductive = i, category = category.label(), "Fallback classified by keyword count");
            return ClassificationResult {
                category,
                confidence,
                source: Source::Fallback,
            };
        }

        // Tie — the compound sentiment of the full original text decides.
        let compound = sentiment.score(text);
        let category = if compound < TIE_BREAK_THRESHOLD {
            Category::Unproductive
        } else {
            Category::Productive
        };
        debug!(productive = p, unproductive = i, compound, category = category.label(), "Fallback classified by sentiment tie-break");
        ClassificationResult {
            category,
            confidence: TIE_CONFIDENCE,
            source: Source::Fallback,
        }
    }
}

impl Default for RuleBasedClassifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Canned reply used when the primary responder fails.
pub fn fallback_reply(category: Category, subject: &str) -> String {
    match category {
        Category::Unproductive => {
            "Obrigado pela mensagem! Agradecemos o contato.".to_string()
        }
        Category::Productive => {
            format!("Recebemos sua mensagem sobre '{subject}'. Retornaremos em breve.")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (RuleBasedClassifier, SentimentScorer) {
        (RuleBasedClassifier::new(), SentimentScorer::new())
    }

    #[test]
    fn productive_majority_wins() {
        let (c, s) = setup();
        let result = c.classify("Reunião de projeto. Prazo urgente para o contrato", &s);
        assert_eq!(result.category, Category::Productive);
        assert_eq!(result.source, Source::Fallback);
        // reunião, projeto, prazo, urgente, contrato → 5 hits
        assert_eq!(result.confidence, 0.85);
    }

    #[test]
    fn unproductive_majority_wins() {
        let (c, s) = setup();
        let result = c.classify("Feliz aniversário! Parabéns pelo seu dia", &s);
        assert_eq!(result.category, Category::Unproductive);
        // feliz, aniversário, parabéns → 3 hits → 0.6 + 0.15
        assert!((result.confidence - 0.75).abs() < 1e-6);
    }

    #[test]
    fn confidence_stays_in_fallback_band() {
        let (c, s) = setup();
        for text in [
            "reunião",
            "reunião projeto",
            "reunião projeto prazo entrega urgente aprovação orçamento contrato",
            "parabéns",
            "qualquer outra coisa sem sinal nenhum",
        ] {
            let r = c.classify(text, &s);
            assert!(
                (0.55..=0.85).contains(&r.confidence),
                "{text:?} → {}",
                r.confidence
            );
        }
    }

    #[test]
    fn confidence_grows_with_matches_until_cap() {
        let (c, s) = setup();
        let one = c.classify("reunião", &s).confidence;
        let two = c.classify("reunião projeto", &s).confidence;
        let three = c.classify("reunião projeto prazo", &s).confidence;
        assert!(one < two && two < three);
        assert!((one - 0.65).abs() < 1e-6);

        let many =
            c.classify("reunião projeto prazo entrega urgente aprovação orçamento contrato", &s);
        assert_eq!(many.confidence, 0.85);
    }

    #[test]
    fn tie_with_negative_sentiment_is_unproductive() {
        let (c, s) = setup();
        // No list hits on either side; clearly negative wording.
        let result = c.classify("Estou muito triste e decepcionado com o atraso", &s);
        assert_eq!(result.category, Category::Unproductive);
        assert_eq!(result.confidence, 0.55);
    }

    #[test]
    fn tie_with_neutral_sentiment_is_productive() {
        let (c, s) = setup();
        let result = c.classify("Segue em anexo conforme combinado", &s);
        assert_eq!(result.category, Category::Productive);
        assert_eq!(result.confidence, 0.55);
    }

    #[test]
    fn matching_is_substring_containment() {
        let (c, s) = setup();
        // "aprovação" also contains the list entry "ação": two entries hit.
        let result = c.classify("aprovação", &s);
        assert_eq!(result.category, Category::Productive);
        assert!((result.confidence - 0.70).abs() < 1e-6);
    }
}
