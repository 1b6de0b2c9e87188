//! Lexicon-based sentiment scoring.
//!
//! Produces a single compound polarity score in [-1, 1] over the raw
//! (non-normalized) text. The pipeline uses it only to break ties in the
//! rule-based fallback classifier — it is never the primary signal.

use std::collections::{HashMap, HashSet};

/// Valence entries, roughly on the usual -4..4 lexicon scale.
static LEXICON: &[(&str, f64)] = &[
    // positive
    ("abraço", 1.3),
    ("adorei", 2.4),
    ("agradecido", 1.8),
    ("agradeço", 1.6),
    ("alegria", 2.4),
    ("amor", 2.1),
    ("boa", 1.9),
    ("bom", 1.9),
    ("especial", 1.5),
    ("excelente", 2.7),
    ("fantástico", 2.7),
    ("feliz", 2.2),
    ("felicidade", 2.6),
    ("festa", 1.4),
    ("gostei", 1.8),
    ("incrível", 2.4),
    ("lindo", 2.0),
    ("maravilhosa", 2.9),
    ("maravilhoso", 2.9),
    ("obrigada", 1.5),
    ("obrigado", 1.5),
    ("ótima", 2.5),
    ("ótimo", 2.5),
    ("parabéns", 2.5),
    ("perfeito", 2.6),
    ("positivo", 1.6),
    ("querido", 1.8),
    ("satisfeito", 1.9),
    ("sucesso", 2.1),
    ("tranquilo", 1.2),
    // negative
    ("absurdo", -2.1),
    ("atrasado", -1.5),
    ("atraso", -1.4),
    ("cancelado", -1.4),
    ("cancelar", -1.2),
    ("chateado", -1.9),
    ("decepcionado", -2.2),
    ("decepção", -2.3),
    ("erro", -1.5),
    ("erros", -1.6),
    ("falha", -1.7),
    ("falhou", -1.9),
    ("frustrado", -2.1),
    ("grave", -1.6),
    ("horrível", -2.8),
    ("inaceitável", -2.4),
    ("infelizmente", -1.7),
    ("insatisfeito", -2.2),
    ("lamento", -1.8),
    ("ódio", -2.9),
    ("perda", -1.7),
    ("péssima", -2.7),
    ("péssimo", -2.7),
    ("prejuízo", -1.9),
    ("preocupado", -1.5),
    ("preocupação", -1.6),
    ("problema", -1.6),
    ("problemas", -1.7),
    ("raiva", -2.4),
    ("reclamação", -1.8),
    ("reclamar", -1.6),
    ("ruim", -2.0),
    ("terrível", -2.6),
    ("triste", -2.0),
    ("tristeza", -2.3),
];

/// Tokens that flip and dampen the valence of the following word.
static NEGATIONS: &[&str] = &["jamais", "nao", "não", "nem", "nunca", "sem"];

/// Damping factor applied when a valence word follows a negation.
const NEGATION_SCALAR: f64 = -0.74;

/// Normalization constant for the compound score.
const COMPOUND_ALPHA: f64 = 15.0;

/// Lexicon-based polarity scorer.
pub struct SentimentScorer {
    lexicon: HashMap<&'static str, f64>,
    negations: HashSet<&'static str>,
}

impl SentimentScorer {
    pub fn new() -> Self {
        Self {
            lexicon: LEXICON.iter().copied().collect(),
            negations: NEGATIONS.iter().copied().collect(),
        }
    }

    /// Compound polarity of `text`, in [-1, 1]. Zero for text with no
    /// lexicon hits.
    pub fn score(&self, text: &str) -> f64 {
        let lower = text.to_lowercase();
        let tokens: Vec<&str> = lower
            .split(|c: char| !c.is_alphanumeric())
            .filter(|t| !t.is_empty())
            .collect();

        let mut sum = 0.0;
        for (i, token) in tokens.iter().enumerate() {
            let Some(&valence) = self.lexicon.get(*token) else {
                continue;
            };
            let negated = i > 0 && self.negations.contains(tokens[i - 1]);
            sum += if negated { valence * NEGATION_SCALAR } else { valence };
        }

        if sum == 0.0 {
            0.0
        } else {
            sum / (sum * sum + COMPOUND_ALPHA).sqrt()
        }
    }
}

impl Default for SentimentScorer {
    fn default() -> Self {
        Self::new()
    }
}
