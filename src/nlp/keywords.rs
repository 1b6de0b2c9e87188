//! Frequency-ranked keyword extraction.

use std::collections::HashMap;

use super::normalizer::TextNormalizer;

/// Selects the most frequent tokens of a normalized text.
///
/// Ties resolve by first occurrence in the token stream: of two tokens
/// with equal counts, the one seen earlier ranks higher.
pub struct KeywordExtractor;

impl KeywordExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Extract up to `top_n` distinct keywords from `text`, ranked by
    /// descending frequency over its normalization.
    pub fn extract(&self, normalizer: &TextNormalizer, text: &str, top_n: usize) -> Vec<String> {
        if top_n == 0 {
            return Vec::new();
        }

        let normalized = normalizer.normalize(text);

        // Counts kept in first-seen order; the stable sort below then
        // preserves that order among equal frequencies.
        let mut counts: Vec<(String, usize)> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();
        for token in normalized.split_whitespace() {
            match index.get(token) {
                Some(&i) => counts[i].1 += 1,
                None => {
                    index.insert(token.to_string(), counts.len());
                    counts.push((token.to_string(), 1));
                }
            }
        }

        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts.into_iter().take(top_n).map(|(w, _)| w).collect()
    }
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self::new()
    }
}
