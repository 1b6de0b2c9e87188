//! Text processing for the classification pipeline.
//!
//! Every resource here (stopword set, stemmer, sentiment lexicon) is
//! compiled in and built once at startup. Nothing is downloaded and
//! nothing mutates after `NlpBundle::initialize()`, so the bundle can be
//! shared freely across concurrent requests.

pub mod keywords;
pub mod normalizer;
pub mod sentiment;

pub use keywords::KeywordExtractor;
pub use normalizer::TextNormalizer;
pub use sentiment::SentimentScorer;

/// Read-only NLP resources, initialized once at process startup and
/// injected into the pipeline.
pub struct NlpBundle {
    pub normalizer: TextNormalizer,
    pub keywords: KeywordExtractor,
    pub sentiment: SentimentScorer,
}

impl NlpBundle {
    /// Build the full resource bundle. All lexicons are embedded, so this
    /// cannot fail at runtime.
    pub fn initialize() -> Self {
        Self {
            normalizer: TextNormalizer::new(),
            keywords: KeywordExtractor::new(),
            sentiment: SentimentScorer::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundle_initializes_with_working_components() {
        let nlp = NlpBundle::initialize();
        assert!(!nlp.normalizer.normalize("reunião do projeto").is_empty());
        assert!(nlp.sentiment.score("").abs() < f64::EPSILON);
    }
}
