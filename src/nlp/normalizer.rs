//! Deterministic text normalization.
//!
//! Fixed cleaning order: lowercase → strip email-looking tokens → strip
//! URL-looking tokens → strip digit runs → punctuation to space →
//! collapse whitespace → tokenize → stopword filter → stem → rejoin.
//!
//! `normalize` is idempotent on its own output. Stemming runs to a
//! fixpoint (a Snowball stem applied to itself can otherwise shrink
//! again), and a token whose stem lands in the stopword set is dropped
//! the same way its surface form would have been.

use std::collections::HashSet;

use regex::Regex;
use rust_stemmers::{Algorithm, Stemmer};

/// Brazilian Portuguese stopwords — articles, prepositions, pronouns and
/// the high-frequency forms of ser/estar/ter/haver.
static STOPWORDS: &[&str] = &[
    "a", "à", "ao", "aos", "aquela", "aquelas", "aquele", "aqueles", "aquilo", "as", "às", "até",
    "com", "como", "da", "das", "de", "dela", "delas", "dele", "deles", "depois", "do", "dos", "e",
    "é", "ela", "elas", "ele", "eles", "em", "entre", "era", "eram", "essa", "essas", "esse",
    "esses", "esta", "está", "estamos", "estão", "estas", "estava", "estavam", "este", "esteja",
    "estes", "esteve", "estive", "estou", "eu", "foi", "fomos", "for", "foram", "fosse", "fossem",
    "fui", "há", "haja", "havia", "hei", "isso", "isto", "já", "lhe", "lhes", "mais", "mas", "me",
    "mesmo", "meu", "meus", "minha", "minhas", "muito", "na", "não", "nas", "nem", "no", "nos",
    "nós", "nossa", "nossas", "nosso", "nossos", "num", "numa", "o", "os", "ou", "para", "pela",
    "pelas", "pelo", "pelos", "por", "qual", "quando", "que", "quem", "são", "se", "seja", "sejam",
    "sem", "ser", "será", "serão", "seu", "seus", "só", "somos", "sou", "sua", "suas", "também",
    "te", "tem", "têm", "temos", "tenha", "tenho", "ter", "teu", "teus", "teve", "tinha", "tinham",
    "tive", "tivemos", "tiveram", "tu", "tua", "tuas", "um", "uma", "umas", "uns", "você", "vocês",
    "vos",
];

/// Deterministic text cleaner and tokenizer. Pure — no side effects, no
/// mutable state after construction.
pub struct TextNormalizer {
    email_re: Regex,
    url_re: Regex,
    digits_re: Regex,
    punct_re: Regex,
    stopwords: HashSet<&'static str>,
    stemmer: Stemmer,
}

impl TextNormalizer {
    pub fn new() -> Self {
        // The patterns are fixed literals; compiling them cannot fail.
        Self {
            email_re: Regex::new(r"\S+@\S+").unwrap(),
            url_re: Regex::new(r"http\S+|www\S+").unwrap(),
            digits_re: Regex::new(r"\d+").unwrap(),
            punct_re: Regex::new(r"[^\w\s]").unwrap(),
            stopwords: STOPWORDS.iter().copied().collect(),
            stemmer: Stemmer::create(Algorithm::Portuguese),
        }
    }

    /// Normalize raw text into a cleaned, stopword-free, stemmed token
    /// string rejoined with single spaces.
    pub fn normalize(&self, text: &str) -> String {
        let text = text.to_lowercase();
        let text = self.email_re.replace_all(&text, "");
        let text = self.url_re.replace_all(&text, "");
        let text = self.digits_re.replace_all(&text, "");
        let text = self.punct_re.replace_all(&text, " ");

        let mut tokens = Vec::new();
        for word in text.split_whitespace() {
            if self.stopwords.contains(word) {
                continue;
            }
            let stem = self.stem(word);
            if stem.is_empty() || self.stopwords.contains(stem.as_str()) {
                continue;
            }
            tokens.push(stem);
        }
        tokens.join(" ")
    }

    /// Stem a single token to a fixpoint.
    fn stem(&self, word: &str) -> String {
        let mut current = word.to_string();
        // Snowball never grows a word, so this converges fast; the bound
        // guards against a pathological two-cycle.
        for _ in 0..4 {
            let next = self.stemmer.stem(&current).into_owned();
            if next == current {
                break;
            }
            current = next;
        }
        current
    }
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalizer() -> TextNormalizer {
        TextNormalizer::new()
    }

    #[test]
    fn lowercases_and_strips_punctuation() {
        let n = normalizer();
        let out = n.normalize("URGENTE!!! Reunião???");
        assert_eq!(out, out.to_lowercase());
        assert!(!out.contains('!'));
        assert!(!out.contains('?'));
    }

    #[test]
    fn strips_emails_urls_and_digits() {
        let n = normalizer();
        let out = n.normalize("contato joao@empresa.com em http://site.com às 14h30 www.outro.com");
        assert!(!out.contains('@'));
        assert!(!out.contains("http"));
        assert!(!out.contains("www"));
        assert!(!out.chars().any(|c| c.is_ascii_digit()));
    }

    #[test]
    fn removes_stopwords() {
        let n = normalizer();
        let out = n.normalize("o projeto de uma empresa");
        for token in out.split_whitespace() {
            assert!(!STOPWORDS.contains(&token), "stopword '{token}' survived");
        }
        assert!(out.contains("projet") || out.contains("empres"));
    }

    #[test]
    fn collapses_whitespace() {
        let n = normalizer();
        let out = n.normalize("reunião   \t urgente \n  projeto");
        assert!(!out.contains("  "));
        assert!(!out.starts_with(' '));
        assert!(!out.ends_with(' '));
    }

    #[test]
    fn normalize_is_idempotent() {
        let n = normalizer();
        for input in [
            "Precisamos agendar uma reunião urgente sobre o prazo do projeto!",
            "Parabéns, que seu dia seja maravilhoso.",
            "Envie para joao@empresa.com até 15/02, veja http://docs.empresa.com",
            "",
            "   ",
            "Obrigado!!! 123 456",
        ] {
            let once = n.normalize(input);
            let twice = n.normalize(&once);
            assert_eq!(once, twice, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let n = normalizer();
        assert_eq!(n.normalize(""), "");
        assert_eq!(n.normalize("123 456 !!!"), "");
    }
}
