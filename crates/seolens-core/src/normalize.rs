//! Text normalization and tokenization.
//!
//! Turns raw zone text into cleaned tokens: lowercase, letters of the
//! analysis language only, stopwords and very short words removed. Token
//! order and duplicates are preserved because frequency counting happens
//! downstream.

use std::collections::HashSet;

use crate::{language::Language, stopwords::Stopwords};

/// Default minimum token length in characters.
pub(crate) const DEFAULT_MIN_TOKEN_LENGTH: usize = 3;

/// Tokenizer with language-specific alphabet and stopword filtering.
#[derive(Debug, Clone)]
pub struct Normalizer {
    /// Language whose alphabet delimits tokens.
    language: Language,
    /// Stopwords removed from the token stream.
    stopwords: Stopwords,
    /// Minimum token length in characters; shorter tokens are dropped.
    min_token_length: usize,
}

impl Normalizer {
    /// Creates a normalizer with the language's default stopword set.
    pub fn new(language: Language, min_token_length: usize) -> Self {
        Self::with_stopwords(language, Stopwords::for_language(language), min_token_length)
    }

    /// Creates a normalizer with a caller-provided stopword set.
    pub fn with_stopwords(
        language: Language,
        stopwords: Stopwords,
        min_token_length: usize,
    ) -> Self {
        Self {
            language,
            stopwords,
            min_token_length,
        }
    }

    /// Tokenizes text into cleaned tokens in left-to-right order.
    ///
    /// Maximal runs of alphabet characters form tokens; every other
    /// character terminates the current token. Tokens that are stopwords or
    /// shorter than the minimum length are dropped. Empty input yields an
    /// empty vector.
    pub fn tokens(&self, text: &str) -> Vec<String> {
        let lower = text.to_lowercase();
        let mut tokens = Vec::new();
        let mut current = String::new();

        for c in lower.chars() {
            if self.language.is_word_char(c) {
                current.push(c);
            } else if !current.is_empty() {
                self.keep(&mut tokens, std::mem::take(&mut current));
            }
        }
        if !current.is_empty() {
            self.keep(&mut tokens, current);
        }

        tokens
    }

    /// Returns the distinct cleaned tokens of a text.
    ///
    /// Used for zone membership checks during boosting.
    pub fn token_set(&self, text: &str) -> HashSet<String> {
        self.tokens(text).into_iter().collect()
    }

    /// Pushes a candidate token if it survives the filters.
    fn keep(&self, tokens: &mut Vec<String>, token: String) {
        if token.chars().count() >= self.min_token_length && !self.stopwords.contains(&token) {
            tokens.push(token);
        }
    }
}
