//! Long-tail phrase extraction.
//!
//! Implements the co-occurrence degree/frequency heuristic from RAKE
//! (Rapid Automatic Keyword Extraction). Instead of removing stopwords
//! token by token, stopwords and punctuation act as phrase delimiters:
//! every contiguous run of content words forms one candidate phrase.
//!
//! Each distinct word accumulates a degree (how many words it co-occurs
//! with across all phrases, itself included) and a frequency. A word's
//! score is degree divided by frequency, which favors words that appear
//! inside long phrases over words that mostly stand alone. A phrase scores
//! the sum of its words' scores.

use serde::Serialize;

use crate::{language::Language, rank::top_ranked, stopwords::Stopwords};

use std::collections::{HashMap, HashSet};

/// A candidate phrase with its relevance score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredPhrase {
    /// The words making up the phrase, in document order.
    pub words: Vec<String>,
    /// Non-negative relevance score.
    pub score: f32,
}

impl ScoredPhrase {
    /// Returns the phrase as a space-separated string.
    pub fn as_string(&self) -> String {
        self.words.join(" ")
    }

    /// Number of words in the phrase.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }
}

/// Extracts ranked candidate phrases from raw text.
#[derive(Debug, Clone)]
pub struct PhraseExtractor {
    /// Language whose alphabet delimits words.
    language: Language,
    /// Stopwords acting as phrase delimiters.
    stopwords: Stopwords,
}

impl PhraseExtractor {
    /// Creates an extractor with the language's default stopword set.
    pub fn new(language: Language) -> Self {
        Self::with_stopwords(language, Stopwords::for_language(language))
    }

    /// Creates an extractor with a caller-provided stopword set.
    pub fn with_stopwords(language: Language, stopwords: Stopwords) -> Self {
        Self {
            language,
            stopwords,
        }
    }

    /// Extracts the `top_n` highest scoring candidate phrases.
    ///
    /// Duplicate phrases collapse onto their first appearance; ties keep
    /// first-appearance order. Single-word phrases are included here and
    /// are expected to be filtered at the presentation boundary when only
    /// long-tail phrases are wanted.
    pub fn extract(&self, text: &str, top_n: usize) -> Vec<ScoredPhrase> {
        let phrases = self.candidate_phrases(text);
        if phrases.is_empty() {
            return Vec::new();
        }

        let mut degree: HashMap<String, f32> = HashMap::new();
        let mut frequency: HashMap<String, f32> = HashMap::new();
        for words in &phrases {
            let length = words.len() as f32;
            for word in words {
                *degree.entry(word.clone()).or_insert(0.0) += length;
                *frequency.entry(word.clone()).or_insert(0.0) += 1.0;
            }
        }

        let mut seen: HashSet<String> = HashSet::new();
        let mut scored = Vec::new();
        for words in phrases {
            if !seen.insert(words.join(" ")) {
                continue;
            }
            let score = words.iter().map(|w| degree[w] / frequency[w]).sum();
            scored.push(ScoredPhrase { words, score });
        }

        top_ranked(scored, |p| p.score, top_n)
    }

    /// Splits raw text into candidate phrases.
    ///
    /// Words are maximal alphabet runs of the lowercased text. Whitespace
    /// separates words within a phrase; any other non-letter character or a
    /// stopword ends the current phrase. No minimum word length applies.
    fn candidate_phrases(&self, text: &str) -> Vec<Vec<String>> {
        let lower = text.to_lowercase();
        let mut phrases: Vec<Vec<String>> = Vec::new();
        let mut phrase: Vec<String> = Vec::new();
        let mut word = String::new();

        // Trailing sentinel flushes the final word and phrase.
        for c in lower.chars().chain(std::iter::once('\n')) {
            if self.language.is_word_char(c) {
                word.push(c);
                continue;
            }

            if !word.is_empty() {
                let finished = std::mem::take(&mut word);
                if self.stopwords.contains(&finished) {
                    flush(&mut phrases, &mut phrase);
                } else {
                    phrase.push(finished);
                }
            }
            if !c.is_whitespace() {
                flush(&mut phrases, &mut phrase);
            }
        }
        flush(&mut phrases, &mut phrase);

        phrases
    }
}

/// Moves the current phrase into the result list if it is non-empty.
fn flush(phrases: &mut Vec<Vec<String>>, phrase: &mut Vec<String>) {
    if !phrase.is_empty() {
        phrases.push(std::mem::take(phrase));
    }
}
