//! Stopword filtering for keyword and phrase extraction.
//!
//! Stopwords are high-frequency, low-information words (articles,
//! conjunctions) that would otherwise dominate any frequency-based ranking.
//! The per-language lists come from the `stop-words` crate (NLTK lists),
//! which carries the same German and English lists the usual NLP toolkits
//! ship.

use std::collections::HashSet;

use stop_words::LANGUAGE;

use crate::language::Language;

/// A stopword set for one language.
///
/// Uses a `HashSet` for O(1) lookup. All words are stored lowercase and
/// matched case-insensitively.
#[derive(Debug, Clone)]
pub struct Stopwords {
    /// Lowercased stopwords.
    words: HashSet<String>,
}

impl Stopwords {
    /// Builds the stopword set for a language.
    pub fn for_language(language: Language) -> Self {
        let list = match language {
            Language::English => stop_words::get(LANGUAGE::English),
            Language::German => stop_words::get(LANGUAGE::German),
        };

        let words = list.into_iter().map(|w| w.to_lowercase()).collect();
        Self { words }
    }

    /// Adds caller-supplied stopwords, e.g. site-specific boilerplate terms.
    pub fn extend<I>(&mut self, extra: I)
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for word in extra {
            self.words.insert(word.as_ref().to_lowercase());
        }
    }

    /// Checks whether a word is a stopword. Case-insensitive.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    /// Returns the number of stopwords in the set.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
