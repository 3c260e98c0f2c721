//! Main page analysis API.
//!
//! Ties the pipeline together: normalize the document text, count term
//! frequencies, apply zone boosts, rank, and independently extract
//! candidate phrases from the raw text.

use serde::{Deserialize, Serialize};

use crate::{
    language::Language,
    normalize::{DEFAULT_MIN_TOKEN_LENGTH, Normalizer},
    phrase::{PhraseExtractor, ScoredPhrase},
    rank::top_ranked,
    score::{ScoredKeyword, apply_boosts, count_frequencies},
    stopwords::Stopwords,
    zone::{BoostTable, PageZones},
};

/// Default number of keywords reported.
const DEFAULT_TOP_TERMS: usize = 15;
/// Default number of candidate phrases reported.
const DEFAULT_TOP_PHRASES: usize = 10;

/// Configuration for one page analysis.
///
/// Built once and passed explicitly; the pipeline keeps no ambient state.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisConfig {
    /// Language selecting the stopword list and alphabet.
    pub language: Language,
    /// Minimum keyword length in characters.
    pub min_token_length: usize,
    /// Zone boost multipliers.
    pub boosts: BoostTable,
    /// Maximum number of keywords in the result.
    pub top_terms: usize,
    /// Maximum number of candidate phrases in the result.
    pub top_phrases: usize,
    /// Additional stopwords on top of the language's list.
    pub extra_stopwords: Vec<String>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            language: Language::default(),
            min_token_length: DEFAULT_MIN_TOKEN_LENGTH,
            boosts: BoostTable::default(),
            top_terms: DEFAULT_TOP_TERMS,
            top_phrases: DEFAULT_TOP_PHRASES,
            extra_stopwords: Vec::new(),
        }
    }
}

/// Result of analyzing one page: the two ranked lists.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageAnalysis {
    /// Zone-boosted keywords, best first.
    pub keywords: Vec<ScoredKeyword>,
    /// Candidate phrases, best first. Includes single-word phrases;
    /// long-tail presentations filter to two words or more.
    pub phrases: Vec<ScoredPhrase>,
}

impl PageAnalysis {
    /// Returns true if the page produced no keywords and no phrases.
    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty() && self.phrases.is_empty()
    }

    /// Phrases with at least two words, for long-tail presentation.
    pub fn long_tail_phrases(&self) -> impl Iterator<Item = &ScoredPhrase> {
        self.phrases.iter().filter(|p| p.word_count() >= 2)
    }
}

/// Analyzes one page's zone texts into ranked keywords and phrases.
///
/// A page whose document text is empty or consists only of stopwords is a
/// valid, reportable state: both lists come back empty. All state is owned
/// by this call; analyses of different pages may run concurrently without
/// coordination.
pub fn analyze_page(zones: &PageZones, config: &AnalysisConfig) -> PageAnalysis {
    let mut stopwords = Stopwords::for_language(config.language);
    stopwords.extend(&config.extra_stopwords);

    let normalizer =
        Normalizer::with_stopwords(config.language, stopwords.clone(), config.min_token_length);

    let document = zones.document_text();
    let tokens = normalizer.tokens(&document);
    let base = count_frequencies(&tokens);
    let boosted = apply_boosts(&base, zones, &config.boosts, &normalizer);
    let keywords = top_ranked(boosted, |k| k.score, config.top_terms);

    let extractor = PhraseExtractor::with_stopwords(config.language, stopwords);
    let phrases = extractor.extract(&document, config.top_phrases);

    PageAnalysis { keywords, phrases }
}
