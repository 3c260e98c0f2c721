//! Keyword scoring pipeline for single-page SEO analysis.
//!
//! The pipeline takes the textual zones extracted from one web page (title,
//! h1 and h2 headings, meta description, body) and produces two ranked
//! lists:
//!
//! 1. **Keywords**: single terms scored by frequency in the document text,
//!    multiplied by a boost factor for every structural zone they appear in
//!    (a term in both the title and an h1 heading compounds both boosts).
//! 2. **Phrases**: long-tail candidate phrases found by splitting the raw
//!    text at stopwords and punctuation, scored with a co-occurrence
//!    degree/frequency heuristic.
//!
//! Fetching and markup parsing are deliberately out of scope; callers hand
//! in plain strings per zone. Every stage is a pure function over its
//! inputs, so concurrent analyses need no coordination.
//!
//! ```
//! use seolens_core::{AnalysisConfig, Language, PageZones, analyze_page};
//!
//! let zones = PageZones {
//!     title: Some("Burger Rezept".to_string()),
//!     h1: vec!["Bester Burger".to_string()],
//!     body: Some("burger rezept ist lecker und einfach burger".to_string()),
//!     ..PageZones::default()
//! };
//! let config = AnalysisConfig {
//!     language: Language::German,
//!     ..AnalysisConfig::default()
//! };
//!
//! let analysis = analyze_page(&zones, &config);
//! assert_eq!(analysis.keywords[0].term, "burger");
//! ```

#![warn(missing_docs)]

mod analyze;
mod error;
mod language;
mod normalize;
mod phrase;
mod rank;
mod score;
mod stopwords;
mod zone;

pub use analyze::{AnalysisConfig, PageAnalysis, analyze_page};
pub use error::AnalysisError;
pub use language::Language;
pub use normalize::Normalizer;
pub use phrase::{PhraseExtractor, ScoredPhrase};
pub use rank::top_ranked;
pub use score::{ScoredKeyword, apply_boosts, count_frequencies};
pub use stopwords::Stopwords;
pub use zone::{BOOSTED_ZONES, BoostTable, PageZones, Zone};
