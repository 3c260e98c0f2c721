//! Frequency scoring and zone boosting.
//!
//! The base score of a term is its occurrence count in the cleaned document
//! text. Single-document TF-IDF would only rescale those counts
//! monotonically, so plain frequency is used. Zone boosts then multiply the
//! base score for every boosted zone containing the term.

use std::collections::HashMap;

use serde::Serialize;

use crate::{
    normalize::Normalizer,
    zone::{BOOSTED_ZONES, BoostTable, PageZones},
};

/// A keyword with its computed score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredKeyword {
    /// The cleaned term (lowercase, alphabetic).
    pub term: String,
    /// Non-negative relevance score.
    pub score: f32,
}

impl ScoredKeyword {
    /// Creates a new scored keyword.
    pub fn new(term: impl Into<String>, score: f32) -> Self {
        Self {
            term: term.into(),
            score,
        }
    }
}

/// Counts occurrences of each distinct token.
///
/// Returns one entry per distinct token with its raw count as score, in
/// first-encounter order. That order is what makes downstream tie-breaking
/// stable and reproducible.
pub fn count_frequencies(tokens: &[String]) -> Vec<ScoredKeyword> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut scores: Vec<ScoredKeyword> = Vec::new();

    for token in tokens {
        match index.get(token.as_str()) {
            Some(&at) => scores[at].score += 1.0,
            None => {
                index.insert(token.as_str(), scores.len());
                scores.push(ScoredKeyword::new(token.clone(), 1.0));
            }
        }
    }

    scores
}

/// Multiplies base scores by the factor of every zone containing the term.
///
/// Each boosted zone's text is normalized independently with the same rules
/// as the document text; a term matching several zones compounds their
/// factors. Zones are visited in [`BOOSTED_ZONES`] order. The input is left
/// untouched and a new vector is returned.
pub fn apply_boosts(
    base: &[ScoredKeyword],
    zones: &PageZones,
    boosts: &BoostTable,
    normalizer: &Normalizer,
) -> Vec<ScoredKeyword> {
    let mut scored = base.to_vec();

    for zone in BOOSTED_ZONES {
        let Some(text) = zones.zone_text(zone) else {
            continue;
        };
        let members = normalizer.token_set(&text);
        if members.is_empty() {
            continue;
        }

        let factor = boosts.factor(zone);
        for entry in &mut scored {
            if members.contains(&entry.term) {
                entry.score *= factor;
            }
        }
    }

    scored
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::language::Language;

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| (*w).to_string()).collect()
    }

    fn score_of(scores: &[ScoredKeyword], term: &str) -> f32 {
        scores
            .iter()
            .find(|k| k.term == term)
            .unwrap_or_else(|| panic!("missing term: {term}"))
            .score
    }

    #[test]
    fn counts_occurrences() {
        let scores = count_frequencies(&tokens(&["burger", "rezept", "burger"]));
        assert_eq!(scores.len(), 2);
        assert_eq!(score_of(&scores, "burger"), 2.0);
        assert_eq!(score_of(&scores, "rezept"), 1.0);
    }

    #[test]
    fn keeps_first_encounter_order() {
        let scores = count_frequencies(&tokens(&["beta", "alpha", "beta", "gamma"]));
        let terms: Vec<&str> = scores.iter().map(|k| k.term.as_str()).collect();
        assert_eq!(terms, vec!["beta", "alpha", "gamma"]);
    }

    #[test]
    fn empty_tokens_yield_empty_scores() {
        assert!(count_frequencies(&[]).is_empty());
    }

    #[test]
    fn deterministic_for_identical_input() {
        let input = tokens(&["one", "two", "one", "three", "two", "one"]);
        assert_eq!(count_frequencies(&input), count_frequencies(&input));
    }

    #[test]
    fn boosts_compound_across_zones() {
        let zones = PageZones {
            title: Some("Burger Rezept".to_string()),
            h1: vec!["Bester Burger".to_string()],
            body: Some("burger rezept ist lecker und einfach burger".to_string()),
            ..PageZones::default()
        };
        let normalizer = Normalizer::new(Language::German, 3);
        let base = count_frequencies(&normalizer.tokens(&zones.document_text()));

        // "burger": once in the title, twice in the body.
        assert_eq!(score_of(&base, "burger"), 3.0);

        let boosted = apply_boosts(&base, &zones, &BoostTable::default(), &normalizer);

        // Title x5.0 and h1 x3.0 compound: 3 * 5.0 * 3.0.
        assert_eq!(score_of(&boosted, "burger"), 45.0);
        // "rezept" appears only in the title zone: 2 * 5.0.
        assert_eq!(score_of(&boosted, "rezept"), 10.0);
    }

    #[test]
    fn body_only_terms_keep_base_score() {
        let zones = PageZones {
            title: Some("Unrelated Title".to_string()),
            body: Some("keyword analysis keyword".to_string()),
            ..PageZones::default()
        };
        let normalizer = Normalizer::new(Language::English, 3);
        let base = count_frequencies(&normalizer.tokens(&zones.document_text()));
        let boosted = apply_boosts(&base, &zones, &BoostTable::default(), &normalizer);

        assert_eq!(score_of(&base, "keyword"), score_of(&boosted, "keyword"));
        assert_eq!(score_of(&boosted, "analysis"), 1.0);
    }

    #[test]
    fn boosting_is_monotonic() {
        let zones = PageZones {
            title: Some("seo ranking guide".to_string()),
            h2: vec!["ranking factors".to_string()],
            meta_description: Some("a guide to seo".to_string()),
            body: Some("seo ranking factors guide checklist".to_string()),
            ..PageZones::default()
        };
        let normalizer = Normalizer::new(Language::English, 3);
        let base = count_frequencies(&normalizer.tokens(&zones.document_text()));
        let boosted = apply_boosts(&base, &zones, &BoostTable::default(), &normalizer);

        for (before, after) in base.iter().zip(&boosted) {
            assert_eq!(before.term, after.term);
            assert!(after.score >= before.score, "boost lowered {}", before.term);
        }
        // "checklist" appears in no boosted zone, so equality holds there.
        assert_eq!(score_of(&boosted, "checklist"), score_of(&base, "checklist"));
    }

    #[test]
    fn apply_boosts_does_not_mutate_input() {
        let zones = PageZones {
            title: Some("alpha".to_string()),
            body: Some("alpha beta".to_string()),
            ..PageZones::default()
        };
        let normalizer = Normalizer::new(Language::English, 3);
        let base = count_frequencies(&normalizer.tokens(&zones.document_text()));
        let before = base.clone();
        let _boosted = apply_boosts(&base, &zones, &BoostTable::default(), &normalizer);
        assert_eq!(base, before);
    }

    #[test]
    fn zone_match_uses_cleaned_tokens_not_substrings() {
        // "burg" is a substring of the title's "burger" but not a token of
        // it, so it must not receive the title boost.
        let zones = PageZones {
            title: Some("Burger".to_string()),
            body: Some("burg burger".to_string()),
            ..PageZones::default()
        };
        let normalizer = Normalizer::new(Language::German, 3);
        let base = count_frequencies(&normalizer.tokens(&zones.document_text()));
        let boosted = apply_boosts(&base, &zones, &BoostTable::default(), &normalizer);

        assert_eq!(score_of(&boosted, "burg"), 1.0);
        assert_eq!(score_of(&boosted, "burger"), 10.0);
    }
}
