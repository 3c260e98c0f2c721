//! Page zones and boost configuration.
//!
//! A zone is a structurally distinct region of a page (title, heading
//! level, meta description, body) carrying different SEO weight. Zone texts
//! are extracted upstream by a markup parser; this crate only consumes the
//! resulting strings.

use std::{fmt, str};

use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;

/// A structurally significant region of a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Zone {
    /// The document title.
    Title,
    /// h1 headings.
    H1,
    /// h2 headings.
    H2,
    /// The meta description tag content.
    MetaDescription,
    /// Visible body text.
    Body,
}

/// Zones that carry a boost factor, in the fixed order boosts are applied.
///
/// The order matters only for reproducibility of intermediate values;
/// multiplication makes the final scores order-independent. Body is absent
/// because it is the unboosted baseline.
pub const BOOSTED_ZONES: [Zone; 4] = [Zone::Title, Zone::H1, Zone::H2, Zone::MetaDescription];

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Title => write!(f, "title"),
            Self::H1 => write!(f, "h1"),
            Self::H2 => write!(f, "h2"),
            Self::MetaDescription => write!(f, "meta_description"),
            Self::Body => write!(f, "body"),
        }
    }
}

impl str::FromStr for Zone {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "title" => Ok(Self::Title),
            "h1" => Ok(Self::H1),
            "h2" => Ok(Self::H2),
            "meta_description" | "meta-description" | "meta" => Ok(Self::MetaDescription),
            "body" => Ok(Self::Body),
            _ => Err(AnalysisError::UnknownZone {
                name: s.to_string(),
            }),
        }
    }
}

/// The zone texts extracted from one page. Immutable once built.
///
/// Heading zones hold one fragment per heading element; fragments are
/// joined with a space wherever the zone is used as a single text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageZones {
    /// Document title, if present.
    pub title: Option<String>,
    /// One fragment per h1 heading.
    pub h1: Vec<String>,
    /// One fragment per h2 heading.
    pub h2: Vec<String>,
    /// Meta description content, if present.
    pub meta_description: Option<String>,
    /// Visible body text. In markup extracted from a real page this already
    /// contains the heading texts, which is why headings are boost-only.
    pub body: Option<String>,
}

impl PageZones {
    /// Returns the text of one zone, with heading fragments joined.
    ///
    /// Returns `None` when the zone is absent or effectively empty.
    pub fn zone_text(&self, zone: Zone) -> Option<String> {
        match zone {
            Zone::Title => non_empty(self.title.as_deref()),
            Zone::H1 => join_fragments(&self.h1),
            Zone::H2 => join_fragments(&self.h2),
            Zone::MetaDescription => non_empty(self.meta_description.as_deref()),
            Zone::Body => non_empty(self.body.as_deref()),
        }
    }

    /// Returns the document text used for frequency counting and phrase
    /// extraction: title followed by body.
    ///
    /// Heading texts are part of the body of any real page and the meta
    /// description is an attribute rather than document text, so neither is
    /// concatenated here; they influence scoring only through boosts.
    pub fn document_text(&self) -> String {
        let mut parts = Vec::new();
        if let Some(title) = self.zone_text(Zone::Title) {
            parts.push(title);
        }
        if let Some(body) = self.zone_text(Zone::Body) {
            parts.push(body);
        }
        parts.join(" ")
    }

    /// Returns true if no zone carries any text.
    pub fn is_empty(&self) -> bool {
        [
            Zone::Title,
            Zone::H1,
            Zone::H2,
            Zone::MetaDescription,
            Zone::Body,
        ]
        .into_iter()
        .all(|zone| self.zone_text(zone).is_none())
    }
}

/// Joins heading fragments with a space; empty fragments are skipped.
fn join_fragments(fragments: &[String]) -> Option<String> {
    let joined = fragments
        .iter()
        .map(|f| f.trim())
        .filter(|f| !f.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    if joined.is_empty() { None } else { Some(joined) }
}

/// Maps empty or whitespace-only strings to `None`.
fn non_empty(text: Option<&str>) -> Option<String> {
    text.map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
}

/// Boost multipliers per zone.
///
/// A term's base score is multiplied by the factor of every boosted zone
/// whose cleaned tokens contain it; matches in several zones compound. All
/// factors are expected to be >= 1.0 so boosting never lowers a score. Body
/// text is the unboosted baseline with an implicit factor of 1.0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BoostTable {
    /// Multiplier for terms appearing in the title.
    pub title: f32,
    /// Multiplier for terms appearing in an h1 heading.
    pub h1: f32,
    /// Multiplier for terms appearing in an h2 heading.
    pub h2: f32,
    /// Multiplier for terms appearing in the meta description.
    pub meta_description: f32,
}

impl Default for BoostTable {
    fn default() -> Self {
        Self {
            title: 5.0,
            h1: 3.0,
            h2: 1.5,
            meta_description: 2.0,
        }
    }
}

impl BoostTable {
    /// Returns the multiplier for a zone. Body is always 1.0.
    pub fn factor(&self, zone: Zone) -> f32 {
        match zone {
            Zone::Title => self.title,
            Zone::H1 => self.h1,
            Zone::H2 => self.h2,
            Zone::MetaDescription => self.meta_description,
            Zone::Body => 1.0,
        }
    }

    /// Overrides the multiplier for a boosted zone.
    ///
    /// The body factor is fixed at 1.0; callers wanting to reject body
    /// overrides must do so before calling.
    pub fn set(&mut self, zone: Zone, factor: f32) {
        match zone {
            Zone::Title => self.title = factor,
            Zone::H1 => self.h1 = factor,
            Zone::H2 => self.h2 = factor,
            Zone::MetaDescription => self.meta_description = factor,
            Zone::Body => {}
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn zone_parse_and_display_roundtrip() {
        for zone in [
            Zone::Title,
            Zone::H1,
            Zone::H2,
            Zone::MetaDescription,
            Zone::Body,
        ] {
            assert_eq!(zone.to_string().parse::<Zone>().unwrap(), zone);
        }
        assert_eq!("meta".parse::<Zone>().unwrap(), Zone::MetaDescription);
    }

    #[test]
    fn zone_parse_rejects_unknown_names() {
        let err = "footer".parse::<Zone>().unwrap_err();
        assert_eq!(
            err,
            AnalysisError::UnknownZone {
                name: "footer".to_string()
            }
        );
    }

    #[test]
    fn heading_fragments_are_joined() {
        let zones = PageZones {
            h1: vec!["First Heading".to_string(), "Second Heading".to_string()],
            ..PageZones::default()
        };
        assert_eq!(
            zones.zone_text(Zone::H1).unwrap(),
            "First Heading Second Heading"
        );
    }

    #[test]
    fn empty_fragments_yield_no_zone_text() {
        let zones = PageZones {
            title: Some("   ".to_string()),
            h1: vec![String::new(), "  ".to_string()],
            ..PageZones::default()
        };
        assert!(zones.zone_text(Zone::Title).is_none());
        assert!(zones.zone_text(Zone::H1).is_none());
        assert!(zones.is_empty());
    }

    #[test]
    fn document_text_is_title_plus_body() {
        let zones = PageZones {
            title: Some("Burger Rezept".to_string()),
            h1: vec!["Bester Burger".to_string()],
            meta_description: Some("Ein Rezept".to_string()),
            body: Some("burger ist lecker".to_string()),
            ..PageZones::default()
        };
        assert_eq!(zones.document_text(), "Burger Rezept burger ist lecker");
    }

    #[test]
    fn default_boosts_match_zone_weights() {
        let boosts = BoostTable::default();
        assert_eq!(boosts.factor(Zone::Title), 5.0);
        assert_eq!(boosts.factor(Zone::H1), 3.0);
        assert_eq!(boosts.factor(Zone::H2), 1.5);
        assert_eq!(boosts.factor(Zone::MetaDescription), 2.0);
        assert_eq!(boosts.factor(Zone::Body), 1.0);
    }

    #[test]
    fn set_overrides_boosted_zones_only() {
        let mut boosts = BoostTable::default();
        boosts.set(Zone::Title, 7.5);
        boosts.set(Zone::Body, 9.0);
        assert_eq!(boosts.factor(Zone::Title), 7.5);
        assert_eq!(boosts.factor(Zone::Body), 1.0);
    }

    #[test]
    fn boost_table_deserializes_partially() {
        let boosts: BoostTable = serde_json::from_str(r#"{"title": 10.0}"#).unwrap();
        assert_eq!(boosts.title, 10.0);
        assert_eq!(boosts.h1, 3.0);
    }
}
