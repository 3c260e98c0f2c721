//! Analysis language selection.
//!
//! The language drives two things: which stopword list applies and which
//! characters count as letters during tokenization. Both must match the
//! page's language for the scores to mean anything, which is why parsing an
//! unknown language name fails instead of falling back to a default.

use std::{fmt, str};

use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;

/// Languages with a configured stopword list and alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English: ASCII letters, Stopwords ISO English list.
    #[default]
    English,
    /// German: ASCII letters plus a/o/u umlauts and eszett, Stopwords ISO
    /// German list.
    German,
}

impl Language {
    /// All supported languages, in display order.
    pub const ALL: [Self; 2] = [Self::English, Self::German];

    /// Returns true if `c` belongs to this language's alphabet.
    ///
    /// Tokenization lowercases its input first, so only lowercase letters
    /// need to be accepted here. Digits, punctuation, and letters outside
    /// the alphabet act as token separators.
    pub fn is_word_char(self, c: char) -> bool {
        match self {
            Self::English => c.is_ascii_lowercase(),
            Self::German => c.is_ascii_lowercase() || matches!(c, 'ä' | 'ö' | 'ü' | 'ß'),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::English => write!(f, "english"),
            Self::German => write!(f, "german"),
        }
    }
}

impl str::FromStr for Language {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "english" | "en" => Ok(Self::English),
            "german" | "de" => Ok(Self::German),
            _ => Err(AnalysisError::UnsupportedLanguage {
                name: s.to_string(),
            }),
        }
    }
}
