//! Error types for page analysis.

use thiserror::Error;

/// Errors produced while configuring or running a page analysis.
///
/// Empty or all-stopword input is not an error: the pipeline reports it as
/// empty result lists. Errors are reserved for input the pipeline refuses
/// to guess about, such as an unknown language.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// The requested language has no configured stopword set or alphabet.
    ///
    /// There is no fallback to a default language; scoring with the wrong
    /// stopword list would silently produce misleading results.
    #[error("unsupported language '{name}', expected one of: english, german")]
    UnsupportedLanguage {
        /// The language name as supplied by the caller.
        name: String,
    },

    /// A zone name does not match any known page zone.
    #[error("unknown zone '{name}', expected one of: title, h1, h2, meta_description, body")]
    UnknownZone {
        /// The zone name as supplied by the caller.
        name: String,
    },
}
