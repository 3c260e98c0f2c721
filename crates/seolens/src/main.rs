//! Command-line interface for the `seolens` SEO keyword analyzer.
//!
//! Reads a JSON file of already-extracted page zone texts and prints the
//! two ranked lists the core produces: keywords and long-tail phrases.
//! Fetching and markup parsing happen upstream; this binary never touches
//! the network.

use std::{
    fs,
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::{Parser, Subcommand};
use comfy_table::Table;
use seolens_core::{
    AnalysisConfig, Language, PageAnalysis, PageZones, Zone, analyze_page,
};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "seolens")]
#[command(about = "SEO keyword and phrase ranking for extracted page text")]
/// Top-level CLI options.
struct Cli {
    #[command(subcommand)]
    /// Subcommand to execute.
    command: Commands,
}

#[derive(Subcommand)]
/// Supported `seolens` subcommands.
enum Commands {
    /// Rank keywords and long-tail phrases from a zone text file
    Analyze {
        /// JSON file with zone texts (title, h1, h2, meta_description, body)
        file: PathBuf,

        /// Analysis language
        #[arg(short, long, default_value = "english")]
        language: String,

        /// Minimum keyword length in characters
        #[arg(long, default_value = "3")]
        min_length: usize,

        /// Keywords to report
        #[arg(short = 'n', long, default_value = "15")]
        top_terms: usize,

        /// Phrases to report
        #[arg(long, default_value = "10")]
        top_phrases: usize,

        /// Override a zone boost factor (repeatable), e.g. --boost title=6.0
        #[arg(long, value_name = "ZONE=FACTOR")]
        boost: Vec<String>,

        /// Extra stopwords to filter (repeatable)
        #[arg(long, value_name = "WORD")]
        stopword: Vec<String>,

        /// Output JSON instead of tables
        #[arg(long)]
        json: bool,
    },

    /// List supported analysis languages
    Languages,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            file,
            language,
            min_length,
            top_terms,
            top_phrases,
            boost,
            stopword,
            json,
        } => cmd_analyze(&AnalyzeArgs {
            file,
            language,
            min_length,
            top_terms,
            top_phrases,
            boost,
            stopword,
            json,
        }),
        Commands::Languages => cmd_languages(),
    }
}

/// Collected options for the `analyze` subcommand.
struct AnalyzeArgs {
    /// Zone text file to analyze.
    file: PathBuf,
    /// Analysis language name.
    language: String,
    /// Minimum keyword length in characters.
    min_length: usize,
    /// Keywords to report.
    top_terms: usize,
    /// Phrases to report.
    top_phrases: usize,
    /// Raw `zone=factor` boost overrides.
    boost: Vec<String>,
    /// Extra stopwords.
    stopword: Vec<String>,
    /// Emit JSON instead of tables.
    json: bool,
}

/// Zone texts as they appear in the input file.
///
/// Unknown keys are rejected: a malformed zone file fails fast instead of
/// being silently coerced into something analyzable.
#[derive(Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
struct ZoneFile {
    /// Document title.
    title: Option<String>,
    /// One h1 fragment or a list of them.
    h1: Option<OneOrMany>,
    /// One h2 fragment or a list of them.
    h2: Option<OneOrMany>,
    /// Meta description content.
    meta_description: Option<String>,
    /// Visible body text.
    body: Option<String>,
}

/// A single string or a list of strings.
#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    /// A single fragment.
    One(String),
    /// Multiple fragments, one per element.
    Many(Vec<String>),
}

impl OneOrMany {
    /// Normalizes to a list of fragments.
    fn into_vec(self) -> Vec<String> {
        match self {
            Self::One(s) => vec![s],
            Self::Many(v) => v,
        }
    }
}

impl ZoneFile {
    /// Converts the parsed file into the core's zone representation.
    fn into_zones(self) -> PageZones {
        PageZones {
            title: self.title,
            h1: self.h1.map(OneOrMany::into_vec).unwrap_or_default(),
            h2: self.h2.map(OneOrMany::into_vec).unwrap_or_default(),
            meta_description: self.meta_description,
            body: self.body,
        }
    }
}

/// Implements the `seolens analyze` command.
fn cmd_analyze(args: &AnalyzeArgs) -> ExitCode {
    let language: Language = match args.language.parse() {
        Ok(language) => language,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let zones = match read_zone_file(&args.file) {
        Ok(zones) => zones,
        Err(message) => {
            eprintln!("error: {message}");
            return ExitCode::FAILURE;
        }
    };

    let mut config = AnalysisConfig {
        language,
        min_token_length: args.min_length,
        top_terms: args.top_terms,
        top_phrases: args.top_phrases,
        extra_stopwords: args.stopword.clone(),
        ..AnalysisConfig::default()
    };

    for override_spec in &args.boost {
        if let Err(message) = apply_boost_override(&mut config, override_spec) {
            eprintln!("error: {message}");
            return ExitCode::FAILURE;
        }
    }

    let analysis = analyze_page(&zones, &config);

    if args.json {
        output_json(&language, &analysis)
    } else {
        output_tables(&analysis);
        ExitCode::SUCCESS
    }
}

/// Reads and validates the zone text file.
fn read_zone_file(path: &Path) -> Result<PageZones, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("failed to read {}: {e}", path.display()))?;
    let file: ZoneFile = serde_json::from_str(&contents)
        .map_err(|e| format!("malformed zone file {}: {e}", path.display()))?;
    Ok(file.into_zones())
}

/// Parses a `zone=factor` override and applies it to the config.
fn apply_boost_override(config: &mut AnalysisConfig, spec: &str) -> Result<(), String> {
    let (zone_name, factor_text) = spec
        .split_once('=')
        .ok_or_else(|| format!("invalid boost '{spec}', expected ZONE=FACTOR"))?;

    let zone: Zone = zone_name.parse().map_err(|e| format!("{e}"))?;
    if zone == Zone::Body {
        return Err("the body zone is the unboosted baseline and cannot be overridden".to_string());
    }

    let factor: f32 = factor_text
        .parse()
        .map_err(|_| format!("invalid boost factor '{factor_text}'"))?;
    if factor < 1.0 {
        return Err(format!(
            "boost factor for {zone} must be at least 1.0, got {factor}"
        ));
    }

    config.boosts.set(zone, factor);
    Ok(())
}

/// One phrase row for JSON output.
#[derive(Serialize)]
struct JsonPhrase {
    /// The phrase as a space-separated string.
    phrase: String,
    /// Relevance score.
    score: f32,
}

/// JSON output for the `analyze` command.
#[derive(Serialize)]
struct JsonAnalysis<'a> {
    /// The analysis language.
    language: String,
    /// Ranked keywords, best first.
    keywords: &'a [seolens_core::ScoredKeyword],
    /// Long-tail phrases (two or more words), best first.
    phrases: Vec<JsonPhrase>,
}

/// Prints the analysis as pretty JSON.
fn output_json(language: &Language, analysis: &PageAnalysis) -> ExitCode {
    let output = JsonAnalysis {
        language: language.to_string(),
        keywords: &analysis.keywords,
        phrases: analysis
            .long_tail_phrases()
            .map(|p| JsonPhrase {
                phrase: p.as_string(),
                score: p.score,
            })
            .collect(),
    };

    match serde_json::to_string_pretty(&output) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: failed to serialize JSON: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Prints the analysis as two tables.
fn output_tables(analysis: &PageAnalysis) {
    if analysis.keywords.is_empty() {
        println!("No keywords found.");
    } else {
        let mut table = Table::new();
        table.set_header(vec!["#", "Keyword", "Score"]);
        for (rank, keyword) in analysis.keywords.iter().enumerate() {
            table.add_row(vec![
                (rank + 1).to_string(),
                keyword.term.clone(),
                format!("{:.1}", keyword.score),
            ]);
        }
        println!("Keywords");
        println!("{table}");
    }

    println!();

    // Single-word phrases are filtered at this boundary; only real
    // long-tail candidates are worth showing.
    let long_tail: Vec<_> = analysis.long_tail_phrases().collect();
    if long_tail.is_empty() {
        println!("No long-tail phrases found.");
    } else {
        let mut table = Table::new();
        table.set_header(vec!["#", "Phrase", "Score"]);
        for (rank, phrase) in long_tail.iter().enumerate() {
            table.add_row(vec![
                (rank + 1).to_string(),
                phrase.as_string(),
                format!("{:.1}", phrase.score),
            ]);
        }
        println!("Long-tail phrases");
        println!("{table}");
    }
}

/// Implements the `seolens languages` command.
fn cmd_languages() -> ExitCode {
    println!("Supported languages:");
    for language in Language::ALL {
        println!("  {language}");
    }
    ExitCode::SUCCESS
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn zone_file_accepts_string_or_list_headings() {
        let file: ZoneFile =
            serde_json::from_str(r#"{"title": "T", "h1": "One", "h2": ["A", "B"]}"#).unwrap();
        let zones = file.into_zones();
        assert_eq!(zones.title.as_deref(), Some("T"));
        assert_eq!(zones.h1, vec!["One"]);
        assert_eq!(zones.h2, vec!["A", "B"]);
    }

    #[test]
    fn zone_file_rejects_unknown_keys() {
        let result = serde_json::from_str::<ZoneFile>(r#"{"footer": "nope"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn boost_override_parses_and_applies() {
        let mut config = AnalysisConfig::default();
        apply_boost_override(&mut config, "title=6.5").unwrap();
        assert_eq!(config.boosts.title, 6.5);
    }

    #[test]
    fn boost_override_rejects_unknown_zone() {
        let mut config = AnalysisConfig::default();
        let err = apply_boost_override(&mut config, "sidebar=2.0").unwrap_err();
        assert!(err.contains("unknown zone"));
    }

    #[test]
    fn boost_override_rejects_body() {
        let mut config = AnalysisConfig::default();
        let err = apply_boost_override(&mut config, "body=2.0").unwrap_err();
        assert!(err.contains("baseline"));
    }

    #[test]
    fn boost_override_rejects_lowering_factors() {
        let mut config = AnalysisConfig::default();
        let err = apply_boost_override(&mut config, "h1=0.5").unwrap_err();
        assert!(err.contains("at least 1.0"));
    }

    #[test]
    fn boost_override_rejects_garbage() {
        let mut config = AnalysisConfig::default();
        assert!(apply_boost_override(&mut config, "title").is_err());
        assert!(apply_boost_override(&mut config, "title=fast").is_err());
    }
}
