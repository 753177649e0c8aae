//! Analyzer configuration: scoring policy and keyword lexicons.

use crate::error::{Error, Result};
use crate::types::ScoringPolicy;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration for a chatrisk analysis run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Scoring policy applied by the risk scorer.
    pub policy: ScoringPolicy,

    /// Keyword lexicons used for the lexical signals.
    pub lexicons: LexiconConfig,
}

/// Keyword phrase lists for the two lexical signals.
///
/// Phrases are matched case-insensitively as substrings; they are
/// normalized to lowercase when the lexicons are built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexiconConfig {
    /// Breakup-intent phrases.
    pub breakup_terms: Vec<String>,

    /// Apology phrases.
    pub apology_terms: Vec<String>,
}

impl Default for LexiconConfig {
    fn default() -> Self {
        Self {
            breakup_terms: [
                "break up",
                "breakup",
                "we're done",
                "we are done",
                "it's over",
                "need space",
                "need a break",
                "not working",
                "move on",
                "leave me alone",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            apology_terms: [
                "sorry",
                "my bad",
                "apologize",
                "apologise",
                "forgive me",
                "my fault",
                "didn't mean",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        }
    }
}

impl AnalyzerConfig {
    /// Load configuration from a JSON file.
    ///
    /// Missing fields fall back to their defaults, so a partial override
    /// (for example only `policy`) is a valid configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_lexicons_are_non_empty_and_lowercase() {
        let config = LexiconConfig::default();
        assert!(!config.breakup_terms.is_empty());
        assert!(!config.apology_terms.is_empty());
        for term in config.breakup_terms.iter().chain(&config.apology_terms) {
            assert_eq!(term, &term.to_lowercase());
        }
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = AnalyzerConfig {
            policy: ScoringPolicy::KeywordCount,
            lexicons: LexiconConfig::default(),
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: AnalyzerConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }

    #[test]
    fn partial_config_fills_defaults() {
        let config: AnalyzerConfig = serde_json::from_str(r#"{"policy":"keyword_count"}"#).unwrap();
        assert_eq!(config.policy, ScoringPolicy::KeywordCount);
        assert_eq!(config.lexicons, LexiconConfig::default());
    }
}
