use chatrisk_core::LexiconConfig;

/// A fixed list of lowercase keyword phrases matched by substring.
#[derive(Debug, Clone)]
pub struct TermLexicon {
    name: &'static str,
    phrases: Vec<String>,
}

impl TermLexicon {
    /// Build a lexicon from configured phrases.
    ///
    /// Phrases are normalized to lowercase; empty entries are dropped so
    /// that a stray blank line in a config file cannot match everything.
    pub fn new(name: &'static str, phrases: &[String]) -> Self {
        Self {
            name,
            phrases: phrases
                .iter()
                .map(|p| p.trim().to_lowercase())
                .filter(|p| !p.is_empty())
                .collect(),
        }
    }

    /// Lexicon name, for logging.
    pub fn name(&self) -> &str {
        self.name
    }

    /// Number of phrases in the lexicon.
    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    /// Whether the lexicon has no phrases.
    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    /// Count the distinct lexicon entries contained in the message.
    ///
    /// Matching is case-insensitive substring containment, not
    /// word-boundary matching. Each entry contributes at most once no
    /// matter how often it repeats within the message.
    pub fn count_matches(&self, message: &str) -> usize {
        let haystack = message.to_lowercase();
        self.phrases
            .iter()
            .filter(|phrase| haystack.contains(phrase.as_str()))
            .count()
    }
}

/// The two lexicons the pipeline attaches per-message counts for.
#[derive(Debug, Clone)]
pub struct Lexicons {
    /// Breakup-intent phrases.
    pub breakup: TermLexicon,

    /// Apology phrases.
    pub apology: TermLexicon,
}

impl Lexicons {
    /// Build both lexicons from configuration.
    pub fn from_config(config: &LexiconConfig) -> Self {
        Self {
            breakup: TermLexicon::new("breakup", &config.breakup_terms),
            apology: TermLexicon::new("apology", &config.apology_terms),
        }
    }
}

impl Default for Lexicons {
    fn default() -> Self {
        Self::from_config(&LexiconConfig::default())
    }
}
