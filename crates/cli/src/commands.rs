//! CLI command definitions for chatrisk.

use chatrisk_core::ScoringPolicy;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Main CLI application.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Logging verbosity
    #[arg(short, long, default_value_t = 0, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze a plaintext chat export
    Analyze(AnalyzeArgs),
}

/// Chat analysis arguments.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Path to the exported chat file (.txt)
    pub input: PathBuf,

    /// Scoring policy (overrides the config file when given)
    #[arg(long, value_enum)]
    pub policy: Option<PolicyArg>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Configuration file (JSON) with policy and lexicon overrides
    #[arg(short, long, env = "CHATRISK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Maximum rows in the text-mode message table (0 hides the table)
    #[arg(long, default_value_t = 20)]
    pub table_rows: usize,
}

/// Scoring policy selection.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyArg {
    /// Sentiment-share based scoring (policy A)
    Sentiment,

    /// Keyword-count based scoring (policy B)
    Keyword,
}

impl From<PolicyArg> for ScoringPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Sentiment => ScoringPolicy::SentimentShare,
            PolicyArg::Keyword => ScoringPolicy::KeywordCount,
        }
    }
}

/// Output format selection.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text sections
    Text,

    /// The full report as JSON
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analyze_parses_with_defaults() {
        let cli = Cli::try_parse_from(["chatrisk", "analyze", "chat.txt"]).unwrap();
        let Commands::Analyze(args) = cli.command;
        assert_eq!(args.input, PathBuf::from("chat.txt"));
        assert_eq!(args.policy, None);
        assert_eq!(args.format, OutputFormat::Text);
        assert_eq!(args.table_rows, 20);
    }

    #[test]
    fn policy_and_format_flags_parse() {
        let cli = Cli::try_parse_from([
            "chatrisk", "analyze", "chat.txt", "--policy", "keyword", "--format", "json",
        ])
        .unwrap();
        let Commands::Analyze(args) = cli.command;
        assert_eq!(args.policy, Some(PolicyArg::Keyword));
        assert_eq!(args.format, OutputFormat::Json);
        assert_eq!(
            ScoringPolicy::from(PolicyArg::Keyword),
            ScoringPolicy::KeywordCount
        );
    }

    #[test]
    fn missing_input_is_a_parse_error() {
        assert!(Cli::try_parse_from(["chatrisk", "analyze"]).is_err());
    }
}
