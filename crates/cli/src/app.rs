//! CLI application entry point and rendering.
//!
//! Loads configuration, runs the analysis pipeline over the input file,
//! and renders the report as text sections or JSON.

use crate::commands::{AnalyzeArgs, Cli, Commands, OutputFormat};
use crate::error::{CliError, Result};
use chatrisk_analysis::pipeline::{self, ChatAnalysis, ChatReport};
use chatrisk_analysis::sentiment::WordListPolarity;
use chatrisk_core::AnalyzerConfig;
use clap::Parser;
use std::fmt::Write as _;
use std::fs;
use tracing::debug;

/// Parse arguments and run the application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);
    match &cli.command {
        Commands::Analyze(args) => handle_analyze(args),
    }
}

/// Set up logging based on verbosity level.
fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .try_init()
        .ok(); // Ignore errors if a subscriber is already installed
}

fn handle_analyze(args: &AnalyzeArgs) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => AnalyzerConfig::load(path)
            .map_err(|e| CliError::Config(e.to_string()))?,
        None => AnalyzerConfig::default(),
    };
    if let Some(policy) = args.policy {
        config.policy = policy.into();
    }
    debug!(input = %args.input.display(), policy = ?config.policy, "starting analysis");

    let bytes = fs::read(&args.input)?;
    let model = WordListPolarity::new();

    match pipeline::analyze_bytes(&bytes, &config, &model)? {
        ChatAnalysis::NoData => {
            println!(
                "No valid messages were parsed. Check if the file matches the \
                 expected chat export format."
            );
            Ok(())
        }
        ChatAnalysis::Report(report) => {
            match args.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
                OutputFormat::Text => print!("{}", render_text(&report, args.table_rows)),
            }
            Ok(())
        }
    }
}

/// Render the report as the dashboard's text sections.
fn render_text(report: &ChatReport, table_rows: usize) -> String {
    let mut out = String::new();
    let aggregates = &report.aggregates;

    let _ = writeln!(out, "Overview ({} messages)", aggregates.total_records);
    for (sender, stats) in &aggregates.senders {
        let _ = writeln!(
            out,
            "  {:<20} {:>5} messages ({:.1}%)",
            sender, stats.message_count, stats.share
        );
    }

    let _ = writeln!(out, "\nSentiment distribution");
    let total = aggregates.sentiment.total().max(1) as f64;
    for (label, count) in [
        ("Positive", aggregates.sentiment.positive),
        ("Negative", aggregates.sentiment.negative),
        ("Neutral", aggregates.sentiment.neutral),
    ] {
        let _ = writeln!(
            out,
            "  {:<10} {:>5} ({:.1}%)",
            label,
            count,
            count as f64 / total * 100.0
        );
    }

    let _ = writeln!(out, "\nSentiment over time");
    let _ = writeln!(out, "  {:<12} {:>9} {:>9} {:>9}", "date", "positive", "negative", "neutral");
    for (date, counts) in &aggregates.sentiment_by_date {
        let _ = writeln!(
            out,
            "  {:<12} {:>9} {:>9} {:>9}",
            date.to_string(),
            counts.positive,
            counts.negative,
            counts.neutral
        );
    }

    let risk = &report.risk;
    let _ = writeln!(out, "\nRisk assessment");
    let _ = writeln!(
        out,
        "  Breakup likelihood score: {} / 100 ({})",
        risk.score, risk.tier
    );

    if table_rows > 0 {
        let _ = writeln!(out, "\nMessages (first {})", table_rows.min(report.records.len()));
        for enriched in report.records.iter().take(table_rows) {
            let _ = writeln!(
                out,
                "  {} | {} | {:?} | {}",
                enriched.record.timestamp.format("%Y-%m-%d %H:%M"),
                enriched.record.sender,
                enriched.sentiment,
                enriched.record.message
            );
        }
    }

    out
}
