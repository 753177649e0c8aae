use crate::aggregate;
use crate::lexicon::Lexicons;
use crate::parser;
use crate::risk;
use crate::sentiment::{self, PolarityModel};
use chatrisk_core::{
    AnalyzerConfig, ChatAggregates, EnrichedRecord, MessageRecord, Result, RiskAssessment,
};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Everything the analysis produces for one document.
///
/// This is the explicit value handed to the display layer; there is no
/// ambient session state, and rerunning the pipeline on the same input
/// rebuilds an identical report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatReport {
    /// The enriched record sequence, in input order.
    pub records: Vec<EnrichedRecord>,

    /// Per-sender and chat-wide statistics.
    pub aggregates: ChatAggregates,

    /// The risk verdict for the configured policy.
    pub risk: RiskAssessment,
}

/// Outcome of one analysis run.
///
/// Zero parsed records is not an error: callers should warn the user
/// rather than fail, and the variant keeps that state distinguishable
/// from a real report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ChatAnalysis {
    /// The document contained no parseable message lines.
    NoData,

    /// A full report over at least one record.
    Report(ChatReport),
}

/// Derive the per-record fields for the whole sequence.
///
/// Runs once, after the full sequence exists: the inter-arrival delta
/// needs the previous record, which may belong to a different sender.
pub fn enrich(
    records: Vec<MessageRecord>,
    model: &dyn PolarityModel,
    lexicons: &Lexicons,
) -> Vec<EnrichedRecord> {
    let mut enriched = Vec::with_capacity(records.len());
    let mut previous: Option<NaiveDateTime> = None;

    for record in records {
        let delta_minutes =
            previous.map(|prev| (record.timestamp - prev).num_seconds() as f64 / 60.0);
        previous = Some(record.timestamp);

        let sentiment = sentiment::classify_message(model, &record.message);
        let breakup_terms = lexicons.breakup.count_matches(&record.message);
        let apology_terms = lexicons.apology.count_matches(&record.message);

        enriched.push(EnrichedRecord {
            record,
            sentiment,
            delta_minutes,
            breakup_terms,
            apology_terms,
        });
    }

    enriched
}

/// Run the full pipeline over decoded text.
///
/// Pure function of its inputs: identical text, config, and model yield
/// an identical analysis.
pub fn analyze_text(
    text: &str,
    config: &AnalyzerConfig,
    model: &dyn PolarityModel,
) -> ChatAnalysis {
    analyze_records(parser::parse_document(text), config, model)
}

/// Run the full pipeline over raw document bytes.
///
/// The only fatal input error is an invalid UTF-8 document; everything
/// else degrades to skipped lines or the `NoData` outcome.
pub fn analyze_bytes(
    bytes: &[u8],
    config: &AnalyzerConfig,
    model: &dyn PolarityModel,
) -> Result<ChatAnalysis> {
    Ok(analyze_records(parser::load_records(bytes)?, config, model))
}

fn analyze_records(
    records: Vec<MessageRecord>,
    config: &AnalyzerConfig,
    model: &dyn PolarityModel,
) -> ChatAnalysis {
    if records.is_empty() {
        return ChatAnalysis::NoData;
    }

    let lexicons = Lexicons::from_config(&config.lexicons);
    let enriched = enrich(records, model, &lexicons);
    let aggregates = aggregate::compute(&enriched);
    let risk = risk::assess(&aggregates, config.policy);
    info!(
        records = enriched.len(),
        senders = aggregates.senders.len(),
        score = risk.score,
        model = model.name(),
        "analysis complete"
    );

    ChatAnalysis::Report(ChatReport {
        records: enriched,
        aggregates,
        risk,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sentiment::WordListPolarity;
    use chatrisk_core::{RiskTier, ScoringPolicy, Sentiment};

    const SAMPLE: &str = "\
12/3/2024, 14:05 - Alice: I love how today went, thanks!
12/3/2024, 14:55 - Bob: ok
some wrapped continuation text
12/3/2024, 16:00 - Alice: you seem upset, did I do something?
13/3/2024, 9:10 - Bob: I'm sorry, maybe we should break up
13/3/2024, 9:12 - Alice: please don't say it's over";

    #[test]
    fn enrichment_attaches_all_derived_fields() {
        let config = AnalyzerConfig::default();
        let model = WordListPolarity::new();
        let analysis = analyze_text(SAMPLE, &config, &model);
        let ChatAnalysis::Report(report) = analysis else {
            panic!("expected a report");
        };

        assert_eq!(report.records.len(), 5);
        assert_eq!(report.records[0].delta_minutes, None);
        assert_eq!(report.records[1].delta_minutes, Some(50.0));
        assert_eq!(report.records[0].sentiment, Sentiment::Positive);
        assert_eq!(report.records[3].apology_terms, 1);
        assert_eq!(report.records[3].breakup_terms, 1);
        assert_eq!(report.records[4].breakup_terms, 1);
        assert_eq!(report.aggregates.breakup_terms_total, 2);
    }

    #[test]
    fn policies_are_selected_explicitly() {
        let model = WordListPolarity::new();
        let a = AnalyzerConfig {
            policy: ScoringPolicy::SentimentShare,
            ..Default::default()
        };
        let b = AnalyzerConfig {
            policy: ScoringPolicy::KeywordCount,
            ..Default::default()
        };

        let ChatAnalysis::Report(report_a) = analyze_text(SAMPLE, &a, &model) else {
            panic!("expected a report");
        };
        let ChatAnalysis::Report(report_b) = analyze_text(SAMPLE, &b, &model) else {
            panic!("expected a report");
        };
        assert_eq!(report_a.risk.policy, ScoringPolicy::SentimentShare);
        assert_eq!(report_b.risk.policy, ScoringPolicy::KeywordCount);
    }

    #[test]
    fn no_parseable_lines_is_no_data() {
        let config = AnalyzerConfig::default();
        let model = WordListPolarity::new();
        let analysis = analyze_text("just prose\nand more prose", &config, &model);
        assert_eq!(analysis, ChatAnalysis::NoData);
    }

    #[test]
    fn invalid_utf8_aborts_the_analysis() {
        let config = AnalyzerConfig::default();
        let model = WordListPolarity::new();
        let err = analyze_bytes(&[0xc3, 0x28], &config, &model).unwrap_err();
        assert!(matches!(err, chatrisk_core::Error::Decode(_)));
    }

    #[test]
    fn reanalysis_is_byte_identical() {
        let config = AnalyzerConfig::default();
        let model = WordListPolarity::new();
        let first = analyze_bytes(SAMPLE.as_bytes(), &config, &model).unwrap();
        let second = analyze_bytes(SAMPLE.as_bytes(), &config, &model).unwrap();
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_vec(&first).unwrap(),
            serde_json::to_vec(&second).unwrap()
        );
    }

    #[test]
    fn single_sender_document_scores_without_error() {
        let text = "1/1/2024, 10:00 - Solo: hi\n1/1/2024, 11:00 - Solo: me again";
        let config = AnalyzerConfig::default();
        let model = WordListPolarity::new();
        let ChatAnalysis::Report(report) = analyze_text(text, &config, &model) else {
            panic!("expected a report");
        };
        assert_eq!(report.aggregates.senders["Solo"].share, 100.0);
        // 100% share (+25), 60 min mean delta (+20), terse messages (+15).
        assert_eq!(report.risk.score, 60);
        assert_eq!(report.risk.tier, RiskTier::Moderate);
    }
}
