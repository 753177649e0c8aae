//! Shared data types for the chatrisk pipeline.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single message parsed from a chat export line.
///
/// Immutable once created: records that fail to parse are never
/// represented partially, they are simply absent from the sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageRecord {
    /// Timestamp of the message, in the export's own timezone.
    pub timestamp: NaiveDateTime,

    /// Sender display name, never empty.
    pub sender: String,

    /// Message text.
    pub message: String,
}

/// Three-way sentiment label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    /// Favorable tone (polarity above the positive threshold).
    Positive,

    /// Unfavorable tone (polarity below the negative threshold).
    Negative,

    /// Everything in between, boundaries included.
    Neutral,
}

/// A [`MessageRecord`] plus the fields derived by the analysis pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedRecord {
    /// The underlying parsed record.
    pub record: MessageRecord,

    /// Sentiment label for the message text.
    pub sentiment: Sentiment,

    /// Minutes since the immediately preceding record in the loaded
    /// sequence, regardless of sender. `None` for the first record.
    pub delta_minutes: Option<f64>,

    /// Number of distinct breakup-lexicon entries found in the message.
    pub breakup_terms: usize,

    /// Number of distinct apology-lexicon entries found in the message.
    pub apology_terms: usize,
}

/// Message counts per sentiment label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentCounts {
    /// Messages labeled Positive.
    pub positive: u64,

    /// Messages labeled Negative.
    pub negative: u64,

    /// Messages labeled Neutral.
    pub neutral: u64,
}

impl SentimentCounts {
    /// Count one message with the given label.
    pub fn record(&mut self, sentiment: Sentiment) {
        match sentiment {
            Sentiment::Positive => self.positive += 1,
            Sentiment::Negative => self.negative += 1,
            Sentiment::Neutral => self.neutral += 1,
        }
    }

    /// Total messages counted.
    pub fn total(&self) -> u64 {
        self.positive + self.negative + self.neutral
    }

    /// Negative messages as a percentage of the total (0 for empty counts).
    pub fn negative_share(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            0.0
        } else {
            self.negative as f64 / total as f64 * 100.0
        }
    }
}

/// Per-sender aggregates, recomputed from scratch whenever the record
/// sequence changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SenderStats {
    /// Messages sent by this sender.
    pub message_count: u64,

    /// Share of the chat's total messages, in percent.
    pub share: f64,

    /// Mean inter-arrival minutes over this sender's records. The deltas
    /// are taken against the previous record in the chat overall, not the
    /// sender's own previous message. `None` when the sender has no record
    /// with a defined delta.
    pub mean_delta_minutes: Option<f64>,

    /// Mean message length in characters.
    pub mean_message_chars: f64,

    /// Sentiment distribution of this sender's messages.
    pub sentiment: SentimentCounts,

    /// Total breakup-term matches across this sender's messages.
    pub breakup_terms: usize,

    /// Total apology-term matches across this sender's messages.
    pub apology_terms: usize,
}

/// Chat-wide aggregates derived from the enriched record sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatAggregates {
    /// Total number of records.
    pub total_records: u64,

    /// Per-sender statistics, keyed by sender name.
    pub senders: BTreeMap<String, SenderStats>,

    /// Chat-wide sentiment distribution.
    pub sentiment: SentimentCounts,

    /// Sentiment counts grouped by calendar date, for trend reporting.
    /// Dates come from record timestamps as-is; no timezone conversion.
    pub sentiment_by_date: BTreeMap<NaiveDate, SentimentCounts>,

    /// Chat-wide mean inter-arrival minutes, over all defined deltas.
    pub mean_delta_minutes: Option<f64>,

    /// Total breakup-term matches across the whole chat.
    pub breakup_terms_total: usize,

    /// Total apology-term matches across the whole chat.
    pub apology_terms_total: usize,
}

impl ChatAggregates {
    /// Largest per-sender message share, in percent. 0 for an empty chat.
    pub fn max_sender_share(&self) -> f64 {
        self.senders
            .values()
            .map(|s| s.share)
            .fold(0.0, f64::max)
    }

    /// Largest per-sender mean inter-arrival time, ignoring senders with
    /// no defined delta.
    pub fn max_sender_mean_delta(&self) -> Option<f64> {
        self.senders
            .values()
            .filter_map(|s| s.mean_delta_minutes)
            .fold(None, |acc, v| Some(acc.map_or(v, |a: f64| a.max(v))))
    }

    /// Smallest per-sender mean message length. `None` for an empty chat.
    pub fn min_sender_mean_chars(&self) -> Option<f64> {
        self.senders
            .values()
            .map(|s| s.mean_message_chars)
            .fold(None, |acc, v| Some(acc.map_or(v, |a: f64| a.min(v))))
    }
}

/// Discrete risk bucket derived from the numeric score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskTier {
    /// Score below the Moderate boundary.
    Low,

    /// Score at or above the Moderate boundary, below High.
    Moderate,

    /// Score at or above the High boundary.
    High,
}

impl std::fmt::Display for RiskTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskTier::Low => write!(f, "Low Risk"),
            RiskTier::Moderate => write!(f, "Moderate Risk"),
            RiskTier::High => write!(f, "High Risk"),
        }
    }
}

/// Which of the two scoring variants to apply.
///
/// The two policies differ in what "term usage" and "response time"
/// measure; callers must pick one explicitly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringPolicy {
    /// Sentiment-share based scoring: dominant sender, chat-wide negative
    /// share, slowest per-sender response time, tersest per-sender length.
    #[default]
    SentimentShare,

    /// Keyword-count based scoring: breakup-term total, negative record
    /// count, dominant sender, chat-wide response time.
    KeywordCount,
}

/// Final risk verdict: a bounded score plus its tier.
///
/// A pure function of the aggregates; the score is the sum of
/// independently capped factor contributions (at most 90 with the four
/// defined factors).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// Heuristic score in 0..=100.
    pub score: u32,

    /// Risk tier for the score.
    pub tier: RiskTier,

    /// Policy that produced the score.
    pub policy: ScoringPolicy,
}
