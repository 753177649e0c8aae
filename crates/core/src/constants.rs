//! Scoring thresholds and defaults.
//!
//! Every threshold in the risk heuristic is a fixed, inspectable constant;
//! none of them are configurable at runtime.

/// Polarity above this classifies a message as Positive (strict inequality).
pub const POSITIVE_POLARITY_THRESHOLD: f64 = 0.1;

/// Polarity below this classifies a message as Negative (strict inequality).
pub const NEGATIVE_POLARITY_THRESHOLD: f64 = -0.1;

/// Sender share (%) above which a chat counts as dominated by one sender.
pub const DOMINANT_SENDER_SHARE: f64 = 65.0;

/// Chat-wide Negative-sentiment share (%) above which sentiment is a risk signal.
pub const NEGATIVE_SENTIMENT_SHARE: f64 = 30.0;

/// Mean inter-arrival time (minutes) above which responses count as slow.
pub const SLOW_RESPONSE_MINUTES: f64 = 45.0;

/// Mean message length (characters) below which messages count as terse.
pub const TERSE_MESSAGE_CHARS: f64 = 20.0;

/// Chat-wide breakup-term total above which keyword usage is a risk signal.
pub const BREAKUP_TERM_TOTAL: usize = 5;

/// Sentiment-share policy: weight of the dominant-sender factor.
pub const WEIGHT_DOMINANT_SENDER: u32 = 25;

/// Weight of the negative-sentiment factor (both policies).
pub const WEIGHT_NEGATIVE_SENTIMENT: u32 = 30;

/// Sentiment-share policy: weight of the slowest per-sender response factor.
pub const WEIGHT_SLOW_RESPONSE: u32 = 20;

/// Sentiment-share policy: weight of the terse-message factor.
pub const WEIGHT_TERSE_MESSAGES: u32 = 15;

/// Keyword-count policy: weight of the breakup-term factor.
pub const WEIGHT_BREAKUP_TERMS: u32 = 25;

/// Keyword-count policy: weight of the dominant-sender factor.
pub const WEIGHT_KEYWORD_DOMINANT_SENDER: u32 = 20;

/// Keyword-count policy: weight of the chat-wide slow-response factor.
pub const WEIGHT_KEYWORD_SLOW_RESPONSE: u32 = 15;

/// Scores at or above this map to the High risk tier.
pub const HIGH_RISK_SCORE: u32 = 70;

/// Scores at or above this (and below the High boundary) map to Moderate.
pub const MODERATE_RISK_SCORE: u32 = 40;
