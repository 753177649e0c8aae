use chatrisk_core::constants::{
    BREAKUP_TERM_TOTAL, DOMINANT_SENDER_SHARE, HIGH_RISK_SCORE, MODERATE_RISK_SCORE,
    NEGATIVE_SENTIMENT_SHARE, SLOW_RESPONSE_MINUTES, TERSE_MESSAGE_CHARS,
    WEIGHT_BREAKUP_TERMS, WEIGHT_DOMINANT_SENDER, WEIGHT_KEYWORD_DOMINANT_SENDER,
    WEIGHT_KEYWORD_SLOW_RESPONSE, WEIGHT_NEGATIVE_SENTIMENT, WEIGHT_SLOW_RESPONSE,
    WEIGHT_TERSE_MESSAGES,
};
use chatrisk_core::{ChatAggregates, RiskAssessment, RiskTier, ScoringPolicy};

/// Score the chat with the selected policy and map the score to a tier.
///
/// Both policies sum independently capped factor contributions; the score
/// is monotone non-decreasing in each contributing signal. A single-sender
/// chat is degenerate (share is 100%, the per-sender extrema have one data
/// point) but scores through the same formulas without special cases.
pub fn assess(aggregates: &ChatAggregates, policy: ScoringPolicy) -> RiskAssessment {
    let score = match policy {
        ScoringPolicy::SentimentShare => score_sentiment_share(aggregates),
        ScoringPolicy::KeywordCount => score_keyword_count(aggregates),
    };
    RiskAssessment {
        score,
        tier: tier_for(score),
        policy,
    }
}

/// Map a score to its risk tier.
pub fn tier_for(score: u32) -> RiskTier {
    if score >= HIGH_RISK_SCORE {
        RiskTier::High
    } else if score >= MODERATE_RISK_SCORE {
        RiskTier::Moderate
    } else {
        RiskTier::Low
    }
}

/// Policy A: dominant sender, chat-wide negative share, slowest
/// per-sender response time, tersest per-sender message length.
fn score_sentiment_share(aggregates: &ChatAggregates) -> u32 {
    let mut score = 0;
    if aggregates.max_sender_share() > DOMINANT_SENDER_SHARE {
        score += WEIGHT_DOMINANT_SENDER;
    }
    if aggregates.sentiment.negative_share() > NEGATIVE_SENTIMENT_SHARE {
        score += WEIGHT_NEGATIVE_SENTIMENT;
    }
    if aggregates
        .max_sender_mean_delta()
        .is_some_and(|minutes| minutes > SLOW_RESPONSE_MINUTES)
    {
        score += WEIGHT_SLOW_RESPONSE;
    }
    if aggregates
        .min_sender_mean_chars()
        .is_some_and(|chars| chars < TERSE_MESSAGE_CHARS)
    {
        score += WEIGHT_TERSE_MESSAGES;
    }
    score
}

/// Policy B: breakup-term total, negative record count, dominant sender,
/// chat-wide response time.
fn score_keyword_count(aggregates: &ChatAggregates) -> u32 {
    let mut score = 0;
    if aggregates.breakup_terms_total > BREAKUP_TERM_TOTAL {
        score += WEIGHT_BREAKUP_TERMS;
    }
    if aggregates.sentiment.negative_share() > NEGATIVE_SENTIMENT_SHARE {
        score += WEIGHT_NEGATIVE_SENTIMENT;
    }
    if aggregates.max_sender_share() > DOMINANT_SENDER_SHARE {
        score += WEIGHT_KEYWORD_DOMINANT_SENDER;
    }
    if aggregates
        .mean_delta_minutes
        .is_some_and(|minutes| minutes > SLOW_RESPONSE_MINUTES)
    {
        score += WEIGHT_KEYWORD_SLOW_RESPONSE;
    }
    score
}
