use chatrisk_core::{ChatAggregates, EnrichedRecord, SenderStats, SentimentCounts};
use std::collections::BTreeMap;

#[derive(Default)]
struct SenderAccum {
    count: u64,
    delta_sum: f64,
    delta_count: u64,
    char_sum: u64,
    sentiment: SentimentCounts,
    breakup_terms: usize,
    apology_terms: usize,
}

/// Compute per-sender and chat-wide statistics from the enriched
/// sequence.
///
/// Everything is recomputed from scratch on each call; the record set is
/// static once loaded, so there is no incremental path. Maps are keyed
/// with `BTreeMap` so that repeated runs over identical input serialize
/// identically.
///
/// Per-sender mean inter-arrival time averages each record's delta
/// against the previous record in the chat overall, which may belong to
/// a different sender. That mirrors the measure the scoring thresholds
/// were tuned against.
pub fn compute(records: &[EnrichedRecord]) -> ChatAggregates {
    let total_records = records.len() as u64;

    let mut senders: BTreeMap<String, SenderAccum> = BTreeMap::new();
    let mut sentiment = SentimentCounts::default();
    let mut sentiment_by_date: BTreeMap<_, SentimentCounts> = BTreeMap::new();
    let mut delta_sum = 0.0;
    let mut delta_count = 0u64;
    let mut breakup_terms_total = 0usize;
    let mut apology_terms_total = 0usize;

    for enriched in records {
        sentiment.record(enriched.sentiment);
        sentiment_by_date
            .entry(enriched.record.timestamp.date())
            .or_default()
            .record(enriched.sentiment);
        breakup_terms_total += enriched.breakup_terms;
        apology_terms_total += enriched.apology_terms;
        if let Some(delta) = enriched.delta_minutes {
            delta_sum += delta;
            delta_count += 1;
        }

        let accum = senders.entry(enriched.record.sender.clone()).or_default();
        accum.count += 1;
        accum.char_sum += enriched.record.message.chars().count() as u64;
        accum.sentiment.record(enriched.sentiment);
        accum.breakup_terms += enriched.breakup_terms;
        accum.apology_terms += enriched.apology_terms;
        if let Some(delta) = enriched.delta_minutes {
            accum.delta_sum += delta;
            accum.delta_count += 1;
        }
    }

    let senders = senders
        .into_iter()
        .map(|(name, accum)| {
            let stats = SenderStats {
                message_count: accum.count,
                share: accum.count as f64 / total_records as f64 * 100.0,
                mean_delta_minutes: (accum.delta_count > 0)
                    .then(|| accum.delta_sum / accum.delta_count as f64),
                mean_message_chars: accum.char_sum as f64 / accum.count as f64,
                sentiment: accum.sentiment,
                breakup_terms: accum.breakup_terms,
                apology_terms: accum.apology_terms,
            };
            (name, stats)
        })
        .collect();

    ChatAggregates {
        total_records,
        senders,
        sentiment,
        sentiment_by_date,
        mean_delta_minutes: (delta_count > 0).then(|| delta_sum / delta_count as f64),
        breakup_terms_total,
        apology_terms_total,
    }
}
