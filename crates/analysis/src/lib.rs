//! Chat export parsing, sentiment classification, and risk scoring.
//!
//! This crate implements the full analysis pipeline: raw export text is
//! parsed into ordered message records, each record is enriched with a
//! sentiment label, inter-arrival time, and keyword counts, aggregates
//! are derived per sender and chat-wide, and a heuristic relationship
//! risk score is computed from them. Rendering of the results is the
//! caller's responsibility.

#![deny(missing_docs, unsafe_code)]

/// Line parser and chat loader for plaintext exports.
pub mod parser;

/// Sentiment classification over an external polarity model.
pub mod sentiment;

/// Keyword lexicons and term counting.
pub mod lexicon;

/// Per-sender and chat-wide aggregate statistics.
pub mod aggregate;

/// Risk scoring policies.
pub mod risk;

/// End-to-end analysis pipeline.
pub mod pipeline;
