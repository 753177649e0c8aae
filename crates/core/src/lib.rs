//! Core types, errors, and configuration for chatrisk
//!
//! This crate provides the foundational types and error handling used
//! throughout the chatrisk analyzer: parsed message records, the enriched
//! record shape produced by the analysis pipeline, aggregate statistics,
//! and the risk assessment verdict.

#![deny(missing_docs, unsafe_code)]

pub mod config;
pub mod constants;
pub mod error;
pub mod types;

// Re-exports for convenience
pub use config::{AnalyzerConfig, LexiconConfig};
pub use error::{Error, Result};
pub use types::*;
