//! Command-line interface for chatrisk.
//!
//! This crate is the console stand-in for the dashboard: it reads an
//! exported chat file, runs the analysis pipeline, and prints the
//! overview statistics, the sentiment trend table, and the risk verdict.

#![deny(missing_docs, unsafe_code)]

/// CLI command definitions and parsing.
pub mod commands;

/// CLI application entry point and rendering.
pub mod app;

/// Error types for CLI operations.
pub mod error;
