//! Unified application error type.
//! All modules (core, export, config, cli) return AppError so that `main`
//! has a single place where failures are reported.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Input schema
    // ---------------------------
    #[error("Uploaded file must have these columns: {expected}. Missing: {missing}")]
    MissingColumns { expected: String, missing: String },

    // ---------------------------
    // Row errors (fatal in strict mode)
    // ---------------------------
    #[error("Invalid date '{value}' at line {line}")]
    InvalidDate { line: u64, value: String },

    #[error("Invalid time '{value}' at line {line} (expected HH:MM:SS)")]
    InvalidTime { line: u64, value: String },

    #[error("Empty {column} at line {line}")]
    EmptyField { line: u64, column: String },

    #[error("Invalid time format: {0} (expected HH:MM:SS)")]
    InvalidTimeArg(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Invalid meal window '{name}': {reason}")]
    InvalidWindow { name: String, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export format not supported: {0}")]
    InvalidExportFormat(String),

    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
