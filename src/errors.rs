//! Unified application error type.
//! All modules (core, cli, export, config) return AppError to keep the error
//! handling consistent and easy to manage.

use crate::core::validator::ValidationErrors;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to read input: {0}")]
    Input(#[source] io::Error),

    // ---------------------------
    // Validation
    // ---------------------------
    #[error("{0}")]
    Validation(#[from] ValidationErrors),

    // ---------------------------
    // Record store
    // ---------------------------
    #[error("Invalid entry index: {index} (store holds {len} entries)")]
    InvalidIndex { index: usize, len: usize },

    #[error("Select at least one entry.")]
    NoSelectionForDelete,

    // ---------------------------
    // Session commands
    // ---------------------------
    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    #[error("Configuration error: {0}")]
    Config(String),

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
