//! Unified application error type.
//! All modules (data, core, cli, export) return AppError so that the
//! top-level handler in main.rs only has one thing to print.
//!
//! The three domain errors below are kept as separate enums because the
//! interactive shell recovers from some of them and not from others.

use std::io;
use thiserror::Error;

/// Outcome of a rejected login or of a dashboard request without one.
///
/// `InvalidCredentials` is deliberately the only rejection: an unknown MIS,
/// a wrong password and a non-agent role all collapse into it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Login required")]
    NotAuthenticated,
}

/// Recoverable lookup failure for an authenticated agent.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("No KPI data found for this agent.")]
    NoKpiData,
}

/// The data source could not be loaded. Always fatal at startup.
#[derive(Error, Debug)]
pub enum DataSourceError {
    #[error("Data source not found: {0}")]
    Missing(String),

    #[error("Cannot open data source {path}: {reason}")]
    Open { path: String, reason: String },

    #[error("Table {0} is missing from the data source")]
    MissingTable(String),

    #[error("Column {column} is missing from table {table}")]
    MissingColumn { table: String, column: String },

    #[error("Invalid value in {table}.{column} (row {row}): {reason}")]
    InvalidCell {
        table: String,
        column: String,
        row: usize,
        reason: String,
    },

    #[error("Duplicate identifier '{identifier}' in table {table}")]
    DuplicateIdentifier { table: String, identifier: String },

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Domain
    // ---------------------------
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error(transparent)]
    DataSource(#[from] DataSourceError),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl From<rusqlite::Error> for AppError {
    fn from(e: rusqlite::Error) -> Self {
        AppError::DataSource(DataSourceError::Sqlite(e))
    }
}

pub type AppResult<T> = Result<T, AppError>;
