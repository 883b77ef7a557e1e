//! Core error types for drillzy-core.
//!
//! This module defines the error hierarchy using thiserror
//! for better error handling and reporting across the library.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for drillzy-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Database-related errors
    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Survey and categorization errors
    #[error("Survey error: {0}")]
    Survey(#[from] SurveyError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Database-specific errors.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Failed to open database connection
    #[error("Failed to open database at {path}: {source}")]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Query execution failed
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Migration failed
    #[error("Database migration failed: {0}")]
    MigrationFailed(String),

    /// Database is locked
    #[error("Database is locked")]
    Locked,
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration: {0}")]
    LoadFailed(String),

    /// Failed to save configuration
    #[error("Failed to save configuration: {0}")]
    SaveFailed(String),

    /// Value cannot be parsed into the field's type
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Dot-path does not name a configuration field
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),
}

/// Survey and categorization errors.
#[derive(Error, Debug)]
pub enum SurveyError {
    /// A survey must carry at least one answer to be scored
    #[error("Survey has no answers")]
    EmptySurvey,

    /// Strict validation: answer count does not match the question set
    #[error("Expected {expected} answers, got {got}")]
    IncompleteSurvey { expected: usize, got: usize },

    /// Strict validation: answer references an unknown question
    #[error("No question matches '{0}'")]
    UnknownQuestion(String),

    /// Strict validation: answer text is not an option for its question
    #[error("'{answer}' is not an option for question '{question}'")]
    UnknownOption { question: String, answer: String },

    /// The text-generation backend could not be reached
    #[error("Text generation request failed: {0}")]
    BackendRequest(String),

    /// The text-generation backend returned an unusable response
    #[error("Text generation returned an unusable response: {0}")]
    BackendResponse(String),
}

impl From<rusqlite::Error> for DatabaseError {
    fn from(err: rusqlite::Error) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(err, _msg) => {
                if err.code == rusqlite::ErrorCode::DatabaseLocked {
                    DatabaseError::Locked
                } else {
                    DatabaseError::QueryFailed(err.to_string())
                }
            }
            _ => DatabaseError::QueryFailed(err.to_string()),
        }
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
