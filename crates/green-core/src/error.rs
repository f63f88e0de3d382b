//! Error types for the garden library.

use std::path::PathBuf;

use jiff::civil::Date;
use thiserror::Error;

/// Comprehensive error type for all garden operations.
#[derive(Error, Debug)]
pub enum GardenError {
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Garden not found within the caller's scope
    #[error("Garden with ID {id} not found")]
    GardenNotFound { id: u64 },
    /// Planting not found within the caller's scope
    #[error("Planting with ID {id} not found")]
    PlantingNotFound { id: u64 },
    /// Task not found within the caller's scope
    #[error("Task with ID {id} not found")]
    TaskNotFound { id: u64 },
    /// Task completion attempted before the due date
    #[error(
        "This task cannot be completed yet. It is scheduled for {}.",
        .due_date.strftime("%B %-d, %Y")
    )]
    NotYetDue { task_id: u64, due_date: Date },
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Coarse classification of a [`GardenError`].
///
/// Callers surface `NotYetDue` inline to the user and route everything else
/// to a generic failure path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed or out-of-range input
    Validation,
    /// Referenced record is not owned by the caller
    NotFound,
    /// Task is scheduled for a later day
    NotYetDue,
    /// Persistence, catalog or runtime failure
    Internal,
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> GardenError {
        GardenError::Database {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> GardenError {
        GardenError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl GardenError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Classifies the error for callers that only need to branch on kind.
    pub fn kind(&self) -> ErrorKind {
        match self {
            GardenError::InvalidInput { .. } => ErrorKind::Validation,
            GardenError::GardenNotFound { .. }
            | GardenError::PlantingNotFound { .. }
            | GardenError::TaskNotFound { .. } => ErrorKind::NotFound,
            GardenError::NotYetDue { .. } => ErrorKind::NotYetDue,
            GardenError::Database { .. }
            | GardenError::FileSystem { .. }
            | GardenError::XdgDirectory(_)
            | GardenError::Serialization { .. }
            | GardenError::Configuration { .. } => ErrorKind::Internal,
        }
    }

    /// Returns true when a completion was refused because the task is not
    /// due yet.
    pub fn is_not_yet_due(&self) -> bool {
        self.kind() == ErrorKind::NotYetDue
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| GardenError::database(message).with_source(e))
    }
}

/// Result type alias for garden operations
pub type Result<T> = std::result::Result<T, GardenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_yet_due_message_names_the_date() {
        let err = GardenError::NotYetDue {
            task_id: 4,
            due_date: Date::constant(2025, 5, 30),
        };
        assert_eq!(
            err.to_string(),
            "This task cannot be completed yet. It is scheduled for May 30, 2025."
        );
        assert!(err.is_not_yet_due());
    }

    #[test]
    fn test_error_kinds() {
        assert_eq!(
            GardenError::invalid_input("quantity")
                .with_reason("must be at least 1")
                .kind(),
            ErrorKind::Validation
        );
        assert_eq!(
            GardenError::TaskNotFound { id: 1 }.kind(),
            ErrorKind::NotFound
        );
        assert_eq!(
            GardenError::PlantingNotFound { id: 1 }.kind(),
            ErrorKind::NotFound
        );
        assert_eq!(
            GardenError::database("boom")
                .with_source(rusqlite::Error::QueryReturnedNoRows)
                .kind(),
            ErrorKind::Internal
        );
        assert!(!GardenError::GardenNotFound { id: 2 }.is_not_yet_due());
    }

    #[test]
    fn test_db_context_wraps_source() {
        let result: std::result::Result<(), rusqlite::Error> =
            Err(rusqlite::Error::QueryReturnedNoRows);
        match result.db_context("Failed to load task") {
            Err(GardenError::Database { message, .. }) => {
                assert_eq!(message, "Failed to load task");
            }
            other => panic!("Expected database error, got {other:?}"),
        }
    }
}
