//! Error types for Thiệp Cưới

use thiserror::Error;

/// Main error type for invitation operations
#[derive(Error, Debug)]
pub enum InvitationError {
    /// Unknown event id in the calendar/map table
    #[error("Event not found: {0}")]
    EventNotFound(String),

    /// No async runtime was available to drive background work
    #[error("Runtime unavailable: {0}")]
    Runtime(String),

    /// User input did not pass validation
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// Database creation/opening error
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    /// Transaction error
    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    /// Table error
    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    /// Storage operation error
    #[error("Storage operation error: {0}")]
    StorageOp(#[from] redb::StorageError),

    /// Commit error
    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Guestbook endpoint could not be reached
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Configuration file is present but unusable
    #[error("Config error: {0}")]
    Config(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Form validation failures.
///
/// These are shown to the guest as a blocking alert, never logged as faults.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field was empty after trimming
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// The party size did not start with a number
    #[error("party size is not a number: {0:?}")]
    InvalidPartySize(String),
}

/// Result type alias using InvitationError
pub type InvitationResult<T> = Result<T, InvitationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = InvitationError::EventNotFound("event9".to_string());
        assert_eq!(format!("{}", err), "Event not found: event9");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: InvitationError = io_err.into();
        assert!(matches!(err, InvitationError::Io(_)));
    }

    #[test]
    fn test_runtime_error_display() {
        let err = InvitationError::Runtime("no reactor running".to_string());
        assert_eq!(err.to_string(), "Runtime unavailable: no reactor running");
    }

    #[test]
    fn test_validation_wraps() {
        let err: InvitationError = ValidationError::MissingField("name").into();
        assert_eq!(
            err.to_string(),
            "Validation failed: missing required field: name"
        );
    }
}
