/// Error Module
///
/// Defines the error type shared across the Project Updates backend. The
/// database wrapper propagates these as typed results; the legacy
/// suppress-and-log entry points convert them to absent results at the edge.
use thiserror::Error;

/// Error type for the Project Updates backend.
///
/// Covers the failure taxonomy of the database wrapper:
/// - connection establishment and driver-level failures
/// - query execution failures (syntax, constraints, result handling)
/// - use of the wrapper while no connection is open
#[derive(Error, Debug)]
pub enum UpdatesError {
    /// Driver-level errors from the MySQL client (auth, network, server).
    #[error("Database error: {0}")]
    Database(#[from] mysql::Error),

    /// Query execution errors (syntax, constraint violations, result shape)
    #[error("Query error: {0}")]
    Query(String),

    /// A database operation was attempted while no connection is open
    #[error("Not connected to the database")]
    NotConnected,
}

/// Type alias for Result to use UpdatesError as the error type.
pub type Result<T> = std::result::Result<T, UpdatesError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let query_err = UpdatesError::Query("Syntax error".to_string());
        assert!(query_err.to_string().contains("Query error"));

        let closed_err = UpdatesError::NotConnected;
        assert!(closed_err.to_string().contains("Not connected"));
    }

    #[test]
    fn test_driver_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err: UpdatesError = mysql::Error::from(io_err).into();
        assert!(err.to_string().contains("Database error"));
        match err {
            UpdatesError::Database(_) => {}
            _ => panic!("Expected Database error"),
        }
    }
}
