use thiserror::Error;

/// Errors that can occur during repository operations.
///
/// A missing record is not an error: lookups return `Ok(None)` instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_error_display() {
        assert_eq!(
            RepositoryError::QueryFailed("Table not found".to_string()).to_string(),
            "Query failed: Table not found"
        );
        assert_eq!(
            RepositoryError::InvalidData("Missing or invalid field: title".to_string()).to_string(),
            "Invalid data: Missing or invalid field: title"
        );
    }
}
