use thiserror::Error;

use crate::storage::RepositoryError;

/// Reasons a resolver invocation failed.
///
/// Every variant ends up as `null` on the wire. [`ResolverError::kind`] keeps
/// them apart in the logs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResolverError {
    #[error("Configuration error: {0}")]
    Configuration(String),
    #[error(transparent)]
    Store(#[from] RepositoryError),
    #[error("Invalid arguments for {field}: {message}")]
    InvalidArguments { field: String, message: String },
    #[error("Unknown field: {0}")]
    UnknownField(String),
    #[error("{0} is not implemented")]
    Unsupported(String),
}

impl ResolverError {
    /// Stable, lowercase name of the error category for structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            ResolverError::Configuration(_) => "configuration",
            ResolverError::Store(_) => "store",
            ResolverError::InvalidArguments { .. } => "invalid_arguments",
            ResolverError::UnknownField(_) => "unknown_field",
            ResolverError::Unsupported(_) => "unsupported",
        }
    }
}
