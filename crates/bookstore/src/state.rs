//! Shared resolver state.
//!
//! The store handle is built once per process and cloned into every
//! invocation. When configuration is missing the state keeps the error instead,
//! so each invocation fails on its own and the process keeps serving.

use std::sync::Arc;

use bookstore_core::book::Book;
use bookstore_core::resolver::ResolverError;
use bookstore_core::storage::BookRepository;

use crate::config::ConfigError;
use crate::storage::InMemoryRepository;

/// Shared application state.
///
/// This is cloned for each invocation and contains the repository trait object
/// used for database access.
#[derive(Clone)]
pub struct AppState {
    books: Result<Arc<dyn BookRepository>, ConfigError>,
}

impl AppState {
    /// Creates a state backed by the given repository.
    pub fn new(books: Arc<dyn BookRepository>) -> Self {
        Self { books: Ok(books) }
    }

    /// Creates a state backed by an empty in-memory repository.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryRepository::new()))
    }

    /// Creates a state backed by an in-memory repository holding the demo books.
    pub fn with_demo_data() -> Self {
        Self::with_books(crate::mock_data::demo_books())
    }

    /// Creates a state backed by an in-memory repository holding `books`.
    pub fn with_books(books: impl IntoIterator<Item = Book>) -> Self {
        Self::new(Arc::new(InMemoryRepository::with_books(books)))
    }

    /// Creates a state whose every invocation fails with the given configuration error.
    pub fn misconfigured(error: ConfigError) -> Self {
        Self { books: Err(error) }
    }

    /// Builds the DynamoDB-backed state from environment variables.
    ///
    /// Never fails: a configuration error is logged here and then surfaces on
    /// every invocation.
    #[cfg(feature = "dynamodb")]
    pub async fn from_env() -> Self {
        use crate::config::Config;
        use crate::storage::DynamoDbRepository;

        match Config::from_env() {
            Ok(config) => {
                tracing::info!(target_env = %config.target_display(), "Connecting to books table");
                Self::new(Arc::new(DynamoDbRepository::connect(&config).await))
            }
            Err(error) => {
                tracing::error!(error = %error, "Books table is not configured");
                Self::misconfigured(error)
            }
        }
    }

    /// Returns the book repository, or the configuration error that prevented building it.
    pub fn books(&self) -> Result<Arc<dyn BookRepository>, ResolverError> {
        self.books.clone().map_err(ResolverError::from)
    }

    /// Returns true when a repository is available.
    pub fn is_configured(&self) -> bool {
        self.books.is_ok()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::in_memory()
    }
}
