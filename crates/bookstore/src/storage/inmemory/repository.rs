//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use bookstore_core::book::Book;
use bookstore_core::storage::{BookRepository, Result};

/// In-memory storage backend for testing.
///
/// Uses a HashMap wrapped in `Arc<RwLock<_>>` for thread-safe access.
/// Data is not persisted and will be lost when the repository is dropped.
#[derive(Debug, Clone)]
pub struct InMemoryRepository {
    books: Arc<RwLock<HashMap<String, Book>>>,
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            books: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Creates a repository pre-filled with the given books.
    ///
    /// Later books overwrite earlier ones with the same id.
    pub fn with_books(books: impl IntoIterator<Item = Book>) -> Self {
        let books = books
            .into_iter()
            .map(|book| (book.id.clone(), book))
            .collect();

        Self {
            books: Arc::new(RwLock::new(books)),
        }
    }
}

#[async_trait]
impl BookRepository for InMemoryRepository {
    async fn get_book(&self, id: &str) -> Result<Option<Book>> {
        let books = self.books.read().await;
        Ok(books.get(id).cloned())
    }

    async fn put_book(&self, book: &Book) -> Result<()> {
        let mut books = self.books.write().await;
        books.insert(book.id.clone(), book.clone());
        Ok(())
    }

    async fn list_books(&self) -> Result<Vec<Book>> {
        let books = self.books.read().await;
        Ok(books.values().cloned().collect())
    }
}
