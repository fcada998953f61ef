use async_trait::async_trait;

use crate::book::Book;

use super::Result;

/// Repository for book records in a single key-value table.
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Gets a book by its ID.
    async fn get_book(&self, id: &str) -> Result<Option<Book>>;

    /// Writes a book under its ID, replacing any existing record.
    async fn put_book(&self, book: &Book) -> Result<()>;

    /// Returns every book in the table, in store order.
    async fn list_books(&self) -> Result<Vec<Book>>;
}
