//! DynamoDB repository implementation.
//!
//! Implements the repository trait from `bookstore_core::storage` using DynamoDB.

use async_trait::async_trait;
use aws_sdk_dynamodb::Client;

use bookstore_core::book::Book;
use bookstore_core::storage::{BookRepository, Result};

use super::conversions::{book_key, book_to_item, item_to_book};
use super::error::{map_get_item_error, map_put_item_error, map_scan_error};
use crate::config::Config;

/// DynamoDB-based repository implementation.
///
/// The SDK client is cheap to clone and holds the connection pool, so one
/// repository is built per process and shared by every invocation.
#[derive(Debug, Clone)]
pub struct DynamoDbRepository {
    client: Client,
    table_name: String,
}

impl DynamoDbRepository {
    /// Creates a new repository with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Creates a new repository from the resolved configuration.
    ///
    /// Uses the AWS SDK default credential chain. The endpoint and region are
    /// only overridden when the configuration sets them.
    pub async fn connect(config: &Config) -> Self {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());

        if let Some(region) = &config.region {
            loader = loader.region(aws_config::Region::new(region.clone()));
        }
        if let Some(endpoint) = &config.endpoint_url {
            loader = loader.endpoint_url(endpoint);
        }

        let sdk_config = loader.load().await;
        Self::new(Client::new(&sdk_config), config.books_table.clone())
    }

    /// Get the table name.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

#[async_trait]
impl BookRepository for DynamoDbRepository {
    async fn get_book(&self, id: &str) -> Result<Option<Book>> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .set_key(Some(book_key(id)))
            .send()
            .await
            .map_err(map_get_item_error)?;

        match result.item {
            Some(item) => Ok(Some(item_to_book(&item)?)),
            None => Ok(None),
        }
    }

    async fn put_book(&self, book: &Book) -> Result<()> {
        let item = book_to_item(book)?;

        // Unconditional put: an existing book with the same id is replaced.
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .send()
            .await
            .map_err(map_put_item_error)?;

        Ok(())
    }

    async fn list_books(&self) -> Result<Vec<Book>> {
        let mut books = Vec::new();
        let mut start_key = None;

        // A single Scan call stops at 1 MB, so follow LastEvaluatedKey to the end.
        loop {
            let page = self
                .client
                .scan()
                .table_name(&self.table_name)
                .set_exclusive_start_key(start_key)
                .send()
                .await
                .map_err(map_scan_error)?;

            for item in page.items.unwrap_or_default() {
                books.push(item_to_book(&item)?);
            }

            match page.last_evaluated_key {
                Some(key) if !key.is_empty() => start_key = Some(key),
                _ => break,
            }
        }

        tracing::debug!(table = %self.table_name, count = books.len(), "Scanned books table");

        Ok(books)
    }
}
