//! DynamoDB storage backend implementation.
//!
//! Books live in a single table whose partition key is the `id` string
//! attribute. Items are written as plain documents: no sort key, no entity
//! type marker, no secondary indexes.

mod conversions;
mod error;
mod repository;

pub use repository::DynamoDbRepository;
