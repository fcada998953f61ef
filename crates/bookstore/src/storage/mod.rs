//! Storage backend implementations.
//!
//! This module provides concrete implementations of the repository trait
//! defined in `bookstore_core::storage`.
//!
//! # Feature Flags
//!
//! - `dynamodb` (default): AWS DynamoDB backend using `aws-sdk-dynamodb`
//!
//! The in-memory backend is always available. The local server and the tests
//! use it.

#[cfg(feature = "dynamodb")]
pub mod dynamodb;

pub mod inmemory;

#[cfg(feature = "dynamodb")]
pub use dynamodb::DynamoDbRepository;

pub use inmemory::InMemoryRepository;
