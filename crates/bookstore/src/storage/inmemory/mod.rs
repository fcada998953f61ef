//! In-memory storage backend for testing.
//!
//! This module provides an in-memory implementation of the repository trait
//! that stores books in a HashMap wrapped in `Arc<RwLock<_>>`. This is useful
//! for testing and for running the local server without AWS credentials.
//!
//! # Example
//!
//! ```rust,ignore
//! use bookstore::storage::inmemory::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new();
//! // Use repo for testing...
//! ```

mod repository;

pub use repository::InMemoryRepository;
