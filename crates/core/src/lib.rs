//! Functional core for the bookstore resolvers.
//!
//! Everything in this crate is pure data or pure functions. The AWS clients,
//! the Lambda runtime and the local HTTP server live in the `bookstore` crate.

pub mod book;
pub mod resolver;
pub mod storage;
