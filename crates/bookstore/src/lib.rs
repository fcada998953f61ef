//! GraphQL book resolvers backed by a single DynamoDB table.
//!
//! The Lambda binaries in `src/bin` and the local server in `src/main.rs` are
//! thin shells over this library.

pub mod app;
pub mod config;
pub mod handlers;
pub mod lambda;
pub mod mock_data;
pub mod resolvers;
pub mod state;
pub mod storage;
pub mod telemetry;
