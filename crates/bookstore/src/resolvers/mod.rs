//! Book resolvers.
//!
//! Each resolver performs exactly one store operation and returns an
//! [`Outcome`]. [`respond`] is the boundary where the outcome is logged and
//! collapsed into the nullable value the gateway receives.

pub mod create_book;
pub mod dispatch;
pub mod get_book_by_id;
pub mod list_books;

use bookstore_core::resolver::{Outcome, ResolverField};

pub use dispatch::resolve;

/// Logs an outcome and turns it into the wire value.
pub fn respond<T>(field: ResolverField, outcome: Outcome<T>) -> Option<T> {
    match &outcome {
        Outcome::Found(_) => {
            tracing::debug!(field = %field, outcome = outcome.label(), "Resolved field");
        }
        Outcome::NotFound => {
            tracing::debug!(field = %field, outcome = outcome.label(), "No matching record");
        }
        Outcome::Failed(error) => {
            tracing::error!(
                field = %field,
                outcome = outcome.label(),
                kind = error.kind(),
                error = %error,
                "Resolver failed"
            );
        }
    }

    outcome.into_response()
}
