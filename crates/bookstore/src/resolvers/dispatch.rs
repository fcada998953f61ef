//! Routes a resolver event to the handler for its `info` field.

use bookstore_core::book::Book;
use bookstore_core::resolver::{Outcome, ResolverError, ResolverEvent, ResolverField};
use serde::Serialize;
use serde_json::Value;

use super::{create_book, get_book_by_id, list_books, respond};
use crate::state::AppState;

/// Resolves any book field and returns the JSON the gateway receives.
///
/// Unknown fields and `updateBook` resolve to `null` with an error log.
pub async fn resolve(state: AppState, event: ResolverEvent) -> Value {
    let field = match event.field() {
        Ok(field) => field,
        Err(error) => {
            tracing::error!(kind = error.kind(), error = %error, "Cannot route resolver event");
            return Value::Null;
        }
    };

    match field {
        ResolverField::CreateBook => to_wire(create_book::handle(state, event).await),
        ResolverField::GetBookById => to_wire(get_book_by_id::handle(state, event).await),
        ResolverField::ListBooks => to_wire(list_books::handle(state, event).await),
        // Merge or replace semantics were never settled, so nothing is written.
        ResolverField::UpdateBook => to_wire(respond::<Book>(
            field,
            Outcome::Failed(ResolverError::Unsupported(field.to_string())),
        )),
    }
}

fn to_wire<T: Serialize>(value: Option<T>) -> Value {
    serde_json::to_value(value).unwrap_or_else(|error| {
        tracing::error!(error = %error, "Failed to serialize resolver result");
        Value::Null
    })
}
