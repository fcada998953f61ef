//! `Query.listBooks`: unbounded scan of the whole table.

use bookstore_core::book::Book;
use bookstore_core::resolver::{Outcome, ResolverError, ResolverEvent, ResolverField};

use super::respond;
use crate::state::AppState;

/// Returns every book. An empty table is `Found(vec![])`, never `NotFound`.
pub async fn list_books(state: &AppState) -> Outcome<Vec<Book>> {
    scan(state).await.into()
}

async fn scan(state: &AppState) -> Result<Vec<Book>, ResolverError> {
    let books = state.books()?;
    Ok(books.list_books().await?)
}

/// Resolves a `listBooks` event into its wire value. Arguments are ignored.
pub async fn handle(state: AppState, _event: ResolverEvent) -> Option<Vec<Book>> {
    respond(ResolverField::ListBooks, list_books(&state).await)
}
