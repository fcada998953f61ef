//! `Query.getBookById`: point lookup by id.

use bookstore_core::book::{Book, GetBookByIdArgs};
use bookstore_core::resolver::{Outcome, ResolverError, ResolverEvent, ResolverField};

use super::respond;
use crate::state::AppState;

/// Looks up a single book. A missing book is [`Outcome::NotFound`], not a failure.
pub async fn get_book_by_id(state: &AppState, args: GetBookByIdArgs) -> Outcome<Book> {
    Outcome::from_lookup(lookup(state, &args.book_id).await)
}

async fn lookup(state: &AppState, book_id: &str) -> Result<Option<Book>, ResolverError> {
    let books = state.books()?;
    Ok(books.get_book(book_id).await?)
}

/// Resolves a `getBookById` event into its wire value.
pub async fn handle(state: AppState, event: ResolverEvent) -> Option<Book> {
    let field = ResolverField::GetBookById;
    let outcome = match event.arguments_as::<GetBookByIdArgs>(field) {
        Ok(args) => get_book_by_id(&state, args).await,
        Err(error) => Outcome::Failed(error),
    };

    respond(field, outcome)
}
