//! `Mutation.createBook`: writes the whole book, replacing any record with the same id.

use bookstore_core::book::{Book, CreateBookArgs};
use bookstore_core::resolver::{Outcome, ResolverError, ResolverEvent, ResolverField};

use super::respond;
use crate::state::AppState;

/// Stores `args.book` verbatim and echoes it back.
pub async fn create_book(state: &AppState, args: CreateBookArgs) -> Outcome<Book> {
    put(state, args.book).await.into()
}

async fn put(state: &AppState, book: Book) -> Result<Book, ResolverError> {
    let books = state.books()?;
    books.put_book(&book).await?;

    tracing::info!(book_id = %book.id, title = %book.title, "Stored book");

    Ok(book)
}

/// Resolves a `createBook` event into its wire value.
pub async fn handle(state: AppState, event: ResolverEvent) -> Option<Book> {
    let field = ResolverField::CreateBook;
    let outcome = match event.arguments_as::<CreateBookArgs>(field) {
        Ok(args) => create_book(&state, args).await,
        Err(error) => Outcome::Failed(error),
    };

    respond(field, outcome)
}
