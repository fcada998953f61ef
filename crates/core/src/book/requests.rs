//! Argument shapes for the book resolvers.
//!
//! These mirror the GraphQL field arguments one to one. The gateway already
//! validated them against the schema, so no further validation happens here.

use serde::{Deserialize, Serialize};

use super::Book;

/// Arguments of `Mutation.createBook(book: BookInput!)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateBookArgs {
    pub book: Book,
}

/// Arguments of `Query.getBookById(bookId: ID!)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetBookByIdArgs {
    pub book_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_get_book_by_id_args_uses_camel_case() {
        let args: GetBookByIdArgs = serde_json::from_value(json!({ "bookId": "42" })).unwrap();
        assert_eq!(args.book_id, "42");
    }

    #[test]
    fn test_get_book_by_id_args_rejects_snake_case() {
        let result = serde_json::from_value::<GetBookByIdArgs>(json!({ "book_id": "42" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_create_book_args_nests_book() {
        let args: CreateBookArgs = serde_json::from_value(json!({
            "book": { "id": "1", "title": "Dune", "rating": 5 }
        }))
        .unwrap();

        assert_eq!(args.book, Book::new("1", "Dune").with_rating(5.0));
    }
}
