use bookstore_core::book::Book;

/// Generates demo books for the local server.
pub fn demo_books() -> Vec<Book> {
    vec![
        Book::new("1", "The Rust Programming Language")
            .with_completed(true)
            .with_rating(4.8)
            .with_reviews(["Thorough", "The ownership chapter finally clicked"]),
        Book::new("2", "Designing Data-Intensive Applications")
            .with_completed(false)
            .with_rating(4.9),
        Book::new("3", "Zero To Production In Rust").with_reviews(["Great on testing"]),
        Book::new("4", "The Pragmatic Programmer"),
    ]
}
