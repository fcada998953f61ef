use serde::{Deserialize, Serialize};

/// A book record, keyed by `id`.
///
/// The shape is shared by the GraphQL `Book` type and the `BookInput` argument
/// of `createBook`, so the same struct is used for both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: String,
    pub title: String,
    pub completed: Option<bool>,
    pub rating: Option<f64>,
    /// Reviews in the order they were written.
    pub reviews: Option<Vec<String>>,
}

impl Book {
    /// Creates a book with only the required fields set.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            completed: None,
            rating: None,
            reviews: None,
        }
    }

    /// Sets the completed flag.
    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }

    /// Sets the rating.
    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    /// Sets the reviews, keeping their order.
    pub fn with_reviews<I, S>(mut self, reviews: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.reviews = Some(reviews.into_iter().map(Into::into).collect());
        self
    }
}
