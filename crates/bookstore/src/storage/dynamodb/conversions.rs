//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and books.
//! These are testable in isolation without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use bookstore_core::book::Book;
use bookstore_core::storage::RepositoryError;

/// Partition key attribute of the books table.
pub const PARTITION_KEY: &str = "id";

const TITLE: &str = "title";
const COMPLETED: &str = "completed";
const RATING: &str = "rating";
const REVIEWS: &str = "reviews";

/// Key map addressing a single book.
pub fn book_key(id: &str) -> HashMap<String, AttributeValue> {
    HashMap::from([(PARTITION_KEY.to_string(), AttributeValue::S(id.to_string()))])
}

/// Convert a Book to DynamoDB item.
///
/// Absent optional fields are left out of the item rather than stored as NULL.
pub fn book_to_item(book: &Book) -> Result<HashMap<String, AttributeValue>, RepositoryError> {
    let mut item = HashMap::new();

    item.insert(
        PARTITION_KEY.to_string(),
        AttributeValue::S(book.id.clone()),
    );
    item.insert(TITLE.to_string(), AttributeValue::S(book.title.clone()));

    if let Some(completed) = book.completed {
        item.insert(COMPLETED.to_string(), AttributeValue::Bool(completed));
    }
    if let Some(rating) = book.rating {
        if !rating.is_finite() {
            return Err(RepositoryError::InvalidData(format!(
                "Rating must be a finite number, got {}",
                rating
            )));
        }
        item.insert(RATING.to_string(), AttributeValue::N(rating.to_string()));
    }
    // Stored as a list, not a string set, so order and duplicates survive.
    if let Some(reviews) = &book.reviews {
        item.insert(
            REVIEWS.to_string(),
            AttributeValue::L(reviews.iter().cloned().map(AttributeValue::S).collect()),
        );
    }

    Ok(item)
}

/// Convert a DynamoDB item to Book.
pub fn item_to_book(item: &HashMap<String, AttributeValue>) -> Result<Book, RepositoryError> {
    Ok(Book {
        id: get_string(item, PARTITION_KEY)?,
        title: get_string(item, TITLE)?,
        completed: get_optional_bool(item, COMPLETED)?,
        rating: get_optional_number(item, RATING)?,
        reviews: get_optional_string_list(item, REVIEWS)?,
    })
}

// ============================================================================
// Helper functions
// ============================================================================

/// Get an attribute, treating an explicit NULL as absent.
fn get_present<'a>(
    item: &'a HashMap<String, AttributeValue>,
    key: &str,
) -> Option<&'a AttributeValue> {
    item.get(key).filter(|v| !v.is_null())
}

fn invalid_field(key: &str) -> RepositoryError {
    RepositoryError::InvalidData(format!("Missing or invalid field: {}", key))
}

/// Get a required string attribute.
fn get_string(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<String, RepositoryError> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
        .ok_or_else(|| invalid_field(key))
}

/// Get an optional boolean attribute.
fn get_optional_bool(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<Option<bool>, RepositoryError> {
    get_present(item, key)
        .map(|v| v.as_bool().copied().map_err(|_| invalid_field(key)))
        .transpose()
}

/// Get an optional number attribute.
fn get_optional_number(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<Option<f64>, RepositoryError> {
    get_present(item, key)
        .map(|v| {
            let n = v.as_n().map_err(|_| invalid_field(key))?;
            n.parse::<f64>().map_err(|e| {
                RepositoryError::InvalidData(format!("Invalid number {}: {}", key, e))
            })
        })
        .transpose()
}

/// Get an optional list of strings.
///
/// Accepts both a list of strings and a string set. Sets carry no order, so
/// they come back in whatever order DynamoDB returned them.
fn get_optional_string_list(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<Option<Vec<String>>, RepositoryError> {
    let Some(value) = get_present(item, key) else {
        return Ok(None);
    };

    match value {
        AttributeValue::L(values) => values
            .iter()
            .map(|v| v.as_s().map(|s| s.to_string()).map_err(|_| invalid_field(key)))
            .collect::<Result<Vec<_>, _>>()
            .map(Some),
        AttributeValue::Ss(values) => Ok(Some(values.clone())),
        _ => Err(invalid_field(key)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_book() -> Book {
        Book::new("1", "The Left Hand of Darkness")
            .with_completed(true)
            .with_rating(4.5)
            .with_reviews(["Brilliant", "Slow start", "Brilliant"])
    }

    #[test]
    fn test_book_round_trip() {
        let book = sample_book();
        let item = book_to_item(&book).unwrap();
        let parsed = item_to_book(&item).unwrap();

        assert_eq!(book, parsed);
    }

    #[test]
    fn test_minimal_book_round_trip() {
        let book = Book::new("2", "Kindred");
        let item = book_to_item(&book).unwrap();

        assert_eq!(item.len(), 2);
        assert_eq!(item_to_book(&item).unwrap(), book);
    }

    #[test]
    fn test_item_has_expected_attribute_types() {
        let item = book_to_item(&sample_book()).unwrap();

        assert_eq!(item.get("id").unwrap().as_s().unwrap(), "1");
        assert_eq!(item.get("completed").unwrap().as_bool().unwrap(), &true);
        assert_eq!(item.get("rating").unwrap().as_n().unwrap(), "4.5");

        let reviews = item.get("reviews").unwrap().as_l().unwrap();
        let reviews: Vec<&str> = reviews.iter().map(|v| v.as_s().unwrap().as_str()).collect();
        assert_eq!(reviews, vec!["Brilliant", "Slow start", "Brilliant"]);
    }

    #[test]
    fn test_non_finite_rating_is_rejected() {
        let book = Book::new("3", "Blindsight").with_rating(f64::NAN);
        assert!(matches!(
            book_to_item(&book),
            Err(RepositoryError::InvalidData(_))
        ));
    }

    #[test]
    fn test_missing_title_is_invalid() {
        let item = book_key("4");
        assert_eq!(
            item_to_book(&item),
            Err(RepositoryError::InvalidData(
                "Missing or invalid field: title".to_string()
            ))
        );
    }

    #[test]
    fn test_null_attributes_read_as_absent() {
        let mut item = book_key("5");
        item.insert("title".to_string(), AttributeValue::S("Ubik".to_string()));
        item.insert("completed".to_string(), AttributeValue::Null(true));
        item.insert("rating".to_string(), AttributeValue::Null(true));
        item.insert("reviews".to_string(), AttributeValue::Null(true));

        assert_eq!(item_to_book(&item).unwrap(), Book::new("5", "Ubik"));
    }

    #[test]
    fn test_string_set_reviews_are_accepted() {
        let mut item = book_key("6");
        item.insert("title".to_string(), AttributeValue::S("Hyperion".to_string()));
        item.insert(
            "reviews".to_string(),
            AttributeValue::Ss(vec!["Epic".to_string()]),
        );

        let book = item_to_book(&item).unwrap();
        assert_eq!(book.reviews, Some(vec!["Epic".to_string()]));
    }

    #[test]
    fn test_wrong_attribute_type_is_invalid() {
        let mut item = book_key("7");
        item.insert("title".to_string(), AttributeValue::S("Anathem".to_string()));
        item.insert("rating".to_string(), AttributeValue::S("five".to_string()));

        assert!(matches!(
            item_to_book(&item),
            Err(RepositoryError::InvalidData(_))
        ));
    }

    #[test]
    fn test_integer_rating_parses() {
        let mut item = book_key("8");
        item.insert("title".to_string(), AttributeValue::S("Dune".to_string()));
        item.insert("rating".to_string(), AttributeValue::N("5".to_string()));

        assert_eq!(item_to_book(&item).unwrap().rating, Some(5.0));
    }
}
