use super::ResolverError;

/// Result of a single resolver invocation before it reaches the wire.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Found(T),
    NotFound,
    Failed(ResolverError),
}

impl<T> Outcome<T> {
    /// Builds an outcome from a point lookup.
    pub fn from_lookup(result: Result<Option<T>, ResolverError>) -> Self {
        match result {
            Ok(Some(value)) => Outcome::Found(value),
            Ok(None) => Outcome::NotFound,
            Err(error) => Outcome::Failed(error),
        }
    }

    /// Short label for structured logs.
    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Found(_) => "found",
            Outcome::NotFound => "not_found",
            Outcome::Failed(_) => "failed",
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Outcome::Found(_))
    }

    /// The error, if the invocation failed.
    pub fn error(&self) -> Option<&ResolverError> {
        match self {
            Outcome::Failed(error) => Some(error),
            _ => None,
        }
    }

    /// Maps the found value, leaving the other variants untouched.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Outcome::Found(value) => Outcome::Found(f(value)),
            Outcome::NotFound => Outcome::NotFound,
            Outcome::Failed(error) => Outcome::Failed(error),
        }
    }

    /// Collapses the outcome into the wire value: the found value or `None`.
    pub fn into_response(self) -> Option<T> {
        match self {
            Outcome::Found(value) => Some(value),
            Outcome::NotFound | Outcome::Failed(_) => None,
        }
    }
}

impl<T> From<Result<T, ResolverError>> for Outcome<T> {
    fn from(result: Result<T, ResolverError>) -> Self {
        match result {
            Ok(value) => Outcome::Found(value),
            Err(error) => Outcome::Failed(error),
        }
    }
}
