use std::fmt;

/// The GraphQL fields backed by a book resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolverField {
    CreateBook,
    GetBookById,
    ListBooks,
    /// Wired in the schema, but its contract was never settled.
    UpdateBook,
}

impl ResolverField {
    /// Every field, in schema order.
    pub const ALL: [ResolverField; 4] = [
        ResolverField::GetBookById,
        ResolverField::ListBooks,
        ResolverField::CreateBook,
        ResolverField::UpdateBook,
    ];

    /// Looks up a field by its parent type and field name.
    pub fn parse(parent_type_name: &str, field_name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| {
            field.parent_type_name() == parent_type_name && field.field_name() == field_name
        })
    }

    /// `Query` or `Mutation`.
    pub fn parent_type_name(&self) -> &'static str {
        match self {
            ResolverField::GetBookById | ResolverField::ListBooks => "Query",
            ResolverField::CreateBook | ResolverField::UpdateBook => "Mutation",
        }
    }

    /// Field name as written in the schema.
    pub fn field_name(&self) -> &'static str {
        match self {
            ResolverField::CreateBook => "createBook",
            ResolverField::GetBookById => "getBookById",
            ResolverField::ListBooks => "listBooks",
            ResolverField::UpdateBook => "updateBook",
        }
    }
}

impl fmt::Display for ResolverField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.parent_type_name(), self.field_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_fields() {
        assert_eq!(
            ResolverField::parse("Mutation", "createBook"),
            Some(ResolverField::CreateBook)
        );
        assert_eq!(
            ResolverField::parse("Query", "getBookById"),
            Some(ResolverField::GetBookById)
        );
        assert_eq!(
            ResolverField::parse("Query", "listBooks"),
            Some(ResolverField::ListBooks)
        );
        assert_eq!(
            ResolverField::parse("Mutation", "updateBook"),
            Some(ResolverField::UpdateBook)
        );
    }

    #[test]
    fn test_parse_requires_matching_parent_type() {
        assert_eq!(ResolverField::parse("Query", "createBook"), None);
        assert_eq!(ResolverField::parse("Mutation", "listBooks"), None);
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert_eq!(ResolverField::parse("query", "listBooks"), None);
        assert_eq!(ResolverField::parse("Query", "ListBooks"), None);
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for field in ResolverField::ALL {
            let display = field.to_string();
            let (parent, name) = display.split_once('.').unwrap();
            assert_eq!(ResolverField::parse(parent, name), Some(field));
        }
    }
}
