//! AppSync direct Lambda resolver event.
//!
//! Only `arguments` and `info` are read. The rest of the payload (`identity`,
//! `source`, `request`, `prev`, `stash`) is accepted and ignored.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{ResolverError, ResolverField};

/// Metadata about the GraphQL field being resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolverInfo {
    #[serde(default)]
    pub field_name: String,
    #[serde(default)]
    pub parent_type_name: String,
}

/// The payload a resolver function receives from the gateway.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolverEvent {
    #[serde(default)]
    pub arguments: Value,
    #[serde(default)]
    pub info: ResolverInfo,
}

impl ResolverEvent {
    /// Creates an event for the given parent type and field.
    pub fn new(
        parent_type_name: impl Into<String>,
        field_name: impl Into<String>,
        arguments: Value,
    ) -> Self {
        Self {
            arguments,
            info: ResolverInfo {
                field_name: field_name.into(),
                parent_type_name: parent_type_name.into(),
            },
        }
    }

    /// Creates an event addressed to a known field.
    pub fn for_field(field: ResolverField, arguments: Value) -> Self {
        Self::new(field.parent_type_name(), field.field_name(), arguments)
    }

    /// Resolves `info` to a known field.
    pub fn field(&self) -> Result<ResolverField, ResolverError> {
        ResolverField::parse(&self.info.parent_type_name, &self.info.field_name).ok_or_else(
            || {
                ResolverError::UnknownField(format!(
                    "{}.{}",
                    self.info.parent_type_name, self.info.field_name
                ))
            },
        )
    }

    /// Deserializes `arguments` into the shape a field expects.
    pub fn arguments_as<A: DeserializeOwned>(&self, field: ResolverField) -> Result<A, ResolverError> {
        serde_json::from_value(self.arguments.clone()).map_err(|e| {
            ResolverError::InvalidArguments {
                field: field.to_string(),
                message: e.to_string(),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::book::GetBookByIdArgs;
    use serde_json::json;

    #[test]
    fn test_deserialize_appsync_payload() {
        let event: ResolverEvent = serde_json::from_value(json!({
            "arguments": { "bookId": "1" },
            "identity": null,
            "source": null,
            "request": { "headers": { "x-api-key": "redacted" } },
            "prev": null,
            "info": {
                "selectionSetList": ["id", "title"],
                "selectionSetGraphQL": "{ id title }",
                "parentTypeName": "Query",
                "fieldName": "getBookById",
                "variables": {}
            },
            "stash": {}
        }))
        .unwrap();

        assert_eq!(event.field().unwrap(), ResolverField::GetBookById);
        let args: GetBookByIdArgs = event.arguments_as(ResolverField::GetBookById).unwrap();
        assert_eq!(args.book_id, "1");
    }

    #[test]
    fn test_missing_arguments_default_to_null() {
        let event: ResolverEvent = serde_json::from_value(json!({
            "info": { "parentTypeName": "Query", "fieldName": "listBooks" }
        }))
        .unwrap();

        assert_eq!(event.arguments, Value::Null);
        assert_eq!(event.field().unwrap(), ResolverField::ListBooks);
    }

    #[test]
    fn test_unknown_field_is_an_error() {
        let event = ResolverEvent::new("Query", "listAuthors", Value::Null);

        assert_eq!(
            event.field(),
            Err(ResolverError::UnknownField("Query.listAuthors".to_string()))
        );
    }

    #[test]
    fn test_malformed_arguments_are_invalid() {
        let event = ResolverEvent::for_field(ResolverField::GetBookById, json!({ "id": "1" }));

        let result = event.arguments_as::<GetBookByIdArgs>(ResolverField::GetBookById);
        assert!(matches!(
            result,
            Err(ResolverError::InvalidArguments { ref field, .. }) if field == "Query.getBookById"
        ));
    }
}
