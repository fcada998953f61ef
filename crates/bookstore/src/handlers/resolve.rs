//! Resolver endpoints for the local server.
//!
//! These stand in for the GraphQL gateway: they accept the same event the
//! gateway would send to Lambda and answer with the same JSON. Failures are
//! `200 null`, exactly as a client of the real API would see them.

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;

use bookstore_core::resolver::{ResolverEvent, ResolverField};

use crate::{handlers::AppError, resolvers, state::AppState};

/// Resolve a full gateway event (POST /resolve).
pub async fn resolve_event(
    State(state): State<AppState>,
    Json(event): Json<ResolverEvent>,
) -> Json<Value> {
    Json(resolvers::resolve(state, event).await)
}

/// Resolve a field given only its arguments (POST /resolve/{parent_type}/{field}).
///
/// An empty body means no arguments. Fields outside the schema are 404, the
/// way the gateway rejects them before any resolver runs.
pub async fn resolve_field(
    State(state): State<AppState>,
    Path((parent_type, field_name)): Path<(String, String)>,
    body: Bytes,
) -> Result<Response, AppError> {
    let Some(field) = ResolverField::parse(&parent_type, &field_name) else {
        tracing::warn!(parent_type = %parent_type, field = %field_name, "Unknown field");
        return Ok((
            StatusCode::NOT_FOUND,
            format!("Unknown field: {parent_type}.{field_name}"),
        )
            .into_response());
    };

    let arguments = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body)?
    };

    let event = ResolverEvent::for_field(field, arguments);
    Ok(Json(resolvers::resolve(state, event).await).into_response())
}
