use std::time::Duration;

use axum::{
    http::{header, Method, StatusCode},
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    handlers::{
        health::livez,
        resolve::{resolve_event, resolve_field},
    },
    state::AppState,
};

/// Create the local server router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/livez", get(livez))
        .route("/resolve", post(resolve_event))
        .route("/resolve/{parent_type}/{field}", post(resolve_field))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(10),
        ))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigError, BOOKS_TABLE};
    use axum::{body::Body, http::Request};
    use bookstore_core::book::Book;
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("Content-Type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json = serde_json::from_slice(&body).unwrap_or(Value::Null);

        (status, json)
    }

    #[tokio::test]
    async fn test_livez() {
        let app = create_app(AppState::default());

        let response = app
            .oneshot(Request::builder().uri("/livez").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_create_and_get_book() {
        let app = create_app(AppState::default());

        let (status, created) = post_json(
            app.clone(),
            "/resolve/Mutation/createBook",
            json!({ "book": { "id": "1", "title": "Dune", "rating": 4.5 } }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(created["title"], "Dune");

        let (status, fetched) = post_json(
            app,
            "/resolve",
            json!({
                "arguments": { "bookId": "1" },
                "info": { "parentTypeName": "Query", "fieldName": "getBookById" }
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_get_nonexistent_book_is_null() {
        let app = create_app(AppState::default());

        let (status, body) =
            post_json(app, "/resolve/Query/getBookById", json!({ "bookId": "nope" })).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, Value::Null);
    }

    #[tokio::test]
    async fn test_list_books_without_body() {
        let app = create_app(AppState::with_books([
            Book::new("1", "Dune"),
            Book::new("2", "Ubik"),
        ]));

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/resolve/Query/listBooks")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let books: Vec<Book> = serde_json::from_slice(&body).unwrap();
        assert_eq!(books.len(), 2);
    }

    #[tokio::test]
    async fn test_misconfigured_state_returns_null() {
        let app = create_app(AppState::misconfigured(ConfigError::MissingVar(
            BOOKS_TABLE,
        )));

        let (status, body) = post_json(app, "/resolve/Query/listBooks", json!({})).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, Value::Null);
    }

    #[tokio::test]
    async fn test_unknown_field_is_not_found() {
        let app = create_app(AppState::default());

        let (status, _) = post_json(app, "/resolve/Query/listAuthors", json!({})).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_malformed_arguments_are_bad_request() {
        let app = create_app(AppState::default());

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/resolve/Query/getBookById")
                    .body(Body::from("{not json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
