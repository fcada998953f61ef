//! Lambda function resolving `getBookById`.

use bookstore::{lambda, resolvers::get_book_by_id::handle, state::AppState, telemetry};

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    telemetry::init_lambda();

    let state = AppState::from_env().await;

    lambda::serve(state, handle).await
}
