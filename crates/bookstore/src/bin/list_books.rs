//! Lambda function resolving `listBooks`.

use bookstore::{lambda, resolvers::list_books::handle, state::AppState, telemetry};

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    telemetry::init_lambda();

    let state = AppState::from_env().await;

    lambda::serve(state, handle).await
}
