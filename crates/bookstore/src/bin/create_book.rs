//! Lambda function resolving `createBook`.

use bookstore::{lambda, resolvers::create_book::handle, state::AppState, telemetry};

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    telemetry::init_lambda();

    let state = AppState::from_env().await;

    lambda::serve(state, handle).await
}
