//! Lambda function resolving every book field, routed by `info.fieldName`.

use bookstore::{lambda, resolvers, state::AppState, telemetry};

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    telemetry::init_lambda();

    let state = AppState::from_env().await;

    lambda::serve(state, resolvers::resolve).await
}
