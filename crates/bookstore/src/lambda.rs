//! Lambda runtime glue.
//!
//! Every Lambda binary shares one event loop: deserialize the resolver event,
//! hand it to a resolver together with the shared state, and return whatever
//! the resolver produced. Resolvers never fail the invocation, so the gateway
//! always receives a value (possibly `null`) instead of an invocation error.

use std::future::Future;

use bookstore_core::resolver::ResolverEvent;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde::Serialize;

use crate::state::AppState;

/// Runs the Lambda event loop until the runtime shuts the process down.
pub async fn serve<F, Fut, T>(state: AppState, resolver: F) -> Result<(), Error>
where
    F: Fn(AppState, ResolverEvent) -> Fut,
    Fut: Future<Output = T>,
    T: Serialize,
{
    let state = &state;
    let resolver = &resolver;

    lambda_runtime::run(service_fn(
        move |event: LambdaEvent<ResolverEvent>| async move {
            let (payload, context) = event.into_parts();

            tracing::debug!(
                request_id = %context.request_id,
                parent_type = %payload.info.parent_type_name,
                field = %payload.info.field_name,
                "Received resolver event"
            );

            Ok::<T, Error>(resolver(state.clone(), payload).await)
        },
    ))
    .await
}
