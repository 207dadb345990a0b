//! Liveness monitoring handlers.

use aide::axum::ApiRouter;
use aide::transform::TransformOperation;
use axum::http::StatusCode;

use crate::extract::Json;
use crate::handler::Result;
use crate::handler::response::Health;
use crate::service::ServiceState;

/// Returns liveness of the server process.
async fn health_status() -> Result<(StatusCode, Json<Health>)> {
    Ok((StatusCode::OK, Json(Health::ok())))
}

fn health_status_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Health check")
        .description("Returns 200 while the process is serving requests.")
        .response::<200, Json<Health>>()
}

/// Returns a [`Router`] with all related routes.
///
/// [`Router`]: axum::routing::Router
pub fn routes() -> ApiRouter<ServiceState> {
    use aide::axum::routing::*;

    ApiRouter::new()
        .api_route("/health", get_with(health_status, health_status_docs))
        .with_path_items(|item| item.tag("Monitors"))
}
