//! Document suggestion handlers.

use aide::axum::ApiRouter;
use aide::transform::TransformOperation;
use axum::extract::State;
use axum::http::StatusCode;
use murmur_postgres::PgClient;
use murmur_postgres::query::{DocumentRepository, SuggestionRepository};

use crate::extract::{AuthSession, Json, Query};
use crate::handler::request::SuggestionsParams;
use crate::handler::response::{ErrorResponse, Suggestion};
use crate::handler::{ErrorKind, Result};
use crate::service::ServiceState;

/// Tracing target for suggestion operations.
const TRACING_TARGET: &str = "murmur_server::handler::suggestions";

/// Returns the suggestions attached to a document.
///
/// Access requires the session account to own the document.
#[tracing::instrument(skip_all, fields(account_id = %session.account_id))]
async fn get_suggestions(
    State(pg_client): State<PgClient>,
    session: AuthSession,
    Query(params): Query<SuggestionsParams>,
) -> Result<(StatusCode, Json<Vec<Suggestion>>)> {
    let Some(document_id) = params.document_id else {
        return Err(ErrorKind::NotFound
            .with_message("Document not found")
            .with_resource("document"));
    };

    tracing::debug!(
        target: TRACING_TARGET,
        document_id = %document_id,
        "Listing document suggestions"
    );

    let mut conn = pg_client.get_connection().await?;

    let Some(document) = conn.find_document_by_id(document_id).await? else {
        return Err(ErrorKind::NotFound
            .with_message("Document not found")
            .with_resource("document"));
    };

    if !document.is_owned_by(session.account_id) {
        return Err(ErrorKind::Unauthorized.with_message("You do not own this document"));
    }

    let suggestions = conn.list_document_suggestions(document_id).await?;

    tracing::debug!(
        target: TRACING_TARGET,
        document_id = %document_id,
        suggestion_count = suggestions.len(),
        "Document suggestions listed"
    );

    let response = suggestions
        .into_iter()
        .map(Suggestion::from_model)
        .collect::<Vec<_>>();

    Ok((StatusCode::OK, Json(response)))
}

fn get_suggestions_docs(op: TransformOperation) -> TransformOperation {
    op.summary("List suggestions")
        .description("Lists the suggestions attached to a document owned by the caller.")
        .response::<200, Json<Vec<Suggestion>>>()
        .response::<401, Json<ErrorResponse<'static>>>()
        .response::<404, Json<ErrorResponse<'static>>>()
}

/// Returns a [`Router`] with all related routes.
///
/// [`Router`]: axum::routing::Router
pub fn routes() -> ApiRouter<ServiceState> {
    use aide::axum::routing::*;

    ApiRouter::new()
        .api_route("/suggestions", get_with(get_suggestions, get_suggestions_docs))
        .with_path_items(|item| item.tag("Suggestions"))
}
