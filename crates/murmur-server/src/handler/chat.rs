//! Chat request handlers.
//!
//! The POST endpoint drives the full request lifecycle: authenticate,
//! resolve attachments in the latest user message, create the chat on its
//! first message, persist the inbound message, then stream the model
//! response back over Server-Sent Events while the finalized assistant
//! messages are persisted once generation completes.
//!
//! Clients cancel generation by closing the connection.

use std::convert::Infallible;

use aide::axum::ApiRouter;
use aide::transform::TransformOperation;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::sse::{Event, KeepAlive, Sse};
use futures::StreamExt;
use murmur_postgres::model::{NewChat, NewChatMessage};
use murmur_postgres::query::{ChatMessageRepository, ChatRepository};
use murmur_postgres::{PgClient, PgConn};
use murmur_rig::{ChatEvent, ChatRequest, ChatResponse, ChatService, ChatTurn};
use tokio_stream::wrappers::ReceiverStream;
use uuid::Uuid;

use crate::extract::{AuthSession, Json, Query, ValidateJson};
use crate::handler::request::{DeleteChatParams, SendChatMessage};
use crate::handler::response::{ChatStreamEvent, ErrorResponse};
use crate::handler::{ErrorKind, Result};
use crate::service::{IngestService, ServiceState};

/// Tracing target for chat operations.
const TRACING_TARGET: &str = "murmur_server::handler::chat";

/// Generic payload streamed to the client when generation fails.
///
/// Provider detail never reaches the client; it goes to the logs.
const STREAM_ERROR_MESSAGE: &str = "The assistant ran into a problem. Please try again.";

/// Submits a message and streams the assistant reply via SSE.
///
/// Event types on the wire: `reasoning`, `text_delta`, `tool_call`,
/// `tool_result`, `done`, `error`.
#[tracing::instrument(
    skip_all,
    fields(
        account_id = %session.account_id,
        chat_id = %request.id,
        model = %request.selected_chat_model,
    )
)]
async fn send_message(
    State(pg_client): State<PgClient>,
    State(chat_service): State<ChatService>,
    State(ingest): State<IngestService>,
    session: AuthSession,
    ValidateJson(request): ValidateJson<SendChatMessage>,
) -> Result<impl axum::response::IntoResponse> {
    tracing::debug!(target: TRACING_TARGET, "Handling chat submission");

    let Some(latest_index) = request.messages.iter().rposition(|m| m.is_user()) else {
        return Err(ErrorKind::BadRequest.with_message("No user message found in submitted history"));
    };
    let latest = &request.messages[latest_index];

    // What the model sees; the original text is what gets persisted.
    let model_content = ingest.resolve(&latest.content).await;

    let mut conn = pg_client.get_connection().await?;

    ensure_chat(&mut conn, &chat_service, &session, &request, &latest.content).await?;

    conn.create_chat_message(NewChatMessage::user(request.id, latest.content.clone()))
        .await?;

    // Return the connection to the pool before the long-lived stream starts.
    drop(conn);

    let history = request
        .messages
        .iter()
        .enumerate()
        .map(|(index, message)| ChatTurn {
            role: message.role,
            content: if index == latest_index {
                model_content.clone()
            } else {
                message.content.clone()
            },
        })
        .collect();

    let chat_stream = chat_service
        .respond(ChatRequest {
            chat_id: request.id,
            account_id: session.account_id,
            model: request.selected_chat_model,
            history,
        })
        .await?;

    let (tx, rx) = tokio::sync::mpsc::channel::<Result<Event, Infallible>>(32);

    let chat_id = request.id;
    tokio::spawn(async move {
        let mut stream = std::pin::pin!(chat_stream);

        while let Some(result) = stream.next().await {
            let event = match result {
                Ok(chat_event) => {
                    if let ChatEvent::Done { response } = &chat_event {
                        persist_assistant_turns(&pg_client, chat_id, response).await;
                    }

                    let stream_event = ChatStreamEvent::new(chat_event);
                    let event_type = stream_event.event_type();

                    match serde_json::to_string(&stream_event) {
                        Ok(json) => Event::default().event(event_type).data(json),
                        Err(e) => {
                            tracing::error!(
                                target: TRACING_TARGET,
                                chat_id = %chat_id,
                                error = %e,
                                "Failed to serialize chat event"
                            );
                            continue;
                        }
                    }
                }
                Err(e) => {
                    tracing::error!(
                        target: TRACING_TARGET,
                        chat_id = %chat_id,
                        error = %e,
                        "Chat stream failed"
                    );

                    let error_event = ChatStreamEvent::new(ChatEvent::Error {
                        message: STREAM_ERROR_MESSAGE.to_string(),
                    });
                    if let Ok(json) = serde_json::to_string(&error_event) {
                        let _ = tx.send(Ok(Event::default().event("error").data(json))).await;
                    }
                    break;
                }
            };

            // A failed send means the client disconnected (cancelled).
            if tx.send(Ok(event)).await.is_err() {
                tracing::info!(
                    target: TRACING_TARGET,
                    chat_id = %chat_id,
                    "Client disconnected, dropping chat stream"
                );
                break;
            }
        }

        tracing::debug!(
            target: TRACING_TARGET,
            chat_id = %chat_id,
            "Chat stream completed"
        );
    });

    tracing::info!(target: TRACING_TARGET, "Chat message stream started");

    Ok(Sse::new(ReceiverStream::new(rx)).keep_alive(KeepAlive::default()))
}

/// Looks up the chat, creating it with a generated title on first message.
async fn ensure_chat(
    conn: &mut PgConn,
    chat_service: &ChatService,
    session: &AuthSession,
    request: &SendChatMessage,
    first_message: &str,
) -> Result<()> {
    match conn.find_chat_by_id(request.id).await? {
        Some(chat) if !chat.is_owned_by(session.account_id) => {
            Err(ErrorKind::Forbidden.with_resource("chat"))
        }
        Some(_) => Ok(()),
        None => {
            let title = chat_service.title_or_fallback(first_message).await;

            conn.create_chat(NewChat {
                id: request.id,
                account_id: session.account_id,
                title,
            })
            .await?;

            tracing::info!(target: TRACING_TARGET, "Chat created");
            Ok(())
        }
    }
}

/// Persists the finalized assistant messages, one per agent turn.
///
/// Runs after the stream has already been delivered, so failures are
/// logged and swallowed rather than surfaced to the client.
async fn persist_assistant_turns(pg_client: &PgClient, chat_id: Uuid, response: &ChatResponse) {
    if response.is_empty() {
        return;
    }

    let messages = response
        .turns
        .iter()
        .map(|turn| NewChatMessage::assistant(chat_id, turn.clone()))
        .collect::<Vec<_>>();

    let outcome = match pg_client.get_connection().await {
        Ok(mut conn) => conn.create_chat_messages(messages).await.map(drop),
        Err(e) => Err(e),
    };

    if let Err(e) = outcome {
        tracing::error!(
            target: TRACING_TARGET,
            chat_id = %chat_id,
            error = %e,
            "Failed to persist assistant messages"
        );
    }
}

/// Deletes a chat and all of its messages.
#[tracing::instrument(skip_all, fields(account_id = %session.account_id))]
async fn delete_chat(
    State(pg_client): State<PgClient>,
    session: AuthSession,
    Query(params): Query<DeleteChatParams>,
) -> Result<StatusCode> {
    let Some(chat_id) = params.id else {
        return Err(ErrorKind::NotFound
            .with_message("Chat not found")
            .with_resource("chat"));
    };

    tracing::debug!(target: TRACING_TARGET, chat_id = %chat_id, "Deleting chat");

    let mut conn = pg_client.get_connection().await?;

    let Some(chat) = conn.find_chat_by_id(chat_id).await? else {
        return Err(ErrorKind::NotFound
            .with_message("Chat not found")
            .with_resource("chat"));
    };

    if !chat.is_owned_by(session.account_id) {
        return Err(ErrorKind::Forbidden.with_resource("chat"));
    }

    conn.delete_chat(chat_id).await?;

    tracing::info!(target: TRACING_TARGET, chat_id = %chat_id, "Chat deleted");

    Ok(StatusCode::OK)
}

fn delete_chat_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Delete chat")
        .description("Deletes a chat and all of its messages.")
        .response_with::<200, (), _>(|res| res.description("Chat deleted."))
        .response::<401, Json<ErrorResponse<'static>>>()
        .response::<403, Json<ErrorResponse<'static>>>()
        .response::<404, Json<ErrorResponse<'static>>>()
}

/// Returns a [`Router`] with all related routes.
///
/// [`Router`]: axum::routing::Router
pub fn routes() -> ApiRouter<ServiceState> {
    use aide::axum::routing::*;

    ApiRouter::new()
        .api_route("/chat", delete_with(delete_chat, delete_chat_docs))
        // SSE endpoint - uses regular axum routing as aide doesn't support
        // SSE in OpenAPI
        .route("/chat", axum::routing::post(send_message))
        .with_path_items(|item| item.tag("Chat"))
}
