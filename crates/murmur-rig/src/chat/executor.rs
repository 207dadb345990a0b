//! Agent executor that runs the conversation loop.
//!
//! One step streams a completion, collecting text deltas and tool calls.
//! If the model requested tools, they are executed and the results appended
//! to the history before the next step. The loop ends when a step produces
//! no tool calls or the step budget runs out, then emits the final `Done`
//! event.

use futures::StreamExt;
use futures::stream::BoxStream;
use rig::completion::CompletionRequest;
use rig::message::{AssistantContent, Message, ToolResultContent, UserContent};
use rig::one_or_many::OneOrMany;
use uuid::Uuid;

use super::{ChatEvent, ChatResponse};
use crate::provider::{ChatModel, CompletionProvider, StreamFragment};
use crate::tool::{ToolCall, ToolRegistry};
use crate::{Result, TRACING_TARGET_CHAT};

/// Upper bound on agentic steps for one chat request.
pub(crate) const MAX_AGENT_STEPS: usize = 5;

/// Executor for running the agent loop.
pub(crate) struct AgentExecutor {
    provider: CompletionProvider,
    tools: ToolRegistry,
    model: ChatModel,
    preamble: String,
    history: Vec<Message>,
    account_id: Uuid,
}

impl AgentExecutor {
    /// Creates a new executor.
    pub(crate) fn new(
        provider: CompletionProvider,
        tools: ToolRegistry,
        model: ChatModel,
        preamble: String,
        history: Vec<Message>,
        account_id: Uuid,
    ) -> Self {
        Self {
            provider,
            tools,
            model,
            preamble,
            history,
            account_id,
        }
    }

    /// Runs the agent loop and returns a stream of events.
    pub(crate) fn run(self) -> BoxStream<'static, Result<ChatEvent>> {
        let Self {
            provider,
            tools,
            model,
            preamble,
            mut history,
            account_id,
        } = self;

        let tool_definitions = tools.rig_definitions();

        Box::pin(async_stream::stream! {
            let mut turns: Vec<String> = Vec::new();

            for step in 0..MAX_AGENT_STEPS {
                let request = build_request(&preamble, &history, &tool_definitions);

                let mut fragments = match provider.stream_fragments(request).await {
                    Ok(stream) => stream,
                    Err(e) => {
                        yield Err(e);
                        return;
                    }
                };

                let mut step_text = String::new();
                let mut tool_calls: Vec<rig::message::ToolCall> = Vec::new();

                while let Some(fragment) = fragments.next().await {
                    match fragment {
                        Ok(StreamFragment::TextDelta(delta)) => {
                            step_text.push_str(&delta);
                            yield Ok(ChatEvent::TextDelta { delta });
                        }
                        Ok(StreamFragment::ReasoningDelta(delta)) => {
                            yield Ok(ChatEvent::Reasoning { delta });
                        }
                        Ok(StreamFragment::ToolCall(call)) => {
                            tool_calls.push(call);
                        }
                        Ok(StreamFragment::Finished) => {}
                        Err(e) => {
                            yield Err(e);
                            return;
                        }
                    }
                }

                if !step_text.is_empty() {
                    turns.push(step_text.clone());
                }

                // Record the assistant turn (text and tool calls) so the
                // next step sees the full conversation.
                let mut assistant_content: Vec<AssistantContent> = Vec::new();
                if !step_text.is_empty() {
                    assistant_content.push(AssistantContent::text(&step_text));
                }
                for call in &tool_calls {
                    assistant_content.push(AssistantContent::ToolCall(call.clone()));
                }
                if let Ok(content) = OneOrMany::many(assistant_content) {
                    history.push(Message::Assistant { id: None, content });
                }

                if tool_calls.is_empty() {
                    break;
                }

                if step + 1 == MAX_AGENT_STEPS {
                    tracing::warn!(
                        target: TRACING_TARGET_CHAT,
                        pending_tool_calls = tool_calls.len(),
                        "Step budget exhausted with pending tool calls"
                    );
                    break;
                }

                for call in tool_calls {
                    let tool_call = ToolCall::from_rig(&call);
                    yield Ok(ChatEvent::ToolCall { call: tool_call.clone() });

                    let result = tools.execute(&tool_call, account_id).await;
                    yield Ok(ChatEvent::ToolResult { result: result.clone() });

                    history.push(Message::User {
                        content: OneOrMany::one(UserContent::tool_result(
                            call.id.clone(),
                            OneOrMany::one(ToolResultContent::text(result.to_llm_string())),
                        )),
                    });
                }
            }

            tracing::debug!(
                target: TRACING_TARGET_CHAT,
                turns = turns.len(),
                "Agent loop completed"
            );

            yield Ok(ChatEvent::Done {
                response: ChatResponse::new(model.to_string(), turns),
            });
        })
    }
}

/// Builds a completion request for one agent step.
fn build_request(
    preamble: &str,
    history: &[Message],
    tools: &[rig::completion::ToolDefinition],
) -> CompletionRequest {
    CompletionRequest {
        preamble: Some(preamble.to_string()),
        chat_history: OneOrMany::many(history.to_vec())
            .unwrap_or_else(|_| OneOrMany::one(Message::user(String::new()))),
        documents: Vec::new(),
        tools: tools.to_vec(),
        temperature: None,
        max_tokens: None,
        tool_choice: None,
        additional_params: None,
    }
}
