//! Streaming chat response.

use std::pin::Pin;
use std::task::{Context, Poll};

use futures::Stream;
use futures::stream::BoxStream;
use uuid::Uuid;

use super::ChatEvent;
use crate::Result;

/// Streaming chat response.
///
/// Yields [`ChatEvent`]s in emission order; a successful stream always ends
/// with a `Done` event carrying the finalized [`ChatResponse`].
///
/// [`ChatResponse`]: super::ChatResponse
pub struct ChatStream {
    chat_id: Uuid,
    inner: BoxStream<'static, Result<ChatEvent>>,
}

impl ChatStream {
    /// Creates a new chat stream.
    pub(crate) fn new(chat_id: Uuid, inner: BoxStream<'static, Result<ChatEvent>>) -> Self {
        Self { chat_id, inner }
    }

    /// Returns the chat ID this stream answers.
    pub fn chat_id(&self) -> Uuid {
        self.chat_id
    }
}

impl Stream for ChatStream {
    type Item = Result<ChatEvent>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.get_mut().inner.as_mut().poll_next(cx)
    }
}

impl std::fmt::Debug for ChatStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatStream")
            .field("chat_id", &self.chat_id)
            .finish_non_exhaustive()
    }
}
