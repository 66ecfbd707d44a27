//! Stream consumption and cancellation.
//!
//! One conversation owns its state plus at most one consumer task. Attaching
//! a new stream aborts the previous task before the new one starts, so the
//! accumulator never sees two concurrent writers.

use std::sync::Arc;

use futures_util::{Stream, StreamExt};
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use crate::error::StreamError;
use crate::router::{EventRouter, StreamKind};
use crate::sse::SseEvent;
use crate::state::ConversationState;

/// Drain one event stream sequentially into conversation state.
///
/// Events are handled strictly in arrival order: each one is fully dispatched
/// before the next is read, which is what makes content-before-finish
/// ordering hold. The first transport error ends the drain and is returned
/// once; per-event decode failures never surface here.
pub async fn drive_stream<S>(
    events: S,
    router: &EventRouter,
    state: &mut ConversationState,
) -> Result<(), StreamError>
where
    S: Stream<Item = Result<SseEvent, StreamError>>,
{
    futures_util::pin_mut!(events);

    while let Some(item) = events.next().await {
        match item {
            Ok(event) => router.dispatch(&event, state),
            Err(e) => return Err(e),
        }
    }
    Ok(())
}

/// A conversation context: shared state plus the current consumer task.
#[derive(Debug, Default)]
pub struct Conversation {
    state: Arc<Mutex<ConversationState>>,
    task: Option<JoinHandle<Result<(), StreamError>>>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle to the shared state, for the consuming UI layer.
    pub fn state(&self) -> Arc<Mutex<ConversationState>> {
        Arc::clone(&self.state)
    }

    /// Record a message the user sent.
    pub async fn push_user_message(&self, text: impl Into<String>) {
        self.state.lock().await.push_user_message(text);
    }

    /// Start consuming a new stream, cancelling the previous one first.
    ///
    /// For chat streams the dismiss-keyboard pulse fires as consumption
    /// begins. Must be called from within a tokio runtime.
    pub fn attach<S>(&mut self, kind: StreamKind, events: S)
    where
        S: Stream<Item = Result<SseEvent, StreamError>> + Send + 'static,
    {
        self.cancel();

        let router = EventRouter::new(kind);
        let state = Arc::clone(&self.state);

        self.task = Some(tokio::spawn(async move {
            if kind == StreamKind::Chat {
                state.lock().await.signals.dismiss_keyboard.fire();
            }

            futures_util::pin_mut!(events);
            while let Some(item) = events.next().await {
                match item {
                    // Lock per event: the handler runs synchronously, so the
                    // guard never crosses an await on the stream.
                    Ok(event) => router.dispatch(&event, &mut *state.lock().await),
                    Err(e) => {
                        tracing::warn!("stream ended with transport error: {}", e);
                        return Err(e);
                    }
                }
            }
            Ok(())
        }));
    }

    /// Abort the current consumer task, if any.
    pub fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }

    /// Wait for the current stream to finish draining.
    ///
    /// Returns `Ok(())` when there is no task or the task was aborted;
    /// aborting is expected cancellation, not a failure.
    pub async fn join(&mut self) -> Result<(), StreamError> {
        let Some(task) = self.task.take() else {
            return Ok(());
        };
        match task.await {
            Ok(result) => result,
            Err(_) => Ok(()),
        }
    }
}

impl Drop for Conversation {
    fn drop(&mut self) {
        self.cancel();
    }
}
