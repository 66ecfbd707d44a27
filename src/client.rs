//! HTTP client for the guide backend.
//!
//! Both endpoints answer a JSON POST with a `text/event-stream` body. The
//! response bytes run through the line framer and event assembler, surfacing
//! as a lazy stream of `SseEvent`. Connection errors terminate the stream
//! with a single `StreamError::Transport`; no retries happen at this layer.

use std::collections::VecDeque;
use std::pin::Pin;

use futures_util::stream::{self, Stream};
use futures_util::StreamExt;
use reqwest::Client;
use serde::Serialize;

use crate::error::StreamError;
use crate::sse::{EventAssembler, LineFramer, SseEvent};

pub const GUIDE_BASE_URL: &str = "https://api.roam-guide.app";

const CHAT_STREAM_PATH: &str = "/v1/chat/stream";
const ORCHESTRATE_STREAM_PATH: &str = "/v1/orchestrate/stream";

/// A stream of assembled events from one connection.
pub type EventStream = Pin<Box<dyn Stream<Item = Result<SseEvent, StreamError>> + Send>>;

/// Request body for the chat completion endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ChatStreamRequest {
    /// Free-text user message.
    pub message: String,
    /// Device language tag (e.g. "en-US").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

impl ChatStreamRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            language: None,
            latitude: None,
            longitude: None,
        }
    }
}

/// Request body for the location orchestration endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct OrchestrateRequest {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Client for the guide backend streaming API.
pub struct GuideClient {
    /// Base URL for the backend.
    pub base_url: String,
    /// Reusable HTTP client.
    client: Client,
}

impl GuideClient {
    /// Create a client against the default base URL.
    pub fn new() -> Self {
        Self::with_base_url(GUIDE_BASE_URL.to_string())
    }

    /// Create a client against a custom base URL.
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            base_url,
            client: Client::new(),
        }
    }

    /// Open a chat completion stream.
    pub async fn chat_stream(&self, request: &ChatStreamRequest) -> Result<EventStream, StreamError> {
        self.open_stream(CHAT_STREAM_PATH, request).await
    }

    /// Open a location orchestration stream.
    pub async fn orchestrate_stream(
        &self,
        request: &OrchestrateRequest,
    ) -> Result<EventStream, StreamError> {
        self.open_stream(ORCHESTRATE_STREAM_PATH, request).await
    }

    async fn open_stream<B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<EventStream, StreamError> {
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .header("Accept", "text/event-stream")
            .json(body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(StreamError::Server { status, message });
        }

        Ok(assemble_events(response.bytes_stream()))
    }
}

impl Default for GuideClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Run a byte stream through the framer and assembler, yielding events.
///
/// The tail of the connection is not dropped: at end of stream the framer's
/// final partial line and the assembler's pending event are both flushed.
fn assemble_events<B>(bytes_stream: B) -> EventStream
where
    B: Stream<Item = Result<bytes::Bytes, reqwest::Error>> + Send + 'static,
{
    struct DecodeState {
        bytes_stream: Pin<Box<dyn Stream<Item = Result<bytes::Bytes, reqwest::Error>> + Send>>,
        framer: LineFramer,
        assembler: EventAssembler,
        ready: VecDeque<SseEvent>,
        finished: bool,
    }

    let state = DecodeState {
        bytes_stream: Box::pin(bytes_stream),
        framer: LineFramer::new(),
        assembler: EventAssembler::new(),
        ready: VecDeque::new(),
        finished: false,
    };

    let events = stream::unfold(state, |mut st| async move {
        loop {
            if let Some(event) = st.ready.pop_front() {
                return Some((Ok(event), st));
            }
            if st.finished {
                return None;
            }

            match st.bytes_stream.next().await {
                Some(Ok(chunk)) => {
                    for line in st.framer.feed(&chunk) {
                        if let Some(event) = st.assembler.feed_line(&line) {
                            st.ready.push_back(event);
                        }
                    }
                }
                Some(Err(e)) => {
                    st.finished = true;
                    return Some((Err(StreamError::Transport(e)), st));
                }
                None => {
                    st.finished = true;
                    if let Some(line) = st.framer.flush() {
                        if let Some(event) = st.assembler.feed_line(&line) {
                            st.ready.push_back(event);
                        }
                    }
                    if let Some(event) = st.assembler.flush() {
                        st.ready.push_back(event);
                    }
                }
            }
        }
    });

    Box::pin(events)
}
