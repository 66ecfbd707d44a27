//! Event router: maps decoded SSE events to state mutations.
//!
//! Each logical stream gets its own router with its own dispatch table. The
//! chat channel recognizes `notification`, `content`, `finish`, `map` and
//! `interface`; the orchestration channel currently recognizes `map` only.
//! Dispatch is strictly sequential: one event is fully handled, including
//! payload parsing and the resulting mutation, before the next is read.
//!
//! A decode failure in one handler drops that event's effect and nothing
//! else; one bad event must never abort the stream.

use crate::error::DecodeError;
use crate::features;
use crate::json;
use crate::models::NotificationData;
use crate::sse::payloads::{ContentPayload, InterfacePayload, NotificationPayload};
use crate::sse::SseEvent;
use crate::state::ConversationState;

/// Interface command that reveals the full detail panel, compared
/// case-insensitively.
const SHOW_INFO_SHEET: &str = "show info sheet";

/// Which backend channel a router serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamKind {
    /// Chat completion stream.
    Chat,
    /// Location orchestration stream.
    Orchestration,
}

impl StreamKind {
    /// Event names this channel's dispatch table recognizes.
    pub fn recognizes(&self, name: &str) -> bool {
        match self {
            StreamKind::Chat => matches!(
                name,
                "notification" | "content" | "finish" | "map" | "interface"
            ),
            StreamKind::Orchestration => name == "map",
        }
    }
}

/// Per-stream dispatcher applying events to shared conversation state.
#[derive(Debug, Clone, Copy)]
pub struct EventRouter {
    kind: StreamKind,
}

impl EventRouter {
    /// Create a router for one logical stream.
    pub fn new(kind: StreamKind) -> Self {
        Self { kind }
    }

    pub fn kind(&self) -> StreamKind {
        self.kind
    }

    /// Handle one event. Unknown and anonymous events are logged and
    /// dropped; handler decode failures are contained here.
    pub fn dispatch(&self, event: &SseEvent, state: &mut ConversationState) {
        let Some(name) = event.dispatch_name() else {
            tracing::debug!("dropping anonymous event ({} bytes)", event.data.len());
            return;
        };

        if !self.kind.recognizes(&name) {
            tracing::warn!("dropping unrecognized event {:?} on {:?} stream", name, self.kind);
            return;
        }

        let result = match name.as_str() {
            "content" => handle_content(&event.data, state),
            "finish" => {
                state.apply_finish();
                Ok(())
            }
            "notification" => handle_notification(&event.data, state),
            "map" => handle_map(&event.data, state),
            "interface" => handle_interface(&event.data, state),
            // recognizes() gates the names above.
            _ => Ok(()),
        };

        if let Err(e) = result {
            tracing::warn!("dropping {} event: {}", name, e);
        }
    }
}

fn handle_content(data: &str, state: &mut ConversationState) -> Result<(), DecodeError> {
    let payload: ContentPayload =
        serde_json::from_str(data).map_err(|e| DecodeError::InvalidJson(e.to_string()))?;
    state.apply_content(&payload.content, payload.is_streaming);
    Ok(())
}

fn handle_notification(data: &str, state: &mut ConversationState) -> Result<(), DecodeError> {
    let payload: NotificationPayload =
        serde_json::from_str(data).map_err(|e| DecodeError::InvalidJson(e.to_string()))?;
    state.set_notification(NotificationData {
        kind: payload.kind,
        message: payload.message,
    });
    Ok(())
}

fn handle_map(data: &str, state: &mut ConversationState) -> Result<(), DecodeError> {
    let value = json::parse(data)?;
    let extracted = features::extract(&value)?;

    // Zero usable records is advisory: keep whatever the map already shows.
    if extracted.is_empty() {
        tracing::debug!("map payload decoded to zero features, keeping previous set");
        return Ok(());
    }

    state.replace_features(extracted);
    Ok(())
}

fn handle_interface(data: &str, state: &mut ConversationState) -> Result<(), DecodeError> {
    let payload: InterfacePayload =
        serde_json::from_str(data).map_err(|e| DecodeError::InvalidJson(e.to_string()))?;

    if payload.message.eq_ignore_ascii_case(SHOW_INFO_SHEET) {
        state.signals.reveal_detail_panel.fire();
    } else {
        // Forward-compatible no-op for commands this client predates.
        tracing::debug!("ignoring interface command {:?}", payload.message);
    }
    Ok(())
}
