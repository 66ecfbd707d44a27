//! Event assembler: groups logical lines into complete `SseEvent`s.
//!
//! Framing rules:
//! - `event:` sets the pending name, `data:` appends a payload line (multiple
//!   `data:` lines join with `\n`), `id:` sets the id
//! - an empty line emits the pending event and resets the buffer
//! - comments and malformed lines are ignored, never fatal
//! - end of stream with a non-empty buffer emits one final event via `flush`

use crate::sse::events::{classify_line, SseEvent, SseLine};

/// Stateful assembler that accumulates lines and emits complete events.
#[derive(Debug, Default)]
pub struct EventAssembler {
    pending_name: Option<String>,
    pending_id: Option<String>,
    data_lines: Vec<String>,
}

impl EventAssembler {
    /// Create a new assembler with an empty event buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one logical line, returning a complete event when the line
    /// terminates one.
    pub fn feed_line(&mut self, line: &str) -> Option<SseEvent> {
        match classify_line(line) {
            SseLine::Event(name) => {
                self.pending_name = Some(name);
                None
            }
            SseLine::Data(data) => {
                self.data_lines.push(data);
                None
            }
            SseLine::Id(id) => {
                self.pending_id = Some(id);
                None
            }
            SseLine::Empty => self.take_pending(),
            SseLine::Comment(_) => None,
            SseLine::Malformed(raw) => {
                tracing::debug!("ignoring malformed SSE line: {:?}", raw);
                None
            }
        }
    }

    /// Emit the pending event at end of stream, if any fields were buffered.
    ///
    /// A connection that closes mid-event must not silently drop the buffered
    /// tail.
    pub fn flush(&mut self) -> Option<SseEvent> {
        self.take_pending()
    }

    /// Reset the buffer without emitting.
    pub fn reset(&mut self) {
        self.pending_name = None;
        self.pending_id = None;
        self.data_lines.clear();
    }

    fn take_pending(&mut self) -> Option<SseEvent> {
        if self.pending_name.is_none() && self.pending_id.is_none() && self.data_lines.is_empty() {
            return None;
        }

        let event = SseEvent {
            name: self.pending_name.take(),
            data: self.data_lines.join("\n"),
            id: self.pending_id.take(),
        };
        self.data_lines.clear();
        Some(event)
    }
}
