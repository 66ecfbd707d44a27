//! SSE event record and line classification.

/// One decoded server event.
///
/// Transient: produced by the assembler, consumed by the router, never
/// retained. The `data` payload is raw text and may itself be JSON or empty;
/// interpreting it is the receiving handler's job.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SseEvent {
    /// Event name from an `event:` line. Absent when the server sent only
    /// data lines. Consumers compare it case-insensitively.
    pub name: Option<String>,
    /// Raw payload, multiple `data:` lines joined with `\n`.
    pub data: String,
    /// Event id from an `id:` line, if any.
    pub id: Option<String>,
}

impl SseEvent {
    /// The event name lowered for dispatch-table lookup, if present.
    pub fn dispatch_name(&self) -> Option<String> {
        self.name.as_deref().map(str::to_ascii_lowercase)
    }
}

/// Classification of a single raw line from the wire.
#[derive(Debug, Clone, PartialEq)]
pub enum SseLine {
    /// Event name declaration (e.g. "event: content")
    Event(String),
    /// Data payload line (e.g. "data: {\"content\": \"hi\"}")
    Data(String),
    /// Event id line (e.g. "id: 42")
    Id(String),
    /// Empty line - end of event
    Empty,
    /// Comment line (starts with ':')
    Comment(String),
    /// Unrecognized field or colon-less line - a framing anomaly, ignored
    Malformed(String),
}

/// Classify one raw line into its SSE field type.
pub fn classify_line(line: &str) -> SseLine {
    if line.is_empty() {
        return SseLine::Empty;
    }

    if let Some(stripped) = line.strip_prefix(':') {
        return SseLine::Comment(stripped.trim().to_string());
    }

    if let Some(rest) = line.strip_prefix("event:") {
        return SseLine::Event(rest.trim().to_string());
    }

    if let Some(rest) = line.strip_prefix("data:") {
        return SseLine::Data(rest.trim().to_string());
    }

    if let Some(rest) = line.strip_prefix("id:") {
        return SseLine::Id(rest.trim().to_string());
    }

    SseLine::Malformed(line.to_string())
}
