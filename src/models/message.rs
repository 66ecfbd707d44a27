use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One message in a conversation.
///
/// Assistant messages are created by the first `content` event of a turn and
/// mutated in place (same id) by every subsequent chunk. At most one message
/// in a conversation has `is_streaming = true` at any time, and it is always
/// the most recently created assistant message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    /// Stable identity across in-place updates.
    pub id: Uuid,
    /// Accumulated text.
    pub text: String,
    /// True for messages the user typed, false for assistant messages.
    pub is_user: bool,
    /// True while the assistant turn is still producing chunks.
    pub is_streaming: bool,
    /// When the message was created.
    pub created_at: DateTime<Utc>,
}

impl ChatMessage {
    /// Create a message from the user.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            is_user: true,
            is_streaming: false,
            created_at: Utc::now(),
        }
    }

    /// Create an empty streaming assistant message for a new turn.
    pub fn streaming_assistant() -> Self {
        Self {
            id: Uuid::new_v4(),
            text: String::new(),
            is_user: false,
            is_streaming: true,
            created_at: Utc::now(),
        }
    }

    /// Append a chunk in place. O(1) amortized; the message keeps its id.
    pub fn append_chunk(&mut self, chunk: &str) {
        self.text.push_str(chunk);
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message() {
        let msg = ChatMessage::user("where am I?");
        assert!(msg.is_user);
        assert!(!msg.is_streaming);
        assert_eq!(msg.text, "where am I?");
    }

    #[test]
    fn test_streaming_assistant_message() {
        let msg = ChatMessage::streaming_assistant();
        assert!(!msg.is_user);
        assert!(msg.is_streaming);
        assert!(msg.text.is_empty());
    }

    #[test]
    fn test_append_chunk_keeps_identity() {
        let mut msg = ChatMessage::streaming_assistant();
        let id = msg.id;
        msg.append_chunk("Hel");
        msg.append_chunk("lo");
        assert_eq!(msg.text, "Hello");
        assert_eq!(msg.id, id);
    }

    #[test]
    fn test_distinct_ids() {
        let a = ChatMessage::streaming_assistant();
        let b = ChatMessage::streaming_assistant();
        assert_ne!(a.id, b.id);
    }
}
