//! Serde structs for the JSON data payloads carried by SSE events.

use serde::Deserialize;

/// Payload of a `content` event.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ContentPayload {
    /// Text chunk to append to the streaming assistant message.
    pub content: String,
    /// Whether the turn is still streaming. Absent means "still streaming";
    /// only the `finish` event ends a turn.
    #[serde(default)]
    pub is_streaming: Option<bool>,
}

/// Payload of a `notification` event.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct NotificationPayload {
    pub message: String,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

/// Payload of an `interface` event.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct InterfacePayload {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_payload() {
        let json = r#"{"content": "Hello", "is_streaming": true}"#;
        let payload: ContentPayload = serde_json::from_str(json).unwrap();
        assert_eq!(payload.content, "Hello");
        assert_eq!(payload.is_streaming, Some(true));
    }

    #[test]
    fn test_content_payload_flag_absent() {
        let json = r#"{"content": "Hello"}"#;
        let payload: ContentPayload = serde_json::from_str(json).unwrap();
        assert_eq!(payload.content, "Hello");
        assert!(payload.is_streaming.is_none());
    }

    #[test]
    fn test_content_payload_missing_content_fails() {
        let json = r#"{"is_streaming": false}"#;
        assert!(serde_json::from_str::<ContentPayload>(json).is_err());
    }

    #[test]
    fn test_notification_payload() {
        let json = r#"{"message": "Welcome to Lisbon", "type": "arrival"}"#;
        let payload: NotificationPayload = serde_json::from_str(json).unwrap();
        assert_eq!(payload.message, "Welcome to Lisbon");
        assert_eq!(payload.kind.as_deref(), Some("arrival"));
    }

    #[test]
    fn test_notification_payload_no_type() {
        let json = r#"{"message": "Heads up"}"#;
        let payload: NotificationPayload = serde_json::from_str(json).unwrap();
        assert!(payload.kind.is_none());
    }

    #[test]
    fn test_notification_payload_extra_fields_tolerated() {
        let json = r#"{"message": "Hi", "type": "info", "priority": 3}"#;
        let payload: NotificationPayload = serde_json::from_str(json).unwrap();
        assert_eq!(payload.message, "Hi");
    }

    #[test]
    fn test_interface_payload() {
        let json = r#"{"message": "Show Info Sheet"}"#;
        let payload: InterfacePayload = serde_json::from_str(json).unwrap();
        assert_eq!(payload.message, "Show Info Sheet");
    }
}
