//! Error types for stream consumption and payload decoding.
//!
//! Two severities exist and they never mix: `StreamError` is terminal for one
//! stream operation and is surfaced once to the initiating caller;
//! `DecodeError` is contained within a single event's handling - the router
//! logs it, drops that event's effect, and keeps draining.

use thiserror::Error;

/// Terminal failure of a whole stream operation.
///
/// No retries are attempted at this layer; a caller that wants resilience
/// opens a new logical conversation.
#[derive(Debug, Error)]
pub enum StreamError {
    /// Connection failed or closed unexpectedly mid-stream.
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// Server rejected the request before streaming began.
    #[error("server error ({status}): {message}")]
    Server { status: u16, message: String },
}

/// Payload-level decode failure for a single event.
///
/// Every "missing field" path through a JSON payload resolves to one of these
/// variants rather than a silent `None`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeError {
    /// Data was not valid JSON at all.
    #[error("payload is not valid JSON: {0}")]
    InvalidJson(String),

    /// Top-level value had the wrong shape (e.g. scalar where an array or
    /// wrapped array was required).
    #[error("expected {expected}, got {found}")]
    WrongShape {
        expected: &'static str,
        found: &'static str,
    },

    /// A required field was absent.
    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    /// A field was present but held the wrong type.
    #[error("field `{field}` is not a {expected}")]
    WrongType {
        field: &'static str,
        expected: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_error_display() {
        let err = DecodeError::MissingField("message");
        assert_eq!(format!("{}", err), "missing required field `message`");

        let err = DecodeError::WrongShape {
            expected: "array or wrapped array",
            found: "string",
        };
        assert!(format!("{}", err).contains("expected array or wrapped array"));

        let err = DecodeError::WrongType {
            field: "content",
            expected: "string",
        };
        assert!(format!("{}", err).contains("`content`"));
    }

    #[test]
    fn test_stream_error_server_display() {
        let err = StreamError::Server {
            status: 503,
            message: "overloaded".to_string(),
        };
        let display = format!("{}", err);
        assert!(display.contains("503"));
        assert!(display.contains("overloaded"));
    }

    #[test]
    fn test_decode_error_equality() {
        assert_eq!(
            DecodeError::InvalidJson("eof".to_string()),
            DecodeError::InvalidJson("eof".to_string())
        );
        assert_ne!(
            DecodeError::MissingField("a"),
            DecodeError::MissingField("b")
        );
    }
}
