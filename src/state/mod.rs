//! Mutable conversation and map state owned by the session context.
//!
//! The router is the only writer: every mutation here happens synchronously
//! inside one event's handling, so as long as dispatch stays sequential the
//! state needs no internal locking.

use crate::models::{ChatMessage, FeatureSet, NotificationData, PointFeature};
use crate::signals::UiSignals;

/// All shared state one conversation accumulates across streams.
///
/// Outlives any single stream; a new chat stream appends to the same message
/// list and replaces the same notification and feature set.
#[derive(Debug, Default)]
pub struct ConversationState {
    messages: Vec<ChatMessage>,
    /// Index of the assistant message for the open turn. Only `apply_finish`
    /// closes a turn; the payload's `is_streaming` flag is cosmetic output
    /// and never decides where chunks land.
    open_turn: Option<usize>,
    notification: Option<NotificationData>,
    feature_set: FeatureSet,
    /// Transient signals the UI layer polls.
    pub signals: UiSignals,
}

impl ConversationState {
    /// Create empty conversation state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages in display order.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// The currently displayed notification, if any.
    pub fn notification(&self) -> Option<&NotificationData> {
        self.notification.as_ref()
    }

    /// The current map feature set.
    pub fn feature_set(&self) -> &FeatureSet {
        &self.feature_set
    }

    /// Record a message the user sent.
    pub fn push_user_message(&mut self, text: impl Into<String>) {
        self.messages.push(ChatMessage::user(text));
    }

    /// Apply one `content` chunk to the assistant message of the open turn.
    ///
    /// With no open turn a new assistant message is created first. Every
    /// chunk of the turn appends to that same message (same id), regardless
    /// of the payload's `is_streaming` flag, which only updates the display
    /// state (defaulting to true when absent).
    pub fn apply_content(&mut self, chunk: &str, is_streaming: Option<bool>) {
        let index = match self.open_turn {
            Some(index) => index,
            None => {
                self.messages.push(ChatMessage::streaming_assistant());
                let index = self.messages.len() - 1;
                self.open_turn = Some(index);
                index
            }
        };

        if let Some(message) = self.messages.get_mut(index) {
            message.append_chunk(chunk);
            message.is_streaming = is_streaming.unwrap_or(true);
        }
    }

    /// Finalize the current assistant turn.
    ///
    /// A turn whose accumulated text trims to empty is discarded entirely so
    /// no ghost bubble survives. With no open turn this is a no-op, not an
    /// error.
    pub fn apply_finish(&mut self) {
        let Some(index) = self.open_turn.take() else {
            return;
        };

        match self.messages.get_mut(index) {
            Some(message) if message.text.trim().is_empty() => {
                self.messages.remove(index);
            }
            Some(message) => message.is_streaming = false,
            None => {}
        }
    }

    /// Replace the displayed notification. Last writer wins.
    pub fn set_notification(&mut self, notification: NotificationData) {
        self.notification = Some(notification);
    }

    /// Replace the feature set and bump its revision.
    pub fn replace_features(&mut self, features: Vec<PointFeature>) {
        self.feature_set.replace(features);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Coordinate;

    fn point(lat: f64, lon: f64) -> PointFeature {
        PointFeature {
            coordinate: Coordinate {
                latitude: lat,
                longitude: lon,
            },
            title: None,
            image_url: None,
            wikipedia_url: None,
        }
    }

    #[test]
    fn test_first_content_creates_exactly_one_message() {
        let mut state = ConversationState::new();
        state.apply_content("Hel", None);

        assert_eq!(state.messages().len(), 1);
        let msg = &state.messages()[0];
        assert!(!msg.is_user);
        assert!(msg.is_streaming);
        assert_eq!(msg.text, "Hel");
    }

    #[test]
    fn test_chunks_append_in_place() {
        let mut state = ConversationState::new();
        state.apply_content("Hel", None);
        let id = state.messages()[0].id;

        state.apply_content("lo", None);
        assert_eq!(state.messages().len(), 1);
        assert_eq!(state.messages()[0].text, "Hello");
        assert_eq!(state.messages()[0].id, id);
    }

    #[test]
    fn test_content_after_user_message_starts_new_bubble() {
        let mut state = ConversationState::new();
        state.push_user_message("hi there");
        state.apply_content("Hello", None);

        assert_eq!(state.messages().len(), 2);
        assert!(state.messages()[0].is_user);
        assert!(!state.messages()[1].is_user);
        assert!(state.messages()[1].is_streaming);
    }

    #[test]
    fn test_streaming_false_chunk_keeps_turn_open() {
        let mut state = ConversationState::new();
        state.apply_content("a", Some(false));
        let id = state.messages()[0].id;

        // The flag is display-only: the turn stays open and the next chunk
        // appends to the same message.
        state.apply_content("b", None);
        assert_eq!(state.messages().len(), 1);
        assert_eq!(state.messages()[0].text, "ab");
        assert_eq!(state.messages()[0].id, id);
    }

    #[test]
    fn test_finish_after_streaming_false_finalizes_same_message() {
        let mut state = ConversationState::new();
        state.apply_content("done", Some(false));
        state.apply_finish();

        assert_eq!(state.messages().len(), 1);
        assert_eq!(state.messages()[0].text, "done");
        assert!(!state.messages()[0].is_streaming);

        // Turn is closed: new content starts a fresh bubble.
        state.apply_content("next", None);
        assert_eq!(state.messages().len(), 2);
    }

    #[test]
    fn test_streaming_false_whitespace_turn_still_discarded() {
        let mut state = ConversationState::new();
        state.push_user_message("hello?");
        state.apply_content("  ", Some(false));
        state.apply_finish();

        assert_eq!(state.messages().len(), 1);
        assert!(state.messages()[0].is_user);
    }

    #[test]
    fn test_streaming_flag_defaults_to_true_when_absent() {
        let mut state = ConversationState::new();
        state.apply_content("a", Some(false));
        assert!(!state.messages()[0].is_streaming);

        // Absent flag flips it back to streaming.
        state.apply_content("b", None);
        assert!(state.messages()[0].is_streaming);
    }

    #[test]
    fn test_finish_finalizes_non_empty_turn() {
        let mut state = ConversationState::new();
        state.apply_content("Hel", None);
        state.apply_content("lo", None);
        state.apply_finish();

        assert_eq!(state.messages().len(), 1);
        assert_eq!(state.messages()[0].text, "Hello");
        assert!(!state.messages()[0].is_streaming);
    }

    #[test]
    fn test_finish_discards_whitespace_only_turn() {
        let mut state = ConversationState::new();
        state.push_user_message("hello?");
        state.apply_content("  \n\t ", None);
        state.apply_finish();

        assert_eq!(state.messages().len(), 1);
        assert!(state.messages()[0].is_user);
    }

    #[test]
    fn test_finish_without_turn_is_noop() {
        let mut state = ConversationState::new();
        state.apply_finish();
        assert!(state.messages().is_empty());

        state.push_user_message("hi");
        state.apply_finish();
        assert_eq!(state.messages().len(), 1);
    }

    #[test]
    fn test_finish_does_not_touch_finalized_message() {
        let mut state = ConversationState::new();
        state.apply_content("done", None);
        state.apply_finish();
        state.apply_finish();

        assert_eq!(state.messages().len(), 1);
        assert_eq!(state.messages()[0].text, "done");
    }

    #[test]
    fn test_at_most_one_streaming_message() {
        let mut state = ConversationState::new();
        state.apply_content("first", None);
        state.apply_finish();
        state.apply_content("second", None);

        let streaming: Vec<_> = state
            .messages()
            .iter()
            .filter(|m| m.is_streaming)
            .collect();
        assert_eq!(streaming.len(), 1);
        assert_eq!(streaming[0].text, "second");
    }

    #[test]
    fn test_accumulation_is_deterministic() {
        let chunks = ["To", "kyo ", "tips"];

        let run = || {
            let mut state = ConversationState::new();
            for chunk in chunks {
                state.apply_content(chunk, None);
            }
            state.apply_finish();
            state
                .messages()
                .iter()
                .map(|m| (m.text.clone(), m.is_user, m.is_streaming))
                .collect::<Vec<_>>()
        };

        assert_eq!(run(), run());
    }

    #[test]
    fn test_notification_last_writer_wins() {
        let mut state = ConversationState::new();
        state.set_notification(NotificationData {
            kind: None,
            message: "first".to_string(),
        });
        state.set_notification(NotificationData {
            kind: Some("info".to_string()),
            message: "second".to_string(),
        });

        assert_eq!(state.notification().unwrap().message, "second");
    }

    #[test]
    fn test_replace_features_bumps_revision() {
        let mut state = ConversationState::new();
        assert_eq!(state.feature_set().revision(), 0);

        state.replace_features(vec![point(38.7, -9.1)]);
        assert_eq!(state.feature_set().revision(), 1);
        assert_eq!(state.feature_set().features().len(), 1);
    }
}
