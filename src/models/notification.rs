use serde::{Deserialize, Serialize};

/// The notification currently shown in the banner.
///
/// Last writer wins: a new notification unconditionally replaces the previous
/// one, and no history is kept at this layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NotificationData {
    /// Optional category hint for the consuming layer (e.g. "arrival").
    pub kind: Option<String>,
    /// Text to display.
    pub message: String,
}
