//! Typed domain records produced by the streaming core.
//!
//! # Module structure
//! - `message` - chat messages and the streaming flag invariant
//! - `notification` - the single active notification banner
//! - `feature` - map point features and the revisioned feature set

mod feature;
mod message;
mod notification;

pub use feature::{Coordinate, FeatureSet, PointFeature};
pub use message::ChatMessage;
pub use notification::NotificationData;
