//! SSE (Server-Sent Events) stream decoding
//!
//! Both backend channels speak the same wire format:
//! - `event: <name>` - event name line (optional)
//! - `data: <payload>` - data payload line (multiple lines join with `\n`)
//! - `id: <id>` - event id line (optional)
//! - Empty line - signals end of event
//! - Lines starting with `:` - comments (ignored)
//!
//! # Module structure
//! - `events` - the `SseEvent` record and `SseLine` classification
//! - `framer` - byte chunks to logical lines
//! - `assembler` - logical lines to complete events
//! - `payloads` - serde structs for the JSON data payloads

mod assembler;
mod events;
mod framer;
pub(crate) mod payloads;

pub use assembler::EventAssembler;
pub use events::{SseEvent, SseLine};
pub use framer::LineFramer;
