//! Roam core - client-side streaming machinery for a location-aware AI guide
//!
//! This crate is the non-visual core of the app: it decodes server-sent event
//! streams from the chat and location-orchestration endpoints, routes each
//! event to a handler, and applies the result to conversation and map state.
//! Rendering, geocoding, auth and persistence live in the consuming app and
//! only see the typed outputs produced here.

pub mod client;
pub mod error;
pub mod features;
pub mod json;
pub mod models;
pub mod router;
pub mod session;
pub mod signals;
pub mod sse;
pub mod state;
