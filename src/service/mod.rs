//! Dialogue service boundary
//!
//! The remote speech/dialogue service is an opaque collaborator. This module
//! defines the outbound control surface (`DialogueService`), the inbound
//! event types it delivers, and the channel plumbing that bridges a transport
//! backend to the conversation core.

pub mod client;
pub mod events;

pub use client::{
    channels, DialogueService, ServiceCommand, ServiceEndpoint, ServiceEvents, ServiceHandle,
};
pub use events::{AudioResponse, PlaybackEvent, ResponseEvent, SessionId, UserQuery};
