//! Conversation session core
//!
//! Reconciles the asynchronous, partially-ordered stream of transcript and
//! playback events against the user-controlled recording lifecycle. Text
//! shown to the user is monotonic within a session and never mixes state
//! across two successive utterances.

pub mod controller;
pub mod playback;
pub mod session;
pub mod transcript;

pub use controller::{RenderableConversation, SessionController};
pub use playback::{PlaybackSignal, PlaybackState};
pub use session::{ConversationSession, SessionState};
pub use transcript::{TextFragment, TranscriptAccumulator};
