//! egui presentation layer
//!
//! Renders the two caption bubbles, the hold-to-talk button, and the
//! talking indicator. All conversation state lives in the controller; the
//! UI re-renders from `RenderableConversation` snapshots.

pub mod app;
pub mod components;
pub mod theme;

pub use app::ConfabApp;
pub use theme::Theme;
