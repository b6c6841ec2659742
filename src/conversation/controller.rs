//! Press/release state machine over the active session

use crate::conversation::session::ConversationSession;
use crate::service::{DialogueService, PlaybackEvent, ResponseEvent};
use serde::Serialize;
use tracing::warn;

/// Read-only snapshot consumed by the presentation layer
///
/// A pure projection of the conversation state, recomputed on demand and
/// never stored as an independent source of truth. Empty text means "do not
/// display".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RenderableConversation {
    pub user_text: String,
    pub agent_text: String,
    pub is_talking: bool,
    pub is_holding: bool,
}

/// User-facing state machine binding press/release input to the session
///
/// Owns the single active `ConversationSession` and prevents overlapping
/// sessions. Multiple physical input modalities (pointer-down/touch-start,
/// pointer-up/touch-end) converge on the same two logical transitions; the
/// no-op guards absorb redundant events from one physical gesture.
pub struct SessionController<S: DialogueService> {
    session: ConversationSession<S>,
}

impl<S: DialogueService> SessionController<S> {
    /// Create a controller around an injected service connection
    pub fn new(service: S) -> Self {
        Self {
            session: ConversationSession::new(service),
        }
    }

    /// The user started holding the talk control
    pub fn press(&mut self) {
        if self.is_holding() {
            return;
        }
        if let Err(e) = self.session.begin() {
            warn!("Failed to start session: {}", e);
        }
    }

    /// The user released the talk control
    pub fn release(&mut self) {
        if !self.is_holding() {
            return;
        }
        if let Err(e) = self.session.end() {
            warn!("Failed to close audio chunk: {}", e);
        }
    }

    /// Whether the talk control is currently held
    pub fn is_holding(&self) -> bool {
        self.session.state().is_recording()
    }

    /// Route an inbound service event to the current session
    pub fn on_response_event(&mut self, event: &ResponseEvent) {
        self.session.on_response_event(event);
    }

    /// Route a playback notification to the current session
    pub fn on_playback_event(&mut self, event: PlaybackEvent) {
        self.session.on_playback_event(event);
    }

    /// Project the current renderable state
    pub fn snapshot(&self) -> RenderableConversation {
        RenderableConversation {
            user_text: self.session.user_text(),
            agent_text: self.session.agent_text(),
            is_talking: self.session.is_talking(),
            is_holding: self.is_holding(),
        }
    }

    /// Access the active session (diagnostics, tests)
    pub fn session(&self) -> &ConversationSession<S> {
        &self.session
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::UserQuery;
    use crate::Result;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct NullService;

    impl DialogueService for NullService {
        fn start_audio_chunk(&mut self) -> Result<()> {
            Ok(())
        }

        fn end_audio_chunk(&mut self) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_press_release_cycle() {
        let mut controller = SessionController::new(NullService);
        assert!(!controller.is_holding());

        controller.press();
        assert!(controller.is_holding());

        controller.release();
        assert!(!controller.is_holding());
    }

    #[derive(Clone, Default)]
    struct CountingService {
        starts: Rc<RefCell<u32>>,
    }

    impl DialogueService for CountingService {
        fn start_audio_chunk(&mut self) -> Result<()> {
            *self.starts.borrow_mut() += 1;
            Ok(())
        }

        fn end_audio_chunk(&mut self) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_double_press_opens_one_chunk() {
        let service = CountingService::default();
        let starts = Rc::clone(&service.starts);
        let mut controller = SessionController::new(service);

        // e.g. a pointer-down and a touch-start from one physical gesture
        controller.press();
        controller.press();

        assert!(controller.is_holding());
        assert_eq!(*starts.borrow(), 1, "Exactly one chunk open per gesture");
    }

    #[test]
    fn test_release_while_idle_is_noop() {
        let mut controller = SessionController::new(NullService);

        controller.release();

        assert!(!controller.is_holding());
        let snapshot = controller.snapshot();
        assert_eq!(snapshot, RenderableConversation::default());
    }

    #[test]
    fn test_snapshot_reflects_session() {
        let mut controller = SessionController::new(NullService);

        controller.press();
        controller.on_response_event(&ResponseEvent {
            user_query: Some(UserQuery {
                text: "hi".to_string(),
                is_final: true,
            }),
            ..Default::default()
        });
        controller.on_playback_event(PlaybackEvent::Started);

        let snapshot = controller.snapshot();
        assert_eq!(snapshot.user_text, "hi");
        assert_eq!(snapshot.agent_text, "");
        assert!(snapshot.is_talking);
        assert!(snapshot.is_holding);
    }
}
