//! One complete push-to-talk exchange

use crate::conversation::playback::PlaybackSignal;
use crate::conversation::transcript::{TextFragment, TranscriptAccumulator};
use crate::service::{DialogueService, PlaybackEvent, ResponseEvent, SessionId};
use crate::Result;
use tracing::{debug, info};

/// Lifecycle of one conversation session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SessionState {
    /// No exchange in progress
    #[default]
    Idle,
    /// Streaming captured audio to the service
    Recording,
    /// Audio chunk closed; inbound events still attach to this session
    AwaitingResponse,
}

impl SessionState {
    pub fn is_recording(&self) -> bool {
        matches!(self, SessionState::Recording)
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, SessionState::Idle)
    }
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionState::Idle => write!(f, "Idle"),
            SessionState::Recording => write!(f, "Recording"),
            SessionState::AwaitingResponse => write!(f, "AwaitingResponse"),
        }
    }
}

/// Single point of truth for one exchange
///
/// Bridges the service's event stream to the two transcript accumulators and
/// the playback signal, and drives the outbound audio-chunk control surface.
/// The injected `DialogueService` is the only collaborator.
///
/// A session stays live after recording stops: agent events keep attaching
/// to it until the next `begin()` supersedes it. Each `begin()` stamps a new
/// monotonically increasing id so late deliveries for a superseded session
/// can be recognized and dropped.
pub struct ConversationSession<S: DialogueService> {
    service: S,
    id: SessionId,
    state: SessionState,
    user: TranscriptAccumulator,
    agent: TranscriptAccumulator,
    playback: PlaybackSignal,
    stale_events: u64,
}

impl<S: DialogueService> ConversationSession<S> {
    /// Create an idle session around an injected service connection
    pub fn new(service: S) -> Self {
        Self {
            service,
            id: SessionId(0),
            state: SessionState::Idle,
            user: TranscriptAccumulator::new(),
            agent: TranscriptAccumulator::new(),
            playback: PlaybackSignal::new(),
            stale_events: 0,
        }
    }

    /// Start a new exchange
    ///
    /// Resets both accumulators and the playback signal, stamps the next
    /// session id, and opens the audio chunk stream. A re-entrant call while
    /// already recording is rejected as a no-op, guarding against duplicate
    /// microphone-open commands from redundant input events.
    pub fn begin(&mut self) -> Result<()> {
        if self.state.is_recording() {
            debug!("begin() while recording ignored");
            return Ok(());
        }

        self.id = self.id.next();
        self.state = SessionState::Recording;
        self.user.reset();
        self.agent.reset();
        self.playback.reset();
        info!("{} started", self.id);

        self.service.start_audio_chunk()
    }

    /// Stop recording and wait for the reply
    ///
    /// The session remains live in `AwaitingResponse` until the next
    /// `begin()` supersedes it; there is no terminal state driven by
    /// response completion. Calling this outside `Recording` is a no-op,
    /// which also makes the chunk close idempotent at the session level.
    pub fn end(&mut self) -> Result<()> {
        if !self.state.is_recording() {
            debug!("end() while not recording ignored");
            return Ok(());
        }

        self.state = SessionState::AwaitingResponse;
        info!("{} awaiting response", self.id);

        self.service.end_audio_chunk()
    }

    /// Apply one inbound service event in arrival order
    ///
    /// The two facets are independent: a user-query fragment feeds the USER
    /// accumulator with its own is_final flag, agent narration feeds the
    /// AGENT accumulator as committed text. An event carrying both runs both
    /// branches; one carrying neither is ignored. Events stamped with a
    /// non-current session id are discarded and counted.
    pub fn on_response_event(&mut self, event: &ResponseEvent) {
        if let Some(session) = event.session {
            if session != self.id {
                self.stale_events += 1;
                debug!(
                    "Discarding event for superseded {} (current {})",
                    session, self.id
                );
                return;
            }
        }

        if let Some(query) = &event.user_query {
            let fragment = TextFragment {
                text: query.text.clone(),
                is_final: query.is_final,
            };
            let shown = self.user.apply(&fragment);
            debug!("User transcript now {:?}", shown);
        }

        if let Some(response) = &event.audio_response {
            // Agent narration arrives as committed text, never interim
            let shown = self.agent.apply(&TextFragment::finalized(&response.text));
            debug!("Agent transcript now {:?}", shown);
        }
    }

    /// Apply a playback notification
    ///
    /// Delivered out-of-band; not ordered relative to transcript events and
    /// not assumed to bracket specific utterances precisely.
    pub fn on_playback_event(&mut self, event: PlaybackEvent) {
        self.playback.on_event(event);
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Current display text for the user's speech
    pub fn user_text(&self) -> String {
        self.user.text()
    }

    /// Current display text for the agent's reply
    pub fn agent_text(&self) -> String {
        self.agent.text()
    }

    pub fn is_talking(&self) -> bool {
        self.playback.is_speaking()
    }

    /// Number of discarded stale-session events, for diagnostics
    pub fn stale_events(&self) -> u64 {
        self.stale_events
    }
}
