//! Playback state for the agent's synthesized audio

use crate::service::PlaybackEvent;

/// Whether agent audio is currently sounding
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PlaybackState {
    /// No agent audio playing
    #[default]
    Silent,
    /// Agent audio is playing
    Speaking,
}

impl std::fmt::Display for PlaybackState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlaybackState::Silent => write!(f, "Silent"),
            PlaybackState::Speaking => write!(f, "Speaking"),
        }
    }
}

/// Tracks whether agent audio is sounding, from discrete start/stop events
///
/// Only the current state matters; it selects the active/idle visual cue.
/// Duplicate start or stop events are harmless.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaybackSignal {
    state: PlaybackState,
}

impl PlaybackSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Agent audio started sounding
    pub fn on_start(&mut self) {
        self.state = PlaybackState::Speaking;
    }

    /// Agent audio stopped
    pub fn on_stop(&mut self) {
        self.state = PlaybackState::Silent;
    }

    /// Apply a playback notification from the service
    pub fn on_event(&mut self, event: PlaybackEvent) {
        match event {
            PlaybackEvent::Started => self.on_start(),
            PlaybackEvent::Stopped => self.on_stop(),
        }
    }

    /// Force back to silence (new session)
    pub fn reset(&mut self) {
        self.state = PlaybackState::Silent;
    }

    pub fn is_speaking(&self) -> bool {
        self.state == PlaybackState::Speaking
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }
}
