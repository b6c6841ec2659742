//! Inbound event types delivered by the dialogue service

use serde::{Deserialize, Serialize};

/// Identifier for one push-to-talk session
///
/// Monotonically increasing within a client instance. Stamped on the session
/// when recording begins and echoed (where the transport supports it) on
/// inbound events so stale deliveries can be discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SessionId(pub u64);

impl SessionId {
    /// The next session identifier
    pub fn next(self) -> Self {
        SessionId(self.0 + 1)
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "session#{}", self.0)
    }
}

/// Streaming recognition result for the user's speech
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserQuery {
    /// Recognized text for this fragment
    #[serde(default)]
    pub text: String,
    /// Whether this fragment is committed or a provisional (interim) result
    #[serde(default)]
    pub is_final: bool,
}

/// Spoken-reply narration from the agent
///
/// Agent text arrives as committed narration alongside synthesized audio,
/// never as a provisional recognition result.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AudioResponse {
    #[serde(default)]
    pub text: String,
}

/// One inbound event from the dialogue service
///
/// Both facets are optional and independently present; an event carrying
/// neither is a valid no-op. Missing wire fields deserialize to their
/// defaults so older or newer service payloads degrade rather than fail.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResponseEvent {
    /// Session the event belongs to, when the transport provides one
    #[serde(default)]
    pub session: Option<SessionId>,
    /// Transcript fragment of the user's speech
    #[serde(default)]
    pub user_query: Option<UserQuery>,
    /// Text of the agent's spoken reply
    #[serde(default)]
    pub audio_response: Option<AudioResponse>,
}

impl ResponseEvent {
    /// Check whether the event carries any payload at all
    pub fn is_empty(&self) -> bool {
        self.user_query.is_none() && self.audio_response.is_none()
    }
}

/// Playback notification for the agent's synthesized audio
///
/// Delivered out-of-band from transcript events; no ordering relative to
/// them may be assumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackEvent {
    /// Agent audio started sounding
    Started,
    /// Agent audio stopped
    Stopped,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_id_ordering() {
        let first = SessionId(1);
        let second = first.next();
        assert!(second > first);
        assert_eq!(second, SessionId(2));
    }

    #[test]
    fn test_empty_event() {
        let event = ResponseEvent::default();
        assert!(event.is_empty());

        let event = ResponseEvent {
            user_query: Some(UserQuery::default()),
            ..Default::default()
        };
        assert!(!event.is_empty());
    }

    #[test]
    fn test_event_deserializes_with_missing_fields() {
        let event: ResponseEvent = serde_json::from_str("{}").unwrap();
        assert!(event.is_empty());
        assert!(event.session.is_none());

        let event: ResponseEvent =
            serde_json::from_str(r#"{"user_query":{"text":"hi"}}"#).unwrap();
        let query = event.user_query.unwrap();
        assert_eq!(query.text, "hi");
        assert!(!query.is_final, "Missing is_final should default to interim");
    }

    #[test]
    fn test_event_with_both_facets() {
        let raw = r#"{
            "session": 3,
            "user_query": {"text": "hello", "is_final": true},
            "audio_response": {"text": "hi there"}
        }"#;
        let event: ResponseEvent = serde_json::from_str(raw).unwrap();
        assert_eq!(event.session, Some(SessionId(3)));
        assert!(event.user_query.is_some());
        assert!(event.audio_response.is_some());
    }
}
