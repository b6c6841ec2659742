//! Channel plumbing between the conversation core and a transport backend
//!
//! The actual network transport (and its auth) lives outside this crate. A
//! backend drives the `ServiceEndpoint` side; the application holds the
//! `ServiceHandle` (outbound control) and `ServiceEvents` (inbound streams).
//! The event receivers are taken exactly once at startup; events are routed
//! to whichever session is current rather than re-subscribed per session.

use crate::service::events::{PlaybackEvent, ResponseEvent};
use crate::{ConfabError, Result};
use crossbeam_channel::{bounded, Receiver, Sender};
use tracing::{debug, warn};

/// Channel capacity for the service seam
const CHANNEL_CAPACITY: usize = 100;

/// Outbound control messages to the transport backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceCommand {
    /// Begin streaming captured audio for the current session
    StartAudioChunk,
    /// Close the current audio stream
    EndAudioChunk,
    /// Tear down the connection
    Shutdown,
}

/// Outbound control surface of the dialogue service
///
/// The conversation session drives this; implementations forward to whatever
/// transport backs the connection.
pub trait DialogueService {
    /// Begin streaming captured audio; called at most once per recording
    fn start_audio_chunk(&mut self) -> Result<()>;

    /// Close the current audio stream
    fn end_audio_chunk(&mut self) -> Result<()>;
}

/// Handle for sending control commands to the transport backend
#[derive(Clone)]
pub struct ServiceHandle {
    command_tx: Sender<ServiceCommand>,
}

impl ServiceHandle {
    /// Send a command to the transport backend
    pub fn send_command(&self, cmd: ServiceCommand) -> Result<()> {
        self.command_tx
            .send(cmd)
            .map_err(|e| ConfabError::ChannelError(format!("Failed to send command: {}", e)))
    }

    /// Request connection shutdown
    pub fn shutdown(&self) -> Result<()> {
        self.send_command(ServiceCommand::Shutdown)
    }
}

impl DialogueService for ServiceHandle {
    fn start_audio_chunk(&mut self) -> Result<()> {
        debug!("Opening audio chunk stream");
        self.send_command(ServiceCommand::StartAudioChunk)
    }

    fn end_audio_chunk(&mut self) -> Result<()> {
        debug!("Closing audio chunk stream");
        self.send_command(ServiceCommand::EndAudioChunk)
    }
}

/// Inbound event streams from the transport backend
///
/// Held by the event loop, which drains both receivers each frame and
/// applies events in arrival order. There is no cross-stream ordering
/// guarantee between responses and playback notifications.
pub struct ServiceEvents {
    response_rx: Receiver<ResponseEvent>,
    playback_rx: Receiver<PlaybackEvent>,
}

impl ServiceEvents {
    /// Try to receive the next response event without blocking
    pub fn try_recv_response(&self) -> Option<ResponseEvent> {
        self.response_rx.try_recv().ok()
    }

    /// Try to receive the next playback event without blocking
    pub fn try_recv_playback(&self) -> Option<PlaybackEvent> {
        self.playback_rx.try_recv().ok()
    }
}

/// Transport-facing side of the service seam
///
/// A transport worker consumes commands from here and pushes inbound events
/// through it. Tests drive it directly in place of a real connection.
pub struct ServiceEndpoint {
    command_rx: Receiver<ServiceCommand>,
    response_tx: Sender<ResponseEvent>,
    playback_tx: Sender<PlaybackEvent>,
}

impl ServiceEndpoint {
    /// Try to receive the next outbound command without blocking
    pub fn try_recv_command(&self) -> Option<ServiceCommand> {
        self.command_rx.try_recv().ok()
    }

    /// Deliver an inbound response event to the client
    pub fn send_response(&self, event: ResponseEvent) -> Result<()> {
        self.response_tx
            .send(event)
            .map_err(|e| ConfabError::ChannelError(format!("Failed to deliver response: {}", e)))
    }

    /// Parse a raw wire payload and deliver it
    ///
    /// Unreadable payloads are reported but never crash the stream; the
    /// caller may keep feeding subsequent messages.
    pub fn send_response_json(&self, raw: &str) -> Result<()> {
        let event: ResponseEvent = serde_json::from_str(raw).map_err(|e| {
            warn!("Dropping unreadable service payload: {}", e);
            ConfabError::WireError(e.to_string())
        })?;
        self.send_response(event)
    }

    /// Deliver a playback notification to the client
    pub fn send_playback(&self, event: PlaybackEvent) -> Result<()> {
        self.playback_tx
            .send(event)
            .map_err(|e| ConfabError::ChannelError(format!("Failed to deliver playback: {}", e)))
    }
}

/// Create the channel pairs for one service connection
///
/// Opened once at application start; the connection is reused across
/// push-to-talk sessions.
pub fn channels() -> (ServiceHandle, ServiceEvents, ServiceEndpoint) {
    let (command_tx, command_rx) = bounded(CHANNEL_CAPACITY);
    let (response_tx, response_rx) = bounded(CHANNEL_CAPACITY);
    let (playback_tx, playback_rx) = bounded(CHANNEL_CAPACITY);

    let handle = ServiceHandle { command_tx };
    let events = ServiceEvents {
        response_rx,
        playback_rx,
    };
    let endpoint = ServiceEndpoint {
        command_rx,
        response_tx,
        playback_tx,
    };

    (handle, events, endpoint)
}
