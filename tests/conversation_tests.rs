//! End-to-end conversation flow tests
//!
//! These drive the controller through the real channel plumbing, with the
//! test standing in for the transport backend on the endpoint side.

use confab::conversation::{RenderableConversation, SessionController};
use confab::service::{
    self, AudioResponse, PlaybackEvent, ResponseEvent, ServiceCommand, ServiceEvents,
    ServiceHandle, UserQuery,
};

fn user_event(text: &str, is_final: bool) -> ResponseEvent {
    ResponseEvent {
        user_query: Some(UserQuery {
            text: text.to_string(),
            is_final,
        }),
        ..Default::default()
    }
}

fn agent_event(text: &str) -> ResponseEvent {
    ResponseEvent {
        audio_response: Some(AudioResponse {
            text: text.to_string(),
        }),
        ..Default::default()
    }
}

/// Drain pending events into the controller, as the UI loop does each frame
fn pump(controller: &mut SessionController<ServiceHandle>, events: &ServiceEvents) {
    while let Some(event) = events.try_recv_response() {
        controller.on_response_event(&event);
    }
    while let Some(event) = events.try_recv_playback() {
        controller.on_playback_event(event);
    }
}

#[test]
fn test_full_exchange_snapshot() {
    let (handle, events, endpoint) = service::channels();
    let mut controller = SessionController::new(handle);

    controller.press();
    endpoint.send_response(user_event("hi", true)).unwrap();
    pump(&mut controller, &events);
    controller.release();
    endpoint.send_response(agent_event("hello!")).unwrap();
    pump(&mut controller, &events);

    assert_eq!(
        controller.snapshot(),
        RenderableConversation {
            user_text: "hi".to_string(),
            agent_text: "hello!".to_string(),
            is_talking: false,
            is_holding: false,
        }
    );
}

#[test]
fn test_double_press_sends_one_start_command() {
    let (handle, _events, endpoint) = service::channels();
    let mut controller = SessionController::new(handle);

    controller.press();
    controller.press();

    assert_eq!(
        endpoint.try_recv_command(),
        Some(ServiceCommand::StartAudioChunk)
    );
    assert_eq!(
        endpoint.try_recv_command(),
        None,
        "Second press must not reopen the audio chunk"
    );
}

#[test]
fn test_release_without_press_sends_nothing() {
    let (handle, _events, endpoint) = service::channels();
    let mut controller = SessionController::new(handle);

    controller.release();

    assert_eq!(endpoint.try_recv_command(), None);
}

#[test]
fn test_interim_stream_renders_progressively() {
    let (handle, events, endpoint) = service::channels();
    let mut controller = SessionController::new(handle);
    controller.press();

    let steps = [
        (user_event("Hello", false), "Hello"),
        (user_event("Hello there", false), "Hello there"),
        (user_event(" world", true), "Hello there world"),
    ];

    for (event, expected) in steps {
        endpoint.send_response(event).unwrap();
        pump(&mut controller, &events);
        assert_eq!(controller.snapshot().user_text, expected);
    }
}

#[test]
fn test_interleaved_streams_stay_independent() {
    let (handle, events, endpoint) = service::channels();
    let mut controller = SessionController::new(handle);
    controller.press();
    controller.release();

    // Agent narration, playback, and late user finals interleave freely
    endpoint.send_response(user_event("what", false)).unwrap();
    endpoint.send_response(agent_event("Let me")).unwrap();
    endpoint.send_playback(PlaybackEvent::Started).unwrap();
    endpoint
        .send_response(user_event("what time is it", true))
        .unwrap();
    endpoint.send_response(agent_event("check.")).unwrap();
    pump(&mut controller, &events);

    let snapshot = controller.snapshot();
    assert_eq!(snapshot.user_text, "what time is it");
    assert_eq!(snapshot.agent_text, "Let me check.");
    assert!(snapshot.is_talking);

    endpoint.send_playback(PlaybackEvent::Stopped).unwrap();
    pump(&mut controller, &events);
    assert!(!controller.snapshot().is_talking);
}

#[test]
fn test_new_press_discards_previous_exchange() {
    let (handle, events, endpoint) = service::channels();
    let mut controller = SessionController::new(handle);

    controller.press();
    endpoint.send_response(user_event("first", true)).unwrap();
    pump(&mut controller, &events);
    controller.release();

    controller.press();
    pump(&mut controller, &events);

    let snapshot = controller.snapshot();
    assert_eq!(snapshot.user_text, "");
    assert_eq!(snapshot.agent_text, "");
    assert!(snapshot.is_holding);
}

#[test]
fn test_stale_event_after_new_press_is_dropped() {
    let (handle, events, endpoint) = service::channels();
    let mut controller = SessionController::new(handle);

    controller.press();
    let superseded = controller.session().id();
    controller.release();

    controller.press();

    let mut late = agent_event("reply for the old session");
    late.session = Some(superseded);
    endpoint.send_response(late).unwrap();
    pump(&mut controller, &events);

    assert_eq!(controller.snapshot().agent_text, "");
    assert_eq!(controller.session().stale_events(), 1);
}

#[test]
fn test_stream_termination_leaves_state_intact() {
    let (handle, events, endpoint) = service::channels();
    let mut controller = SessionController::new(handle);

    controller.press();
    endpoint.send_response(user_event("hi", true)).unwrap();
    pump(&mut controller, &events);
    controller.release();

    // Transport dies mid-exchange
    drop(endpoint);
    pump(&mut controller, &events);

    let snapshot = controller.snapshot();
    assert_eq!(snapshot.user_text, "hi", "Last applied state survives");
    assert!(!snapshot.is_holding);
}

#[test]
fn test_wire_payload_roundtrip() {
    let (handle, events, endpoint) = service::channels();
    let mut controller = SessionController::new(handle);
    controller.press();

    endpoint
        .send_response_json(
            r#"{"user_query":{"text":"ping","is_final":true},"audio_response":{"text":"pong"}}"#,
        )
        .unwrap();
    pump(&mut controller, &events);

    let snapshot = controller.snapshot();
    assert_eq!(snapshot.user_text, "ping");
    assert_eq!(snapshot.agent_text, "pong");
}
