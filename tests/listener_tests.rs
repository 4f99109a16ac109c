//! Integration tests for the key state poller
//!
//! All tests run on a paused tokio clock: the sampling loop and the test
//! body interleave deterministically, so key state is always changed
//! between full passes.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use virtual_input::{KeyboardListener, MockBackend};

/// A key with a resolvable name ('A')
const KEY_A: u8 = 0x41;
/// A key with a resolvable name ('B')
const KEY_B: u8 = 0x42;
/// A code outside every named range
const UNMAPPED: u8 = 0xE8;

fn recording_listener(backend: &Arc<MockBackend>) -> (KeyboardListener, Arc<Mutex<Vec<String>>>) {
    let listener = KeyboardListener::new(backend.clone());
    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = events.clone();
    listener.on_output(move |line| sink.lock().push(line.to_string()));
    (listener, events)
}

async fn tick(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
}

#[tokio::test(start_paused = true)]
async fn press_and_release_produce_down_then_up() {
    let backend = Arc::new(MockBackend::new());
    let (mut listener, events) = recording_listener(&backend);

    listener.start();
    tick(15).await;

    backend.press(KEY_A);
    tick(20).await;

    backend.release(KEY_A);
    tick(20).await;

    listener.stop().await;

    let events = events.lock();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0], "Keyboard : A : KeyDown");
    assert!(events[1].starts_with("DELAY : "), "got {:?}", events[1]);
    assert!(events[1].ends_with("Keyboard : A : KeyUp"), "got {:?}", events[1]);

    let delay: u64 = events[1]
        .lines()
        .next()
        .unwrap()
        .trim_start_matches("DELAY : ")
        .parse()
        .unwrap();
    assert!(delay >= 10, "delay should span at least one poll tick");
}

#[tokio::test(start_paused = true)]
async fn held_key_emits_exactly_one_transition() {
    let backend = Arc::new(MockBackend::new());
    let (mut listener, events) = recording_listener(&backend);

    listener.start();
    tick(15).await;

    backend.press(KEY_A);
    tick(80).await; // many passes while held

    backend.release(KEY_A);
    tick(20).await;

    listener.stop().await;

    let events = events.lock();
    assert_eq!(events.len(), 2, "held keys must not repeat: {events:?}");
}

#[tokio::test(start_paused = true)]
async fn ignored_codes_never_emit() {
    let backend = Arc::new(MockBackend::new());
    let (mut listener, events) = recording_listener(&backend);

    listener.start();
    tick(15).await;

    for code in [0x01, 0x02, 0x04, 0x05, 0x06, 0x5B, 0x5C] {
        backend.press(code);
    }
    tick(30).await;

    for code in [0x01, 0x02, 0x04, 0x05, 0x06, 0x5B, 0x5C] {
        backend.release(code);
    }
    tick(30).await;

    listener.stop().await;
    assert!(events.lock().is_empty());
}

#[tokio::test(start_paused = true)]
async fn unmapped_codes_are_filtered_but_tracked() {
    let backend = Arc::new(MockBackend::new());
    let (mut listener, events) = recording_listener(&backend);

    listener.start();
    tick(15).await;

    // The unmapped key transitions twice; state tracking must stay
    // correct even though neither transition is reported.
    backend.press(UNMAPPED);
    tick(20).await;
    backend.release(UNMAPPED);
    tick(20).await;

    backend.press(KEY_A);
    tick(20).await;

    listener.stop().await;

    let events = events.lock();
    assert_eq!(events.len(), 1);
    // Still the first *emitted* event of the session, so no DELAY line.
    assert_eq!(events[0], "Keyboard : A : KeyDown");
}

#[tokio::test(start_paused = true)]
async fn key_held_before_start_reports_only_the_release() {
    let backend = Arc::new(MockBackend::new());
    let (mut listener, events) = recording_listener(&backend);

    // The first pass adopts this state silently.
    backend.press(KEY_A);

    listener.start();
    tick(25).await;

    backend.release(KEY_A);
    tick(20).await;

    listener.stop().await;

    let events = events.lock();
    assert_eq!(events.as_slice(), ["Keyboard : A : KeyUp"]);
}

#[tokio::test(start_paused = true)]
async fn delays_chain_across_events() {
    let backend = Arc::new(MockBackend::new());
    let (mut listener, events) = recording_listener(&backend);

    listener.start();
    tick(15).await;

    for (code, down) in [(KEY_A, true), (KEY_A, false), (KEY_B, true), (KEY_B, false)] {
        if down {
            backend.press(code);
        } else {
            backend.release(code);
        }
        tick(20).await;
    }

    listener.stop().await;

    // On the paused clock the transitions land at 20/40/60/80 ms, so every
    // delay is exactly the gap between consecutive emissions.
    let events = events.lock();
    assert_eq!(
        events.as_slice(),
        [
            "Keyboard : A : KeyDown",
            "DELAY : 20\nKeyboard : A : KeyUp",
            "DELAY : 20\nKeyboard : B : KeyDown",
            "DELAY : 20\nKeyboard : B : KeyUp",
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn start_is_idempotent() {
    let backend = Arc::new(MockBackend::new());
    let (mut listener, events) = recording_listener(&backend);

    listener.start();
    listener.start();
    assert!(listener.is_running());
    tick(15).await;

    backend.press(KEY_A);
    tick(20).await;
    backend.release(KEY_A);
    tick(20).await;

    listener.stop().await;
    assert!(!listener.is_running());

    // A doubled session would have doubled the events.
    assert_eq!(events.lock().len(), 2);
}

#[tokio::test(start_paused = true)]
async fn backend_failure_ends_the_session() {
    let backend = Arc::new(MockBackend::new());
    let (mut listener, events) = recording_listener(&backend);

    listener.start();
    tick(15).await;

    backend.fail_key_queries(true);
    tick(30).await;

    assert!(!listener.is_running(), "a dead backend must end the session");

    backend.press(KEY_A);
    tick(30).await;
    assert!(events.lock().is_empty(), "no events after the session died");

    // stop() still joins cleanly, and a fresh session works again.
    listener.stop().await;
    backend.fail_key_queries(false);
    backend.release(KEY_A);

    listener.start();
    tick(15).await;
    backend.press(KEY_A);
    tick(20).await;
    listener.stop().await;

    assert_eq!(events.lock().as_slice(), ["Keyboard : A : KeyDown"]);
}

#[tokio::test(start_paused = true)]
async fn independent_listeners_do_not_interfere() {
    let backend = Arc::new(MockBackend::new());
    let (mut first, first_events) = recording_listener(&backend);
    let (mut second, second_events) = recording_listener(&backend);

    first.start();
    second.start();
    tick(15).await;

    backend.press(KEY_A);
    tick(20).await;

    // Stopping one session must leave the other running.
    first.stop().await;
    backend.release(KEY_A);
    tick(20).await;
    second.stop().await;

    assert_eq!(first_events.lock().as_slice(), ["Keyboard : A : KeyDown"]);

    let second_events = second_events.lock();
    assert_eq!(second_events.len(), 2);
    assert!(second_events[1].ends_with("Keyboard : A : KeyUp"));
}
