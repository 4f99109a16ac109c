//! Edge-triggered key state observation
//!
//! [`KeyboardListener`] runs a background sampling session over the whole
//! key code space, turning raw per-key boolean state into Down/Up events
//! with inter-event timing. Events are only emitted on transitions, never
//! while a key is merely held, and only for codes the resolver can name.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use virtual_input::{KeyboardListener, MockBackend};
//!
//! # async fn example() {
//! let backend = Arc::new(MockBackend::new());
//! let mut listener = KeyboardListener::new(backend);
//!
//! listener.on_output(|line| println!("{line}"));
//! listener.start();
//! // ... keys are observed until the session ends ...
//! listener.stop().await;
//! # }
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tokio::task::JoinHandle;
use tracing::{debug, error, trace};

use crate::backend::InputBackend;
use crate::keys::{self, KeyCode};

/// Direction of an observed key state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyTransition {
    /// The key went from released to pressed
    Down,
    /// The key went from pressed to released
    Up,
}

impl fmt::Display for KeyTransition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyTransition::Down => write!(f, "KeyDown"),
            KeyTransition::Up => write!(f, "KeyUp"),
        }
    }
}

/// One observed key transition within a listener session
///
/// `delay_since_previous` is `None` only for the very first event of a
/// session. The `Display` impl renders the subscriber wire text:
/// `"DELAY : {ms}\nKeyboard : {name} : {KeyDown|KeyUp}"` when a previous
/// event exists, the single `Keyboard` line otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEvent {
    /// Resolved human-readable key name
    pub key_name: String,
    /// Down or Up
    pub transition: KeyTransition,
    /// Time since the session clock started
    pub elapsed_since_start: Duration,
    /// Gap to the previously emitted event, if any
    pub delay_since_previous: Option<Duration>,
}

impl fmt::Display for KeyEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(delay) = self.delay_since_previous {
            writeln!(f, "DELAY : {}", delay.as_millis())?;
        }
        write!(f, "Keyboard : {} : {}", self.key_name, self.transition)
    }
}

/// Configuration for a listener session
#[derive(Debug, Clone)]
pub struct ListenerConfig {
    /// Sleep between full passes over the key code space
    ///
    /// This is the poller's time resolution and the upper bound on
    /// keystroke latency. Two physical presses closer together than this
    /// interval may coalesce in timing but never lose Down/Up correctness.
    pub poll_interval: Duration,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_millis(10),
        }
    }
}

type OutputHandler = Box<dyn Fn(&str) + Send + Sync>;

/// Polls physical key state and broadcasts edge-triggered events
///
/// Each instance owns its session state completely; independent listeners
/// never interfere with one another. Handler delivery is synchronous and
/// unbuffered — a handler that blocks stalls subsequent sampling passes.
pub struct KeyboardListener {
    backend: Arc<dyn InputBackend>,
    config: ListenerConfig,
    running: Arc<AtomicBool>,
    handlers: Arc<Mutex<Vec<OutputHandler>>>,
    task: Option<JoinHandle<()>>,
}

impl KeyboardListener {
    /// Creates a listener with the default 10 ms poll interval
    pub fn new(backend: Arc<dyn InputBackend>) -> Self {
        Self::with_config(backend, ListenerConfig::default())
    }

    /// Creates a listener with a custom configuration
    pub fn with_config(backend: Arc<dyn InputBackend>, config: ListenerConfig) -> Self {
        Self {
            backend,
            config,
            running: Arc::new(AtomicBool::new(false)),
            handlers: Arc::new(Mutex::new(Vec::new())),
            task: None,
        }
    }

    /// Registers a handler invoked once per emitted event
    ///
    /// The handler receives the formatted wire text (see [`KeyEvent`]).
    /// Delivery is fire-and-forget with no backpressure.
    pub fn on_output<F>(&self, handler: F)
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.handlers.lock().push(Box::new(handler));
    }

    /// Returns whether a sampling session is currently running
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Starts the sampling session
    ///
    /// Idempotent: calling `start` while a session is running is a no-op.
    /// The session clock starts with the session; a backend failure inside
    /// the loop ends the session on its own.
    pub fn start(&mut self) {
        if self.running.swap(true, Ordering::SeqCst) {
            return;
        }

        debug!(poll_interval_ms = self.config.poll_interval.as_millis() as u64, "key listener session starting");

        let backend = Arc::clone(&self.backend);
        let running = Arc::clone(&self.running);
        let handlers = Arc::clone(&self.handlers);
        let interval = self.config.poll_interval;

        self.task = Some(tokio::spawn(sample_loop(
            backend, running, handlers, interval,
        )));
    }

    /// Stops the sampling session and waits for the loop to terminate
    ///
    /// The cancellation flag is checked once per full pass, so stop latency
    /// is bounded by one pass plus one poll interval.
    pub async fn stop(&mut self) {
        self.running.store(false, Ordering::SeqCst);
        if let Some(task) = self.task.take() {
            let _ = task.await;
        }
        debug!("key listener session stopped");
    }
}

impl Drop for KeyboardListener {
    fn drop(&mut self) {
        // The detached task exits on its next flag check.
        self.running.store(false, Ordering::SeqCst);
    }
}

/// One sampling session: repeated full passes over the key code space
async fn sample_loop(
    backend: Arc<dyn InputBackend>,
    running: Arc<AtomicBool>,
    handlers: Arc<Mutex<Vec<OutputHandler>>>,
    interval: Duration,
) {
    let session_start = tokio::time::Instant::now();
    let mut states: HashMap<KeyCode, bool> = HashMap::new();
    let mut last_emitted: Option<Duration> = None;

    while running.load(Ordering::SeqCst) {
        for code in 0u8..=255 {
            if keys::is_ignored(code) {
                continue;
            }

            let pressed = match backend.is_key_pressed(code) {
                Ok(pressed) => pressed,
                Err(err) => {
                    error!(%err, "key state query failed, ending session");
                    running.store(false, Ordering::SeqCst);
                    return;
                }
            };

            // First sighting of a code records state without a transition.
            if let Some(&was_pressed) = states.get(&code) {
                if pressed != was_pressed {
                    let transition = if pressed {
                        KeyTransition::Down
                    } else {
                        KeyTransition::Up
                    };

                    // Unresolvable codes are filtered, but their state is
                    // still stored below so later transitions stay correct.
                    if let Some(key_name) = keys::resolve(code) {
                        let elapsed = session_start.elapsed();
                        let event = KeyEvent {
                            key_name,
                            transition,
                            elapsed_since_start: elapsed,
                            delay_since_previous: last_emitted.map(|prev| elapsed - prev),
                        };

                        trace!(key = %event.key_name, %transition, elapsed_ms = elapsed.as_millis() as u64, "key transition");

                        let text = event.to_string();
                        for handler in handlers.lock().iter() {
                            handler(&text);
                        }
                        last_emitted = Some(elapsed);
                    }
                }
            }

            states.insert(code, pressed);
        }

        tokio::time::sleep(interval).await;
    }
}
