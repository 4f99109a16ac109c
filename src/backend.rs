//! Capability interface to the platform input layer
//!
//! Everything that actually touches hardware state — reading key state,
//! reading and writing the cursor, emitting synthetic button/key/scroll
//! events — sits behind [`InputBackend`]. The rest of the crate never
//! encodes platform struct layouts or foreign calls; a platform adapter
//! implements this trait and is injected as `Arc<dyn InputBackend>`.
//!
//! [`MockBackend`] is the in-tree test double: scripted key state, a cursor
//! write trace, and switches for simulating a dead or degraded backend.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;

use crate::error::{InputError, InputResult};
use crate::keys::KeyCode;
use crate::motion::PathPoint;
use crate::mouse::MouseButton;

/// Platform calls the input engines depend on
///
/// Implementations must be callable at polling rates (hundreds of calls per
/// pass, every few milliseconds) with sub-millisecond overhead. An `Err`
/// from any method means the backend cannot answer at all and is fatal to
/// the enclosing operation; `set_cursor_position` additionally reports
/// per-call best-effort success through its `Ok(bool)`.
pub trait InputBackend: Send + Sync {
    /// Returns whether the key with the given code is currently held down
    fn is_key_pressed(&self, code: KeyCode) -> InputResult<bool>;

    /// Returns the current on-screen cursor position
    fn cursor_position(&self) -> InputResult<PathPoint>;

    /// Moves the cursor, returning `false` if the write was refused
    ///
    /// A refused write is best-effort: callers log and continue with the
    /// remaining path rather than aborting.
    fn set_cursor_position(&self, point: PathPoint) -> InputResult<bool>;

    /// Emits a synthetic mouse button press or release
    fn send_button(&self, button: MouseButton, pressed: bool) -> InputResult<()>;

    /// Emits a synthetic key press or release
    fn send_key(&self, code: KeyCode, pressed: bool) -> InputResult<()>;

    /// Emits a synthetic scroll by the given amount
    fn send_scroll(&self, amount: i32) -> InputResult<()>;
}

/// In-memory [`InputBackend`] for tests and examples
///
/// Key state is scripted through [`press`](MockBackend::press) and
/// [`release`](MockBackend::release); every outgoing call is recorded so
/// tests can assert on exact sequences.
#[derive(Debug, Default)]
pub struct MockBackend {
    pressed: Mutex<HashSet<KeyCode>>,
    cursor: Mutex<PathPoint>,
    cursor_trace: Mutex<Vec<PathPoint>>,
    button_events: Mutex<Vec<(MouseButton, bool)>>,
    key_events: Mutex<Vec<(KeyCode, bool)>>,
    scroll_events: Mutex<Vec<i32>>,
    fail_key_queries: AtomicBool,
    fail_cursor_calls: AtomicBool,
    reject_cursor_writes: AtomicBool,
    writes_before_failure: Mutex<Option<usize>>,
}

impl MockBackend {
    /// Creates a mock with no keys held and the cursor at the origin
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a key as held down
    pub fn press(&self, code: KeyCode) {
        self.pressed.lock().insert(code);
    }

    /// Marks a key as released
    pub fn release(&self, code: KeyCode) {
        self.pressed.lock().remove(&code);
    }

    /// Places the cursor without recording a trace entry
    pub fn set_cursor(&self, point: PathPoint) {
        *self.cursor.lock() = point;
    }

    /// Every cursor position written through the backend, in order
    pub fn cursor_trace(&self) -> Vec<PathPoint> {
        self.cursor_trace.lock().clone()
    }

    /// Every button event sent, in order
    pub fn button_events(&self) -> Vec<(MouseButton, bool)> {
        self.button_events.lock().clone()
    }

    /// Every synthetic key event sent, in order
    pub fn key_events(&self) -> Vec<(KeyCode, bool)> {
        self.key_events.lock().clone()
    }

    /// Every scroll amount sent, in order
    pub fn scroll_events(&self) -> Vec<i32> {
        self.scroll_events.lock().clone()
    }

    /// When set, `is_key_pressed` fails as backend-unavailable
    pub fn fail_key_queries(&self, fail: bool) {
        self.fail_key_queries.store(fail, Ordering::SeqCst);
    }

    /// When set, cursor reads and writes fail as backend-unavailable
    pub fn fail_cursor_calls(&self, fail: bool) {
        self.fail_cursor_calls.store(fail, Ordering::SeqCst);
    }

    /// When set, cursor writes report best-effort refusal (`Ok(false)`)
    pub fn reject_cursor_writes(&self, reject: bool) {
        self.reject_cursor_writes.store(reject, Ordering::SeqCst);
    }

    /// Lets the next `count` cursor writes succeed, then fails hard
    pub fn fail_cursor_after(&self, count: usize) {
        *self.writes_before_failure.lock() = Some(count);
    }
}

impl InputBackend for MockBackend {
    fn is_key_pressed(&self, code: KeyCode) -> InputResult<bool> {
        if self.fail_key_queries.load(Ordering::SeqCst) {
            return Err(InputError::backend("key state query refused"));
        }
        Ok(self.pressed.lock().contains(&code))
    }

    fn cursor_position(&self) -> InputResult<PathPoint> {
        if self.fail_cursor_calls.load(Ordering::SeqCst) {
            return Err(InputError::backend("cursor query refused"));
        }
        Ok(*self.cursor.lock())
    }

    fn set_cursor_position(&self, point: PathPoint) -> InputResult<bool> {
        if self.fail_cursor_calls.load(Ordering::SeqCst) {
            return Err(InputError::backend("cursor write refused"));
        }
        if let Some(remaining) = self.writes_before_failure.lock().as_mut() {
            if *remaining == 0 {
                return Err(InputError::backend("cursor write refused"));
            }
            *remaining -= 1;
        }
        if self.reject_cursor_writes.load(Ordering::SeqCst) {
            return Ok(false);
        }
        *self.cursor.lock() = point;
        self.cursor_trace.lock().push(point);
        Ok(true)
    }

    fn send_button(&self, button: MouseButton, pressed: bool) -> InputResult<()> {
        self.button_events.lock().push((button, pressed));
        Ok(())
    }

    fn send_key(&self, code: KeyCode, pressed: bool) -> InputResult<()> {
        self.key_events.lock().push((code, pressed));
        Ok(())
    }

    fn send_scroll(&self, amount: i32) -> InputResult<()> {
        self.scroll_events.lock().push(amount);
        Ok(())
    }
}
