//! Pointer driving: path replay plus button and scroll passthroughs
//!
//! [`VirtualMouse`] reads the cursor position from the backend at call
//! time, generates a path with the chosen [`MovementStrategy`], and writes
//! every point back at a fixed cadence. Replay blocks the calling context
//! for the full duration of the move; there is no mid-path cancellation —
//! callers wanting that decompose the move into smaller calls.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use virtual_input::{MockBackend, MouseButton, MovementStrategy, PathPoint, VirtualMouse};
//!
//! # async fn example() -> virtual_input::InputResult<()> {
//! let backend = Arc::new(MockBackend::new());
//! let mouse = VirtualMouse::new(backend);
//!
//! mouse.move_to(PathPoint::new(500, 300), MovementStrategy::SineWave).await?;
//! mouse.click(MouseButton::Left).await?;
//! # Ok(())
//! # }
//! ```

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::backend::InputBackend;
use crate::error::InputResult;
use crate::motion::{generate_path, MovementStrategy, PathPoint, DEFAULT_STEPS};

/// Mouse buttons the backend can synthesize
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    /// Primary button
    Left,
    /// Secondary / context-menu button
    Right,
}

impl fmt::Display for MouseButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MouseButton::Left => write!(f, "left"),
            MouseButton::Right => write!(f, "right"),
        }
    }
}

/// Configuration for pointer behavior
///
/// Defaults reproduce the stock cadence: 100 steps at 1 ms apiece, 10 ms
/// button hold, 50 ms between the clicks of a double-click.
#[derive(Debug, Clone)]
pub struct MouseConfig {
    /// Intermediate steps per generated path
    pub steps: u32,
    /// Pause between consecutive cursor writes
    pub step_delay: Duration,
    /// How long a button stays down within a click
    pub click_hold: Duration,
    /// Gap between the two clicks of a double-click
    pub double_click_gap: Duration,
}

impl Default for MouseConfig {
    fn default() -> Self {
        Self {
            steps: DEFAULT_STEPS,
            step_delay: Duration::from_millis(1),
            click_hold: Duration::from_millis(10),
            double_click_gap: Duration::from_millis(50),
        }
    }
}

/// Drives the on-screen pointer through an [`InputBackend`]
pub struct VirtualMouse {
    backend: Arc<dyn InputBackend>,
    config: MouseConfig,
}

impl VirtualMouse {
    /// Creates a mouse with the default configuration
    pub fn new(backend: Arc<dyn InputBackend>) -> Self {
        Self::with_config(backend, MouseConfig::default())
    }

    /// Creates a mouse with a custom configuration
    pub fn with_config(backend: Arc<dyn InputBackend>, config: MouseConfig) -> Self {
        Self { backend, config }
    }

    /// Returns the active configuration
    pub fn config(&self) -> &MouseConfig {
        &self.config
    }

    /// Moves the pointer to `target` under the given strategy
    ///
    /// `Instant` issues a single cursor write with no delay. Every other
    /// strategy reads the current position as the path start, then writes
    /// each generated point in order with a fixed pause in between. A
    /// refused write (`Ok(false)`) is logged and skipped; a backend error
    /// aborts the remaining steps.
    ///
    /// Returns the generated path.
    pub async fn move_to(
        &self,
        target: PathPoint,
        strategy: MovementStrategy,
    ) -> InputResult<Vec<PathPoint>> {
        if strategy == MovementStrategy::Instant {
            debug!(%target, "instant cursor jump");
            if !self.backend.set_cursor_position(target)? {
                trace!(%target, "cursor write refused, continuing");
            }
            return Ok(vec![target]);
        }

        let start = self.backend.cursor_position()?;
        let path = generate_path(start, target, strategy, self.config.steps);
        debug!(%start, %target, ?strategy, points = path.len(), "replaying pointer path");

        for point in &path {
            if !self.backend.set_cursor_position(*point)? {
                trace!(%point, "cursor write refused, continuing");
            }
            tokio::time::sleep(self.config.step_delay).await;
        }

        Ok(path)
    }

    /// Presses a button down without releasing it
    pub fn button_down(&self, button: MouseButton) -> InputResult<()> {
        self.backend.send_button(button, true)
    }

    /// Releases a button
    pub fn button_up(&self, button: MouseButton) -> InputResult<()> {
        self.backend.send_button(button, false)
    }

    /// Clicks a button at the current position: down, hold, up
    pub async fn click(&self, button: MouseButton) -> InputResult<()> {
        self.button_down(button)?;
        tokio::time::sleep(self.config.click_hold).await;
        self.button_up(button)
    }

    /// Performs two clicks separated by the double-click gap
    pub async fn double_click(&self, button: MouseButton) -> InputResult<()> {
        self.click(button).await?;
        tokio::time::sleep(self.config.double_click_gap).await;
        self.click(button).await
    }

    /// Scrolls by the given amount
    pub fn scroll(&self, amount: i32) -> InputResult<()> {
        self.backend.send_scroll(amount)
    }
}
