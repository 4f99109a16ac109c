//! # virtual-input
//!
//! A desktop input simulation and observation library.
//!
//! virtual-input polls physical key state into an edge-triggered,
//! timestamped event stream, and drives the on-screen pointer along
//! parametrically generated paths before issuing synthetic button and key
//! events. All platform calls sit behind a small capability trait, so the
//! engines run unchanged against any backend — including the in-tree mock.
//!
//! ## Features
//!
//! - **Key State Poller**: background sampling over the whole key code
//!   space, emitting Down/Up events with inter-event timing
//! - **Motion Path Generator**: eleven interpolation laws, from instant
//!   jumps and scalar easing to Bezier and Hermite/Catmull-Rom splines
//! - **Command Facade**: one composed entry point for moving, clicking,
//!   scrolling, key injection, and key observation
//! - **Backend Abstraction**: platform calls isolated behind
//!   [`InputBackend`]; no foreign struct layouts in the core
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use virtual_input::{MockBackend, MouseButton, MovementStrategy, PathPoint, VirtualInput};
//!
//! #[tokio::main]
//! async fn main() -> virtual_input::InputResult<()> {
//!     let backend = Arc::new(MockBackend::new());
//!     let mut input = VirtualInput::new(backend);
//!
//!     input.listener().on_output(|line| println!("{line}"));
//!     input.start_listening();
//!
//!     input.move_to(PathPoint::new(640, 360), MovementStrategy::Bezier).await?;
//!     input.click(MouseButton::Left).await?;
//!
//!     input.stop_listening().await;
//!     Ok(())
//! }
//! ```
//!
//! ## Module Overview
//!
//! - [`backend`]: the [`InputBackend`] capability trait and [`MockBackend`]
//! - [`keys`]: key code tables, ignored set, and name resolution
//! - [`listener`]: edge-triggered key state observation
//! - [`motion`]: pure path generation under every movement strategy
//! - [`mouse`]: pointer driving and button/scroll passthroughs
//! - [`keyboard`]: synthetic key event passthroughs
//! - [`facade`]: the composed [`VirtualInput`] entry point

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Full version string with name
pub const FULL_VERSION: &str = concat!(env!("CARGO_PKG_NAME"), " v", env!("CARGO_PKG_VERSION"));

// ============================================================================
// Module Exports
// ============================================================================

/// Capability interface to the platform input layer, plus the mock backend.
pub mod backend;

/// Error types shared by every input operation.
pub mod error;

/// Composed entry point over the mouse, keyboard, and listener engines.
pub mod facade;

/// Synthetic key event passthroughs.
pub mod keyboard;

/// Key code tables: the ignored set and the name resolver.
pub mod keys;

/// Edge-triggered key state observation.
pub mod listener;

/// Interpolation strategies for pointer motion paths.
pub mod motion;

/// Pointer driving: path replay plus button and scroll passthroughs.
pub mod mouse;

// ============================================================================
// Re-exports for Convenience
// ============================================================================

pub use backend::{InputBackend, MockBackend};
pub use error::{InputError, InputResult};
pub use facade::VirtualInput;
pub use keyboard::{KeyboardConfig, VirtualKeyboard};
pub use keys::KeyCode;
pub use listener::{KeyEvent, KeyTransition, KeyboardListener, ListenerConfig};
pub use motion::{generate_path, MovementStrategy, PathPoint, DEFAULT_STEPS};
pub use mouse::{MouseButton, MouseConfig, VirtualMouse};

// ============================================================================
// Prelude Module
// ============================================================================

/// Prelude module for convenient imports.
///
/// ```rust
/// use virtual_input::prelude::*;
/// ```
pub mod prelude {
    pub use crate::backend::InputBackend;
    pub use crate::facade::VirtualInput;
    pub use crate::listener::{KeyEvent, KeyboardListener};
    pub use crate::motion::{MovementStrategy, PathPoint};
    pub use crate::mouse::{MouseButton, VirtualMouse};
    pub use crate::{FULL_VERSION, NAME, VERSION};
}
