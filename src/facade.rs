//! Composed entry point over the mouse, keyboard, and listener engines
//!
//! [`VirtualInput`] wires one [`VirtualMouse`], one [`VirtualKeyboard`],
//! and one [`KeyboardListener`] to a shared backend and exposes thin
//! delegating helpers. Pure composition — every behavior lives in the
//! component modules.

use std::sync::Arc;

use crate::backend::InputBackend;
use crate::error::InputResult;
use crate::keyboard::VirtualKeyboard;
use crate::keys::KeyCode;
use crate::listener::KeyboardListener;
use crate::motion::{MovementStrategy, PathPoint};
use crate::mouse::{MouseButton, VirtualMouse};

/// One keyboard/mouse driver and one key observer over a shared backend
pub struct VirtualInput {
    mouse: VirtualMouse,
    keyboard: VirtualKeyboard,
    listener: KeyboardListener,
}

impl VirtualInput {
    /// Composes the three engines over one backend
    pub fn new(backend: Arc<dyn InputBackend>) -> Self {
        Self {
            mouse: VirtualMouse::new(Arc::clone(&backend)),
            keyboard: VirtualKeyboard::new(Arc::clone(&backend)),
            listener: KeyboardListener::new(backend),
        }
    }

    /// The pointer engine
    pub fn mouse(&self) -> &VirtualMouse {
        &self.mouse
    }

    /// The synthetic keyboard
    pub fn keyboard(&self) -> &VirtualKeyboard {
        &self.keyboard
    }

    /// The key state observer
    pub fn listener(&self) -> &KeyboardListener {
        &self.listener
    }

    /// Mutable access to the key state observer
    pub fn listener_mut(&mut self) -> &mut KeyboardListener {
        &mut self.listener
    }

    /// Moves the pointer, see [`VirtualMouse::move_to`]
    pub async fn move_to(
        &self,
        target: PathPoint,
        strategy: MovementStrategy,
    ) -> InputResult<Vec<PathPoint>> {
        self.mouse.move_to(target, strategy).await
    }

    /// Clicks a button, see [`VirtualMouse::click`]
    pub async fn click(&self, button: MouseButton) -> InputResult<()> {
        self.mouse.click(button).await
    }

    /// Double-clicks a button, see [`VirtualMouse::double_click`]
    pub async fn double_click(&self, button: MouseButton) -> InputResult<()> {
        self.mouse.double_click(button).await
    }

    /// Scrolls by the given amount
    pub fn scroll(&self, amount: i32) -> InputResult<()> {
        self.mouse.scroll(amount)
    }

    /// Performs a complete key press, see [`VirtualKeyboard::press_key`]
    pub async fn press_key(&self, code: KeyCode) -> InputResult<()> {
        self.keyboard.press_key(code).await
    }

    /// Starts the key observation session
    pub fn start_listening(&mut self) {
        self.listener.start();
    }

    /// Stops the key observation session and waits for it to end
    pub async fn stop_listening(&mut self) {
        self.listener.stop().await;
    }
}
