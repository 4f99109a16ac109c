//! Synthetic key event passthroughs
//!
//! [`VirtualKeyboard`] is a thin layer over the backend's key injection:
//! raw down/up sends plus a composed press (down, hold, up).

use std::sync::Arc;
use std::time::Duration;

use crate::backend::InputBackend;
use crate::error::InputResult;
use crate::keys::KeyCode;

/// Configuration for synthetic key presses
#[derive(Debug, Clone)]
pub struct KeyboardConfig {
    /// How long a key stays down within a composed press
    pub key_hold: Duration,
}

impl Default for KeyboardConfig {
    fn default() -> Self {
        Self {
            key_hold: Duration::from_millis(10),
        }
    }
}

/// Sends synthetic key events through an [`InputBackend`]
pub struct VirtualKeyboard {
    backend: Arc<dyn InputBackend>,
    config: KeyboardConfig,
}

impl VirtualKeyboard {
    /// Creates a keyboard with the default configuration
    pub fn new(backend: Arc<dyn InputBackend>) -> Self {
        Self::with_config(backend, KeyboardConfig::default())
    }

    /// Creates a keyboard with a custom configuration
    pub fn with_config(backend: Arc<dyn InputBackend>, config: KeyboardConfig) -> Self {
        Self { backend, config }
    }

    /// Sends a raw key press or release
    pub fn send_key(&self, code: KeyCode, pressed: bool) -> InputResult<()> {
        self.backend.send_key(code, pressed)
    }

    /// Presses a key down
    pub fn key_down(&self, code: KeyCode) -> InputResult<()> {
        self.send_key(code, true)
    }

    /// Releases a key
    pub fn key_up(&self, code: KeyCode) -> InputResult<()> {
        self.send_key(code, false)
    }

    /// Performs a complete press: down, hold, up
    pub async fn press_key(&self, code: KeyCode) -> InputResult<()> {
        self.key_down(code)?;
        tokio::time::sleep(self.config.key_hold).await;
        self.key_up(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyboard_config_default() {
        assert_eq!(KeyboardConfig::default().key_hold, Duration::from_millis(10));
    }
}
