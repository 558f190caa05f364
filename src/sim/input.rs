//! Held-key state fed by keyboard events

use serde::{Deserialize, Serialize};

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Left,
    Right,
    Fire,
}

/// Keyboard state between ticks.
///
/// Movement keys are level-triggered (held or not). Fire is edge-triggered:
/// each released -> held transition queues exactly one shot, and auto-repeat
/// key-down events while the key is already held are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputState {
    left: bool,
    right: bool,
    fire: bool,
    /// Shots queued since the last tick consumed them
    pending_shots: u32,
}

impl InputState {
    pub fn press(&mut self, key: Key) {
        match key {
            Key::Left => self.left = true,
            Key::Right => self.right = true,
            Key::Fire => {
                if !self.fire {
                    self.fire = true;
                    self.pending_shots += 1;
                }
            }
        }
    }

    pub fn release(&mut self, key: Key) {
        match key {
            Key::Left => self.left = false,
            Key::Right => self.right = false,
            Key::Fire => self.fire = false,
        }
    }

    #[inline]
    pub fn is_held(&self, key: Key) -> bool {
        match key {
            Key::Left => self.left,
            Key::Right => self.right,
            Key::Fire => self.fire,
        }
    }

    /// Drain queued shots
    pub fn take_shots(&mut self) -> u32 {
        std::mem::take(&mut self.pending_shots)
    }

    /// Forget everything (e.g. when the page loses focus)
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
