//! Keyboard model shared by the simulation and the platform backends

use std::collections::HashSet;

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Keys the game cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    A,
    D,
    W,
    S,
    Space,
    Left,
    Right,
    Up,
    Down,
    Enter,
    Escape,
}

impl Key {
    /// Map a DOM `KeyboardEvent.code` to a key
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "KeyA" => Some(Key::A),
            "KeyD" => Some(Key::D),
            "KeyW" => Some(Key::W),
            "KeyS" => Some(Key::S),
            "Space" => Some(Key::Space),
            "ArrowLeft" => Some(Key::Left),
            "ArrowRight" => Some(Key::Right),
            "ArrowUp" => Some(Key::Up),
            "ArrowDown" => Some(Key::Down),
            "Enter" | "NumpadEnter" => Some(Key::Enter),
            "Escape" => Some(Key::Escape),
            _ => None,
        }
    }
}

/// A human's controls: four movement keys and one reserved action key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBindings {
    pub left: Key,
    pub right: Key,
    pub up: Key,
    pub down: Key,
    /// Not used by movement
    pub action: Key,
}

impl KeyBindings {
    pub const WASD: Self = Self {
        left: Key::A,
        right: Key::D,
        up: Key::W,
        down: Key::S,
        action: Key::Space,
    };

    pub const ARROWS: Self = Self {
        left: Key::Left,
        right: Key::Right,
        up: Key::Up,
        down: Key::Down,
        action: Key::Enter,
    };

    /// All five keys in binding order
    pub fn keys(&self) -> [Key; 5] {
        [self.left, self.right, self.up, self.down, self.action]
    }

    /// Rejects bindings that reuse a key or bind the quit key
    pub fn validate(&self) -> Result<(), ConfigError> {
        let keys = self.keys();
        for (i, key) in keys.iter().enumerate() {
            if *key == Key::Escape {
                return Err(ConfigError::ReservedKey(*key));
            }
            if keys[i + 1..].contains(key) {
                return Err(ConfigError::DuplicateKey(*key));
            }
        }
        Ok(())
    }

    /// Net one-step displacement for the pressed keys.
    ///
    /// Each direction is checked on its own, so diagonals add up and opposite
    /// keys cancel.
    pub fn displacement(&self, pressed: &PressedKeys) -> IVec2 {
        let mut delta = IVec2::ZERO;
        if pressed.is_pressed(self.left) {
            delta.x -= 1;
        }
        if pressed.is_pressed(self.right) {
            delta.x += 1;
        }
        if pressed.is_pressed(self.up) {
            delta.y -= 1;
        }
        if pressed.is_pressed(self.down) {
            delta.y += 1;
        }
        delta
    }
}

/// Snapshot of which keys are currently held
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PressedKeys {
    keys: HashSet<Key>,
}

impl PressedKeys {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: Key) {
        self.keys.insert(key);
    }

    pub fn release(&mut self, key: Key) {
        self.keys.remove(&key);
    }

    pub fn is_pressed(&self, key: Key) -> bool {
        self.keys.contains(&key)
    }

    pub fn clear(&mut self) {
        self.keys.clear();
    }
}

impl FromIterator<Key> for PressedKeys {
    fn from_iter<I: IntoIterator<Item = Key>>(iter: I) -> Self {
        Self {
            keys: iter.into_iter().collect(),
        }
    }
}
