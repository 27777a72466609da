use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Logical keys the simulation polls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
}

impl Key {
    /// Map a browser `KeyboardEvent.code` to a logical key.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ArrowLeft" => Some(Key::Left),
            "ArrowRight" => Some(Key::Right),
            "ArrowUp" => Some(Key::Up),
            "ArrowDown" => Some(Key::Down),
            _ => None,
        }
    }
}

/// Answers "is this key held right now". Polled, never event-driven.
pub trait InputSource {
    fn is_pressed(&self, key: Key) -> bool;
}

/// Held-key set, fed by whatever captures keyboard events.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyState {
    held: HashSet<Key>,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Key state with `keys` already held.
    pub fn holding(keys: &[Key]) -> Self {
        Self {
            held: keys.iter().copied().collect(),
        }
    }

    pub fn press(&mut self, key: Key) {
        self.held.insert(key);
    }

    pub fn release(&mut self, key: Key) {
        self.held.remove(&key);
    }

    /// Register a key-down by browser code. Unmapped codes are ignored.
    pub fn on_key_down(&mut self, code: &str) {
        if let Some(key) = Key::from_code(code) {
            self.press(key);
        }
    }

    /// Register a key-up by browser code. Unmapped codes are ignored.
    pub fn on_key_up(&mut self, code: &str) {
        if let Some(key) = Key::from_code(code) {
            self.release(key);
        }
    }

    /// Release everything (e.g. on window blur).
    pub fn clear(&mut self) {
        self.held.clear();
    }
}

impl InputSource for KeyState {
    fn is_pressed(&self, key: Key) -> bool {
        self.held.contains(&key)
    }
}
