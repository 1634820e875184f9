//! Key identifiers and per-player bindings

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    W,
    A,
    S,
    D,
    Up,
    Down,
    Left,
    Right,
    Space,
    Escape,
}

impl Key {
    /// Map a DOM `KeyboardEvent.code` to a key
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "KeyW" => Some(Key::W),
            "KeyA" => Some(Key::A),
            "KeyS" => Some(Key::S),
            "KeyD" => Some(Key::D),
            "ArrowUp" => Some(Key::Up),
            "ArrowDown" => Some(Key::Down),
            "ArrowLeft" => Some(Key::Left),
            "ArrowRight" => Some(Key::Right),
            "Space" => Some(Key::Space),
            "Escape" => Some(Key::Escape),
            _ => None,
        }
    }
}

/// Set of keys currently held down
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PressedKeys(HashSet<Key>);

impl PressedKeys {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: Key) {
        self.0.insert(key);
    }

    pub fn release(&mut self, key: Key) {
        self.0.remove(&key);
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    #[inline]
    pub fn is_pressed(&self, key: Key) -> bool {
        self.0.contains(&key)
    }
}

impl FromIterator<Key> for PressedKeys {
    fn from_iter<T: IntoIterator<Item = Key>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// The four directional actions of one player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBindings {
    pub left: Key,
    pub right: Key,
    pub up: Key,
    pub down: Key,
}

impl KeyBindings {
    pub const WASD: Self = Self {
        left: Key::A,
        right: Key::D,
        up: Key::W,
        down: Key::S,
    };

    pub const ARROWS: Self = Self {
        left: Key::Left,
        right: Key::Right,
        up: Key::Up,
        down: Key::Down,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code() {
        assert_eq!(Key::from_code("KeyA"), Some(Key::A));
        assert_eq!(Key::from_code("ArrowRight"), Some(Key::Right));
        assert_eq!(Key::from_code("Space"), Some(Key::Space));
        assert_eq!(Key::from_code("KeyQ"), None);
    }

    #[test]
    fn test_pressed_keys() {
        let mut keys: PressedKeys = [Key::W, Key::Left].into_iter().collect();
        assert!(keys.is_pressed(Key::W));
        assert!(!keys.is_pressed(Key::S));
        keys.release(Key::W);
        assert!(!keys.is_pressed(Key::W));
        keys.press(Key::S);
        assert!(keys.is_pressed(Key::S));
    }
}
