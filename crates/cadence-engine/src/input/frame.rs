use std::collections::HashSet;

use super::types::Key;

/// Key transitions that happened since the previous iteration.
#[derive(Debug, Default)]
pub struct InputFrame {
    pub keys_pressed: HashSet<Key>,
    pub keys_released: HashSet<Key>,
}

impl InputFrame {
    /// True once per physical press: the iteration after the key went down.
    pub fn was_key_pressed(&self, key: Key) -> bool {
        self.keys_pressed.contains(&key)
    }

    pub fn was_key_released(&self, key: Key) -> bool {
        self.keys_released.contains(&key)
    }

    pub fn clear(&mut self) {
        self.keys_pressed.clear();
        self.keys_released.clear();
    }
}
