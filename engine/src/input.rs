use std::collections::HashSet;

use winit::event::{ElementState, VirtualKeyCode};

/// Keyboard queries a game makes once per frame.
pub trait KeyboardState {
    /// The key is physically held down this frame.
    fn is_key_down(&self, key: VirtualKeyCode) -> bool;

    /// The key went down since the previous frame (OS auto-repeat does not count).
    fn is_key_just_pressed(&self, key: VirtualKeyCode) -> bool;

    fn is_shift_down(&self) -> bool {
        self.is_key_down(VirtualKeyCode::LShift) || self.is_key_down(VirtualKeyCode::RShift)
    }
}

/// Keyboard snapshot for a single frame.
///
/// `keys_down` persists across frames; `keys_pressed` / `keys_released` are edges and are
/// cleared by [`InputFrame::end_frame`] after the game has seen them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputFrame {
    pub keys_down: HashSet<VirtualKeyCode>,
    pub keys_pressed: HashSet<VirtualKeyCode>,
    pub keys_released: HashSet<VirtualKeyCode>,
}

impl InputFrame {
    /// Folds a window keyboard event into the frame.
    pub fn apply(&mut self, key: VirtualKeyCode, state: ElementState) {
        match state {
            ElementState::Pressed => self.press(key),
            ElementState::Released => self.release(key),
        }
    }

    pub fn press(&mut self, key: VirtualKeyCode) {
        // Auto-repeat delivers repeated `Pressed` events; only the first one is an edge.
        if self.keys_down.insert(key) {
            self.keys_pressed.insert(key);
        }
    }

    pub fn release(&mut self, key: VirtualKeyCode) {
        if self.keys_down.remove(&key) {
            self.keys_released.insert(key);
        }
    }

    /// Releases every held key, e.g. when the window loses focus.
    pub fn release_all(&mut self) {
        let held: Vec<_> = self.keys_down.drain().collect();
        self.keys_released.extend(held);
    }

    pub fn end_frame(&mut self) {
        self.keys_pressed.clear();
        self.keys_released.clear();
    }
}

impl KeyboardState for InputFrame {
    fn is_key_down(&self, key: VirtualKeyCode) -> bool {
        self.keys_down.contains(&key)
    }

    fn is_key_just_pressed(&self, key: VirtualKeyCode) -> bool {
        self.keys_pressed.contains(&key)
    }
}
