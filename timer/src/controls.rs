use engine::input::KeyboardState;
use winit::event::VirtualKeyCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Enter. Bound but intentionally does nothing.
    Confirm,
    /// Backspace: deadline becomes "now".
    Reset,
    VolumeUp,
    VolumeDown,
    /// Left: deadline one second earlier.
    RemoveSecond,
    /// Right: deadline one second later.
    AddSecond,
}

impl Control {
    pub const ALL: [Control; 6] = [
        Control::Confirm,
        Control::Reset,
        Control::VolumeUp,
        Control::VolumeDown,
        Control::RemoveSecond,
        Control::AddSecond,
    ];

    pub fn key(self) -> VirtualKeyCode {
        match self {
            Control::Confirm => VirtualKeyCode::Return,
            Control::Reset => VirtualKeyCode::Back,
            Control::VolumeUp => VirtualKeyCode::Up,
            Control::VolumeDown => VirtualKeyCode::Down,
            Control::RemoveSecond => VirtualKeyCode::Left,
            Control::AddSecond => VirtualKeyCode::Right,
        }
    }

    /// Whether holding Shift turns this control into "fire every frame while held".
    pub fn repeats_with_shift(self) -> bool {
        matches!(
            self,
            Control::VolumeUp | Control::VolumeDown | Control::RemoveSecond | Control::AddSecond
        )
    }

    /// Whether the control fires this frame.
    pub fn fired<K: KeyboardState + ?Sized>(self, keys: &K) -> bool {
        if self.repeats_with_shift() && keys.is_shift_down() {
            keys.is_key_down(self.key())
        } else {
            keys.is_key_just_pressed(self.key())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine::input::InputFrame;

    fn input_frame_for_keys(pressed: &[VirtualKeyCode], down: &[VirtualKeyCode]) -> InputFrame {
        let mut input = InputFrame::default();
        for &key in down {
            input.keys_down.insert(key);
        }
        for &key in pressed {
            input.keys_pressed.insert(key);
        }
        input
    }

    #[test]
    fn single_shot_without_shift() {
        let held = input_frame_for_keys(&[], &[VirtualKeyCode::Left]);
        assert!(!Control::RemoveSecond.fired(&held));

        let pressed = input_frame_for_keys(&[VirtualKeyCode::Left], &[VirtualKeyCode::Left]);
        assert!(Control::RemoveSecond.fired(&pressed));
    }

    #[test]
    fn shift_makes_held_keys_repeat() {
        let held = input_frame_for_keys(&[], &[VirtualKeyCode::LShift, VirtualKeyCode::Up]);
        assert!(Control::VolumeUp.fired(&held));
        assert!(!Control::VolumeDown.fired(&held));
    }

    #[test]
    fn reset_ignores_shift_repeat() {
        let held = input_frame_for_keys(&[], &[VirtualKeyCode::RShift, VirtualKeyCode::Back]);
        assert!(!Control::Reset.fired(&held));
    }

    #[test]
    fn every_control_has_a_distinct_key() {
        let mut keys: Vec<_> = Control::ALL.iter().map(|c| c.key()).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), Control::ALL.len());
    }
}
